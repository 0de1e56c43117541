use super::super::context::PipelineContext;
use super::super::decode::join_date_parts;
use super::super::domain::{PaperFormDetails, PaymentMethod, StatementOfTruthDetails, YesOrNo};
use super::super::StageError;

struct StatementOfTruthFields {
    signing: &'static str,
    legal_rep_signing: &'static str,
    date_day: &'static str,
    date_month: &'static str,
    date_year: &'static str,
    full_name: &'static str,
    firm_name: &'static str,
    position: &'static str,
}

const APPLICANT1_SOT: StatementOfTruthFields = StatementOfTruthFields {
    signing: "soleApplicantOrApplicant1Signing",
    legal_rep_signing: "legalRepSigning",
    date_day: "statementOfTruthDateDay",
    date_month: "statementOfTruthDateMonth",
    date_year: "statementOfTruthDateYear",
    full_name: "soleApplicantOrApplicant1OrLegalRepFullName",
    firm_name: "soleApplicantOrApplicant1LegalRepFirm",
    position: "legalRepPosition",
};

const APPLICANT2_SOT: StatementOfTruthFields = StatementOfTruthFields {
    signing: "applicant2Signing",
    legal_rep_signing: "applicant2LegalRepSigning",
    date_day: "applicant2StatementOfTruthDateDay",
    date_month: "applicant2StatementOfTruthDateMonth",
    date_year: "applicant2StatementOfTruthDateYear",
    full_name: "applicant2OrLegalRepFullName",
    firm_name: "applicant2LegalRepFirm",
    position: "applicant2LegalRepPosition",
};

pub(crate) fn transform_paper_form_details(
    context: &mut PipelineContext,
) -> Result<(), StageError> {
    let sole = context.application_type()?.is_sole();

    let details = PaperFormDetails {
        serve_by_post: Some(YesOrNo::from_bool(context.flag("respondentServePostOnly"))),
        applicant_will_serve: Some(YesOrNo::from_bool(
            context.flag("applicantWillServeApplication"),
        )),
        different_service_address: Some(YesOrNo::from_bool(
            context.flag("respondentDifferentServiceAddress"),
        )),
        applicant1_statement_of_truth: statement_of_truth(context, &APPLICANT1_SOT),
        applicant2_statement_of_truth: (!sole)
            .then(|| statement_of_truth(context, &APPLICANT2_SOT)),
        payment_method: payment_method(context),
        how_to_pay_email: context.text("howToPayEmail"),
    };

    context.case.paper_form_details = Some(details);
    Ok(())
}

fn statement_of_truth(
    context: &PipelineContext,
    fields: &StatementOfTruthFields,
) -> StatementOfTruthDetails {
    StatementOfTruthDetails {
        signing: Some(YesOrNo::from_bool(context.flag(fields.signing))),
        legal_rep_signing: Some(YesOrNo::from_bool(context.flag(fields.legal_rep_signing))),
        date: join_date_parts(&[
            context.text(fields.date_day),
            context.text(fields.date_month),
            context.text(fields.date_year),
        ]),
        full_name: context.text(fields.full_name),
        firm_name: context.text(fields.firm_name),
        position: context.text(fields.position),
    }
}

/// Phone wins when both payment boxes are ticked.
fn payment_method(context: &PipelineContext) -> Option<PaymentMethod> {
    if context.flag("debitCreditCardPaymentPhone") {
        Some(PaymentMethod::Phone)
    } else if context.flag("chequeOrPostalOrderPayment") {
        Some(PaymentMethod::ChequeOrPostalOrder)
    } else {
        None
    }
}
