use super::super::context::PipelineContext;
use super::super::decode::{
    assemble_address, decode_financial_order_for, STANDARD_ORDER_FOR, YES_NO, YES_OR_BOTH,
};
use super::super::domain::{Applicant, ContactDetailsType, Solicitor, YesOrNo};

pub(crate) const LEGAL_PROCEEDINGS_LABEL: &str = "Case Number(s):";

/// OCR field names and review messages for one party on the form.
pub(crate) struct PartyFields {
    pub first_name: &'static str,
    pub middle_name: &'static str,
    pub last_name: &'static str,
    pub married_name: &'static str,
    pub married_name_reason: &'static str,
    pub confidential_details: &'static str,
    pub address: AddressFields,
    pub phone: &'static str,
    pub email: &'static str,
    pub solicitor: &'static str,
    pub solicitor_name: &'static str,
    pub solicitor_firm: &'static str,
    pub solicitor_address: AddressFields,
    pub solicitor_dx: &'static str,
    pub solicitor_reference: &'static str,
    pub solicitor_phone: &'static str,
    pub solicitor_email: &'static str,
    pub financial_order: &'static str,
    pub financial_order_for: &'static str,
    pub court_cases: &'static str,
    pub court_case_numbers: &'static str,
    pub court_case_summary: &'static str,
    pub statement_of_truth: &'static str,
    pub legal_rep_statement_of_truth: &'static str,
    pub warnings: PartyWarnings,
}

pub(crate) struct AddressFields {
    pub building_and_street: &'static str,
    pub second_line: &'static str,
    pub town: &'static str,
    pub county: &'static str,
    pub country: &'static str,
    pub postcode: &'static str,
}

pub(crate) struct PartyWarnings {
    pub married_name: &'static str,
    pub confidential_details: &'static str,
    pub solicitor: &'static str,
    pub financial_order: &'static str,
    pub financial_order_for: &'static str,
    pub court_cases: &'static str,
}

pub(crate) const APPLICANT1: PartyFields = PartyFields {
    first_name: "soleOrApplicant1FirstName",
    middle_name: "soleOrApplicant1MiddleName",
    last_name: "soleOrApplicant1LastName",
    married_name: "soleOrApplicant1MarriedName",
    married_name_reason: "soleOrApplicant1MarriedNameReason",
    confidential_details: "soleOrApplicant1ConfidentialDetails",
    address: AddressFields {
        building_and_street: "soleOrApplicant1BuildingAndStreet",
        second_line: "soleOrApplicant1SecondLineOfAddress",
        town: "soleOrApplicant1Town",
        county: "soleOrApplicant1County",
        country: "soleOrApplicant1Country",
        postcode: "soleOrApplicant1Postcode",
    },
    phone: "soleOrApplicant1PhoneNo",
    email: "soleOrApplicant1Email",
    solicitor: "soleOrApplicant1Solicitor",
    solicitor_name: "soleOrApplicant1SolicitorName",
    solicitor_firm: "soleOrApplicant1SolicitorFirm",
    solicitor_address: AddressFields {
        building_and_street: "soleOrApplicant1SolicitorBuildingAndStreet",
        second_line: "soleOrApplicant1SolicitorSecondLineOfAddress",
        town: "soleOrApplicant1SolicitorTown",
        county: "soleOrApplicant1SolicitorCounty",
        country: "soleOrApplicant1SolicitorCountry",
        postcode: "soleOrApplicant1SolicitorPostcode",
    },
    solicitor_dx: "soleOrApplicant1SolicitorDX",
    solicitor_reference: "soleOrApplicant1SolicitorReference",
    solicitor_phone: "soleOrApplicant1SolicitorPhone",
    solicitor_email: "soleOrApplicant1SolicitorEmail",
    financial_order: "soleOrApplicant1FinancialOrder",
    financial_order_for: "soleOrApplicant1FinancialOrderFor",
    court_cases: "soleOrApplicant1ExistingCourtCases",
    court_case_numbers: "soleOrApplicant1ExistingCourtCaseNumbers",
    court_case_summary: "soleOrApplicant1SummaryOfExistingCourtCases",
    statement_of_truth: "soleOrApplicant1StatementOfTruth",
    legal_rep_statement_of_truth: "soleOrApplicant1LegalRepStatementOfTruth",
    warnings: PartyWarnings {
        married_name:
            "Please review applicant1 name different to marriage certificate in the scanned form",
        confidential_details: "Please review applicant1 confidential details in the scanned form",
        solicitor: "Please review applicant1 solicitor details in the scanned form",
        financial_order: "Please review applicant1 financial order in scanned form",
        financial_order_for: "Please review applicant1 financial order for in scanned form",
        court_cases:
            "Please review applicant1 existing or previous court cases in the scanned form",
    },
};

pub(crate) const APPLICANT2: PartyFields = PartyFields {
    first_name: "respondentOrApplicant2FirstName",
    middle_name: "respondentOrApplicant2MiddleName",
    last_name: "respondentOrApplicant2LastName",
    married_name: "respondentOrApplicant2MarriedName",
    married_name_reason: "respondentOrApplicant2MarriedNameReason",
    confidential_details: "respondentOrApplicant2ConfidentialDetails",
    address: AddressFields {
        building_and_street: "respondentOrApplicant2BuildingAndStreet",
        second_line: "respondentOrApplicant2SecondLineOfAddress",
        town: "respondentOrApplicant2Town",
        county: "respondentOrApplicant2County",
        country: "respondentOrApplicant2Country",
        postcode: "respondentOrApplicant2Postcode",
    },
    phone: "respondentOrApplicant2PhoneNo",
    email: "respondentOrApplicant2Email",
    solicitor: "respondentOrApplicant2Solicitor",
    solicitor_name: "respondentOrApplicant2SolicitorName",
    solicitor_firm: "respondentOrApplicant2SolicitorFirm",
    solicitor_address: AddressFields {
        building_and_street: "respondentOrApplicant2SolicitorBuildingAndStreet",
        second_line: "respondentOrApplicant2SolicitorSecondLineOfAddress",
        town: "respondentOrApplicant2SolicitorTown",
        county: "respondentOrApplicant2SolicitorCounty",
        country: "respondentOrApplicant2SolicitorCountry",
        postcode: "respondentOrApplicant2SolicitorPostcode",
    },
    solicitor_dx: "respondentOrApplicant2SolicitorDX",
    solicitor_reference: "respondentOrApplicant2SolicitorReference",
    solicitor_phone: "respondentOrApplicant2SolicitorPhone",
    solicitor_email: "respondentOrApplicant2SolicitorEmail",
    financial_order: "respondentOrApplicant2FinancialOrder",
    financial_order_for: "respondentOrApplicant2FinancialOrderFor",
    court_cases: "respondentOrApplicant2ExistingCourtCases",
    court_case_numbers: "respondentOrApplicant2ExistingCourtCaseNumbers",
    court_case_summary: "respondentOrApplicant2SummaryOfExistingCourtCases",
    statement_of_truth: "respondentOrApplicant2StatementOfTruth",
    legal_rep_statement_of_truth: "respondentOrApplicant2LegalRepStatementOfTruth",
    warnings: PartyWarnings {
        married_name:
            "Please review applicant2 name different to marriage certificate in the scanned form",
        confidential_details: "Please review applicant2 confidential details in the scanned form",
        solicitor: "Please review applicant2 solicitor details in the scanned form",
        financial_order: "Please review applicant2 financial order in scanned form",
        financial_order_for: "Please review applicant2 financial order for in scanned form",
        court_cases:
            "Please review applicant2 existing or previous court cases in the scanned form",
    },
};

/// Builds the applicant subtree shared by both parties. `country_override` replaces the
/// country sub-field before the address lines are joined.
pub(crate) fn build_applicant(
    context: &mut PipelineContext,
    party: &PartyFields,
    country_override: Option<&str>,
) -> Applicant {
    let mut applicant = Applicant {
        first_name: context.text(party.first_name),
        middle_name: context.text(party.middle_name),
        last_name: context.text(party.last_name),
        phone_number: context.text(party.phone),
        email: context.text(party.email),
        ..Applicant::default()
    };

    applicant.name_different_to_marriage_certificate = context.ternary(
        party.married_name,
        YES_NO,
        party.warnings.married_name,
    );
    if applicant.name_different_to_marriage_certificate == Some(YesOrNo::Yes) {
        applicant.name_change_reason = context.text(party.married_name_reason);
    }

    applicant.contact_details_type = context
        .ternary(
            party.confidential_details,
            YES_OR_BOTH,
            party.warnings.confidential_details,
        )
        .map(|confidential| match confidential {
            YesOrNo::Yes => ContactDetailsType::Private,
            YesOrNo::No => ContactDetailsType::Public,
        });

    applicant.address = address_from(context, &party.address, country_override, None);

    applicant.solicitor_represented =
        context.ternary(party.solicitor, YES_OR_BOTH, party.warnings.solicitor);
    if applicant.solicitor_represented == Some(YesOrNo::Yes) {
        applicant.solicitor = Some(Solicitor {
            name: context.text(party.solicitor_name),
            firm_name: context.text(party.solicitor_firm),
            address: address_from(
                context,
                &party.solicitor_address,
                None,
                Some(party.solicitor_dx),
            ),
            reference: context.text(party.solicitor_reference),
            phone: context.text(party.solicitor_phone),
            email: context.text(party.solicitor_email),
        });
    }

    apply_financial_order(context, party, &mut applicant);
    apply_legal_proceedings(context, party, &mut applicant);

    applicant.statement_of_truth = Some(YesOrNo::from_bool(
        context.flag(party.statement_of_truth),
    ));
    applicant.solicitor_statement_of_truth = Some(YesOrNo::from_bool(
        context.flag(party.legal_rep_statement_of_truth),
    ));

    applicant
}

fn address_from(
    context: &PipelineContext,
    fields: &AddressFields,
    country_override: Option<&str>,
    dx: Option<&str>,
) -> Option<String> {
    let country = match country_override {
        Some(country) => Some(country.to_string()),
        None => context.text(fields.country),
    };

    assemble_address(&[
        context.text(fields.building_and_street),
        context.text(fields.second_line),
        context.text(fields.town),
        context.text(fields.county),
        country,
        context.text(fields.postcode),
        dx.and_then(|field| context.text(field)),
    ])
}

fn apply_financial_order(
    context: &mut PipelineContext,
    party: &PartyFields,
    applicant: &mut Applicant,
) {
    applicant.financial_order = context.ternary(
        party.financial_order,
        YES_NO,
        party.warnings.financial_order,
    );
    applicant.financial_order_for = decode_financial_order_for(
        context.fields().get(party.financial_order_for),
        STANDARD_ORDER_FOR,
    );

    match applicant.financial_order {
        Some(YesOrNo::Yes) if applicant.financial_order_for.is_empty() => {
            context.warn(party.warnings.financial_order_for)
        }
        Some(YesOrNo::No) if !applicant.financial_order_for.is_empty() => {
            context.warn(party.warnings.financial_order)
        }
        _ => {}
    }
}

fn apply_legal_proceedings(
    context: &mut PipelineContext,
    party: &PartyFields,
    applicant: &mut Applicant,
) {
    applicant.legal_proceedings =
        context.ternary(party.court_cases, YES_NO, party.warnings.court_cases);

    if applicant.legal_proceedings == Some(YesOrNo::Yes) {
        let parts: Vec<String> = [
            Some(LEGAL_PROCEEDINGS_LABEL.to_string()),
            context.text(party.court_case_numbers),
            context.text(party.court_case_summary),
        ]
        .into_iter()
        .flatten()
        .collect();
        applicant.legal_proceedings_details = Some(parts.join(" "));
    }
}
