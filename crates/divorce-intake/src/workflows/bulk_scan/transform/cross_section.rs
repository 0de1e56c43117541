use super::super::context::PipelineContext;
use super::super::decode::YES_NO;
use super::super::domain::{Application, ConditionalOrder, YesOrNo};
use super::super::StageError;

pub(crate) const EMAIL_ACCESS_WARNING: &str =
    "Please review respondent email access in the scanned form";
pub(crate) const EMAIL_ADDRESS_WARNING: &str =
    "Please review respondent email address in the scanned form";
pub(crate) const JOINT_SERVE_OUT_OF_UK_WARNING: &str =
    "Please review serve out of UK for joint application in the scanned form";
pub(crate) const LEGAL_REP_SOT_WARNING: &str =
    "Please review legal representative statement of truth in the scanned form";

/// Consistency checks that need more than one section, followed by the defaults every
/// paper case carries regardless of what was scanned.
pub(crate) fn validate_and_default(context: &mut PipelineContext) -> Result<(), StageError> {
    let sole = context.application_type()?.is_sole();

    let (respondent_email, address_overseas) = context
        .case
        .applicant2
        .as_ref()
        .map(|applicant| (applicant.email.is_some(), applicant.address_overseas))
        .ok_or(StageError::MissingSection("applicant2"))?;

    if sole {
        let email_access = YES_NO.decode(context.fields().get("respondentEmailAccess"));
        match (respondent_email, email_access) {
            (true, access) if access != Some(YesOrNo::Yes) => context.warn(EMAIL_ACCESS_WARNING),
            (false, Some(YesOrNo::Yes)) => context.warn(EMAIL_ADDRESS_WARNING),
            _ => {}
        }
    } else if address_overseas == Some(YesOrNo::Yes) {
        context.warn(JOINT_SERVE_OUT_OF_UK_WARNING);
    }

    let represented = context
        .case
        .applicant1
        .as_ref()
        .and_then(|applicant| applicant.solicitor_represented);
    let legal_rep_signed = context
        .case
        .paper_form_details
        .as_ref()
        .and_then(|details| details.applicant1_statement_of_truth.legal_rep_signing);
    if legal_rep_signed == Some(YesOrNo::Yes) && represented != Some(YesOrNo::Yes) {
        context.warn(LEGAL_REP_SOT_WARNING);
    }

    apply_defaults(context);
    Ok(())
}

fn apply_defaults(context: &mut PipelineContext) {
    let case = &mut context.case;

    case.conditional_order = Some(ConditionalOrder {
        applicant1_is_drafted: Some(YesOrNo::No),
        applicant1_is_submitted: Some(YesOrNo::No),
        applicant2_is_drafted: Some(YesOrNo::No),
        applicant2_is_submitted: Some(YesOrNo::No),
    });

    case.application
        .get_or_insert_with(Application::default)
        .new_paper_case = Some(YesOrNo::Yes);
    case.applicant1.get_or_insert_with(Default::default).offline = Some(YesOrNo::Yes);
    case.applicant2.get_or_insert_with(Default::default).offline = Some(YesOrNo::Yes);
    case.paper_form_details.get_or_insert_with(Default::default);
}
