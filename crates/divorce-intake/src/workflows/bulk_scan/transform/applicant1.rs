use super::super::context::PipelineContext;
use super::super::StageError;
use super::applicant::{build_applicant, APPLICANT1};

pub(crate) fn transform_applicant1(context: &mut PipelineContext) -> Result<(), StageError> {
    let applicant = build_applicant(context, &APPLICANT1, None);
    context.case.applicant1 = Some(applicant);
    Ok(())
}
