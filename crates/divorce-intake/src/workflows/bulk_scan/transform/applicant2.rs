use super::super::context::PipelineContext;
use super::super::decode::YES_NO;
use super::super::domain::YesOrNo;
use super::super::StageError;
use super::applicant::{build_applicant, APPLICANT2};

pub(crate) const SERVE_OUT_OF_UK: &str = "serveOutOfUK";
pub(crate) const SERVE_OUT_OF_UK_WARNING: &str =
    "Please review serve out of UK in the scanned form";
const UK: &str = "UK";

pub(crate) fn transform_applicant2(context: &mut PipelineContext) -> Result<(), StageError> {
    // `both` is not a valid answer here, unlike the confidentiality and solicitor questions.
    let serve_out_of_uk = context.ternary(SERVE_OUT_OF_UK, YES_NO, SERVE_OUT_OF_UK_WARNING);

    let country_override = match (serve_out_of_uk, context.text(APPLICANT2.address.country)) {
        (Some(YesOrNo::No), Some(country)) if !country.eq_ignore_ascii_case(UK) => {
            context.warn(format!(
                "Please review respondent/applicant2 address country in the scanned form, changed from {country} to {UK}"
            ));
            Some(UK)
        }
        _ => None,
    };

    let mut applicant = build_applicant(context, &APPLICANT2, country_override);
    applicant.address_overseas = serve_out_of_uk;
    context.case.applicant2 = Some(applicant);
    Ok(())
}
