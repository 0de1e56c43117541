use chrono::NaiveDate;

use super::super::context::PipelineContext;
use super::super::decode::YES_NO;
use super::super::domain::{MarriageDetails, YesOrNo};
use super::super::StageError;

pub(crate) const MARRIAGE_OUTSIDE_UK_WARNING: &str =
    "Please review marriage outside UK in the scanned form";
pub(crate) const WITHOUT_CERTIFICATE_WARNING: &str =
    "Please review application without marriage certificate in the scanned form";
pub(crate) const CERTIFICATE_IN_ENGLISH_WARNING: &str =
    "Please review marriage certificate in English in the scanned form";
pub(crate) const TRANSLATION_WARNING: &str =
    "Please review marriage certificate translation in the scanned form";
pub(crate) const MARRIAGE_DATE_WARNING: &str = "Please review marriage date in the scanned form";

pub(crate) fn transform_marriage_details(
    context: &mut PipelineContext,
) -> Result<(), StageError> {
    let married_in_uk = married_in_uk(context);
    let without_certificate = context.ternary(
        "makingAnApplicationWithoutCertificate",
        YES_NO,
        WITHOUT_CERTIFICATE_WARNING,
    );
    let certificate_in_english = context.ternary(
        "marriageCertificateInEnglish",
        YES_NO,
        CERTIFICATE_IN_ENGLISH_WARNING,
    );
    let certified_translation = if certificate_in_english == Some(YesOrNo::No) {
        context.ternary("marriageCertifiedTranslation", YES_NO, TRANSLATION_WARNING)
    } else {
        None
    };

    let date = marriage_date(context);
    if date.is_none() {
        context.warn(MARRIAGE_DATE_WARNING);
    }

    let details = MarriageDetails {
        married_in_uk,
        without_certificate,
        certificate_in_english,
        certified_translation,
        place_of_marriage: context.text("placeOfMarriage"),
        country_of_marriage: context.text("countryOfMarriage"),
        applicant1_name: context.text("soleOrApplicant1FullNameAsOnCert"),
        applicant2_name: context.text("respondentOrApplicant2FullNameAsOnCert"),
        date,
    };

    context.application_mut()?.marriage = Some(details);
    Ok(())
}

/// The form asks whether the marriage took place outside the UK. Only a plain `no` is
/// accepted without review; a `yes` is recorded but still flagged.
fn married_in_uk(context: &mut PipelineContext) -> Option<YesOrNo> {
    let raw = context.text("marriageOutsideOfUK");
    match raw.as_deref() {
        Some(value) if value.eq_ignore_ascii_case("no") => Some(YesOrNo::Yes),
        Some(value) if value.eq_ignore_ascii_case("yes") => {
            context.warn(MARRIAGE_OUTSIDE_UK_WARNING);
            Some(YesOrNo::No)
        }
        _ => {
            context.warn(MARRIAGE_OUTSIDE_UK_WARNING);
            None
        }
    }
}

fn marriage_date(context: &PipelineContext) -> Option<NaiveDate> {
    let day = numeric_part(context, "dateOfMarriageOrCivilPartnershipDay")?;
    let month = numeric_part(context, "dateOfMarriageOrCivilPartnershipMonth")?;
    let year = numeric_part(context, "dateOfMarriageOrCivilPartnershipYear")?;
    date_from_parts(day, month, year)
}

fn numeric_part(context: &PipelineContext, name: &str) -> Option<u32> {
    context.text(name)?.parse().ok()
}

/// Day and month are handed to the calendar in swapped positions, so `3/12/2000`
/// becomes 12 March. Kept pending confirmation of the form layout; see DESIGN.md.
fn date_from_parts(day: u32, month: u32, year: u32) -> Option<NaiveDate> {
    let year = i32::try_from(year).ok()?;
    NaiveDate::from_ymd_opt(year, day, month)
}
