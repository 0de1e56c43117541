use chrono::NaiveDate;

use super::common::*;
use crate::workflows::bulk_scan::domain::{MarriageDetails, YesOrNo};
use crate::workflows::bulk_scan::{PipelineContext, D8_STAGES};

const MARRIAGE_DATE_WARNING: &str = "Please review marriage date in the scanned form";

fn marriage(context: &PipelineContext) -> &MarriageDetails {
    context
        .case
        .application
        .as_ref()
        .and_then(|application| application.marriage.as_ref())
        .expect("marriage details")
}

#[test]
fn marriage_date_day_and_month_are_swapped() {
    let context = run(D8_STAGES, sole_divorce());

    assert_eq!(
        marriage(&context).date,
        NaiveDate::from_ymd_opt(2000, 3, 12)
    );
}

#[test]
fn day_above_twelve_cannot_form_a_date() {
    let fields = sole_divorce()
        .with_field("dateOfMarriageOrCivilPartnershipDay", "25")
        .with_field("dateOfMarriageOrCivilPartnershipMonth", "6");
    let context = run(D8_STAGES, fields);

    assert_eq!(marriage(&context).date, None);
    assert_eq!(context.warnings(), [MARRIAGE_DATE_WARNING]);
}

#[test]
fn non_numeric_date_part_is_flagged() {
    let fields = sole_divorce().with_field("dateOfMarriageOrCivilPartnershipYear", "two thousand");
    let context = run(D8_STAGES, fields);

    assert_eq!(marriage(&context).date, None);
    assert_eq!(occurrences(context.warnings(), MARRIAGE_DATE_WARNING), 1);
}

#[test]
fn marriage_abroad_is_recorded_and_still_flagged() {
    let fields = sole_divorce()
        .with_field("marriageOutsideOfUK", "YES")
        .with_field("placeOfMarriage", "Paris")
        .with_field("countryOfMarriage", "France");
    let context = run(D8_STAGES, fields);

    let details = marriage(&context);
    assert_eq!(details.married_in_uk, Some(YesOrNo::No));
    assert_eq!(details.place_of_marriage.as_deref(), Some("Paris"));
    assert_eq!(details.country_of_marriage.as_deref(), Some("France"));
    assert_eq!(
        context.warnings(),
        ["Please review marriage outside UK in the scanned form"]
    );
}

#[test]
fn unreadable_marriage_location_is_unset() {
    let fields = sole_divorce().without_field("marriageOutsideOfUK");
    let context = run(D8_STAGES, fields);

    assert_eq!(marriage(&context).married_in_uk, None);
    assert_eq!(
        occurrences(
            context.warnings(),
            "Please review marriage outside UK in the scanned form"
        ),
        1
    );
}

#[test]
fn translation_is_only_read_for_foreign_certificates() {
    let english = sole_divorce().with_field("marriageCertifiedTranslation", "maybe");
    let context = run(D8_STAGES, english);
    assert_eq!(marriage(&context).certified_translation, None);
    assert!(context.warnings().is_empty());

    let foreign = sole_divorce()
        .with_field("marriageCertificateInEnglish", "no")
        .with_field("marriageCertifiedTranslation", "yes");
    let context = run(D8_STAGES, foreign);
    let details = marriage(&context);
    assert_eq!(details.certificate_in_english, Some(YesOrNo::No));
    assert_eq!(details.certified_translation, Some(YesOrNo::Yes));
    assert!(context.warnings().is_empty());

    let unreadable = sole_divorce().with_field("marriageCertificateInEnglish", "no");
    let context = run(D8_STAGES, unreadable);
    assert_eq!(
        context.warnings(),
        ["Please review marriage certificate translation in the scanned form"]
    );
}

#[test]
fn names_as_on_certificate_are_copied() {
    let fields = sole_divorce()
        .with_field("soleOrApplicant1FullNameAsOnCert", "Ann Jones")
        .with_field("respondentOrApplicant2FullNameAsOnCert", "Bob Smith");
    let context = run(D8_STAGES, fields);

    let details = marriage(&context);
    assert_eq!(details.applicant1_name.as_deref(), Some("Ann Jones"));
    assert_eq!(details.applicant2_name.as_deref(), Some("Bob Smith"));
}
