use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::workflows::bulk_scan::transform::run_stages;
use crate::workflows::bulk_scan::{
    FormPipeline, FormType, OcrDataField, OcrFieldSet, OcrValidationError,
    OcrValidationResponse, OcrValidator, PipelineContext, SectionStage, TransformationRequest,
    WarningIdStrategy,
};

pub(super) fn field_set(pairs: &[(&str, &str)]) -> OcrFieldSet {
    pairs
        .iter()
        .map(|(name, value)| OcrDataField::new(*name, *value))
        .collect()
}

/// A sole divorce form filled in cleanly enough that no stage raises a warning.
pub(super) fn sole_divorce() -> OcrFieldSet {
    field_set(&[
        ("applicationForDivorce", "true"),
        ("aSoleApplication", "true"),
        ("soleOrApplicant1FirstName", "Ann"),
        ("soleOrApplicant1LastName", "Smith"),
        ("soleOrApplicant1MarriedName", "no"),
        ("soleOrApplicant1ConfidentialDetails", "no"),
        ("soleOrApplicant1BuildingAndStreet", "1 High Street"),
        ("soleOrApplicant1Town", "Leeds"),
        ("soleOrApplicant1Postcode", "LS1 1AA"),
        ("soleOrApplicant1Solicitor", "no"),
        ("soleOrApplicant1FinancialOrder", "no"),
        ("soleOrApplicant1ExistingCourtCases", "no"),
        ("respondentOrApplicant2FirstName", "Bob"),
        ("respondentOrApplicant2LastName", "Smith"),
        ("respondentOrApplicant2MarriedName", "no"),
        ("respondentOrApplicant2ConfidentialDetails", "no"),
        ("respondentOrApplicant2BuildingAndStreet", "2 Low Road"),
        ("respondentOrApplicant2Town", "York"),
        ("respondentOrApplicant2Country", "UK"),
        ("respondentOrApplicant2Postcode", "YO1 1AA"),
        ("respondentOrApplicant2Solicitor", "no"),
        ("respondentOrApplicant2FinancialOrder", "no"),
        ("respondentOrApplicant2ExistingCourtCases", "no"),
        ("serveOutOfUK", "no"),
        ("jurisdictionReasonsBothPartiesHabitual", "true"),
        ("applicant1ConfirmationOfBreakdown", "true"),
        ("prayerMarriageDissolved", "yes"),
        ("soleOrApplicant1prayerFinancialOrder", "no"),
        ("marriageOutsideOfUK", "no"),
        ("makingAnApplicationWithoutCertificate", "no"),
        ("marriageCertificateInEnglish", "yes"),
        ("dateOfMarriageOrCivilPartnershipDay", "3"),
        ("dateOfMarriageOrCivilPartnershipMonth", "12"),
        ("dateOfMarriageOrCivilPartnershipYear", "2000"),
    ])
}

/// The same form submitted jointly.
pub(super) fn joint_divorce() -> OcrFieldSet {
    sole_divorce()
        .without_field("aSoleApplication")
        .with_field("aJointApplication", "true")
        .with_field("applicant2ConfirmationOfBreakdown", "true")
        .with_field("applicant2PrayerMarriageDissolved", "yes")
        .with_field("applicant2PrayerFinancialOrder", "no")
}

/// A sole judicial separation form with no review points.
pub(super) fn sole_separation() -> OcrFieldSet {
    sole_divorce()
        .without_field("prayerMarriageDissolved")
        .without_field("soleOrApplicant1prayerFinancialOrder")
        .with_field("prayerApplicant1JudiciallySeparated", "yes")
}

pub(super) fn run(stages: &[SectionStage], fields: OcrFieldSet) -> PipelineContext {
    let mut context = PipelineContext::new(fields);
    run_stages(&mut context, stages).expect("stages run");
    context
}

pub(super) fn occurrences(warnings: &[String], text: &str) -> usize {
    warnings.iter().filter(|warning| warning.as_str() == text).count()
}

pub(super) fn request(form_type: &str, fields: &OcrFieldSet) -> TransformationRequest {
    let mut pairs: Vec<OcrDataField> = fields
        .names()
        .map(|name| OcrDataField::new(name, fields.get(name).unwrap_or_default()))
        .collect();
    pairs.sort_by(|left, right| left.name.cmp(&right.name));
    TransformationRequest::new(form_type, "1234567890123456", pairs)
}

pub(super) fn pipeline(form_type: FormType, validator: Arc<dyn OcrValidator>) -> FormPipeline {
    FormPipeline::new(form_type, validator, WarningIdStrategy::Sequential)
}

/// Accepts everything and counts how often it was asked.
#[derive(Default)]
pub(super) struct AcceptingValidator {
    pub calls: AtomicUsize,
}

impl OcrValidator for AcceptingValidator {
    fn validate(
        &self,
        _form_type: FormType,
        _fields: &OcrFieldSet,
    ) -> Result<OcrValidationResponse, OcrValidationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(OcrValidationResponse::default())
    }
}

pub(super) struct RejectingValidator {
    pub response: OcrValidationResponse,
}

impl OcrValidator for RejectingValidator {
    fn validate(
        &self,
        _form_type: FormType,
        _fields: &OcrFieldSet,
    ) -> Result<OcrValidationResponse, OcrValidationError> {
        Ok(self.response.clone())
    }
}

pub(super) struct UnavailableValidator;

impl OcrValidator for UnavailableValidator {
    fn validate(
        &self,
        _form_type: FormType,
        _fields: &OcrFieldSet,
    ) -> Result<OcrValidationResponse, OcrValidationError> {
        Err(OcrValidationError::Unavailable("connection refused".to_string()))
    }
}
