use serde::{Deserialize, Serialize};

use super::fields::OcrFieldSet;
use super::pipeline::FormType;

/// Result of the structural OCR check run before any section stage.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OcrValidationResponse {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl OcrValidationResponse {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum OcrValidationError {
    #[error("OCR validator unavailable: {0}")]
    Unavailable(String),
}

/// Collaborator that checks a form's OCR output before transformation. Called
/// synchronously once per request; no retry happens at this layer.
pub trait OcrValidator: Send + Sync {
    fn validate(
        &self,
        form_type: FormType,
        fields: &OcrFieldSet,
    ) -> Result<OcrValidationResponse, OcrValidationError>;
}

const MANDATORY_FIELDS: &[&str] = &[
    "soleOrApplicant1FirstName",
    "soleOrApplicant1LastName",
    "respondentOrApplicant2FirstName",
    "respondentOrApplicant2LastName",
];

/// Minimal structural validator: every mandatory field must carry a value, and blank
/// optional fields are reported as warnings.
#[derive(Debug, Clone, Default)]
pub struct RequiredFieldsValidator;

impl RequiredFieldsValidator {
    pub fn mandatory_fields(form_type: FormType) -> &'static [&'static str] {
        match form_type {
            FormType::D8 | FormType::D8S => MANDATORY_FIELDS,
        }
    }
}

impl OcrValidator for RequiredFieldsValidator {
    fn validate(
        &self,
        form_type: FormType,
        fields: &OcrFieldSet,
    ) -> Result<OcrValidationResponse, OcrValidationError> {
        let mandatory = Self::mandatory_fields(form_type);

        let errors = mandatory
            .iter()
            .filter(|name| fields.text(name).is_none())
            .map(|name| format!("Mandatory field \"{name}\" is missing"))
            .collect();

        let mut warnings: Vec<String> = fields
            .names()
            .filter(|name| !mandatory.iter().any(|required| required == name))
            .filter(|name| fields.text(name).is_none())
            .map(|name| format!("Value for field \"{name}\" is empty"))
            .collect();
        warnings.sort();

        Ok(OcrValidationResponse { errors, warnings })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::bulk_scan::fields::OcrDataField;

    fn named_parties() -> OcrFieldSet {
        OcrFieldSet::from_fields(vec![
            OcrDataField::new("soleOrApplicant1FirstName", "Ann"),
            OcrDataField::new("soleOrApplicant1LastName", "Smith"),
            OcrDataField::new("respondentOrApplicant2FirstName", "Bob"),
            OcrDataField::new("respondentOrApplicant2LastName", "Smith"),
        ])
    }

    #[test]
    fn missing_mandatory_field_is_an_error() {
        let fields = named_parties().without_field("soleOrApplicant1LastName");
        let response = RequiredFieldsValidator
            .validate(FormType::D8, &fields)
            .expect("validator runs");

        assert!(!response.is_valid());
        assert_eq!(
            response.errors,
            vec!["Mandatory field \"soleOrApplicant1LastName\" is missing".to_string()]
        );
    }

    #[test]
    fn blank_optional_field_is_a_warning() {
        let fields = named_parties().with_field("placeOfMarriage", "   ");
        let response = RequiredFieldsValidator
            .validate(FormType::D8S, &fields)
            .expect("validator runs");

        assert!(response.is_valid());
        assert_eq!(
            response.warnings,
            vec!["Value for field \"placeOfMarriage\" is empty".to_string()]
        );
    }
}
