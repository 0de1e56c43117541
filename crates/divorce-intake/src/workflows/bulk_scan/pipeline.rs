use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, warn};

use super::context::PipelineContext;
use super::fields::{OcrDataField, OcrFieldSet};
use super::serializer::{serialize_case, CaseFieldMap, WarningIdStrategy};
use super::transform::{run_stages, stages_for, PrayerVariant, SectionStage};
use super::validation::OcrValidator;
use super::{TransformationError, TransformationFailure};

pub const UNEXPECTED_ERROR: &str = "Unexpected error while transforming OCR data";

/// Paper forms accepted by bulk scan intake.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FormType {
    D8,
    D8S,
}

impl FormType {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "D8" => Some(Self::D8),
            "D8S" => Some(Self::D8S),
            _ => None,
        }
    }

    pub fn all() -> &'static [FormType] {
        &[FormType::D8, FormType::D8S]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FormType::D8 => "D8",
            FormType::D8S => "D8S",
        }
    }

    pub fn definition(&self) -> FormDefinition {
        match self {
            FormType::D8 => FormDefinition {
                form_type: FormType::D8,
                prayer: PrayerVariant::Dissolution,
                failure_message: "Some error occurred during D8 Form transformation.",
            },
            FormType::D8S => FormDefinition {
                form_type: FormType::D8S,
                prayer: PrayerVariant::JudicialSeparation,
                failure_message: "Some error occurred during D8S Form transformation.",
            },
        }
    }
}

impl fmt::Display for FormType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Static description of one form: which prayer it carries and what the caller sees when
/// a stage faults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormDefinition {
    pub form_type: FormType,
    pub prayer: PrayerVariant,
    pub failure_message: &'static str,
}

/// One scanned form submitted for transformation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransformationRequest {
    pub form_type: String,
    pub source_record_id: String,
    pub fields: Vec<OcrDataField>,
}

impl TransformationRequest {
    pub fn new(
        form_type: impl Into<String>,
        source_record_id: impl Into<String>,
        fields: Vec<OcrDataField>,
    ) -> Self {
        Self {
            form_type: form_type.into(),
            source_record_id: source_record_id.into(),
            fields,
        }
    }
}

pub trait FormTransformer: Send + Sync {
    fn form_type(&self) -> FormType;

    fn transform(
        &self,
        request: &TransformationRequest,
    ) -> Result<CaseFieldMap, TransformationError>;
}

/// Orchestrator for a single form type: pre-validation, the ordered section stages, then
/// serialization.
pub struct FormPipeline {
    definition: FormDefinition,
    stages: &'static [SectionStage],
    validator: Arc<dyn OcrValidator>,
    warning_ids: WarningIdStrategy,
}

impl FormPipeline {
    pub fn new(
        form_type: FormType,
        validator: Arc<dyn OcrValidator>,
        warning_ids: WarningIdStrategy,
    ) -> Self {
        let stages = stages_for(form_type.definition().prayer);
        Self::with_stages(form_type, stages, validator, warning_ids)
    }

    /// Pipeline over an explicit stage list instead of the form's standard order.
    pub(crate) fn with_stages(
        form_type: FormType,
        stages: &'static [SectionStage],
        validator: Arc<dyn OcrValidator>,
        warning_ids: WarningIdStrategy,
    ) -> Self {
        Self {
            definition: form_type.definition(),
            stages,
            validator,
            warning_ids,
        }
    }

    pub fn stage_names(&self) -> Vec<&'static str> {
        self.stages.iter().map(|stage| stage.name).collect()
    }

    fn unexpected(&self) -> TransformationError {
        TransformationError::Unexpected(TransformationFailure {
            message: self.definition.failure_message.to_string(),
            warnings: Vec::new(),
            errors: vec![UNEXPECTED_ERROR.to_string()],
        })
    }

    fn pre_validate(&self, fields: &OcrFieldSet) -> Result<(), TransformationError> {
        let form_type = self.definition.form_type;
        let response = self.validator.validate(form_type, fields).map_err(|err| {
            error!(form_type = %form_type, error = %err, "OCR pre-validation could not run");
            self.unexpected()
        })?;

        if response.is_valid() {
            return Ok(());
        }

        warn!(
            form_type = %form_type,
            errors = response.errors.len(),
            warnings = response.warnings.len(),
            "OCR pre-validation rejected form"
        );
        Err(TransformationError::PreValidation(TransformationFailure {
            message: format!("OCR validation was unsuccessful for form type {form_type}"),
            warnings: response.warnings,
            errors: response.errors,
        }))
    }
}

impl fmt::Debug for FormPipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormPipeline")
            .field("definition", &self.definition)
            .field("stages", &self.stage_names())
            .field("warning_ids", &self.warning_ids)
            .finish()
    }
}

impl FormTransformer for FormPipeline {
    fn form_type(&self) -> FormType {
        self.definition.form_type
    }

    fn transform(
        &self,
        request: &TransformationRequest,
    ) -> Result<CaseFieldMap, TransformationError> {
        let form_type = self.definition.form_type;
        info!(
            form_type = %form_type,
            source_record_id = %request.source_record_id,
            fields = request.fields.len(),
            "OCR transformation started"
        );
        let fields = OcrFieldSet::from_fields(request.fields.iter().cloned());

        self.pre_validate(&fields)?;

        let mut context = PipelineContext::new(fields);
        run_stages(&mut context, self.stages).map_err(|(stage, err)| {
            error!(
                form_type = %form_type,
                source_record_id = %request.source_record_id,
                stage,
                error = %err,
                "section stage failed"
            );
            self.unexpected()
        })?;

        let (case, warnings) = context.into_parts();
        let output = serialize_case(
            &case,
            &warnings,
            &request.source_record_id,
            self.warning_ids,
        )
        .map_err(|err| {
            error!(
                form_type = %form_type,
                source_record_id = %request.source_record_id,
                error = %err,
                "case serialization failed"
            );
            self.unexpected()
        })?;

        debug!(form_type = %form_type, keys = output.len(), "case serialized");
        info!(
            form_type = %form_type,
            source_record_id = %request.source_record_id,
            warnings = warnings.len(),
            "OCR transformation complete"
        );
        Ok(output)
    }
}
