//! Bulk scan intake: turns the OCR output of a scanned paper divorce, dissolution or
//! judicial separation application into a flat case field map.
//!
//! A request flows through pre-validation, the ordered section stages of its form type
//! and finally the serializer. Field problems never abort; they become review warnings
//! carried in the output.

mod context;
pub mod decode;
pub mod domain;
mod error;
pub mod fields;
mod pipeline;
pub mod registry;
mod serializer;
pub mod transform;
mod validation;

pub use context::PipelineContext;
pub use error::{RegistryError, StageError, TransformationError, TransformationFailure};
pub use fields::{read_csv_fields, read_json_fields, OcrDataField, OcrFieldSet};
pub use pipeline::{
    FormDefinition, FormPipeline, FormTransformer, FormType, TransformationRequest,
    UNEXPECTED_ERROR,
};
pub use registry::PipelineRegistry;
pub use serializer::{
    serialize_case, CaseFieldMap, WarningIdStrategy, WarningRecord, CASE_REFERENCE_KEY,
    WARNINGS_KEY,
};
pub use transform::{PrayerVariant, SectionStage, D8S_STAGES, D8_STAGES};
pub use validation::{
    OcrValidationError, OcrValidationResponse, OcrValidator, RequiredFieldsValidator,
};

#[cfg(test)]
mod tests;
