use serde::{Deserialize, Serialize};

/// Failure surfaced to the intake caller, either to open a manual-review record or to
/// show an error to a caseworker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransformationFailure {
    pub message: String,
    pub warnings: Vec<String>,
    pub errors: Vec<String>,
}

impl std::fmt::Display for TransformationFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.errors.is_empty() {
            write!(f, "{}", self.message)
        } else {
            write!(f, "{} ({})", self.message, self.errors.join("; "))
        }
    }
}

/// Aborting outcomes of a transformation request. Field interpretation problems are not
/// errors; they travel as warnings in the output.
#[derive(Debug, thiserror::Error)]
pub enum TransformationError {
    #[error("{0}")]
    PreValidation(TransformationFailure),
    #[error("form type '{0}' is not supported")]
    UnsupportedFormType(String),
    #[error("{0}")]
    Unexpected(TransformationFailure),
}

impl TransformationError {
    pub fn failure(&self) -> TransformationFailure {
        match self {
            TransformationError::PreValidation(failure)
            | TransformationError::Unexpected(failure) => failure.clone(),
            TransformationError::UnsupportedFormType(form_type) => TransformationFailure {
                message: format!("Form type '{form_type}' is not supported"),
                warnings: Vec::new(),
                errors: Vec::new(),
            },
        }
    }
}

/// Non-business fault raised inside a stage or the serializer.
#[derive(Debug, thiserror::Error)]
pub enum StageError {
    #[error("section '{0}' has not been populated by an earlier stage")]
    MissingSection(&'static str),
    #[error("case record could not be serialized: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("invalid output: {0}")]
    InvalidOutput(String),
    #[error("stage panicked: {0}")]
    Panicked(String),
}

#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("pipeline registry has already been installed")]
    AlreadyInstalled,
    #[error("pipeline registry has not been installed")]
    NotInstalled,
}
