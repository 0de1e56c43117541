use super::decode::TernaryGrammar;
use super::domain::{
    Applicant, Application, ApplicationType, CaseRecord, DivorceOrDissolution, YesOrNo,
};
use super::fields::OcrFieldSet;
use super::StageError;

/// State threaded through every stage of one transformation. Stages mutate the draft and
/// append warnings in place; nothing is copied between stages.
#[derive(Debug, Clone)]
pub struct PipelineContext {
    pub case: CaseRecord,
    fields: OcrFieldSet,
    warnings: Vec<String>,
}

impl PipelineContext {
    pub fn new(fields: OcrFieldSet) -> Self {
        Self {
            case: CaseRecord::default(),
            fields,
            warnings: Vec::new(),
        }
    }

    pub fn fields(&self) -> &OcrFieldSet {
        &self.fields
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Warnings are kept in emission order and never deduplicated.
    pub fn warn(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    pub fn text(&self, name: &str) -> Option<String> {
        self.fields.text(name)
    }

    pub fn flag(&self, name: &str) -> bool {
        super::decode::decode_bool(self.fields.get(name))
    }

    /// Decodes a yes/no field, appending `warning` once when the value is missing or not
    /// part of the grammar.
    pub fn ternary(
        &mut self,
        name: &str,
        grammar: TernaryGrammar,
        warning: &str,
    ) -> Option<YesOrNo> {
        let decoded = grammar.decode(self.fields.get(name));
        if decoded.is_none() {
            self.warn(warning);
        }
        decoded
    }

    pub fn divorce_or_dissolution(&self) -> Result<DivorceOrDissolution, StageError> {
        self.case
            .divorce_or_dissolution
            .ok_or(StageError::MissingSection("divorceOrDissolution"))
    }

    pub fn application_type(&self) -> Result<ApplicationType, StageError> {
        self.case
            .application_type
            .ok_or(StageError::MissingSection("applicationType"))
    }

    pub fn applicant1_mut(&mut self) -> Result<&mut Applicant, StageError> {
        self.case
            .applicant1
            .as_mut()
            .ok_or(StageError::MissingSection("applicant1"))
    }

    pub fn applicant2_mut(&mut self) -> Result<&mut Applicant, StageError> {
        self.case
            .applicant2
            .as_mut()
            .ok_or(StageError::MissingSection("applicant2"))
    }

    pub fn application_mut(&mut self) -> Result<&mut Application, StageError> {
        self.case
            .application
            .as_mut()
            .ok_or(StageError::MissingSection("application"))
    }

    pub fn into_parts(self) -> (CaseRecord, Vec<String>) {
        (self.case, self.warnings)
    }
}
