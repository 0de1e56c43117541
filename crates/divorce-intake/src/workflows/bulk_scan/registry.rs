use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use tracing::{info, warn};

use super::pipeline::{FormPipeline, FormTransformer, FormType, TransformationRequest};
use super::serializer::CaseFieldMap;
use super::validation::OcrValidator;
use super::{RegistryError, TransformationError};
use crate::config::IntakeConfig;

static GLOBAL_REGISTRY: OnceLock<PipelineRegistry> = OnceLock::new();

/// Form type to orchestrator lookup, built once at startup and read-only afterwards.
#[derive(Clone, Default)]
pub struct PipelineRegistry {
    pipelines: HashMap<String, Arc<dyn FormTransformer>>,
}

impl PipelineRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &IntakeConfig, validator: Arc<dyn OcrValidator>) -> Self {
        let mut registry = Self::new();
        for form_type in &config.form_types {
            registry.register(Arc::new(FormPipeline::new(
                *form_type,
                Arc::clone(&validator),
                config.warning_ids,
            )));
        }
        registry
    }

    /// Replaces any transformer already registered for the same form type.
    pub fn register(&mut self, transformer: Arc<dyn FormTransformer>) {
        let key = transformer.form_type().as_str().to_string();
        self.pipelines.insert(key, transformer);
    }

    pub fn pipeline_for(
        &self,
        form_type: &str,
    ) -> Result<Arc<dyn FormTransformer>, TransformationError> {
        self.pipelines
            .get(form_type)
            .cloned()
            .ok_or_else(|| TransformationError::UnsupportedFormType(form_type.to_string()))
    }

    pub fn transform(
        &self,
        request: &TransformationRequest,
    ) -> Result<CaseFieldMap, TransformationError> {
        let pipeline = self.pipeline_for(&request.form_type).map_err(|err| {
            warn!(form_type = %request.form_type, "no pipeline registered for form type");
            err
        })?;
        pipeline.transform(request)
    }

    /// Registered form types in a stable order.
    pub fn form_types(&self) -> Vec<FormType> {
        let mut types: Vec<FormType> = self
            .pipelines
            .values()
            .map(|pipeline| pipeline.form_type())
            .collect();
        types.sort_by_key(|form_type| form_type.as_str());
        types
    }
}

impl std::fmt::Debug for PipelineRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PipelineRegistry")
            .field("form_types", &self.form_types())
            .finish()
    }
}

/// Publishes the process-wide registry. May only be called once.
pub fn install(registry: PipelineRegistry) -> Result<&'static PipelineRegistry, RegistryError> {
    let form_types = registry.form_types();
    GLOBAL_REGISTRY
        .set(registry)
        .map_err(|_| RegistryError::AlreadyInstalled)?;
    info!(?form_types, "pipeline registry installed");
    GLOBAL_REGISTRY.get().ok_or(RegistryError::NotInstalled)
}

pub fn global() -> Result<&'static PipelineRegistry, RegistryError> {
    GLOBAL_REGISTRY.get().ok_or(RegistryError::NotInstalled)
}
