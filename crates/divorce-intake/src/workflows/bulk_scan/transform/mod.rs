//! Section stages. Each stage reads the OCR fields it owns, writes one subtree of the
//! draft case and records review warnings on the shared context.

mod applicant;
mod applicant1;
mod applicant2;
mod application;
mod case_type;
mod cross_section;
mod marriage;
mod paper_form;
mod prayer;

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use super::context::PipelineContext;
use super::StageError;

pub type StageFn = fn(&mut PipelineContext) -> Result<(), StageError>;

/// One named step of a form pipeline.
#[derive(Clone, Copy)]
pub struct SectionStage {
    pub name: &'static str,
    pub run: StageFn,
}

impl std::fmt::Debug for SectionStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SectionStage")
            .field("name", &self.name)
            .finish()
    }
}

/// Which prayer section a form carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrayerVariant {
    Dissolution,
    JudicialSeparation,
}

const fn stage(name: &'static str, run: StageFn) -> SectionStage {
    SectionStage { name, run }
}

/// Later stages read subtrees written by earlier ones, so the order here is load-bearing.
pub const D8_STAGES: &[SectionStage] = &[
    stage("divorce_type", case_type::derive_divorce_type),
    stage("application_type", case_type::derive_application_type),
    stage("applicant1", applicant1::transform_applicant1),
    stage("applicant2", applicant2::transform_applicant2),
    stage("application", application::transform_application),
    stage("d8_prayer", prayer::transform_d8_prayer),
    stage("marriage_details", marriage::transform_marriage_details),
    stage("paper_form_details", paper_form::transform_paper_form_details),
    stage("cross_section", cross_section::validate_and_default),
];

pub const D8S_STAGES: &[SectionStage] = &[
    stage("divorce_type", case_type::derive_divorce_type),
    stage("application_type", case_type::derive_application_type),
    stage("applicant1", applicant1::transform_applicant1),
    stage("applicant2", applicant2::transform_applicant2),
    stage("application", application::transform_application),
    stage("d8s_prayer", prayer::transform_d8s_prayer),
    stage("marriage_details", marriage::transform_marriage_details),
    stage("paper_form_details", paper_form::transform_paper_form_details),
    stage("cross_section", cross_section::validate_and_default),
];

pub fn stages_for(variant: PrayerVariant) -> &'static [SectionStage] {
    match variant {
        PrayerVariant::Dissolution => D8_STAGES,
        PrayerVariant::JudicialSeparation => D8S_STAGES,
    }
}

/// Runs `stages` in order, stopping at the first fault. A panicking stage is reported as
/// [`StageError::Panicked`]; the context is left partially written and must be discarded.
pub fn run_stages(
    context: &mut PipelineContext,
    stages: &[SectionStage],
) -> Result<(), (&'static str, StageError)> {
    for stage in stages {
        tracing::debug!(stage = stage.name, "running section stage");
        panic::catch_unwind(AssertUnwindSafe(|| (stage.run)(context)))
            .unwrap_or_else(|payload| Err(StageError::Panicked(panic_message(payload.as_ref()))))
            .map_err(|err| (stage.name, err))?;
    }
    Ok(())
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "non-string panic payload".to_string()
    }
}
