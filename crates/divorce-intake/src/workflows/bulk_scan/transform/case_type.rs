use super::super::context::PipelineContext;
use super::super::domain::{ApplicationType, DivorceOrDissolution};
use super::super::StageError;

pub(crate) const DIVORCE_TYPE_WARNING: &str = "Please review divorce type in the scanned form";
pub(crate) const APPLICATION_TYPE_WARNING: &str =
    "Please review application type in the scanned form";

/// Exactly one of the two boxes must be ticked; anything else falls back to divorce.
pub(crate) fn derive_divorce_type(context: &mut PipelineContext) -> Result<(), StageError> {
    let divorce = context.flag("applicationForDivorce");
    let dissolution = context.flag("applicationForDissolution");

    let derived = match (divorce, dissolution) {
        (true, false) => DivorceOrDissolution::Divorce,
        (false, true) => DivorceOrDissolution::Dissolution,
        _ => {
            context.warn(DIVORCE_TYPE_WARNING);
            DivorceOrDissolution::Divorce
        }
    };

    context.case.divorce_or_dissolution = Some(derived);
    Ok(())
}

/// Exactly one of the two boxes must be ticked; anything else falls back to sole.
pub(crate) fn derive_application_type(context: &mut PipelineContext) -> Result<(), StageError> {
    let sole = context.flag("aSoleApplication");
    let joint = context.flag("aJointApplication");

    let derived = match (sole, joint) {
        (true, false) => ApplicationType::SoleApplication,
        (false, true) => ApplicationType::JointApplication,
        _ => {
            context.warn(APPLICATION_TYPE_WARNING);
            ApplicationType::SoleApplication
        }
    };

    context.case.application_type = Some(derived);
    Ok(())
}
