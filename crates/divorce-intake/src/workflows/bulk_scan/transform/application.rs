use std::collections::BTreeSet;

use super::super::context::PipelineContext;
use super::super::decode::{decode_who, Who};
use super::super::domain::{
    Application, DivorceOrDissolution, HelpWithFees, Jurisdiction, JurisdictionConnection,
    YesOrNo,
};
use super::super::StageError;

pub(crate) const JURISDICTION_WARNING: &str =
    "Please review jurisdiction connections in the scanned form";
pub(crate) const JOINT_HABITUAL_WARNING: &str =
    "Please review joint habitual residence in the scanned form";
pub(crate) const DOMICILE_WARNING: &str = "Please review domicile connection in the scanned form";
pub(crate) const BROKEN_DOWN_WARNING: &str =
    "Please review marriage broken down in the scanned form";

const HWF_REFERENCE_LENGTH: usize = 9;

/// Checkbox fields that map straight onto a single connection.
const DIRECT_CONNECTIONS: &[(&str, JurisdictionConnection)] = &[
    (
        "jurisdictionReasonsBothPartiesHabitual",
        JurisdictionConnection::A,
    ),
    (
        "jurisdictionReasonsBothPartiesLastHabitual",
        JurisdictionConnection::B,
    ),
    ("jurisdictionReasonsRespHabitual", JurisdictionConnection::C),
    ("jurisdictionReasons1YrHabitual", JurisdictionConnection::D),
    (
        "jurisdictionReasons6MonthsHabitual",
        JurisdictionConnection::E,
    ),
    (
        "jurisdictionReasonsBothPartiesDomiciled",
        JurisdictionConnection::F,
    ),
];

struct HelpWithFeesFields {
    reference: &'static str,
    warning: &'static str,
}

const APPLICANT1_HWF: HelpWithFeesFields = HelpWithFeesFields {
    reference: "soleOrApplicant1HWFNo",
    warning: "Please review HWF number for applicant1 in scanned form",
};

const APPLICANT2_HWF: HelpWithFeesFields = HelpWithFeesFields {
    reference: "applicant2HWFNo",
    warning: "Please review HWF number for applicant2 in scanned form",
};

pub(crate) fn transform_application(context: &mut PipelineContext) -> Result<(), StageError> {
    let divorce_or_dissolution = context.divorce_or_dissolution()?;
    let sole = context.application_type()?.is_sole();

    let connections = jurisdiction_connections(context, divorce_or_dissolution);
    if connections.is_empty() {
        context.warn(JURISDICTION_WARNING);
    }

    let applicant1_confirmed = context.flag("applicant1ConfirmationOfBreakdown");
    let applicant2_confirmed = context.flag("applicant2ConfirmationOfBreakdown");
    let consistent = if sole {
        applicant1_confirmed && !applicant2_confirmed
    } else {
        applicant1_confirmed && applicant2_confirmed
    };
    if !consistent {
        context.warn(BROKEN_DOWN_WARNING);
    }

    let applicant1_help_with_fees = help_with_fees(context, &APPLICANT1_HWF);
    let applicant2_help_with_fees = help_with_fees(context, &APPLICANT2_HWF);

    context.case.application = Some(Application {
        jurisdiction: Jurisdiction { connections },
        marriage: None,
        applicant1_help_with_fees,
        applicant2_help_with_fees,
        applicant1_confirmed_broken_down: Some(YesOrNo::from_bool(applicant1_confirmed)),
        applicant2_confirmed_broken_down: Some(YesOrNo::from_bool(applicant2_confirmed)),
        new_paper_case: None,
    });

    Ok(())
}

fn jurisdiction_connections(
    context: &mut PipelineContext,
    divorce_or_dissolution: DivorceOrDissolution,
) -> BTreeSet<JurisdictionConnection> {
    let mut connections: BTreeSet<JurisdictionConnection> = DIRECT_CONNECTIONS
        .iter()
        .filter(|(field, _)| context.flag(field))
        .map(|(_, connection)| *connection)
        .collect();

    if context.flag("jurisdictionReasonsJointHabitual") {
        match decode_who(context.fields().get("jurisdictionReasonsJointHabitualWho")) {
            Some(Who::Applicant1) => {
                connections.insert(JurisdictionConnection::C1);
            }
            Some(Who::Applicant2) => {
                connections.insert(JurisdictionConnection::C2);
            }
            Some(Who::Both) => {
                connections.insert(JurisdictionConnection::A);
            }
            None => context.warn(JOINT_HABITUAL_WARNING),
        }
    }

    if context.flag("jurisdictionReasonsOnePartyDomiciled") {
        match decode_who(context.fields().get("jurisdictionReasonsOnePartyDomiciledWho")) {
            Some(Who::Applicant1) => {
                connections.insert(JurisdictionConnection::H);
            }
            Some(Who::Applicant2) => {
                connections.insert(JurisdictionConnection::I);
            }
            Some(Who::Both) => {
                connections.insert(JurisdictionConnection::F);
            }
            None => context.warn(DOMICILE_WARNING),
        }
    }

    if context.flag("jurisdictionReasonsSameSex") {
        connections.insert(match divorce_or_dissolution {
            DivorceOrDissolution::Dissolution => JurisdictionConnection::G,
            DivorceOrDissolution::Divorce => JurisdictionConnection::J,
        });
    }

    connections
}

fn help_with_fees(context: &mut PipelineContext, fields: &HelpWithFeesFields) -> HelpWithFees {
    match context.text(fields.reference) {
        None => HelpWithFees {
            reference_number: None,
            need_help: Some(YesOrNo::No),
        },
        Some(reference) if reference.chars().count() == HWF_REFERENCE_LENGTH => HelpWithFees {
            reference_number: Some(reference),
            need_help: Some(YesOrNo::Yes),
        },
        Some(_) => {
            context.warn(fields.warning);
            HelpWithFees::default()
        }
    }
}
