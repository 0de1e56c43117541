use std::collections::BTreeSet;

use super::super::context::PipelineContext;
use super::super::decode::{decode_financial_order_for, PRAYER_ORDER_FOR, YES_NO};
use super::super::domain::{
    Applicant, DivorceOrDissolution, Prayer, PrayerOrder, SupplementaryCaseType, YesOrNo,
};
use super::super::StageError;

struct D8PrayerFields {
    marriage_dissolved: &'static str,
    civil_partnership_dissolved: &'static str,
    financial_order: &'static str,
    prayer_warning: &'static str,
    financial_order_warning: &'static str,
}

const D8_APPLICANT1: D8PrayerFields = D8PrayerFields {
    marriage_dissolved: "prayerMarriageDissolved",
    civil_partnership_dissolved: "prayerCivilPartnershipDissolved",
    financial_order: "soleOrApplicant1prayerFinancialOrder",
    prayer_warning: "Please review applicant1 prayer in the scanned form",
    financial_order_warning: "Please review applicant1 prayer financial order in the scanned form",
};

const D8_APPLICANT2: D8PrayerFields = D8PrayerFields {
    marriage_dissolved: "applicant2PrayerMarriageDissolved",
    civil_partnership_dissolved: "applicant2PrayerCivilPartnershipDissolved",
    financial_order: "applicant2PrayerFinancialOrder",
    prayer_warning: "Please review applicant2 prayer in the scanned form",
    financial_order_warning: "Please review applicant2 prayer financial order in the scanned form",
};

struct D8sPrayerFields {
    judicially_separated: &'static str,
    financial_order_for: &'static str,
    prayer_warning: &'static str,
    financial_order_warning: &'static str,
}

const D8S_APPLICANT1: D8sPrayerFields = D8sPrayerFields {
    judicially_separated: "prayerApplicant1JudiciallySeparated",
    financial_order_for: "soleOrApplicant1prayerFinancialOrderFor",
    prayer_warning: "Please review applicant1 prayer in the scanned form",
    financial_order_warning: "Please review applicant1 prayer financial order in the scanned form",
};

const D8S_APPLICANT2: D8sPrayerFields = D8sPrayerFields {
    judicially_separated: "prayerApplicant2JudiciallySeparated",
    financial_order_for: "applicant2PrayerFinancialOrderFor",
    prayer_warning: "Please review applicant2 prayer in the scanned form",
    financial_order_warning: "Please review applicant2 prayer financial order in the scanned form",
};

/// Divorce/dissolution prayer. The financial order recipients come from the applicant
/// section, so this stage must run after it.
pub(crate) fn transform_d8_prayer(context: &mut PipelineContext) -> Result<(), StageError> {
    let divorce_or_dissolution = context.divorce_or_dissolution()?;
    let sole = context.application_type()?.is_sole();

    let prayer = d8_prayer(context, &D8_APPLICANT1, divorce_or_dissolution, Party::One)?;
    context.applicant1_mut()?.prayer = Some(prayer);

    if !sole {
        let prayer = d8_prayer(context, &D8_APPLICANT2, divorce_or_dissolution, Party::Two)?;
        context.applicant2_mut()?.prayer = Some(prayer);
    }

    Ok(())
}

/// Judicial separation prayer.
pub(crate) fn transform_d8s_prayer(context: &mut PipelineContext) -> Result<(), StageError> {
    let divorce_or_dissolution = context.divorce_or_dissolution()?;
    let sole = context.application_type()?.is_sole();

    context.case.supplementary_case_type = match divorce_or_dissolution {
        DivorceOrDissolution::Divorce => SupplementaryCaseType::JudicialSeparation,
        DivorceOrDissolution::Dissolution => SupplementaryCaseType::Separation,
    };

    let prayer = d8s_prayer(context, &D8S_APPLICANT1, divorce_or_dissolution, Party::One)?;
    context.applicant1_mut()?.prayer = Some(prayer);

    if !sole {
        let prayer = d8s_prayer(context, &D8S_APPLICANT2, divorce_or_dissolution, Party::Two)?;
        context.applicant2_mut()?.prayer = Some(prayer);
    }

    Ok(())
}

#[derive(Clone, Copy)]
enum Party {
    One,
    Two,
}

fn applicant(context: &mut PipelineContext, party: Party) -> Result<&mut Applicant, StageError> {
    match party {
        Party::One => context.applicant1_mut(),
        Party::Two => context.applicant2_mut(),
    }
}

fn d8_prayer(
    context: &mut PipelineContext,
    fields: &D8PrayerFields,
    divorce_or_dissolution: DivorceOrDissolution,
    party: Party,
) -> Result<Prayer, StageError> {
    let (field, order) = match divorce_or_dissolution {
        DivorceOrDissolution::Divorce => (fields.marriage_dissolved, PrayerOrder::DissolveDivorce),
        DivorceOrDissolution::Dissolution => (
            fields.civil_partnership_dissolved,
            PrayerOrder::EndCivilPartnership,
        ),
    };

    let orders = context
        .ternary(field, YES_NO, fields.prayer_warning)
        .map(|answer| orders_for(answer, order));

    let financial_orders = match context.ternary(
        fields.financial_order,
        YES_NO,
        fields.financial_order_warning,
    ) {
        Some(YesOrNo::Yes) => Some(applicant(context, party)?.financial_order_for.clone()),
        Some(YesOrNo::No) => Some(BTreeSet::new()),
        None => None,
    };

    Ok(Prayer {
        orders,
        financial_orders,
    })
}

fn d8s_prayer(
    context: &mut PipelineContext,
    fields: &D8sPrayerFields,
    divorce_or_dissolution: DivorceOrDissolution,
    party: Party,
) -> Result<Prayer, StageError> {
    let order = match divorce_or_dissolution {
        DivorceOrDissolution::Divorce => PrayerOrder::JudicialSeparation,
        DivorceOrDissolution::Dissolution => PrayerOrder::Separation,
    };

    let orders = context
        .ternary(fields.judicially_separated, YES_NO, fields.prayer_warning)
        .map(|answer| orders_for(answer, order));

    let financial_orders = decode_financial_order_for(
        context.fields().get(fields.financial_order_for),
        PRAYER_ORDER_FOR,
    );

    let applied_for = applicant(context, party)?.financial_order;
    if applied_for == Some(YesOrNo::Yes) && financial_orders.is_empty() {
        context.warn(fields.financial_order_warning);
    }

    Ok(Prayer {
        orders,
        financial_orders: Some(financial_orders),
    })
}

fn orders_for(answer: YesOrNo, order: PrayerOrder) -> BTreeSet<PrayerOrder> {
    match answer {
        YesOrNo::Yes => BTreeSet::from([order]),
        YesOrNo::No => BTreeSet::new(),
    }
}
