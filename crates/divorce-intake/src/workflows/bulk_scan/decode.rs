//! Decoding rules shared by the section stages.
//!
//! Each primitive is deliberately narrow: which literals count as positive, and whether an
//! unrecognised value is ambiguous or simply "no", differs from field to field on the paper
//! form. Stages pick the grammar per field instead of relying on a single coercion.

use std::collections::BTreeSet;

use super::domain::{FinancialOrderFor, YesOrNo};

/// Literal sets accepted by a yes/no style field. Matching ignores ASCII case and
/// surrounding whitespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TernaryGrammar {
    pub positive: &'static [&'static str],
    pub negative: &'static [&'static str],
}

pub const YES_NO: TernaryGrammar = TernaryGrammar {
    positive: &["yes"],
    negative: &["no"],
};

/// Ticking both boxes on these questions means the answer applies.
pub const YES_OR_BOTH: TernaryGrammar = TernaryGrammar {
    positive: &["yes", "both"],
    negative: &["no"],
};

impl TernaryGrammar {
    pub fn decode(&self, raw: Option<&str>) -> Option<YesOrNo> {
        let value = raw?.trim();
        if self
            .positive
            .iter()
            .any(|literal| value.eq_ignore_ascii_case(literal))
        {
            Some(YesOrNo::Yes)
        } else if self
            .negative
            .iter()
            .any(|literal| value.eq_ignore_ascii_case(literal))
        {
            Some(YesOrNo::No)
        } else {
            None
        }
    }
}

/// Checkbox coercion: anything but `true` is `false`, including absence.
pub fn decode_bool(raw: Option<&str>) -> bool {
    raw.map(|value| value.trim().eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}

pub type OrderForTable = &'static [(&'static str, &'static [FinancialOrderFor])];

pub const STANDARD_ORDER_FOR: OrderForTable = &[
    ("myself", &[FinancialOrderFor::Applicant]),
    (
        "myself,children",
        &[FinancialOrderFor::Applicant, FinancialOrderFor::Children],
    ),
    ("children", &[FinancialOrderFor::Children]),
];

/// Recipients ticked in the judicial separation prayer. The single children box maps to
/// both recipients and the combined literal to children only; see DESIGN.md before
/// changing.
pub const PRAYER_ORDER_FOR: OrderForTable = &[
    ("myself", &[FinancialOrderFor::Applicant]),
    (
        "forTheChildren",
        &[FinancialOrderFor::Applicant, FinancialOrderFor::Children],
    ),
    ("myself,forTheChildren", &[FinancialOrderFor::Children]),
];

/// Exact literal lookup, not a token parse: `children,myself` and ` myself` match nothing
/// and yield an empty set.
pub fn decode_financial_order_for(
    raw: Option<&str>,
    table: OrderForTable,
) -> BTreeSet<FinancialOrderFor> {
    let Some(value) = raw else {
        return BTreeSet::new();
    };

    table
        .iter()
        .find(|(literal, _)| *literal == value)
        .map(|(_, recipients)| recipients.iter().copied().collect())
        .unwrap_or_default()
}

/// Which party a compound jurisdiction answer refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Who {
    Applicant1,
    Applicant2,
    Both,
}

pub fn decode_who(raw: Option<&str>) -> Option<Who> {
    let value = raw?.trim();
    if value.eq_ignore_ascii_case("applicant1") {
        Some(Who::Applicant1)
    } else if value.eq_ignore_ascii_case("applicant2") {
        Some(Who::Applicant2)
    } else if value.eq_ignore_ascii_case("applicant1,applicant2") {
        Some(Who::Both)
    } else {
        None
    }
}

/// Joins the non-blank parts with newlines, keeping the declared order.
pub fn assemble_address<S: AsRef<str>>(parts: &[Option<S>]) -> Option<String> {
    join_non_blank(parts, "\n")
}

/// Day, month and year joined with spaces; no calendar validation at this point.
pub fn join_date_parts<S: AsRef<str>>(parts: &[Option<S>]) -> Option<String> {
    join_non_blank(parts, " ")
}

fn join_non_blank<S: AsRef<str>>(parts: &[Option<S>], separator: &str) -> Option<String> {
    let present: Vec<&str> = parts
        .iter()
        .filter_map(|part| part.as_ref().map(AsRef::as_ref))
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect();

    if present.is_empty() {
        None
    } else {
        Some(present.join(separator))
    }
}
