use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

use super::domain::CaseRecord;
use super::StageError;

pub const WARNINGS_KEY: &str = "transformationAndOcrWarnings";
pub const CASE_REFERENCE_KEY: &str = "bulkScanCaseReference";

/// Untyped output handed back to the intake caller.
pub type CaseFieldMap = Map<String, Value>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WarningRecord {
    pub id: String,
    pub value: String,
}

/// How warning record ids are minted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WarningIdStrategy {
    /// Random v4 UUID per record.
    #[default]
    Uuid,
    /// `1`, `2`, ... restarting for every transformation. Output is reproducible.
    Sequential,
}

impl WarningIdStrategy {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "uuid" => Some(Self::Uuid),
            "sequential" => Some(Self::Sequential),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Uuid => "uuid",
            Self::Sequential => "sequential",
        }
    }

    fn id_for(&self, index: usize) -> String {
        match self {
            Self::Uuid => Uuid::new_v4().to_string(),
            Self::Sequential => (index + 1).to_string(),
        }
    }
}

/// Flattens the draft into one level of camel-joined keys and appends the two reserved
/// entries.
pub fn serialize_case(
    case: &CaseRecord,
    warnings: &[String],
    source_record_id: &str,
    ids: WarningIdStrategy,
) -> Result<CaseFieldMap, StageError> {
    let Value::Object(root) = serde_json::to_value(case)? else {
        return Err(StageError::InvalidOutput(
            "case record did not serialize to an object".to_string(),
        ));
    };

    let mut output = CaseFieldMap::new();
    for (key, value) in root {
        flatten_into(&mut output, key, value)?;
    }

    let records: Vec<WarningRecord> = warnings
        .iter()
        .enumerate()
        .map(|(index, warning)| WarningRecord {
            id: ids.id_for(index),
            value: warning.clone(),
        })
        .collect();

    insert_unique(&mut output, WARNINGS_KEY.to_string(), serde_json::to_value(records)?)?;
    insert_unique(
        &mut output,
        CASE_REFERENCE_KEY.to_string(),
        Value::String(source_record_id.to_string()),
    )?;

    Ok(output)
}

fn flatten_into(output: &mut CaseFieldMap, key: String, value: Value) -> Result<(), StageError> {
    match value {
        Value::Object(children) => {
            for (child, value) in children {
                flatten_into(output, camel_join(&key, &child), value)?;
            }
            Ok(())
        }
        other => insert_unique(output, key, other),
    }
}

fn insert_unique(output: &mut CaseFieldMap, key: String, value: Value) -> Result<(), StageError> {
    if output.contains_key(&key) {
        return Err(StageError::InvalidOutput(format!(
            "duplicate output key '{key}'"
        )));
    }
    output.insert(key, value);
    Ok(())
}

fn camel_join(prefix: &str, child: &str) -> String {
    let mut chars = child.chars();
    match chars.next() {
        Some(first) => {
            let mut joined = String::with_capacity(prefix.len() + child.len());
            joined.push_str(prefix);
            joined.extend(first.to_uppercase());
            joined.push_str(chars.as_str());
            joined
        }
        None => prefix.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::bulk_scan::domain::{
        Applicant, ApplicationType, DivorceOrDissolution, Solicitor, YesOrNo,
    };

    fn sample_case() -> CaseRecord {
        CaseRecord {
            divorce_or_dissolution: Some(DivorceOrDissolution::Divorce),
            application_type: Some(ApplicationType::SoleApplication),
            applicant1: Some(Applicant {
                first_name: Some("Ann".to_string()),
                solicitor_represented: Some(YesOrNo::Yes),
                solicitor: Some(Solicitor {
                    name: Some("Sol".to_string()),
                    ..Solicitor::default()
                }),
                ..Applicant::default()
            }),
            ..CaseRecord::default()
        }
    }

    #[test]
    fn nested_keys_are_camel_joined() {
        let output =
            serialize_case(&sample_case(), &[], "1234", WarningIdStrategy::Sequential)
                .expect("serializes");

        assert_eq!(output["divorceOrDissolution"], "divorce");
        assert_eq!(output["applicant1FirstName"], "Ann");
        assert_eq!(output["applicant1SolicitorName"], "Sol");
        assert_eq!(output["applicant1SolicitorRepresented"], "Yes");
        assert_eq!(output[CASE_REFERENCE_KEY], "1234");
        assert!(!output.contains_key("applicant2FirstName"));
        assert!(!output.contains_key("applicant1"));
    }

    #[test]
    fn warnings_keep_order_with_sequential_ids() {
        let warnings = vec!["first".to_string(), "second".to_string()];
        let output = serialize_case(
            &sample_case(),
            &warnings,
            "1234",
            WarningIdStrategy::Sequential,
        )
        .expect("serializes");

        let records: Vec<WarningRecord> =
            serde_json::from_value(output[WARNINGS_KEY].clone()).expect("records");
        assert_eq!(
            records,
            vec![
                WarningRecord {
                    id: "1".to_string(),
                    value: "first".to_string()
                },
                WarningRecord {
                    id: "2".to_string(),
                    value: "second".to_string()
                },
            ]
        );
    }

    #[test]
    fn uuid_ids_are_unique_per_record() {
        let warnings = vec!["same".to_string(), "same".to_string()];
        let output = serialize_case(&sample_case(), &warnings, "1", WarningIdStrategy::Uuid)
            .expect("serializes");
        let records: Vec<WarningRecord> =
            serde_json::from_value(output[WARNINGS_KEY].clone()).expect("records");

        assert_eq!(records.len(), 2);
        assert_ne!(records[0].id, records[1].id);
        assert!(Uuid::parse_str(&records[0].id).is_ok());
    }

    #[test]
    fn strategy_parse_ignores_case() {
        assert_eq!(
            WarningIdStrategy::parse("Sequential"),
            Some(WarningIdStrategy::Sequential)
        );
        assert_eq!(WarningIdStrategy::parse(" UUID "), Some(WarningIdStrategy::Uuid));
        assert_eq!(WarningIdStrategy::parse("random"), None);
    }

    #[test]
    fn reserved_key_collision_is_rejected() {
        let mut output = CaseFieldMap::new();
        output.insert(CASE_REFERENCE_KEY.to_string(), Value::Null);
        let result = insert_unique(&mut output, CASE_REFERENCE_KEY.to_string(), Value::Null);
        assert!(matches!(result, Err(StageError::InvalidOutput(_))));
    }
}
