use std::collections::HashMap;
use std::io::Read;

use serde::{Deserialize, Serialize};

/// One recognised key/value pair from a scanned form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OcrDataField {
    pub name: String,
    pub value: String,
}

impl OcrDataField {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Read-only view over the OCR fields of a single form. Keys are case-sensitive and a
/// missing key is simply absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OcrFieldSet {
    values: HashMap<String, String>,
}

impl OcrFieldSet {
    /// Later occurrences of a name overwrite earlier ones.
    pub fn from_fields<I>(fields: I) -> Self
    where
        I: IntoIterator<Item = OcrDataField>,
    {
        let mut values = HashMap::new();
        for field in fields {
            values.insert(field.name, field.value);
        }
        Self { values }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Trimmed value, treating blank entries as absent.
    pub fn text(&self, name: &str) -> Option<String> {
        self.get(name)
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(str::to_string)
    }

    pub fn with_field(mut self, name: &str, value: &str) -> Self {
        self.values.insert(name.to_string(), value.to_string());
        self
    }

    pub fn without_field(mut self, name: &str) -> Self {
        self.values.remove(name);
        self
    }

    /// Field names in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl FromIterator<OcrDataField> for OcrFieldSet {
    fn from_iter<T: IntoIterator<Item = OcrDataField>>(iter: T) -> Self {
        Self::from_fields(iter)
    }
}

#[derive(Debug, Deserialize)]
struct FieldRow {
    name: String,
    #[serde(default)]
    value: String,
}

/// Reads `name,value` rows exported by the scanning service.
pub fn read_csv_fields<R: Read>(reader: R) -> Result<Vec<OcrDataField>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);
    let mut fields = Vec::new();

    for record in csv_reader.deserialize::<FieldRow>() {
        let row = record?;
        if row.name.is_empty() {
            continue;
        }
        fields.push(OcrDataField::new(row.name, row.value));
    }

    Ok(fields)
}

/// Reads a JSON array of `{ "name": ..., "value": ... }` objects.
pub fn read_json_fields<R: Read>(reader: R) -> Result<Vec<OcrDataField>, serde_json::Error> {
    serde_json::from_reader(reader)
}
