use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Denormalized snapshot of one content entity as handed over by the data-access layer.
///
/// Accessors never fail: a value of the wrong shape reads as absent, so validators and
/// generators only ever branch on presence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: Map<String, Value>,
}

/// Raised when a JSON document cannot act as a record.
#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    #[error("record must be a JSON object, found {found}")]
    NotAnObject { found: &'static str },
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder used by callers assembling a record field by field.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    pub fn from_value(value: Value) -> Result<Self, RecordError> {
        match value {
            Value::Object(fields) => Ok(Self { fields }),
            other => Err(RecordError::NotAnObject {
                found: kind_of(&other),
            }),
        }
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Raw field value; `null` reads as absent.
    pub fn get(&self, name: &str) -> Option<&Value> {
        present(self.fields.get(name))
    }

    pub fn text(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(as_text)
    }

    pub fn strings(&self, name: &str) -> Vec<&str> {
        self.get(name).map(as_strings).unwrap_or_default()
    }

    pub fn number(&self, name: &str) -> Option<f64> {
        self.get(name).and_then(Value::as_f64)
    }

    pub fn flag(&self, name: &str) -> Option<bool> {
        self.get(name).and_then(Value::as_bool)
    }

    pub fn relation(&self, name: &str) -> Option<Relation<'_>> {
        self.get(name).and_then(Relation::from_value)
    }

    pub fn date(&self, name: &str) -> Option<NaiveDate> {
        self.text(name).and_then(parse_date)
    }

    pub fn has_text(&self, name: &str) -> bool {
        self.text(name).is_some()
    }

    /// First non-empty text among `names`, in order.
    pub fn first_text(&self, names: &[&str]) -> Option<&str> {
        names.iter().find_map(|name| self.text(name))
    }
}

impl From<Map<String, Value>> for Record {
    fn from(fields: Map<String, Value>) -> Self {
        Self { fields }
    }
}

impl TryFrom<Value> for Record {
    type Error = RecordError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::from_value(value)
    }
}

/// Borrowed view over a nested relation snapshot such as `logoMedia` or `author`.
#[derive(Debug, Clone, Copy)]
pub struct Relation<'a> {
    fields: &'a Map<String, Value>,
}

impl<'a> Relation<'a> {
    pub fn from_value(value: &'a Value) -> Option<Self> {
        value.as_object().map(|fields| Self { fields })
    }

    pub fn get(&self, name: &str) -> Option<&'a Value> {
        present(self.fields.get(name))
    }

    pub fn text(&self, name: &str) -> Option<&'a str> {
        self.get(name).and_then(as_text)
    }

    pub fn number(&self, name: &str) -> Option<f64> {
        self.get(name).and_then(Value::as_f64)
    }

    pub fn relation(&self, name: &str) -> Option<Relation<'a>> {
        self.get(name).and_then(Relation::from_value)
    }

    pub fn url(&self) -> Option<&'a str> {
        self.text("url")
    }

    pub fn name(&self) -> Option<&'a str> {
        self.text("name")
    }
}

/// Accepts `YYYY-MM-DD` or an RFC 3339 timestamp and keeps the calendar date.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
}

fn present(value: Option<&Value>) -> Option<&Value> {
    value.filter(|value| !value.is_null())
}

pub(crate) fn as_text(value: &Value) -> Option<&str> {
    value.as_str().map(str::trim).filter(|text| !text.is_empty())
}

pub(crate) fn as_strings(value: &Value) -> Vec<&str> {
    value
        .as_array()
        .map(|items| items.iter().filter_map(as_text).collect())
        .unwrap_or_default()
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn wrong_types_read_as_absent() {
        let record = Record::new()
            .with("seoTitle", 42)
            .with("keywords", json!(["seo", "", 7, "rust"]))
            .with("logoMedia", json!(["not", "an", "object"]))
            .with("email", Value::Null)
            .with("name", "   ");

        assert_eq!(record.text("seoTitle"), None);
        assert_eq!(record.strings("keywords"), vec!["seo", "rust"]);
        assert!(record.relation("logoMedia").is_none());
        assert!(record.get("email").is_none());
        assert!(!record.has_text("name"));
    }

    #[test]
    fn dates_accept_plain_and_timestamp_forms() {
        let expected = NaiveDate::from_ymd_opt(2019, 4, 2).expect("valid date");
        assert_eq!(parse_date("2019-04-02"), Some(expected));
        assert_eq!(parse_date("2019-04-02T10:30:00+02:00"), Some(expected));
        assert_eq!(parse_date("April 2nd"), None);
    }

    #[test]
    fn non_object_documents_are_rejected() {
        let err = Record::from_value(json!([1, 2])).expect_err("arrays are not records");
        assert_eq!(err.to_string(), "record must be a JSON object, found an array");
    }
}
