use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde_json::Value;

use super::aggregator::{evaluate, ScoreResult};
use super::result::ValidationResult;
use crate::entities::EntityType;
use crate::record::Record;
use crate::settings::SeoSettings;
use crate::structured_data::StructuredData;

type ValidatorFn =
    dyn Fn(Option<&Value>, &Record, Option<&SeoSettings>) -> ValidationResult + Send + Sync;

/// Shareable handle to a pure field rule.
///
/// The rule receives the field value (absent when the record lacks it), the whole record
/// for cross-field checks, and the settings snapshot the evaluation runs under.
#[derive(Clone)]
pub struct Validator(Arc<ValidatorFn>);

impl Validator {
    pub fn new<F>(rule: F) -> Self
    where
        F: Fn(Option<&Value>, &Record, Option<&SeoSettings>) -> ValidationResult
            + Send
            + Sync
            + 'static,
    {
        Self(Arc::new(rule))
    }

    pub fn validate(
        &self,
        value: Option<&Value>,
        record: &Record,
        settings: Option<&SeoSettings>,
    ) -> ValidationResult {
        (self.0)(value, record, settings)
    }
}

impl fmt::Debug for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Validator(..)")
    }
}

/// One scored check. `name` selects the record value and may repeat within a config.
#[derive(Debug, Clone)]
pub struct FieldConfig {
    pub name: &'static str,
    pub label: &'static str,
    pub validator: Validator,
}

impl FieldConfig {
    pub fn new(name: &'static str, label: &'static str, validator: Validator) -> Self {
        Self {
            name,
            label,
            validator,
        }
    }
}

pub type StructuredDataFn = fn(&Record, DateTime<Utc>) -> StructuredData;

/// Immutable scoring rubric and structured-data builder for one entity type.
#[derive(Debug, Clone)]
pub struct EntityConfig {
    entity_type: EntityType,
    max_score: u32,
    fields: Vec<FieldConfig>,
    structured_data: StructuredDataFn,
}

impl EntityConfig {
    pub fn new(
        entity_type: EntityType,
        max_score: u32,
        fields: Vec<FieldConfig>,
        structured_data: StructuredDataFn,
    ) -> Self {
        Self {
            entity_type,
            max_score,
            fields,
            structured_data,
        }
    }

    pub fn entity_type(&self) -> EntityType {
        self.entity_type
    }

    pub fn max_score(&self) -> u32 {
        self.max_score
    }

    /// Checks in declared order, duplicates included.
    pub fn fields(&self) -> &[FieldConfig] {
        &self.fields
    }

    pub fn evaluate(&self, record: &Record, settings: Option<&SeoSettings>) -> ScoreResult {
        evaluate(record, self, settings)
    }

    pub fn generate_structured_data(&self, record: &Record) -> StructuredData {
        self.generate_structured_data_at(record, Utc::now())
    }

    /// Same as [`Self::generate_structured_data`] with an explicit clock for "now" defaults.
    pub fn generate_structured_data_at(
        &self,
        record: &Record,
        now: DateTime<Utc>,
    ) -> StructuredData {
        (self.structured_data)(record, now)
    }
}
