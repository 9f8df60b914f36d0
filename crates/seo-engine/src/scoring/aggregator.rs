use std::collections::HashSet;

use serde::Serialize;
use tracing::{debug, trace};

use super::config::EntityConfig;
use super::grade::Grade;
use super::result::{ValidationResult, ValidationStatus};
use crate::entities::EntityType;
use crate::record::Record;
use crate::settings::SeoSettings;

/// One evaluated entry of a config, kept for the itemized breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldCheck {
    pub field: &'static str,
    pub label: &'static str,
    #[serde(flatten)]
    pub result: ValidationResult,
}

/// Per-status counts feeding summary badges; not part of the score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusTally {
    pub good: usize,
    pub warning: usize,
    pub error: usize,
    pub info: usize,
}

impl StatusTally {
    fn record(&mut self, status: ValidationStatus) {
        match status {
            ValidationStatus::Good => self.good += 1,
            ValidationStatus::Warning => self.warning += 1,
            ValidationStatus::Error => self.error += 1,
            ValidationStatus::Info => self.info += 1,
        }
    }

    pub fn count(&self, status: ValidationStatus) -> usize {
        match status {
            ValidationStatus::Good => self.good,
            ValidationStatus::Warning => self.warning,
            ValidationStatus::Error => self.error,
            ValidationStatus::Info => self.info,
        }
    }

    pub fn total(&self) -> usize {
        self.good + self.warning + self.error + self.info
    }
}

/// Bounded health score for one record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreResult {
    pub entity_type: EntityType,
    pub score: u32,
    pub max_score: u32,
    pub percentage: u8,
    pub tally: StatusTally,
    pub checks: Vec<FieldCheck>,
}

impl ScoreResult {
    pub fn grade(&self) -> Grade {
        Grade::from_percentage(self.percentage)
    }

    /// Breakdown for display: repeated field names collapse to their first entry.
    ///
    /// Scoring itself always counts every entry.
    pub fn display_checks(&self) -> Vec<&FieldCheck> {
        let mut seen = HashSet::new();
        self.checks
            .iter()
            .filter(|check| seen.insert(check.field))
            .collect()
    }

    pub fn checks_with_status(
        &self,
        status: ValidationStatus,
    ) -> impl Iterator<Item = &FieldCheck> {
        self.checks
            .iter()
            .filter(move |check| check.result.status == status)
    }
}

/// Scores `record` against every entry of `config`, in declared order.
pub fn evaluate(
    record: &Record,
    config: &EntityConfig,
    settings: Option<&SeoSettings>,
) -> ScoreResult {
    let mut raw_score: u32 = 0;
    let mut tally = StatusTally::default();
    let mut checks = Vec::with_capacity(config.fields().len());

    for field in config.fields() {
        let value = record.get(field.name);
        let result = field.validator.validate(value, record, settings);
        trace!(
            field = field.name,
            label = field.label,
            status = result.status.label(),
            score = result.score,
            "field checked"
        );

        raw_score = raw_score.saturating_add(result.score);
        tally.record(result.status);
        checks.push(FieldCheck {
            field: field.name,
            label: field.label,
            result,
        });
    }

    let max_score = config.max_score();
    let score = raw_score.min(max_score);
    let percentage = percentage(score, max_score);

    debug!(
        entity = config.entity_type().as_str(),
        raw_score,
        score,
        max_score,
        percentage,
        "record evaluated"
    );

    ScoreResult {
        entity_type: config.entity_type(),
        score,
        max_score,
        percentage,
        tally,
        checks,
    }
}

/// Rounded share of `max_score`, clamped to 0..=100; an empty rubric scores 0.
pub fn percentage(score: u32, max_score: u32) -> u8 {
    if max_score == 0 {
        return 0;
    }
    let pct = (f64::from(score) / f64::from(max_score) * 100.0).round();
    pct.clamp(0.0, 100.0) as u8
}
