//! Configuration-driven SEO health scoring.

mod aggregator;
mod batch;
mod config;
mod grade;
mod result;
pub mod validators;

#[cfg(test)]
mod tests;

pub use aggregator::{evaluate, percentage, FieldCheck, ScoreResult, StatusTally};
pub use batch::{evaluate_batch, BatchSummary, GradeDistribution};
pub use config::{EntityConfig, FieldConfig, StructuredDataFn, Validator};
pub use grade::Grade;
pub use result::{ValidationResult, ValidationStatus};
