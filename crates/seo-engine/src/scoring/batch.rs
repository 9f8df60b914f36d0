use rayon::prelude::*;
use serde::Serialize;
use tracing::info;

use super::aggregator::{evaluate, ScoreResult};
use super::config::EntityConfig;
use super::grade::Grade;
use crate::entities::EntityType;
use crate::record::Record;
use crate::settings::SeoSettings;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct GradeDistribution {
    pub excellent: usize,
    pub good: usize,
    pub needs_improvement: usize,
    pub poor: usize,
}

impl GradeDistribution {
    fn add(&mut self, grade: Grade) {
        match grade {
            Grade::Excellent => self.excellent += 1,
            Grade::Good => self.good += 1,
            Grade::NeedsImprovement => self.needs_improvement += 1,
            Grade::Poor => self.poor += 1,
        }
    }

    pub fn count(&self, grade: Grade) -> usize {
        match grade {
            Grade::Excellent => self.excellent,
            Grade::Good => self.good,
            Grade::NeedsImprovement => self.needs_improvement,
            Grade::Poor => self.poor,
        }
    }
}

/// Dashboard roll-up over many records of one entity type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchSummary {
    pub entity_type: EntityType,
    pub evaluated: usize,
    pub average_percentage: f32,
    pub lowest_percentage: Option<u8>,
    pub highest_percentage: Option<u8>,
    pub grades: GradeDistribution,
    pub results: Vec<ScoreResult>,
}

/// Evaluates records in parallel; results keep the input order.
pub fn evaluate_batch(
    records: &[Record],
    config: &EntityConfig,
    settings: Option<&SeoSettings>,
) -> BatchSummary {
    let results: Vec<ScoreResult> = records
        .par_iter()
        .map(|record| evaluate(record, config, settings))
        .collect();

    let mut grades = GradeDistribution::default();
    let mut total: u64 = 0;
    for result in &results {
        grades.add(result.grade());
        total += u64::from(result.percentage);
    }

    let evaluated = results.len();
    let average_percentage = if evaluated == 0 {
        0.0
    } else {
        total as f32 / evaluated as f32
    };

    info!(
        entity = config.entity_type().as_str(),
        evaluated, average_percentage, "batch evaluated"
    );

    BatchSummary {
        entity_type: config.entity_type(),
        evaluated,
        average_percentage,
        lowest_percentage: results.iter().map(|result| result.percentage).min(),
        highest_percentage: results.iter().map(|result| result.percentage).max(),
        grades,
        results,
    }
}
