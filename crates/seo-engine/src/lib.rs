//! SEO readiness scoring and schema.org structured-data generation for
//! admin-panel content records.

pub mod config;
pub mod entities;
pub mod error;
pub mod record;
pub mod scoring;
pub mod settings;
pub mod structured_data;
pub mod telemetry;

pub use entities::{create_config, default_config, EntityType, UnknownEntityType};
pub use record::{Record, RecordError};
pub use scoring::{evaluate, evaluate_batch, BatchSummary, EntityConfig, Grade, ScoreResult};
pub use settings::SeoSettings;
pub use structured_data::{LdObject, LdValue, StructuredData};
