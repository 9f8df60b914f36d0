use std::sync::OnceLock;

use chrono::{DateTime, Utc};
use tracing::debug;

use super::{taxonomy_structured_data, EntityType};
use crate::record::Record;
use crate::scoring::validators::{
    canonical_url, image, image_alt_text, prose, required_text, seo_description, seo_title, slug,
};
use crate::scoring::{EntityConfig, FieldConfig};
use crate::settings::SeoSettings;
use crate::structured_data::StructuredData;

pub const MAX_SCORE: u32 = 75;

static DEFAULT_CONFIG: OnceLock<EntityConfig> = OnceLock::new();

pub fn default_config() -> &'static EntityConfig {
    DEFAULT_CONFIG.get_or_init(|| create_config(None))
}

pub fn create_config(settings: Option<&SeoSettings>) -> EntityConfig {
    let fields = vec![
        FieldConfig::new("name", "Name", required_text(5, "Industry name")),
        FieldConfig::new("slug", "URL Slug", slug()),
        FieldConfig::new("description", "Description", prose("Description")),
        FieldConfig::new("seoTitle", "SEO Title", seo_title(settings)),
        FieldConfig::new("seoDescription", "SEO Description", seo_description(settings)),
        FieldConfig::new("iconMedia", "Icon", image("Icon", true)),
        FieldConfig::new("iconMedia", "Icon Alt Text", image_alt_text("Icon alt text")),
        FieldConfig::new("canonicalUrl", "Canonical URL", canonical_url()),
    ];

    debug!(
        entity = EntityType::Industry.as_str(),
        fields = fields.len(),
        tuned = settings.is_some(),
        "entity config built"
    );

    EntityConfig::new(EntityType::Industry, MAX_SCORE, fields, structured_data)
}

/// Industries have no schema.org class of their own; the custom type is kept as-is.
pub fn structured_data(record: &Record, _now: DateTime<Utc>) -> StructuredData {
    taxonomy_structured_data("Industry", record)
}
