//! Article authors. Several checks here feed E-E-A-T signals.

use std::sync::OnceLock;

use chrono::{DateTime, Utc};
use tracing::debug;

use super::EntityType;
use crate::record::Record;
use crate::scoring::validators::{
    biography, email_address, expertise_areas, image, image_alt_text, optional_text,
    required_text, seo_description, seo_title, slug, social_profiles,
};
use crate::scoring::{EntityConfig, FieldConfig};
use crate::settings::SeoSettings;
use crate::structured_data::{finalize, media_url, root, string_list, LdObject, StructuredData};

pub const MAX_SCORE: u32 = 100;

/// Individual profile fields assembled into `sameAs` when no explicit list exists.
const SAME_AS_FIELDS: [&str; 3] = ["linkedinUrl", "twitterUrl", "facebookUrl"];

static DEFAULT_CONFIG: OnceLock<EntityConfig> = OnceLock::new();

pub fn default_config() -> &'static EntityConfig {
    DEFAULT_CONFIG.get_or_init(|| create_config(None))
}

pub fn create_config(settings: Option<&SeoSettings>) -> EntityConfig {
    let fields = vec![
        FieldConfig::new("name", "Name", required_text(5, "Name")),
        FieldConfig::new("slug", "URL Slug", slug()),
        FieldConfig::new("bio", "Biography", biography()),
        FieldConfig::new(
            "jobTitle",
            "Job Title",
            optional_text(5, "Job title", "it signals expertise to readers"),
        ),
        FieldConfig::new("avatarMedia", "Profile Photo", image("Profile photo", true)),
        FieldConfig::new(
            "avatarMedia",
            "Profile Photo Alt Text",
            image_alt_text("Profile photo alt text"),
        ),
        FieldConfig::new("expertiseAreas", "Expertise Areas", expertise_areas()),
        FieldConfig::new("linkedinUrl", "Social Profiles", social_profiles()),
        FieldConfig::new("email", "Contact Email", email_address()),
        FieldConfig::new("seoTitle", "SEO Title", seo_title(settings)),
        FieldConfig::new("seoDescription", "SEO Description", seo_description(settings)),
    ];

    debug!(
        entity = EntityType::Person.as_str(),
        fields = fields.len(),
        tuned = settings.is_some(),
        "entity config built"
    );

    EntityConfig::new(EntityType::Person, MAX_SCORE, fields, structured_data)
}

pub fn structured_data(record: &Record, _now: DateTime<Utc>) -> StructuredData {
    let works_for = record.relation("client").map(|client| {
        LdObject::typed("Organization")
            .with("name", client.name())
            .with("url", client.url())
    });

    let explicit = record.strings("sameAs");
    let same_as = if explicit.is_empty() {
        SAME_AS_FIELDS
            .iter()
            .filter_map(|name| record.text(name))
            .collect()
    } else {
        explicit
    };

    finalize(
        root("Person")
            .with("name", record.text("name"))
            .with("description", record.text("bio"))
            .with("url", record.text("url"))
            .with("image", media_url(record, "avatarMedia"))
            .with("jobTitle", record.text("jobTitle"))
            .with("email", record.text("email"))
            .with("worksFor", works_for)
            .with("knowsAbout", string_list(record.strings("expertiseAreas")))
            .with("sameAs", string_list(same_as)),
    )
}
