//! Per-entity scoring rubrics and structured-data builders.

pub mod article;
pub mod category;
pub mod industry;
pub mod organization;
pub mod person;
pub mod tag;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::record::Record;
use crate::scoring::EntityConfig;
use crate::settings::SeoSettings;
use crate::structured_data::{finalize, root, StructuredData};

/// Content types the admin panel manages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityType {
    /// Client organizations.
    Organization,
    Article,
    /// Article authors.
    Person,
    Category,
    Tag,
    Industry,
}

impl EntityType {
    pub const fn ordered() -> [Self; 6] {
        [
            Self::Organization,
            Self::Article,
            Self::Person,
            Self::Category,
            Self::Tag,
            Self::Industry,
        ]
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Organization => "organization",
            Self::Article => "article",
            Self::Person => "person",
            Self::Category => "category",
            Self::Tag => "tag",
            Self::Industry => "industry",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Organization => "Organization",
            Self::Article => "Article",
            Self::Person => "Author",
            Self::Category => "Category",
            Self::Tag => "Tag",
            Self::Industry => "Industry",
        }
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown entity type '{0}' (expected organization, article, person, category, tag or industry)")]
pub struct UnknownEntityType(pub String);

impl FromStr for EntityType {
    type Err = UnknownEntityType;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "organization" | "organisation" | "client" => Ok(Self::Organization),
            "article" => Ok(Self::Article),
            "person" | "author" => Ok(Self::Person),
            "category" => Ok(Self::Category),
            "tag" => Ok(Self::Tag),
            "industry" => Ok(Self::Industry),
            _ => Err(UnknownEntityType(value.to_string())),
        }
    }
}

/// Builds a fresh config whose threshold rules follow `settings`.
pub fn create_config(entity: EntityType, settings: Option<&SeoSettings>) -> EntityConfig {
    match entity {
        EntityType::Organization => organization::create_config(settings),
        EntityType::Article => article::create_config(settings),
        EntityType::Person => person::create_config(settings),
        EntityType::Category => category::create_config(settings),
        EntityType::Tag => tag::create_config(settings),
        EntityType::Industry => industry::create_config(settings),
    }
}

/// Process-wide config built once with default settings.
pub fn default_config(entity: EntityType) -> &'static EntityConfig {
    match entity {
        EntityType::Organization => organization::default_config(),
        EntityType::Article => article::default_config(),
        EntityType::Person => person::default_config(),
        EntityType::Category => category::default_config(),
        EntityType::Tag => tag::default_config(),
        EntityType::Industry => industry::default_config(),
    }
}

/// Lightweight node shared by the taxonomy entities (category, tag, industry).
pub(crate) fn taxonomy_structured_data(ld_type: &str, record: &Record) -> StructuredData {
    finalize(
        root(ld_type)
            .with("name", record.text("name"))
            .with(
                "description",
                record.first_text(&["description", "seoDescription"]),
            )
            .with("url", record.text("canonicalUrl")),
    )
}
