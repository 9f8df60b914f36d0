use std::sync::OnceLock;

use chrono::{DateTime, Utc};
use serde_json::Value;
use tracing::debug;

use super::EntityType;
use crate::record::Record;
use crate::scoring::validators::{
    canonical_url, count_words, focus_keywords, image, image_alt_text, open_graph_tags,
    optional_text, related_entity, required_text, seo_description, seo_title, slug, tags,
    word_count,
};
use crate::scoring::{EntityConfig, FieldConfig};
use crate::settings::SeoSettings;
use crate::structured_data::{
    finalize, iso_timestamp, media_url, now_timestamp, relation_media_url, root, LdObject,
    StructuredData,
};

pub const MAX_SCORE: u32 = 120;

static DEFAULT_CONFIG: OnceLock<EntityConfig> = OnceLock::new();

pub fn default_config() -> &'static EntityConfig {
    DEFAULT_CONFIG.get_or_init(|| create_config(None))
}

pub fn create_config(settings: Option<&SeoSettings>) -> EntityConfig {
    let fields = vec![
        FieldConfig::new("title", "Title", required_text(5, "Title")),
        FieldConfig::new("slug", "URL Slug", slug()),
        FieldConfig::new("seoTitle", "SEO Title", seo_title(settings)),
        FieldConfig::new("seoDescription", "SEO Description", seo_description(settings)),
        FieldConfig::new("content", "Content Length", word_count()),
        FieldConfig::new(
            "excerpt",
            "Excerpt",
            optional_text(5, "Excerpt", "listing pages will cut the body instead"),
        ),
        FieldConfig::new(
            "featuredImageMedia",
            "Featured Image",
            image("Featured image", true),
        ),
        FieldConfig::new(
            "featuredImageMedia",
            "Featured Image Alt Text",
            image_alt_text("Featured image alt text"),
        ),
        FieldConfig::new("author", "Author", related_entity("Author")),
        FieldConfig::new("category", "Category", related_entity("Category")),
        FieldConfig::new("tags", "Tags", tags()),
        FieldConfig::new("focusKeywords", "Focus Keywords", focus_keywords()),
        FieldConfig::new("canonicalUrl", "Canonical URL", canonical_url()),
        FieldConfig::new(
            "seoTitle",
            "Open Graph Tags",
            open_graph_tags("featuredImageMedia"),
        ),
    ];

    debug!(
        entity = EntityType::Article.as_str(),
        fields = fields.len(),
        tuned = settings.is_some(),
        "entity config built"
    );

    EntityConfig::new(EntityType::Article, MAX_SCORE, fields, structured_data)
}

/// `dateModified` falls back to `now` when the record carries no update time.
pub fn structured_data(record: &Record, now: DateTime<Utc>) -> StructuredData {
    let author = record.relation("author").map(|author| {
        LdObject::typed("Person")
            .with("name", author.name())
            .with("url", author.url())
    });

    let publisher = record.relation("client").map(|client| {
        let logo = relation_media_url(&client, "logoMedia")
            .map(|url| LdObject::typed("ImageObject").with("url", url));
        LdObject::typed("Organization")
            .with("name", client.name())
            .with("url", client.url())
            .with("logo", logo)
    });

    let main_entity = record
        .text("canonicalUrl")
        .map(|url| LdObject::typed("WebPage").with("@id", url));

    let word_count = record
        .text("content")
        .map(count_words)
        .filter(|words| *words > 0)
        .map(Value::from);

    let keywords = record.strings("focusKeywords");
    let keywords = (!keywords.is_empty()).then(|| keywords.join(", "));

    let date_modified =
        iso_timestamp(record.text("updatedAt")).unwrap_or_else(|| now_timestamp(now));

    finalize(
        root("Article")
            .with("headline", record.first_text(&["title", "seoTitle"]))
            .with(
                "description",
                record.first_text(&["seoDescription", "excerpt"]),
            )
            .with(
                "image",
                media_url(record, "ogImageMedia")
                    .or_else(|| media_url(record, "featuredImageMedia")),
            )
            .with("datePublished", iso_timestamp(record.text("publishedAt")))
            .with("dateModified", date_modified)
            .with("author", author)
            .with("publisher", publisher)
            .with("mainEntityOfPage", main_entity)
            .with(
                "articleSection",
                record.relation("category").and_then(|category| category.name()),
            )
            .with("wordCount", word_count)
            .with("inLanguage", record.text("language"))
            .with("keywords", keywords),
    )
}
