//! Client organizations: the largest rubric, with several fields checked twice.

use std::sync::OnceLock;

use chrono::{DateTime, Utc};
use tracing::debug;

use super::EntityType;
use crate::record::Record;
use crate::scoring::validators::{
    canonical_url, contact_information, focus_keywords, gtm_container, image, image_alt_text,
    image_dimensions, open_graph_tags, optional_text, postal_address, prose, publication_date,
    required_text, seo_description, seo_title, slug, social_profiles, twitter_card,
    twitter_description, twitter_handle, twitter_title, website_url,
};
use crate::scoring::{EntityConfig, FieldConfig};
use crate::settings::SeoSettings;
use crate::structured_data::{
    finalize, iso_date, media_url, root, string_list, LdObject, StructuredData,
};

pub const MAX_SCORE: u32 = 200;

static DEFAULT_CONFIG: OnceLock<EntityConfig> = OnceLock::new();

pub fn default_config() -> &'static EntityConfig {
    DEFAULT_CONFIG.get_or_init(|| create_config(None))
}

pub fn create_config(settings: Option<&SeoSettings>) -> EntityConfig {
    let fields = vec![
        FieldConfig::new("name", "Organization Name", required_text(5, "Organization name")),
        FieldConfig::new("slug", "URL Slug", slug()),
        FieldConfig::new("url", "Website URL", website_url()),
        FieldConfig::new(
            "legalName",
            "Legal Name",
            optional_text(5, "Legal name", "it strengthens the Organization schema"),
        ),
        FieldConfig::new("description", "Description", prose("Description")),
        FieldConfig::new("seoTitle", "SEO Title", seo_title(settings)),
        FieldConfig::new("seoDescription", "SEO Description", seo_description(settings)),
        FieldConfig::new("logoMedia", "Logo", image("Logo", true)),
        FieldConfig::new("logoMedia", "Logo Alt Text", image_alt_text("Logo alt text")),
        FieldConfig::new(
            "ogImageMedia",
            "Open Graph Image",
            image("Open Graph image", false),
        ),
        FieldConfig::new(
            "ogImageMedia",
            "Open Graph Image Alt Text",
            image_alt_text("Open Graph image alt text"),
        ),
        FieldConfig::new(
            "ogImageMedia",
            "Open Graph Image Dimensions",
            image_dimensions(),
        ),
        FieldConfig::new("seoTitle", "Open Graph Tags", open_graph_tags("logoMedia")),
        FieldConfig::new("twitterTitle", "Twitter Title", twitter_title(settings)),
        FieldConfig::new(
            "twitterDescription",
            "Twitter Description",
            twitter_description(settings),
        ),
        FieldConfig::new("twitterHandle", "Twitter Handle", twitter_handle()),
        FieldConfig::new("twitterTitle", "Twitter Card", twitter_card()),
        FieldConfig::new("sameAs", "Social Profiles", social_profiles()),
        FieldConfig::new("email", "Contact Information", contact_information()),
        FieldConfig::new("streetAddress", "Postal Address", postal_address()),
        FieldConfig::new("foundingDate", "Founding Date", publication_date("Founding date")),
        FieldConfig::new("canonicalUrl", "Canonical URL", canonical_url()),
        FieldConfig::new("gtmId", "Google Tag Manager", gtm_container()),
        FieldConfig::new("focusKeywords", "Focus Keywords", focus_keywords()),
    ];

    debug!(
        entity = EntityType::Organization.as_str(),
        fields = fields.len(),
        tuned = settings.is_some(),
        "entity config built"
    );

    EntityConfig::new(EntityType::Organization, MAX_SCORE, fields, structured_data)
}

pub fn structured_data(record: &Record, _now: DateTime<Utc>) -> StructuredData {
    let email = record.text("email");
    let phone = record.text("phone");
    let contact_point = (email.is_some() || phone.is_some()).then(|| {
        LdObject::typed("ContactPoint")
            .with("email", email)
            .with("telephone", phone)
            .with("contactType", record.text("contactType"))
    });

    let street = record.text("streetAddress");
    let city = record.text("addressLocality");
    let country = record.text("addressCountry");
    let address = (street.is_some() || city.is_some() || country.is_some()).then(|| {
        LdObject::typed("PostalAddress")
            .with("streetAddress", street)
            .with("addressLocality", city)
            .with("addressRegion", record.text("addressRegion"))
            .with("postalCode", record.text("postalCode"))
            .with("addressCountry", country)
    });

    finalize(
        root("Organization")
            .with("name", record.text("name"))
            .with("legalName", record.text("legalName"))
            .with("url", record.text("url"))
            .with("logo", media_url(record, "logoMedia"))
            .with(
                "description",
                record.first_text(&["description", "seoDescription"]),
            )
            .with("foundingDate", iso_date(record.text("foundingDate")))
            .with("contactPoint", contact_point)
            .with("address", address)
            .with("sameAs", string_list(record.strings("sameAs"))),
    )
}
