use super::{value_relation, value_text};
use crate::record::parse_date;
use crate::scoring::{ValidationResult, Validator};
use crate::structured_data::media_url;

const ADDRESS_FIELDS: [&str; 4] = [
    "streetAddress",
    "addressLocality",
    "postalCode",
    "addressCountry",
];

/// Email and phone are judged together.
pub fn contact_information() -> Validator {
    Validator::new(|_, record, _| {
        match (record.has_text("email"), record.has_text("phone")) {
            (true, true) => ValidationResult::good(10, "Email and phone are both listed"),
            (true, false) => ValidationResult::warning(5, "Email listed; add a phone number"),
            (false, true) => ValidationResult::warning(5, "Phone listed; add an email address"),
            (false, false) => ValidationResult::warning(0, "No contact information provided"),
        }
    })
}

pub fn postal_address() -> Validator {
    Validator::new(|_, record, _| {
        let present = ADDRESS_FIELDS
            .iter()
            .filter(|name| record.has_text(name))
            .count();
        match present {
            0 => ValidationResult::info("No postal address; only needed for local businesses"),
            1 => ValidationResult::warning(
                2,
                "Postal address is mostly incomplete (1 of 4 parts)",
            ),
            4 => ValidationResult::good(10, "Postal address is complete"),
            count => ValidationResult::warning(
                5,
                format!("Postal address is partial ({count} of 4 parts)"),
            ),
        }
    })
}

/// Whether enough data exists to synthesize complete Open Graph output.
///
/// `fallback_image` names the entity's own image relation used when no dedicated
/// Open Graph image is set.
pub fn open_graph_tags(fallback_image: &'static str) -> Validator {
    Validator::new(move |_, record, _| {
        let title = record.first_text(&["ogTitle", "seoTitle"]).is_some();
        let description = record
            .first_text(&["ogDescription", "seoDescription", "description"])
            .is_some();
        let image = media_url(record, "ogImageMedia")
            .or_else(|| media_url(record, fallback_image))
            .is_some();

        let mut missing = Vec::new();
        if !title {
            missing.push("og:title");
        }
        if !description {
            missing.push("og:description");
        }
        if !image {
            missing.push("og:image");
        }

        match missing.len() {
            0 => ValidationResult::good(10, "Open Graph title, description and image available"),
            1 => ValidationResult::warning(6, format!("Open Graph is missing {}", missing[0])),
            2 => ValidationResult::warning(
                3,
                format!("Open Graph is missing {}", missing.join(" and ")),
            ),
            _ => ValidationResult::error(0, "No data available for Open Graph tags"),
        }
    })
}

pub fn twitter_card() -> Validator {
    Validator::new(|_, record, _| {
        let parts = [
            record
                .first_text(&["twitterTitle", "ogTitle", "seoTitle"])
                .is_some(),
            record
                .first_text(&["twitterDescription", "ogDescription", "seoDescription"])
                .is_some(),
            media_url(record, "twitterImageMedia")
                .or_else(|| media_url(record, "ogImageMedia"))
                .is_some(),
        ];
        match parts.iter().filter(|available| **available).count() {
            3 => ValidationResult::good(10, "Twitter card can be fully rendered"),
            0 => ValidationResult::warning(0, "No data available for a Twitter card"),
            count => ValidationResult::warning(
                5,
                format!("Twitter card is partial ({count} of title, description, image)"),
            ),
        }
    })
}

/// A linked relation snapshot such as an article's author or category.
pub fn related_entity(label: &'static str) -> Validator {
    Validator::new(move |value, _, _| {
        match value_relation(value).and_then(|relation| relation.name()) {
            Some(name) => ValidationResult::good(5, format!("{label}: {name}")),
            None => ValidationResult::warning(0, format!("No {} assigned", label.to_lowercase())),
        }
    })
}

pub fn publication_date(label: &'static str) -> Validator {
    Validator::new(move |value, _, _| match value_text(value) {
        None => ValidationResult::warning(0, format!("{label} not set")),
        Some(raw) => match parse_date(raw) {
            Some(date) => ValidationResult::good(5, format!("{label}: {date}")),
            None => ValidationResult::warning(0, format!("{label} '{raw}' is not a valid date")),
        },
    })
}
