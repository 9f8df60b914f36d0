//! Field rule library shared by every entity config.
//!
//! Threshold-sensitive rules are factories taking an optional settings snapshot; the
//! rest are plain constructors. No rule panics: values of the wrong shape take the
//! "missing" branch of their table.

mod composite;
mod counts;
mod links;
mod media;
mod text;

pub use composite::{
    contact_information, open_graph_tags, postal_address, publication_date, related_entity,
    twitter_card,
};
pub use counts::{count_words, expertise_areas, focus_keywords, social_profiles, tags, word_count};
pub use links::{
    canonical_url, email_address, gtm_container, is_https, is_valid_url, twitter_handle,
    website_url,
};
pub use media::{has_allowed_image_extension, image, image_alt_text, image_dimensions};
pub use text::{
    biography, optional_text, prose, required_text, seo_description, seo_title, slug,
    twitter_description, twitter_title, LengthBands, LengthGrade,
};

use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;

use crate::record::{as_strings, as_text, Relation};

pub(crate) type Pattern = LazyLock<Option<Regex>>;

/// A pattern that failed to compile matches nothing.
pub(crate) fn matches(pattern: &Pattern, text: &str) -> bool {
    (**pattern).as_ref().is_some_and(|regex| regex.is_match(text))
}

pub(crate) fn value_text(value: Option<&Value>) -> Option<&str> {
    value.and_then(as_text)
}

pub(crate) fn value_strings(value: Option<&Value>) -> Vec<&str> {
    value.map(as_strings).unwrap_or_default()
}

pub(crate) fn value_relation(value: Option<&Value>) -> Option<Relation<'_>> {
    value.and_then(Relation::from_value)
}

pub(crate) fn char_len(text: &str) -> usize {
    text.chars().count()
}
