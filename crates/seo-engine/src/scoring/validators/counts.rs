use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use super::{value_strings, value_text, Pattern};
use crate::record::{as_text, Record, Relation};
use crate::scoring::{ValidationResult, Validator};

static MARKUP_PATTERN: Pattern = LazyLock::new(|| Regex::new(r"<[^>]*>").ok());

/// Individual profile fields merged with the explicit `sameAs` list.
pub const SOCIAL_PROFILE_FIELDS: [&str; 5] = [
    "linkedinUrl",
    "twitterUrl",
    "facebookUrl",
    "instagramUrl",
    "youtubeUrl",
];

/// Words in a body of text with markup tags removed.
pub fn count_words(text: &str) -> usize {
    match (*MARKUP_PATTERN).as_ref() {
        Some(markup) => markup.replace_all(text, " ").split_whitespace().count(),
        None => text.split_whitespace().count(),
    }
}

fn social_profile_count(record: &Record) -> usize {
    let profiles: BTreeSet<&str> = record
        .strings("sameAs")
        .into_iter()
        .chain(SOCIAL_PROFILE_FIELDS.iter().filter_map(|name| record.text(name)))
        .collect();
    profiles.len()
}

/// Counts the record's distinct social profile URLs; the field value itself is ignored.
pub fn social_profiles() -> Validator {
    Validator::new(|_, record, _| match social_profile_count(record) {
        0 => ValidationResult::warning(0, "No social profiles linked"),
        1 => ValidationResult::warning(5, "1 social profile linked; add more to build authority"),
        2 => ValidationResult::good(8, "2 social profiles linked"),
        count => ValidationResult::good(10, format!("{count} social profiles linked")),
    })
}

/// Keywords may arrive as an array or a comma-separated string.
fn keyword_count(value: Option<&Value>) -> usize {
    match value {
        Some(Value::Array(_)) => value_strings(value).len(),
        _ => value_text(value)
            .map(|text| text.split(',').filter(|word| !word.trim().is_empty()).count())
            .unwrap_or(0),
    }
}

pub fn focus_keywords() -> Validator {
    Validator::new(|value, _, _| match keyword_count(value) {
        0 => ValidationResult::warning(0, "No focus keywords defined"),
        count @ 1..=2 => {
            ValidationResult::warning(5, format!("{count} focus keyword(s); 3-10 recommended"))
        }
        count @ 3..=10 => ValidationResult::good(10, format!("{count} focus keywords defined")),
        count => ValidationResult::warning(
            3,
            format!("{count} focus keywords risks keyword stuffing; keep to 10"),
        ),
    })
}

/// Tag lists hold either plain names or tag relation snapshots.
fn tag_count(value: Option<&Value>) -> usize {
    value
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter(|item| {
                    as_text(item).is_some()
                        || Relation::from_value(item).and_then(|tag| tag.name()).is_some()
                })
                .count()
        })
        .unwrap_or(0)
}

pub fn tags() -> Validator {
    Validator::new(|value, _, _| match tag_count(value) {
        0 => ValidationResult::warning(0, "No tags assigned"),
        count @ 1..=2 => {
            ValidationResult::warning(3, format!("{count} tag(s); 3 or more recommended"))
        }
        count => ValidationResult::good(5, format!("{count} tags assigned")),
    })
}

pub fn expertise_areas() -> Validator {
    Validator::new(|value, _, _| match value_strings(value).len() {
        0 => ValidationResult::warning(0, "No expertise areas listed"),
        count @ 1..=2 => ValidationResult::warning(
            5,
            format!("{count} expertise area(s); list 3 or more to show topical authority"),
        ),
        count => ValidationResult::good(10, format!("{count} expertise areas listed")),
    })
}

pub fn word_count() -> Validator {
    Validator::new(|value, _, _| match value_text(value).map(count_words).unwrap_or(0) {
        0 => ValidationResult::error(0, "Content is empty"),
        words @ 1..=299 => {
            ValidationResult::warning(3, format!("Content is thin ({words} words)"))
        }
        words @ 300..=799 => ValidationResult::warning(
            8,
            format!("Content is {words} words; 800+ tends to rank better"),
        ),
        words @ 800..=1499 => {
            ValidationResult::good(12, format!("Content length is solid ({words} words)"))
        }
        words => ValidationResult::good(15, format!("Content is in-depth ({words} words)")),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn word_count_strips_markup() {
        assert_eq!(count_words("<p>Hello <strong>brave</strong> new</p><p>world</p>"), 4);
        assert_eq!(count_words("   "), 0);
    }

    #[test]
    fn keywords_accept_comma_separated_text() {
        assert_eq!(keyword_count(Some(&json!("seo, rust, , cms"))), 3);
        assert_eq!(keyword_count(Some(&json!(["seo", "rust"]))), 2);
        assert_eq!(keyword_count(Some(&json!(12))), 0);
    }

    #[test]
    fn social_profiles_are_deduplicated() {
        let record = Record::new()
            .with("sameAs", json!(["https://linkedin.com/company/acme"]))
            .with("linkedinUrl", "https://linkedin.com/company/acme")
            .with("twitterUrl", "https://x.com/acme");
        assert_eq!(social_profile_count(&record), 2);
    }
}
