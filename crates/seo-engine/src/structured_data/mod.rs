//! schema.org JSON-LD generation shared by the entity modules.

mod node;

pub use node::{LdObject, LdValue};

use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::Value;

use crate::entities::{default_config, EntityType};
use crate::record::{parse_date, Record, Relation};

pub const SCHEMA_CONTEXT: &str = "https://schema.org";

/// Top-level JSON-LD object; carries no `Undefined` properties at its own level.
pub type StructuredData = LdObject;

/// Root node carrying `@context` and `@type`.
pub fn root(ld_type: &str) -> LdObject {
    LdObject::new()
        .with("@context", SCHEMA_CONTEXT)
        .with("@type", ld_type)
}

/// Strips absent top-level properties; nested nodes keep theirs.
pub fn finalize(mut node: LdObject) -> StructuredData {
    node.prune_undefined();
    node
}

pub fn generate(entity: EntityType, record: &Record) -> StructuredData {
    default_config(entity).generate_structured_data(record)
}

pub fn generate_at(entity: EntityType, record: &Record, now: DateTime<Utc>) -> StructuredData {
    default_config(entity).generate_structured_data_at(record, now)
}

/// `YYYY-MM-DD` for any accepted date input.
pub(crate) fn iso_date(raw: Option<&str>) -> Option<String> {
    raw.and_then(parse_date)
        .map(|date| date.format("%Y-%m-%d").to_string())
}

/// Timestamps normalize to UTC RFC 3339; plain dates stay date-only.
pub(crate) fn iso_timestamp(raw: Option<&str>) -> Option<String> {
    let raw = raw?.trim();
    match DateTime::parse_from_rfc3339(raw) {
        Ok(timestamp) => Some(
            timestamp
                .with_timezone(&Utc)
                .to_rfc3339_opts(SecondsFormat::Secs, true),
        ),
        Err(_) => iso_date(Some(raw)),
    }
}

pub(crate) fn now_timestamp(now: DateTime<Utc>) -> String {
    now.to_rfc3339_opts(SecondsFormat::Secs, true)
}

pub(crate) fn media_url<'a>(record: &'a Record, relation: &str) -> Option<&'a str> {
    record.relation(relation).and_then(|media| media.url())
}

pub(crate) fn relation_media_url<'a>(relation: &Relation<'a>, name: &str) -> Option<&'a str> {
    relation.relation(name).and_then(|media| media.url())
}

/// JSON array of strings, absent when empty.
pub(crate) fn string_list(items: Vec<&str>) -> Option<Value> {
    if items.is_empty() {
        None
    } else {
        Some(Value::from(items))
    }
}
