use serde_json::{json, Value};

use crate::entities::EntityType;
use crate::record::Record;
use crate::scoring::{EntityConfig, FieldConfig, ValidationResult, ValidationStatus, Validator};
use crate::structured_data::{root, StructuredData};

pub(super) fn record(value: Value) -> Record {
    Record::from_value(value).expect("fixture is an object")
}

pub(super) fn text_of(length: usize) -> String {
    "x".repeat(length)
}

pub(super) fn run(validator: &Validator, record: &Record, field: &str) -> ValidationResult {
    validator.validate(record.get(field), record, None)
}

/// Runs `validator` over `field` set to each value and checks the resulting (status, score).
///
/// `Value::Null` stands for an absent field.
pub(super) fn assert_table(
    validator: &Validator,
    field: &str,
    cases: &[(Value, ValidationStatus, u32)],
) {
    for (value, status, score) in cases {
        let record = Record::new().with(field, value.clone());
        let result = run(validator, &record, field);
        assert_eq!(
            (result.status, result.score),
            (*status, *score),
            "{field} = {value}: {}",
            result.message
        );
    }
}

pub(super) fn media(url: &str, alt: Option<&str>) -> Value {
    match alt {
        Some(alt) => json!({ "url": url, "altText": alt }),
        None => json!({ "url": url }),
    }
}

/// Organization with every scored field filled in well.
pub(super) fn complete_organization() -> Record {
    record(json!({
        "name": "Acme Analytics",
        "slug": "acme-analytics",
        "url": "https://acme.example.com",
        "legalName": "Acme Analytics GmbH",
        "description": "Acme Analytics builds dashboards that help retailers understand foot traffic.",
        "seoTitle": "Acme Analytics | Retail Foot Traffic Dashboards for Teams",
        "seoDescription": "Acme Analytics turns in-store sensor data into clear retail dashboards, so regional managers can staff stores and plan promotions with confidence.",
        "logoMedia": media("https://cdn.example.com/acme/logo.svg", Some("Acme Analytics logo")),
        "ogImageMedia": {
            "url": "https://cdn.example.com/acme/og.png",
            "altText": "Acme dashboard preview",
            "width": 1200,
            "height": 630
        },
        "twitterTitle": "Acme Analytics dashboards",
        "twitterDescription": "Retail foot traffic, explained.",
        "twitterHandle": "@acme",
        "sameAs": [
            "https://www.linkedin.com/company/acme",
            "https://twitter.com/acme",
            "https://www.facebook.com/acme"
        ],
        "email": "hello@acme.example.com",
        "phone": "+49 30 1234567",
        "streetAddress": "Hauptstrasse 1",
        "addressLocality": "Berlin",
        "postalCode": "10115",
        "addressCountry": "DE",
        "foundingDate": "2012-04-01",
        "canonicalUrl": "https://www.example.com/clients/acme",
        "gtmId": "GTM-ABC123",
        "focusKeywords": ["retail analytics", "foot traffic", "store dashboards"]
    }))
}

/// Two entries awarding 70 each against a 100-point cap.
pub(super) fn overflowing_config() -> EntityConfig {
    let generous = Validator::new(|_, _, _| ValidationResult::good(70, "generous"));
    EntityConfig::new(
        EntityType::Tag,
        100,
        vec![
            FieldConfig::new("name", "First", generous.clone()),
            FieldConfig::new("name", "Second", generous),
        ],
        empty_structured_data,
    )
}

pub(super) fn empty_structured_data(
    _: &Record,
    _: chrono::DateTime<chrono::Utc>,
) -> StructuredData {
    root("Thing")
}
