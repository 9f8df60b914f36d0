use chrono::{DateTime, TimeZone, Utc};
use seo_engine::structured_data::{generate_at, LdValue, SCHEMA_CONTEXT};
use seo_engine::{EntityType, Record};
use serde_json::json;

fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 15, 9, 30, 0)
        .single()
        .expect("valid timestamp")
}

fn record(value: serde_json::Value) -> Record {
    Record::from_value(value).expect("fixture is an object")
}

#[test]
fn every_entity_emits_context_and_type_without_top_level_gaps() {
    let empty = Record::new();
    let expected_types = [
        (EntityType::Organization, "Organization"),
        (EntityType::Article, "Article"),
        (EntityType::Person, "Person"),
        (EntityType::Category, "CollectionPage"),
        (EntityType::Tag, "DefinedTerm"),
        (EntityType::Industry, "Industry"),
    ];

    for (entity, ld_type) in expected_types {
        let data = generate_at(entity, &empty, fixed_now());
        assert_eq!(data.get("@context").and_then(LdValue::as_str), Some(SCHEMA_CONTEXT));
        assert_eq!(data.ld_type(), Some(ld_type), "{entity}");
        assert!(!data.has_undefined(), "{entity} leaked an absent property");
    }
}

#[test]
fn organization_contact_point_keeps_nested_gaps_until_serialized() {
    let acme = record(json!({
        "name": "Acme",
        "url": "https://acme.com",
        "email": "hello@acme.com",
        "seoDescription": "Retail dashboards",
        "foundingDate": "2012-04-01T08:00:00Z",
        "sameAs": ["https://twitter.com/acme"]
    }));

    let data = generate_at(EntityType::Organization, &acme, fixed_now());

    assert!(!data.contains_key("legalName"));
    assert!(!data.contains_key("address"));
    assert_eq!(data.get("description").and_then(LdValue::as_str), Some("Retail dashboards"));
    assert_eq!(data.get("foundingDate").and_then(LdValue::as_str), Some("2012-04-01"));

    let contact = data
        .get("contactPoint")
        .and_then(LdValue::as_node)
        .expect("contact point present with email");
    assert!(contact.contains_key("telephone"));
    assert!(contact.get("telephone").is_some_and(LdValue::is_undefined));

    let json = serde_json::to_value(&data).expect("serializes");
    assert_eq!(
        json["contactPoint"],
        json!({ "@type": "ContactPoint", "email": "hello@acme.com" })
    );
    assert_eq!(json["sameAs"], json!(["https://twitter.com/acme"]));
}

#[test]
fn article_builds_author_publisher_and_dates() {
    let post = record(json!({
        "title": "Reading foot traffic data",
        "seoDescription": "How to read store sensor data.",
        "content": "<p>one two three four</p>",
        "publishedAt": "2024-11-02T10:00:00+01:00",
        "canonicalUrl": "https://blog.example.com/foot-traffic",
        "language": "en",
        "focusKeywords": ["retail", "sensors"],
        "featuredImageMedia": { "url": "https://cdn.example.com/hero.jpg" },
        "author": { "name": "Dana Reyes", "url": "https://blog.example.com/authors/dana" },
        "category": { "name": "Analytics" },
        "client": {
            "name": "Acme",
            "url": "https://acme.com",
            "logoMedia": { "url": "https://cdn.example.com/acme.svg" }
        }
    }));

    let json = serde_json::to_value(generate_at(EntityType::Article, &post, fixed_now()))
        .expect("serializes");

    assert_eq!(json["headline"], "Reading foot traffic data");
    assert_eq!(json["image"], "https://cdn.example.com/hero.jpg");
    assert_eq!(json["datePublished"], "2024-11-02T09:00:00Z");
    assert_eq!(json["dateModified"], "2025-01-15T09:30:00Z");
    assert_eq!(json["author"]["@type"], "Person");
    assert_eq!(json["author"]["name"], "Dana Reyes");
    assert_eq!(json["publisher"]["logo"]["url"], "https://cdn.example.com/acme.svg");
    assert_eq!(
        json["mainEntityOfPage"],
        json!({ "@type": "WebPage", "@id": "https://blog.example.com/foot-traffic" })
    );
    assert_eq!(json["articleSection"], "Analytics");
    assert_eq!(json["wordCount"], 4);
    assert_eq!(json["keywords"], "retail, sensors");
}

#[test]
fn person_assembles_same_as_from_profile_fields() {
    let author = record(json!({
        "name": "Dana Reyes",
        "bio": "Writes about retail data.",
        "linkedinUrl": "https://www.linkedin.com/in/dana",
        "twitterUrl": "https://twitter.com/dana",
        "expertiseAreas": ["retail", "analytics"],
        "client": { "name": "Acme" }
    }));

    let json = serde_json::to_value(generate_at(EntityType::Person, &author, fixed_now()))
        .expect("serializes");

    assert_eq!(
        json["sameAs"],
        json!(["https://www.linkedin.com/in/dana", "https://twitter.com/dana"])
    );
    assert_eq!(json["knowsAbout"], json!(["retail", "analytics"]));
    assert_eq!(json["worksFor"], json!({ "@type": "Organization", "name": "Acme" }));
    assert!(json.get("image").is_none());
}

#[test]
fn taxonomy_nodes_fall_back_to_seo_description() {
    let tag = record(json!({
        "name": "Retail",
        "seoDescription": "Articles about retail.",
        "canonicalUrl": "https://blog.example.com/tags/retail"
    }));

    let json = serde_json::to_value(generate_at(EntityType::Tag, &tag, fixed_now()))
        .expect("serializes");

    assert_eq!(
        json,
        json!({
            "@context": "https://schema.org",
            "@type": "DefinedTerm",
            "name": "Retail",
            "description": "Articles about retail.",
            "url": "https://blog.example.com/tags/retail"
        })
    );
}

#[test]
fn malformed_relations_drop_their_keys() {
    let cases = [
        json!({ "title": "Post", "author": "Dana Reyes", "client": [1], "category": "Ops" }),
        json!({ "title": "Post", "author": null, "client": 42, "category": ["Ops"] }),
    ];

    for fields in cases {
        let data = generate_at(EntityType::Article, &record(fields.clone()), fixed_now());
        for key in ["author", "publisher", "articleSection"] {
            assert!(!data.contains_key(key), "{key} kept for {fields}");
        }
        assert!(!data.has_undefined());
    }

    let person = record(json!({ "name": "Dana", "client": "Acme", "avatarMedia": "dana.png" }));
    let data = generate_at(EntityType::Person, &person, fixed_now());
    assert!(!data.contains_key("worksFor"));
    assert!(!data.contains_key("image"));
}

#[test]
fn organization_address_requires_street_city_or_country() {
    let cases = [
        (json!({ "postalCode": "10115", "addressRegion": "BE" }), None),
        (
            json!({ "addressLocality": "Berlin", "postalCode": "10115" }),
            Some(json!({
                "@type": "PostalAddress",
                "addressLocality": "Berlin",
                "postalCode": "10115"
            })),
        ),
        (
            json!({ "streetAddress": "Hauptstrasse 1" }),
            Some(json!({ "@type": "PostalAddress", "streetAddress": "Hauptstrasse 1" })),
        ),
        (
            json!({ "addressCountry": "DE" }),
            Some(json!({ "@type": "PostalAddress", "addressCountry": "DE" })),
        ),
    ];

    for (fields, expected) in cases {
        let data = generate_at(EntityType::Organization, &record(fields.clone()), fixed_now());
        let json = serde_json::to_value(&data).expect("serializes");
        assert_eq!(json.get("address").cloned(), expected, "{fields}");
    }
}
