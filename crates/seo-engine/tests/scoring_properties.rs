use proptest::prelude::*;
use seo_engine::{default_config, evaluate, EntityType, Record};
use serde_json::{json, Value};

fn entity_type() -> impl Strategy<Value = EntityType> {
    prop::sample::select(EntityType::ordered().to_vec())
}

/// Arbitrary values for a handful of scored fields, including wrong shapes.
fn field_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        any::<i32>().prop_map(Value::from),
        "[a-zA-Z0-9 ,.-]{0,200}".prop_map(Value::from),
        "[a-z-]{1,20}"
            .prop_map(|slug| json!({ "url": format!("https://cdn.example.com/{slug}.png") })),
        prop::collection::vec("[a-z]{1,12}", 0..14).prop_map(Value::from),
    ]
}

const FIELDS: [&str; 10] = [
    "name",
    "title",
    "slug",
    "seoTitle",
    "seoDescription",
    "description",
    "logoMedia",
    "focusKeywords",
    "sameAs",
    "canonicalUrl",
];

fn record() -> impl Strategy<Value = Record> {
    prop::collection::vec(field_value(), FIELDS.len()).prop_map(|values| {
        FIELDS
            .iter()
            .zip(values)
            .fold(Record::new(), |record, (name, value)| record.with(*name, value))
    })
}

proptest! {
    #[test]
    fn score_stays_within_bounds(entity in entity_type(), record in record()) {
        let result = evaluate(&record, default_config(entity), None);
        prop_assert!(result.score <= result.max_score);
        prop_assert!(result.percentage <= 100);
        prop_assert_eq!(result.checks.len(), default_config(entity).fields().len());
    }

    #[test]
    fn evaluation_is_idempotent(entity in entity_type(), record in record()) {
        let config = default_config(entity);
        prop_assert_eq!(evaluate(&record, config, None), evaluate(&record, config, None));
    }

    #[test]
    fn filling_a_missing_name_never_lowers_the_score(
        entity in prop::sample::select(vec![
            EntityType::Organization,
            EntityType::Person,
            EntityType::Category,
            EntityType::Tag,
            EntityType::Industry,
        ]),
        record in record(),
        name in "[A-Za-z][A-Za-z ]{0,30}",
    ) {
        let config = default_config(entity);
        let without = record.clone().with("name", Value::Null);
        let with = record.with("name", name);
        prop_assert!(evaluate(&with, config, None).score >= evaluate(&without, config, None).score);
    }
}
