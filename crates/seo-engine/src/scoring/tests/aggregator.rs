use serde_json::json;

use super::common::*;
use crate::entities::{default_config, organization, EntityType};
use crate::scoring::{evaluate, percentage, Grade, ValidationStatus};
use crate::settings::SeoSettings;

#[test]
fn score_is_clamped_to_the_declared_maximum() {
    let config = overflowing_config();
    let result = evaluate(&record(json!({ "name": "seo" })), &config, None);

    assert_eq!(result.score, 100);
    assert_eq!(result.percentage, 100);
    assert_eq!(result.grade(), Grade::Excellent);
}

#[test]
fn repeated_field_names_are_all_scored() {
    let config = overflowing_config();
    let result = evaluate(&record(json!({})), &config, None);

    assert_eq!(result.checks.len(), 2);
    assert_eq!(result.display_checks().len(), 1);
    assert_eq!(result.display_checks()[0].label, "First");
}

#[test]
fn sparse_organization_scores_identity_fields_only() {
    let sparse = record(json!({
        "name": "Acme",
        "slug": "acme",
        "url": "https://acme.com"
    }));
    let result = evaluate(&sparse, organization::default_config(), None);

    assert_eq!(result.entity_type, EntityType::Organization);
    assert_eq!(result.score, 25);
    assert_eq!(result.max_score, 200);
    assert_eq!(result.percentage, 13);
    assert_eq!(result.grade(), Grade::Poor);
}

#[test]
fn tally_covers_every_entry() {
    let sparse = record(json!({ "name": "Acme" }));
    let config = organization::default_config();
    let result = evaluate(&sparse, config, None);

    assert_eq!(result.tally.total(), config.fields().len());
    assert_eq!(result.tally.count(ValidationStatus::Good), 1);
    assert!(result.tally.count(ValidationStatus::Info) >= 3);
    assert_eq!(
        result.checks_with_status(ValidationStatus::Error).count(),
        result.tally.error
    );
}

#[test]
fn complete_organization_reaches_excellent() {
    let result = evaluate(&complete_organization(), organization::default_config(), None);

    assert_eq!(result.tally.error, 0, "{:#?}", result.checks);
    assert!(result.percentage >= 80, "scored {}", result.percentage);
    assert_eq!(result.grade(), Grade::Excellent);
}

#[test]
fn percentage_rounds_and_guards_empty_rubrics() {
    assert_eq!(percentage(25, 200), 13);
    assert_eq!(percentage(1, 3), 33);
    assert_eq!(percentage(2, 3), 67);
    assert_eq!(percentage(5, 0), 0);
}

#[test]
fn evaluation_settings_override_captured_thresholds() {
    let tag = record(json!({ "name": "Retail", "seoTitle": text_of(65) }));
    let config = default_config(EntityType::Tag);
    let restricted = SeoSettings {
        restrict_title_length: true,
        ..SeoSettings::default()
    };

    let relaxed = evaluate(&tag, config, None);
    let strict = evaluate(&tag, config, Some(&restricted));

    let title = |result: &crate::scoring::ScoreResult| {
        let check = result
            .checks
            .iter()
            .find(|check| check.field == "seoTitle")
            .expect("title checked");
        (check.result.status, check.result.score)
    };
    assert_eq!(title(&relaxed), (ValidationStatus::Warning, 12));
    assert_eq!(title(&strict), (ValidationStatus::Error, 0));
    assert_eq!(strict.score + 12, relaxed.score);
}

#[test]
fn evaluation_settings_reach_twitter_limits() {
    let org = record(json!({ "twitterTitle": text_of(60) }));
    let config = organization::default_config();
    let tight = SeoSettings {
        twitter_title_max_length: 50,
        ..SeoSettings::default()
    };

    let result = evaluate(&org, config, Some(&tight));
    let check = result
        .checks
        .iter()
        .find(|check| check.label == "Twitter Title")
        .expect("twitter title checked");
    assert_eq!((check.result.status, check.result.score), (ValidationStatus::Warning, 2));
}
