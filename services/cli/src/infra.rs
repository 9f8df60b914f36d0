use seo_engine::config::AppConfig;
use seo_engine::error::AppError;
use seo_engine::scoring::{BatchSummary, ScoreResult, ValidationStatus};
use seo_engine::{EntityType, Record, SeoSettings};
use serde::Serialize;
use serde_json::Value;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub(crate) fn parse_entity_type(raw: &str) -> Result<EntityType, String> {
    raw.parse::<EntityType>().map_err(|err| err.to_string())
}

/// Settings for this run; an explicit file replaces the configured one.
pub(crate) fn resolve_settings(
    mut config: AppConfig,
    settings_path: Option<PathBuf>,
) -> Result<Option<SeoSettings>, AppError> {
    if let Some(path) = settings_path {
        config.scoring.settings_path = Some(path);
    }
    Ok(config.settings()?)
}

pub(crate) fn load_record(path: &Path) -> Result<Record, AppError> {
    let value = read_json(path)?;
    Record::from_value(value).map_err(|err| AppError::input(path, err))
}

/// A JSON array of records; a single object is accepted as a batch of one.
pub(crate) fn load_records(path: &Path) -> Result<Vec<Record>, AppError> {
    match read_json(path)? {
        Value::Array(items) => items
            .into_iter()
            .map(|item| Record::from_value(item).map_err(|err| AppError::input(path, err)))
            .collect(),
        other => Ok(vec![
            Record::from_value(other).map_err(|err| AppError::input(path, err))?
        ]),
    }
}

fn read_json(path: &Path) -> Result<Value, AppError> {
    let raw = fs::read_to_string(path)?;
    serde_json::from_str(&raw).map_err(|err| AppError::input(path, err))
}

pub(crate) fn status_marker(status: ValidationStatus) -> &'static str {
    match status {
        ValidationStatus::Good => "[ok]",
        ValidationStatus::Warning => "[!!]",
        ValidationStatus::Error => "[xx]",
        ValidationStatus::Info => "[--]",
    }
}

pub(crate) fn render_score(result: &ScoreResult) {
    println!(
        "{} score: {}/{} ({}%) - {}",
        result.entity_type.label(),
        result.score,
        result.max_score,
        result.percentage,
        result.grade().label()
    );
    println!(
        "- {} good | {} warnings | {} errors | {} info",
        result.tally.good, result.tally.warning, result.tally.error, result.tally.info
    );
    for check in result.display_checks() {
        println!(
            "  {} {}: {} ({} pts)",
            status_marker(check.result.status),
            check.label,
            check.result.message,
            check.result.score
        );
    }
}

/// One CSV row per evaluated record.
#[derive(Debug, Serialize)]
pub(crate) struct DashboardRow<'a> {
    pub(crate) index: usize,
    pub(crate) label: &'a str,
    pub(crate) score: u32,
    pub(crate) max_score: u32,
    pub(crate) percentage: u8,
    pub(crate) grade: &'static str,
    pub(crate) errors: usize,
    pub(crate) warnings: usize,
}

pub(crate) fn record_label(record: &Record) -> &str {
    record
        .first_text(&["name", "title", "slug"])
        .unwrap_or("(untitled)")
}

pub(crate) fn write_dashboard_csv(
    path: &Path,
    records: &[Record],
    summary: &BatchSummary,
) -> Result<(), AppError> {
    write_rows(path, records, summary).map_err(AppError::Report)
}

fn write_rows(path: &Path, records: &[Record], summary: &BatchSummary) -> io::Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for (index, (record, result)) in records.iter().zip(&summary.results).enumerate() {
        writer.serialize(DashboardRow {
            index,
            label: record_label(record),
            score: result.score,
            max_score: result.max_score,
            percentage: result.percentage,
            grade: result.grade().label(),
            errors: result.tally.error,
            warnings: result.tally.warning,
        })?;
    }
    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use seo_engine::{default_config, evaluate_batch};
    use serde_json::json;
    use std::io::Write;

    #[test]
    fn entity_parser_reports_unknown_types() {
        assert_eq!(parse_entity_type("client"), Ok(EntityType::Organization));
        let err = parse_entity_type("media").expect_err("unknown type rejected");
        assert!(err.contains("media"));
    }

    #[test]
    fn single_object_loads_as_batch_of_one() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, r#"{{"name": "Retail"}}"#).expect("write record");

        let records = load_records(file.path()).expect("records load");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].text("name"), Some("Retail"));
    }

    #[test]
    fn scalar_records_are_rejected_with_path() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, r#"[{{"name": "Retail"}}, 42]"#).expect("write records");

        let err = load_records(file.path()).expect_err("number is not a record");
        assert!(matches!(err, AppError::Input { .. }));
        assert!(err.to_string().contains("found a number"));
    }

    #[test]
    fn dashboard_csv_has_one_row_per_record() {
        let records = vec![
            Record::from_value(json!({ "name": "Retail", "slug": "retail" })).expect("object"),
            Record::new(),
        ];
        let summary = evaluate_batch(&records, default_config(EntityType::Tag), None);
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("tags.csv");

        write_dashboard_csv(&path, &records, &summary).expect("csv written");

        let written = fs::read_to_string(&path).expect("csv readable");
        let lines: Vec<&str> = written.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("index,label,score,max_score,percentage,grade"));
        assert!(lines[2].contains("(untitled)"));
    }
}
