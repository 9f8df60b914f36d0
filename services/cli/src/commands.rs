use crate::infra::{
    load_record, load_records, parse_entity_type, record_label, render_score, resolve_settings,
    write_dashboard_csv,
};
use clap::Args;
use seo_engine::config::AppConfig;
use seo_engine::error::AppError;
use seo_engine::scoring::Grade;
use seo_engine::structured_data::generate;
use seo_engine::{create_config, evaluate, evaluate_batch, EntityType};
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Entity type (organization, article, person, category, tag, industry)
    #[arg(long, value_parser = parse_entity_type)]
    pub(crate) entity: EntityType,
    /// JSON file holding one record
    #[arg(long)]
    pub(crate) record: PathBuf,
    /// JSON settings file overriding SEO_SETTINGS_PATH
    #[arg(long)]
    pub(crate) settings: Option<PathBuf>,
    /// Print the full score result as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct StructuredDataArgs {
    /// Entity type (organization, article, person, category, tag, industry)
    #[arg(long, value_parser = parse_entity_type)]
    pub(crate) entity: EntityType,
    /// JSON file holding one record
    #[arg(long)]
    pub(crate) record: PathBuf,
}

#[derive(Args, Debug)]
pub(crate) struct DashboardArgs {
    /// Entity type shared by every record in the file
    #[arg(long, value_parser = parse_entity_type)]
    pub(crate) entity: EntityType,
    /// JSON file holding an array of records
    #[arg(long)]
    pub(crate) records: PathBuf,
    /// JSON settings file overriding SEO_SETTINGS_PATH
    #[arg(long)]
    pub(crate) settings: Option<PathBuf>,
    /// Write a per-record CSV report to this path
    #[arg(long)]
    pub(crate) csv: Option<PathBuf>,
}

pub(crate) fn run_score(config: AppConfig, args: ScoreArgs) -> Result<(), AppError> {
    let ScoreArgs {
        entity,
        record,
        settings,
        json,
    } = args;

    let settings = resolve_settings(config, settings)?;
    let record = load_record(&record)?;
    let entity_config = create_config(entity, settings.as_ref());
    let result = evaluate(&record, &entity_config, settings.as_ref());

    if json {
        let payload = serde_json::to_string_pretty(&result)?;
        println!("{payload}");
    } else {
        render_score(&result);
    }
    Ok(())
}

pub(crate) fn run_structured_data(args: StructuredDataArgs) -> Result<(), AppError> {
    let record = load_record(&args.record)?;
    let data = generate(args.entity, &record);
    let payload = serde_json::to_string_pretty(&data)?;
    println!("{payload}");
    Ok(())
}

pub(crate) fn run_dashboard(config: AppConfig, args: DashboardArgs) -> Result<(), AppError> {
    let DashboardArgs {
        entity,
        records,
        settings,
        csv,
    } = args;

    let settings = resolve_settings(config, settings)?;
    let records = load_records(&records)?;
    let entity_config = create_config(entity, settings.as_ref());
    let summary = evaluate_batch(&records, &entity_config, settings.as_ref());

    println!("{} SEO dashboard", entity.label());
    println!(
        "- {} records | average {:.1}% | lowest {} | highest {}",
        summary.evaluated,
        summary.average_percentage,
        percent_or_dash(summary.lowest_percentage),
        percent_or_dash(summary.highest_percentage)
    );
    println!("Grade distribution:");
    for grade in Grade::ordered() {
        println!("  - {}: {}", grade.label(), summary.grades.count(grade));
    }

    let mut weakest: Vec<_> = records.iter().zip(&summary.results).collect();
    weakest.sort_by_key(|(_, result)| result.percentage);
    println!("Needs attention first:");
    for (record, result) in weakest.into_iter().take(5) {
        println!(
            "  - {}: {}% ({} errors, {} warnings)",
            record_label(record),
            result.percentage,
            result.tally.error,
            result.tally.warning
        );
    }

    if let Some(path) = csv {
        write_dashboard_csv(&path, &records, &summary)?;
        info!(path = %path.display(), rows = summary.evaluated, "dashboard csv written");
        println!("CSV report written to {}", path.display());
    }

    Ok(())
}

fn percent_or_dash(value: Option<u8>) -> String {
    value.map_or_else(|| "-".to_string(), |pct| format!("{pct}%"))
}
