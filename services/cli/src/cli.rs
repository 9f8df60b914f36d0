use crate::commands::{
    run_dashboard, run_score, run_structured_data, DashboardArgs, ScoreArgs, StructuredDataArgs,
};
use crate::demo::{run_demo, DemoArgs};
use clap::{Parser, Subcommand};
use seo_engine::config::AppConfig;
use seo_engine::error::AppError;
use seo_engine::telemetry;
use tracing::debug;

#[derive(Parser, Debug)]
#[command(
    name = "seo-engine",
    about = "Score content records for SEO readiness and generate schema.org JSON-LD",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Score a single record and print the itemized breakdown
    Score(ScoreArgs),
    /// Print the JSON-LD document for a single record
    StructuredData(StructuredDataArgs),
    /// Summarize a JSON array of records, optionally exporting a CSV
    Dashboard(DashboardArgs),
    /// Score built-in sample records (default command)
    Demo(DemoArgs),
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    debug!(environment = ?config.environment, "configuration loaded");

    let command = cli
        .command
        .unwrap_or_else(|| Command::Demo(DemoArgs::default()));

    match command {
        Command::Score(args) => run_score(config, args),
        Command::StructuredData(args) => run_structured_data(args),
        Command::Dashboard(args) => run_dashboard(config, args),
        Command::Demo(args) => run_demo(config, args),
    }
}
