mod cli;
mod commands;
mod demo;
mod infra;

use seo_engine::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
