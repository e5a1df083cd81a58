mod cli;
mod commands;

use anyhow::Context;
use apb::domain::config::{AppConfig, LoggingConfig};
use apb::kernel::config::load_config;
use apb_logger::Logger;
use clap::Parser;
use cli::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config: AppConfig =
        load_config(cli.config.as_ref()).context("Loading configuration")?;
    if let Some(snapshot) = cli.snapshot {
        config.catalog.snapshot = snapshot;
    }

    let _logger = init_logger(&config.logging)?;
    tracing::debug!(features = ?apb::features::ENABLED, "Starting");

    commands::run(cli.command, &config)
}

fn init_logger(config: &LoggingConfig) -> anyhow::Result<Logger> {
    let logger = Logger::for_app(
        env!("CARGO_PKG_NAME"),
        &config.level,
        config.directory.as_deref(),
        config.json,
    )?;
    Ok(logger)
}
