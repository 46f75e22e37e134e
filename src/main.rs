//! Runs the employee model demonstration.

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use employee_model::config::{AppConfig, ConfigLoader};
use employee_model::demo;

#[derive(Parser, Debug)]
#[command(name = "employee-model", version, about = "Employee model demonstration")]
struct Cli {
    /// YAML file overriding leave allowances and banner settings.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Print banners without ANSI colour.
    #[arg(long)]
    no_color: bool,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let mut config: AppConfig = match &cli.config {
        Some(path) => ConfigLoader::load(path)
            .with_context(|| format!("loading {}", path.display()))?
            .into_config(),
        None => AppConfig::default(),
    };
    if cli.no_color {
        config.report.color = false;
    }
    info!(?config, "Starting demonstration");

    let stdout = io::stdout();
    demo::run(stdout.lock(), &config).context("writing demonstration output")?;
    Ok(())
}
