use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use dotenv::dotenv;
use tracing::{debug, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use vitals_log_cli::{execute, Cli};

/// Entry point for the `vitals-log` command
///
/// Logs go to stderr so that stdout carries only the JSON result.
fn main() -> anyhow::Result<ExitCode> {
    let dotenv_loaded = dotenv().is_ok();

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(fmt::layer()
            .with_target(false)
            .with_writer(std::io::stderr))
        .with(env_filter)
        .init();

    if !dotenv_loaded {
        debug!(".env file not found, using process environment");
    }

    let cli = Cli::parse();
    let output = execute(&cli.command)?;

    let rendered = if cli.pretty {
        serde_json::to_string_pretty(&output.body)
    } else {
        serde_json::to_string(&output.body)
    }
    .context("Failed to render command output")?;
    println!("{}", rendered);

    if output.success {
        Ok(ExitCode::SUCCESS)
    } else {
        warn!("Input did not pass validation");
        Ok(ExitCode::FAILURE)
    }
}
