use std::{
    io::{self, Write},
    path::PathBuf,
    process::ExitCode,
};

use anyhow::Context;
use clap::Parser;
use json_config_check::{CheckConfig, Report, Validator};
use tracing_subscriber::EnvFilter;

/// Checks the repository JSON configuration files for syntax errors and
/// duplicate top-level keys.
#[derive(Parser, Debug)]
#[command(name = "json-config-check", version)]
struct Cli {
    /// Directory containing the configuration files.
    #[arg(short = 'C', long = "dir", default_value = ".")]
    dir: PathBuf,
    /// Print the report as JSON.
    #[arg(long)]
    json: bool,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: &Cli) -> anyhow::Result<u8> {
    let validator = Validator::new(CheckConfig::in_dir(&cli.dir));
    tracing::debug!(config = ?validator.config(), "starting checks");

    let report = Report::new(validator.run());

    let mut out = io::stdout().lock();
    let written = if cli.json {
        report.write_json(&mut out)
    } else {
        report.write_text(&mut out)
    };
    written.context("failed to write report")?;
    out.flush().context("failed to write report")?;

    tracing::info!(passed = report.passed(), "checks finished");
    Ok(report.exit_code())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging();

    match run(&cli) {
        Ok(code) => code.into(),
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::from(2)
        }
    }
}
