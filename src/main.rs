// src/main.rs
use anyhow::{Context, Result};
use clap::Parser;
use std::process::ExitCode;

use gen_version::cli::Args;
use gen_version::config::Config;
use gen_version::generate::{self, Outcome};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let args = Args::parse();
    let config = Config::from(args);

    let report = generate::run(&config).context("failed to generate version header")?;

    for warning in &report.warnings {
        eprintln!("Warning: {warning}");
    }
    match &report.outcome {
        Outcome::Skipped => {}
        Outcome::UpToDate { version } => println!("Version.h up to date (v{version})"),
        Outcome::Generated { version } => println!("Generated Version.h (v{version})"),
    }
    Ok(())
}
