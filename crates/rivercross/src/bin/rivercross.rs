//! Command-line entry point: reads a configuration, writes the JSON report.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use owo_colors::OwoColorize;
use rivercross::{console, CrossingConfig};

#[derive(Parser, Debug)]
#[command(
    name = "rivercross",
    version,
    about = "Find every minimum-time schedule for getting a herd across the river"
)]
struct Cli {
    /// Configuration file (.json, .toml, .yaml or .yml)
    #[arg(short, long, default_value = "config.json")]
    config: PathBuf,

    /// Where to write the JSON report
    #[arg(short, long, default_value = "solution.json")]
    output: PathBuf,

    /// Split the first level of crossings across threads
    #[arg(long)]
    parallel: bool,

    /// Suppress console output
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    if !cli.quiet {
        console::init();
    }

    let mut config = CrossingConfig::load(&cli.config)
        .with_context(|| format!("failed to load {}", cli.config.display()))?;
    if cli.parallel {
        config = config.with_parallel(true);
    }

    let report = rivercross::solve(&config).context("invalid configuration")?;
    report
        .write_json(&cli.output)
        .with_context(|| format!("failed to write {}", cli.output.display()))?;

    if !cli.quiet {
        console::print_summary(&report);
        println!("Report written to {}", cli.output.display().bright_white());
    }
    Ok(())
}
