//! Run a three-statement projection from a JSON run spec
//!
//! Outputs the full period table as CSV and prints a run summary

use anyhow::{bail, Context, Result};
use clap::Parser;
use serde::Deserialize;
use std::fs::File;
use std::path::PathBuf;
use std::time::Instant;
use valuation_engine::projection::DEFAULT_HORIZON;
use valuation_engine::report::write_csv;
use valuation_engine::{DriverSet, HistoricalActuals, ProjectionConfig, ProjectionEngine};

#[derive(Parser)]
#[command(about = "Three-statement financial projection")]
struct Args {
    /// JSON run spec: { "seed": {...}, "drivers": {...}, "horizon": N }.
    /// Every field is optional; omitted fields use model defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the horizon from the run spec
    #[arg(long)]
    horizon: Option<u32>,

    /// Write the full period table as CSV
    #[arg(long, default_value = "projection_output.csv")]
    output: PathBuf,
}

#[derive(Debug, Default, Deserialize)]
struct RunSpec {
    #[serde(default)]
    seed: HistoricalActuals,
    #[serde(default)]
    drivers: DriverSet,
    horizon: Option<u32>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let start = Instant::now();

    let spec = match &args.config {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open run spec {}", path.display()))?;
            serde_json::from_reader(file)
                .with_context(|| format!("failed to parse run spec {}", path.display()))?
        }
        None => RunSpec::default(),
    };

    let horizon = args.horizon.or(spec.horizon).unwrap_or(DEFAULT_HORIZON);
    let config = ProjectionConfig {
        horizon,
        ..Default::default()
    };

    println!("Projecting {} periods...", horizon);
    let engine = ProjectionEngine::new(spec.drivers, config);
    let projection = engine.project(&spec.seed)?;

    let report = projection.verify();
    if report.passed() {
        println!("Balance check: OK ({} periods)", report.checks().len());
    } else {
        for failure in report.failures() {
            eprintln!(
                "  period {}: balance check = {:.6}",
                failure.period, failure.balance_check
            );
        }
        bail!("balance identity violated; projection discarded");
    }

    let file = File::create(&args.output)
        .with_context(|| format!("failed to create {}", args.output.display()))?;
    write_csv(file, projection.records())?;
    println!("Output written to {}", args.output.display());

    let first = &projection.records()[0];
    let last = projection.last();
    println!("\nRun Summary:");
    println!(
        "  Period 0:  Revenue={:>12.2}  NetIncome={:>12.2}  Cash={:>12.2}",
        first.revenue, first.net_income, first.cash
    );
    println!(
        "  Period {}:  Revenue={:>12.2}  NetIncome={:>12.2}  Cash={:>12.2}",
        last.period, last.revenue, last.net_income, last.cash
    );
    println!("\nTotal time: {:?}", start.elapsed());

    Ok(())
}
