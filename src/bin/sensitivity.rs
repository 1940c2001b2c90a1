//! Growth-rate sensitivity grid
//!
//! Sweeps the revenue growth driver over a range, runs the scenarios in
//! parallel, and prints terminal-period results side by side.

use anyhow::Result;
use clap::Parser;
use valuation_engine::projection::DEFAULT_HORIZON;
use valuation_engine::scenario::{run_scenarios, Scenario};
use valuation_engine::{DriverSet, HistoricalActuals};

#[derive(Parser)]
#[command(about = "Growth-rate sensitivity for the three-statement model")]
struct Args {
    /// Lowest growth rate in the sweep
    #[arg(long, default_value_t = 0.0)]
    min: f64,

    /// Highest growth rate in the sweep
    #[arg(long, default_value_t = 0.50)]
    max: f64,

    /// Number of grid points
    #[arg(long, default_value_t = 11)]
    steps: u32,

    /// Projection horizon in periods
    #[arg(long, default_value_t = DEFAULT_HORIZON)]
    horizon: u32,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let seed = HistoricalActuals::default();
    let scenarios: Vec<Scenario> = (0..args.steps)
        .map(|i| {
            let t = if args.steps > 1 {
                i as f64 / (args.steps - 1) as f64
            } else {
                0.0
            };
            let growth_rate = args.min + t * (args.max - args.min);
            Scenario {
                name: format!("g={:.1}%", growth_rate * 100.0),
                drivers: DriverSet {
                    growth_rate,
                    ..Default::default()
                },
            }
        })
        .collect();

    let results = run_scenarios(&seed, &scenarios, args.horizon);

    println!(
        "{:<10} {:>14} {:>14} {:>14} {:>8}",
        "Scenario", "Revenue", "NetIncome", "Cash", "Balanced"
    );
    for outcome in &results {
        match &outcome.result {
            Ok(projection) => {
                let last = projection.last();
                let balanced = if projection.verify().passed() { "yes" } else { "NO" };
                println!(
                    "{:<10} {:>14.2} {:>14.2} {:>14.2} {:>8}",
                    outcome.name, last.revenue, last.net_income, last.cash, balanced
                );
            }
            Err(err) => println!("{:<10} failed: {}", outcome.name, err),
        }
    }

    Ok(())
}
