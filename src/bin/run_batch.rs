//! Run projections for every scenario in a CSV file
//!
//! Outputs one summary row per scenario

use anyhow::{Context, Result};
use clap::Parser;
use revenue_projection::batch::{load_scenarios, run_scenarios, write_summary, DEFAULT_BATCH_OUTPUT};
use std::fs::File;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "run_batch")]
#[command(about = "Project revenue for a file of scenarios", long_about = None)]
struct Cli {
    /// Scenario CSV with columns scenario_id,current_revenue,growth_rate
    scenarios: String,

    /// Summary output path
    #[arg(short, long, default_value = DEFAULT_BATCH_OUTPUT)]
    output: String,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let start = Instant::now();
    println!("Loading scenarios from {}...", cli.scenarios);

    let scenarios = load_scenarios(&cli.scenarios)
        .with_context(|| format!("failed to load {}", cli.scenarios))?;
    println!("Loaded {} scenarios in {:?}", scenarios.len(), start.elapsed());

    println!("Running projections...");
    let proj_start = Instant::now();
    let outcomes = run_scenarios(&scenarios);
    println!("Projections complete in {:?}", proj_start.elapsed());

    let file = File::create(&cli.output)
        .with_context(|| format!("failed to create {}", cli.output))?;
    write_summary(&outcomes, file)?;
    println!("Output written to {}", cli.output);

    let ok: Vec<_> = outcomes.iter().filter_map(|o| o.result.as_ref().ok()).collect();
    let failed = outcomes.len() - ok.len();
    let block_total: f64 = ok.iter().map(|r| r.total_revenue).sum();

    println!("\nBatch Summary:");
    println!("  Scenarios:      {}", outcomes.len());
    println!("  Projected:      {}", ok.len());
    println!("  Failed:         {}", failed);
    println!("  Total revenue:  ${:.2}", block_total);

    println!("\nTotal time: {:?}", start.elapsed());
    Ok(())
}
