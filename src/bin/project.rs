//! Project five years of revenue for a single scenario
//!
//! Prints the yearly table and summary, and optionally exports the CSV.

use anyhow::{Context, Result};
use clap::Parser;
use revenue_projection::export::{format_axis_tick, format_currency, format_percent, save_csv};
use revenue_projection::input::accept_growth_rate_entry;
use revenue_projection::RunParams;

#[derive(Parser, Debug)]
#[command(name = "project")]
#[command(about = "Five-year revenue upside calculator", long_about = None)]
#[command(version)]
struct Cli {
    /// Current annual revenue ($)
    #[arg(short, long)]
    revenue: Option<String>,

    /// Annual growth rate (%), between 0 and 100
    #[arg(short, long)]
    growth_rate: Option<String>,

    /// JSON parameter file; command-line values take precedence
    #[arg(short, long)]
    params: Option<String>,

    /// Export projections to this CSV file
    #[arg(long)]
    csv: Option<String>,

    /// Export to the parameter file's default CSV name
    #[arg(long, conflicts_with = "csv")]
    download: bool,

    /// Print the result as JSON instead of a table
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut params = match &cli.params {
        Some(path) => RunParams::from_json_file(path)
            .map_err(|e| anyhow::anyhow!("failed to load parameters from {}: {}", path, e))?,
        None => RunParams::default(),
    };
    if let Some(revenue) = cli.revenue {
        params.current_revenue = revenue;
    }
    if let Some(rate) = cli.growth_rate {
        if !accept_growth_rate_entry(&rate) {
            anyhow::bail!("growth rate must be between 0 and 100, got {}", rate);
        }
        params.growth_rate = rate;
    }

    let result = match params.project() {
        Ok(result) => result,
        Err(e) => anyhow::bail!("{}", e),
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("Revenue Projections");
        println!("{:<8} {:>18} {:>16}  {}", "Year", "Revenue", "Growth", "Axis");
        for p in &result.projections {
            println!(
                "{:<8} {:>18} {:>16}  {}{}",
                p.label(),
                format_currency(p.revenue),
                format_currency(p.growth_amount),
                format_axis_tick(p.revenue),
                if p.is_highest_growth { "  <- highest growth" } else { "" }
            );
        }
        println!();
        println!("Total Revenue:      {}", format_currency(result.total_revenue));
        println!("Avg. Annual Growth: {}", format_percent(result.average_annual_growth_percent));
    }

    let export_path = match (cli.csv, cli.download) {
        (Some(path), _) => Some(path),
        (None, true) => Some(params.export_file_name.clone()),
        (None, false) => None,
    };
    if let Some(path) = export_path {
        save_csv(&result, &path).with_context(|| format!("failed to write {}", path))?;
        println!("Output written to {}", path);
    }

    Ok(())
}
