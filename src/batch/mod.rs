//! Batch projection of many scenarios
//!
//! Scenarios are loaded from a CSV file with columns
//! `scenario_id,current_revenue,growth_rate`. Cells are kept as the text that
//! was entered and validated like form fields, so a blank, malformed or
//! out-of-range cell fails that scenario only.

use crate::error::{BatchError, ValidationError};
use crate::input::project_raw;
use crate::projection::ProjectionResult;
use log::{info, warn};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

/// Default output file for batch runs
pub const DEFAULT_BATCH_OUTPUT: &str = "batch_projection_output.csv";

/// One scenario row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub scenario_id: String,
    #[serde(default)]
    pub current_revenue: String,
    #[serde(default)]
    pub growth_rate: String,
}

/// Outcome of projecting a single scenario
#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioOutcome {
    pub scenario_id: String,
    pub result: Result<ProjectionResult, ValidationError>,
}

/// Load scenarios from a CSV file
pub fn load_scenarios<P: AsRef<Path>>(path: P) -> Result<Vec<Scenario>, BatchError> {
    let file = File::open(path)?;
    load_scenarios_from_reader(file)
}

/// Load scenarios from any CSV reader
pub fn load_scenarios_from_reader<R: Read>(reader: R) -> Result<Vec<Scenario>, BatchError> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut scenarios = Vec::new();
    for record in rdr.deserialize() {
        let scenario: Scenario = record?;
        scenarios.push(scenario);
    }

    info!("loaded {} scenarios", scenarios.len());
    Ok(scenarios)
}

/// Project every scenario in parallel, preserving input order
pub fn run_scenarios(scenarios: &[Scenario]) -> Vec<ScenarioOutcome> {
    let outcomes: Vec<ScenarioOutcome> = scenarios
        .par_iter()
        .map(|s| ScenarioOutcome {
            scenario_id: s.scenario_id.clone(),
            result: project_raw(&s.current_revenue, &s.growth_rate),
        })
        .collect();

    let failed = outcomes.iter().filter(|o| o.result.is_err()).count();
    if failed > 0 {
        warn!("{} of {} scenarios failed validation", failed, outcomes.len());
    }
    outcomes
}

/// Write one summary row per scenario
pub fn write_summary<W: Write>(outcomes: &[ScenarioOutcome], writer: W) -> Result<(), BatchError> {
    let mut wtr = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);

    wtr.write_record([
        "scenario_id",
        "status",
        "total_revenue",
        "average_growth_pct",
        "highest_growth_year",
        "year5_revenue",
    ])?;

    for outcome in outcomes {
        match &outcome.result {
            Ok(result) => {
                let highest = result.highest_growth_year().map(|p| p.year.to_string()).unwrap_or_default();
                let final_revenue = result.final_revenue().map(|r| format!("{:.2}", r)).unwrap_or_default();
                wtr.write_record([
                    outcome.scenario_id.clone(),
                    "ok".to_string(),
                    format!("{:.2}", result.total_revenue),
                    format!("{:.2}", result.average_annual_growth_percent),
                    highest,
                    final_revenue,
                ])?;
            }
            Err(e) => {
                wtr.write_record([
                    outcome.scenario_id.as_str(),
                    e.code(),
                    "",
                    "",
                    "",
                    "",
                ])?;
            }
        }
    }

    wtr.flush()?;
    Ok(())
}
