//! Run parameters loaded from JSON
//!
//! Lets a projection be described in a file instead of on the command line.
//! Any field left out falls back to its default.

use super::project_raw;
use crate::error::ValidationError;
use crate::projection::ProjectionResult;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Parameters for a single projection run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunParams {
    /// Current revenue as typed into the form (blank = missing)
    #[serde(default)]
    pub current_revenue: String,

    /// Annual growth rate in percent as typed into the form (blank = missing)
    #[serde(default)]
    pub growth_rate: String,

    /// File name used when exporting projections
    #[serde(default = "default_export_file_name")]
    pub export_file_name: String,
}

fn default_export_file_name() -> String { "revenue_projections.csv".to_string() }

impl Default for RunParams {
    fn default() -> Self {
        Self {
            current_revenue: String::new(),
            growth_rate: String::new(),
            export_file_name: default_export_file_name(),
        }
    }
}

impl RunParams {
    /// Load parameters from a JSON file
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn Error>> {
        let file = File::open(path)?;
        let params = serde_json::from_reader(BufReader::new(file))?;
        Ok(params)
    }

    /// Parse parameters from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Validate and project using these parameters
    pub fn project(&self) -> Result<ProjectionResult, ValidationError> {
        project_raw(&self.current_revenue, &self.growth_rate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_fill_missing_fields() {
        let params = RunParams::from_json_str(r#"{"current_revenue": "5000"}"#).unwrap();
        assert_eq!(params.current_revenue, "5000");
        assert_eq!(params.growth_rate, "");
        assert_eq!(params.export_file_name, "revenue_projections.csv");
        assert_eq!(params.project(), Err(ValidationError::MissingGrowthRate));
    }

    #[test]
    fn test_full_params_project() {
        let json = r#"{
            "current_revenue": "100000",
            "growth_rate": "10",
            "export_file_name": "q3.csv"
        }"#;
        let params = RunParams::from_json_str(json).unwrap();
        assert_eq!(params.export_file_name, "q3.csv");

        let result = params.project().unwrap();
        assert_eq!(result.total_revenue, 671_561.0);
    }

    #[test]
    fn test_out_of_range_rate_in_file_is_rejected() {
        let params = RunParams::from_json_str(r#"{"current_revenue": "50000", "growth_rate": "250"}"#).unwrap();
        assert_eq!(params.project(), Err(ValidationError::MissingGrowthRate));

        let params = RunParams::from_json_str(r#"{"current_revenue": "50000", "growth_rate": "-20"}"#).unwrap();
        assert_eq!(params.project(), Err(ValidationError::MissingGrowthRate));
    }

    #[test]
    fn test_default_params_are_empty() {
        let params = RunParams::default();
        assert_eq!(params.project(), Err(ValidationError::MissingCurrentRevenue));
    }
}
