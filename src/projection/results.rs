//! Yearly projection records and the aggregated result

use super::ProjectionInput;
use serde::{Deserialize, Serialize};

/// One projected year
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearProjection {
    /// Projection year (1-indexed)
    pub year: u32,

    /// Projected revenue, rounded to cents
    pub revenue: f64,

    /// Revenue minus the previous year's revenue, rounded to cents
    pub growth_amount: f64,

    /// True for the earliest year with the largest growth amount
    pub is_highest_growth: bool,
}

impl YearProjection {
    /// Display label, e.g. "Year 3"
    pub fn label(&self) -> String {
        format!("Year {}", self.year)
    }
}

/// Complete result of a projection call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionResult {
    /// Inputs the projection was computed from
    pub input: ProjectionInput,

    /// Yearly records in year order
    pub projections: Vec<YearProjection>,

    /// Sum of the projected revenues, rounded to cents
    pub total_revenue: f64,

    /// ((total / current - 1) * 100) / years, rounded to 2 dp
    pub average_annual_growth_percent: f64,
}

impl ProjectionResult {
    /// The flagged highest-growth record
    pub fn highest_growth_year(&self) -> Option<&YearProjection> {
        self.projections.iter().find(|p| p.is_highest_growth)
    }

    /// Revenue in the last projected year
    pub fn final_revenue(&self) -> Option<f64> {
        self.projections.last().map(|p| p.revenue)
    }
}
