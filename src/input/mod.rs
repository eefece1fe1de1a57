//! Raw form input handling
//!
//! Converts the text the user typed into engine arguments, and holds the
//! entry-time rule that keeps the growth rate within 0-100%.

pub mod params;

pub use params::RunParams;

use crate::error::ValidationError;
use crate::projection::{compute, ProjectionResult};
use log::debug;

/// Lowest growth rate the form accepts (percent)
pub const MIN_GROWTH_RATE: f64 = 0.0;

/// Highest growth rate the form accepts (percent)
pub const MAX_GROWTH_RATE: f64 = 100.0;

/// Parse the current revenue field
///
/// Blank text is a missing value; text that is not a number is invalid.
pub fn parse_current_revenue(raw: &str) -> Result<Option<f64>, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse::<f64>()
        .map(Some)
        .map_err(|_| ValidationError::InvalidCurrentRevenue)
}

/// Parse the growth rate field; blank or non-numeric text counts as missing
pub fn parse_growth_rate(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|r| r.is_finite())
}

/// Whether a growth rate edit may be stored in the form.
/// Clearing the field is always allowed.
pub fn accept_growth_rate_entry(raw: &str) -> bool {
    if raw.trim().is_empty() {
        return true;
    }
    match parse_growth_rate(raw) {
        Some(rate) => (MIN_GROWTH_RATE..=MAX_GROWTH_RATE).contains(&rate),
        None => false,
    }
}

/// Validate both raw fields and run the projection
///
/// Problems are reported in form order: missing revenue, missing growth rate,
/// invalid revenue. A growth rate the form would not accept (non-numeric or
/// outside 0-100%) is never stored, so it counts as missing.
pub fn project_raw(current_revenue: &str, growth_rate: &str) -> Result<ProjectionResult, ValidationError> {
    if current_revenue.trim().is_empty() {
        return Err(ValidationError::MissingCurrentRevenue);
    }

    let rate = if accept_growth_rate_entry(growth_rate) {
        parse_growth_rate(growth_rate)
    } else {
        debug!("growth rate {:?} rejected at entry", growth_rate);
        None
    };
    let rate = rate.ok_or(ValidationError::MissingGrowthRate)?;

    let revenue = parse_current_revenue(current_revenue)?;
    compute(revenue, Some(rate))
}
