//! Projection engine for five-year revenue growth

mod engine;
mod results;

pub use engine::{compute, round_cents, ProjectionInput};
pub use results::{ProjectionResult, YearProjection};

// ============================================================================
// Projection Horizon
// ============================================================================
// Every projection covers a fixed number of years. Year order is significant
// and year 1 is the first year after the current revenue.

/// Number of yearly records produced per projection
pub const PROJECTION_YEARS: usize = 5;
