//! Revenue Projection - five-year compounding revenue projections
//!
//! This library provides:
//! - The projection engine (five yearly records, totals, highest-growth year)
//! - Raw form input parsing and growth-rate entry rules
//! - Calculator state with timed notices
//! - CSV export and display formatting
//! - Parallel batch projection of many scenarios

pub mod error;
pub mod projection;
pub mod input;
pub mod calculator;
pub mod export;
pub mod batch;

// Re-export commonly used types
pub use error::{ValidationError, ExportError, BatchError};
pub use projection::{compute, ProjectionInput, ProjectionResult, YearProjection, PROJECTION_YEARS};
pub use input::{project_raw, RunParams};
pub use calculator::{CalculatorState, Notice, NoticeKind};
