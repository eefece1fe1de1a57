//! Error types for projection, export and batch runs

use thiserror::Error;

/// Input validation failures raised before any projection is computed.
///
/// The `Display` text is the message shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter the current revenue")]
    MissingCurrentRevenue,

    #[error("Please enter the growth rate")]
    MissingGrowthRate,

    #[error("Please enter a valid current revenue")]
    InvalidCurrentRevenue,
}

impl ValidationError {
    /// Machine-readable code for logs and batch summaries
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingCurrentRevenue => "missing_current_revenue",
            Self::MissingGrowthRate => "missing_growth_rate",
            Self::InvalidCurrentRevenue => "invalid_current_revenue",
        }
    }
}

/// Failures while serializing projections to CSV
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("no projections to export")]
    NoProjections,

    #[error("csv write failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

/// Failures while loading scenarios or writing a batch summary
#[derive(Debug, Error)]
pub enum BatchError {
    #[error("failed to read scenarios: {0}")]
    Csv(#[from] csv::Error),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
