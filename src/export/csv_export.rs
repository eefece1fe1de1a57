//! CSV serialization of yearly projections
//!
//! Output layout:
//! ```text
//! Year,Projected Revenue,Growth Amount
//! Year 1,110000,10000
//! ...
//! Year 5,161051,14641 (Highest Growth)
//! ```

use crate::error::ExportError;
use crate::projection::ProjectionResult;
use log::info;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Header row columns
pub const CSV_HEADER: [&str; 3] = ["Year", "Projected Revenue", "Growth Amount"];

/// Appended to the growth amount of the flagged year
pub const HIGHEST_GROWTH_SUFFIX: &str = " (Highest Growth)";

/// Write the yearly records as CSV
pub fn write_csv<W: Write>(result: &ProjectionResult, writer: W) -> Result<(), ExportError> {
    if result.projections.is_empty() {
        return Err(ExportError::NoProjections);
    }

    let mut wtr = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);

    wtr.write_record(CSV_HEADER)?;

    for p in &result.projections {
        // Shortest round-trip form: 110000.0 -> "110000", 121000.5 -> "121000.5"
        let growth = if p.is_highest_growth {
            format!("{}{}", p.growth_amount, HIGHEST_GROWTH_SUFFIX)
        } else {
            p.growth_amount.to_string()
        };
        wtr.write_record([p.label(), p.revenue.to_string(), growth])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Render the CSV into a string
pub fn to_csv_string(result: &ProjectionResult) -> Result<String, ExportError> {
    let mut buf = Vec::new();
    write_csv(result, &mut buf)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Write the CSV to a file
pub fn save_csv<P: AsRef<Path>>(result: &ProjectionResult, path: P) -> Result<(), ExportError> {
    let path = path.as_ref();
    let file = File::create(path)?;
    write_csv(result, file)?;
    info!("wrote {} projection rows to {}", result.projections.len(), path.display());
    Ok(())
}
