//! Export and display of projection results

mod csv_export;
pub mod format;

pub use csv_export::{save_csv, to_csv_string, write_csv, CSV_HEADER, HIGHEST_GROWTH_SUFFIX};
pub use format::{format_axis_tick, format_currency, format_percent};
