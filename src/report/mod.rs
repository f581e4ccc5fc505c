//! Output formats for calculation results.
//!
//! Results serialize to JSON directly; this module adds the CSV export of
//! the breakdown and a plain-text walkthrough of the calculation.

mod csv_export;
mod explanation;

pub use csv_export::{
    UTF8_BOM, ascii_file_name, breakdown_to_csv, export_file_name, write_breakdown_csv,
};
pub use explanation::{Explanation, PROJECTION_NOTICE};
