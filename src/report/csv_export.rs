//! CSV export of the hours breakdown.

use std::io::Write;

use serde::Serialize;

use crate::error::{EngineError, EngineResult};
use crate::models::{Breakdown, Region};

/// The UTF-8 byte order mark, so spreadsheet tools detect the encoding.
pub const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    #[serde(rename = "Activity")]
    activity: &'a str,
    #[serde(rename = "Hours")]
    hours: i64,
}

fn export_error(err: impl std::fmt::Display) -> EngineError {
    EngineError::Export {
        message: err.to_string(),
    }
}

/// Writes the breakdown as CSV to `writer`.
///
/// The output starts with a UTF-8 byte order mark, followed by an
/// `Activity,Hours` header. Only entries with positive hours are written,
/// largest first; ties keep breakdown order.
///
/// # Errors
///
/// Returns [`EngineError::Export`] if writing fails.
pub fn write_breakdown_csv<W: Write>(breakdown: &Breakdown, mut writer: W) -> EngineResult<()> {
    writer.write_all(UTF8_BOM).map_err(export_error)?;

    let mut csv_writer = csv::Writer::from_writer(writer);
    for entry in breakdown.positive_by_hours_desc() {
        csv_writer
            .serialize(CsvRow {
                activity: &entry.label,
                hours: entry.hours,
            })
            .map_err(export_error)?;
    }

    // An empty breakdown still gets its header row.
    if breakdown.positive_by_hours_desc().is_empty() {
        csv_writer
            .write_record(["Activity", "Hours"])
            .map_err(export_error)?;
    }

    csv_writer.flush().map_err(export_error)
}

/// Renders the breakdown as CSV bytes.
///
/// # Example
///
/// ```
/// use capacity_planner::models::{Breakdown, BreakdownKind};
/// use capacity_planner::report::breakdown_to_csv;
///
/// let mut breakdown = Breakdown::default();
/// breakdown.add("Vacation", BreakdownKind::Vacation, 240);
/// breakdown.add("Project work", BreakdownKind::ProjectWork, 1368);
/// breakdown.add("Sickness", BreakdownKind::Sickness, 0);
///
/// let bytes = breakdown_to_csv(&breakdown).unwrap();
/// let text = String::from_utf8(bytes[3..].to_vec()).unwrap();
/// assert_eq!(text, "Activity,Hours\nProject work,1368\nVacation,240\n");
/// ```
pub fn breakdown_to_csv(breakdown: &Breakdown) -> EngineResult<Vec<u8>> {
    let mut buffer = Vec::new();
    write_breakdown_csv(breakdown, &mut buffer)?;
    Ok(buffer)
}

/// Returns the default export file name, e.g.
/// `capacity_plan_2026_Nordrhein-Westfalen.csv`.
pub fn export_file_name(year: i32, region: Region) -> String {
    format!("capacity_plan_{}_{}.csv", year, region.name())
}

/// Transliterates German umlauts so a file name fits an ASCII header.
///
/// # Example
///
/// ```
/// use capacity_planner::report::ascii_file_name;
///
/// assert_eq!(
///     ascii_file_name("capacity_plan_2026_Thüringen.csv"),
///     "capacity_plan_2026_Thueringen.csv"
/// );
/// ```
pub fn ascii_file_name(name: &str) -> String {
    let mut ascii = String::with_capacity(name.len());
    for c in name.chars() {
        match c {
            'ä' => ascii.push_str("ae"),
            'ö' => ascii.push_str("oe"),
            'ü' => ascii.push_str("ue"),
            'Ä' => ascii.push_str("Ae"),
            'Ö' => ascii.push_str("Oe"),
            'Ü' => ascii.push_str("Ue"),
            'ß' => ascii.push_str("ss"),
            c if c.is_ascii() && !c.is_ascii_control() && c != '"' => ascii.push(c),
            _ => ascii.push('_'),
        }
    }
    ascii
}
