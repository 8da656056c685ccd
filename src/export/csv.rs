//! CSV Export functionality
//!
//! Writes a projection schedule as one row per year, spreadsheet friendly.

use std::io::Write;

use crate::error::FincalcResult;
use crate::export::json::ProjectionReport;

/// Export the year-by-year schedule of a report
pub fn export_schedule_csv<W: Write>(report: &ProjectionReport, writer: W) -> FincalcResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer.write_record(["Year", "Invested", "Value", "Returns"])?;
    for row in &report.schedule {
        csv_writer.write_record([
            row.year.to_string(),
            format!("{:.2}", row.invested),
            format!("{:.2}", row.value),
            format!("{:.2}", row.returns),
        ])?;
    }

    csv_writer.flush()?;
    Ok(())
}
