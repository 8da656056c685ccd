//! Projection display formatting
//!
//! Renders projection summaries and yearly schedules as terminal tables.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use crate::export::ProjectionReport;
use crate::models::{GrowthProjection, ScheduleRow};
use crate::services::CurrencyFormatter;

#[derive(Tabled)]
struct ScheduleLine {
    #[tabled(rename = "Year")]
    year: u32,
    #[tabled(rename = "Invested")]
    invested: String,
    #[tabled(rename = "Value")]
    value: String,
    #[tabled(rename = "Returns")]
    returns: String,
}

#[derive(Tabled)]
struct SummaryLine {
    #[tabled(rename = "")]
    label: &'static str,
    #[tabled(rename = "Amount")]
    amount: String,
}

/// Format a projection as a two-column summary table
pub fn format_projection(projection: &GrowthProjection, formatter: &CurrencyFormatter) -> String {
    let lines = vec![
        SummaryLine {
            label: "Invested",
            amount: formatter.format(projection.total_investment),
        },
        SummaryLine {
            label: "Estimated returns",
            amount: formatter.format(projection.estimated_returns),
        },
        SummaryLine {
            label: "Future value",
            amount: formatter.format(projection.future_value),
        },
        SummaryLine {
            label: "Absolute return",
            amount: format!("{:.2}%", projection.absolute_return_percent),
        },
    ];

    Table::new(lines)
        .with(Style::rounded())
        .with(Modify::new(Columns::single(1)).with(Alignment::right()))
        .to_string()
}

/// Format a yearly schedule as a table
pub fn format_schedule(rows: &[ScheduleRow], formatter: &CurrencyFormatter) -> String {
    if rows.is_empty() {
        return "No whole years to show.".to_string();
    }

    let lines: Vec<ScheduleLine> = rows
        .iter()
        .map(|row| ScheduleLine {
            year: row.year,
            invested: formatter.format(row.invested),
            value: formatter.format(row.value),
            returns: formatter.format(row.returns),
        })
        .collect();

    Table::new(lines)
        .with(Style::rounded())
        .with(Modify::new(Columns::new(1..)).with(Alignment::right()))
        .to_string()
}

/// Format a full report: heading, summary and optionally the schedule
pub fn format_report(
    report: &ProjectionReport,
    formatter: &CurrencyFormatter,
    with_schedule: bool,
) -> String {
    let mut output = format!(
        "{} of {} for {} years at {}% a year\n",
        report.kind,
        formatter.format(report.amount),
        report.years,
        report.annual_return_percent
    );
    output.push_str(&format_projection(&report.projection, formatter));
    output.push('\n');

    if with_schedule {
        output.push('\n');
        output.push_str(&format_schedule(&report.schedule, formatter));
        output.push('\n');
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;

    fn usd_settings() -> Settings {
        Settings {
            currency: "USD".into(),
            locale: "en-US".into(),
            ..Settings::default()
        }
    }

    #[test]
    fn test_format_projection() {
        let settings = usd_settings();
        let formatter = CurrencyFormatter::new(&settings);
        let report = ProjectionReport::lumpsum(100000.0, 10.0, 12.0);

        let output = format_projection(&report.projection, &formatter);
        assert!(output.contains("Future value"));
        assert!(output.contains("$310,585.00"));
        assert!(output.contains("210.59%"));
    }

    #[test]
    fn test_format_schedule() {
        let settings = usd_settings();
        let formatter = CurrencyFormatter::new(&settings);
        let report = ProjectionReport::lumpsum(100000.0, 2.0, 10.0);

        let output = format_schedule(&report.schedule, &formatter);
        assert!(output.contains("Year"));
        assert!(output.contains("$121,000.00"));
    }

    #[test]
    fn test_format_empty_schedule() {
        let settings = usd_settings();
        let formatter = CurrencyFormatter::new(&settings);
        assert_eq!(format_schedule(&[], &formatter), "No whole years to show.");
    }

    #[test]
    fn test_format_report_heading() {
        let settings = usd_settings();
        let formatter = CurrencyFormatter::new(&settings);
        let report = ProjectionReport::sip(5000.0, 10.0, 12.0);

        let output = format_report(&report, &formatter, true);
        assert!(output.starts_with("SIP of $5,000.00 for 10 years at 12% a year"));
        assert!(output.contains("$1,161,695.00"));
    }
}
