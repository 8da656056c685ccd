//! Export module for fincalc
//!
//! Writes projection reports in several formats:
//! - CSV: the yearly schedule (spreadsheet-compatible)
//! - JSON: the full report, machine readable
//! - YAML: the full report, human readable

pub mod csv;
pub mod json;
pub mod yaml;

use std::fmt;
use std::io::Write;
use std::str::FromStr;

use crate::error::{FincalcError, FincalcResult};

pub use self::csv::export_schedule_csv;
pub use self::json::{export_report_json, InvestmentKind, ProjectionReport};
pub use self::yaml::{export_report_yaml, import_report_yaml};

/// Output format for a report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
    Yaml,
}

impl ExportFormat {
    /// Write `report` to `writer` in this format
    pub fn write<W: Write>(&self, report: &ProjectionReport, writer: &mut W) -> FincalcResult<()> {
        match self {
            Self::Csv => export_schedule_csv(report, writer),
            Self::Json => export_report_json(report, writer),
            Self::Yaml => export_report_yaml(report, writer),
        }
    }
}

impl FromStr for ExportFormat {
    type Err = FincalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            other => Err(FincalcError::Validation(format!(
                "Unknown export format: {} (expected csv, json or yaml)",
                other
            ))),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Csv => write!(f, "csv"),
            Self::Json => write!(f, "json"),
            Self::Yaml => write!(f, "yaml"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_format() {
        assert_eq!("CSV".parse::<ExportFormat>().unwrap(), ExportFormat::Csv);
        assert_eq!("yml".parse::<ExportFormat>().unwrap(), ExportFormat::Yaml);
        assert!("xml".parse::<ExportFormat>().unwrap_err().is_validation());
    }

    #[test]
    fn test_write_dispatches() {
        let report = ProjectionReport::sip(1000.0, 1.0, 12.0);
        let mut output = Vec::new();
        ExportFormat::Json.write(&report, &mut output).unwrap();
        assert!(String::from_utf8(output).unwrap().contains("\"kind\": \"sip\""));
    }
}
