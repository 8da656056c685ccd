//! JSON Export functionality
//!
//! Serializes a projection report, inputs included, for machine consumption.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Write;

use crate::error::{FincalcError, FincalcResult};
use crate::models::{GrowthProjection, ScheduleRow};
use crate::services::growth;

/// Kind of investment a report describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvestmentKind {
    Sip,
    Lumpsum,
}

impl fmt::Display for InvestmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sip => write!(f, "SIP"),
            Self::Lumpsum => write!(f, "Lumpsum"),
        }
    }
}

/// A projection together with the inputs that produced it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionReport {
    pub kind: InvestmentKind,
    /// Monthly instalment for a SIP, principal for a lumpsum
    pub amount: f64,
    pub years: f64,
    pub annual_return_percent: f64,
    pub projection: GrowthProjection,
    pub schedule: Vec<ScheduleRow>,
}

impl ProjectionReport {
    /// Project a monthly SIP
    pub fn sip(monthly_investment: f64, years: f64, annual_return_percent: f64) -> Self {
        Self {
            kind: InvestmentKind::Sip,
            amount: monthly_investment,
            years,
            annual_return_percent,
            projection: growth::sip_returns(monthly_investment, years, annual_return_percent),
            schedule: growth::sip_schedule(monthly_investment, years, annual_return_percent),
        }
    }

    /// Project a one-time investment
    pub fn lumpsum(principal: f64, years: f64, annual_return_percent: f64) -> Self {
        Self {
            kind: InvestmentKind::Lumpsum,
            amount: principal,
            years,
            annual_return_percent,
            projection: growth::lumpsum_returns(principal, years, annual_return_percent),
            schedule: growth::lumpsum_schedule(principal, years, annual_return_percent),
        }
    }
}

/// Export a report as pretty-printed JSON
pub fn export_report_json<W: Write>(
    report: &ProjectionReport,
    writer: &mut W,
) -> FincalcResult<()> {
    serde_json::to_writer_pretty(&mut *writer, report)
        .map_err(|e| FincalcError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| FincalcError::Export(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sip_report() {
        let report = ProjectionReport::sip(5000.0, 10.0, 12.0);
        assert_eq!(report.kind, InvestmentKind::Sip);
        assert_eq!(report.schedule.len(), 10);
        assert_eq!(report.projection.total_investment, 600000.0);
    }

    #[test]
    fn test_export_json() {
        let report = ProjectionReport::lumpsum(100000.0, 2.0, 10.0);
        let mut output = Vec::new();
        export_report_json(&report, &mut output).unwrap();

        let json = String::from_utf8(output).unwrap();
        assert!(json.contains("\"kind\": \"lumpsum\""));

        let parsed: ProjectionReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, report);
    }
}
