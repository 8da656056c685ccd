//! YAML Export functionality
//!
//! Writes a projection report as human-readable YAML with a short header.

use std::io::Write;

use crate::error::{FincalcError, FincalcResult};
use crate::export::json::ProjectionReport;

/// Export a report to YAML
pub fn export_report_yaml<W: Write>(
    report: &ProjectionReport,
    writer: &mut W,
) -> FincalcResult<()> {
    writeln!(writer, "# fincalc {} projection", report.kind)
        .map_err(|e| FincalcError::Export(e.to_string()))?;
    writeln!(
        writer,
        "# {} years at {}% a year",
        report.years, report.annual_return_percent
    )
    .map_err(|e| FincalcError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, report).map_err(|e| FincalcError::Export(e.to_string()))?;
    Ok(())
}

/// Read a report back from YAML
pub fn import_report_yaml(yaml_str: &str) -> FincalcResult<ProjectionReport> {
    Ok(serde_yaml::from_str(yaml_str)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_yaml() {
        let report = ProjectionReport::sip(1000.0, 2.0, 0.0);
        let mut output = Vec::new();
        export_report_yaml(&report, &mut output).unwrap();

        let yaml = String::from_utf8(output).unwrap();
        assert!(yaml.starts_with("# fincalc SIP projection"));
        assert!(yaml.contains("kind: sip"));

        let imported = import_report_yaml(&yaml).unwrap();
        assert_eq!(imported.projection.future_value, 24000.0);
        assert_eq!(imported.schedule.len(), 2);
    }

    #[test]
    fn test_import_invalid_yaml() {
        let err = import_report_yaml("kind: [").unwrap_err();
        assert!(matches!(err, FincalcError::Yaml(_)));
    }
}
