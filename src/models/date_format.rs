//! Supported date layouts

use serde::{Deserialize, Serialize};
use std::fmt;

/// Fixed English month abbreviations used by [`DateFormat::DayMonthNameYear`]
pub const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// The enumerated output layouts for a date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DateFormat {
    /// `dd/mm/yyyy`
    #[default]
    #[serde(rename = "dd/mm/yyyy")]
    DayMonthYear,
    /// `mm/dd/yyyy`
    #[serde(rename = "mm/dd/yyyy")]
    MonthDayYear,
    /// `yyyy-mm-dd`
    #[serde(rename = "yyyy-mm-dd")]
    Iso,
    /// `dd MMM yyyy`, e.g. `05 Jan 2024`
    #[serde(rename = "dd MMM yyyy")]
    DayMonthNameYear,
}

impl DateFormat {
    /// The pattern string callers use to select this layout
    pub const fn pattern(&self) -> &'static str {
        match self {
            Self::DayMonthYear => "dd/mm/yyyy",
            Self::MonthDayYear => "mm/dd/yyyy",
            Self::Iso => "yyyy-mm-dd",
            Self::DayMonthNameYear => "dd MMM yyyy",
        }
    }

    /// Resolve a pattern string, falling back to `dd/mm/yyyy` when unknown
    pub fn from_pattern(pattern: &str) -> Self {
        match pattern.trim() {
            "dd/mm/yyyy" => Self::DayMonthYear,
            "mm/dd/yyyy" => Self::MonthDayYear,
            "yyyy-mm-dd" => Self::Iso,
            "dd MMM yyyy" => Self::DayMonthNameYear,
            other => {
                tracing::debug!(pattern = other, "unknown date format, using dd/mm/yyyy");
                Self::default()
            }
        }
    }
}

impl fmt::Display for DateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.pattern())
    }
}

/// Abbreviated name for a 1-based month number
pub fn month_abbreviation(month: u32) -> &'static str {
    MONTH_ABBREVIATIONS
        .get(month.wrapping_sub(1) as usize)
        .copied()
        .unwrap_or("???")
}
