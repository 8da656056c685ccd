//! Financial year representation
//!
//! A financial year starts on 1 April and ends on 31 March of the following
//! calendar year. Dates in January to March belong to the year that began
//! the previous April.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Calendar month in which a financial year begins
pub const FINANCIAL_YEAR_START_MONTH: u32 = 4;

/// A financial year, identified by the calendar year it starts in
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FinancialYear {
    start_year: i32,
}

impl FinancialYear {
    /// Create the financial year starting in April of `start_year`
    pub const fn starting(start_year: i32) -> Self {
        Self { start_year }
    }

    /// The financial year containing a date
    pub fn for_date(date: NaiveDate) -> Self {
        if date.month() >= FINANCIAL_YEAR_START_MONTH {
            Self::starting(date.year())
        } else {
            Self::starting(date.year() - 1)
        }
    }

    /// The financial year containing today's local date
    pub fn current() -> Self {
        Self::for_date(chrono::Local::now().date_naive())
    }

    pub const fn start_year(&self) -> i32 {
        self.start_year
    }

    pub const fn end_year(&self) -> i32 {
        self.start_year + 1
    }

    /// 1 April of the start year
    pub fn start_date(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.start_year, FINANCIAL_YEAR_START_MONTH, 1)
            .unwrap_or(NaiveDate::MIN)
    }

    /// 31 March of the end year (inclusive)
    pub fn end_date(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.end_year(), 3, 31).unwrap_or(NaiveDate::MAX)
    }

    /// Check if a date falls within this financial year
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start_date() && date <= self.end_date()
    }

    pub const fn next(&self) -> Self {
        Self::starting(self.start_year + 1)
    }

    pub const fn prev(&self) -> Self {
        Self::starting(self.start_year - 1)
    }

    /// Parse a financial year label
    ///
    /// Accepts "2024-2025", "2024-25" and "FY2024-25". The end year must
    /// follow the start year.
    pub fn parse(s: &str) -> Result<Self, FinancialYearParseError> {
        let trimmed = s.trim();
        let body = trimmed
            .strip_prefix("FY")
            .or_else(|| trimmed.strip_prefix("fy"))
            .unwrap_or(trimmed)
            .trim();

        let (start, end) = body
            .split_once('-')
            .ok_or_else(|| FinancialYearParseError::InvalidFormat(s.to_string()))?;

        let start_year: i32 = start
            .trim()
            .parse()
            .map_err(|_| FinancialYearParseError::InvalidFormat(s.to_string()))?;
        let end = end.trim();
        let end_year: i32 = end
            .parse()
            .map_err(|_| FinancialYearParseError::InvalidFormat(s.to_string()))?;

        // Two-digit suffix: "2024-25"
        let end_year = if end.len() == 2 {
            let candidate = start_year - start_year.rem_euclid(100) + end_year;
            if candidate <= start_year {
                candidate + 100
            } else {
                candidate
            }
        } else {
            end_year
        };

        if end_year != start_year + 1 {
            return Err(FinancialYearParseError::NotConsecutive {
                start: start_year,
                end: end_year,
            });
        }

        Ok(Self::starting(start_year))
    }
}

impl fmt::Display for FinancialYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start_year, self.end_year())
    }
}

/// Error type for financial year parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FinancialYearParseError {
    InvalidFormat(String),
    NotConsecutive { start: i32, end: i32 },
}

impl fmt::Display for FinancialYearParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FinancialYearParseError::InvalidFormat(s) => {
                write!(f, "Invalid financial year format: {}", s)
            }
            FinancialYearParseError::NotConsecutive { start, end } => {
                write!(f, "Non-consecutive financial year: {start}-{end}")
            }
        }
    }
}

impl std::error::Error for FinancialYearParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_boundaries() {
        assert_eq!(
            FinancialYear::for_date(date(2024, 3, 31)).to_string(),
            "2023-2024"
        );
        assert_eq!(
            FinancialYear::for_date(date(2024, 4, 1)).to_string(),
            "2024-2025"
        );
        assert_eq!(
            FinancialYear::for_date(date(2024, 12, 31)).to_string(),
            "2024-2025"
        );
        assert_eq!(
            FinancialYear::for_date(date(2025, 1, 1)).to_string(),
            "2024-2025"
        );
    }

    #[test]
    fn test_start_and_end_dates() {
        let fy = FinancialYear::starting(2024);
        assert_eq!(fy.start_date(), date(2024, 4, 1));
        assert_eq!(fy.end_date(), date(2025, 3, 31));
        assert!(fy.contains(date(2024, 4, 1)));
        assert!(fy.contains(date(2025, 3, 31)));
        assert!(!fy.contains(date(2025, 4, 1)));
    }

    #[test]
    fn test_navigation() {
        let fy = FinancialYear::starting(2024);
        assert_eq!(fy.next(), FinancialYear::starting(2025));
        assert_eq!(fy.prev(), FinancialYear::starting(2023));
        assert!(fy.prev() < fy);
    }

    #[test]
    fn test_parse() {
        assert_eq!(FinancialYear::parse("2024-2025").unwrap(), FinancialYear::starting(2024));
        assert_eq!(FinancialYear::parse("2024-25").unwrap(), FinancialYear::starting(2024));
        assert_eq!(FinancialYear::parse("FY1999-00").unwrap(), FinancialYear::starting(1999));
        assert!(matches!(
            FinancialYear::parse("2024-2026"),
            Err(FinancialYearParseError::NotConsecutive { .. })
        ));
        assert!(matches!(
            FinancialYear::parse("2024"),
            Err(FinancialYearParseError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_serialization() {
        let fy = FinancialYear::starting(2024);
        let json = serde_json::to_string(&fy).unwrap();
        assert_eq!(json, "2024");
        let back: FinancialYear = serde_json::from_str(&json).unwrap();
        assert_eq!(fy, back);
    }
}
