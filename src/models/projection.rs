//! Growth projection results
//!
//! The values here are produced by the growth calculator and handed straight
//! to the presentation layer, so they are plain serializable records.

use serde::{Deserialize, Serialize};

/// Outcome of projecting an investment forward
///
/// `future_value` and `estimated_returns` are rounded to whole units, and
/// `future_value == total_investment + estimated_returns` up to that rounding.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GrowthProjection {
    pub future_value: f64,
    pub total_investment: f64,
    pub estimated_returns: f64,
    /// Returns as a percentage of the amount invested, two decimals
    pub absolute_return_percent: f64,
}

impl GrowthProjection {
    /// A projection where nothing was invested and nothing was earned
    pub const fn zero() -> Self {
        Self {
            future_value: 0.0,
            total_investment: 0.0,
            estimated_returns: 0.0,
            absolute_return_percent: 0.0,
        }
    }

    /// Whether the projection ends with a loss
    pub fn is_loss(&self) -> bool {
        self.estimated_returns < 0.0
    }
}

/// One year of a projection schedule
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScheduleRow {
    /// 1-based year number
    pub year: u32,
    /// Cumulative amount invested by the end of the year
    pub invested: f64,
    /// Value at the end of the year, whole units
    pub value: f64,
    /// `value - invested`, whole units
    pub returns: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero() {
        let p = GrowthProjection::zero();
        assert_eq!(p, GrowthProjection::default());
        assert!(!p.is_loss());
    }

    #[test]
    fn test_serialization() {
        let p = GrowthProjection {
            future_value: 310585.0,
            total_investment: 100000.0,
            estimated_returns: 210585.0,
            absolute_return_percent: 210.59,
        };
        let json = serde_json::to_string(&p).unwrap();
        assert!(json.contains("\"future_value\":310585.0"));
        let back: GrowthProjection = serde_json::from_str(&json).unwrap();
        assert_eq!(p, back);
    }
}
