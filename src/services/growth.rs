//! Growth calculator
//!
//! Compounding projections for recurring (SIP) and one-time (lumpsum)
//! investments, CAGR and percentage change. Results are display-grade `f64`
//! figures. Inputs that would make a formula undefined resolve to zero
//! instead of `NaN` or infinity.

use crate::models::{GrowthProjection, ScheduleRow};

/// Longest schedule produced, in years
pub const MAX_SCHEDULE_YEARS: u32 = 100;

/// Round to a fixed number of decimal places
///
/// Values too large to scale are returned unchanged.
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / factor
}

/// Percentage change from `old_value` to `new_value`, two decimals
///
/// A zero baseline reports `100` when the new value is positive and `0`
/// otherwise. Downstream displays rely on exactly this.
pub fn percentage_change(old_value: f64, new_value: f64) -> f64 {
    if !old_value.is_finite() || !new_value.is_finite() {
        tracing::debug!(old_value, new_value, "non-finite percentage change input");
        return 0.0;
    }
    if old_value == 0.0 {
        return if new_value > 0.0 { 100.0 } else { 0.0 };
    }
    let change = (new_value - old_value) / old_value.abs() * 100.0;
    if !change.is_finite() {
        tracing::debug!(old_value, new_value, "percentage change overflowed");
        return 0.0;
    }
    round_to(change, 2)
}

/// Project a monthly SIP compounding monthly
///
/// Uses the future value of an annuity due. A zero return rate is a plain
/// sum of the instalments.
pub fn sip_returns(
    monthly_investment: f64,
    years: f64,
    annual_return_percent: f64,
) -> GrowthProjection {
    if !all_finite(&[monthly_investment, years, annual_return_percent]) || years <= 0.0 {
        tracing::debug!(
            monthly_investment,
            years,
            annual_return_percent,
            "SIP input out of range"
        );
        return GrowthProjection::zero();
    }

    let months = years * 12.0;
    let total_investment = monthly_investment * months;
    let future_value =
        monthly_investment * annuity_due_factor(monthly_rate(annual_return_percent), months);

    projection(future_value, total_investment)
}

/// Project a one-time investment compounding yearly
pub fn lumpsum_returns(
    principal: f64,
    years: f64,
    annual_return_percent: f64,
) -> GrowthProjection {
    if !all_finite(&[principal, years, annual_return_percent]) || years < 0.0 {
        tracing::debug!(
            principal,
            years,
            annual_return_percent,
            "lumpsum input out of range"
        );
        return GrowthProjection::zero();
    }

    let future_value = principal * (1.0 + annual_return_percent / 100.0).powf(years);
    projection(future_value, principal)
}

/// Compound annual growth rate as a percentage, two decimals
///
/// A non-positive beginning value or duration gives `0`.
pub fn cagr(beginning_value: f64, ending_value: f64, years: f64) -> f64 {
    if !all_finite(&[beginning_value, ending_value, years])
        || beginning_value <= 0.0
        || years <= 0.0
    {
        return 0.0;
    }

    let rate = ((ending_value / beginning_value).powf(1.0 / years) - 1.0) * 100.0;
    if !rate.is_finite() {
        tracing::debug!(beginning_value, ending_value, years, "CAGR undefined");
        return 0.0;
    }
    round_to(rate, 2)
}

/// Monthly SIP needed to reach `target` after `years`, rounded up
pub fn required_monthly_sip(target: f64, years: f64, annual_return_percent: f64) -> f64 {
    if !all_finite(&[target, years, annual_return_percent]) || target <= 0.0 || years <= 0.0 {
        return 0.0;
    }

    let factor = annuity_due_factor(monthly_rate(annual_return_percent), years * 12.0);
    if !factor.is_finite() || factor <= 0.0 {
        tracing::debug!(target, years, annual_return_percent, "goal SIP undefined");
        return 0.0;
    }
    let monthly = (target / factor).ceil();
    if monthly.is_finite() {
        monthly
    } else {
        0.0
    }
}

/// Year-by-year values of a SIP
///
/// One row per whole year. For a whole-year horizon the last row matches
/// [`sip_returns`] for the same inputs.
pub fn sip_schedule(
    monthly_investment: f64,
    years: f64,
    annual_return_percent: f64,
) -> Vec<ScheduleRow> {
    schedule(years, |y| sip_returns(monthly_investment, y, annual_return_percent))
}

/// Year-by-year values of a lumpsum investment
pub fn lumpsum_schedule(
    principal: f64,
    years: f64,
    annual_return_percent: f64,
) -> Vec<ScheduleRow> {
    schedule(years, |y| lumpsum_returns(principal, y, annual_return_percent))
}

fn schedule(years: f64, project: impl Fn(f64) -> GrowthProjection) -> Vec<ScheduleRow> {
    if !years.is_finite() || years < 1.0 {
        return Vec::new();
    }

    let whole_years = years.floor().min(MAX_SCHEDULE_YEARS as f64) as u32;
    (1..=whole_years)
        .map(|year| {
            let p = project(year as f64);
            ScheduleRow {
                year,
                invested: p.total_investment,
                value: p.future_value,
                returns: p.estimated_returns,
            }
        })
        .collect()
}

fn monthly_rate(annual_return_percent: f64) -> f64 {
    annual_return_percent / 12.0 / 100.0
}

/// Future value of 1 paid at the start of each of `periods` periods
fn annuity_due_factor(rate: f64, periods: f64) -> f64 {
    if rate == 0.0 {
        return periods;
    }
    ((1.0 + rate).powf(periods) - 1.0) / rate * (1.0 + rate)
}

fn projection(future_value: f64, total_investment: f64) -> GrowthProjection {
    if !future_value.is_finite() || !total_investment.is_finite() {
        tracing::debug!(future_value, total_investment, "projection undefined");
        return GrowthProjection::zero();
    }

    let estimated_returns = (future_value - total_investment).round();
    let percent = estimated_returns / total_investment * 100.0;
    let absolute_return_percent = if total_investment == 0.0 || !percent.is_finite() {
        0.0
    } else {
        round_to(percent, 2)
    };

    GrowthProjection {
        future_value: future_value.round(),
        total_investment,
        estimated_returns,
        absolute_return_percent,
    }
}

fn all_finite(values: &[f64]) -> bool {
    values.iter().all(|v| v.is_finite())
}
