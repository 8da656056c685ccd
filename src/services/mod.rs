//! Calculation layer for fincalc
//!
//! Stateless operations over amounts and dates. Nothing here performs I/O
//! or returns an error; every edge case resolves to a defined fallback.

pub mod calendar;
pub mod currency;
pub mod growth;

pub use calendar::{
    add_days, add_months, age, age_on, current_financial_year, financial_year, format_date,
    format_date_for_input, format_date_time, is_date_in_range, relative_time, relative_time_at,
    CalendarInput,
};
pub use currency::{
    format_currency, format_currency_compact, format_currency_without_symbol, parse_currency,
    CurrencyFormatter, PLACEHOLDER,
};
pub use growth::{
    cagr, lumpsum_returns, lumpsum_schedule, percentage_change, required_monthly_sip,
    sip_returns, sip_schedule,
};
