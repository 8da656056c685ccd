//! Value types for fincalc
//!
//! Everything here is a transient value built fresh for each call: currency
//! codes, locale rules, projection results, date layouts and financial years.

pub mod currency;
pub mod date_format;
pub mod financial_year;
pub mod locale;
pub mod projection;

pub use currency::{currency_symbol, CurrencyCode};
pub use date_format::DateFormat;
pub use financial_year::FinancialYear;
pub use locale::{CompactScale, Grouping, LocaleTable, NumberLocale, SymbolPosition};
pub use projection::{GrowthProjection, ScheduleRow};
