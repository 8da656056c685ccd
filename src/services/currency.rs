//! Currency formatting and parsing
//!
//! Turns monetary amounts into display strings and back. Every function here
//! is total: a missing or non-finite amount renders as [`PLACEHOLDER`], a locale
//! or currency the table cannot handle falls back to `"<symbol> <amount>"`,
//! and unparseable text parses as zero.

use crate::config::settings::Settings;
use crate::models::currency::{currency_symbol, is_well_formed_code};
use crate::models::{LocaleTable, NumberLocale, SymbolPosition};

/// Rendered in place of a missing amount
pub const PLACEHOLDER: &str = "-";

/// Locale used for grouping when the requested one is unknown
const DEFAULT_LOCALE: &str = "en-US";

/// Format an amount as a localized currency string with two decimals
///
/// ```
/// use fincalc::services::currency::format_currency;
/// assert_eq!(format_currency(1234567.5, "INR", "en-IN"), "₹12,34,567.50");
/// assert_eq!(format_currency(None, "INR", "en-IN"), "-");
/// ```
pub fn format_currency(
    amount: impl Into<Option<f64>>,
    currency_code: &str,
    locale: &str,
) -> String {
    format_currency_in(LocaleTable::builtin(), amount, currency_code, locale)
}

/// [`format_currency`] against an explicit locale table
pub fn format_currency_in(
    table: &LocaleTable,
    amount: impl Into<Option<f64>>,
    currency_code: &str,
    locale: &str,
) -> String {
    let Some(amount) = finite(amount.into()) else {
        return PLACEHOLDER.to_string();
    };
    let symbol = currency_symbol(currency_code);

    match supported_locale(table, currency_code, locale) {
        Some(rules) => place_symbol(rules, symbol, &rules.format_fixed(amount, 2)),
        None => format!("{} {:.2}", symbol, amount),
    }
}

/// Format an amount with short-scale suffixes for tight spaces
///
/// Pairs the locale table cannot format get the same `"<symbol> <amount>"`
/// fallback as [`format_currency`], unscaled.
///
/// ```
/// use fincalc::services::currency::format_currency_compact;
/// assert_eq!(format_currency_compact(1_500_000.0, "USD", "en-US"), "$1.5M");
/// assert_eq!(format_currency_compact(2_500_000.0, "INR", "en-IN"), "₹25.0L");
/// ```
pub fn format_currency_compact(
    amount: impl Into<Option<f64>>,
    currency_code: &str,
    locale: &str,
) -> String {
    format_currency_compact_in(LocaleTable::builtin(), amount, currency_code, locale)
}

/// [`format_currency_compact`] against an explicit locale table
pub fn format_currency_compact_in(
    table: &LocaleTable,
    amount: impl Into<Option<f64>>,
    currency_code: &str,
    locale: &str,
) -> String {
    let Some(amount) = finite(amount.into()) else {
        return PLACEHOLDER.to_string();
    };
    let symbol = currency_symbol(currency_code);

    match supported_locale(table, currency_code, locale) {
        Some(rules) => place_symbol(rules, symbol, &compact_number(rules, amount)),
        None => format!("{} {:.2}", symbol, amount),
    }
}

/// Format an amount as a digit-grouped number with two decimals and no symbol
pub fn format_currency_without_symbol(amount: impl Into<Option<f64>>, locale: &str) -> String {
    format_currency_without_symbol_in(LocaleTable::builtin(), amount, locale)
}

/// [`format_currency_without_symbol`] against an explicit locale table
pub fn format_currency_without_symbol_in(
    table: &LocaleTable,
    amount: impl Into<Option<f64>>,
    locale: &str,
) -> String {
    let Some(amount) = finite(amount.into()) else {
        return PLACEHOLDER.to_string();
    };

    match table.lookup(locale) {
        Some(rules) => rules.format_fixed(amount, 2),
        None => {
            tracing::debug!(locale, "unknown locale, grouping with {}", DEFAULT_LOCALE);
            NumberLocale::english(DEFAULT_LOCALE).format_fixed(amount, 2)
        }
    }
}

/// Parse a display string back into a number
///
/// Every character other than a digit, `.` or `-` is dropped and the longest
/// numeric prefix of what remains is parsed. Anything unparseable or too
/// large for an `f64` yields `0`.
/// Locales that use `,` as the decimal separator do not survive this.
pub fn parse_currency(raw: &str) -> f64 {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();

    match leading_number(&cleaned) {
        // Normalizes -0.0
        Some(value) if value != 0.0 && value.is_finite() => value,
        _ => 0.0,
    }
}

/// Formats amounts using the currency and locale from user settings
pub struct CurrencyFormatter<'a> {
    settings: &'a Settings,
    locales: &'a LocaleTable,
}

impl<'a> CurrencyFormatter<'a> {
    /// Create a formatter over the built-in locale table
    pub fn new(settings: &'a Settings) -> Self {
        Self {
            settings,
            locales: LocaleTable::builtin(),
        }
    }

    /// Create a formatter over a caller-supplied locale table
    pub fn with_locales(settings: &'a Settings, locales: &'a LocaleTable) -> Self {
        Self { settings, locales }
    }

    /// Format using the configured style (compact or full)
    pub fn format(&self, amount: impl Into<Option<f64>>) -> String {
        if self.settings.compact {
            self.format_compact(amount)
        } else {
            self.format_full(amount)
        }
    }

    pub fn format_full(&self, amount: impl Into<Option<f64>>) -> String {
        format_currency_in(
            self.locales,
            amount,
            &self.settings.currency,
            &self.settings.locale,
        )
    }

    pub fn format_compact(&self, amount: impl Into<Option<f64>>) -> String {
        format_currency_compact_in(
            self.locales,
            amount,
            &self.settings.currency,
            &self.settings.locale,
        )
    }

    pub fn format_without_symbol(&self, amount: impl Into<Option<f64>>) -> String {
        format_currency_without_symbol_in(self.locales, amount, &self.settings.locale)
    }

    /// The symbol for the configured currency
    pub fn symbol(&self) -> &str {
        currency_symbol(&self.settings.currency)
    }
}

fn finite(amount: Option<f64>) -> Option<f64> {
    match amount {
        Some(value) if value.is_finite() => Some(value),
        Some(value) => {
            tracing::debug!(%value, "non-finite amount rendered as placeholder");
            None
        }
        None => None,
    }
}

/// The locale rules able to format this pair, if any
fn supported_locale<'t>(
    table: &'t LocaleTable,
    currency_code: &str,
    locale: &str,
) -> Option<&'t NumberLocale> {
    if !is_well_formed_code(currency_code) {
        tracing::debug!(currency_code, "malformed currency code, using symbol fallback");
        return None;
    }
    let rules = table.lookup(locale);
    if rules.is_none() {
        tracing::debug!(locale, "unsupported locale, using symbol fallback");
    }
    rules
}

fn place_symbol(rules: &NumberLocale, symbol: &str, number: &str) -> String {
    let (sign, digits) = match number.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", number),
    };

    match rules.symbol_position {
        SymbolPosition::Suffix => format!("{}{} {}", sign, digits, symbol),
        // Alphabetic symbols (unknown codes echoed back) need a gap
        SymbolPosition::Prefix if symbol.chars().all(|c| c.is_ascii_alphabetic()) => {
            format!("{}{} {}", sign, symbol, digits)
        }
        SymbolPosition::Prefix => format!("{}{}{}", sign, symbol, digits),
    }
}

fn compact_number(rules: &NumberLocale, amount: f64) -> String {
    let magnitude = amount.abs();
    for &(threshold, suffix) in rules.compact_scale.steps() {
        let scaled = magnitude / threshold;
        // 999_999 becomes 1.0M rather than 1,000.0K
        if (scaled * 100.0).round() / 100.0 >= 1.0 {
            let number = rules.format_trimmed(amount / threshold, 1, 2);
            return format!("{}{}", number, suffix);
        }
    }
    rules.format_trimmed(amount, 1, 2)
}

/// Parse the longest prefix shaped like `-?digits(.digits)?`
fn leading_number(s: &str) -> Option<f64> {
    let bytes = s.as_bytes();
    let mut end = 0;
    if bytes.first() == Some(&b'-') {
        end = 1;
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut has_digits = end > int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        if frac_end > frac_start {
            has_digits = true;
            end = frac_end;
        }
    }

    if !has_digits {
        return None;
    }
    s[..end].parse().ok()
}
