//! Currency codes and their display symbols
//!
//! A monetary amount carries no currency of its own; the code is a separate
//! formatting parameter. Only a small fixed set of codes is known. Anything
//! else is echoed back as its own symbol.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Symbol used when a caller passes a blank currency code
pub const GENERIC_CURRENCY_SIGN: &str = "¤";

/// A currency with a known display symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CurrencyCode {
    Inr,
    Usd,
    Eur,
    Gbp,
    Jpy,
    Cad,
    Aud,
}

impl CurrencyCode {
    /// All known currencies, in table order
    pub const ALL: [CurrencyCode; 7] = [
        Self::Inr,
        Self::Usd,
        Self::Eur,
        Self::Gbp,
        Self::Jpy,
        Self::Cad,
        Self::Aud,
    ];

    /// The ISO-style three letter code
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Inr => "INR",
            Self::Usd => "USD",
            Self::Eur => "EUR",
            Self::Gbp => "GBP",
            Self::Jpy => "JPY",
            Self::Cad => "CAD",
            Self::Aud => "AUD",
        }
    }

    /// The display symbol
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Inr => "₹",
            Self::Usd => "$",
            Self::Eur => "€",
            Self::Gbp => "£",
            Self::Jpy => "¥",
            Self::Cad => "C$",
            Self::Aud => "A$",
        }
    }

    /// Look up a code without failing, ignoring case and surrounding whitespace
    pub fn lookup(code: &str) -> Option<Self> {
        let code = code.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.code().eq_ignore_ascii_case(code))
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for CurrencyCode {
    type Err = CurrencyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::lookup(s).ok_or_else(|| CurrencyParseError::Unknown(s.trim().to_string()))
    }
}

/// Get the display symbol for a currency code
///
/// Unknown codes are returned unchanged. A blank code yields the generic
/// currency sign, so the result is never empty.
pub fn currency_symbol(code: &str) -> &str {
    match CurrencyCode::lookup(code) {
        Some(known) => known.symbol(),
        None if code.trim().is_empty() => GENERIC_CURRENCY_SIGN,
        None => code,
    }
}

/// Whether a code has the shape of an ISO 4217 code (three ASCII letters)
pub fn is_well_formed_code(code: &str) -> bool {
    let code = code.trim();
    code.len() == 3 && code.chars().all(|c| c.is_ascii_alphabetic())
}

/// Error type for strict currency code parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CurrencyParseError {
    Unknown(String),
}

impl fmt::Display for CurrencyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CurrencyParseError::Unknown(s) => write!(f, "Unknown currency code: {}", s),
        }
    }
}

impl std::error::Error for CurrencyParseError {}
