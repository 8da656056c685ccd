//! Number-formatting locales
//!
//! A small, read-only table describing how each supported locale writes a
//! number: digit grouping, separators, where the currency symbol goes and
//! which short-scale suffixes it uses. Callers that need other locales build
//! their own [`LocaleTable`] and pass it in; the built-in table is shared and
//! never mutated.

use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// How the integer part of a number is grouped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Grouping {
    /// Groups of three: 1,234,567
    Standard,
    /// Last three, then groups of two: 12,34,567
    Indian,
}

/// Where the currency symbol is placed relative to the number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SymbolPosition {
    /// `$1,234.56`
    Prefix,
    /// `1.234,56 €`
    Suffix,
}

/// Suffix family used for compact notation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompactScale {
    /// K, M, B, T
    Western,
    /// K, L (lakh), Cr (crore)
    Indian,
}

impl CompactScale {
    /// Thresholds and suffixes, largest first
    pub fn steps(&self) -> &'static [(f64, &'static str)] {
        match self {
            Self::Western => &[(1e12, "T"), (1e9, "B"), (1e6, "M"), (1e3, "K")],
            Self::Indian => &[(1e7, "Cr"), (1e5, "L"), (1e3, "K")],
        }
    }
}

/// Formatting rules for one locale
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumberLocale {
    /// BCP 47 style tag, e.g. `en-IN`
    pub tag: String,
    pub group_separator: String,
    pub decimal_separator: String,
    pub grouping: Grouping,
    pub symbol_position: SymbolPosition,
    pub compact_scale: CompactScale,
}

impl NumberLocale {
    /// Create a locale with the common English conventions
    pub fn english(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            group_separator: ",".into(),
            decimal_separator: ".".into(),
            grouping: Grouping::Standard,
            symbol_position: SymbolPosition::Prefix,
            compact_scale: CompactScale::Western,
        }
    }

    /// The language subtag (`en` for `en-IN`)
    pub fn language(&self) -> &str {
        self.tag.split('-').next().unwrap_or(&self.tag)
    }

    /// Format a finite number with exactly `decimals` fractional digits
    pub fn format_fixed(&self, value: f64, decimals: usize) -> String {
        self.render(&format!("{:.*}", decimals, value.abs()), value < 0.0)
    }

    /// Format a finite number with between `min` and `max` fractional digits
    pub fn format_trimmed(&self, value: f64, min: usize, max: usize) -> String {
        let mut digits = format!("{:.*}", max, value.abs());
        if let Some(dot) = digits.find('.') {
            while digits.len() - dot - 1 > min && digits.ends_with('0') {
                digits.pop();
            }
            if digits.ends_with('.') {
                digits.pop();
            }
        }
        self.render(&digits, value < 0.0)
    }

    /// Apply grouping and separators to a plain `1234.56` style string
    fn render(&self, plain: &str, negative: bool) -> String {
        let (int_part, frac_part) = match plain.split_once('.') {
            Some((i, f)) => (i, Some(f)),
            None => (plain, None),
        };

        let mut out = String::new();
        // Never render "-0.00"
        if negative && plain.chars().any(|c| c.is_ascii_digit() && c != '0') {
            out.push('-');
        }
        out.push_str(&self.group(int_part));
        if let Some(frac) = frac_part {
            out.push_str(&self.decimal_separator);
            out.push_str(frac);
        }
        out
    }

    fn group(&self, digits: &str) -> String {
        let len = digits.len();
        if len <= 3 {
            return digits.to_string();
        }

        let (head, tail) = digits.split_at(len - 3);
        let group_size = match self.grouping {
            Grouping::Standard => 3,
            Grouping::Indian => 2,
        };

        let mut groups: Vec<&str> = Vec::new();
        let mut end = head.len();
        while end > 0 {
            let start = end.saturating_sub(group_size);
            groups.push(&head[start..end]);
            end = start;
        }
        groups.reverse();
        groups.push(tail);
        groups.join(&self.group_separator)
    }
}

/// An immutable set of locales, looked up by tag
#[derive(Debug, Clone, Default)]
pub struct LocaleTable {
    entries: Vec<NumberLocale>,
}

impl LocaleTable {
    /// Create a table from explicit entries
    pub fn new(entries: Vec<NumberLocale>) -> Self {
        Self { entries }
    }

    /// The shared built-in table
    pub fn builtin() -> &'static LocaleTable {
        static BUILTIN: OnceLock<LocaleTable> = OnceLock::new();
        BUILTIN.get_or_init(|| {
            let indian = |tag: &str| NumberLocale {
                grouping: Grouping::Indian,
                compact_scale: CompactScale::Indian,
                ..NumberLocale::english(tag)
            };
            let continental = |tag: &str, group: &str| NumberLocale {
                tag: tag.into(),
                group_separator: group.into(),
                decimal_separator: ",".into(),
                grouping: Grouping::Standard,
                symbol_position: SymbolPosition::Suffix,
                compact_scale: CompactScale::Western,
            };

            LocaleTable::new(vec![
                NumberLocale::english("en-US"),
                indian("en-IN"),
                indian("hi-IN"),
                NumberLocale::english("en-GB"),
                NumberLocale::english("en-CA"),
                NumberLocale::english("en-AU"),
                continental("de-DE", "."),
                continental("fr-FR", "\u{202f}"),
                NumberLocale::english("ja-JP"),
            ])
        })
    }

    /// Find a locale by tag
    ///
    /// Matching ignores case and treats `_` as `-`. A bare language tag
    /// (`en`) resolves to the first entry for that language.
    pub fn lookup(&self, tag: &str) -> Option<&NumberLocale> {
        let wanted = tag.trim().replace('_', "-");
        if wanted.is_empty() {
            return None;
        }

        self.entries
            .iter()
            .find(|l| l.tag.eq_ignore_ascii_case(&wanted))
            .or_else(|| {
                if wanted.contains('-') {
                    return None;
                }
                self.entries
                    .iter()
                    .find(|l| l.language().eq_ignore_ascii_case(&wanted))
            })
    }

    /// Tags of every entry, in table order
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|l| l.tag.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn locale(tag: &str) -> &'static NumberLocale {
        LocaleTable::builtin().lookup(tag).unwrap()
    }

    #[test]
    fn test_standard_grouping() {
        let us = locale("en-US");
        assert_eq!(us.format_fixed(1234567.891, 2), "1,234,567.89");
        assert_eq!(us.format_fixed(999.0, 2), "999.00");
        assert_eq!(us.format_fixed(1000.0, 2), "1,000.00");
    }

    #[test]
    fn test_indian_grouping() {
        let inr = locale("en-IN");
        assert_eq!(inr.format_fixed(1234567.891, 2), "12,34,567.89");
        assert_eq!(inr.format_fixed(100000.0, 2), "1,00,000.00");
        assert_eq!(inr.format_fixed(12345.0, 2), "12,345.00");
    }

    #[test]
    fn test_continental_separators() {
        assert_eq!(locale("de-DE").format_fixed(1234.5, 2), "1.234,50");
        assert_eq!(locale("fr-FR").format_fixed(1234.5, 2), "1\u{202f}234,50");
    }

    #[test]
    fn test_negative_and_negative_zero() {
        let us = locale("en-US");
        assert_eq!(us.format_fixed(-1234.5, 2), "-1,234.50");
        assert_eq!(us.format_fixed(-0.001, 2), "0.00");
    }

    #[test]
    fn test_trimmed_digits() {
        let us = locale("en-US");
        assert_eq!(us.format_trimmed(1.5, 1, 2), "1.5");
        assert_eq!(us.format_trimmed(1.0, 1, 2), "1.0");
        assert_eq!(us.format_trimmed(1.234, 1, 2), "1.23");
        assert_eq!(us.format_trimmed(2.0, 0, 2), "2");
    }

    #[test]
    fn test_lookup_normalizes_tag() {
        let table = LocaleTable::builtin();
        assert_eq!(table.lookup("en_in").unwrap().tag, "en-IN");
        assert_eq!(table.lookup("EN-us").unwrap().tag, "en-US");
        assert_eq!(table.lookup("de").unwrap().tag, "de-DE");
        assert!(table.lookup("en-ZA").is_none());
        assert!(table.lookup("xx").is_none());
        assert!(table.lookup("").is_none());
    }

    #[test]
    fn test_custom_table() {
        let table = LocaleTable::new(vec![NumberLocale {
            group_separator: "'".into(),
            ..NumberLocale::english("de-CH")
        }]);
        let ch = table.lookup("de-CH").unwrap();
        assert_eq!(ch.format_fixed(1234567.0, 2), "1'234'567.00");
        assert!(table.lookup("en-US").is_none());
    }
}
