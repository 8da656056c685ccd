//! Money CLI commands
//!
//! Formatting, parsing and comparing amounts.

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::error::FincalcResult;
use crate::models::currency_symbol;
use crate::services::{currency, growth};

/// Money subcommands
#[derive(Subcommand)]
pub enum MoneyCommands {
    /// Format an amount as a currency string
    Format {
        /// Amount to format
        #[arg(allow_negative_numbers = true)]
        amount: f64,
        /// Currency code (defaults to the configured currency)
        #[arg(short, long)]
        currency: Option<String>,
        /// Locale tag, e.g. "en-IN" (defaults to the configured locale)
        #[arg(short, long)]
        locale: Option<String>,
        /// Use short-scale suffixes (K, M, L, Cr)
        #[arg(long)]
        compact: bool,
        /// Omit the currency symbol
        #[arg(long, conflicts_with = "compact")]
        no_symbol: bool,
    },

    /// Parse a display string back into a number
    Parse {
        /// Text such as "₹12,34,567.89"
        #[arg(allow_hyphen_values = true)]
        text: String,
    },

    /// Percentage change between two values
    Change {
        #[arg(allow_negative_numbers = true)]
        old: f64,
        #[arg(allow_negative_numbers = true)]
        new: f64,
    },

    /// Show the symbol for a currency code
    Symbol {
        /// Currency code, e.g. "EUR"
        code: String,
    },
}

/// Handle a money command
pub fn handle_money_command(settings: &Settings, cmd: MoneyCommands) -> FincalcResult<()> {
    match cmd {
        MoneyCommands::Format {
            amount,
            currency: code,
            locale,
            compact,
            no_symbol,
        } => {
            let code = code.as_deref().unwrap_or(&settings.currency);
            let locale = locale.as_deref().unwrap_or(&settings.locale);

            let text = if no_symbol {
                currency::format_currency_without_symbol(amount, locale)
            } else if compact || settings.compact {
                currency::format_currency_compact(amount, code, locale)
            } else {
                currency::format_currency(amount, code, locale)
            };
            println!("{}", text);
        }

        MoneyCommands::Parse { text } => {
            println!("{}", currency::parse_currency(&text));
        }

        MoneyCommands::Change { old, new } => {
            println!("{:.2}%", growth::percentage_change(old, new));
        }

        MoneyCommands::Symbol { code } => {
            println!("{}", currency_symbol(&code));
        }
    }

    Ok(())
}
