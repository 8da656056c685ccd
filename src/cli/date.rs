//! Date CLI commands
//!
//! Date formatting, financial years, ages, relative times and arithmetic.

use chrono::{NaiveDate, NaiveDateTime};
use clap::Subcommand;

use crate::config::settings::Settings;
use crate::error::{FincalcError, FincalcResult};
use crate::models::FinancialYear;
use crate::services::calendar::{self, parse_date_time};

/// Date subcommands
#[derive(Subcommand)]
pub enum DateCommands {
    /// Format a date
    Format {
        /// Date (YYYY-MM-DD, DD/MM/YYYY or RFC 3339)
        date: String,
        /// Layout: "dd/mm/yyyy", "mm/dd/yyyy", "yyyy-mm-dd" or "dd MMM yyyy"
        #[arg(short, long)]
        format: Option<String>,
        /// Include the time of day (dd/mm/yyyy HH:MM)
        #[arg(short, long, conflicts_with = "format")]
        time: bool,
    },

    /// Show the financial year containing a date (defaults to today)
    Fy {
        date: Option<String>,
    },

    /// Age in whole years for a birth date
    Age {
        birth_date: String,
    },

    /// How long ago a date or time was
    Ago {
        date: String,
    },

    /// Shift a date by days and/or months
    Add {
        date: String,
        #[arg(short, long, default_value = "0", allow_negative_numbers = true)]
        days: i64,
        #[arg(short, long, default_value = "0", allow_negative_numbers = true)]
        months: i32,
    },

    /// Check whether a date lies within an inclusive range
    Range {
        date: String,
        start: String,
        end: String,
    },
}

/// Handle a date command
pub fn handle_date_command(settings: &Settings, cmd: DateCommands) -> FincalcResult<()> {
    match cmd {
        DateCommands::Format { date, format, time } => {
            let dt = parse_input(&date)?;
            if time {
                println!("{}", calendar::format_date_time(dt));
            } else {
                let layout = format.unwrap_or_else(|| settings.date_format.to_string());
                println!("{}", calendar::format_date(dt, &layout));
            }
        }

        DateCommands::Fy { date } => {
            let fy = match date {
                Some(d) => FinancialYear::for_date(parse_day(&d)?),
                None => FinancialYear::current(),
            };
            println!("{}", fy);
        }

        DateCommands::Age { birth_date } => {
            println!("{}", calendar::age(parse_day(&birth_date)?));
        }

        DateCommands::Ago { date } => {
            let dt = parse_input(&date)?;
            println!("{}", calendar::relative_time(dt));
        }

        DateCommands::Add { date, days, months } => {
            let shifted = calendar::add_months(parse_day(&date)?, months)
                .and_then(|d| calendar::add_days(d, days));
            println!("{}", calendar::format_date_as(shifted, settings.date_format));
        }

        DateCommands::Range { date, start, end } => {
            let (date, start, end) = (parse_day(&date)?, parse_day(&start)?, parse_day(&end)?);
            println!("{}", calendar::is_date_in_range(date, start, end));
        }
    }

    Ok(())
}

fn parse_input(input: &str) -> FincalcResult<NaiveDateTime> {
    parse_date_time(input).ok_or_else(|| FincalcError::invalid_date(input))
}

fn parse_day(input: &str) -> FincalcResult<NaiveDate> {
    parse_input(input).map(|dt| dt.date())
}
