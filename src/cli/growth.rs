//! Growth CLI commands
//!
//! SIP and lumpsum projections, CAGR and goal planning.

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::format_report;
use crate::error::FincalcResult;
use crate::export::{ExportFormat, ProjectionReport};
use crate::services::{growth, CurrencyFormatter};

/// Growth subcommands
#[derive(Subcommand)]
pub enum GrowthCommands {
    /// Project a monthly SIP
    Sip {
        /// Monthly instalment
        monthly: f64,
        /// Duration in years
        years: f64,
        /// Expected annual return in percent
        #[arg(allow_negative_numbers = true)]
        rate: f64,
        /// Show the year-by-year schedule
        #[arg(short, long)]
        schedule: bool,
        /// Write the report to stdout as csv, json or yaml
        #[arg(short, long)]
        export: Option<ExportFormat>,
    },

    /// Project a one-time investment
    Lumpsum {
        /// Amount invested up front
        principal: f64,
        /// Duration in years
        years: f64,
        /// Expected annual return in percent
        #[arg(allow_negative_numbers = true)]
        rate: f64,
        /// Show the year-by-year schedule
        #[arg(short, long)]
        schedule: bool,
        /// Write the report to stdout as csv, json or yaml
        #[arg(short, long)]
        export: Option<ExportFormat>,
    },

    /// Compound annual growth rate between two values
    Cagr {
        /// Value at the start
        begin: f64,
        /// Value at the end
        #[arg(allow_negative_numbers = true)]
        end: f64,
        /// Years between them
        years: f64,
    },

    /// Monthly SIP needed to reach a target amount
    Goal {
        /// Amount to reach
        target: f64,
        /// Duration in years
        years: f64,
        /// Expected annual return in percent
        #[arg(allow_negative_numbers = true)]
        rate: f64,
    },
}

/// Handle a growth command
pub fn handle_growth_command(settings: &Settings, cmd: GrowthCommands) -> FincalcResult<()> {
    let formatter = CurrencyFormatter::new(settings);

    match cmd {
        GrowthCommands::Sip {
            monthly,
            years,
            rate,
            schedule,
            export,
        } => {
            let report = ProjectionReport::sip(monthly, years, rate);
            emit_report(&report, &formatter, schedule, export)?;
        }

        GrowthCommands::Lumpsum {
            principal,
            years,
            rate,
            schedule,
            export,
        } => {
            let report = ProjectionReport::lumpsum(principal, years, rate);
            emit_report(&report, &formatter, schedule, export)?;
        }

        GrowthCommands::Cagr { begin, end, years } => {
            println!("{:.2}%", growth::cagr(begin, end, years));
        }

        GrowthCommands::Goal {
            target,
            years,
            rate,
        } => {
            let monthly = growth::required_monthly_sip(target, years, rate);
            println!(
                "Invest {} a month for {} years to reach {}",
                formatter.format(monthly),
                years,
                formatter.format(target)
            );
        }
    }

    Ok(())
}

fn emit_report(
    report: &ProjectionReport,
    formatter: &CurrencyFormatter,
    with_schedule: bool,
    export: Option<ExportFormat>,
) -> FincalcResult<()> {
    match export {
        Some(format) => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            format.write(report, &mut handle)
        }
        None => {
            print!("{}", format_report(report, formatter, with_schedule));
            Ok(())
        }
    }
}
