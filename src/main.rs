use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use fincalc::cli::{
    handle_date_command, handle_growth_command, handle_money_command, DateCommands,
    GrowthCommands, MoneyCommands,
};
use fincalc::config::settings::{Settings, CONFIG_ENV_VAR};
use fincalc::models::LocaleTable;

#[derive(Parser)]
#[command(
    name = "fincalc",
    version,
    about = "Currency formatting, growth projections and financial-calendar utilities",
    long_about = "fincalc formats and parses currency amounts, projects SIP and lumpsum \
                  investments, computes CAGR and percentage change, and answers \
                  financial-year and date questions."
)]
struct Cli {
    /// Settings file (JSON or YAML)
    #[arg(long, global = true, env = CONFIG_ENV_VAR)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Currency formatting and parsing
    #[command(subcommand)]
    Money(MoneyCommands),

    /// Investment growth projections
    #[command(subcommand)]
    Growth(GrowthCommands),

    /// Calendar and financial-year utilities
    #[command(subcommand)]
    Date(DateCommands),

    /// Show the effective settings and supported locales
    Config,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("FINCALC_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let settings = Settings::load_or_default(cli.config.as_deref())?;
    tracing::info!(currency = %settings.currency, locale = %settings.locale, "fincalc starting");

    match cli.command {
        Commands::Money(cmd) => handle_money_command(&settings, cmd)?,
        Commands::Growth(cmd) => handle_growth_command(&settings, cmd)?,
        Commands::Date(cmd) => handle_date_command(&settings, cmd)?,
        Commands::Config => {
            println!("fincalc Configuration");
            println!("=====================");
            match &cli.config {
                Some(path) => println!("Settings file: {}", path.display()),
                None => println!("Settings file: (none, using defaults)"),
            }
            println!("Currency:      {}", settings.currency);
            println!("Locale:        {}", settings.locale);
            println!("Date format:   {}", settings.date_format);
            println!("Compact:       {}", settings.compact);
            println!();
            let tags: Vec<&str> = LocaleTable::builtin().tags().collect();
            println!("Locales:       {}", tags.join(", "));
        }
    }

    Ok(())
}
