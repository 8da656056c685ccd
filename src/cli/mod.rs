//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the calculation layer.

pub mod date;
pub mod growth;
pub mod money;

pub use date::{handle_date_command, DateCommands};
pub use growth::{handle_growth_command, GrowthCommands};
pub use money::{handle_money_command, MoneyCommands};
