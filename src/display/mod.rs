//! Display formatting for terminal output
//!
//! Turns engine results into tables for the command-line front end.

pub mod projection;

pub use projection::{format_projection, format_report, format_schedule};
