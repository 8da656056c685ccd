//! fincalc - financial quantity engine
//!
//! Deterministic routines that turn monetary magnitudes into display strings
//! and back, project investment growth (SIP, lumpsum, CAGR, percentage
//! change), and express those projections against real dates (financial
//! years, date arithmetic, relative-time labels).
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `models`: Value types (currency codes, locales, projections, financial years)
//! - `services`: The stateless calculation layer
//! - `config`: Read-only display settings
//! - `error`: Custom error types for the ambient layers
//! - `export`: CSV, JSON and YAML report writers
//! - `display`: Terminal table formatting
//! - `cli`: Command handlers for the `fincalc` binary
//!
//! # Example
//!
//! ```
//! use fincalc::services::{format_currency, sip_returns};
//!
//! let projection = sip_returns(5000.0, 10.0, 12.0);
//! assert_eq!(projection.total_investment, 600000.0);
//! assert_eq!(format_currency(projection.future_value, "INR", "en-IN"), "₹11,61,695.00");
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod services;

pub use error::{FincalcError, FincalcResult};
