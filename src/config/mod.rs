//! Configuration module for fincalc
//!
//! Read-only display settings loaded from a JSON or YAML file.

pub mod settings;

pub use settings::Settings;
