//! Error types for fincalc
//!
//! The calculation engine itself never fails: every edge case resolves to a
//! placeholder or a safe default. Errors only arise in the layers around it:
//! loading settings, parsing command-line input and writing exports.

use thiserror::Error;

/// The main error type for fincalc operations
#[derive(Error, Debug)]
pub enum FincalcError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// YAML serialization/deserialization errors
    #[error("YAML error: {0}")]
    Yaml(String),

    /// Invalid user input
    #[error("Validation error: {0}")]
    Validation(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl FincalcError {
    /// Create a validation error for an input that could not be read as a date
    pub fn invalid_date(input: impl AsRef<str>) -> Self {
        Self::Validation(format!("Invalid date: {}", input.as_ref()))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for FincalcError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for FincalcError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<serde_yaml::Error> for FincalcError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Yaml(err.to_string())
    }
}

impl From<csv::Error> for FincalcError {
    fn from(err: csv::Error) -> Self {
        Self::Export(err.to_string())
    }
}

/// Result type alias for fincalc operations
pub type FincalcResult<T> = Result<T, FincalcError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FincalcError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_invalid_date() {
        let err = FincalcError::invalid_date("2024-13-45");
        assert_eq!(
            err.to_string(),
            "Validation error: Invalid date: 2024-13-45"
        );
        assert!(err.is_validation());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: FincalcError = io_err.into();
        assert!(matches!(err, FincalcError::Io(_)));
    }

    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: FincalcError = json_err.into();
        assert!(matches!(err, FincalcError::Json(_)));
    }
}
