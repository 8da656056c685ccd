//! User settings for fincalc
//!
//! Display preferences: which currency and locale amounts are formatted in,
//! how dates are laid out, and whether amounts use compact notation. Settings
//! are read from a JSON or YAML file and never written back.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{FincalcError, FincalcResult};
use crate::models::DateFormat;

/// Environment variable naming the settings file
pub const CONFIG_ENV_VAR: &str = "FINCALC_CONFIG";

/// User settings for fincalc
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Currency code used when none is given
    #[serde(default = "default_currency")]
    pub currency: String,

    /// Locale tag used for number formatting
    #[serde(default = "default_locale")]
    pub locale: String,

    /// Date layout
    #[serde(default)]
    pub date_format: DateFormat,

    /// Render amounts with short-scale suffixes
    #[serde(default)]
    pub compact: bool,
}

fn default_currency() -> String {
    "INR".to_string()
}

fn default_locale() -> String {
    "en-IN".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currency: default_currency(),
            locale: default_locale(),
            date_format: DateFormat::default(),
            compact: false,
        }
    }
}

impl Settings {
    /// Load settings from a file, choosing the parser by extension
    ///
    /// `.yaml` and `.yml` files are read as YAML, everything else as JSON.
    pub fn load(path: &Path) -> FincalcResult<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| FincalcError::Io(format!("Failed to read settings file: {}", e)))?;

        let settings = if is_yaml(path) {
            Self::from_yaml(&contents)?
        } else {
            Self::from_json(&contents)?
        };

        tracing::debug!(path = %path.display(), ?settings, "loaded settings");
        Ok(settings)
    }

    /// Load settings from `path` if given and present, or use the defaults
    ///
    /// A named file that does not exist is reported at `warn` level so a
    /// mistyped `--config` or `FINCALC_CONFIG` is visible.
    pub fn load_or_default(path: Option<&Path>) -> FincalcResult<Self> {
        match path {
            Some(p) if p.exists() => Self::load(p),
            Some(p) => {
                tracing::warn!(path = %p.display(), "settings file not found, using defaults");
                Ok(Self::default())
            }
            None => Ok(Self::default()),
        }
    }

    pub fn from_json(contents: &str) -> FincalcResult<Self> {
        serde_json::from_str(contents)
            .map_err(|e| FincalcError::Config(format!("Failed to parse settings file: {}", e)))
    }

    pub fn from_yaml(contents: &str) -> FincalcResult<Self> {
        serde_yaml::from_str(contents)
            .map_err(|e| FincalcError::Config(format!("Failed to parse settings file: {}", e)))
    }
}

fn is_yaml(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.currency, "INR");
        assert_eq!(settings.locale, "en-IN");
        assert_eq!(settings.date_format, DateFormat::DayMonthYear);
        assert!(!settings.compact);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings = Settings::from_json(r#"{"currency": "USD"}"#).unwrap();
        assert_eq!(settings.currency, "USD");
        assert_eq!(settings.locale, "en-IN");
    }

    #[test]
    fn test_load_json_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("fincalc.json");
        let json = r#"{
            "currency": "EUR",
            "locale": "de-DE",
            "date_format": "yyyy-mm-dd",
            "compact": true
        }"#;
        std::fs::write(&path, json).unwrap();

        let settings = Settings::load(&path).unwrap();
        assert_eq!(settings.currency, "EUR");
        assert_eq!(settings.locale, "de-DE");
        assert_eq!(settings.date_format, DateFormat::Iso);
        assert!(settings.compact);
    }

    #[test]
    fn test_load_yaml_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("fincalc.yml");
        let yaml = "currency: GBP\nlocale: en-GB\ndate_format: dd MMM yyyy\n";
        std::fs::write(&path, yaml).unwrap();

        let settings = Settings::load(&path).unwrap();
        assert_eq!(settings.currency, "GBP");
        assert_eq!(settings.date_format, DateFormat::DayMonthNameYear);
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("absent.json");
        let settings = Settings::load_or_default(Some(&path)).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(Settings::load_or_default(None).unwrap(), Settings::default());
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("bad.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = Settings::load(&path).unwrap_err();
        assert!(matches!(err, FincalcError::Config(_)));
    }
}
