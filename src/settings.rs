//! Global settings loaded from TOML.
//!
//! - `init_custom(toml_content)` sets a custom TOML before first `settings()` call
//! - `settings()` returns `&'static Settings` (lazy-init singleton)
//! - Default values are embedded via `include_str!("default_settings.toml")`

use std::sync::OnceLock;

use serde::Deserialize;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Set custom TOML before first `settings()` call.
pub fn init_custom(toml_content: String) -> Result<(), SettingsError> {
    parse_settings_toml(&toml_content)?;
    CUSTOM_TOML
        .set(toml_content)
        .map_err(|_| SettingsError::AlreadyInitialized)
}

/// Get or initialize the global settings singleton.
pub fn settings() -> &'static Settings {
    static INSTANCE: OnceLock<Settings> = OnceLock::new();
    INSTANCE.get_or_init(|| {
        let toml_str = CUSTOM_TOML
            .get()
            .map(|s| s.as_str())
            .unwrap_or(DEFAULT_SETTINGS_TOML);
        parse_settings_toml(toml_str).expect("settings TOML must be valid")
    })
}

/// Returns the embedded default settings TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
    #[error("settings already initialized")]
    AlreadyInitialized,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub format: FormatSettings,
    pub validation: ValidationSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FormatSettings {
    pub lowercase: bool,
    pub max_value: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ValidationSettings {
    pub mode: ValidationMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationMode {
    /// Any non-empty string of known symbols.
    Permissive,
    /// Only strings the formatter would produce.
    RoundTrip,
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let s: Settings = toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    Ok(s)
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    if s.format.max_value == 0 {
        return Err(SettingsError::InvalidValue {
            field: "format.max_value".to_string(),
            reason: "must be > 0".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_default_settings() {
        let s = parse_settings_toml(DEFAULT_SETTINGS_TOML).unwrap();
        assert!(!s.format.lowercase);
        assert_eq!(s.format.max_value, 3999);
        assert_eq!(s.validation.mode, ValidationMode::Permissive);
    }

    #[test]
    fn global_settings_use_defaults() {
        // No test calls init_custom, so the global is built from the defaults
        let s = settings();
        assert_eq!(s.format.max_value, 3999);
        assert!(std::ptr::eq(s, settings()));
    }

    #[test]
    fn default_toml_is_embedded() {
        assert!(default_toml().contains("[format]"));
        assert!(default_toml().contains("[validation]"));
    }

    #[test]
    fn parse_round_trip_mode() {
        let toml = r#"
[format]
lowercase = true
max_value = 10000

[validation]
mode = "round_trip"
"#;
        let s = parse_settings_toml(toml).unwrap();
        assert!(s.format.lowercase);
        assert_eq!(s.format.max_value, 10000);
        assert_eq!(s.validation.mode, ValidationMode::RoundTrip);
    }

    #[test]
    fn error_zero_max_value() {
        let toml = r#"
[format]
lowercase = false
max_value = 0

[validation]
mode = "permissive"
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(matches!(err, SettingsError::InvalidValue { .. }));
    }

    #[test]
    fn error_unknown_mode() {
        let toml = r#"
[format]
lowercase = false
max_value = 3999

[validation]
mode = "strictest"
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn error_missing_section() {
        let err = parse_settings_toml("[format]\nlowercase = false\nmax_value = 1\n").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn error_invalid_toml() {
        let err = parse_settings_toml("not valid toml {{{").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }
}
