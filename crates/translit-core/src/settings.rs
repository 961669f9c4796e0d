//! Engine settings loaded from TOML.
//!
//! - `parse_settings_toml(text)` parses and validates a settings document
//! - `Settings::default_settings()` returns the embedded defaults
//! - Default values are embedded via `include_str!("default_settings.toml")`

use std::path::Path;

use serde::Deserialize;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

/// Returns the embedded default settings TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("cannot read {path}: {reason}")]
    Io { path: String, reason: String },
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    pub chat: ChatSettings,
    pub log: LogSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChatSettings {
    pub default_scheme: String,
    command_prefix: String,
    #[serde(default)]
    pub help_aliases: Vec<String>,
    #[serde(default)]
    pub ignored_inputs: Vec<String>,
}

impl ChatSettings {
    /// The command prefix; validation guarantees exactly one character.
    pub fn command_prefix(&self) -> char {
        self.command_prefix.chars().next().unwrap_or(':')
    }

    pub fn is_help(&self, input: &str) -> bool {
        let input = input.to_lowercase();
        self.help_aliases.iter().any(|a| a.to_lowercase() == input)
    }

    pub fn is_ignored(&self, input: &str) -> bool {
        let input = input.to_lowercase();
        self.ignored_inputs.iter().any(|a| a.to_lowercase() == input)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LogSettings {
    /// `tracing_subscriber::EnvFilter` directive; `RUST_LOG` takes precedence.
    pub filter: String,
}

impl Settings {
    /// The embedded defaults.
    pub fn default_settings() -> Self {
        parse_settings_toml(DEFAULT_SETTINGS_TOML).expect("default settings TOML must be valid")
    }

    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let content = std::fs::read_to_string(path).map_err(|e| SettingsError::Io {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        parse_settings_toml(&content)
    }
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let s: Settings = toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    Ok(s)
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    macro_rules! check_non_empty {
        ($section:ident . $field:ident) => {
            if s.$section.$field.trim().is_empty() {
                return Err(SettingsError::InvalidValue {
                    field: concat!(stringify!($section), ".", stringify!($field)).to_string(),
                    reason: "must not be empty".to_string(),
                });
            }
        };
    }

    check_non_empty!(chat.default_scheme);
    check_non_empty!(log.filter);

    let prefix = &s.chat.command_prefix;
    if prefix.chars().count() != 1 || prefix.trim().is_empty() {
        return Err(SettingsError::InvalidValue {
            field: "chat.command_prefix".to_string(),
            reason: "must be a single non-space character".to_string(),
        });
    }

    if s.chat.help_aliases.iter().any(|a| a.trim().is_empty()) {
        return Err(SettingsError::InvalidValue {
            field: "chat.help_aliases".to_string(),
            reason: "aliases must not be empty".to_string(),
        });
    }

    Ok(())
}
