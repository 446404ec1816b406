//! Configuration management for the to-do screen.
//!
//! Loads configuration from environment variables with sensible defaults.
//! Unknown values for enumerated settings are rejected rather than silently
//! replaced, so a typo in `PAWDO_THEME` is reported at startup.

use crate::error::ConfigError;
use pawdo_core::environment::{ClockIds, IdGenerator, SequentialIds, SystemClock};
use std::path::PathBuf;
use std::sync::Arc;

/// Default log filter when neither `PAWDO_LOG` nor `RUST_LOG` is set
pub const DEFAULT_LOG_FILTER: &str = "pawdo=info,pawdo_runtime=info";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Colour theme
    pub theme: ThemeName,
    /// What to draw behind the list
    pub background: BackgroundSource,
    /// How item ids are generated
    pub ids: IdStrategy,
    /// Whether mouse clicks are captured
    pub mouse: bool,
    /// Logging configuration
    pub log: LogConfig,
}

/// Built-in colour themes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeName {
    /// Warm colours with a dimmed cat backdrop
    #[default]
    Cat,
    /// Terminal default colours
    Plain,
}

/// Source of the background art
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum BackgroundSource {
    /// The cat drawing shipped with the binary
    #[default]
    Builtin,
    /// No background
    None,
    /// A text file with ASCII art
    File(PathBuf),
}

/// Id generation strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdStrategy {
    /// Milliseconds since the epoch, forced strictly increasing
    #[default]
    Clock,
    /// 1, 2, 3, ...
    Sequential,
}

impl IdStrategy {
    /// Builds the generator for this strategy
    #[must_use]
    pub fn generator(self) -> Arc<dyn IdGenerator> {
        match self {
            Self::Clock => Arc::new(ClockIds::new(Arc::new(SystemClock))),
            Self::Sequential => Arc::new(SequentialIds::new()),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// `EnvFilter` directive
    pub filter: String,
    /// Log file; logging is disabled when unset because the terminal belongs
    /// to the UI
    pub file: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_LOG_FILTER.to_string(),
            file: None,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            theme: ThemeName::default(),
            background: BackgroundSource::default(),
            ids: IdStrategy::default(),
            mouse: true,
            log: LogConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if an enumerated variable holds
    /// an unknown value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if an enumerated variable holds
    /// an unknown value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let theme = match lookup("PAWDO_THEME").as_deref().map(str::trim) {
            None | Some("") => ThemeName::default(),
            Some(value) => match value.to_ascii_lowercase().as_str() {
                "cat" => ThemeName::Cat,
                "plain" => ThemeName::Plain,
                _ => return Err(invalid("PAWDO_THEME", value, "cat or plain")),
            },
        };

        let background = match lookup("PAWDO_BACKGROUND").as_deref().map(str::trim) {
            None | Some("") => BackgroundSource::default(),
            Some(value) if value.eq_ignore_ascii_case("builtin") => BackgroundSource::Builtin,
            Some(value) if value.eq_ignore_ascii_case("none") => BackgroundSource::None,
            Some(path) => BackgroundSource::File(PathBuf::from(path)),
        };

        let ids = match lookup("PAWDO_IDS").as_deref().map(str::trim) {
            None | Some("") => IdStrategy::default(),
            Some(value) => match value.to_ascii_lowercase().as_str() {
                "clock" => IdStrategy::Clock,
                "sequential" => IdStrategy::Sequential,
                _ => return Err(invalid("PAWDO_IDS", value, "clock or sequential")),
            },
        };

        let mouse = match lookup("PAWDO_MOUSE").as_deref().map(str::trim) {
            None | Some("") => true,
            Some(value) => parse_bool(value)
                .ok_or_else(|| invalid("PAWDO_MOUSE", value, "true or false"))?,
        };

        let filter = lookup("PAWDO_LOG")
            .or_else(|| lookup("RUST_LOG"))
            .filter(|f| !f.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        let file = lookup("PAWDO_LOG_FILE")
            .filter(|f| !f.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            theme,
            background,
            ids,
            mouse,
            log: LogConfig { filter, file },
        })
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn invalid(key: &'static str, value: &str, expected: &'static str) -> ConfigError {
    ConfigError::InvalidValue {
        key,
        value: value.to_string(),
        expected,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        assert_eq!(load(&[]), Ok(AppConfig::default()));
    }

    #[test]
    fn overrides_are_applied() {
        let config = load(&[
            ("PAWDO_THEME", "Plain"),
            ("PAWDO_BACKGROUND", "/tmp/dog.txt"),
            ("PAWDO_IDS", "sequential"),
            ("PAWDO_MOUSE", "off"),
            ("PAWDO_LOG", "pawdo=trace"),
            ("PAWDO_LOG_FILE", "/tmp/pawdo.log"),
        ]);

        assert_eq!(
            config,
            Ok(AppConfig {
                theme: ThemeName::Plain,
                background: BackgroundSource::File(PathBuf::from("/tmp/dog.txt")),
                ids: IdStrategy::Sequential,
                mouse: false,
                log: LogConfig {
                    filter: "pawdo=trace".to_string(),
                    file: Some(PathBuf::from("/tmp/pawdo.log")),
                },
            })
        );
    }

    #[test]
    fn background_keywords() {
        assert_eq!(
            load(&[("PAWDO_BACKGROUND", "none")]).map(|c| c.background),
            Ok(BackgroundSource::None)
        );
        assert_eq!(
            load(&[("PAWDO_BACKGROUND", "BUILTIN")]).map(|c| c.background),
            Ok(BackgroundSource::Builtin)
        );
    }

    #[test]
    fn rust_log_is_the_fallback_filter() {
        let config = load(&[("RUST_LOG", "debug")]);
        assert_eq!(config.map(|c| c.log.filter), Ok("debug".to_string()));
    }

    #[test]
    fn unknown_theme_is_rejected() {
        assert_eq!(
            load(&[("PAWDO_THEME", "neon")]),
            Err(ConfigError::InvalidValue {
                key: "PAWDO_THEME",
                value: "neon".to_string(),
                expected: "cat or plain",
            })
        );
    }

    #[test]
    fn unknown_id_strategy_and_mouse_flag_are_rejected() {
        assert!(load(&[("PAWDO_IDS", "uuid")]).is_err());
        assert!(load(&[("PAWDO_MOUSE", "maybe")]).is_err());
    }

    #[test]
    fn error_message_names_the_variable() {
        let message = load(&[("PAWDO_IDS", "uuid")])
            .err()
            .map(|e| e.to_string())
            .unwrap_or_default();
        assert_eq!(
            message,
            "invalid value \"uuid\" for PAWDO_IDS: expected clock or sequential"
        );
    }
}
