//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::dashboard::DashboardSettings;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub dashboard: DashboardSettings,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(&content).map_err(|error| ConfigError::Parse {
            path: path.to_path_buf(),
            error,
        })
    }

    fn parse(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    ///
    /// Nothing is logged here: the caller reports `source` and `errors`
    /// once its subscriber is installed.
    pub fn load_default() -> LoadedConfig {
        let config_paths: Vec<PathBuf> = [
            dirs::config_dir().map(|p| p.join("flowboard").join("config.toml")),
            Some(PathBuf::from("/etc/flowboard/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ]
        .into_iter()
        .flatten()
        .collect();

        Self::load_first(&config_paths)
    }

    /// Load the first existing path that parses, collecting the failures
    /// of the ones before it
    pub fn load_first(paths: &[PathBuf]) -> LoadedConfig {
        let mut errors = Vec::new();

        for path in paths.iter().filter(|p| p.exists()) {
            match Self::load_with_env(path) {
                Ok(config) => {
                    return LoadedConfig {
                        config,
                        source: Some(path.clone()),
                        errors,
                    }
                }
                Err(e) => errors.push(e),
            }
        }

        LoadedConfig {
            config: Self::from_env(),
            source: None,
            errors,
        }
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        // Dashboard overrides
        if let Some(mode) = var("FLOWBOARD_DEFAULT_MODE") {
            match mode.parse() {
                Ok(mode) => self.dashboard.default_mode = mode,
                Err(e) => tracing::warn!("Ignoring FLOWBOARD_DEFAULT_MODE: {}", e),
            }
        }
        if let Some(delay) = var("FLOWBOARD_SEARCH_HIDE_DELAY_MS") {
            if let Ok(ms) = delay.parse() {
                self.dashboard.search_hide_delay_ms = ms;
            }
        }
        if let Some(chars) = var("FLOWBOARD_SEARCH_MIN_CHARS") {
            if let Ok(n) = chars.parse() {
                self.dashboard.search_min_chars = n;
            }
        }
        if let Some(start) = var("FLOWBOARD_DATE_START") {
            self.dashboard.date_start = start;
        }
        if let Some(end) = var("FLOWBOARD_DATE_END") {
            self.dashboard.date_end = end;
        }

        // Logging overrides
        if let Some(level) = var("FLOWBOARD_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = var("FLOWBOARD_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Result of searching the default config locations
#[derive(Debug)]
pub struct LoadedConfig {
    pub config: Config,
    /// File the config came from; `None` means defaults plus environment
    pub source: Option<PathBuf>,
    /// Files that exist but could not be read or parsed
    pub errors: Vec<ConfigError>,
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Flowboard Configuration
#
# Environment variables override these settings:
# - FLOWBOARD_DEFAULT_MODE
# - FLOWBOARD_SEARCH_HIDE_DELAY_MS
# - FLOWBOARD_SEARCH_MIN_CHARS
# - FLOWBOARD_DATE_START
# - FLOWBOARD_DATE_END
# - FLOWBOARD_LOG_LEVEL
# - FLOWBOARD_LOG_FORMAT

[dashboard]
# Tab selected at load: individual or group
default_mode = "individual"

# Delay between leaving the patient search box and hiding its results (ms)
search_hide_delay_ms = 200

# Characters typed before the patient list is filtered
search_min_chars = 3

# Initial chart period (YYYY-MM-DD)
date_start = "2024-12-01"
date_end = "2024-12-15"

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::ViewMode;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_default_config_round_trips() {
        let config = Config::parse(&generate_default_config()).unwrap();
        assert_eq!(config.dashboard, DashboardSettings::default());
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[dashboard]\ndefault_mode = \"group\"").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.dashboard.default_mode, ViewMode::Group);
        assert_eq!(config.dashboard.search_hide_delay_ms, 200);
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_load_errors() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.toml");
        assert!(matches!(Config::load(&missing), Err(ConfigError::Io { .. })));

        let bad = dir.path().join("bad.toml");
        std::fs::write(&bad, "[dashboard\nnope").unwrap();
        assert!(matches!(Config::load(&bad), Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_broken_file_in_search_path_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let bad = dir.path().join("bad.toml");
        std::fs::write(&bad, "[dashboard\nnope").unwrap();
        let good = dir.path().join("good.toml");
        std::fs::write(&good, "[dashboard]\nsearch_min_chars = 5\n").unwrap();
        let missing = dir.path().join("missing.toml");

        let loaded = Config::load_first(&[missing.clone(), bad.clone(), good.clone()]);
        assert_eq!(loaded.source.as_deref(), Some(good.as_path()));
        assert_eq!(loaded.config.dashboard.search_min_chars, 5);
        assert_eq!(loaded.errors.len(), 1);
        assert!(matches!(&loaded.errors[0], ConfigError::Parse { path, .. } if path == &bad));

        let loaded = Config::load_first(&[bad, missing]);
        assert!(loaded.source.is_none());
        assert_eq!(loaded.errors.len(), 1);
        assert_eq!(loaded.config.dashboard.search_hide_delay_ms, 200);
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [
            ("FLOWBOARD_DEFAULT_MODE", "grupal"),
            ("FLOWBOARD_SEARCH_HIDE_DELAY_MS", "350"),
            ("FLOWBOARD_SEARCH_MIN_CHARS", "not-a-number"),
            ("FLOWBOARD_LOG_FORMAT", "json"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config.apply_overrides(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.dashboard.default_mode, ViewMode::Group);
        assert_eq!(config.dashboard.search_hide_delay_ms, 350);
        assert_eq!(config.dashboard.search_min_chars, 3);
        assert_eq!(config.logging.format, "json");
        assert_eq!(config.logging.level, "info");
    }
}
