//! # Menu Service Configuration
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     KITCHENPOS_DB_PATH=/var/lib/kitchenpos/kitchenpos.db               │
//! │     KITCHENPOS_PROFANITY_URL=https://www.purgomalum.com                │
//! │     KITCHENPOS_PROFANITY_TIMEOUT_SECS=5                                │
//! │     KITCHENPOS_PROFANITY_BACKEND=purgomalum                            │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     ~/.config/kitchenpos/kitchenpos.toml (Linux)                       │
//! │     ~/Library/Application Support/com.kitchenpos.kitchenpos/... (macOS)│
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # kitchenpos.toml
//! [database]
//! path = "/var/lib/kitchenpos/kitchenpos.db"
//! max_connections = 5
//!
//! [profanity]
//! backend = "purgomalum"  # purgomalum | banned_words
//! url = "https://www.purgomalum.com"
//! timeout_secs = 5
//! banned_words = []
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::profanity::PURGOMALUM_URL;

const CONFIG_FILE_NAME: &str = "kitchenpos.toml";
const DB_FILE_NAME: &str = "kitchenpos.db";

// =============================================================================
// Errors
// =============================================================================

/// Configuration failures.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

// =============================================================================
// Profanity Backend
// =============================================================================

/// Which profanity checker the service is wired with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfanityBackend {
    /// Purgomalum web service.
    #[default]
    Purgomalum,

    /// Local word list, no network.
    BannedWords,
}

impl std::fmt::Display for ProfanityBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProfanityBackend::Purgomalum => write!(f, "purgomalum"),
            ProfanityBackend::BannedWords => write!(f, "banned_words"),
        }
    }
}

impl std::str::FromStr for ProfanityBackend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "purgomalum" | "http" => Ok(ProfanityBackend::Purgomalum),
            "banned_words" | "banned-words" | "offline" => Ok(ProfanityBackend::BannedWords),
            other => Err(ConfigError::Invalid(format!(
                "Unknown profanity backend: '{}'. Valid options: purgomalum, banned_words",
                other
            ))),
        }
    }
}

// =============================================================================
// Sections
// =============================================================================

/// `[database]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseSettings {
    /// SQLite file path. Defaults to `kitchenpos.db` in the platform data dir.
    #[serde(default = "default_db_path")]
    pub path: PathBuf,

    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

fn default_db_path() -> PathBuf {
    directories::ProjectDirs::from("com", "kitchenpos", "kitchenpos")
        .map(|dirs| dirs.data_dir().join(DB_FILE_NAME))
        .unwrap_or_else(|| PathBuf::from(DB_FILE_NAME))
}

fn default_max_connections() -> u32 {
    5
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        DatabaseSettings {
            path: default_db_path(),
            max_connections: default_max_connections(),
        }
    }
}

/// `[profanity]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfanitySettings {
    #[serde(default)]
    pub backend: ProfanityBackend,

    /// Purgomalum base URL.
    #[serde(default = "default_profanity_url")]
    pub url: String,

    /// Per-request timeout for the HTTP backend.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Word list for the `banned_words` backend.
    #[serde(default)]
    pub banned_words: Vec<String>,
}

fn default_profanity_url() -> String {
    PURGOMALUM_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    5
}

impl Default for ProfanitySettings {
    fn default() -> Self {
        ProfanitySettings {
            backend: ProfanityBackend::default(),
            url: default_profanity_url(),
            timeout_secs: default_timeout_secs(),
            banned_words: Vec::new(),
        }
    }
}

impl ProfanitySettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

// =============================================================================
// Menu Configuration
// =============================================================================

/// Complete menu service configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MenuConfig {
    #[serde(default)]
    pub database: DatabaseSettings,

    #[serde(default)]
    pub profanity: ProfanitySettings,
}

impl MenuConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (kitchenpos.toml)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> ConfigResult<Self> {
        let mut config = match config_path.or_else(Self::default_config_path) {
            Some(path) if path.exists() => Self::load_from_file(&path)?,
            Some(path) => {
                debug!(?path, "Config file not found, using defaults");
                Self::default()
            }
            None => Self::default(),
        };

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Parses a TOML file. Missing keys take their defaults.
    pub fn load_from_file(path: &Path) -> ConfigResult<Self> {
        info!(?path, "Loading menu config from file");
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.profanity.timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "profanity.timeout_secs must be greater than 0".into(),
            ));
        }

        if self.profanity.backend == ProfanityBackend::Purgomalum
            && self.profanity.url.trim().is_empty()
        {
            return Err(ConfigError::Invalid("profanity.url must not be empty".into()));
        }

        if self.database.path.as_os_str().is_empty() {
            return Err(ConfigError::Invalid("database.path must not be empty".into()));
        }

        Ok(())
    }

    /// Applies environment variable overrides.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides_from(|key| std::env::var(key).ok());
    }

    /// Applies overrides from any key lookup; `apply_env_overrides` passes
    /// the process environment.
    pub fn apply_overrides_from<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup("KITCHENPOS_DB_PATH") {
            debug!(path = %path, "Overriding database path from environment");
            self.database.path = PathBuf::from(path);
        }

        if let Some(url) = lookup("KITCHENPOS_PROFANITY_URL") {
            debug!(url = %url, "Overriding profanity URL from environment");
            self.profanity.url = url;
        }

        if let Some(secs) = lookup("KITCHENPOS_PROFANITY_TIMEOUT_SECS") {
            match secs.parse::<u64>() {
                Ok(s) => self.profanity.timeout_secs = s,
                Err(_) => warn!(value = %secs, "Ignoring non-numeric profanity timeout"),
            }
        }

        if let Some(backend) = lookup("KITCHENPOS_PROFANITY_BACKEND") {
            match backend.parse() {
                Ok(parsed) => {
                    debug!(backend = %backend, "Overriding profanity backend from environment");
                    self.profanity.backend = parsed;
                }
                Err(e) => warn!(error = %e, "Ignoring profanity backend from environment"),
            }
        }
    }

    /// Returns the default config file path.
    pub fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "kitchenpos", "kitchenpos")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_config() {
        let config = MenuConfig::default();

        assert_eq!(config.profanity.backend, ProfanityBackend::Purgomalum);
        assert_eq!(config.profanity.url, "https://www.purgomalum.com");
        assert_eq!(config.profanity.timeout(), Duration::from_secs(5));
        assert!(config.database.path.ends_with("kitchenpos.db"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_backend_parsing() {
        assert_eq!("purgomalum".parse::<ProfanityBackend>().unwrap(), ProfanityBackend::Purgomalum);
        assert_eq!("BANNED_WORDS".parse::<ProfanityBackend>().unwrap(), ProfanityBackend::BannedWords);
        assert_eq!("offline".parse::<ProfanityBackend>().unwrap(), ProfanityBackend::BannedWords);
        assert!("regex".parse::<ProfanityBackend>().is_err());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: MenuConfig = toml::from_str(
            r#"
            [profanity]
            backend = "banned_words"
            banned_words = ["darn"]
            "#,
        )
        .unwrap();

        assert_eq!(config.profanity.backend, ProfanityBackend::BannedWords);
        assert_eq!(config.profanity.banned_words, vec!["darn"]);
        assert_eq!(config.profanity.timeout_secs, 5);
        assert_eq!(config.database.max_connections, 5);
    }

    #[test]
    fn test_overrides_win_over_file_values() {
        let mut config = MenuConfig::default();
        let env: HashMap<&str, &str> = [
            ("KITCHENPOS_DB_PATH", "/tmp/menu.db"),
            ("KITCHENPOS_PROFANITY_TIMEOUT_SECS", "2"),
            ("KITCHENPOS_PROFANITY_BACKEND", "banned_words"),
        ]
        .into_iter()
        .collect();

        config.apply_overrides_from(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.database.path, PathBuf::from("/tmp/menu.db"));
        assert_eq!(config.profanity.timeout_secs, 2);
        assert_eq!(config.profanity.backend, ProfanityBackend::BannedWords);
    }

    #[test]
    fn test_invalid_override_values_are_ignored() {
        let mut config = MenuConfig::default();

        config.apply_overrides_from(|key| match key {
            "KITCHENPOS_PROFANITY_TIMEOUT_SECS" => Some("soon".to_string()),
            "KITCHENPOS_PROFANITY_BACKEND" => Some("regex".to_string()),
            _ => None,
        });

        assert_eq!(config.profanity.timeout_secs, 5);
        assert_eq!(config.profanity.backend, ProfanityBackend::Purgomalum);
    }

    #[test]
    fn test_validation() {
        let mut config = MenuConfig::default();
        config.profanity.timeout_secs = 0;
        assert!(config.validate().is_err());

        config.profanity.timeout_secs = 5;
        config.profanity.url = " ".to_string();
        assert!(config.validate().is_err());

        config.profanity.backend = ProfanityBackend::BannedWords;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_missing_explicit_path_uses_defaults() {
        let config = MenuConfig::load(Some(PathBuf::from("/nonexistent/kitchenpos.toml")));
        assert!(config.is_ok());
    }
}
