use crate::core::path::{config_file, ensure_dir};
use crate::core::{RosterError, RosterResult};
use crate::di::ConfigProvider;
use crate::fetch::Convention;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Environment variable overriding `users_url`
pub const USERS_URL_ENV: &str = "ROSTER_USERS_URL";

/// Environment variable overriding `source` (`network` or `fixture`)
pub const SOURCE_ENV: &str = "ROSTER_SOURCE";

/// Where user records come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// Fetch over HTTP from `users_url`
    #[default]
    Network,
    /// Read a local fixture and ignore `users_url`
    Fixture,
}

impl std::str::FromStr for SourceKind {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "network" => Ok(SourceKind::Network),
            "fixture" => Ok(SourceKind::Fixture),
            other => Err(RosterError::Config(format!(
                "Unknown source '{}' (expected 'network' or 'fixture')",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Users endpoint URL
    #[serde(default = "default_users_url")]
    pub users_url: String,

    /// Where user records come from
    /// - "network": fetch over HTTP (default)
    /// - "fixture": read a local fixture file
    #[serde(default)]
    pub source: SourceKind,

    /// Fixture file used when `source` is "fixture"
    /// The bundled copy is served when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fixture_path: Option<String>,

    /// Calling convention used by `roster list`
    /// - "callback", "async" or "stream" (default)
    #[serde(default)]
    pub convention: Convention,

    /// User-Agent header sent with network requests
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_users_url() -> String {
    "https://jsonplaceholder.typicode.com/users".to_string()
}

fn default_user_agent() -> String {
    format!("roster/{}", env!("CARGO_PKG_VERSION"))
}

impl Default for Config {
    fn default() -> Self {
        Self {
            users_url: default_users_url(),
            source: SourceKind::default(),
            fixture_path: None,
            convention: Convention::default(),
            user_agent: default_user_agent(),
        }
    }
}

impl Config {
    /// Load config from platform-specific config directory, creating default if it doesn't exist
    ///
    /// Config locations:
    /// - Windows: %APPDATA%\roster\config.yaml
    /// - Linux: ~/.config/roster/config.yaml
    /// - macOS: ~/Library/Application Support/roster/config.yaml
    ///
    /// `ROSTER_USERS_URL` and `ROSTER_SOURCE` override the file.
    pub fn load() -> RosterResult<Self> {
        let config_path = config_file()?;

        let mut config = if config_path.exists() {
            Self::load_from(&config_path)?
        } else {
            // Create default config
            let config = Self::default();
            config.save_to(&config_path)?;
            config
        };

        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Load config from an explicit path
    pub fn load_from(path: &Path) -> RosterResult<Self> {
        let content = fs::read_to_string(path)?;
        serde_yaml::from_str(&content)
            .map_err(|e| RosterError::Config(format!("Failed to parse config: {}", e)))
    }

    /// Save config to an explicit path, creating its directory
    pub fn save_to(&self, path: &Path) -> RosterResult<()> {
        let config_dir = path
            .parent()
            .ok_or_else(|| RosterError::Path("Invalid config path".to_string()))?;

        // Ensure config directory exists
        ensure_dir(config_dir)?;

        let content = serde_yaml::to_string(self)
            .map_err(|e| RosterError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(path, content)?;
        Ok(())
    }

    /// Apply `ROSTER_USERS_URL` and `ROSTER_SOURCE` if set
    pub fn apply_env_overrides(&mut self) -> RosterResult<()> {
        if let Ok(url) = std::env::var(USERS_URL_ENV) {
            if !url.trim().is_empty() {
                self.users_url = url;
            }
        }
        if let Ok(source) = std::env::var(SOURCE_ENV) {
            self.source = source.parse()?;
        }
        Ok(())
    }
}

// Implement ConfigProvider trait
impl ConfigProvider for Config {
    fn users_url(&self) -> &str {
        &self.users_url
    }

    fn source(&self) -> SourceKind {
        self.source
    }

    fn fixture_path(&self) -> Option<&Path> {
        self.fixture_path.as_deref().map(Path::new)
    }

    fn convention(&self) -> Convention {
        self.convention
    }

    fn user_agent(&self) -> &str {
        &self.user_agent
    }
}
