//! Configuration management
//!
//! Settings are read from a TOML file, `~/.config/polls/config.toml` unless a
//! path is given. A missing file means defaults; a malformed one is an error.
//!
//! ```toml
//! [server]
//! host = "127.0.0.1"
//! port = 8000
//! workers = 4
//!
//! [storage]
//! backend = "sqlite"
//! database = "/var/lib/polls/polls.db"
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::paths;
use crate::storage::Backend;

/// Errors raised while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file exists but could not be read
    #[error("failed to read {path}: {source}")]
    Read {
        /// File that failed
        path: PathBuf,
        /// Underlying error
        source: io::Error,
    },

    /// The file is not valid TOML for this schema
    #[error("invalid config {path}: {source}")]
    Parse {
        /// File that failed
        path: PathBuf,
        /// Underlying error
        source: toml::de::Error,
    },

    /// A setting has an unusable value
    #[error("invalid setting {key}: {message}")]
    Invalid {
        /// Dotted setting name
        key: &'static str,
        /// What is wrong with it
        message: String,
    },
}

/// Top-level polls configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PollsConfig {
    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,
    /// Database settings
    #[serde(default)]
    pub storage: StorageConfig,
}

/// HTTP server settings
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Interface to bind
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to bind
    #[serde(default = "default_port")]
    pub port: u16,
    /// Number of request worker threads
    #[serde(default = "default_workers")]
    pub workers: usize,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

const fn default_port() -> u16 {
    8000
}

const fn default_workers() -> usize {
    4
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: default_workers(),
        }
    }
}

impl ServerConfig {
    /// `host:port` to bind
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Database settings
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Storage backend: "sqlite" or "memory"
    #[serde(default = "default_backend")]
    pub backend: String,
    /// Database file used by the sqlite backend
    #[serde(default = "paths::default_database")]
    pub database: PathBuf,
}

fn default_backend() -> String {
    Backend::default().to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: default_backend(),
            database: paths::default_database(),
        }
    }
}

impl StorageConfig {
    /// The parsed backend
    pub fn backend(&self) -> Result<Backend, ConfigError> {
        self.backend.parse().map_err(|message| ConfigError::Invalid {
            key: "storage.backend",
            message,
        })
    }
}

impl PollsConfig {
    /// Get the default config file path
    #[must_use]
    pub fn config_path() -> PathBuf {
        paths::global_config()
    }

    /// Load config from `path`, or defaults if the file does not exist
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse config from TOML text
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Reject values the server cannot start with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.workers == 0 {
            return Err(ConfigError::Invalid {
                key: "server.workers",
                message: "must be at least 1".to_string(),
            });
        }
        if self.server.host.trim().is_empty() {
            return Err(ConfigError::Invalid {
                key: "server.host",
                message: "must not be empty".to_string(),
            });
        }
        self.storage.backend()?;
        Ok(())
    }
}
