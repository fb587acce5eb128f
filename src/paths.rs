//! Centralized path definitions for polls
//!
//! ## Storage Layout
//!
//! ```text
//! ~/.config/polls/
//! └── config.toml               # Server and storage settings
//!
//! ~/.local/share/polls/
//! └── polls.db                  # SQLite database (default location)
//! ```
//!
//! Both locations follow the platform conventions reported by `dirs`;
//! the current directory is used when no home directory can be found.

use std::path::PathBuf;

/// Directory name used under the platform config and data dirs
pub const APP_DIR: &str = "polls";

/// Config filename
const CONFIG_FILE: &str = "config.toml";

/// Database filename
const DATABASE_FILE: &str = "polls.db";

// =============================================================================
// Global paths (user-level)
// =============================================================================

/// Get the config directory.
///
/// Returns `~/.config/polls/` on Linux.
#[must_use]
pub fn global_config_dir() -> PathBuf {
    dirs::config_dir().unwrap_or_else(|| PathBuf::from(".")).join(APP_DIR)
}

/// Get the default config file path.
#[must_use]
pub fn global_config() -> PathBuf {
    global_config_dir().join(CONFIG_FILE)
}

/// Get the data directory.
///
/// Returns `~/.local/share/polls/` on Linux.
#[must_use]
pub fn data_dir() -> PathBuf {
    dirs::data_dir().unwrap_or_else(|| PathBuf::from(".")).join(APP_DIR)
}

/// Get the default database path.
#[must_use]
pub fn default_database() -> PathBuf {
    data_dir().join(DATABASE_FILE)
}
