//! Storage adapters for questions and choices
//!
//! Provides pluggable backends:
//! - `sqlite`: a database file on disk (default)
//! - `memory`: a private in-memory database, discarded on exit

/// SQLite-backed poll store
pub mod sqlite;

use std::path::Path;
use std::sync::Arc;

use crate::core::ports::{PollStore, StoreError};

pub use sqlite::SqliteStore;

/// Storage backend type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Backend {
    /// Database file on disk (default)
    #[default]
    Sqlite,
    /// In-memory database
    Memory,
}

impl std::str::FromStr for Backend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sqlite" | "file" => Ok(Self::Sqlite),
            "memory" | "mem" => Ok(Self::Memory),
            _ => Err(format!("Unknown backend: {s}. Use 'sqlite' or 'memory'")),
        }
    }
}

impl std::fmt::Display for Backend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite => write!(f, "sqlite"),
            Self::Memory => write!(f, "memory"),
        }
    }
}

/// Open the configured poll store
pub fn open_store(backend: Backend, database: &Path) -> Result<Arc<dyn PollStore>, StoreError> {
    let store = match backend {
        Backend::Sqlite => SqliteStore::open(database)?,
        Backend::Memory => SqliteStore::open_in_memory()?,
    };
    Ok(Arc::new(store))
}
