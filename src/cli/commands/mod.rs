//! Command implementations

mod choices;
mod questions;
mod serve;

use std::path::PathBuf;

use log::debug;

use polls::api::{Context, Reply, View};
use polls::config::PollsConfig;
use polls::storage;

pub use choices::{add_choice, vote};
pub use questions::{create, delete, list, results, show};
pub use serve::serve;

/// Global flags that override the config file
#[derive(Debug, Default)]
pub struct Overrides {
    /// Config file instead of the default location
    pub config: Option<PathBuf>,
    /// Database file instead of the configured one
    pub database: Option<PathBuf>,
}

impl Overrides {
    /// Load the config and apply the overrides
    pub fn load_config(&self) -> anyhow::Result<PollsConfig> {
        let path = self.config.clone().unwrap_or_else(PollsConfig::config_path);
        debug!("Loading config from {}", path.display());

        let mut config = PollsConfig::load(&path)?;
        if let Some(database) = &self.database {
            config.storage.database.clone_from(database);
        }
        Ok(config)
    }

    /// Open the configured store behind a handler context
    pub fn open_context(&self) -> anyhow::Result<Context> {
        let config = self.load_config()?;
        open_context(&config)
    }
}

fn open_context(config: &PollsConfig) -> anyhow::Result<Context> {
    config.validate()?;
    let backend = config.storage.backend()?;
    debug!("Opening {backend} store at {}", config.storage.database.display());

    let store = storage::open_store(backend, &config.storage.database)?;
    Ok(Context::with_system_clock(store))
}

/// The page a handler rendered, failing with its validation message
fn rendered(reply: Reply) -> anyhow::Result<Option<View>> {
    match reply {
        Reply::Render(view) => match view.message() {
            Some(message) => anyhow::bail!("{message}"),
            None => Ok(Some(view)),
        },
        Reply::Redirect(_) | Reply::Created { .. } => Ok(None),
    }
}

/// The id a creating handler reports, failing with its validation message
fn created_id(reply: Reply) -> anyhow::Result<i64> {
    if let Some(id) = reply.created_id() {
        return Ok(id);
    }
    rendered(reply)?;
    anyhow::bail!("nothing was created")
}
