//! Handler dependencies

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::core::ports::{Clock, PollStore, SystemClock};

/// The store and clock every handler works against
#[derive(Clone)]
pub struct Context {
    store: Arc<dyn PollStore>,
    clock: Arc<dyn Clock>,
}

impl Context {
    /// Build a context from explicit dependencies
    #[must_use]
    pub fn new(store: Arc<dyn PollStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    /// Use the wall clock
    #[must_use]
    pub fn with_system_clock(store: Arc<dyn PollStore>) -> Self {
        Self::new(store, Arc::new(SystemClock))
    }

    /// The poll store
    #[must_use]
    pub fn store(&self) -> &dyn PollStore {
        self.store.as_ref()
    }

    /// Current time according to the injected clock
    #[must_use]
    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }
}

impl std::fmt::Debug for Context {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Context").field("now", &self.now()).finish_non_exhaustive()
    }
}
