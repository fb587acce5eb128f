//! Shared test fixtures and helpers
//!
//! Every fixture runs against a private in-memory database with the clock
//! frozen at [`now`].

pub mod mocks;

use std::sync::Arc;

use chrono::{DateTime, Duration, TimeZone, Utc};
use polls::api::Context;
use polls::core::models::{Choice, Question};
use polls::core::ports::{FixedClock, PollStore};
use polls::storage::SqliteStore;

/// The instant every fixture treats as "now"
pub fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
}

/// A poll database plus a handler context pointing at it
pub struct TestPolls {
    pub store: Arc<SqliteStore>,
    pub ctx: Context,
}

impl TestPolls {
    pub fn new() -> Self {
        let store = Arc::new(SqliteStore::open_in_memory().expect("in-memory database"));
        let ctx = Context::new(store.clone(), Arc::new(FixedClock::at(now())));
        Self { store, ctx }
    }

    /// Create a question published `days` away from now (negative is past)
    pub fn question(&self, text: &str, days: i64) -> Question {
        self.store.create_question(text, now() + Duration::days(days)).unwrap()
    }

    /// Attach a choice to `question`
    pub fn choice(&self, question: &Question, text: &str) -> Choice {
        self.store.add_choice(question.id, text).unwrap()
    }

    /// Questions stored with exactly `text`
    pub fn store_find(&self, text: &str) -> Vec<Question> {
        self.store.find_by_text(text).unwrap()
    }

    /// Choices of a question, in creation order
    pub fn store_choices(&self, question_id: i64) -> Vec<Choice> {
        self.store.choices(question_id).unwrap()
    }

    /// Current tallies of a question, in creation order
    pub fn votes(&self, question: &Question) -> Vec<u32> {
        self.store.choices(question.id).unwrap().iter().map(|c| c.votes).collect()
    }
}

impl Default for TestPolls {
    fn default() -> Self {
        Self::new()
    }
}
