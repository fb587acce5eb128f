//! Mock implementations of port traits for testing

use chrono::{DateTime, Utc};
use polls::core::models::{Choice, ChoiceId, Question, QuestionId};
use polls::core::ports::{PollStore, StoreError};

/// A store whose every call fails, as a broken database would
pub struct FailingStore;

fn broken() -> StoreError {
    StoreError::Corrupt("disk image is malformed".to_string())
}

impl PollStore for FailingStore {
    fn create_question(&self, _: &str, _: DateTime<Utc>) -> Result<Question, StoreError> {
        Err(broken())
    }

    fn question(&self, _: QuestionId) -> Result<Option<Question>, StoreError> {
        Err(broken())
    }

    fn latest_published(&self, _: DateTime<Utc>, _: usize) -> Result<Vec<Question>, StoreError> {
        Err(broken())
    }

    fn all_questions(&self) -> Result<Vec<Question>, StoreError> {
        Err(broken())
    }

    fn find_by_text(&self, _: &str) -> Result<Vec<Question>, StoreError> {
        Err(broken())
    }

    fn delete_question(&self, _: QuestionId) -> Result<bool, StoreError> {
        Err(broken())
    }

    fn choices(&self, _: QuestionId) -> Result<Vec<Choice>, StoreError> {
        Err(broken())
    }

    fn add_choice(&self, _: QuestionId, _: &str) -> Result<Choice, StoreError> {
        Err(broken())
    }

    fn record_vote(&self, _: QuestionId, _: ChoiceId) -> Result<bool, StoreError> {
        Err(broken())
    }
}
