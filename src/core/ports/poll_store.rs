//! Poll store port
//!
//! Defines the interface for persisting questions and their choices.

use chrono::{DateTime, Utc};
use thiserror::Error;

use super::super::models::{Choice, ChoiceId, Question, QuestionId};

/// Errors raised by a poll store
#[derive(Debug, Error)]
pub enum StoreError {
    /// The question does not exist
    #[error("question {0} not found")]
    QuestionNotFound(QuestionId),

    /// The question already holds the maximum number of choices
    #[error("question {0} already has the maximum number of choices")]
    ChoiceLimitReached(QuestionId),

    /// The connection lock was poisoned by a panicking writer
    #[error("store lock poisoned")]
    LockPoisoned,

    /// A stored value could not be decoded
    #[error("corrupt record: {0}")]
    Corrupt(String),

    /// The backing database failed
    #[error("database error: {0}")]
    Database(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Repository for questions and choices
///
/// Implementations must apply every method as a single atomic step:
/// concurrent callers never observe a half-applied mutation.
pub trait PollStore: Send + Sync {
    /// Insert a question and return it with its assigned id
    fn create_question(&self, text: &str, pub_date: DateTime<Utc>)
    -> Result<Question, StoreError>;

    /// Look up a question by id regardless of its publish date
    fn question(&self, id: QuestionId) -> Result<Option<Question>, StoreError>;

    /// Up to `limit` questions published at or before `now`, newest first
    fn latest_published(
        &self,
        now: DateTime<Utc>,
        limit: usize,
    ) -> Result<Vec<Question>, StoreError>;

    /// Every question, newest first
    fn all_questions(&self) -> Result<Vec<Question>, StoreError>;

    /// Questions whose text equals `text` exactly
    fn find_by_text(&self, text: &str) -> Result<Vec<Question>, StoreError>;

    /// Delete a question and its choices; returns whether it existed
    fn delete_question(&self, id: QuestionId) -> Result<bool, StoreError>;

    /// Choices of a question in creation order
    fn choices(&self, question_id: QuestionId) -> Result<Vec<Choice>, StoreError>;

    /// Number of choices attached to a question
    fn choice_count(&self, question_id: QuestionId) -> Result<usize, StoreError> {
        Ok(self.choices(question_id)?.len())
    }

    /// Attach a new choice with zero votes
    ///
    /// Fails with [`StoreError::ChoiceLimitReached`] when the question is full
    /// and [`StoreError::QuestionNotFound`] when it does not exist.
    fn add_choice(&self, question_id: QuestionId, text: &str) -> Result<Choice, StoreError>;

    /// Add one vote to a choice of the given question
    ///
    /// Returns `false` without mutating anything when the choice does not
    /// belong to the question.
    fn record_vote(&self, question_id: QuestionId, choice_id: ChoiceId)
    -> Result<bool, StoreError>;

    /// A question visible at `now`
    fn published_question(
        &self,
        id: QuestionId,
        now: DateTime<Utc>,
    ) -> Result<Option<Question>, StoreError> {
        Ok(self.question(id)?.filter(|q| q.is_published(now)))
    }
}
