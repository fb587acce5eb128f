//! Question model
//!
//! A question is visible once its publish date has passed. It counts as
//! "recently published" for one day after that.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Identifier of a stored question
pub type QuestionId = i64;

/// How many questions the listing shows
pub const LATEST_LIMIT: usize = 5;

/// Width of the "recently published" window
pub const RECENT_WINDOW_HOURS: i64 = 24;

/// A poll prompt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Store-assigned identifier
    pub id: QuestionId,

    /// The prompt shown to voters, kept exactly as submitted
    pub question_text: String,

    /// When the question becomes visible
    pub pub_date: DateTime<Utc>,
}

impl Question {
    /// Create a question value
    #[must_use]
    pub const fn new(id: QuestionId, question_text: String, pub_date: DateTime<Utc>) -> Self {
        Self {
            id,
            question_text,
            pub_date,
        }
    }

    /// Whether the publish date is not in the future
    #[must_use]
    pub fn is_published(&self, now: DateTime<Utc>) -> bool {
        self.pub_date <= now
    }

    /// Whether the question was published within the last day
    ///
    /// Future questions are never recent.
    #[must_use]
    pub fn was_published_recently(&self, now: DateTime<Utc>) -> bool {
        now - Duration::hours(RECENT_WINDOW_HOURS) <= self.pub_date && self.pub_date <= now
    }
}

impl std::fmt::Display for Question {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.question_text)
    }
}

/// The submitted text, unless it is missing or whitespace only
///
/// Accepted text is returned untrimmed.
#[must_use]
pub fn submitted_text(raw: Option<&str>) -> Option<&str> {
    raw.filter(|t| !t.trim().is_empty())
}
