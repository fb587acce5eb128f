//! Choice model

use serde::{Deserialize, Serialize};

use super::QuestionId;

/// Identifier of a stored choice
pub type ChoiceId = i64;

/// A question never carries more answers than this
pub const MAX_CHOICES: usize = 3;

/// One answer to a question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    /// Store-assigned identifier
    pub id: ChoiceId,

    /// Owning question
    pub question_id: QuestionId,

    /// Answer text, kept exactly as submitted
    pub choice_text: String,

    /// Number of votes received
    pub votes: u32,
}

impl Choice {
    /// Create a choice value
    #[must_use]
    pub const fn new(id: ChoiceId, question_id: QuestionId, choice_text: String, votes: u32) -> Self {
        Self {
            id,
            question_id,
            choice_text,
            votes,
        }
    }
}

/// Whether a question that already has `existing` choices may take another
#[must_use]
pub const fn can_add_choice(existing: usize) -> bool {
    existing < MAX_CHOICES
}
