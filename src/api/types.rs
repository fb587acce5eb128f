//! API form, view and response types
//!
//! All types are framework-agnostic and can be used by any client.

use serde::{Deserialize, Serialize};

use super::error::ApiErrorData;
use crate::core::models::{Choice, Question};

// =============================================================================
// RESPONSE ENVELOPE
// =============================================================================

/// Standard JSON response envelope
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    /// Whether the request succeeded
    pub success: bool,
    /// Response data (present on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Error details (present on failure)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiErrorData>,
}

impl<T: Serialize> ApiResponse<T> {
    /// Create a successful response
    #[must_use]
    pub const fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }
}

impl ApiResponse<()> {
    /// Create an error response
    #[must_use]
    pub fn error(code: &str, message: &str) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(ApiErrorData {
                code: code.to_string(),
                message: message.to_string(),
            }),
        }
    }
}

// =============================================================================
// FORMS
// =============================================================================

/// Vote form body
#[derive(Debug, Default, Deserialize)]
pub struct VoteForm {
    /// Selected choice id, as submitted
    #[serde(default)]
    pub choice: Option<String>,
}

/// New question form body
#[derive(Debug, Default, Deserialize)]
pub struct QuestionForm {
    /// Question text, as submitted
    #[serde(default)]
    pub new_question: Option<String>,
}

/// New answer form body
#[derive(Debug, Default, Deserialize)]
pub struct ChoiceForm {
    /// Answer text, as submitted
    #[serde(default)]
    pub new_answer: Option<String>,
}

// =============================================================================
// VIEWS
// =============================================================================

/// What a handler asks the presentation layer to do
#[derive(Debug)]
pub enum Reply {
    /// Render a page (status 200)
    Render(View),
    /// Send the client to another page (status 302)
    Redirect(String),
    /// A record was created; send the client on (status 302)
    Created {
        /// Where the client should go next
        location: String,
        /// Id of the new question or choice
        id: i64,
    },
}

impl Reply {
    /// The rendered view, if this is not a redirect
    #[must_use]
    pub const fn view(&self) -> Option<&View> {
        match self {
            Self::Render(view) => Some(view),
            Self::Redirect(_) | Self::Created { .. } => None,
        }
    }

    /// The redirect target, if any
    #[must_use]
    pub fn redirect(&self) -> Option<&str> {
        match self {
            Self::Redirect(location) | Self::Created { location, .. } => Some(location),
            Self::Render(_) => None,
        }
    }

    /// Id of the record this reply reports as created
    #[must_use]
    pub const fn created_id(&self) -> Option<i64> {
        match self {
            Self::Created { id, .. } => Some(*id),
            Self::Render(_) | Self::Redirect(_) => None,
        }
    }
}

/// A page and the data it shows
#[derive(Debug, Serialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum View {
    /// Latest published questions
    Index(IndexView),
    /// One question with its voting form
    Detail(DetailView),
    /// Vote tallies
    Results(ResultsView),
    /// New question form
    CreateQuestion(CreateQuestionView),
    /// New answer form
    CreateChoice(CreateChoiceView),
}

impl View {
    /// The validation message this page carries, if any
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Detail(detail) => {
                detail.error_message.as_deref().or(detail.message_too_much.as_deref())
            },
            Self::CreateQuestion(form) => form.message.as_deref(),
            Self::CreateChoice(form) => form.message.as_deref(),
            Self::Index(_) | Self::Results(_) => None,
        }
    }
}

/// Listing page data
#[derive(Debug, Serialize)]
pub struct IndexView {
    /// Newest published questions, newest first
    pub latest_question_list: Vec<Question>,
}

/// Detail page data
#[derive(Debug, Serialize)]
pub struct DetailView {
    /// The question
    pub question: Question,
    /// Its choices in creation order
    pub choices: Vec<Choice>,
    /// Shown when a vote named no valid choice
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    /// Shown when the question cannot take another answer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_too_much: Option<String>,
}

/// Results page data
#[derive(Debug, Serialize)]
pub struct ResultsView {
    /// The question
    pub question: Question,
    /// Its choices with their tallies
    pub choices: Vec<Choice>,
}

/// New question form data
#[derive(Debug, Default, Serialize)]
pub struct CreateQuestionView {
    /// Validation message from a rejected submission
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// New answer form data
#[derive(Debug, Serialize)]
pub struct CreateChoiceView {
    /// The question receiving the answer
    pub question: Question,
    /// Validation message from a rejected submission
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

// =============================================================================
// RESPONSE DATA TYPES
// =============================================================================

/// JSON body standing in for a redirect
#[derive(Debug, Serialize)]
pub struct RedirectData {
    /// Where the client should go next
    pub redirect: String,
    /// Id of the record just created
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<i64>,
}

/// Result of deleting a question
#[derive(Debug, Clone, Copy, Serialize)]
pub struct DeleteData {
    /// The deleted question
    pub id: i64,
    /// Always true; missing questions are reported as errors
    pub deleted: bool,
}
