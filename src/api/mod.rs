//! HTTP-agnostic API layer
//!
//! This module provides typed form/view structures and the poll handlers.
//! The handlers are used by the `tiny_http` server adapter and directly by the
//! administrative CLI commands.
//!
//! ## Design
//!
//! - **Handlers are plain functions**: Take a [`Context`] and typed input,
//!   return `Result<Reply, ApiError>`
//! - **Validation failures are replies**: A rejected form renders again with a
//!   message; only missing questions and store failures are errors
//! - **Errors carry HTTP semantics**: `ApiError` knows its status code for translation

mod context;
mod error;
mod handlers;
mod types;

pub use context::Context;
pub use error::{ApiError, ApiErrorData, ErrorCode};
pub use handlers::{
    NO_ANSWER_ENTERED, NO_CHOICE_SELECTED, NO_QUESTION_ENTERED, TOO_MANY_ANSWERS, all_questions,
    create_choice, create_question, delete_question, list_questions, question_detail,
    question_results, vote,
};
pub use types::{
    ApiResponse, ChoiceForm, CreateChoiceView, CreateQuestionView, DeleteData, DetailView,
    IndexView, QuestionForm, RedirectData, Reply, ResultsView, View, VoteForm,
};
