//! Poll handlers
//!
//! These handlers contain the voting and creation rules and are HTTP-agnostic.
//! They take typed input and return `Result<Reply, ApiError>`.

use log::info;

use crate::core::models::{
    ChoiceId, LATEST_LIMIT, Question, QuestionId, can_add_choice, submitted_text,
};
use crate::core::ports::StoreError;
use crate::routes::Route;

use super::context::Context;
use super::error::ApiError;
use super::types::{
    ChoiceForm, CreateChoiceView, CreateQuestionView, DeleteData, DetailView, IndexView,
    QuestionForm, Reply, ResultsView, View, VoteForm,
};

/// Shown when a vote names no valid choice
pub const NO_CHOICE_SELECTED: &str = "You didn't select a choice.";

/// Shown when a question form is submitted empty
pub const NO_QUESTION_ENTERED: &str = "You didn't enter a question.";

/// Shown when an answer form is submitted empty
pub const NO_ANSWER_ENTERED: &str = "You didn't enter an answer.";

/// Shown when a question already holds the maximum number of answers
pub const TOO_MANY_ANSWERS: &str = "You can't add moore than 3 answers.";

// =============================================================================
// READ
// =============================================================================

/// The newest published questions, newest first
pub fn list_questions(ctx: &Context) -> Result<Reply, ApiError> {
    let latest_question_list = ctx.store().latest_published(ctx.now(), LATEST_LIMIT)?;

    Ok(Reply::Render(View::Index(IndexView {
        latest_question_list,
    })))
}

/// Every question including unpublished ones, newest first
pub fn all_questions(ctx: &Context) -> Result<Vec<Question>, ApiError> {
    Ok(ctx.store().all_questions()?)
}

/// A published question with its choices
///
/// Questions scheduled for the future are reported as not found.
pub fn question_detail(ctx: &Context, id: QuestionId) -> Result<Reply, ApiError> {
    let question = ctx
        .store()
        .published_question(id, ctx.now())?
        .ok_or_else(|| question_not_found(id))?;

    detail(ctx, question, None, None)
}

/// Vote tallies of a question
pub fn question_results(ctx: &Context, id: QuestionId) -> Result<Reply, ApiError> {
    let question = find_question(ctx, id)?;
    let choices = ctx.store().choices(question.id)?;

    Ok(Reply::Render(View::Results(ResultsView { question, choices })))
}

// =============================================================================
// WRITE
// =============================================================================

/// Record one vote for the selected choice
///
/// A missing or foreign choice id renders the detail page again with
/// [`NO_CHOICE_SELECTED`] and changes nothing.
pub fn vote(ctx: &Context, id: QuestionId, form: &VoteForm) -> Result<Reply, ApiError> {
    let question = find_question(ctx, id)?;

    let choice_id = form
        .choice
        .as_deref()
        .and_then(|raw| raw.trim().parse::<ChoiceId>().ok());

    let Some(choice_id) = choice_id else {
        return detail(ctx, question, Some(NO_CHOICE_SELECTED), None);
    };

    if !ctx.store().record_vote(question.id, choice_id)? {
        return detail(ctx, question, Some(NO_CHOICE_SELECTED), None);
    }

    info!("Vote recorded for choice {choice_id} of question {id}");
    Ok(Reply::Redirect(Route::Results(question.id).path()))
}

/// Show the question form, or create a question from a submission
///
/// `form` is `None` when the form is only being displayed.
pub fn create_question(ctx: &Context, form: Option<&QuestionForm>) -> Result<Reply, ApiError> {
    let Some(form) = form else {
        return Ok(Reply::Render(View::CreateQuestion(CreateQuestionView::default())));
    };

    let Some(text) = submitted_text(form.new_question.as_deref()) else {
        return Ok(Reply::Render(View::CreateQuestion(CreateQuestionView {
            message: Some(NO_QUESTION_ENTERED.to_string()),
        })));
    };

    let question = ctx.store().create_question(text, ctx.now())?;
    info!("Question {} created", question.id);

    Ok(Reply::Created {
        location: Route::Index.path(),
        id: question.id,
    })
}

/// Show the answer form, or add an answer from a submission
///
/// A question that is already full renders its detail page with
/// [`TOO_MANY_ANSWERS`], whether or not a form was submitted.
pub fn create_choice(
    ctx: &Context,
    id: QuestionId,
    form: Option<&ChoiceForm>,
) -> Result<Reply, ApiError> {
    let question = find_question(ctx, id)?;

    if !can_add_choice(ctx.store().choice_count(question.id)?) {
        return detail(ctx, question, None, Some(TOO_MANY_ANSWERS));
    }

    let Some(form) = form else {
        return Ok(Reply::Render(View::CreateChoice(CreateChoiceView {
            question,
            message: None,
        })));
    };

    let Some(text) = submitted_text(form.new_answer.as_deref()) else {
        return Ok(Reply::Render(View::CreateChoice(CreateChoiceView {
            question,
            message: Some(NO_ANSWER_ENTERED.to_string()),
        })));
    };

    match ctx.store().add_choice(question.id, text) {
        Ok(choice) => {
            info!("Choice {} added to question {}", choice.id, question.id);
            Ok(Reply::Created {
                location: Route::Detail(question.id).path(),
                id: choice.id,
            })
        },
        // Another submission filled the last slot after the count above.
        Err(StoreError::ChoiceLimitReached(_)) => {
            detail(ctx, question, None, Some(TOO_MANY_ANSWERS))
        },
        Err(e) => Err(e.into()),
    }
}

/// Delete a question and its choices
pub fn delete_question(ctx: &Context, id: QuestionId) -> Result<DeleteData, ApiError> {
    if !ctx.store().delete_question(id)? {
        return Err(question_not_found(id));
    }

    info!("Question {id} deleted");
    Ok(DeleteData { id, deleted: true })
}

// =============================================================================
// HELPERS
// =============================================================================

fn find_question(ctx: &Context, id: QuestionId) -> Result<Question, ApiError> {
    ctx.store().question(id)?.ok_or_else(|| question_not_found(id))
}

fn question_not_found(id: QuestionId) -> ApiError {
    ApiError::not_found(format!("Question {id} not found"))
}

fn detail(
    ctx: &Context,
    question: Question,
    error_message: Option<&str>,
    message_too_much: Option<&str>,
) -> Result<Reply, ApiError> {
    let choices = ctx.store().choices(question.id)?;

    Ok(Reply::Render(View::Detail(DetailView {
        question,
        choices,
        error_message: error_message.map(String::from),
        message_too_much: message_too_much.map(String::from),
    })))
}
