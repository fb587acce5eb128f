//! Choice commands - add answers and vote

use polls::api::{self, ChoiceForm, VoteForm};
use polls::output::{OperationResult, OutputMode};

use super::{Overrides, created_id, rendered};

/// Add an answer to a question
pub fn add_choice(
    overrides: &Overrides,
    id: i64,
    text: &str,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let ctx = overrides.open_context()?;
    let form = ChoiceForm {
        new_answer: Some(text.to_string()),
    };

    let choice_id = created_id(api::create_choice(&ctx, id, Some(&form))?)?;
    OperationResult::ok(format!("Added choice {choice_id} to question {id}: {text}")).render(mode);
    Ok(())
}

/// Vote for one answer of a question
pub fn vote(
    overrides: &Overrides,
    question: i64,
    choice: &str,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let ctx = overrides.open_context()?;
    let form = VoteForm {
        choice: Some(choice.to_string()),
    };

    rendered(api::vote(&ctx, question, &form)?)?;
    OperationResult::ok(format!("Voted for choice {} of question {question}", choice.trim()))
        .render(mode);
    Ok(())
}
