//! Question commands - list, show, results, create, delete

use polls::api::{self, QuestionForm, View};
use polls::output::{OperationResult, OutputMode, QuestionDetail, QuestionInfo, QuestionList};

use super::{Overrides, created_id, rendered};

/// List the latest published questions, or every question with `all`
pub fn list(overrides: &Overrides, all: bool, mode: OutputMode) -> anyhow::Result<()> {
    let ctx = overrides.open_context()?;
    let now = ctx.now();

    let questions = if all {
        api::all_questions(&ctx)?
    } else {
        match rendered(api::list_questions(&ctx)?)? {
            Some(View::Index(index)) => index.latest_question_list,
            _ => anyhow::bail!("unexpected reply from the listing"),
        }
    };

    let result = QuestionList {
        questions: questions.iter().map(|q| QuestionInfo::new(q, now)).collect(),
    };
    result.render(mode);
    Ok(())
}

/// Show a published question with its answers
pub fn show(overrides: &Overrides, id: i64, mode: OutputMode) -> anyhow::Result<()> {
    let ctx = overrides.open_context()?;

    let Some(View::Detail(detail)) = rendered(api::question_detail(&ctx, id)?)? else {
        anyhow::bail!("unexpected reply for question {id}");
    };

    QuestionDetail::new(&detail.question, &detail.choices, false).render(mode);
    Ok(())
}

/// Show the vote tallies of a question
pub fn results(overrides: &Overrides, id: i64, mode: OutputMode) -> anyhow::Result<()> {
    let ctx = overrides.open_context()?;

    let Some(View::Results(results)) = rendered(api::question_results(&ctx, id)?)? else {
        anyhow::bail!("unexpected reply for question {id}");
    };

    QuestionDetail::new(&results.question, &results.choices, true).render(mode);
    Ok(())
}

/// Create a question published now
pub fn create(overrides: &Overrides, text: &str, mode: OutputMode) -> anyhow::Result<()> {
    let ctx = overrides.open_context()?;
    let form = QuestionForm {
        new_question: Some(text.to_string()),
    };

    let id = created_id(api::create_question(&ctx, Some(&form))?)?;
    OperationResult::ok(format!("Created question {id}: {text}")).render(mode);
    Ok(())
}

/// Delete a question and its answers
pub fn delete(overrides: &Overrides, id: i64, mode: OutputMode) -> anyhow::Result<()> {
    let ctx = overrides.open_context()?;

    let deleted = api::delete_question(&ctx, id)?;
    OperationResult::ok(format!("Deleted question {}", deleted.id)).render(mode);
    Ok(())
}
