//! Page templates

use crate::api::{CreateChoiceView, CreateQuestionView, DetailView, IndexView, ResultsView};
use crate::routes::Route;

use super::escape;

/// Listing text when nothing is published
pub const NO_POLLS: &str = "No polls are available.";

const STYLE: &str = "
body { font-family: system-ui, sans-serif; max-width: 40rem; margin: 2rem auto; color: #222; }
a { color: #0b6e4f; }
.error { color: #b00020; font-weight: bold; }
fieldset { border: 1px solid #ccc; border-radius: 4px; }
nav { margin-top: 1.5rem; }
";

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{}</title>\n<style>{STYLE}</style>\n</head>\n<body>\n{body}\n</body>\n</html>\n",
        escape(title)
    )
}

fn message(text: Option<&str>) -> String {
    text.map(|m| format!("<p class=\"error\">{}</p>\n", escape(m))).unwrap_or_default()
}

fn back_to_index() -> String {
    format!("<nav><a href=\"{}\">Back to polls</a></nav>", Route::Index.path())
}

pub fn index(view: &IndexView) -> String {
    let mut body = String::from("<h1>Polls</h1>\n");

    if view.latest_question_list.is_empty() {
        body.push_str(&format!("<p>{NO_POLLS}</p>\n"));
    } else {
        body.push_str("<ul>\n");
        for question in &view.latest_question_list {
            body.push_str(&format!(
                "<li><a href=\"{}\">{}</a></li>\n",
                Route::Detail(question.id).path(),
                escape(&question.question_text)
            ));
        }
        body.push_str("</ul>\n");
    }

    body.push_str(&format!(
        "<nav><a href=\"{}\">Create a new poll</a></nav>",
        Route::Create.path()
    ));
    layout("Polls", &body)
}

pub fn detail(view: &DetailView) -> String {
    let question = &view.question;
    let mut body = format!(
        "<form action=\"{}\" method=\"post\">\n<fieldset>\n<legend><h1>{}</h1></legend>\n",
        Route::Vote(question.id).path(),
        escape(&question.question_text)
    );
    body.push_str(&message(view.error_message.as_deref()));
    body.push_str(&message(view.message_too_much.as_deref()));

    for (index, choice) in view.choices.iter().enumerate() {
        let input_id = format!("choice{}", index + 1);
        body.push_str(&format!(
            "<input type=\"radio\" name=\"choice\" id=\"{input_id}\" value=\"{}\">\n\
             <label for=\"{input_id}\">{}</label><br>\n",
            choice.id,
            escape(&choice.choice_text)
        ));
    }

    body.push_str("</fieldset>\n<input type=\"submit\" value=\"Vote\">\n</form>\n");
    body.push_str(&format!(
        "<p><a href=\"{}\">Add an answer</a> | <a href=\"{}\">See results</a></p>\n",
        Route::CreateAnswer(question.id).path(),
        Route::Results(question.id).path()
    ));
    body.push_str(&back_to_index());
    layout(&question.question_text, &body)
}

pub fn results(view: &ResultsView) -> String {
    let question = &view.question;
    let mut body = format!("<h1>{}</h1>\n<ul>\n", escape(&question.question_text));

    for choice in &view.choices {
        let plural = if choice.votes == 1 { "" } else { "s" };
        body.push_str(&format!(
            "<li>{} -- {} vote{plural}</li>\n",
            escape(&choice.choice_text),
            choice.votes
        ));
    }

    body.push_str(&format!(
        "</ul>\n<p><a href=\"{}\">Vote again?</a></p>\n",
        Route::Detail(question.id).path()
    ));
    body.push_str(&back_to_index());
    layout(&question.question_text, &body)
}

pub fn create_question(view: &CreateQuestionView) -> String {
    let mut body = String::from("<h1>Create a new poll</h1>\n");
    body.push_str(&message(view.message.as_deref()));
    body.push_str(&format!(
        "<form action=\"{}\" method=\"post\">\n\
         <label for=\"new_question\">Question</label>\n\
         <input type=\"text\" name=\"new_question\" id=\"new_question\">\n\
         <input type=\"submit\" value=\"Create\">\n</form>\n",
        Route::Create.path()
    ));
    body.push_str(&back_to_index());
    layout("Create a new poll", &body)
}

pub fn create_choice(view: &CreateChoiceView) -> String {
    let question = &view.question;
    let mut body = format!("<h1>{}</h1>\n", escape(&question.question_text));
    body.push_str(&message(view.message.as_deref()));
    body.push_str(&format!(
        "<form action=\"{}\" method=\"post\">\n\
         <label for=\"new_answer\">Answer</label>\n\
         <input type=\"text\" name=\"new_answer\" id=\"new_answer\">\n\
         <input type=\"submit\" value=\"Add\">\n</form>\n",
        Route::CreateAnswer(question.id).path()
    ));
    body.push_str(&format!(
        "<nav><a href=\"{}\">Back to the question</a></nav>",
        Route::Detail(question.id).path()
    ));
    layout(&question.question_text, &body)
}

pub fn error(status: u16, text: &str) -> String {
    let body = format!("<h1>{status}</h1>\n<p>{}</p>\n{}", escape(text), back_to_index());
    layout(&format!("Error {status}"), &body)
}
