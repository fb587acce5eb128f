//! Tests for the tiny_http adapter's routing and response conversion
//!
//! Requests go through `dispatch` directly; no socket is opened.

use polls::server::{HttpResponse, dispatch};
use tiny_http::Method;

use crate::common::TestPolls;

fn get(polls: &TestPolls, url: &str) -> HttpResponse {
    dispatch(&polls.ctx, &Method::Get, url, "")
}

fn post(polls: &TestPolls, url: &str, body: &str) -> HttpResponse {
    dispatch(&polls.ctx, &Method::Post, url, body)
}

fn json(response: &HttpResponse) -> serde_json::Value {
    assert_eq!(response.content_type, "application/json");
    serde_json::from_str(&response.body).unwrap()
}

// =============================================================================
// HTML PAGES
// =============================================================================

#[test]
fn test_index_without_polls() {
    let polls = TestPolls::new();

    for url in ["/", "/polls/", "/polls", "/polls/?page=2"] {
        let response = get(&polls, url);
        assert_eq!(response.status, 200, "{url}");
        assert!(response.content_type.starts_with("text/html"));
        assert!(response.body.contains("No polls are available."));
    }
}

#[test]
fn test_index_links_published_questions() {
    let polls = TestPolls::new();
    let past = polls.question("Past question.", -30);
    polls.question("Future question.", 30);

    let response = get(&polls, "/polls/");
    assert!(response.body.contains("Past question."));
    assert!(response.body.contains(&format!("href=\"/polls/{}/\"", past.id)));
    assert!(!response.body.contains("Future question."));
}

#[test]
fn test_detail_page_lists_choices_as_radio_buttons() {
    let polls = TestPolls::new();
    let question = polls.question("How are you?", -1);
    let fine = polls.choice(&question, "Fine");

    let response = get(&polls, &format!("/polls/{}", question.id));
    assert_eq!(response.status, 200);
    let radio = format!("name=\"choice\" id=\"choice1\" value=\"{}\"", fine.id);
    assert!(response.body.contains(&radio));
    assert!(response.body.contains(&format!("action=\"/polls/{}/vote/\"", question.id)));
}

#[test]
fn test_future_detail_is_404() {
    let polls = TestPolls::new();
    let future = polls.question("Future question.", 30);

    let response = get(&polls, &format!("/polls/{}/", future.id));
    assert_eq!(response.status, 404);
    assert!(response.content_type.starts_with("text/html"));
}

#[test]
fn test_unknown_paths_are_404() {
    let polls = TestPolls::new();
    for url in ["/polls/abc/", "/polls/1/edit/", "/elsewhere", "/polls/-3/"] {
        assert_eq!(get(&polls, url).status, 404, "{url}");
    }
}

#[test]
fn test_wrong_method_is_405() {
    let polls = TestPolls::new();
    let question = polls.question("How are you?", -1);

    assert_eq!(dispatch(&polls.ctx, &Method::Put, "/polls/", "").status, 405);
    assert_eq!(get(&polls, &format!("/polls/{}/vote/", question.id)).status, 405);
    assert_eq!(post(&polls, &format!("/polls/{}/results/", question.id), "").status, 405);
}

#[test]
fn test_vote_redirects_to_results() {
    let polls = TestPolls::new();
    let question = polls.question("How are you?", -1);
    let fine = polls.choice(&question, "Fine");
    polls.choice(&question, "Good");

    let url = format!("/polls/{}/vote/", question.id);
    let response = post(&polls, &url, &format!("choice={}", fine.id));

    assert_eq!(response.status, 302);
    assert_eq!(response.location, Some(format!("/polls/{}/results/", question.id)));
    assert_eq!(polls.votes(&question), vec![1, 0]);

    let results = get(&polls, &format!("/polls/{}/results/", question.id));
    assert!(results.body.contains("Fine -- 1 vote<"));
    assert!(results.body.contains("Good -- 0 votes"));
}

#[test]
fn test_vote_without_choice_shows_message() {
    let polls = TestPolls::new();
    let question = polls.question("How are you?", -1);
    polls.choice(&question, "Fine");

    let response = post(&polls, &format!("/polls/{}/vote/", question.id), "");

    assert_eq!(response.status, 200);
    assert!(response.body.contains("You didn&#x27;t select a choice."));
    assert_eq!(polls.votes(&question), vec![0]);
}

#[test]
fn test_repeated_choice_uses_last_value() {
    let polls = TestPolls::new();
    let question = polls.question("How are you?", -1);
    polls.choice(&question, "Fine");
    let good = polls.choice(&question, "Good");

    let url = format!("/polls/{}/vote/", question.id);
    let response = post(&polls, &url, &format!("choice=999&choice={}", good.id));

    assert_eq!(response.status, 302);
    assert_eq!(polls.votes(&question), vec![0, 1]);
}

#[test]
fn test_repeated_question_text_uses_last_value() {
    let polls = TestPolls::new();

    let response = post(&polls, "/polls/create/", "new_question=A&new_question=B");

    assert_eq!(response.status, 302);
    assert!(polls.store_find("A").is_empty());
    assert_eq!(polls.store_find("B").len(), 1);
}

#[test]
fn test_repeated_blank_answer_shows_message() {
    let polls = TestPolls::new();
    let question = polls.question("Pick one", -1);

    let url = format!("/polls/{}/create_answer/", question.id);
    let response = post(&polls, &url, "new_answer=Red&new_answer=");

    assert_eq!(response.status, 200);
    assert!(response.body.contains("You didn&#x27;t enter an answer."));
    assert!(polls.votes(&question).is_empty());
}

#[test]
fn test_create_question_then_listed() {
    let polls = TestPolls::new();

    let form = get(&polls, "/polls/create/");
    assert_eq!(form.status, 200);
    assert!(form.body.contains("name=\"new_question\""));

    let response = post(&polls, "/polls/create/", "new_question=Tea+or+coffee%3F");
    assert_eq!(response.status, 302);
    assert_eq!(response.location.as_deref(), Some("/polls/"));

    assert!(get(&polls, "/").body.contains("Tea or coffee?"));
}

#[test]
fn test_create_blank_question_shows_message() {
    let polls = TestPolls::new();

    let response = post(&polls, "/polls/create/", "new_question=+++");
    assert_eq!(response.status, 200);
    assert!(response.body.contains("You didn&#x27;t enter a question."));
}

#[test]
fn test_user_text_is_escaped() {
    let polls = TestPolls::new();
    post(&polls, "/polls/create/", "new_question=%3Cscript%3Ealert(1)%3C%2Fscript%3E");

    let body = get(&polls, "/polls/").body;
    assert!(body.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    assert!(!body.contains("<script>"));
}

#[test]
fn test_answer_limit_over_http() {
    let polls = TestPolls::new();
    let question = polls.question("Pick one", -1);
    let url = format!("/polls/{}/create_answer/", question.id);

    for answer in ["Red", "Green", "Blue"] {
        let response = post(&polls, &url, &format!("new_answer={answer}"));
        assert_eq!(response.status, 302);
        assert_eq!(response.location, Some(format!("/polls/{}/", question.id)));
    }

    let response = post(&polls, &url, "new_answer=Pink");
    assert_eq!(response.status, 200);
    assert!(response.body.contains("You can&#x27;t add moore than 3 answers."));
    assert_eq!(polls.votes(&question).len(), 3);
}

// =============================================================================
// JSON SURFACE
// =============================================================================

#[test]
fn test_api_index_envelope() {
    let polls = TestPolls::new();
    polls.question("Past question.", -30);

    let response = get(&polls, "/api/polls/");
    assert_eq!(response.status, 200);

    let value = json(&response);
    assert_eq!(value["success"], true);
    assert_eq!(value["data"]["view"], "index");
    assert_eq!(value["data"]["latest_question_list"][0]["question_text"], "Past question.");
}

#[test]
fn test_api_redirect_is_reported_in_body() {
    let polls = TestPolls::new();
    let question = polls.question("How are you?", -1);
    let fine = polls.choice(&question, "Fine");

    let url = format!("/api/polls/{}/vote/", question.id);
    let response = post(&polls, &url, &format!("choice={}", fine.id));

    assert_eq!(response.status, 200);
    assert!(response.location.is_none());
    let value = json(&response);
    assert_eq!(value["data"]["redirect"], format!("/polls/{}/results/", question.id));
    assert!(value["data"].get("created").is_none());
}

#[test]
fn test_api_create_reports_new_id() {
    let polls = TestPolls::new();

    let value = json(&post(&polls, "/api/polls/create/", "new_question=Tea%3F"));

    let stored = polls.store_find("Tea?");
    assert_eq!(value["data"]["redirect"], "/polls/");
    assert_eq!(value["data"]["created"], stored[0].id);
}

#[test]
fn test_api_validation_message() {
    let polls = TestPolls::new();
    let question = polls.question("How are you?", -1);

    let value = json(&post(&polls, &format!("/api/polls/{}/vote/", question.id), "choice=x"));
    assert_eq!(value["data"]["view"], "detail");
    assert_eq!(value["data"]["error_message"], "You didn't select a choice.");
}

#[test]
fn test_api_not_found() {
    let polls = TestPolls::new();

    let response = get(&polls, "/api/polls/99/");
    assert_eq!(response.status, 404);
    let value = json(&response);
    assert_eq!(value["success"], false);
    assert_eq!(value["error"]["code"], "NOT_FOUND");
}

mod failure_tests {
    use std::sync::Arc;

    use polls::api::Context;
    use polls::core::ports::FixedClock;
    use polls::server::dispatch;
    use tiny_http::Method;

    use crate::common::mocks::FailingStore;
    use crate::common::now;

    #[test]
    fn test_store_failure_is_500() {
        let ctx = Context::new(Arc::new(FailingStore), Arc::new(FixedClock::at(now())));

        assert_eq!(dispatch(&ctx, &Method::Get, "/polls/", "").status, 500);

        let response = dispatch(&ctx, &Method::Get, "/api/polls/", "");
        assert_eq!(response.status, 500);
        assert!(response.body.contains("INTERNAL_ERROR"));
    }
}
