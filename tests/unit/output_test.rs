//! Tests for CLI output formatting

use chrono::Duration;
use polls::core::models::{Choice, Question};
use polls::output::{OperationResult, OutputMode, QuestionDetail, QuestionInfo, QuestionList};

use crate::common::now;

fn question(text: &str, days: i64) -> Question {
    Question::new(1, text.to_string(), now() + Duration::days(days))
}

#[test]
fn test_output_mode_default() {
    assert_eq!(OutputMode::default(), OutputMode::Human);
}

#[test]
fn test_question_info_flags() {
    let recent = QuestionInfo::new(&question("Fresh", 0), now());
    assert!(recent.published);
    assert!(recent.recent);

    let old = QuestionInfo::new(&question("Old", -30), now());
    assert!(old.published);
    assert!(!old.recent);

    let scheduled = QuestionInfo::new(&question("Later", 30), now());
    assert!(!scheduled.published);
    assert!(!scheduled.recent);
}

#[test]
fn test_question_list_serializes() {
    let list = QuestionList {
        questions: vec![QuestionInfo::new(&question("Fresh", 0), now())],
    };

    let json = serde_json::to_string(&list).unwrap();
    assert!(json.contains("\"question_text\":\"Fresh\""));
    assert!(json.contains("\"recent\":true"));
    assert!(json.contains("2024-06-01T12:00:00"));
}

#[test]
fn test_empty_list_says_no_polls() {
    let list = QuestionList { questions: vec![] };
    assert!(list.human_text().contains("No polls are available."));
}

#[test]
fn test_human_list_shows_ids_and_text() {
    let list = QuestionList {
        questions: vec![QuestionInfo::new(&question("What's up?", -2), now())],
    };
    assert!(list.human_text().contains("[1] What's up?"));
}

#[test]
fn test_detail_shows_votes_only_for_results() {
    let q = question("How are you?", -1);
    let choices = vec![
        Choice::new(1, 1, "Fine".to_string(), 1),
        Choice::new(2, 1, "Good".to_string(), 3),
    ];

    let detail = QuestionDetail::new(&q, &choices, false).human_text();
    assert!(detail.contains("[1] Fine"));
    assert!(!detail.contains("vote"));

    let results = QuestionDetail::new(&q, &choices, true).human_text();
    assert!(results.contains("Fine -- 1 vote\n"));
    assert!(results.contains("Good -- 3 votes"));
}

#[test]
fn test_detail_json_omits_display_flag() {
    let q = question("How are you?", -1);
    let json = serde_json::to_string(&QuestionDetail::new(&q, &[], true)).unwrap();
    assert!(json.contains("\"choices\":[]"));
    assert!(!json.contains("show_votes"));
}

#[test]
fn test_operation_result_serializes() {
    let result = OperationResult::ok("Deleted question 3");
    let json = serde_json::to_string(&result).unwrap();
    assert!(json.contains("\"success\":true"));
    assert!(json.contains("Deleted question 3"));
}
