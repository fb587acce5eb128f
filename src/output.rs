//! Output formatting for human and JSON modes
//!
//! This module provides structured CLI output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use std::fmt::Write as _;

use chrono::{DateTime, Utc};
use colored::Colorize;
use serde::Serialize;

use crate::core::models::{Choice, Question};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// A question as listed by the CLI
#[derive(Debug, Serialize)]
pub struct QuestionInfo {
    /// Question id
    pub id: i64,
    /// Question text
    pub question_text: String,
    /// Publish date (RFC3339)
    pub pub_date: String,
    /// Whether the publish date has passed
    pub published: bool,
    /// Whether it was published within the last day
    pub recent: bool,
}

impl QuestionInfo {
    /// Describe a question as seen at `now`
    #[must_use]
    pub fn new(question: &Question, now: DateTime<Utc>) -> Self {
        Self {
            id: question.id,
            question_text: question.question_text.clone(),
            pub_date: question.pub_date.to_rfc3339(),
            published: question.is_published(now),
            recent: question.was_published_recently(now),
        }
    }
}

/// Result of a list operation
#[derive(Debug, Serialize)]
pub struct QuestionList {
    /// Listed questions, newest first
    pub questions: Vec<QuestionInfo>,
}

/// A choice with its tally
#[derive(Debug, Serialize)]
pub struct ChoiceInfo {
    /// Choice id
    pub id: i64,
    /// Answer text
    pub choice_text: String,
    /// Votes received
    pub votes: u32,
}

impl From<&Choice> for ChoiceInfo {
    fn from(choice: &Choice) -> Self {
        Self {
            id: choice.id,
            choice_text: choice.choice_text.clone(),
            votes: choice.votes,
        }
    }
}

/// One question with its choices
#[derive(Debug, Serialize)]
pub struct QuestionDetail {
    /// Question id
    pub id: i64,
    /// Question text
    pub question_text: String,
    /// Publish date (RFC3339)
    pub pub_date: String,
    /// Choices in creation order
    pub choices: Vec<ChoiceInfo>,
    /// Whether vote counts are shown in human output
    #[serde(skip)]
    pub show_votes: bool,
}

impl QuestionDetail {
    /// Build from a question and its choices
    #[must_use]
    pub fn new(question: &Question, choices: &[Choice], show_votes: bool) -> Self {
        Self {
            id: question.id,
            question_text: question.question_text.clone(),
            pub_date: question.pub_date.to_rfc3339(),
            choices: choices.iter().map(ChoiceInfo::from).collect(),
            show_votes,
        }
    }
}

/// Generic operation result for simple commands
#[derive(Debug, Serialize)]
pub struct OperationResult {
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable message
    pub message: String,
}

impl QuestionList {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => print!("{}", self.human_text()),
            OutputMode::Json => render_json(self),
        }
    }

    /// Human-readable rendering
    #[must_use]
    pub fn human_text(&self) -> String {
        if self.questions.is_empty() {
            return format!("{}\n", crate::render::NO_POLLS);
        }

        let mut out = String::new();
        for q in &self.questions {
            let marker = if !q.published {
                format!(" {}", "(scheduled)".yellow())
            } else if q.recent {
                format!(" {}", "(new)".green())
            } else {
                String::new()
            };
            let _ = writeln!(out, "  [{}] {}{marker}", q.id, q.question_text);
            let _ = writeln!(out, "       published {}", q.pub_date.as_str().dimmed());
        }
        out
    }
}

impl QuestionDetail {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => print!("{}", self.human_text()),
            OutputMode::Json => render_json(self),
        }
    }

    /// Human-readable rendering
    #[must_use]
    pub fn human_text(&self) -> String {
        let mut out = format!("[{}] {}\n", self.id, self.question_text.as_str().bold());

        if self.choices.is_empty() {
            out.push_str("  (no answers yet)\n");
        }
        for c in &self.choices {
            if self.show_votes {
                let plural = if c.votes == 1 { "" } else { "s" };
                let _ = writeln!(out, "  [{}] {} -- {} vote{plural}", c.id, c.choice_text, c.votes);
            } else {
                let _ = writeln!(out, "  [{}] {}", c.id, c.choice_text);
            }
        }
        out
    }
}

impl OperationResult {
    /// Create a successful result
    #[must_use]
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.message),
            OutputMode::Json => render_json(self),
        }
    }
}

fn render_json<T: Serialize>(value: &T) {
    println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
}
