//! URL layout of the poll pages
//!
//! Single source of truth for building links and redirect targets, and for
//! matching incoming paths back to a page. Trailing slashes are optional.

use crate::core::models::QuestionId;

/// Prefix every page lives under
pub const POLLS_PREFIX: &str = "/polls";

/// A page of the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Latest published questions
    Index,
    /// One question with its voting form
    Detail(QuestionId),
    /// Vote tallies of one question
    Results(QuestionId),
    /// Vote submission target
    Vote(QuestionId),
    /// New question form
    Create,
    /// New answer form for one question
    CreateAnswer(QuestionId),
}

impl Route {
    /// The canonical path of this page
    #[must_use]
    pub fn path(self) -> String {
        match self {
            Self::Index => format!("{POLLS_PREFIX}/"),
            Self::Detail(id) => format!("{POLLS_PREFIX}/{id}/"),
            Self::Results(id) => format!("{POLLS_PREFIX}/{id}/results/"),
            Self::Vote(id) => format!("{POLLS_PREFIX}/{id}/vote/"),
            Self::Create => format!("{POLLS_PREFIX}/create/"),
            Self::CreateAnswer(id) => format!("{POLLS_PREFIX}/{id}/create_answer/"),
        }
    }

    /// Match a request path (query string already removed)
    ///
    /// `/` is an alias of the index. Ids must be positive integers.
    #[must_use]
    pub fn parse(path: &str) -> Option<Self> {
        let trimmed = path.trim_end_matches('/');
        if trimmed.is_empty() {
            return Some(Self::Index);
        }

        let rest = trimmed.strip_prefix(POLLS_PREFIX)?;
        if !rest.is_empty() && !rest.starts_with('/') {
            return None;
        }
        let segments: Vec<&str> = rest.split('/').skip(1).collect();

        match segments.as_slice() {
            [] => Some(Self::Index),
            ["create"] => Some(Self::Create),
            [id] => parse_id(id).map(Self::Detail),
            [id, "results"] => parse_id(id).map(Self::Results),
            [id, "vote"] => parse_id(id).map(Self::Vote),
            [id, "create_answer"] => parse_id(id).map(Self::CreateAnswer),
            _ => None,
        }
    }
}

fn parse_id(segment: &str) -> Option<QuestionId> {
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    segment.parse().ok().filter(|id| *id > 0)
}
