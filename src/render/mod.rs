//! HTML presentation of handler views
//!
//! Pages are assembled from small string templates. Every piece of user
//! supplied text goes through [`escape`] before it reaches the markup.

mod templates;

use crate::api::{ApiError, View};

pub use templates::NO_POLLS;

/// Render a view as a complete HTML document
#[must_use]
pub fn html(view: &View) -> String {
    match view {
        View::Index(index) => templates::index(index),
        View::Detail(detail) => templates::detail(detail),
        View::Results(results) => templates::results(results),
        View::CreateQuestion(form) => templates::create_question(form),
        View::CreateChoice(form) => templates::create_choice(form),
    }
}

/// Render an error page
#[must_use]
pub fn error_page(error: &ApiError) -> String {
    templates::error(error.status_code(), &error.message)
}

/// Escape text for use in HTML content and attribute values
#[must_use]
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}
