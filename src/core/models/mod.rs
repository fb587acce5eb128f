//! Domain models for polls
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`Question`] - A poll prompt whose publish date controls visibility
//! - [`Choice`] - One selectable answer to a question, carrying a vote tally

mod choice;
mod question;

pub use choice::{Choice, ChoiceId, MAX_CHOICES, can_add_choice};
pub use question::{LATEST_LIMIT, Question, QuestionId, RECENT_WINDOW_HOURS, submitted_text};
