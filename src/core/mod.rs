//! Core domain logic for polls
//!
//! This module contains the poll rules with no I/O dependencies.
//! All external interactions are abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (Question, Choice) and their visibility rules
//! - `ports/` - Trait definitions for the data store and the clock

pub mod models;
pub mod ports;
