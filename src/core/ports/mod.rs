//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundaries between the poll rules
//! and external systems (the database, the wall clock).
//!
//! Implementations live in the `storage` module and in `clock`.
//!
//! ## Design Principle
//!
//! Handlers depend only on these traits, never on concrete
//! implementations. Tests swap in an in-memory database and a
//! fixed clock.

mod clock;
mod poll_store;

pub use clock::{Clock, FixedClock, SystemClock};
pub use poll_store::{PollStore, StoreError};
