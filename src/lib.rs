//! polls - A small polling web application
//!
//! Questions are published at a point in time, carry up to three answers and
//! collect votes. This library holds the models, the storage port and its
//! SQLite adapter, the HTTP-agnostic handlers, HTML rendering and the
//! `tiny_http` server adapter.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod api;
pub mod config;
pub mod core;
pub mod output;
pub mod paths;
pub mod render;
pub mod routes;
pub mod server;
pub mod storage;
