//! todobar - pending Todoist tasks for the macOS menu bar
//!
//! This library holds everything the `todobar` binary does: resolving the
//! API token, fetching a project's tasks, parsing task links, composing the
//! menu-bar title and rendering the plugin output.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod app;
pub mod client;
pub mod config;
pub mod credentials;
pub mod error;
pub mod models;
pub mod output;
pub mod parser;
pub mod paths;
pub mod template;
pub mod title;

pub use error::{Error, Result};
