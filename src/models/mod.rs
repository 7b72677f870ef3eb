//! Data models for todobar
//!
//! Entities decoded from the Todoist REST API:
//! - Project: a named task container, only needed to find its ID
//! - Task: a to-do item whose content may encode a link and a note

pub mod project;
pub mod task;

pub use project::Project;
pub use task::Task;
