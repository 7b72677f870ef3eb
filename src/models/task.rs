//! Task model
//!
//! A task as returned by `GET /tasks`, plus the display fields derived from
//! its content by [`Task::parse`].

use serde::Deserialize;

use crate::parser;

/// A pending Todoist task
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Task {
    /// Task ID
    pub id: i64,

    /// Raw task content
    pub content: String,

    /// Task description
    #[serde(default)]
    pub description: String,

    /// Display name derived from the content
    #[serde(skip_deserializing)]
    pub name: String,

    /// Link target derived from the content
    #[serde(skip_deserializing)]
    pub url: String,

    /// Note derived from the content
    #[serde(skip_deserializing)]
    pub note: String,
}

impl Task {
    /// Create a task with the given ID and content
    #[must_use]
    pub fn new(id: i64, content: impl Into<String>) -> Self {
        Self {
            id,
            content: content.into(),
            ..Self::default()
        }
    }

    /// Fill `name`, `url` and `note` from the content.
    ///
    /// Content without a `[label](target)` link keeps its text as the name.
    /// Pipe characters in the name are replaced by `pipe_sub` since the menu
    /// bar host treats `|` as a field separator.
    pub fn parse(&mut self, pipe_sub: &str) {
        let parsed = parser::parse_link(&self.content).unwrap_or_else(|| {
            log::info!("Task content did not match link pattern: {}", self.content);
            parser::ParsedContent::fallback(&self.content)
        });

        self.name = parsed.title.replace('|', pipe_sub);
        self.url = parsed.url;
        self.note = parsed.note;
    }
}
