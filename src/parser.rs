//! Task content parsing
//!
//! Todoist task content often carries a markdown link followed by a note:
//!
//! ```text
//! [Review PR](https://github.com/org/repo/pull/7) before standup
//! ```
//!
//! The functions here are pure: string in, [`ParsedContent`] out.

use std::sync::LazyLock;

use regex::Regex;

/// `[label](target)` followed by optional whitespace and the rest of the line
static LINK_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[([^\]]*)\]\(([^)]*)\)\s*(.*)").expect("link pattern is a valid regex")
});

/// Display fields extracted from task content
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedContent {
    /// Display title (the link label, or the whole content)
    pub title: String,
    /// Link target, empty when the content has no link
    pub url: String,
    /// Text following the link, possibly empty
    pub note: String,
}

impl ParsedContent {
    /// The record used for content without a link: the content verbatim as
    /// title, no url, no note
    #[must_use]
    pub fn fallback(content: &str) -> Self {
        Self {
            title: content.to_string(),
            ..Self::default()
        }
    }
}

/// Extract the first `[label](target) note` occurrence, if any
#[must_use]
pub fn parse_link(content: &str) -> Option<ParsedContent> {
    let caps = LINK_PATTERN.captures(content)?;
    let group = |i| caps.get(i).map_or("", |m| m.as_str()).to_string();

    Some(ParsedContent {
        title: group(1),
        url: group(2),
        note: group(3),
    })
}

/// Parse task content, falling back to the verbatim content as title
#[must_use]
pub fn parse_content(content: &str) -> ParsedContent {
    parse_link(content).unwrap_or_else(|| ParsedContent::fallback(content))
}
