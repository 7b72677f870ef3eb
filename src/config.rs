//! Configuration layering
//!
//! Options come from command-line flags, `TODOBAR_*` environment variables,
//! an optional TOML file and built-in defaults, in that order of precedence.
//! Each source is a [`ConfigLayer`]; layers are merged once at startup into
//! a [`Settings`] value that is passed down to the components.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::client::DEFAULT_API_URL;
use crate::error::{Error, Result};
use crate::output::TemplateSource;
use crate::title::TitleConfig;

/// Project looked up when neither a name nor an ID is configured
pub const DEFAULT_PROJECT: &str = "Inbox";

/// Title template for the non-empty state (SF Symbol numbered circle)
pub const DEFAULT_TITLE: &str =
    ":{{#if (lte NumTasks 50)}}{{NumTasks}}{{else}}ellipsis{{/if}}.circle.fill:";

/// Title color for the non-empty state
pub const DEFAULT_TITLE_COLOR: &str = "#DC143C";

/// Replacement for `|` in task names (fullwidth vertical line)
pub const DEFAULT_PIPE_SUB: &str = "\u{ff5c}";

/// One configuration source with every option optional
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct ConfigLayer {
    /// Project name to list tasks for
    pub project: Option<String>,
    /// Project ID, overrides `project` when positive
    pub project_id: Option<i64>,
    /// Todoist API token
    pub api_token: Option<String>,
    /// Todoist REST base URL
    pub api_url: Option<String>,
    /// Title template when tasks are pending
    pub title: Option<String>,
    /// Title color when tasks are pending
    pub title_color: Option<String>,
    /// Title template when no tasks are pending
    pub empty_title: Option<String>,
    /// Title color when no tasks are pending
    pub empty_title_color: Option<String>,
    /// Path to a custom output template
    pub output_template: Option<PathBuf>,
    /// Replacement for pipe characters in task names
    pub pipe_sub: Option<String>,
}

impl ConfigLayer {
    /// Load a layer from a TOML file.
    ///
    /// A missing file yields an empty layer; an unreadable or malformed file
    /// is an error.
    pub fn load(path: &Path) -> Result<Self> {
        match fs::read_to_string(path) {
            Ok(content) => Self::parse(&content).map_err(|source| Error::ConfigParse {
                path: path.to_path_buf(),
                source,
            }),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::debug!("No config file at {}", path.display());
                Ok(Self::default())
            },
            Err(source) => Err(Error::ConfigRead {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// Parse a layer from TOML text
    pub fn parse(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Fill unset options from a lower-precedence layer
    #[must_use]
    pub fn merge(self, lower: Self) -> Self {
        Self {
            project: self.project.or(lower.project),
            project_id: self.project_id.or(lower.project_id),
            api_token: self.api_token.or(lower.api_token),
            api_url: self.api_url.or(lower.api_url),
            title: self.title.or(lower.title),
            title_color: self.title_color.or(lower.title_color),
            empty_title: self.empty_title.or(lower.empty_title),
            empty_title_color: self.empty_title_color.or(lower.empty_title_color),
            output_template: self.output_template.or(lower.output_template),
            pipe_sub: self.pipe_sub.or(lower.pipe_sub),
        }
    }

    /// Apply built-in defaults and produce the final settings
    #[must_use]
    pub fn into_settings(self) -> Settings {
        Settings {
            project: self.project.unwrap_or_else(|| DEFAULT_PROJECT.to_string()),
            project_id: self.project_id.unwrap_or(0),
            api_token: self.api_token.filter(|token| !token.is_empty()),
            api_url: self.api_url.unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            title: TitleConfig {
                title: self.title.unwrap_or_else(|| DEFAULT_TITLE.to_string()),
                title_color: self.title_color.unwrap_or_else(|| DEFAULT_TITLE_COLOR.to_string()),
                empty_title: self.empty_title,
                empty_title_color: self.empty_title_color,
            },
            output_template: self.output_template.filter(|path| !path.as_os_str().is_empty()),
            pipe_sub: self.pipe_sub.unwrap_or_else(|| DEFAULT_PIPE_SUB.to_string()),
        }
    }
}

/// Resolved configuration for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Project name to look up
    pub project: String,
    /// Explicit project ID; the name lookup is skipped when positive
    pub project_id: i64,
    /// Configured API token, `None` means ask the keychain
    pub api_token: Option<String>,
    /// Todoist REST base URL
    pub api_url: String,
    /// Title templates and colors
    pub title: TitleConfig,
    /// Custom output template path
    pub output_template: Option<PathBuf>,
    /// Replacement for pipe characters in task names
    pub pipe_sub: String,
}

impl Default for Settings {
    fn default() -> Self {
        ConfigLayer::default().into_settings()
    }
}

impl Settings {
    /// Explicit project ID, if one is configured
    #[must_use]
    pub const fn explicit_project_id(&self) -> Option<i64> {
        if self.project_id > 0 { Some(self.project_id) } else { None }
    }

    /// Where the output template comes from
    #[must_use]
    pub fn template_source(&self) -> TemplateSource {
        self.output_template
            .as_ref()
            .map_or(TemplateSource::BuiltIn, |path| TemplateSource::File(path.clone()))
    }
}
