//! Menu-bar title composition
//!
//! The title is rendered from a Handlebars template that sees the number of
//! pending tasks as `NumTasks`. A title never fails: when the template is
//! empty or cannot be rendered, [`default_title`] is used instead.

use serde_json::json;

use crate::template;

/// The header line shown in the menu bar
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Title {
    /// Rendered title text
    pub text: String,
    /// Display color, `None` when no color directive should be emitted
    pub color: Option<String>,
}

/// Title templates and colors for the normal and empty states
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TitleConfig {
    /// Template used when tasks are pending
    pub title: String,
    /// Color used when tasks are pending
    pub title_color: String,
    /// Template used when no tasks are pending; falls back to `title`
    pub empty_title: Option<String>,
    /// Color used when no tasks are pending; falls back to `title_color`
    pub empty_title_color: Option<String>,
}

impl TitleConfig {
    /// Template for the given task count
    #[must_use]
    pub fn template_for(&self, task_count: usize) -> &str {
        if task_count == 0
            && let Some(template) = self.empty_title.as_deref().filter(|t| !t.is_empty())
        {
            return template;
        }
        &self.title
    }

    /// Color for the given task count.
    ///
    /// An empty-state color that is set, even to `""`, overrides the normal
    /// color.
    #[must_use]
    pub fn color_for(&self, task_count: usize) -> &str {
        if task_count == 0
            && let Some(color) = self.empty_title_color.as_deref()
        {
            return color;
        }
        &self.title_color
    }
}

/// Title used when the configured template is empty or broken
#[must_use]
pub fn default_title(task_count: usize) -> String {
    format!("Pending tasks: {task_count}\n")
}

/// Render a title template against `{ NumTasks }`
pub fn render_title(template: &str, task_count: usize) -> Result<String, handlebars::RenderError> {
    template::render(template, &json!({ "NumTasks": task_count }))
}

/// Compose the title for `task_count` pending tasks
#[must_use]
pub fn compose_title(task_count: usize, config: &TitleConfig) -> Title {
    let template = config.template_for(task_count);

    let text = if template.is_empty() {
        default_title(task_count)
    } else {
        render_title(template, task_count).unwrap_or_else(|e| {
            log::debug!("Title template failed, using default title: {e}");
            default_title(task_count)
        })
    };

    let color = config.color_for(task_count);
    Title {
        text,
        color: (!color.is_empty()).then(|| color.to_string()),
    }
}
