//! Plugin output rendering
//!
//! The output is a Handlebars template rendered against the title and the
//! parsed tasks. The built-in template produces the SwiftBar/xbar layout:
//!
//! ```text
//! <title> | color=<C> sfcolor=<C>
//! ---
//! <task name>
//! <task name>
//! ```
//!
//! Custom templates can use `Title.Text`, `Title.Color`, `NumTasks` and, for
//! each entry of `Tasks`, `Id`, `Content`, `Description`, `Name`, `Url` and
//! `Note`, in Handlebars or Go template syntax.

use std::borrow::Cow;
use std::fs;
use std::path::PathBuf;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::models::Task;
use crate::template;
use crate::title::Title;

/// Template used when no `output-template` is configured
pub const DEFAULT_TEMPLATE: &str = "{{Title.Text}}{{#if Title.Color}} | color={{Title.Color}} sfcolor={{Title.Color}}{{/if}}
---
{{#each Tasks}}{{Name}}
{{/each}}";

/// Where the output template comes from
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TemplateSource {
    /// The built-in [`DEFAULT_TEMPLATE`]
    #[default]
    BuiltIn,
    /// A user-supplied template file
    File(PathBuf),
}

impl TemplateSource {
    /// Load the template text
    pub fn load(&self) -> Result<Cow<'static, str>> {
        match self {
            Self::BuiltIn => Ok(Cow::Borrowed(DEFAULT_TEMPLATE)),
            Self::File(path) => {
                log::debug!("Loading output template from {}", path.display());
                fs::read_to_string(path).map(Cow::Owned).map_err(|source| Error::TemplateRead {
                    path: path.clone(),
                    source,
                })
            },
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct OutputContext<'a> {
    title: TitleContext<'a>,
    num_tasks: usize,
    tasks: Vec<TaskContext<'a>>,
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct TitleContext<'a> {
    text: &'a str,
    color: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct TaskContext<'a> {
    id: i64,
    content: &'a str,
    description: &'a str,
    name: &'a str,
    url: &'a str,
    note: &'a str,
}

impl<'a> From<&'a Task> for TaskContext<'a> {
    fn from(task: &'a Task) -> Self {
        Self {
            id: task.id,
            content: &task.content,
            description: &task.description,
            name: &task.name,
            url: &task.url,
            note: &task.note,
        }
    }
}

/// Render the title and tasks with `template`
pub fn render(title: &Title, tasks: &[Task], template: &str) -> Result<String> {
    let context = OutputContext {
        title: TitleContext {
            text: &title.text,
            color: title.color.as_deref().unwrap_or_default(),
        },
        num_tasks: tasks.len(),
        tasks: tasks.iter().map(TaskContext::from).collect(),
    };

    Ok(template::render(template, &context)?)
}
