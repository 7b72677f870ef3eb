//! The todobar run: fetch, parse, compose and render

use std::io::Write;

use crate::client::TodoistClient;
use crate::config::Settings;
use crate::credentials::{SecretStore, resolve_token};
use crate::error::Result;
use crate::output;
use crate::title::compose_title;

/// Fetch the configured project's tasks and write the plugin output to `out`.
///
/// The output is rendered completely before anything is written, so an error
/// leaves `out` untouched.
pub fn print_tasks<W: Write>(settings: &Settings, store: &dyn SecretStore, out: &mut W) -> Result<()> {
    let template = settings.template_source().load()?;

    let token = resolve_token(settings.api_token.as_deref(), store)?;
    let client = TodoistClient::new(&settings.api_url, token)?;

    let project_id = match settings.explicit_project_id() {
        Some(id) => id,
        None => client.resolve_project_id(&settings.project)?,
    };

    let mut tasks = client.tasks(project_id)?;
    for task in &mut tasks {
        task.parse(&settings.pipe_sub);
    }

    let title = compose_title(tasks.len(), &settings.title);
    let rendered = output::render(&title, &tasks, &template)?;

    out.write_all(rendered.as_bytes())?;
    out.flush()?;
    Ok(())
}
