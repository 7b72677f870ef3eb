//! Todoist REST client
//!
//! Two read-only endpoints are used: `GET /projects` to turn a project name
//! into an ID, and `GET /tasks?project_id=N` to list that project's pending
//! tasks. Requests are blocking; there are no retries and no timeout beyond
//! the `reqwest` defaults.

use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;

use crate::error::{Error, Result};
use crate::models::project::find_project_id;
use crate::models::{Project, Task};

/// Todoist REST API base URL
pub const DEFAULT_API_URL: &str = "https://api.todoist.com/rest/v1";

/// Blocking client for the Todoist REST API
#[derive(Debug, Clone)]
pub struct TodoistClient {
    http: Client,
    base_url: String,
    token: String,
}

impl TodoistClient {
    /// Create a client for `base_url` authenticating with `token`
    pub fn new(base_url: &str, token: impl Into<String>) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = Client::builder()
            .user_agent(concat!("todobar/", env!("CARGO_PKG_VERSION")))
            .default_headers(headers)
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.into(),
        })
    }

    /// Base URL requests are sent to
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// List all projects
    pub fn projects(&self) -> Result<Vec<Project>> {
        self.get_json(&format!("{}/projects", self.base_url))
    }

    /// List pending tasks in a project
    pub fn tasks(&self, project_id: i64) -> Result<Vec<Task>> {
        log::info!("Looking for tasks with project ID: {project_id}");

        let tasks: Vec<Task> =
            self.get_json(&format!("{}/tasks?project_id={project_id}", self.base_url))?;
        log::debug!("Fetched {} task(s)", tasks.len());
        Ok(tasks)
    }

    /// Look up the ID of the project named exactly `name`
    pub fn resolve_project_id(&self, name: &str) -> Result<i64> {
        log::info!("Looking up project ID for project: {name}");

        let projects = self.projects()?;
        find_project_id(&projects, name).ok_or_else(|| Error::ProjectNotFound(name.to_string()))
    }

    fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        log::debug!("GET {url}");

        let response = self.http.get(url).bearer_auth(&self.token).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status {
                url: url.to_string(),
                status,
            });
        }

        Ok(response.json()?)
    }
}
