//! Project model

use serde::Deserialize;

/// A Todoist project
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Project {
    /// Project ID
    pub id: i64,

    /// Project name, matched case-sensitively
    pub name: String,
}

/// Find the ID of the first project named exactly `name`
#[must_use]
pub fn find_project_id(projects: &[Project], name: &str) -> Option<i64> {
    projects.iter().find(|p| p.name == name).map(|p| p.id)
}
