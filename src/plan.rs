//! Read-only TOML plan loader
//!
//! A plan file lists projects and their tasks. Entries are converted through
//! the public constructors so every invariant is checked while loading:
//!
//! ```toml
//! [[projects]]
//! title = "Website"
//! deadline = "2025-01-01"
//!
//! [[projects.tasks]]
//! title = "Frontend"
//! deadline = "2024-06-20"
//! status = "doing"
//! steps = ["HTML", "CSS"]
//! estimated_time = 30
//!
//! [[projects.tasks]]
//! title = "Backup"
//! deadline = "2024-06-01"
//! frequency = 7
//! ```

use crate::error::Result as TrackerResult;
use crate::work::{Project, Status, Task};
use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Top-level plan document
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlanFile {
    #[serde(default)]
    pub projects: Vec<ProjectEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectEntry {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub deadline: NaiveDate,
    #[serde(default)]
    pub status: Status,
    #[serde(default)]
    pub tasks: Vec<TaskEntry>,
}

/// A task entry; `frequency` present makes it a recurring task
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskEntry {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub deadline: NaiveDate,
    #[serde(default)]
    pub status: Status,
    #[serde(default)]
    pub steps: Vec<String>,
    /// Minutes, 0 when unknown
    #[serde(default)]
    pub estimated_time: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency: Option<u32>,
}

impl TaskEntry {
    pub fn into_task(self) -> TrackerResult<Task> {
        let task = match self.frequency {
            Some(frequency) => {
                Task::recurring(self.title, self.description, self.deadline, frequency)?
            }
            None => Task::single(self.title, self.description, self.deadline)?,
        };
        Ok(task
            .with_steps(self.steps)
            .with_estimated_time(self.estimated_time)
            .with_status(self.status))
    }
}

impl ProjectEntry {
    pub fn into_project(self) -> Result<Project> {
        let title = self.title.clone();
        let mut project = Project::new(self.title, self.description, self.deadline)
            .with_context(|| format!("Invalid project '{}'", title))?
            .with_status(self.status);
        for (index, entry) in self.tasks.into_iter().enumerate() {
            let task = entry
                .into_task()
                .with_context(|| format!("Invalid task #{} in project '{}'", index + 1, title))?;
            project
                .add_task(task)
                .with_context(|| format!("Cannot add task to project '{}'", title))?;
        }
        Ok(project)
    }
}

impl PlanFile {
    pub fn into_projects(self) -> Result<Vec<Project>> {
        self.projects
            .into_iter()
            .map(ProjectEntry::into_project)
            .collect()
    }
}

/// Parse a plan document into validated projects
pub fn parse_plan(content: &str) -> Result<Vec<Project>> {
    let plan: PlanFile = toml::from_str(content).context("Malformed plan file")?;
    plan.into_projects()
}

/// Load and validate a plan file
pub fn load_plan(path: impl AsRef<Path>) -> Result<Vec<Project>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read plan file {}", path.display()))?;
    let projects = parse_plan(&content)
        .with_context(|| format!("Failed to load plan file {}", path.display()))?;
    tracing::debug!(
        path = %path.display(),
        projects = projects.len(),
        "plan loaded"
    );
    Ok(projects)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TrackerError;
    use crate::work::{TaskKind, WorkUnit};

    #[test]
    fn test_parse_plan_builds_projects_and_tasks() {
        let toml_str = r#"
    [[projects]]
    title = "Website"
    description = "Build a nice website"
    deadline = "2025-01-01"

    [[projects.tasks]]
    title = "Frontend"
    deadline = "2024-06-20"
    status = "doing"
    steps = ["HTML", "CSS", "JS"]
    estimated_time = 30

    [[projects.tasks]]
    title = "Backup"
    deadline = "2024-06-01"
    frequency = 7
    "#;

        let projects = parse_plan(toml_str).unwrap();
        assert_eq!(projects.len(), 1);

        let website = &projects[0];
        assert_eq!(website.title(), "Website");
        assert_eq!(website.status(), Status::Todo);
        assert_eq!(website.tasks().len(), 2);

        let frontend = &website.tasks()[0];
        assert_eq!(frontend.status(), Status::Doing);
        assert_eq!(frontend.steps(), ["HTML", "CSS", "JS"]);
        assert_eq!(frontend.estimated_time(), 30);
        assert_eq!(frontend.kind(), TaskKind::Single);

        let backup = &website.tasks()[1];
        assert_eq!(backup.kind(), TaskKind::Recurring { frequency: 7 });
        assert_eq!(backup.description(), "");
    }

    #[test]
    fn test_parse_plan_rejects_task_after_project_deadline() {
        let toml_str = r#"
    [[projects]]
    title = "Short"
    deadline = "2024-06-01"

    [[projects.tasks]]
    title = "Too late"
    deadline = "2024-06-02"
    "#;

        let err = parse_plan(toml_str).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<TrackerError>(),
            Some(TrackerError::DeadlineOrder { .. })
        ));
        assert!(format!("{:#}", err).contains("project 'Short'"));
    }

    #[test]
    fn test_parse_plan_rejects_zero_frequency() {
        let toml_str = r#"
    [[projects]]
    title = "Chores"
    deadline = "2024-06-01"

    [[projects.tasks]]
    title = "Laundry"
    deadline = "2024-06-01"
    frequency = 0
    "#;

        let err = parse_plan(toml_str).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<TrackerError>(),
            Some(TrackerError::InvalidFrequency { .. })
        ));
    }

    #[test]
    fn test_parse_plan_rejects_frequency_past_date_range() {
        let toml_str = r#"
    [[projects]]
    title = "Chores"
    deadline = "2024-06-01"

    [[projects.tasks]]
    title = "Yearly-ish"
    deadline = "2024-06-01"
    frequency = 4000000000
    "#;

        let err = parse_plan(toml_str).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<TrackerError>(),
            Some(TrackerError::InvalidFrequency { .. })
        ));
    }

    #[test]
    fn test_parse_plan_rejects_bad_status() {
        let toml_str = r#"
    [[projects]]
    title = "Chores"
    deadline = "2024-06-01"
    status = "blocked"
    "#;

        assert!(parse_plan(toml_str).is_err());
    }

    #[test]
    fn test_parse_empty_plan() {
        assert!(parse_plan("").unwrap().is_empty());
    }
}
