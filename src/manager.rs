//! Todo views across projects
//!
//! A [`Manager`] borrows projects for the duration of a query. Every view
//! is rebuilt from the projects on each call, so there is no cached todo
//! list to refresh.

use crate::calendar::Calendar;
use crate::error::{Result, TrackerError};
use crate::work::{Project, Status, Task, WorkUnit};

/// Upper bound (inclusive) of the urgent score band
pub const DEFAULT_PRIORITY_THRESHOLD: f64 = 1.5;

/// Todo views over a set of borrowed projects
pub struct Manager<'a> {
    projects: Vec<&'a Project>,
    threshold: f64,
}

impl<'a> Manager<'a> {
    pub fn new(projects: impl IntoIterator<Item = &'a Project>) -> Self {
        Self {
            projects: projects.into_iter().collect(),
            threshold: DEFAULT_PRIORITY_THRESHOLD,
        }
    }

    /// Use a different upper bound for the urgent band
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn projects(&self) -> &[&'a Project] {
        &self.projects
    }

    /// All tasks that are not done, in project then task order
    pub fn todo_list(&self) -> Vec<&'a Task> {
        self.projects
            .iter()
            .copied()
            .flat_map(|p| p.tasks())
            .filter(|t| t.status() != Status::Done)
            .collect()
    }

    /// The todo list ordered by score, most urgent first
    ///
    /// Tasks with equal scores keep their todo list order.
    pub fn sorted_todo(&self, calendar: &dyn Calendar) -> Vec<&'a Task> {
        let mut scored: Vec<(f64, &'a Task)> = self
            .todo_list()
            .into_iter()
            .map(|t| (t.score(calendar), t))
            .collect();
        scored.sort_by(|a, b| a.0.total_cmp(&b.0));
        scored.into_iter().map(|(_, t)| t).collect()
    }

    /// Todo tasks whose score is within the urgent band
    pub fn priority_todo(&self, calendar: &dyn Calendar) -> Vec<&'a Task> {
        let urgent: Vec<&'a Task> = self
            .todo_list()
            .into_iter()
            .filter(|t| t.score(calendar) <= self.threshold)
            .collect();
        tracing::debug!(
            count = urgent.len(),
            threshold = self.threshold,
            "collected urgent tasks"
        );
        urgent
    }

    /// Mean estimated time in minutes of the urgent tasks
    ///
    /// # Errors
    /// [`TrackerError::NoPriorityTasks`] when no task is in the urgent band.
    pub fn avg_time(&self, calendar: &dyn Calendar) -> Result<f64> {
        let urgent = self.priority_todo(calendar);
        if urgent.is_empty() {
            return Err(TrackerError::NoPriorityTasks);
        }
        let total: u64 = urgent.iter().map(|t| u64::from(t.estimated_time())).sum();
        Ok(total as f64 / urgent.len() as f64)
    }
}
