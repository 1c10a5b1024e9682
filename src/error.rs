use chrono::NaiveDate;

/// Errors raised by scoring, aggregation and recurrence checks
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TrackerError {
    /// A score fell outside the HIGH/MEDIUM/LOW buckets
    #[error("Invalid score {score}: expected a value whose integer part is 1, 2 or 3")]
    InvalidScore { score: f64 },

    #[error(
        "Task '{task}' is due {task_deadline}, after the project deadline {project_deadline}"
    )]
    DeadlineOrder {
        task: String,
        task_deadline: NaiveDate,
        project_deadline: NaiveDate,
    },

    #[error("Project '{project}' has no tasks")]
    EmptyProject { project: String },

    #[error("No tasks in the urgent band")]
    NoPriorityTasks,

    /// A recurring task missed its deadline and the following grace window
    #[error(
        "Recurring task '{task}' was due {deadline} and its grace window ended {grace_end}"
    )]
    OverdueRecurrence {
        task: String,
        deadline: NaiveDate,
        grace_end: NaiveDate,
    },

    #[error("Title cannot be empty")]
    EmptyTitle,

    #[error("Recurring task '{task}' needs a frequency of at least one day")]
    InvalidFrequency { task: String },
}

pub type Result<T> = std::result::Result<T, TrackerError>;
