//! Report builders for the command line tool
//!
//! Each builder returns the report as lines; printing is left to the caller.

use crate::calendar::Calendar;
use crate::error::TrackerError;
use crate::manager::Manager;
use crate::notify::RecordingNotifier;
use crate::work::{Priority, Project, WorkUnit};

/// Every project and task summary with score and priority
pub fn summary_lines(projects: &[Project], calendar: &dyn Calendar) -> Vec<String> {
    let mut lines = Vec::new();
    for project in projects {
        lines.push(project.summary());
        let scored = project
            .prioritize(calendar)
            .and_then(|score| Ok((score, Priority::from_score(score)?)));
        match scored {
            Ok((score, priority)) => lines.push(format!("  Score: {:.3} ({})", score, priority)),
            Err(e) => lines.push(format!("  Score: n/a ({})", e)),
        }
        for task in project.tasks() {
            let priority = task
                .priority(calendar)
                .map(|p| p.to_string())
                .unwrap_or_else(|e| e.to_string());
            lines.push(format!("  - {}", task.summary()));
            lines.push(format!("    Score: {:.3} ({})", task.score(calendar), priority));
        }
        lines.push(String::new());
    }
    lines
}

/// Sorted todo list, urgent band and its average duration
pub fn todo_lines(manager: &Manager<'_>, calendar: &dyn Calendar) -> Vec<String> {
    let todo = manager.sorted_todo(calendar);
    let mut lines = vec![format!("Todo ({} task(s)):", todo.len())];
    for task in &todo {
        lines.push(format!(
            "- {} [{}] due {} (score {:.3})",
            task.title(),
            task.status().label(),
            task.deadline(),
            task.score(calendar)
        ));
    }

    let urgent: Vec<&str> = manager
        .priority_todo(calendar)
        .into_iter()
        .map(|t| t.title())
        .collect();
    lines.push(String::new());
    lines.push(format!(
        "Urgent (score <= {}): {}",
        manager.threshold(),
        urgent.join(", ")
    ));
    lines.push(match manager.avg_time(calendar) {
        Ok(avg) => format!("Average estimated time of urgent tasks: {:.1} minutes", avg),
        Err(TrackerError::NoPriorityTasks) => "No urgent tasks right now".to_string(),
        Err(e) => format!("Average estimated time unavailable: {}", e),
    });
    lines
}

/// Outcome of running the recurrence check over several projects
#[derive(Debug, Clone, PartialEq)]
pub struct CheckReport {
    /// Notifications, followed by next deadlines when the check completed
    pub lines: Vec<String>,
    /// The error that aborted the check, if any
    pub error: Option<TrackerError>,
}

/// Run `check_tasks` on every project in order, stopping at the first error
///
/// Notifications sent before an abort are still reported. Next deadlines
/// of recurring tasks are listed only when every project was checked.
pub fn check_report(projects: &mut [Project], calendar: &dyn Calendar) -> CheckReport {
    let mut notifier = RecordingNotifier::new();
    let outcome = projects
        .iter_mut()
        .try_for_each(|project| project.check_tasks(calendar, &mut notifier));
    let mut lines = notifier.drain();
    if let Err(error) = outcome {
        return CheckReport {
            lines,
            error: Some(error),
        };
    }
    for project in projects.iter() {
        for task in project.tasks().iter().filter(|t| t.frequency().is_some()) {
            lines.push(format!("{}: next deadline {}", task.title(), task.deadline()));
        }
    }
    CheckReport { lines, error: None }
}
