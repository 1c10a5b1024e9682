use super::status::Status;
use super::task::{Task, TaskKind};
use super::unit::{Unit, WorkUnit};
use crate::calendar::Calendar;
use crate::error::{Result, TrackerError};
use crate::notify::Notifier;
use chrono::NaiveDate;

/// A unit of work aggregating an ordered list of tasks
///
/// Every task is due on or before the project deadline at the moment it is
/// added. Progress and score are recomputed from the tasks on every call.
#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    unit: Unit,
    tasks: Vec<Task>,
}

impl Project {
    /// Create an empty project in `Todo` status
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        deadline: NaiveDate,
    ) -> Result<Self> {
        Ok(Self {
            unit: Unit::new(title, description, deadline)?,
            tasks: Vec::new(),
        })
    }

    pub fn with_status(mut self, status: Status) -> Self {
        self.unit.change_status(status);
        self
    }

    /// Append a task
    ///
    /// # Errors
    /// [`TrackerError::DeadlineOrder`] when the task is due after the
    /// project; the task is not added.
    pub fn add_task(&mut self, task: Task) -> Result<()> {
        if task.deadline() > self.unit.deadline() {
            return Err(TrackerError::DeadlineOrder {
                task: task.title().to_string(),
                task_deadline: task.deadline(),
                project_deadline: self.unit.deadline(),
            });
        }
        tracing::debug!(
            project = self.unit.title(),
            task = task.title(),
            "task added"
        );
        self.tasks.push(task);
        Ok(())
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn task_mut(&mut self, index: usize) -> Option<&mut Task> {
        self.tasks.get_mut(index)
    }

    pub fn set_deadline(&mut self, deadline: NaiveDate) {
        self.unit.set_deadline(deadline);
    }

    /// Number of tasks in `Done` status
    pub fn done_count(&self) -> usize {
        self.tasks
            .iter()
            .filter(|t| t.status() == Status::Done)
            .count()
    }

    /// Share of done tasks as a percentage in `[0.0, 100.0]`
    ///
    /// # Errors
    /// [`TrackerError::EmptyProject`] when there are no tasks.
    pub fn progress(&self) -> Result<f64> {
        if self.tasks.is_empty() {
            return Err(self.empty_error());
        }
        Ok(100.0 * self.done_count() as f64 / self.tasks.len() as f64)
    }

    /// Mean score of the tasks
    ///
    /// # Errors
    /// [`TrackerError::EmptyProject`] when there are no tasks.
    pub fn score(&self, calendar: &dyn Calendar) -> Result<f64> {
        if self.tasks.is_empty() {
            return Err(self.empty_error());
        }
        let sum: f64 = self.tasks.iter().map(|t| t.score(calendar)).sum();
        Ok(sum / self.tasks.len() as f64)
    }

    /// Apply reminder and recurrence policies to every task, in order
    ///
    /// Single tasks whose reminder window has opened produce a reminder.
    /// Recurring tasks past their deadline but still before
    /// `deadline + frequency` are moved forward by one period and produce a
    /// reschedule message.
    ///
    /// # Errors
    /// [`TrackerError::OverdueRecurrence`] as soon as a recurring task is
    /// past its grace window. Tasks after it are not checked; changes made
    /// to earlier tasks are kept. A recurring task whose next deadline would
    /// fall past the last representable date is left unchanged.
    pub fn check_tasks(
        &mut self,
        calendar: &dyn Calendar,
        notifier: &mut dyn Notifier,
    ) -> Result<()> {
        let today = calendar.today();
        for task in self.tasks.iter_mut() {
            match task.kind() {
                TaskKind::Single => {
                    if task.reminder(calendar) == Some(0) {
                        let message = format!("Reminder for single task '{}'!", task.title());
                        notifier.notify(&message);
                    }
                }
                TaskKind::Recurring { frequency } => {
                    let deadline = task.deadline();
                    if !calendar.is_after(today, deadline) {
                        continue;
                    }
                    // a grace end past the last representable date never closes,
                    // and there is no later deadline to move to
                    let Some(grace_end) = calendar.plus_days(deadline, u64::from(frequency))
                    else {
                        tracing::warn!(
                            task = task.title(),
                            %deadline,
                            frequency,
                            "recurring task cannot be rescheduled past the last representable date"
                        );
                        continue;
                    };
                    if !calendar.is_before(today, grace_end) {
                        tracing::warn!(
                            task = task.title(),
                            %deadline,
                            %grace_end,
                            "recurring task is past its grace window"
                        );
                        return Err(TrackerError::OverdueRecurrence {
                            task: task.title().to_string(),
                            deadline,
                            grace_end,
                        });
                    }
                    task.set_deadline(grace_end);
                    tracing::debug!(
                        task = task.title(),
                        old_deadline = %deadline,
                        new_deadline = %grace_end,
                        "rescheduled recurring task"
                    );
                    notifier.notify(&format!(
                        "Recurring task '{}' is overdue and was rescheduled to {}",
                        task.title(),
                        grace_end
                    ));
                }
            }
        }
        Ok(())
    }

    pub fn summary(&self) -> String {
        let progress = match self.progress() {
            Ok(progress) => format!("Currently {:.2}% are complete.", progress),
            Err(_) => "Progress is not available yet.".to_string(),
        };
        format!(
            "The project {} The project contains {} tasks. {}",
            self.unit.summary(),
            self.tasks.len(),
            progress
        )
    }

    fn empty_error(&self) -> TrackerError {
        TrackerError::EmptyProject {
            project: self.unit.title().to_string(),
        }
    }
}

impl WorkUnit for Project {
    fn unit(&self) -> &Unit {
        &self.unit
    }

    fn unit_mut(&mut self) -> &mut Unit {
        &mut self.unit
    }

    fn prioritize(&self, calendar: &dyn Calendar) -> Result<f64> {
        self.score(calendar)
    }

    fn summary(&self) -> String {
        Project::summary(self)
    }
}
