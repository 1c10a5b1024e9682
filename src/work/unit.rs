use super::status::{Priority, Status};
use crate::calendar::Calendar;
use crate::error::{Result, TrackerError};
use chrono::NaiveDate;

/// Fields shared by every work unit
///
/// Title and description are fixed at construction. Status changes only
/// through [`Unit::change_status`]; the deadline moves only when a caller
/// or a recurrence reschedule sets it.
#[derive(Debug, Clone, PartialEq)]
pub struct Unit {
    title: String,
    description: String,
    deadline: NaiveDate,
    status: Status,
}

impl Unit {
    /// Create a unit in `Todo` status
    ///
    /// # Errors
    /// [`TrackerError::EmptyTitle`] when the title is blank.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        deadline: NaiveDate,
    ) -> Result<Self> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(TrackerError::EmptyTitle);
        }
        Ok(Self {
            title,
            description: description.into(),
            deadline,
            status: Status::default(),
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn deadline(&self) -> NaiveDate {
        self.deadline
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn set_deadline(&mut self, deadline: NaiveDate) {
        self.deadline = deadline;
    }

    /// Overwrite the status; every status is reachable from every other
    pub fn change_status(&mut self, status: Status) {
        self.status = status;
    }

    /// Deadline component of the score
    ///
    /// Passed deadlines have a negative day count and land in the most
    /// urgent bucket.
    pub fn time_score(&self, calendar: &dyn Calendar) -> f64 {
        let days = calendar.days_between(calendar.today(), self.deadline);
        if days <= 7 {
            1.0
        } else if days <= 31 {
            2.0
        } else {
            3.0
        }
    }

    /// Mean of the deadline and status components, in `[1.0, 3.0]`
    pub fn base_score(&self, calendar: &dyn Calendar) -> f64 {
        (self.time_score(calendar) + self.status.score()) / 2.0
    }

    pub fn summary(&self) -> String {
        format!(
            "{} with the description \"{}\" is due by {}. The current status is {}.",
            self.title, self.description, self.deadline, self.status
        )
    }
}

/// Common capability of projects, tasks and plain units
///
/// Scores are never stored: every call recomputes from the current status,
/// deadline and (for projects) task list.
pub trait WorkUnit {
    fn unit(&self) -> &Unit;

    fn unit_mut(&mut self) -> &mut Unit;

    /// Urgency score in `[1.0, 3.0]`, lower is more urgent
    fn prioritize(&self, calendar: &dyn Calendar) -> Result<f64>;

    fn summary(&self) -> String;

    fn title(&self) -> &str {
        self.unit().title()
    }

    fn description(&self) -> &str {
        self.unit().description()
    }

    fn deadline(&self) -> NaiveDate {
        self.unit().deadline()
    }

    fn status(&self) -> Status {
        self.unit().status()
    }

    fn change_status(&mut self, status: Status) {
        self.unit_mut().change_status(status);
    }

    /// Priority bucket of the current score
    fn priority(&self, calendar: &dyn Calendar) -> Result<Priority> {
        Priority::from_score(self.prioritize(calendar)?)
    }
}

impl WorkUnit for Unit {
    fn unit(&self) -> &Unit {
        self
    }

    fn unit_mut(&mut self) -> &mut Unit {
        self
    }

    fn prioritize(&self, calendar: &dyn Calendar) -> Result<f64> {
        Ok(self.base_score(calendar))
    }

    fn summary(&self) -> String {
        Unit::summary(self)
    }
}
