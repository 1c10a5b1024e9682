use super::status::Status;
use super::unit::{Unit, WorkUnit};
use crate::calendar::Calendar;
use crate::error::{Result, TrackerError};
use chrono::{Days, NaiveDate};

/// Days before the deadline at which a single task's reminder window opens
pub const REMINDER_LEAD_DAYS: u64 = 2;

/// What kind of task this is, with the fields only that kind carries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskKind {
    /// One-off task with a reminder window before its deadline
    Single,
    /// Task repeating every `frequency` days
    Recurring { frequency: u32 },
}

/// A unit of work with ordered steps and an estimated duration
#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    unit: Unit,
    steps: Vec<String>,
    /// Estimated duration in minutes; 0 means unknown
    estimated_time: u32,
    kind: TaskKind,
}

impl Task {
    /// Create a one-off task in `Todo` status with no steps
    pub fn single(
        title: impl Into<String>,
        description: impl Into<String>,
        deadline: NaiveDate,
    ) -> Result<Self> {
        Ok(Self {
            unit: Unit::new(title, description, deadline)?,
            steps: Vec::new(),
            estimated_time: 0,
            kind: TaskKind::Single,
        })
    }

    /// Create a task repeating every `frequency` days
    ///
    /// # Errors
    /// [`TrackerError::InvalidFrequency`] when `frequency` is zero or moves
    /// the deadline past the last representable date,
    /// [`TrackerError::EmptyTitle`] when the title is blank.
    pub fn recurring(
        title: impl Into<String>,
        description: impl Into<String>,
        deadline: NaiveDate,
        frequency: u32,
    ) -> Result<Self> {
        let unit = Unit::new(title, description, deadline)?;
        let next = deadline.checked_add_days(Days::new(u64::from(frequency)));
        if frequency == 0 || next.is_none() {
            return Err(TrackerError::InvalidFrequency {
                task: unit.title().to_string(),
            });
        }
        Ok(Self {
            unit,
            steps: Vec::new(),
            estimated_time: 0,
            kind: TaskKind::Recurring { frequency },
        })
    }

    /// Set the steps, in execution order
    pub fn with_steps<I, S>(mut self, steps: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.steps = steps.into_iter().map(Into::into).collect();
        self
    }

    /// Set the estimated duration in minutes
    pub fn with_estimated_time(mut self, minutes: u32) -> Self {
        self.estimated_time = minutes;
        self
    }

    pub fn with_status(mut self, status: Status) -> Self {
        self.unit.change_status(status);
        self
    }

    pub fn steps(&self) -> &[String] {
        &self.steps
    }

    pub fn estimated_time(&self) -> u32 {
        self.estimated_time
    }

    pub fn kind(&self) -> TaskKind {
        self.kind
    }

    /// Recurrence frequency in days, `None` for single tasks
    pub fn frequency(&self) -> Option<u32> {
        match self.kind {
            TaskKind::Recurring { frequency } => Some(frequency),
            TaskKind::Single => None,
        }
    }

    pub fn set_deadline(&mut self, deadline: NaiveDate) {
        self.unit.set_deadline(deadline);
    }

    /// Step-count component of the score
    ///
    /// More than 11 steps is most urgent and 5 to 10 is the middle bucket.
    /// Exactly 11 steps scores like a short list.
    pub fn step_score(&self) -> f64 {
        let count = self.steps.len();
        if count > 11 {
            1.0
        } else if (5..=10).contains(&count) {
            2.0
        } else {
            3.0
        }
    }

    /// Duration component of the score; unknown (0) counts as short
    pub fn duration_score(&self) -> f64 {
        match self.estimated_time {
            0..60 => 1.0,
            60..=180 => 2.0,
            _ => 3.0,
        }
    }

    /// Score of the task, in `[1.0, 3.0]`
    ///
    /// Equal-weight pairwise mean: the base deadline/status score averaged
    /// with the mean of the step and duration components.
    pub fn score(&self, calendar: &dyn Calendar) -> f64 {
        let unit_average = self.unit.base_score(calendar);
        let task_average = (self.step_score() + self.duration_score()) / 2.0;
        let score = (task_average + unit_average) / 2.0;
        tracing::trace!(
            task = self.unit.title(),
            unit_average,
            task_average,
            score,
            "scored task"
        );
        score
    }

    /// Days until the reminder window opens
    ///
    /// The window opens [`REMINDER_LEAD_DAYS`] before the deadline. Returns
    /// `Some(0)` once today is past the opening date and `None` for
    /// recurring tasks, which have no reminder.
    pub fn reminder(&self, calendar: &dyn Calendar) -> Option<i64> {
        match self.kind {
            TaskKind::Single => {
                let today = calendar.today();
                // a window opening before the first representable date is already open
                match calendar.minus_days(self.unit.deadline(), REMINDER_LEAD_DAYS) {
                    Some(remind_date) if !calendar.is_after(today, remind_date) => {
                        Some(calendar.days_between(today, remind_date))
                    }
                    _ => Some(0),
                }
            }
            TaskKind::Recurring { .. } => None,
        }
    }

    pub fn summary(&self) -> String {
        let mut summary = format!(
            "The task {} The steps are: {}",
            self.unit.summary(),
            self.steps.join(", ")
        );
        if self.estimated_time == 0 {
            summary.push_str(". The duration cannot be estimated yet.");
        } else {
            summary.push_str(&format!(
                ". It will take an estimated {} minutes.",
                self.estimated_time
            ));
        }
        summary
    }
}

impl WorkUnit for Task {
    fn unit(&self) -> &Unit {
        &self.unit
    }

    fn unit_mut(&mut self) -> &mut Unit {
        &mut self.unit
    }

    fn prioritize(&self, calendar: &dyn Calendar) -> Result<f64> {
        Ok(self.score(calendar))
    }

    fn summary(&self) -> String {
        Task::summary(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::FixedCalendar;
    use crate::work::Priority;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn steps(count: usize) -> Vec<String> {
        (1..=count).map(|i| format!("step {}", i)).collect()
    }

    fn task_with_steps(count: usize) -> Task {
        Task::single("Steps", "", date(2024, 6, 30))
            .unwrap()
            .with_steps(steps(count))
    }

    #[test]
    fn test_recurring_rejects_zero_frequency() {
        let err = Task::recurring("Laundry", "", date(2024, 6, 1), 0).unwrap_err();
        assert_eq!(
            err,
            TrackerError::InvalidFrequency {
                task: "Laundry".to_string()
            }
        );
    }

    #[test]
    fn test_recurring_rejects_frequency_past_date_range() {
        let err = Task::recurring("Yearly-ish", "", date(2024, 6, 1), u32::MAX).unwrap_err();
        assert_eq!(
            err,
            TrackerError::InvalidFrequency {
                task: "Yearly-ish".to_string()
            }
        );
        assert!(Task::recurring("Late", "", NaiveDate::MAX, 1).is_err());
    }

    #[test]
    fn test_reminder_near_first_representable_date() {
        let cal = FixedCalendar::new(NaiveDate::MIN);
        let task = Task::single("Ancient", "", NaiveDate::MIN).unwrap();
        assert_eq!(task.reminder(&cal), Some(0));
    }

    #[test]
    fn test_kind_and_frequency() {
        let single = Task::single("Buy car", "", date(2024, 6, 16)).unwrap();
        let recurring = Task::recurring("Shower", "", date(2024, 6, 1), 21).unwrap();
        assert_eq!(single.kind(), TaskKind::Single);
        assert_eq!(single.frequency(), None);
        assert_eq!(recurring.kind(), TaskKind::Recurring { frequency: 21 });
        assert_eq!(recurring.frequency(), Some(21));
    }

    #[test]
    fn test_step_score_boundaries() {
        assert_eq!(task_with_steps(0).step_score(), 3.0);
        assert_eq!(task_with_steps(4).step_score(), 3.0);
        assert_eq!(task_with_steps(5).step_score(), 2.0);
        assert_eq!(task_with_steps(10).step_score(), 2.0);
        assert_eq!(task_with_steps(12).step_score(), 1.0);
    }

    #[test]
    fn test_eleven_steps_scores_like_a_short_list() {
        assert_eq!(task_with_steps(11).step_score(), 3.0);
    }

    #[test]
    fn test_duration_score_boundaries() {
        let task = |minutes| task_with_steps(0).with_estimated_time(minutes);
        assert_eq!(task(0).duration_score(), 1.0);
        assert_eq!(task(59).duration_score(), 1.0);
        assert_eq!(task(60).duration_score(), 2.0);
        assert_eq!(task(180).duration_score(), 2.0);
        assert_eq!(task(181).duration_score(), 3.0);
    }

    #[test]
    fn test_empty_task_components() {
        let task = task_with_steps(0);
        assert_eq!(task.step_score(), 3.0);
        assert_eq!(task.duration_score(), 1.0);
    }

    #[test]
    fn test_score_combines_four_factors() {
        let cal = FixedCalendar::new(date(2024, 6, 10));
        // deadline within 7 days (1.0), doing (1.0), 12 steps (1.0), 30 min (1.0)
        let urgent = Task::single("Frontend", "", date(2024, 6, 15))
            .unwrap()
            .with_steps(steps(12))
            .with_estimated_time(30)
            .with_status(Status::Doing);
        assert_eq!(urgent.score(&cal), 1.0);
        assert_eq!(urgent.priority(&cal).unwrap(), Priority::High);

        // deadline far away (3.0), done (3.0), 0 steps (3.0), 240 min (3.0)
        let relaxed = Task::single("Archive", "", date(2025, 1, 1))
            .unwrap()
            .with_estimated_time(240)
            .with_status(Status::Done);
        assert_eq!(relaxed.score(&cal), 3.0);
        assert_eq!(relaxed.priority(&cal).unwrap(), Priority::Low);

        // unit average (2.0 + 2.0) / 2 = 2.0, task average (2.0 + 1.0) / 2 = 1.5
        let middle = Task::single("Middle", "", date(2024, 6, 25))
            .unwrap()
            .with_steps(steps(5));
        assert_eq!(middle.score(&cal), 1.75);
        assert_eq!(middle.prioritize(&cal).unwrap(), 1.75);
    }

    #[test]
    fn test_reminder_counts_days_until_window() {
        let cal = FixedCalendar::new(date(2024, 6, 10));
        let task = Task::single("Buy car", "", date(2024, 6, 16)).unwrap();
        // window opens 2024-06-14
        assert_eq!(task.reminder(&cal), Some(4));
    }

    #[test]
    fn test_reminder_on_opening_day_is_zero_days_away() {
        let cal = FixedCalendar::new(date(2024, 6, 14));
        let task = Task::single("Buy car", "", date(2024, 6, 16)).unwrap();
        assert_eq!(task.reminder(&cal), Some(0));
    }

    #[test]
    fn test_reminder_after_window_opened() {
        let cal = FixedCalendar::new(date(2024, 6, 10));
        let due_tomorrow = Task::single("Pay rent", "", date(2024, 6, 11)).unwrap();
        let overdue = Task::single("Call bank", "", date(2024, 5, 1)).unwrap();
        assert_eq!(due_tomorrow.reminder(&cal), Some(0));
        assert_eq!(overdue.reminder(&cal), Some(0));
    }

    #[test]
    fn test_recurring_task_has_no_reminder() {
        let cal = FixedCalendar::new(date(2024, 6, 10));
        let task = Task::recurring("Shower", "", date(2024, 6, 11), 21).unwrap();
        assert_eq!(task.reminder(&cal), None);
    }

    #[test]
    fn test_summary_with_steps_and_duration() {
        let task = Task::single("Buy car", "Find a nice car", date(2024, 6, 16))
            .unwrap()
            .with_steps(["Pick brand", "Pick model", "Buy"])
            .with_estimated_time(10);
        assert_eq!(
            task.summary(),
            "The task Buy car with the description \"Find a nice car\" is due by 2024-06-16. \
             The current status is TODO. The steps are: Pick brand, Pick model, Buy. \
             It will take an estimated 10 minutes."
        );
    }

    #[test]
    fn test_summary_with_unknown_duration() {
        let task = Task::single("Think", "", date(2024, 6, 16)).unwrap();
        assert!(
            task.summary()
                .ends_with("The steps are: . The duration cannot be estimated yet.")
        );
    }
}
