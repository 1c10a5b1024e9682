//! Date arithmetic used by scoring and recurrence checks
//!
//! Every computation that depends on "today" goes through a [`Calendar`] so
//! that scores and reminders can be evaluated against a pinned date.

use chrono::{Days, Local, NaiveDate};

/// Get the current date in local timezone
pub fn local_date_today() -> NaiveDate {
    Local::now().date_naive()
}

/// Calendar capability consumed by the scoring engine
///
/// Only [`Calendar::today`] must be provided; the arithmetic helpers have
/// day-granularity defaults built on chrono.
pub trait Calendar {
    /// The date every relative computation is anchored to
    fn today(&self) -> NaiveDate;

    /// Signed number of days from `a` to `b` (`b - a`)
    fn days_between(&self, a: NaiveDate, b: NaiveDate) -> i64 {
        (b - a).num_days()
    }

    /// True when `a` is strictly after `b`
    fn is_after(&self, a: NaiveDate, b: NaiveDate) -> bool {
        a > b
    }

    /// True when `a` is strictly before `b`
    fn is_before(&self, a: NaiveDate, b: NaiveDate) -> bool {
        a < b
    }

    /// `date` moved forward by `days`, `None` past the last representable date
    fn plus_days(&self, date: NaiveDate, days: u64) -> Option<NaiveDate> {
        date.checked_add_days(Days::new(days))
    }

    /// `date` moved back by `days`, `None` before the first representable date
    fn minus_days(&self, date: NaiveDate, days: u64) -> Option<NaiveDate> {
        date.checked_sub_days(Days::new(days))
    }
}

/// Calendar backed by the local system clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemCalendar;

impl Calendar for SystemCalendar {
    fn today(&self) -> NaiveDate {
        local_date_today()
    }
}

/// Calendar pinned to a single date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedCalendar {
    today: NaiveDate,
}

impl FixedCalendar {
    pub fn new(today: NaiveDate) -> Self {
        Self { today }
    }
}

impl Calendar for FixedCalendar {
    fn today(&self) -> NaiveDate {
        self.today
    }
}
