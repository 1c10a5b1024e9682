//! Common test utilities for integration tests
#![allow(dead_code)]

use chrono::NaiveDate;
use worktrack::{FixedCalendar, Project, Status, Task};

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Calendar pinned to the given day
pub fn calendar_on(y: i32, m: u32, d: u32) -> FixedCalendar {
    FixedCalendar::new(date(y, m, d))
}

/// The recurring task used by the recurrence scenarios
pub fn shower() -> Task {
    Task::recurring("Shower", "Every three weeks", date(2024, 6, 1), 21)
        .unwrap()
        .with_steps(["Close game", "Turn on water", "Dodge the jet", "Back to game"])
        .with_estimated_time(1)
}

/// Household project: one single task and one recurring task
pub fn household() -> Project {
    let mut project = Project::new("Household", "Collection of chores", date(2025, 1, 1)).unwrap();
    project
        .add_task(
            Task::single("Buy car", "Buy a nice car", date(2024, 6, 16))
                .unwrap()
                .with_steps(["Pick brand", "Pick model", "Buy"])
                .with_estimated_time(10),
        )
        .unwrap();
    project.add_task(shower()).unwrap();
    project
}

/// Website project: two in-progress tasks with long step lists
pub fn website() -> Project {
    let mut project =
        Project::new("Website", "Build a nice website", date(2025, 1, 1)).unwrap();
    project
        .add_task(
            Task::single("Frontend", "Build a nice frontend", date(2024, 6, 20))
                .unwrap()
                .with_steps([
                    "HTML", "CSS", "JS", "div", "div", "div", "div", "div", "div", "div", "div",
                    "div",
                ])
                .with_estimated_time(30)
                .with_status(Status::Doing),
        )
        .unwrap();
    project
        .add_task(
            Task::single("Backend", "Build a working backend", date(2024, 8, 1))
                .unwrap()
                .with_steps((1..=12).map(|i| format!("step {}", i)))
                .with_estimated_time(10)
                .with_status(Status::Doing),
        )
        .unwrap();
    project
}
