//! Worktrack Library
//!
//! This library scores personal tasks and projects by urgency, rolls up
//! progress across a project's tasks, and keeps recurring tasks on schedule.
//!
//! # Architecture
//!
//! The library is organised in three layers:
//! - **Capabilities**: `calendar` (what day it is, date arithmetic) and
//!   `notify` (where reminder and reschedule messages go)
//! - **Domain Layer**: `work` module - Status, Priority, tasks and projects
//!   with their scoring rules; `manager` - todo views across projects
//! - **Input/Output Layer**: `plan` and `config` - read-only TOML loaders;
//!   `report` - the line-oriented reports printed by the command line tool
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use worktrack::{FixedCalendar, Manager, Priority, Project, Status, Task, WorkUnit};
//!
//! # fn main() -> worktrack::Result<()> {
//! let date = |m, d| NaiveDate::from_ymd_opt(2024, m, d).unwrap();
//! let calendar = FixedCalendar::new(date(6, 10));
//!
//! let mut website = Project::new("Website", "Build a website", date(12, 31))?;
//! website.add_task(
//!     Task::single("Frontend", "Pages and styles", date(6, 14))?
//!         .with_steps(["HTML", "CSS"])
//!         .with_estimated_time(30)
//!         .with_status(Status::Doing),
//! )?;
//!
//! assert_eq!(website.priority(&calendar)?, Priority::High);
//!
//! let manager = Manager::new([&website]);
//! assert_eq!(manager.priority_todo(&calendar).len(), 1);
//! # Ok(())
//! # }
//! ```

pub mod calendar;
pub mod config;
pub mod error;
pub mod manager;
pub mod notify;
pub mod plan;
pub mod report;
pub mod work;

// Re-export commonly used types
pub use calendar::{Calendar, FixedCalendar, SystemCalendar, local_date_today};
pub use config::TrackerConfig;
pub use error::{Result, TrackerError};
pub use manager::Manager;
pub use notify::{LogNotifier, Notifier, RecordingNotifier};
pub use work::{Priority, Project, Status, Task, TaskKind, Unit, WorkUnit};
