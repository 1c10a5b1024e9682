//! Work unit domain model and scoring
//!
//! This module contains the core tracker types. It is split into submodules:
//! - `status`: Status and Priority enums
//! - `unit`: Shared unit fields, base scoring and the `WorkUnit` trait
//! - `task`: Tasks (single and recurring), granularity scoring and reminders
//! - `project`: Projects, progress, aggregate scoring and recurrence checks

mod project;
mod status;
mod task;
mod unit;

// Re-export all public types
pub use project::Project;
pub use status::{Priority, Status};
pub use task::{REMINDER_LEAD_DAYS, Task, TaskKind};
pub use unit::{Unit, WorkUnit};
