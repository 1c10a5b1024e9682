use crate::error::{Result, TrackerError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Progress state of a work unit
///
/// Urgency order for scoring is `Doing` < `Todo` < `Done`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// Not started yet
    #[default]
    Todo,
    /// Work in progress
    Doing,
    /// Completed
    Done,
}

impl Status {
    /// Human-readable label shown in reports
    pub fn label(&self) -> &'static str {
        match self {
            Status::Todo => "Not started",
            Status::Doing => "In progress",
            Status::Done => "Done",
        }
    }

    /// Status component of the base score
    pub(crate) fn score(&self) -> f64 {
        match self {
            Status::Doing => 1.0,
            Status::Todo => 2.0,
            Status::Done => 3.0,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Status::Todo => "TODO",
            Status::Doing => "DOING",
            Status::Done => "DONE",
        };
        f.write_str(name)
    }
}

impl FromStr for Status {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "todo" => Ok(Status::Todo),
            "doing" => Ok(Status::Doing),
            "done" => Ok(Status::Done),
            _ => Err(format!(
                "Invalid status '{}'. Valid options are: todo, doing, done",
                s
            )),
        }
    }
}

/// Priority bucket derived from a score in `[1.0, 3.0]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    /// Map a score to its bucket by truncating to the integer part
    ///
    /// # Errors
    /// [`TrackerError::InvalidScore`] when the integer part is not 1, 2 or 3.
    pub fn from_score(score: f64) -> Result<Self> {
        let bucket = score.floor();
        if bucket == 1.0 {
            Ok(Priority::High)
        } else if bucket == 2.0 {
            Ok(Priority::Medium)
        } else if bucket == 3.0 {
            Ok(Priority::Low)
        } else {
            Err(TrackerError::InvalidScore { score })
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Priority::High => "HIGH",
            Priority::Medium => "MEDIUM",
            Priority::Low => "LOW",
        };
        f.write_str(name)
    }
}
