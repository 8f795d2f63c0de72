//! Cycle model definition and related functionality.

use std::fmt;

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::CycleStatus;

/// Unique identifier for a cycle, derived from its creation time.
///
/// The token is the creation timestamp in milliseconds. When two cycles are
/// created within the same millisecond, the list position is appended to keep
/// tokens unique within a session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct CycleId(String);

impl CycleId {
    /// Derive an identifier from the creation timestamp and the cycle's
    /// position in the session history.
    pub(crate) fn derive(created: Timestamp, position: usize) -> Self {
        let millis = created.as_millisecond();
        if position == 0 {
            Self(millis.to_string())
        } else {
            Self(format!("{millis}-{position}"))
        }
    }

    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CycleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Represents one countdown attempt with a task name and duration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Cycle {
    /// Unique identifier for the cycle, assigned at creation
    pub id: CycleId,

    /// Non-empty text describing the activity
    pub task: String,

    /// Duration of the cycle in minutes, within [5, 60]
    pub minutes_amount: u32,

    /// Timestamp when the cycle was started (UTC)
    pub start_date: Timestamp,

    /// Set at most once, when the user interrupts this cycle
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interrupted_date: Option<Timestamp>,

    /// Set at most once, when the countdown naturally reaches zero
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finished_date: Option<Timestamp>,
}

impl Cycle {
    /// Total length of the countdown in whole seconds.
    pub fn total_seconds(&self) -> u32 {
        self.minutes_amount * 60
    }

    /// Whether the cycle has reached a terminal state.
    ///
    /// A terminal cycle never mutates again; `interrupted_date` and
    /// `finished_date` are mutually exclusive.
    pub fn is_terminal(&self) -> bool {
        self.interrupted_date.is_some() || self.finished_date.is_some()
    }

    /// Current status of the cycle.
    pub fn status(&self) -> CycleStatus {
        if self.finished_date.is_some() {
            CycleStatus::Finished
        } else if self.interrupted_date.is_some() {
            CycleStatus::Interrupted
        } else {
            CycleStatus::Running
        }
    }

    /// Timestamp at which the cycle reached its terminal state, if any.
    pub fn end_date(&self) -> Option<Timestamp> {
        self.finished_date.or(self.interrupted_date)
    }
}
