//! Status enumeration for countdown cycles.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of cycle statuses.
///
/// The status is derived from the cycle's terminal dates rather than stored:
/// a cycle with neither date is running, and at most one of the two dates is
/// ever set.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CycleStatus {
    /// Cycle is counting down
    Running,

    /// Countdown naturally reached zero
    Finished,

    /// User stopped the cycle before completion
    Interrupted,
}

impl FromStr for CycleStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "running" => Ok(CycleStatus::Running),
            "finished" => Ok(CycleStatus::Finished),
            "interrupted" => Ok(CycleStatus::Interrupted),
            _ => Err(format!("Invalid cycle status: {s}")),
        }
    }
}

impl CycleStatus {
    /// Convert to lowercase string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            CycleStatus::Running => "running",
            CycleStatus::Finished => "finished",
            CycleStatus::Interrupted => "interrupted",
        }
    }

    /// Get status with consistent icon formatting for display.
    ///
    /// Returns a formatted string that includes both an icon and the status
    /// name, used across all display contexts.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pomo_core::models::CycleStatus;
    ///
    /// assert_eq!(CycleStatus::Finished.with_icon(), "✓ Finished");
    /// assert_eq!(CycleStatus::Running.with_icon(), "➤ Running");
    /// assert_eq!(CycleStatus::Interrupted.with_icon(), "✗ Interrupted");
    /// ```
    pub fn with_icon(&self) -> &'static str {
        match self {
            CycleStatus::Finished => "✓ Finished",
            CycleStatus::Running => "➤ Running",
            CycleStatus::Interrupted => "✗ Interrupted",
        }
    }
}
