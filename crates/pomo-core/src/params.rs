//! Parameter structures for Pomo operations
//!
//! This module contains shared parameter structures that can be used across
//! different interfaces (CLI, future TUI, etc.) without framework-specific
//! derives or dependencies. Interface layers wrap these with their own
//! derives (clap, schema generators) and convert via `From`, keeping the core
//! free of UI framework concerns:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Cycle Store
//! ```
//!
//! Validation lives here, next to the parameters it guards: a cycle is only
//! ever created from parameters that passed [`CreateCycle::validate`], so the
//! store itself has no error paths.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TimerError};

/// Minimum accepted cycle duration in minutes.
pub const MIN_MINUTES: u32 = 5;

/// Maximum accepted cycle duration in minutes.
pub const MAX_MINUTES: u32 = 60;

/// Suggested duration increment. A form hint only; any integer within
/// [`MIN_MINUTES`, `MAX_MINUTES`] validates.
pub const MINUTES_STEP: u32 = 5;

/// Parameters for creating a new countdown cycle.
///
/// Used to start a cycle with a task description and a duration in minutes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateCycle {
    /// Text describing the activity (required, non-empty)
    pub task: String,
    /// Duration of the cycle in minutes, within [5, 60]
    pub minutes_amount: u32,
}

impl CreateCycle {
    /// Validate cycle creation parameters.
    ///
    /// Checks that the task text is non-empty (whitespace-only counts as
    /// empty) and that the duration falls within the accepted range. On
    /// failure, no cycle is created and the store is untouched.
    ///
    /// # Errors
    ///
    /// * `TimerError::InvalidInput` - When the task is empty
    /// * `TimerError::InvalidInput` - When the duration is outside [5, 60]
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pomo_core::params::CreateCycle;
    ///
    /// let params = CreateCycle {
    ///     task: "Plan the sprint".to_string(),
    ///     minutes_amount: 25,
    /// };
    /// assert!(params.validate().is_ok());
    ///
    /// let too_long = CreateCycle {
    ///     task: "Nap".to_string(),
    ///     minutes_amount: 61,
    /// };
    /// assert!(too_long.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<()> {
        if self.task.trim().is_empty() {
            return Err(TimerError::invalid_input("task")
                .with_reason("Task description must not be empty"));
        }

        if self.minutes_amount < MIN_MINUTES || self.minutes_amount > MAX_MINUTES {
            return Err(TimerError::invalid_input("minutes_amount").with_reason(format!(
                "Duration must be between {MIN_MINUTES} and {MAX_MINUTES} minutes, got {}",
                self.minutes_amount
            )));
        }

        Ok(())
    }
}
