//! Data models for countdown cycles.
//!
//! This module contains the core domain types that represent one countdown
//! attempt in the Pomo timer. Display implementations for these models live
//! in [`crate::display::models`] to keep data structures separate from
//! presentation logic.
//!
//! A [`Cycle`] is created by the user, runs until its duration elapses or the
//! user interrupts it, and then becomes terminal forever. The session history
//! is append-only; cycles are never removed or reordered, and everything is
//! discarded when the process ends.

pub mod cycle;
pub mod status;


// Re-export all public types at the models level
pub use cycle::{Cycle, CycleId};
pub use status::CycleStatus;
