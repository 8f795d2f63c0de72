//! Core library for the Pomo countdown timer application.
//!
//! This crate provides the domain logic for running pomodoro-style countdown
//! cycles: the cycle store, the per-second tick state machine, parameter
//! validation, and derived display values. It has no terminal or async
//! dependencies; interface crates own the event loop and rendering.
//!
//! # Architecture
//!
//! - **Domain Models** ([`models`]): the [`Cycle`] record and its status
//! - **Cycle Store** ([`store`]): append-only session history plus the single
//!   active-cycle pointer, mutated only by user actions and ticks
//! - **Countdown** ([`countdown`]): derived clock values computed fresh from
//!   store state on every render, never cached
//! - **Display Wrappers** ([`display`]): contextual markdown formatting for
//!   cycle summaries and the session history
//!
//! All store operations take an explicit [`jiff::Timestamp`] so callers can
//! drive virtual time in tests; interactive callers pass `Timestamp::now()`.
//!
//! # Quick Start
//!
//! ```rust
//! use jiff::{Timestamp, ToSpan};
//! use pomo_core::{countdown::Tick, params::CreateCycle, store::CycleStore};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let params = CreateCycle {
//!     task: "Write the report".to_string(),
//!     minutes_amount: 25,
//! };
//! params.validate()?;
//!
//! let mut store = CycleStore::new();
//! let start = Timestamp::now();
//! store.create_cycle(&params, start);
//!
//! // Ten seconds later the countdown reads 24:50.
//! let tick = store.tick(start.checked_add(10.seconds())?);
//! assert!(matches!(tick, Tick::Running { .. }));
//! assert_eq!(store.countdown().clock().to_string(), "24:50");
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod countdown;
pub mod display;
pub mod error;
pub mod models;
pub mod params;
pub mod store;
pub mod suggestions;

// Re-export commonly used types
pub use countdown::{ClockTime, Countdown, Tick};
pub use display::{LocalDateTime, SessionHistory};
pub use error::{Result, TimerError};
pub use models::{Cycle, CycleId, CycleStatus};
pub use params::{CreateCycle, MAX_MINUTES, MINUTES_STEP, MIN_MINUTES};
pub use store::CycleStore;
pub use suggestions::{task_suggestions, TaskSuggestions};
