//! Display formatting for cycles and the session history.
//!
//! Domain models carry no presentation logic of their own beyond a direct
//! [`std::fmt::Display`] implementation (in [`models`]); contextual formatting
//! lives in newtype wrappers so the same data can render differently in a
//! one-line history entry versus a full end-of-cycle summary. All formatters
//! produce markdown for the terminal renderer.
//!
//! ## Module Organization
//!
//! - [`models`]: Display implementations for domain models
//! - [`collections`]: the [`SessionHistory`] list wrapper
//! - [`datetime`]: date/time formatting utilities

pub mod collections;
pub mod datetime;
pub mod models;

// Re-export commonly used types for convenience
pub use collections::SessionHistory;
pub use datetime::{LocalDateTime, LocalTime};
