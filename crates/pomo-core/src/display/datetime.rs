//! DateTime display utilities.
//!
//! Wrapper types that format UTC timestamps in the system timezone for
//! human-readable output. Cycle records store [`Timestamp`]s; these wrappers
//! are the only place they get rendered.

use std::fmt;

use jiff::{tz::TimeZone, Timestamp};

/// Formats a timestamp as a full local date and time: `YYYY-MM-DD HH:MM:SS TZ`.
pub struct LocalDateTime<'a>(pub &'a Timestamp);

impl fmt::Display for LocalDateTime<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.0
                .to_zoned(TimeZone::system())
                .strftime("%Y-%m-%d %H:%M:%S %Z")
        )
    }
}

/// Formats a timestamp as a local time of day: `HH:MM:SS`.
///
/// Used for the start/end stamps of a cycle summary, where the date is
/// obvious from context (the session runs within one sitting).
pub struct LocalTime<'a>(pub &'a Timestamp);

impl fmt::Display for LocalTime<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.0.to_zoned(TimeZone::system()).strftime("%H:%M:%S")
        )
    }
}
