//! Derived countdown values and tick outcomes.
//!
//! Everything in this module is a pure function of the store state: the
//! remaining seconds, the `MM:SS` clock, and the four digit cells are
//! recomputed on every render and never stored, so the displayed time cannot
//! diverge from the recorded one.

use std::fmt;

/// Outcome of one per-second tick of the active cycle.
///
/// The tick state machine: **Idle** (no live cycle) transitions to
/// **Running** when a cycle is created; each tick either stays **Running**
/// with an updated elapsed count or reaches **Finished** when elapsed time
/// meets the cycle's total. Finished is terminal for that cycle; only a new
/// cycle re-enters Running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// No live cycle; the tick was a no-op
    Idle,
    /// The cycle keeps counting down
    Running {
        /// Seconds remaining until completion
        current_seconds: u32,
    },
    /// Elapsed time reached the cycle's duration; the cycle is now finished
    /// and the caller should stop the recurring trigger
    Finished,
}

/// Snapshot of the countdown for rendering.
///
/// `seconds_passed` is always within `[0, total_seconds]`; the store clamps
/// overshoot from timer drift before handing the snapshot out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    /// Total length of the active cycle in seconds (0 when idle)
    pub total_seconds: u32,
    /// Whole seconds elapsed since the cycle started
    pub seconds_passed: u32,
}

impl Countdown {
    /// An idle countdown with nothing to show.
    pub const IDLE: Countdown = Countdown {
        total_seconds: 0,
        seconds_passed: 0,
    };

    /// Seconds remaining on the clock. Never negative.
    pub fn current_seconds(&self) -> u32 {
        self.total_seconds.saturating_sub(self.seconds_passed)
    }

    /// The remaining time as a minutes/seconds pair.
    pub fn clock(&self) -> ClockTime {
        ClockTime::from_seconds(self.current_seconds())
    }
}

/// A minutes/seconds pair for the clock face.
///
/// Formats as `MM:SS` with both components zero-padded to two digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockTime {
    pub minutes: u32,
    pub seconds: u32,
}

impl ClockTime {
    /// Split a whole-second count into minutes and seconds.
    pub fn from_seconds(total: u32) -> Self {
        Self {
            minutes: total / 60,
            seconds: total % 60,
        }
    }

    /// The four single-digit display cells: tens and units of minutes, then
    /// tens and units of seconds. The separator between the pairs is the
    /// renderer's concern.
    pub fn digits(&self) -> [char; 4] {
        let digit = |n: u32| char::from_digit(n % 10, 10).unwrap_or('0');
        [
            digit(self.minutes / 10),
            digit(self.minutes),
            digit(self.seconds / 10),
            digit(self.seconds),
        ]
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.minutes, self.seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_time_formatting() {
        assert_eq!(ClockTime::from_seconds(0).to_string(), "00:00");
        assert_eq!(ClockTime::from_seconds(59).to_string(), "00:59");
        assert_eq!(ClockTime::from_seconds(60).to_string(), "01:00");
        assert_eq!(ClockTime::from_seconds(25 * 60).to_string(), "25:00");
        assert_eq!(ClockTime::from_seconds(24 * 60 + 50).to_string(), "24:50");
    }

    #[test]
    fn test_clock_time_digits() {
        assert_eq!(ClockTime::from_seconds(25 * 60).digits(), ['2', '5', '0', '0']);
        assert_eq!(ClockTime::from_seconds(5 * 60).digits(), ['0', '5', '0', '0']);
        assert_eq!(ClockTime::from_seconds(9).digits(), ['0', '0', '0', '9']);
    }

    #[test]
    fn test_countdown_current_seconds_clamps() {
        // Overshoot never produces a negative remainder.
        let countdown = Countdown {
            total_seconds: 300,
            seconds_passed: 300,
        };
        assert_eq!(countdown.current_seconds(), 0);
    }

    #[test]
    fn test_idle_countdown_is_zero() {
        assert_eq!(Countdown::IDLE.current_seconds(), 0);
        assert_eq!(Countdown::IDLE.clock().to_string(), "00:00");
    }
}
