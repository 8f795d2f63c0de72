//! Collection wrapper types for list display.

use std::fmt;

use crate::models::Cycle;

/// Wrapper for displaying the session's cycle history as a markdown list.
///
/// Each entry is one line: position, status icon, task, and duration. The
/// newest cycle appears last, matching the append-only order of the store.
pub struct SessionHistory<'a>(pub &'a [Cycle]);

impl fmt::Display for SessionHistory<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No cycles this session.");
        }

        writeln!(f, "# Session History")?;
        writeln!(f)?;
        for (index, cycle) in self.0.iter().enumerate() {
            writeln!(
                f,
                "{}. {}: {} ({} min)",
                index + 1,
                cycle.status().with_icon(),
                cycle.task,
                cycle.minutes_amount
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;

    use super::*;
    use crate::models::CycleId;

    fn cycle(task: &str, minutes: u32) -> Cycle {
        Cycle {
            id: CycleId::derive(Timestamp::UNIX_EPOCH, 0),
            task: task.to_string(),
            minutes_amount: minutes,
            start_date: Timestamp::UNIX_EPOCH,
            interrupted_date: None,
            finished_date: None,
        }
    }

    #[test]
    fn test_empty_history() {
        let output = SessionHistory(&[]).to_string();
        assert!(output.contains("No cycles this session."));
    }

    #[test]
    fn test_history_lists_cycles_in_order() {
        let mut first = cycle("Write the report", 25);
        first.interrupted_date = Some(Timestamp::from_second(60).unwrap());
        let second = cycle("Review pull requests", 10);

        let cycles = vec![first, second];
        let output = SessionHistory(&cycles).to_string();
        assert!(output.contains("# Session History"));
        assert!(output.contains("1. ✗ Interrupted: Write the report (25 min)"));
        assert!(output.contains("2. ➤ Running: Review pull requests (10 min)"));
    }
}
