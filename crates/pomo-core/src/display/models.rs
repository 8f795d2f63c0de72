//! Display implementations for domain models.
//!
//! A [`Cycle`] formats as a markdown summary block: task heading, status with
//! icon, duration, and start/end stamps. This is the end-of-cycle report the
//! CLI renders once the countdown stops.

use std::fmt;

use crate::{
    display::datetime::{LocalDateTime, LocalTime},
    models::Cycle,
};

impl fmt::Display for Cycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", self.task)?;
        writeln!(f)?;
        writeln!(f, "- **Status**: {}", self.status().with_icon())?;
        writeln!(f, "- **Duration**: {} minutes", self.minutes_amount)?;
        writeln!(f, "- **Started**: {}", LocalDateTime(&self.start_date))?;
        if let Some(end) = self.end_date() {
            writeln!(f, "- **Ended**: {}", LocalTime(&end))?;
        }
        Ok(())
    }
}
