//! Terminal rendering module for countdown and summary output
//!
//! Two rendering concerns live here: the per-second countdown line (four
//! digit cells redrawn in place, plus the terminal-title mirror) and the rich
//! markdown summaries rendered through termimad, with a plain-text fallback
//! when colors are disabled.

use std::io::{self, Write};

use anyhow::Result;
use termimad::{crossterm::style::Color, MadSkin};

use pomo_core::ClockTime;

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    /// Create a new terminal renderer
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();

        // Tomato-leaning skin for the summaries
        skin.set_headers_fg(Color::Red);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Magenta);
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self { rich_enabled, skin }
    }

    /// Render markdown text to the terminal
    pub fn render(&self, markdown: &str) -> Result<()> {
        if self.rich_enabled {
            for line in markdown.lines() {
                if line.starts_with('#') {
                    println!("\x1b[31m{line}\x1b[0m");
                } else {
                    self.skin.print_inline(line);
                    println!();
                }
            }
        } else {
            print!("{markdown}");
        }
        Ok(())
    }

    /// Redraw the countdown line in place: tens/units of minutes, a
    /// separator, tens/units of seconds.
    pub fn countdown_line(&self, clock: ClockTime) -> Result<()> {
        let [m10, m1, s10, s1] = clock.digits();
        let mut stdout = io::stdout();
        if self.rich_enabled {
            write!(stdout, "\r  \x1b[1;31m{m10} {m1}\x1b[0m : \x1b[1;31m{s10} {s1}\x1b[0m  ")?;
        } else {
            write!(stdout, "\r  {m10} {m1} : {s10} {s1}  ")?;
        }
        stdout.flush()?;
        Ok(())
    }

    /// Mirror the remaining time into the terminal window title (OSC 0).
    pub fn set_title(&self, title: &str) -> Result<()> {
        let mut stdout = io::stdout();
        write!(stdout, "\x1b]0;{title}\x07")?;
        stdout.flush()?;
        Ok(())
    }

    /// Restore an empty title once no cycle is running.
    pub fn reset_title(&self) -> Result<()> {
        self.set_title("")
    }

    /// Ring the terminal bell and move off the countdown line.
    pub fn finish_countdown(&self) -> Result<()> {
        let mut stdout = io::stdout();
        writeln!(stdout, "\x07")?;
        stdout.flush()?;
        Ok(())
    }

    /// Move off the countdown line without the bell (interrupt path).
    pub fn leave_countdown(&self) -> Result<()> {
        let mut stdout = io::stdout();
        writeln!(stdout)?;
        stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}
