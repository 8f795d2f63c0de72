//! The interactive countdown session.
//!
//! One session owns one [`CycleStore`] and runs cycles against it until the
//! user declines another: each cycle arms a one-second interval, redraws the
//! clock on every tick, mirrors the remaining time into the terminal title,
//! and listens for Ctrl-C to interrupt. Between cycles the session prompts
//! (on stderr, keeping stdout clean for reports) for the next task and
//! duration; an empty task or end of input ends the session. Because the
//! store lives across cycles, the history block can actually accumulate
//! entries within one sitting, and it renders once the session ends with
//! more than one cycle on record.
//!
//! The interval is a local of the countdown loop, so dropping out of the
//! loop disposes the recurring trigger before anything else runs; a session
//! can never leave a stray timer behind, and the next cycle arms a fresh
//! one. All store mutations happen here, on one logical thread of execution:
//! ticks and the interrupt signal are serialized through a single `select!`,
//! which is why the store needs no synchronization.

use std::{
    io::{self, BufRead, Write},
    time::Duration,
};

use anyhow::{Context, Result};
use jiff::Timestamp;
use log::info;
use pomo_core::{
    countdown::Tick,
    params::{CreateCycle, MAX_MINUTES, MIN_MINUTES},
    store::CycleStore,
    Cycle, SessionHistory,
};
use tokio::{
    signal,
    time::{self, MissedTickBehavior},
};

use crate::renderer::TerminalRenderer;

/// How a countdown ended.
enum Outcome {
    /// Remaining time reached zero
    Finished,
    /// The user pressed Ctrl-C
    Interrupted,
}

/// Runs countdown cycles against a store and renders them as they go.
pub struct Session<'a> {
    renderer: &'a TerminalRenderer,
    json: bool,
}

impl<'a> Session<'a> {
    /// Create a session that renders through the given renderer.
    pub fn new(renderer: &'a TerminalRenderer, json: bool) -> Self {
        Self { renderer, json }
    }

    /// Run the first cycle, then keep offering another until the user
    /// declines; render the session history once more than one cycle ran.
    pub async fn run(&self, store: &mut CycleStore, first: CreateCycle) -> Result<()> {
        let mut next = Some(first);
        while let Some(params) = next.take() {
            self.run_cycle(store, &params).await?;
            next = read_next_cycle(&mut io::stdin().lock(), &mut io::stderr())?;
        }

        if !self.json {
            if let Some(history) = history_report(store) {
                self.renderer.render(&history)?;
            }
        }
        Ok(())
    }

    /// Create one cycle and run it to completion or interruption.
    ///
    /// The first interval tick fires immediately, so the full duration is on
    /// screen before the first second elapses. Elapsed time is recomputed
    /// from wall-clock difference on every tick; missed ticks are skipped
    /// rather than burst, since each tick rederives the clock anyway.
    async fn run_cycle(&self, store: &mut CycleStore, params: &CreateCycle) -> Result<()> {
        let cycle = store.create_cycle(params, Timestamp::now());
        let task = cycle.task.clone();
        info!("Cycle started: {task} ({} minutes)", params.minutes_amount);

        let mut interval = time::interval(Duration::from_secs(1));
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

        let ctrl_c = signal::ctrl_c();
        tokio::pin!(ctrl_c);

        let outcome = loop {
            tokio::select! {
                _ = interval.tick() => {
                    match store.tick(Timestamp::now()) {
                        Tick::Running { .. } => {
                            let clock = store.countdown().clock();
                            self.renderer.countdown_line(clock)?;
                            self.renderer.set_title(&clock.to_string())?;
                        }
                        Tick::Finished => {
                            // Show the final 00:00 before leaving the loop.
                            self.renderer.countdown_line(store.countdown().clock())?;
                            break Outcome::Finished;
                        }
                        Tick::Idle => break Outcome::Interrupted,
                    }
                }
                result = &mut ctrl_c => {
                    result.context("Failed to listen for Ctrl-C")?;
                    store.interrupt_active_cycle(Timestamp::now());
                    break Outcome::Interrupted;
                }
            }
        };

        // The recurring trigger is gone before any report is rendered; the
        // next cycle, if any, arms a fresh one.
        drop(interval);

        match outcome {
            Outcome::Finished => {
                info!("Cycle finished: {task}");
                self.renderer.finish_countdown()?;
            }
            Outcome::Interrupted => {
                info!("Cycle interrupted: {task}");
                self.renderer.leave_countdown()?;
            }
        }
        self.renderer.reset_title()?;

        if let Some(cycle) = store.cycles().last() {
            let report = self.cycle_report(cycle)?;
            if self.json {
                println!("{report}");
            } else {
                self.renderer.render(&report)?;
            }
        }
        Ok(())
    }

    /// The end-of-cycle report: one JSON record or a markdown summary.
    fn cycle_report(&self, cycle: &Cycle) -> Result<String> {
        if self.json {
            serde_json::to_string(cycle).context("Failed to serialize cycle record")
        } else {
            Ok(cycle.to_string())
        }
    }
}

/// Prompt for the next cycle's task and duration.
///
/// An empty task or end of input ends the session. Invalid input (a
/// non-numeric duration or one that fails validation) prints the reason and
/// prompts again, mirroring the inline form errors of a rejected submission;
/// no cycle is created from a rejected entry.
fn read_next_cycle(
    input: &mut impl BufRead,
    prompt: &mut impl Write,
) -> Result<Option<CreateCycle>> {
    loop {
        write!(prompt, "Next task (leave empty to end the session): ")?;
        prompt.flush()?;
        let mut task = String::new();
        if input.read_line(&mut task)? == 0 {
            return Ok(None);
        }
        let task = task.trim();
        if task.is_empty() {
            return Ok(None);
        }

        write!(prompt, "Minutes ({MIN_MINUTES}-{MAX_MINUTES}): ")?;
        prompt.flush()?;
        let mut minutes = String::new();
        if input.read_line(&mut minutes)? == 0 {
            return Ok(None);
        }
        let Ok(minutes_amount) = minutes.trim().parse::<u32>() else {
            writeln!(prompt, "Enter a whole number of minutes.")?;
            continue;
        };

        let params = CreateCycle {
            task: task.to_string(),
            minutes_amount,
        };
        match params.validate() {
            Ok(()) => return Ok(Some(params)),
            Err(err) => {
                writeln!(prompt, "{err}")?;
                continue;
            }
        }
    }
}

/// The session history block, present only when more than one cycle ran.
fn history_report(store: &CycleStore) -> Option<String> {
    (store.cycles().len() > 1).then(|| SessionHistory(store.cycles()).to_string())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use jiff::{Timestamp, ToSpan};
    use serde_json::Value;

    use super::*;

    fn params(task: &str, minutes: u32) -> CreateCycle {
        CreateCycle {
            task: task.to_string(),
            minutes_amount: minutes,
        }
    }

    fn at(start: Timestamp, seconds: i64) -> Timestamp {
        start
            .checked_add(seconds.seconds())
            .expect("timestamp in range")
    }

    #[test]
    fn test_history_report_absent_for_single_cycle() {
        let mut store = CycleStore::new();
        store.create_cycle(&params("Write the report", 5), Timestamp::now());
        assert!(history_report(&store).is_none());
    }

    #[test]
    fn test_history_report_lists_both_cycles() {
        let mut store = CycleStore::new();
        let start = Timestamp::now();
        store.create_cycle(&params("Write the report", 5), start);
        store.tick(at(start, 300));

        let restart = at(start, 400);
        store.create_cycle(&params("Clear the inbox", 10), restart);
        store.interrupt_active_cycle(at(restart, 3));

        let history = history_report(&store).expect("two cycles ran");
        assert!(history.contains("# Session History"));
        assert!(history.contains("✓ Finished: Write the report (5 min)"));
        assert!(history.contains("✗ Interrupted: Clear the inbox (10 min)"));
    }

    #[test]
    fn test_read_next_cycle_empty_task_ends_session() {
        let mut prompt = Vec::new();
        let next = read_next_cycle(&mut Cursor::new("\n"), &mut prompt).unwrap();
        assert!(next.is_none());
    }

    #[test]
    fn test_read_next_cycle_end_of_input_ends_session() {
        let mut prompt = Vec::new();
        let next = read_next_cycle(&mut Cursor::new(""), &mut prompt).unwrap();
        assert!(next.is_none());
    }

    #[test]
    fn test_read_next_cycle_accepts_valid_input() {
        let mut prompt = Vec::new();
        let next = read_next_cycle(&mut Cursor::new("Review pull requests\n10\n"), &mut prompt)
            .unwrap()
            .expect("valid entry accepted");
        assert_eq!(next.task, "Review pull requests");
        assert_eq!(next.minutes_amount, 10);
    }

    #[test]
    fn test_read_next_cycle_reprompts_on_out_of_range_minutes() {
        let mut prompt = Vec::new();
        let next = read_next_cycle(&mut Cursor::new("Nap\n61\nNap\n25\n"), &mut prompt)
            .unwrap()
            .expect("second entry accepted");
        assert_eq!(next.minutes_amount, 25);

        let messages = String::from_utf8(prompt).unwrap();
        assert!(messages.contains("between 5 and 60"));
    }

    #[test]
    fn test_read_next_cycle_reprompts_on_non_numeric_minutes() {
        let mut prompt = Vec::new();
        let next = read_next_cycle(&mut Cursor::new("Nap\nsoon\nNap\n25\n"), &mut prompt)
            .unwrap()
            .expect("second entry accepted");
        assert_eq!(next.minutes_amount, 25);

        let messages = String::from_utf8(prompt).unwrap();
        assert!(messages.contains("whole number"));
    }

    #[test]
    fn test_json_report_shape_for_interrupted_cycle() {
        let mut store = CycleStore::new();
        let start = Timestamp::now();
        store.create_cycle(&params("Clear the inbox", 10), start);
        store.interrupt_active_cycle(at(start, 3));

        let renderer = TerminalRenderer::new(false);
        let session = Session::new(&renderer, true);
        let record = session
            .cycle_report(store.cycles().last().expect("one cycle"))
            .unwrap();

        let value: Value = serde_json::from_str(&record).unwrap();
        assert_eq!(value["task"], "Clear the inbox");
        assert_eq!(value["minutes_amount"], 10);
        assert!(value["id"].is_string());
        assert!(value["start_date"].is_string());
        assert!(value["interrupted_date"].is_string());
        // Mutually exclusive with the interrupt stamp, so absent entirely.
        assert!(value.get("finished_date").is_none());
    }
}
