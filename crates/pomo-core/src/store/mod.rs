//! The cycle store: session history and the active-cycle pointer.
//!
//! [`CycleStore`] owns the append-only list of cycles and the identifier of
//! the cycle currently counting down. It is the single place where cycle
//! state mutates, and every mutation happens on the caller's thread: user
//! actions (create, interrupt) and the per-second tick are serialized by the
//! owning event loop, so the store itself needs no locking.
//!
//! ```text
//! ┌─────────────┐  create   ┌─────────────┐  tick ×N  ┌─────────────┐
//! │    Idle     │──────────▶│   Running   │──────────▶│  Finished   │
//! └─────────────┘           └─────────────┘           └─────────────┘
//!        ▲                        │ interrupt
//!        └────────────────────────┘
//! ```
//!
//! Every operation takes an explicit `now: Timestamp` rather than reading the
//! clock itself. Interactive callers pass [`jiff::Timestamp::now`]; tests
//! drive virtual time to exercise whole cycles in microseconds.

use jiff::Timestamp;

use crate::{
    countdown::{Countdown, Tick},
    models::{Cycle, CycleId},
    params::CreateCycle,
};

#[cfg(test)]
mod tests;

/// In-memory store for the session's countdown cycles.
///
/// Cycles are appended, never removed, never reordered; the list is the full
/// history of attempts for the session and is discarded on drop. At most one
/// cycle is live (neither interrupted nor finished) at any time.
#[derive(Debug, Default)]
pub struct CycleStore {
    /// Append-only session history
    cycles: Vec<Cycle>,
    /// Reference (not ownership) into `cycles`; stays on a finished cycle
    /// after natural completion, cleared on interrupt
    active_cycle_id: Option<CycleId>,
    /// Whole seconds elapsed on the active cycle, reset per cycle, capped at
    /// its total
    amount_seconds_passed: u32,
}

impl CycleStore {
    /// Creates an empty store with no active cycle.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a new cycle and makes it the active one.
    ///
    /// Callers validate `params` via [`CreateCycle::validate`] first; once
    /// the preconditions hold this operation has no error paths. The elapsed
    /// counter resets to zero. Should a live predecessor still exist, it is
    /// interrupted before the new cycle is armed, preserving the
    /// one-live-cycle invariant under any call order.
    pub fn create_cycle(&mut self, params: &CreateCycle, now: Timestamp) -> &Cycle {
        self.interrupt_active_cycle(now);

        let id = self.fresh_id(now);
        self.cycles.push(Cycle {
            id: id.clone(),
            task: params.task.clone(),
            minutes_amount: params.minutes_amount,
            start_date: now,
            interrupted_date: None,
            finished_date: None,
        });
        self.active_cycle_id = Some(id);
        self.amount_seconds_passed = 0;

        // Just pushed, so the last index exists.
        &self.cycles[self.cycles.len() - 1]
    }

    /// Marks the live cycle as interrupted and clears the active pointer.
    ///
    /// Returns the interrupted cycle, or `None` if no cycle was live; a
    /// no-op, not an error, and therefore idempotent.
    pub fn interrupt_active_cycle(&mut self, now: Timestamp) -> Option<&Cycle> {
        let id = self.active_cycle_id.as_ref()?;
        let index = self.cycles.iter().position(|cycle| &cycle.id == id)?;
        if self.cycles[index].is_terminal() {
            return None;
        }

        self.cycles[index].interrupted_date = Some(now);
        self.active_cycle_id = None;
        Some(&self.cycles[index])
    }

    /// Marks the active cycle as naturally finished.
    ///
    /// Invoked only from [`tick`](Self::tick) when remaining time reaches
    /// zero. The active pointer deliberately stays on the now-terminal cycle
    /// so the display keeps showing zero remaining.
    fn complete_active_cycle(&mut self, now: Timestamp) {
        let Some(id) = self.active_cycle_id.as_ref() else {
            return;
        };
        if let Some(cycle) = self.cycles.iter_mut().find(|cycle| &cycle.id == id) {
            if !cycle.is_terminal() {
                cycle.finished_date = Some(now);
            }
        }
    }

    /// Recomputes elapsed time for the live cycle and detects completion.
    ///
    /// While a cycle is live, each call derives the elapsed whole seconds
    /// from wall-clock difference (never by accumulating tick counts, so a
    /// delayed or missed tick cannot skew the clock). On completion the
    /// elapsed counter is clamped to the cycle total before the finish is
    /// recorded, which keeps the remaining time from ever going negative
    /// under timer overshoot.
    ///
    /// Without a live cycle this is a total no-op returning [`Tick::Idle`].
    pub fn tick(&mut self, now: Timestamp) -> Tick {
        let Some(cycle) = self.running_cycle() else {
            return Tick::Idle;
        };
        let total_seconds = cycle.total_seconds();
        let start_date = cycle.start_date;

        let elapsed = now.duration_since(start_date).as_secs();
        // Elapsed never moves backwards, even if the wall clock does.
        let elapsed = u32::try_from(elapsed.max(0))
            .unwrap_or(u32::MAX)
            .max(self.amount_seconds_passed);

        if elapsed >= total_seconds {
            self.amount_seconds_passed = total_seconds;
            self.complete_active_cycle(now);
            Tick::Finished
        } else {
            self.amount_seconds_passed = elapsed;
            Tick::Running {
                current_seconds: total_seconds - elapsed,
            }
        }
    }

    /// The full session history, oldest first.
    pub fn cycles(&self) -> &[Cycle] {
        &self.cycles
    }

    /// The cycle the active pointer references, terminal or not.
    ///
    /// After natural completion this is the finished cycle (the pointer is
    /// not cleared); after an interrupt it is `None`.
    pub fn active_cycle(&self) -> Option<&Cycle> {
        let id = self.active_cycle_id.as_ref()?;
        self.cycles.iter().find(|cycle| &cycle.id == id)
    }

    /// The active cycle only while it is still counting down.
    pub fn running_cycle(&self) -> Option<&Cycle> {
        self.active_cycle().filter(|cycle| !cycle.is_terminal())
    }

    /// Whether a cycle is currently counting down.
    pub fn is_running(&self) -> bool {
        self.running_cycle().is_some()
    }

    /// Whole seconds elapsed on the active cycle.
    pub fn amount_seconds_passed(&self) -> u32 {
        self.amount_seconds_passed
    }

    /// Total seconds of the active cycle, or zero when idle.
    pub fn total_seconds(&self) -> u32 {
        self.active_cycle().map_or(0, Cycle::total_seconds)
    }

    /// Seconds remaining on the active cycle, clamped to `[0, total]`.
    pub fn current_seconds(&self) -> u32 {
        self.countdown().current_seconds()
    }

    /// Snapshot of the derived countdown values for rendering.
    pub fn countdown(&self) -> Countdown {
        match self.active_cycle() {
            Some(cycle) => Countdown {
                total_seconds: cycle.total_seconds(),
                seconds_passed: self.amount_seconds_passed,
            },
            None => Countdown::IDLE,
        }
    }

    /// Derive a fresh time-based identifier, disambiguating same-millisecond
    /// collisions by list position.
    fn fresh_id(&self, now: Timestamp) -> CycleId {
        let id = CycleId::derive(now, 0);
        if self.cycles.iter().any(|cycle| cycle.id == id) {
            CycleId::derive(now, self.cycles.len())
        } else {
            id
        }
    }
}
