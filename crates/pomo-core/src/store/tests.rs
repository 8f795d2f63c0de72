use jiff::{Timestamp, ToSpan};

use super::*;
use crate::countdown::Tick;

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
fn test_create_cycle_sets_active_and_resets_elapsed() {
    let mut store = CycleStore::new();
    let start = Timestamp::now();

    let cycle = store.create_cycle(&params("Write docs", 25), start);
    assert_eq!(cycle.task, "Write docs");
    assert_eq!(cycle.minutes_amount, 25);
    assert_eq!(cycle.start_date, start);
    assert!(cycle.interrupted_date.is_none());
    assert!(cycle.finished_date.is_none());

    assert_eq!(store.cycles().len(), 1);
    assert!(store.is_running());
    assert_eq!(store.amount_seconds_passed(), 0);
    assert_eq!(store.total_seconds(), 25 * 60);
}

#[test]
fn test_at_most_one_live_cycle() {
    let mut store = CycleStore::new();
    let start = Timestamp::now();

    store.create_cycle(&params("First", 25), start);
    store.create_cycle(&params("Second", 10), at(start, 60));

    let live: Vec<_> = store
        .cycles()
        .iter()
        .filter(|cycle| !cycle.is_terminal())
        .collect();
    assert_eq!(live.len(), 1);
    assert_eq!(live[0].task, "Second");

    // The displaced cycle was interrupted, not dropped.
    assert_eq!(store.cycles().len(), 2);
    assert!(store.cycles()[0].interrupted_date.is_some());
}

#[test]
fn test_interrupt_clears_pointer_and_is_idempotent() {
    let mut store = CycleStore::new();
    let start = Timestamp::now();
    store.create_cycle(&params("Write docs", 25), start);

    let interrupted = store.interrupt_active_cycle(at(start, 3));
    assert!(interrupted.is_some());
    assert!(store.active_cycle().is_none());
    assert!(!store.is_running());

    // Second call in a row is a no-op, not an error.
    assert!(store.interrupt_active_cycle(at(start, 4)).is_none());
    assert_eq!(store.cycles()[0].interrupted_date, Some(at(start, 3)));
}

#[test]
fn test_interrupt_without_active_cycle_is_noop() {
    let mut store = CycleStore::new();
    assert!(store.interrupt_active_cycle(Timestamp::now()).is_none());
    assert!(store.cycles().is_empty());
}

#[test]
fn test_tick_updates_elapsed_while_running() {
    let mut store = CycleStore::new();
    let start = Timestamp::now();
    store.create_cycle(&params("Write docs", 25), start);

    let tick = store.tick(at(start, 10));
    assert_eq!(
        tick,
        Tick::Running {
            current_seconds: 25 * 60 - 10
        }
    );
    assert_eq!(store.amount_seconds_passed(), 10);
}

#[test]
fn test_tick_finishes_cycle_and_keeps_pointer() {
    let mut store = CycleStore::new();
    let start = Timestamp::now();
    store.create_cycle(&params("Write docs", 5), start);

    let tick = store.tick(at(start, 5 * 60));
    assert_eq!(tick, Tick::Finished);
    assert_eq!(store.amount_seconds_passed(), 5 * 60);

    // The pointer stays on the finished cycle; the display reads zero.
    let active = store.active_cycle().expect("pointer retained");
    assert!(active.finished_date.is_some());
    assert!(!store.is_running());
    assert_eq!(store.current_seconds(), 0);
}

#[test]
fn test_tick_clamps_overshoot() {
    let mut store = CycleStore::new();
    let start = Timestamp::now();
    store.create_cycle(&params("Write docs", 5), start);

    // Drift carried the tick 47 seconds past the end.
    let tick = store.tick(at(start, 5 * 60 + 47));
    assert_eq!(tick, Tick::Finished);
    assert_eq!(store.amount_seconds_passed(), 5 * 60);
    assert_eq!(store.current_seconds(), 0);
}

#[test]
fn test_tick_after_terminal_is_noop() {
    let mut store = CycleStore::new();
    let start = Timestamp::now();
    store.create_cycle(&params("Write docs", 5), start);
    store.interrupt_active_cycle(at(start, 3));

    assert_eq!(store.tick(at(start, 10)), Tick::Idle);
    assert_eq!(store.amount_seconds_passed(), 0);
}

#[test]
fn test_elapsed_never_decreases_on_clock_rollback() {
    let mut store = CycleStore::new();
    let start = Timestamp::now();
    store.create_cycle(&params("Write docs", 25), start);

    store.tick(at(start, 30));
    assert_eq!(store.amount_seconds_passed(), 30);

    // Wall clock jumped backwards; elapsed holds its ground.
    store.tick(at(start, 20));
    assert_eq!(store.amount_seconds_passed(), 30);
}

#[test]
fn test_fresh_ids_disambiguate_same_millisecond() {
    let mut store = CycleStore::new();
    let start = Timestamp::now();

    let first_id = store.create_cycle(&params("First", 5), start).id.clone();
    let second_id = store.create_cycle(&params("Second", 5), start).id.clone();
    assert_ne!(first_id, second_id);
}

#[test]
fn test_active_pointer_references_existing_cycle() {
    let mut store = CycleStore::new();
    let start = Timestamp::now();
    store.create_cycle(&params("Write docs", 25), start);

    let active = store.active_cycle().expect("active cycle");
    assert!(store.cycles().iter().any(|cycle| cycle.id == active.id));
}
