use clap::{Parser, Subcommand};
use pomo_core::params::{CreateCycle, MAX_MINUTES, MINUTES_STEP, MIN_MINUTES};

/// Main command-line interface for the Pomo countdown timer
///
/// Pomo runs pomodoro-style focus cycles in the terminal: name a task, pick a
/// duration between 5 and 60 minutes, and the countdown redraws every second
/// while mirroring the remaining time into the terminal title. Press Ctrl-C
/// to interrupt a running cycle early.
#[derive(Parser)]
#[command(version, about, name = "pomo")]
pub struct Args {
    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Print the final cycle record as JSON instead of a markdown summary
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Pomo CLI
///
/// - `start`: begin a countdown cycle for a named task
/// - `suggest`: print example task names offered as input hints
///
/// Running without a subcommand prints the suggestions with a usage hint.
#[derive(Subcommand)]
pub enum Commands {
    /// Start a countdown cycle
    #[command(alias = "s")]
    Start(StartArgs),
    /// Print example task names
    Suggest,
}

/// Start a countdown cycle
///
/// CLI wrapper for CreateCycle that adds clap-specific argument handling.
/// Range validation stays in the core parameters; clap only parses.
#[derive(clap::Args)]
pub struct StartArgs {
    /// Text describing the activity
    pub task: String,

    /// Duration in minutes (5-60, usually in steps of 5)
    #[arg(short, long)]
    pub minutes: u32,
}

impl From<StartArgs> for CreateCycle {
    /// Convert CLI arguments to the core parameter structure.
    fn from(val: StartArgs) -> Self {
        CreateCycle {
            task: val.task,
            minutes_amount: val.minutes,
        }
    }
}

/// Usage hint shown under the suggestion list when no subcommand is given.
pub fn usage_hint() -> String {
    format!(
        "Start a cycle with: pomo start \"<task>\" --minutes <{MIN_MINUTES}-{MAX_MINUTES}, step {MINUTES_STEP}>"
    )
}
