//! Pomo CLI Application
//!
//! Command-line interface for the Pomo countdown timer: argument parsing,
//! logging setup, and dispatch into the interactive session.

mod args;
mod renderer;
mod session;

use anyhow::Result;
use args::{usage_hint, Args, Commands};
use clap::Parser;
use log::info;
use pomo_core::{params::CreateCycle, CycleStore, TaskSuggestions};
use renderer::TerminalRenderer;
use session::Session;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        no_color,
        json,
        command,
    } = Args::parse();

    let renderer = TerminalRenderer::new(!no_color);

    info!("Pomo started");

    match command {
        Some(Commands::Start(start)) => {
            let params: CreateCycle = start.into();
            params.validate()?;

            // One store for the whole session; follow-up cycles started at
            // the between-cycle prompt accumulate in the same history.
            let mut store = CycleStore::new();
            Session::new(&renderer, json).run(&mut store, params).await
        }
        Some(Commands::Suggest) => renderer.render(&TaskSuggestions.to_string()),
        None => {
            renderer.render(&TaskSuggestions.to_string())?;
            println!();
            println!("{}", usage_hint());
            Ok(())
        }
    }
}
