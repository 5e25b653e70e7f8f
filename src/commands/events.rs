use anyhow::Result;
use evreg_core::store::{StorageArea, Store};
use owo_colors::OwoColorize;

use crate::render::{self, Render};

/// Public surface: one card per event plus the dashboard counters.
pub fn run<S: StorageArea>(store: &Store<S>) -> Result<()> {
    let events = store.load_events();

    if events.is_empty() {
        println!("{}", "No events found".dimmed());
    }
    for event in &events {
        println!("{}\n", render::public_card(event));
    }

    println!("{}", super::stats::current(store).render());
    Ok(())
}
