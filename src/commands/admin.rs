use anyhow::Result;
use evreg_core::ops;
use evreg_core::store::{StorageArea, Store};
use owo_colors::OwoColorize;

use crate::render::{self, Render};

/// Admin surface: cards with ids and registration counts, plus the
/// dashboard counters.
pub fn run<S: StorageArea>(store: &Store<S>) -> Result<()> {
    let events = store.load_events();
    let registrations = store.load_registrations();

    if events.is_empty() {
        println!("{}", "No events found".dimmed());
    }
    for event in &events {
        let count = ops::registrations_for(&registrations, &event.id).len();
        println!("{}\n", render::admin_card(event, count));
    }

    println!("{}", super::stats::current(store).render());
    Ok(())
}
