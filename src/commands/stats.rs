use anyhow::Result;
use evreg_core::stats::{self, Stats};
use evreg_core::store::{StorageArea, Store};

use crate::render::Render;

pub fn run<S: StorageArea>(store: &Store<S>) -> Result<()> {
    println!("{}", current(store).render());
    Ok(())
}

/// Compute the dashboard counters from the store.
///
/// Uses the strict registrations read so an unreadable blob falls back to
/// the placeholder count instead of silently showing zero.
pub fn current<S: StorageArea>(store: &Store<S>) -> Stats {
    let events = store.load_events();
    let registrations = store.read_registrations();
    let today = chrono::Local::now().date_naive();

    stats::compute(&events, registrations.as_deref().ok(), today)
}
