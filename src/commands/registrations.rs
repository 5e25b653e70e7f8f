use anyhow::Result;
use evreg_core::ops;
use evreg_core::store::{StorageArea, Store};
use owo_colors::OwoColorize;

use crate::render;

/// Detail surface for one event. Re-reads storage on every invocation so
/// fresh registrations always appear.
pub fn run<S: StorageArea>(store: &Store<S>, event_id: &str) -> Result<()> {
    let registrations = store.load_registrations();
    let matching = ops::registrations_for(&registrations, event_id);

    if matching.is_empty() {
        println!("{}", "No registrations yet.".dimmed());
        return Ok(());
    }

    for registration in matching {
        println!("{}", render::registration_line(registration));
    }
    Ok(())
}
