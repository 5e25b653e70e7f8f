use anyhow::Result;
use chrono::Utc;
use dialoguer::Input;
use evreg_core::ops;
use evreg_core::store::{StorageArea, Store};
use owo_colors::OwoColorize;
use tracing::warn;

use crate::render::Render;

pub fn run<S: StorageArea>(store: &Store<S>, event_id: &str) -> Result<()> {
    let events = store.load_events();
    let Some(event) = ops::find_event(&events, event_id) else {
        let available: Vec<_> = events.iter().map(|e| e.id.as_str()).collect();
        anyhow::bail!(
            "Event '{}' not found. Available: {}",
            event_id,
            available.join(", ")
        );
    };

    let student_id: String = Input::new()
        .with_prompt(format!(
            "Enter your Student ID to register for {}",
            event.name
        ))
        .allow_empty(true)
        .interact_text()?;

    if student_id.trim().is_empty() {
        println!("{}", "Registration cancelled.".red());
        return Ok(());
    }

    let registration = ops::new_registration(&event.id, &student_id, Utc::now())?;
    // Best effort: a failed write is logged, never shown to the registrant
    if let Err(e) = store.append_registration(registration) {
        warn!("could not save registration locally: {e}");
    }

    println!(
        "{}",
        format!(
            "You have successfully registered for {} (Event ID: {}) with Student ID: {}.",
            event.name,
            event.id,
            student_id.trim()
        )
        .green()
    );
    println!();
    println!("{}", super::stats::current(store).render());
    Ok(())
}
