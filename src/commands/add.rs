use anyhow::Result;
use chrono::NaiveDate;
use dialoguer::Input;
use evreg_core::store::{StorageArea, Store};
use evreg_core::{ops, Event, EvregError};
use owo_colors::OwoColorize;

use crate::render::Render;

pub fn run<S: StorageArea>(
    store: &Store<S>,
    id: Option<String>,
    name: Option<String>,
    category: Option<String>,
    date: Option<String>,
) -> Result<()> {
    let id = prompt_missing(id, "  Event ID")?;
    let name = prompt_missing(name, "  Name")?;
    let category = match category {
        Some(c) => c,
        None => Input::<String>::new()
            .with_prompt("  Category (skip)")
            .default(String::new())
            .show_default(false)
            .interact_text()?,
    };
    let date = prompt_missing(date, "  Date (YYYY-MM-DD)")?;

    if id.trim().is_empty() || name.trim().is_empty() || date.trim().is_empty() {
        println!("{}", "Please fill in Event ID, Name and Date.".red());
        return Ok(());
    }

    let date: NaiveDate = date.trim().parse().map_err(|_| {
        anyhow::anyhow!("Could not parse date: \"{}\" (expected YYYY-MM-DD)", date.trim())
    })?;

    let events = store.load_events();
    let events = match ops::add_event(&events, Event::new(&id, &name, &category, date)) {
        Ok(events) => events,
        Err(e @ (EvregError::DuplicateEventId(_) | EvregError::MissingField(_))) => {
            // Validation failures are user notices, not process errors
            println!("{}", e.to_string().red());
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };
    store.save_events(&events)?;

    println!("{}", "Event added.".green());
    println!();
    println!("{}", super::stats::current(store).render());
    Ok(())
}

/// Use the flag value if given, otherwise ask. Empty answers are allowed
/// here so the aggregate validation message can fire instead of re-prompting.
fn prompt_missing(value: Option<String>, prompt: &str) -> Result<String> {
    match value {
        Some(v) => Ok(v),
        None => Ok(Input::<String>::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()?),
    }
}
