use anyhow::Result;
use dialoguer::Confirm;
use evreg_core::ops;
use evreg_core::store::{StorageArea, Store};

/// Remove an event after explicit confirmation. Declining does nothing.
pub fn run<S: StorageArea>(store: &Store<S>, event_id: &str) -> Result<()> {
    let confirmed = Confirm::new()
        .with_prompt("Remove this event?")
        .default(false)
        .interact()?;
    if !confirmed {
        return Ok(());
    }

    let events = ops::remove_event(&store.load_events(), event_id);
    store.save_events(&events)?;

    super::admin::run(store)
}
