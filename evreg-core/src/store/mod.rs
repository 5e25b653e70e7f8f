//! Local key-value persistence for events and registrations.
//!
//! State lives in a flat storage area under two string keys, each holding a
//! whole-collection JSON blob that is rewritten wholesale on every change.
//! There is no merging and no locking: the last writer wins, which is an
//! accepted limitation of this system's scope.

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use chrono::NaiveDate;
use tracing::warn;

use crate::error::{EvregError, EvregResult};
use crate::event::Event;
use crate::registration::Registration;

/// Storage key for the events collection.
pub const EVENTS_KEY: &str = "events";
/// Storage key for the registrations collection.
pub const REGISTRATIONS_KEY: &str = "registrations";

/// A flat string key-value area the store persists into.
///
/// The CLI uses [`FileStorage`]; tests substitute [`MemoryStorage`].
pub trait StorageArea {
    /// Read the raw blob at a key, `None` if the key was never written.
    fn read(&self, key: &str) -> EvregResult<Option<String>>;
    /// Overwrite the blob at a key.
    fn write(&self, key: &str, value: &str) -> EvregResult<()>;
}

/// The sample events persisted the first time the collection is requested.
pub fn seed_events() -> Vec<Event> {
    vec![
        Event::new("E001", "Tech Talk", "Technical", sample_date(2025, 11, 1)),
        Event::new("E002", "Cultural Fest", "Cultural", sample_date(2025, 11, 10)),
        Event::new("E003", "Coding Hackathon", "Technical", sample_date(2025, 11, 15)),
    ]
}

fn sample_date(y: i32, m: u32, d: u32) -> NaiveDate {
    // The seed dates are fixed and known-valid
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

/// Persistence layer over a [`StorageArea`].
pub struct Store<S: StorageArea> {
    area: S,
}

impl<S: StorageArea> Store<S> {
    pub fn new(area: S) -> Self {
        Store { area }
    }

    /// The underlying storage area.
    pub fn area(&self) -> &S {
        &self.area
    }

    /// Seed the events collection if nothing is stored yet.
    ///
    /// Idempotent, meant to run once at startup. The read paths keep their
    /// own seed fallback, so skipping this never breaks recovery.
    pub fn init(&self) -> EvregResult<()> {
        if self.area.read(EVENTS_KEY)?.is_none() {
            self.save_events(&seed_events())?;
        }
        Ok(())
    }

    /// Load all events.
    ///
    /// A missing blob seeds the collection; a corrupt one is logged and
    /// reseeded. Either way the seed is persisted so subsequent reads are
    /// stable, and the caller always gets a renderable collection.
    pub fn load_events(&self) -> Vec<Event> {
        match self.read_events() {
            Ok(Some(events)) => events,
            Ok(None) => self.seed(),
            Err(e) => {
                warn!("could not read stored events, reseeding: {e}");
                self.seed()
            }
        }
    }

    fn read_events(&self) -> EvregResult<Option<Vec<Event>>> {
        let Some(raw) = self.area.read(EVENTS_KEY)? else {
            return Ok(None);
        };
        let events =
            serde_json::from_str(&raw).map_err(|e| EvregError::Serialization(e.to_string()))?;
        Ok(Some(events))
    }

    fn seed(&self) -> Vec<Event> {
        let events = seed_events();
        if let Err(e) = self.save_events(&events) {
            warn!("could not persist seed events: {e}");
        }
        events
    }

    /// Serialize and overwrite the whole events collection.
    pub fn save_events(&self, events: &[Event]) -> EvregResult<()> {
        let raw = serde_json::to_string_pretty(events)
            .map_err(|e| EvregError::Serialization(e.to_string()))?;
        self.area.write(EVENTS_KEY, &raw)
    }

    /// Load all registrations, degrading to an empty collection on any
    /// failure. No seeding.
    pub fn load_registrations(&self) -> Vec<Registration> {
        match self.read_registrations() {
            Ok(regs) => regs,
            Err(e) => {
                warn!("could not read stored registrations: {e}");
                Vec::new()
            }
        }
    }

    /// Strict registrations read. A missing blob is an empty collection; a
    /// corrupt or unreadable one is an error, so the stats view can fall
    /// back to its placeholder count.
    pub fn read_registrations(&self) -> EvregResult<Vec<Registration>> {
        let Some(raw) = self.area.read(REGISTRATIONS_KEY)? else {
            return Ok(Vec::new());
        };
        serde_json::from_str(&raw).map_err(|e| EvregError::Serialization(e.to_string()))
    }

    /// Append one registration and write the whole collection back.
    ///
    /// Not atomic with respect to other processes; a concurrent writer can
    /// lose an update.
    pub fn append_registration(&self, registration: Registration) -> EvregResult<()> {
        let mut registrations = self.load_registrations();
        registrations.push(registration);
        let raw = serde_json::to_string_pretty(&registrations)
            .map_err(|e| EvregError::Serialization(e.to_string()))?;
        self.area.write(REGISTRATIONS_KEY, &raw)
    }
}
