//! Core types and storage for the evreg ecosystem.
//!
//! This crate provides everything the CLI binds together:
//! - `Event` and `Registration` data types
//! - pure collection transitions in `ops`
//! - the `Store` persistence layer over pluggable storage areas
//! - dashboard counters in `stats`

pub mod config;
pub mod error;
pub mod event;
pub mod ops;
pub mod registration;
pub mod stats;
pub mod store;

// Re-export the common types at crate root for convenience
pub use error::{EvregError, EvregResult};
pub use event::Event;
pub use registration::Registration;
