//! Registration types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A student's intent to attend an event.
///
/// Holds a reference to the event's id only; removing the event leaves the
/// registration behind as an orphan, which simply renders as unmatched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub event_id: String,
    pub student_id: String,
    /// When the registration was made; immutable after creation
    pub when: DateTime<Utc>,
}
