//! Event types.
//!
//! An event is a schedulable item visitors can register for. The admin
//! supplies the id, so uniqueness is enforced at insertion time (see
//! [`crate::ops::add_event`]) rather than by construction.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A schedulable campus event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Unique identifier, user-supplied (e.g. "E001")
    pub id: String,
    pub name: String,
    /// Free-form category label; empty means uncategorized
    #[serde(default)]
    pub category: String,
    pub date: NaiveDate,
}

impl Event {
    pub fn new(id: &str, name: &str, category: &str, date: NaiveDate) -> Self {
        Event {
            id: id.to_string(),
            name: name.to_string(),
            category: category.to_string(),
            date,
        }
    }

    /// Category as shown to users ("General" when unset).
    pub fn display_category(&self) -> &str {
        if self.category.is_empty() {
            "General"
        } else {
            &self.category
        }
    }

    /// Whether the event is on or after the given day.
    pub fn is_upcoming(&self, today: NaiveDate) -> bool {
        self.date >= today
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn display_category_falls_back_to_general() {
        let event = Event::new("E001", "Tech Talk", "", date("2025-11-01"));
        assert_eq!(event.display_category(), "General");

        let event = Event::new("E001", "Tech Talk", "Technical", date("2025-11-01"));
        assert_eq!(event.display_category(), "Technical");
    }

    #[test]
    fn upcoming_includes_today() {
        let event = Event::new("E001", "Tech Talk", "Technical", date("2025-11-01"));
        assert!(event.is_upcoming(date("2025-11-01")));
        assert!(event.is_upcoming(date("2025-10-31")));
        assert!(!event.is_upcoming(date("2025-11-02")));
    }

    #[test]
    fn date_serializes_as_calendar_date() {
        let event = Event::new("E001", "Tech Talk", "Technical", date("2025-11-01"));
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"2025-11-01\""));
    }

    #[test]
    fn missing_category_defaults_to_empty() {
        let event: Event =
            serde_json::from_str(r#"{"id":"E009","name":"Open Mic","date":"2025-12-05"}"#).unwrap();
        assert_eq!(event.category, "");
        assert_eq!(event.display_category(), "General");
    }
}
