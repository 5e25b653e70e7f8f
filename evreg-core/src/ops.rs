//! Pure transitions over event and registration collections.
//!
//! These functions never touch storage or the terminal. The command handlers
//! load a collection, run a transition, and persist the result, so all the
//! rules stay testable on plain vectors.

use chrono::{DateTime, Utc};

use crate::error::{EvregError, EvregResult};
use crate::event::Event;
use crate::registration::Registration;

/// Validate and append a new event, returning the grown collection.
///
/// Leading/trailing whitespace is trimmed before validation. A blank id or
/// name, or an id already present in the collection, rejects the event and
/// leaves the input untouched.
pub fn add_event(events: &[Event], event: Event) -> EvregResult<Vec<Event>> {
    let id = event.id.trim().to_string();
    let name = event.name.trim().to_string();
    let category = event.category.trim().to_string();

    if id.is_empty() {
        return Err(EvregError::MissingField("id"));
    }
    if name.is_empty() {
        return Err(EvregError::MissingField("name"));
    }
    if events.iter().any(|e| e.id == id) {
        return Err(EvregError::DuplicateEventId(id));
    }

    let mut next = events.to_vec();
    next.push(Event {
        id,
        name,
        category,
        date: event.date,
    });
    Ok(next)
}

/// Filter an event out of the collection. Unknown ids are a no-op.
pub fn remove_event(events: &[Event], id: &str) -> Vec<Event> {
    events.iter().filter(|e| e.id != id).cloned().collect()
}

/// Find an event by id.
pub fn find_event<'a>(events: &'a [Event], id: &str) -> Option<&'a Event> {
    events.iter().find(|e| e.id == id)
}

/// Build a registration for an event, stamped with the given instant.
///
/// A blank student id (after trimming) is rejected.
pub fn new_registration(
    event_id: &str,
    student_id: &str,
    when: DateTime<Utc>,
) -> EvregResult<Registration> {
    let student_id = student_id.trim();
    if student_id.is_empty() {
        return Err(EvregError::MissingStudentId);
    }

    Ok(Registration {
        event_id: event_id.to_string(),
        student_id: student_id.to_string(),
        when,
    })
}

/// All registrations referencing the given event id.
///
/// Orphaned registrations (whose event was removed) never show up here for
/// live events, but remain in the collection.
pub fn registrations_for<'a>(
    registrations: &'a [Registration],
    event_id: &str,
) -> Vec<&'a Registration> {
    registrations
        .iter()
        .filter(|r| r.event_id == event_id)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::seed_events;
    use chrono::NaiveDate;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn add_event_appends() {
        let events = seed_events();
        let next = add_event(
            &events,
            Event::new("E004", "Quiz", "Technical", date("2025-12-01")),
        )
        .unwrap();

        assert_eq!(next.len(), events.len() + 1);
        assert!(next.iter().any(|e| e.id == "E004" && e.name == "Quiz"));
    }

    #[test]
    fn add_event_rejects_duplicate_id() {
        let events = seed_events();
        let next = add_event(
            &events,
            Event::new("E004", "Quiz", "Technical", date("2025-12-01")),
        )
        .unwrap();

        let err = add_event(
            &next,
            Event::new("E004", "Quiz Again", "Technical", date("2025-12-02")),
        )
        .unwrap_err();
        assert!(matches!(err, EvregError::DuplicateEventId(_)));
        assert_eq!(next.len(), 4);
    }

    #[test]
    fn add_event_rejects_blank_fields() {
        let events = seed_events();

        let err = add_event(&events, Event::new("  ", "Quiz", "", date("2025-12-01"))).unwrap_err();
        assert!(matches!(err, EvregError::MissingField("id")));

        let err =
            add_event(&events, Event::new("E004", "   ", "", date("2025-12-01"))).unwrap_err();
        assert!(matches!(err, EvregError::MissingField("name")));
    }

    #[test]
    fn add_event_trims_whitespace() {
        let next = add_event(
            &[],
            Event::new(" E004 ", " Quiz ", " Technical ", date("2025-12-01")),
        )
        .unwrap();
        assert_eq!(next[0].id, "E004");
        assert_eq!(next[0].name, "Quiz");
        assert_eq!(next[0].category, "Technical");
    }

    #[test]
    fn remove_event_drops_exactly_one() {
        let events = seed_events();
        let next = remove_event(&events, "E002");

        assert_eq!(next.len(), events.len() - 1);
        assert!(!next.iter().any(|e| e.id == "E002"));
        assert!(next.iter().any(|e| e.id == "E001"));
        assert!(next.iter().any(|e| e.id == "E003"));
    }

    #[test]
    fn remove_event_unknown_id_is_noop() {
        let events = seed_events();
        assert_eq!(remove_event(&events, "E999"), events);
    }

    #[test]
    fn new_registration_rejects_blank_student() {
        let err = new_registration("E001", "   ", chrono::Utc::now()).unwrap_err();
        assert!(matches!(err, EvregError::MissingStudentId));
    }

    #[test]
    fn new_registration_trims_student_id() {
        let reg = new_registration("E001", "  S100  ", chrono::Utc::now()).unwrap();
        assert_eq!(reg.event_id, "E001");
        assert_eq!(reg.student_id, "S100");
    }

    #[test]
    fn registrations_survive_event_removal() {
        let events = seed_events();
        let reg = new_registration("E001", "S100", chrono::Utc::now()).unwrap();
        let regs = vec![reg];

        let _events = remove_event(&events, "E001");

        // The registration is orphaned, not deleted
        assert_eq!(registrations_for(&regs, "E001").len(), 1);
    }

    #[test]
    fn registrations_for_filters_by_event() {
        let now = chrono::Utc::now();
        let regs = vec![
            new_registration("E001", "S100", now).unwrap(),
            new_registration("E002", "S200", now).unwrap(),
            new_registration("E001", "S300", now).unwrap(),
        ];

        let matching = registrations_for(&regs, "E001");
        assert_eq!(matching.len(), 2);
        assert!(matching.iter().all(|r| r.event_id == "E001"));
        assert!(registrations_for(&regs, "E003").is_empty());
    }
}
