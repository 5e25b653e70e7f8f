//! Terminal rendering for evreg types.
//!
//! Two card layouts: a public card for visitors and an admin card with
//! management details, plus the dashboard counters.

use evreg_core::stats::Stats;
use evreg_core::{Event, Registration};
use owo_colors::OwoColorize;

/// Extension trait for terminal rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

/// Card shown on the public events surface.
pub fn public_card(event: &Event) -> String {
    let hint = format!("evreg register {}", event.id);
    [
        event.name.bold().to_string(),
        format!("  Date: {}", event.date),
        format!("  Category: {}", event.display_category()),
        format!("  {}", hint.dimmed()),
    ]
    .join("\n")
}

/// Card shown on the admin surface.
pub fn admin_card(event: &Event, registration_count: usize) -> String {
    let id_tag = format!("({})", event.id);
    [
        format!("{} {}", event.name.bold(), id_tag.dimmed()),
        format!("  Category: {}", event.display_category()),
        format!("  Date: {}", event.date),
        format!("  Registrations: {}", registration_count),
    ]
    .join("\n")
}

/// One bullet in the registration detail list.
pub fn registration_line(registration: &Registration) -> String {
    let when = registration
        .when
        .with_timezone(&chrono::Local)
        .format("%Y-%m-%d %H:%M");
    format!(
        "  - {} {}",
        registration.student_id,
        when.to_string().dimmed()
    )
}

impl Render for Stats {
    fn render(&self) -> String {
        [
            format!("Total events:        {}", self.total_events),
            format!("Total registrations: {}", self.total_registrations),
            format!("Upcoming events:     {}", self.upcoming_events),
        ]
        .join("\n")
    }
}
