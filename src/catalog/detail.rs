use super::model::Event;
use chrono::{Datelike, NaiveDateTime};

const SIMILAR_EVENT_LIMIT: usize = 3;

const GERMAN_WEEKDAYS: [&str; 7] = [
    "Montag",
    "Dienstag",
    "Mittwoch",
    "Donnerstag",
    "Freitag",
    "Samstag",
    "Sonntag",
];

const GERMAN_MONTHS: [&str; 12] = [
    "Januar",
    "Februar",
    "März",
    "April",
    "Mai",
    "Juni",
    "Juli",
    "August",
    "September",
    "Oktober",
    "November",
    "Dezember",
];

/// Looks up the entry behind a detail view. `None` means the identifier is
/// unknown and renders as a not-found state, never as an error.
pub fn find_event<'a>(events: &'a [Event], id: &str) -> Option<&'a Event> {
    events.iter().find(|event| event.id == id)
}

/// Up to three other events of the same category, shown below the detail view.
pub fn similar_events(events: &[Event], event: &Event) -> Vec<Event> {
    events
        .iter()
        .filter(|candidate| candidate.category == event.category && candidate.id != event.id)
        .take(SIMILAR_EVENT_LIMIT)
        .cloned()
        .collect()
}

/// Long-form German date, e.g. "Samstag, 14. Juni 2025".
pub fn long_date(date: &NaiveDateTime) -> String {
    format!(
        "{}, {:02}. {} {}",
        GERMAN_WEEKDAYS[date.weekday().num_days_from_monday() as usize],
        date.day(),
        GERMAN_MONTHS[date.month0() as usize],
        date.year()
    )
}
