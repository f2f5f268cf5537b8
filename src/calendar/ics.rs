use crate::catalog::model::Event;
use chrono::Utc;
use icalendar::{Calendar, Component, EventLike};
use lazy_static::lazy_static;
use regex::Regex;

const UID_DOMAIN: &str = "ivent.app";
const ICS_TIMESTAMP_FORMAT: &str = "%Y%m%dT%H%M%SZ";

lazy_static! {
    static ref WHITESPACE: Regex =
        Regex::new(r"\s+").expect("Failed to compile whitespace pattern");
}

/// Serializes a single event into the VCALENDAR snippet offered behind the
/// "Im Kalender speichern" action.
pub fn event_to_ics(event: &Event) -> String {
    let dtstamp = Utc::now().format(ICS_TIMESTAMP_FORMAT).to_string();
    let dtstart = event.date.format(ICS_TIMESTAMP_FORMAT).to_string();

    let mut ics_event = icalendar::Event::new();
    ics_event.uid(&format!("{}@{}", event.id, UID_DOMAIN));
    ics_event.summary(&event.title);
    ics_event.description(&event.description);
    ics_event.location(&event.location);
    ics_event.add_property("DTSTAMP", &dtstamp);
    ics_event.add_property("DTSTART", &dtstart);

    let mut calendar = Calendar::new();
    calendar.push(ics_event.done());

    calendar.to_string()
}

/// Download name for the snippet, with whitespace runs collapsed to dashes.
pub fn download_filename(event: &Event) -> String {
    format!("{}.ics", WHITESPACE.replace_all(&event.title, "-"))
}
