use super::model::{Coordinates, Event};
use crate::catalog::classify;
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Deserializer};
use serde_either::SingleOrVec;
use serde_json::Value;
use tracing::warn;

// Note: some String fields need the custom deserializer due to being optional
// in the scraped dataset.
#[derive(Debug, Deserialize)]
pub struct RawEvent {
    pub title: String,
    #[serde(deserialize_with = "deserialize_str")]
    pub link: String,
    pub description: SingleOrVec<String>,
    pub date: String,
    #[serde(deserialize_with = "deserialize_str")]
    pub ics_link: String,
    #[serde(deserialize_with = "deserialize_str")]
    pub location: String,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
}

impl RawEvent {
    /// Both coordinates present, or nothing.
    pub fn coordinates(&self) -> Option<Coordinates> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lng)) => Some(Coordinates { lat, lng }),
            _ => None,
        }
    }

    #[tracing::instrument(skip(self, coordinates), fields(self.link = %self.link))]
    pub fn to_model(&self, id: String, coordinates: Coordinates) -> Event {
        let description = self.description_text();
        let category = classify::categorize(&self.title, &description);

        Event {
            id,
            title: self.title.clone(),
            category,
            date: parse_event_date(&self.date),
            location: self.location.clone(),
            description,
            image: category.placeholder_image().to_string(),
            link: self.link.clone(),
            ics_link: self.ics_link.clone(),
            coordinates,
        }
    }

    fn description_text(&self) -> String {
        match self.description.clone() {
            SingleOrVec::Single(description) => description,
            SingleOrVec::Vec(paragraphs) => paragraphs.concat(),
        }
    }
}

/// Parses the dataset's ISO-ish date strings. A string no format accepts is
/// normalized to `NaiveDateTime::MIN`, so broken dates keep a fixed position
/// in any ordering instead of poisoning comparisons.
pub fn parse_event_date(raw: &str) -> NaiveDateTime {
    if let Ok(instant) = DateTime::parse_from_rfc3339(raw) {
        return instant.naive_utc();
    }

    if let Ok(instant) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return instant;
    }

    if let Ok(day) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return day.and_time(NaiveTime::MIN);
    }

    warn!("Failed to parse date '{raw}'. Using the sentinel instead.");
    NaiveDateTime::MIN
}

fn deserialize_str<'de, D>(d: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(d)? {
        Value::String(s) => s,
        _ => String::new(),
    })
}
