use chrono::NaiveDateTime;

/// The fixed set of labels an event can be filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::IntoStaticStr, strum::EnumString)]
pub enum Category {
    Konzert,
    Theater,
    Sport,
    Kinder,
    Kunst,
    Tanz,
    Party,
    Festival,
    Comedy,
    Lesung,
    Sonstiges,
}

impl Category {
    pub fn label(&self) -> &'static str {
        self.into()
    }

    /// Placeholder artwork shown for events of this category.
    pub fn placeholder_image(&self) -> &'static str {
        match self {
            Category::Konzert => "/indie-rock-concert-stage-lights.jpg",
            Category::Theater => "/classic-cinema-vintage-movie-theater.jpg",
            Category::Sport => "/indie-rock-concert-stage-lights.jpg",
            Category::Kinder => "/children-theater-puppet-show-colorful.jpg",
            Category::Kunst => "/modern-art-gallery.png",
            Category::Tanz => "/90s-party-disco-ball-dance-floor.jpg",
            Category::Party => "/rooftop-party-city-skyline-night.jpg",
            Category::Festival => "/summer-music-festival-outdoor-crowd.jpg",
            Category::Comedy => "/comedy-show-audience-laughing.jpg",
            Category::Lesung => "/bookstore-literature-event.jpg",
            Category::Sonstiges => "/indie-rock-concert-stage-lights.jpg",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// A materialized catalog entry. Records without coordinates never become one.
#[derive(Debug, Clone)]
pub struct Event {
    pub id: String,
    pub title: String,
    pub category: Category,
    pub date: NaiveDateTime,
    pub location: String,
    pub description: String,
    pub image: String,
    pub link: String,
    pub ics_link: String,
    pub coordinates: Coordinates,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DateRange {
    pub start: Option<NaiveDateTime>,
    pub end: Option<NaiveDateTime>,
}

/// The visitor's currently selected constraints. Replaced wholesale on every
/// interaction, never mutated in place.
///
/// `city` is cosmetic: it feeds the feed URL and the newsletter copy but is
/// not applied when filtering.
#[derive(Debug, Clone, Default)]
pub struct FilterState {
    pub categories: Vec<Category>,
    pub city: String,
    pub date_range: DateRange,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum SortKey {
    Date,
    Title,
}
