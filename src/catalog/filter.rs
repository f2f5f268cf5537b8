use super::model::{Category, Event, FilterState, SortKey};
use itertools::Itertools;
use voca_rs::{case, manipulate};

/// Applies the visitor's category and date constraints, keeping survivor
/// order. An empty category selection means no restriction; both date bounds
/// are inclusive. The `city` field is not consulted.
pub fn filter_events(events: &[Event], filters: &FilterState) -> Vec<Event> {
    events
        .iter()
        .filter(|event| {
            if !filters.categories.is_empty() && !filters.categories.contains(&event.category) {
                return false;
            }

            if let Some(start) = filters.date_range.start {
                if event.date < start {
                    return false;
                }
            }

            if let Some(end) = filters.date_range.end {
                if event.date > end {
                    return false;
                }
            }

            true
        })
        .cloned()
        .collect()
}

/// Returns a new ordering; the input is left untouched. Both sorts are
/// stable, so equal keys keep their prior relative order.
pub fn sort_events(events: &[Event], sort_by: SortKey) -> Vec<Event> {
    let mut sorted = events.to_vec();

    match sort_by {
        SortKey::Date => sorted.sort_by_key(|event| event.date),
        SortKey::Title => {
            sorted.sort_by(|a, b| collation_key(&a.title).cmp(&collation_key(&b.title)))
        }
    }

    sorted
}

// German titles collate with umlauts folded onto their base letters.
fn collation_key(title: &str) -> String {
    manipulate::latinise(&case::lower_case(title))
}

/// Buckets events by category in a single pass. Buckets appear in the order
/// their category is first seen; within a bucket, input order is kept.
pub fn group_events_by_category(events: &[Event]) -> Vec<(Category, Vec<Event>)> {
    let mut grouped: Vec<(Category, Vec<Event>)> = Vec::new();

    for event in events {
        match grouped
            .iter_mut()
            .find(|(category, _)| *category == event.category)
        {
            Some((_, bucket)) => bucket.push(event.clone()),
            None => grouped.push((event.category, vec![event.clone()])),
        }
    }

    grouped
}

/// The distinct categories present in the collection, sorted by label.
pub fn available_categories(events: &[Event]) -> Vec<Category> {
    events
        .iter()
        .map(|event| event.category)
        .unique()
        .sorted_by_key(|category| category.label())
        .collect()
}
