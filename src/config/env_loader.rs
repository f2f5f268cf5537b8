use crate::catalog::loader::DatasetSource;
use crate::catalog::model::{Category, SortKey};
use crate::config::model::{Config, DebugConfig};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use std::env;
use std::path::PathBuf;
use url::Url;

pub fn load_config() -> Config {
    let dataset_source = load_dataset_source();
    let source_tag = env::var("IVENT_SOURCE_TAG").unwrap_or_else(|_| "stuttgart".to_string());
    let city = env::var("IVENT_CITY").unwrap_or_else(|_| "Stuttgart".to_string());

    let categories = load_categories_config("IVENT_CATEGORIES");
    let from = load_date_config("IVENT_FROM");
    let to = load_date_config("IVENT_TO");
    let sort_by = load_sort_config("IVENT_SORT");
    let grouped = load_bool_config("IVENT_GROUPED", true);
    let feed_origin = load_url_config("IVENT_FEED_ORIGIN", "https://ivent.app");

    let debug_event_limit = load_usize_config("DEBUG_EVENT_LIMIT");

    Config {
        debug_config: DebugConfig {
            event_limit: debug_event_limit,
        },
        dataset_source,
        source_tag,
        city,
        categories,
        from,
        to,
        sort_by,
        grouped,
        feed_origin,
    }
}

fn load_dataset_source() -> DatasetSource {
    match (env::var("IVENT_DATASET_FILE"), env::var("IVENT_DATASET_URL")) {
        (Ok(_), Ok(_)) => panic!("Set either IVENT_DATASET_FILE or IVENT_DATASET_URL, not both."),
        (Ok(path), Err(_)) => DatasetSource::File(PathBuf::from(path)),
        (Err(_), Ok(url)) => DatasetSource::Url(url),
        (Err(_), Err(_)) => panic!("IVENT_DATASET_FILE or IVENT_DATASET_URL must be set."),
    }
}

fn load_categories_config(name: &str) -> Vec<Category> {
    match env::var(name) {
        Ok(value) => value
            .split(',')
            .map(str::trim)
            .filter(|label| !label.is_empty())
            .map(|label| {
                label.parse().unwrap_or_else(|_| {
                    panic!("Invalid config '{}'. Unknown category '{}'", name, label)
                })
            })
            .collect(),
        Err(_) => Vec::new(),
    }
}

fn load_date_config(name: &str) -> Option<NaiveDateTime> {
    env::var(name).ok().map(|value| {
        NaiveDate::parse_from_str(&value, "%Y-%m-%d")
            .map(|day| day.and_time(NaiveTime::MIN))
            .or_else(|_| NaiveDateTime::parse_from_str(&value, "%Y-%m-%dT%H:%M:%S"))
            .unwrap_or_else(|_| panic!("Invalid config '{}'. Expected an ISO date.", name))
    })
}

fn load_sort_config(name: &str) -> SortKey {
    match env::var(name) {
        Ok(value) => value.parse().unwrap_or_else(|_| {
            panic!(
                "Invalid config '{}'. Expected either 'date' or 'title'",
                name
            )
        }),
        Err(_) => SortKey::Date,
    }
}

fn load_bool_config(name: &str, default: bool) -> bool {
    env::var(name)
        .unwrap_or_else(|_| default.to_string())
        .parse()
        .unwrap_or_else(|_| {
            panic!(
                "Invalid config '{}'. Expected either 'true' or 'false'",
                name
            )
        })
}

fn load_usize_config(name: &str) -> Option<usize> {
    match env::var(name) {
        Ok(value) => Some(value.parse().unwrap_or_else(|_| {
            panic!("Invalid config '{}'. Expected an integer number.", name)
        })),
        Err(_) => None,
    }
}

fn load_url_config(name: &str, default: &str) -> Url {
    env::var(name)
        .unwrap_or_else(|_| default.to_string())
        .parse()
        .unwrap_or_else(|_| panic!("Invalid config '{}'. Expected a valid URL.", name))
}
