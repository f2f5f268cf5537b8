use crate::catalog::loader::DatasetSource;
use crate::catalog::model::{Category, SortKey};
use chrono::NaiveDateTime;
use url::Url;

#[derive(Debug)]
pub struct Config {
    pub debug_config: DebugConfig,
    pub dataset_source: DatasetSource,
    pub source_tag: String,
    pub city: String,
    pub categories: Vec<Category>,
    pub from: Option<NaiveDateTime>,
    pub to: Option<NaiveDateTime>,
    pub sort_by: SortKey,
    pub grouped: bool,
    pub feed_origin: Url,
}

#[derive(Debug)]
pub struct DebugConfig {
    pub event_limit: Option<usize>,
}
