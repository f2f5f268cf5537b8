use crate::catalog::model::FilterState;
use itertools::Itertools;
use url::Url;

const FEED_PATH: &str = "/api/calendar-feed";

/// Builds the subscription URL mirroring the visitor's active filters, so an
/// external calendar keeps receiving exactly the filtered slice.
pub fn calendar_feed_url(origin: &Url, filters: &FilterState) -> Url {
    let mut feed_url = origin
        .join(FEED_PATH)
        .expect("Origin URL cannot carry the feed path");

    {
        let mut params = feed_url.query_pairs_mut();

        params.append_pair("city", &filters.city);

        if !filters.categories.is_empty() {
            params.append_pair(
                "categories",
                &filters
                    .categories
                    .iter()
                    .map(|category| category.label())
                    .join(","),
            );
        }

        if let Some(start) = filters.date_range.start {
            params.append_pair("start", &start.and_utc().to_rfc3339());
        }

        if let Some(end) = filters.date_range.end {
            params.append_pair("end", &end.and_utc().to_rfc3339());
        }
    }

    feed_url
}
