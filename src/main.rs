use ivent::calendar::feed::calendar_feed_url;
use ivent::catalog::filter::{filter_events, group_events_by_category, sort_events};
use ivent::catalog::loader::EventCatalog;
use ivent::catalog::model::{DateRange, FilterState};
use ivent::config::env_loader::load_config;
use ivent::tracing::setup_loki;
use tracing::info;

#[tokio::main]
async fn main() {
    let loki = setup_loki().await;

    let config = load_config();

    let mut events = EventCatalog::load(&config.dataset_source, &config.source_tag)
        .await
        .unwrap();

    if let Some(limit) = config.debug_config.event_limit {
        events.truncate(limit);
    }

    let filters = FilterState {
        categories: config.categories.clone(),
        city: config.city.clone(),
        date_range: DateRange {
            start: config.from,
            end: config.to,
        },
    };

    let listed = sort_events(&filter_events(&events, &filters), config.sort_by);

    info!("Listing {} of {} events", listed.len(), events.len());

    if config.grouped {
        for (category, bucket) in group_events_by_category(&listed) {
            info!("{} ({} events)", category.label(), bucket.len());

            for event in bucket {
                info!("  {} | {} | {}", event.date, event.title, event.location);
            }
        }
    } else {
        for event in &listed {
            info!("{} | {} | {}", event.date, event.title, event.location);
        }
    }

    info!(
        "Calendar feed for these filters: {}",
        calendar_feed_url(&config.feed_origin, &filters)
    );

    if let Some((controller, handle)) = loki {
        controller.shutdown().await;
        handle.await.unwrap();
    }
}
