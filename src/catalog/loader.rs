use super::dto::RawEvent;
use super::model::Event;
use lazy_static::lazy_static;
use reqwest::Client;
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::policies::ExponentialBackoff;
use reqwest_retry::RetryTransientMiddleware;
use std::path::PathBuf;
use tracing::{error, info};

const MAX_RETRIES: u32 = 5;

lazy_static! {
    static ref REST_CLIENT: ClientWithMiddleware = ClientBuilder::new(Client::new())
        .with(RetryTransientMiddleware::new_with_policy(
            ExponentialBackoff::builder().build_with_max_retries(MAX_RETRIES)
        ))
        .build();
}

/// Where the static dataset lives. The shipped catalog is a JSON file, but
/// the scrape it came from can also be pulled straight off the open-data API.
#[derive(Debug, Clone)]
pub enum DatasetSource {
    File(PathBuf),
    Url(String),
}

pub struct EventCatalog;

impl EventCatalog {
    /**
    Reads the raw dataset once and materializes every record that carries
    coordinates. Meant to be called a single time at bootstrap; the returned
    collection is immutable for the rest of the session.
    */
    #[tracing::instrument]
    pub async fn load(
        source: &DatasetSource,
        source_tag: &str,
    ) -> Result<Vec<Event>, CatalogError> {
        let raw_json = match source {
            DatasetSource::File(path) => {
                tokio::fs::read_to_string(path).await.map_err(|err| {
                    error!("Failed reading dataset file: {err}");
                    CatalogError::DatasetUnreachable
                })?
            }
            DatasetSource::Url(url) => Self::fetch_dataset(url).await?,
        };

        let parsed_records = serde_json::from_str::<Vec<RawEvent>>(&raw_json);

        match parsed_records {
            Ok(raw_events) => Ok(Self::materialize(raw_events, source_tag)),
            Err(e) => {
                error!("Dataset parse failed: {:?}", e);
                Err(CatalogError::InvalidDataset)
            }
        }
    }

    /// Drops records missing a coordinate and assigns positional identifiers
    /// among the survivors, so `<tag>-1 … <tag>-n` with no gaps.
    pub fn materialize(raw_events: Vec<RawEvent>, source_tag: &str) -> Vec<Event> {
        info!("Parsing raw events, total: {}", raw_events.len());

        let with_coordinates: Vec<_> = raw_events
            .iter()
            .filter_map(|raw| raw.coordinates().map(|coordinates| (raw, coordinates)))
            .collect();

        info!("Events with coordinates: {}", with_coordinates.len());

        with_coordinates
            .into_iter()
            .enumerate()
            .map(|(index, (raw, coordinates))| {
                raw.to_model(format!("{}-{}", source_tag, index + 1), coordinates)
            })
            .collect()
    }

    async fn fetch_dataset(url: &str) -> Result<String, CatalogError> {
        let response = match REST_CLIENT.get(url).send().await {
            Ok(response) => response,
            Err(err) => {
                error!("Dataset request failed: {err}");
                return Err(CatalogError::DatasetUnreachable);
            }
        };

        match response.error_for_status() {
            Ok(response) => response.text().await.map_err(|err| {
                error!("Received an invalid response body: {err}");
                CatalogError::DatasetUnreachable
            }),
            Err(err) => {
                error!("Dataset request was rejected: {err}");
                Err(CatalogError::DatasetUnreachable)
            }
        }
    }
}

#[derive(Debug)]
pub enum CatalogError {
    DatasetUnreachable,
    InvalidDataset,
}
