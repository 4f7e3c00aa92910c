//! GBFS station feed access.
//!
//! A render pass needs two documents from the provider:
//! - `station_information.json`: where each station is and what it's called
//! - `station_status.json`: how many bikes and free docks it has right now
//!
//! Both are fetched independently and turned into maps keyed by station id.

mod client;
mod error;
mod fixture;
mod types;

use std::future::Future;

pub use client::{DEFAULT_BASE_URL, DEFAULT_CLIENT_ID, FeedConfig, GbfsClient};
pub use error::FeedError;
pub use fixture::StaticFeed;
pub use types::{FeedDocument, InfoMap, StatusMap, parse_information, parse_status};

/// A source of station information and station status.
pub trait StationFeed: Send + Sync {
    /// Fetch station metadata keyed by station id.
    fn fetch_station_info(
        &self,
    ) -> impl Future<Output = Result<FeedDocument<InfoMap>, FeedError>> + Send;

    /// Fetch station availability keyed by station id.
    fn fetch_station_status(
        &self,
    ) -> impl Future<Output = Result<FeedDocument<StatusMap>, FeedError>> + Send;
}

/// The feed the server was started with.
#[derive(Debug, Clone)]
pub enum FeedSource {
    /// Live provider over HTTP
    Live(GbfsClient),
    /// Saved documents on disk
    Fixture(StaticFeed),
}

impl StationFeed for FeedSource {
    async fn fetch_station_info(&self) -> Result<FeedDocument<InfoMap>, FeedError> {
        match self {
            FeedSource::Live(client) => client.fetch_station_info().await,
            FeedSource::Fixture(feed) => feed.fetch_station_info().await,
        }
    }

    async fn fetch_station_status(&self) -> Result<FeedDocument<StatusMap>, FeedError> {
        match self {
            FeedSource::Live(client) => client.fetch_station_status().await,
            FeedSource::Fixture(feed) => feed.fetch_station_status().await,
        }
    }
}
