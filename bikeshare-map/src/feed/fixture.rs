//! Feed backed by JSON files on disk.
//!
//! Serves a saved copy of the provider's two documents as if they were
//! live responses. Useful for developing without network access.

use std::path::Path;
use std::sync::Arc;

use super::StationFeed;
use super::error::FeedError;
use super::types::{FeedDocument, InfoMap, StatusMap, parse_information, parse_status};

const INFORMATION_FILE: &str = "station_information.json";
const STATUS_FILE: &str = "station_status.json";

/// Feed that serves fixed document bodies.
///
/// Bodies are parsed on every fetch, so a malformed fixture fails the same
/// way a malformed live response would.
#[derive(Debug, Clone)]
pub struct StaticFeed {
    information: Arc<str>,
    status: Arc<str>,
}

impl StaticFeed {
    /// Create a feed from in-memory document bodies.
    pub fn new(information: impl Into<String>, status: impl Into<String>) -> Self {
        Self {
            information: Arc::from(information.into()),
            status: Arc::from(status.into()),
        }
    }

    /// Load `station_information.json` and `station_status.json` from a directory.
    pub fn from_dir(dir: impl AsRef<Path>) -> Result<Self, FeedError> {
        let dir = dir.as_ref();
        let information = read_fixture(&dir.join(INFORMATION_FILE))?;
        let status = read_fixture(&dir.join(STATUS_FILE))?;

        // Fail at startup rather than on the first render
        parse_information(&information)?;
        parse_status(&status)?;

        Ok(Self::new(information, status))
    }
}

fn read_fixture(path: &Path) -> Result<String, FeedError> {
    std::fs::read_to_string(path).map_err(|e| FeedError::Fixture {
        message: format!("failed to read {:?}: {}", path, e),
    })
}

impl StationFeed for StaticFeed {
    async fn fetch_station_info(&self) -> Result<FeedDocument<InfoMap>, FeedError> {
        parse_information(&self.information)
    }

    async fn fetch_station_status(&self) -> Result<FeedDocument<StatusMap>, FeedError> {
        parse_status(&self.status)
    }
}
