//! One consistent read of both feeds.
//!
//! A snapshot pairs the information and status maps from a single fetch
//! cycle. Rendering only ever sees one snapshot, so markers never mix data
//! from two different cycles.

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::domain::{RenderError, StationView};
use crate::feed::{InfoMap, StationFeed, StatusMap};

/// Station information and status fetched together.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub info: InfoMap,
    pub status: StatusMap,
    /// When the provider last updated the status document
    pub last_updated: Option<DateTime<Utc>>,
}

impl Snapshot {
    /// Fetch both feeds concurrently.
    ///
    /// Fails if either feed fails; no partial snapshot is ever produced.
    pub async fn fetch<F: StationFeed>(feed: &F) -> Result<Self, RenderError> {
        let (info, status) =
            tokio::try_join!(feed.fetch_station_info(), feed.fetch_station_status())?;

        debug!(
            stations = info.stations.len(),
            statuses = status.stations.len(),
            "fetched snapshot"
        );

        Ok(Self {
            info: info.stations,
            status: status.stations,
            last_updated: status.last_updated.or(info.last_updated),
        })
    }

    /// Join status with information for every station in the status feed.
    ///
    /// Stations come back ordered by id. A status entry without matching
    /// information is a [`RenderError::JoinMismatch`]. Information entries
    /// without status are skipped.
    pub fn stations(&self) -> Result<Vec<StationView<'_>>, RenderError> {
        let mut ids: Vec<_> = self.status.keys().collect();
        ids.sort();

        let mut views = Vec::with_capacity(ids.len());
        for id in ids {
            let info = self
                .info
                .get(id)
                .ok_or_else(|| RenderError::JoinMismatch {
                    station_id: id.clone(),
                })?;
            views.push(StationView {
                info,
                status: self.status[id],
            });
        }

        let unreported = self.info.len().saturating_sub(views.len());
        if unreported > 0 {
            debug!(unreported, "stations without status skipped");
        }

        Ok(views)
    }
}
