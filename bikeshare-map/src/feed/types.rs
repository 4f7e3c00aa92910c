//! GBFS wire types and conversion to domain mappings.
//!
//! Only the fields the map needs are modelled; everything else in the
//! provider's documents is ignored.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::domain::{StationId, StationInfo, StationStatus};

use super::error::FeedError;

/// Station id → metadata.
pub type InfoMap = HashMap<StationId, StationInfo>;

/// Station id → availability.
pub type StatusMap = HashMap<StationId, StationStatus>;

/// Top-level GBFS envelope shared by every feed file.
#[derive(Debug, Deserialize)]
pub struct GbfsResponse<T> {
    /// POSIX timestamp of the last update
    #[serde(default)]
    pub last_updated: Option<i64>,
    /// Seconds the document may be cached for
    #[serde(default)]
    pub ttl: Option<u32>,
    pub data: StationList<T>,
}

#[derive(Debug, Deserialize)]
pub struct StationList<T> {
    pub stations: Vec<T>,
}

/// Station ids are strings in GBFS, but some providers emit numbers.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawStationId {
    Text(String),
    Number(u64),
}

impl RawStationId {
    fn parse(&self) -> Result<StationId, FeedError> {
        let parsed = match self {
            RawStationId::Text(s) => StationId::parse(s),
            RawStationId::Number(n) => StationId::parse(&n.to_string()),
        };
        parsed.map_err(|e| FeedError::Json {
            message: e.to_string(),
        })
    }
}

/// One entry of `station_information.json`.
#[derive(Debug, Deserialize)]
pub struct StationInformationDto {
    pub station_id: RawStationId,
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    #[serde(default)]
    pub address: String,
}

/// One entry of `station_status.json`.
#[derive(Debug, Deserialize)]
pub struct StationStatusDto {
    pub station_id: RawStationId,
    pub num_bikes_available: u32,
    pub num_docks_available: u32,
}

/// A parsed feed document: the keyed mapping plus the feed's timestamp.
#[derive(Debug, Clone)]
pub struct FeedDocument<T> {
    pub last_updated: Option<DateTime<Utc>>,
    pub stations: T,
}

/// Parse a `station_information.json` body.
pub fn parse_information(body: &str) -> Result<FeedDocument<InfoMap>, FeedError> {
    let response: GbfsResponse<StationInformationDto> = parse_envelope(body)?;
    let mut stations = InfoMap::with_capacity(response.data.stations.len());

    for dto in response.data.stations {
        let id = dto.station_id.parse()?;
        let info = StationInfo {
            id: id.clone(),
            latitude: dto.lat,
            longitude: dto.lon,
            name: dto.name,
            address: dto.address,
        };
        if stations.insert(id.clone(), info).is_some() {
            debug!(station = %id, "duplicate station in information feed, keeping last");
        }
    }

    Ok(FeedDocument {
        last_updated: timestamp(response.last_updated),
        stations,
    })
}

/// Parse a `station_status.json` body.
pub fn parse_status(body: &str) -> Result<FeedDocument<StatusMap>, FeedError> {
    let response: GbfsResponse<StationStatusDto> = parse_envelope(body)?;
    let mut stations = StatusMap::with_capacity(response.data.stations.len());

    for dto in response.data.stations {
        let id = dto.station_id.parse()?;
        let status = StationStatus {
            bikes_available: dto.num_bikes_available,
            docks_available: dto.num_docks_available,
        };
        if stations.insert(id.clone(), status).is_some() {
            debug!(station = %id, "duplicate station in status feed, keeping last");
        }
    }

    Ok(FeedDocument {
        last_updated: timestamp(response.last_updated),
        stations,
    })
}

fn parse_envelope<T: DeserializeOwned>(body: &str) -> Result<GbfsResponse<T>, FeedError> {
    serde_json::from_str(body).map_err(|e| FeedError::Json {
        message: e.to_string(),
    })
}

fn timestamp(secs: Option<i64>) -> Option<DateTime<Utc>> {
    secs.and_then(|s| DateTime::from_timestamp(s, 0))
}
