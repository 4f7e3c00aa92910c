//! Station identity, metadata and availability.

use std::fmt;

use serde::Serialize;

/// Error returned when parsing an invalid station id.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid station id: {reason}")]
pub struct InvalidStationId {
    reason: &'static str,
}

/// A provider-assigned station identifier.
///
/// GBFS ids are opaque strings. The only requirement enforced here is that
/// the id is non-empty once surrounding whitespace is removed.
///
/// # Examples
///
/// ```
/// use bikeshare_map::domain::StationId;
///
/// let id = StationId::parse("442").unwrap();
/// assert_eq!(id.as_str(), "442");
///
/// assert!(StationId::parse("").is_err());
/// assert!(StationId::parse("   ").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct StationId(String);

impl StationId {
    /// Parse a station id, trimming surrounding whitespace.
    pub fn parse(s: &str) -> Result<Self, InvalidStationId> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(InvalidStationId {
                reason: "must not be empty",
            });
        }
        Ok(StationId(trimmed.to_string()))
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationId({})", self.0)
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Static station metadata from the information feed.
#[derive(Debug, Clone, PartialEq)]
pub struct StationInfo {
    pub id: StationId,
    pub latitude: f64,
    pub longitude: f64,
    pub name: String,
    pub address: String,
}

/// Live availability from the status feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StationStatus {
    pub bikes_available: u32,
    pub docks_available: u32,
}

/// A station's metadata joined with its availability for one render pass.
#[derive(Debug, Clone, Copy)]
pub struct StationView<'a> {
    pub info: &'a StationInfo,
    pub status: StationStatus,
}

impl StationView<'_> {
    pub fn id(&self) -> &StationId {
        &self.info.id
    }
}
