//! Turning a snapshot into station markers.

use askama::Template;

use crate::domain::{FilterMode, RenderError, StationId, StationView};
use crate::map::{LatLng, Marker};
use crate::snapshot::Snapshot;

use super::icon::StationIcon;

/// Popup content for one station.
#[derive(Template)]
#[template(path = "popup.html")]
pub struct PopupTemplate<'a> {
    pub name: &'a str,
    pub address: &'a str,
    pub bikes: u32,
    pub docks: u32,
}

/// A marker ready to be placed, with the popup it should carry.
#[derive(Debug, Clone, PartialEq)]
pub struct StationMarker {
    pub station_id: StationId,
    pub icon: StationIcon,
    pub marker: Marker,
    pub popup: String,
}

impl StationMarker {
    /// Build the marker for one joined station.
    pub fn build(station: &StationView<'_>, mode: FilterMode) -> Result<Self, RenderError> {
        let icon = StationIcon::select(mode, &station.status);

        let popup = PopupTemplate {
            name: &station.info.name,
            address: &station.info.address,
            bikes: station.status.bikes_available,
            docks: station.status.docks_available,
        }
        .render()
        .map_err(|e| RenderError::Template {
            message: e.to_string(),
        })?;

        Ok(Self {
            station_id: station.id().clone(),
            icon,
            marker: Marker {
                position: LatLng::new(station.info.latitude, station.info.longitude),
                icon: icon.spec(),
            },
            popup,
        })
    }
}

/// Build one marker per station in the snapshot's status feed.
///
/// Pure: the same snapshot and mode always give the same markers, in
/// station id order.
pub fn render_stations(
    snapshot: &Snapshot,
    mode: FilterMode,
) -> Result<Vec<StationMarker>, RenderError> {
    snapshot
        .stations()?
        .iter()
        .map(|station| StationMarker::build(station, mode))
        .collect()
}
