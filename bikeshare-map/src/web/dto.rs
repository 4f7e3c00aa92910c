//! Data transfer objects for web requests and responses.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::app::MapState;
use crate::domain::{Appearance, FilterMode, HelpOverlay};
use crate::map::{PlacedLayer, TileLayer};
use crate::render::Generation;

/// Everything the page needs to draw the map and its controls.
#[derive(Debug, Serialize)]
pub struct MapView {
    /// Current filter mode
    pub filter: FilterMode,

    /// Current appearance
    pub appearance: Appearance,

    /// Help panel visibility
    pub help: HelpOverlay,

    /// Page title for the current filter
    pub title: &'static str,

    /// Material icon name for the filter button
    pub filter_icon: &'static str,

    /// Material icon name for the dark-mode button
    pub dark_mode_icon: &'static str,

    /// Active base tile layer
    pub base_layer: TileLayer,

    /// Station markers and the user's position, in placement order
    pub layers: Vec<PlacedLayer>,

    /// Message shown over the map (e.g. stations unavailable)
    pub notice: Option<String>,

    /// Render pass currently on the map
    pub generation: Option<Generation>,

    /// When the feed last updated station status
    pub last_updated: Option<DateTime<Utc>>,
}

impl From<MapState> for MapView {
    fn from(state: MapState) -> Self {
        Self {
            filter: state.filter,
            appearance: state.appearance,
            help: state.help,
            title: state.filter.title(),
            filter_icon: state.filter.button_icon(),
            dark_mode_icon: state.appearance.button_icon(),
            base_layer: state.scene.base_layer,
            layers: state.scene.layers,
            notice: state.scene.notice,
            generation: state.generation,
            last_updated: state.last_updated,
        }
    }
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}
