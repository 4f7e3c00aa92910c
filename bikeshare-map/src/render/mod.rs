//! Merge/render step.
//!
//! Joins a [`Snapshot`](crate::snapshot::Snapshot) into one marker per
//! station and keeps track of which markers are on the map.

mod icon;
mod layer;
mod markers;

pub use icon::StationIcon;
pub use layer::{Applied, Generation, RenderGenerations, StationLayer};
pub use markers::{PopupTemplate, StationMarker, render_stations};
