//! The map surface abstraction.

use std::fmt;

use serde::Serialize;

use super::tiles::TileLayer;

/// A WGS84 coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LatLng {
    pub lat: f64,
    pub lon: f64,
}

impl LatLng {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Finite and within latitude/longitude bounds.
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lon.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lon)
    }
}

impl fmt::Display for LatLng {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.lat, self.lon)
    }
}

/// Handle to a layer placed on a surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct LayerId(pub u64);

/// Image and geometry of a marker icon, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IconSpec {
    pub url: &'static str,
    pub size: [u32; 2],
    pub anchor: [i32; 2],
    pub popup_anchor: [i32; 2],
}

/// A point marker with an icon.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub position: LatLng,
    pub icon: IconSpec,
}

/// A circle with a radius in metres.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Circle {
    pub center: LatLng,
    pub radius_m: f64,
}

/// Operations the app needs from a map.
pub trait MapSurface {
    /// Add a marker and return its handle.
    fn add_marker(&mut self, marker: Marker) -> LayerId;

    /// Draw a circle and return its handle.
    fn add_circle(&mut self, circle: Circle) -> LayerId;

    /// Attach popup content (HTML) to a layer. Returns false for unknown ids.
    fn bind_popup(&mut self, id: LayerId, html: String) -> bool;

    /// Remove a marker or circle. Returns false for unknown ids.
    fn remove_layer(&mut self, id: LayerId) -> bool;

    /// Replace the active base tile layer.
    fn set_base_layer(&mut self, layer: TileLayer);

    /// Show or clear a message over the map.
    fn set_notice(&mut self, notice: Option<String>);
}
