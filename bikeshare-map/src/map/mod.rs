//! Map surface model.
//!
//! [`MapSurface`] is the narrow set of operations the app performs on a
//! map. [`Scene`] implements it in memory and is what the page mirrors.

mod scene;
mod surface;
mod tiles;

pub use scene::{PlacedLayer, Scene, SceneView, Shape};
pub use surface::{Circle, IconSpec, LatLng, LayerId, MapSurface, Marker};
pub use tiles::TileLayer;
