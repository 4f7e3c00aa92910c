//! In-memory map surface.
//!
//! The server keeps the authoritative map here; the page fetches a
//! [`SceneView`] and mirrors it with Leaflet.

use std::collections::BTreeMap;

use serde::Serialize;

use super::surface::{Circle, LayerId, MapSurface, Marker};
use super::tiles::TileLayer;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Shape {
    Marker(Marker),
    Circle(Circle),
}

/// A layer on the scene together with its popup.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlacedLayer {
    pub id: LayerId,
    #[serde(flatten)]
    pub shape: Shape,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub popup: Option<String>,
}

/// Serializable copy of the scene, layers in placement order.
#[derive(Debug, Clone, Serialize)]
pub struct SceneView {
    pub base_layer: TileLayer,
    pub layers: Vec<PlacedLayer>,
    pub notice: Option<String>,
}

/// Map state held by the server.
#[derive(Debug, Clone)]
pub struct Scene {
    next_id: u64,
    layers: BTreeMap<LayerId, PlacedLayer>,
    base_layer: TileLayer,
    notice: Option<String>,
}

impl Scene {
    pub fn new(base_layer: TileLayer) -> Self {
        Self {
            next_id: 1,
            layers: BTreeMap::new(),
            base_layer,
            notice: None,
        }
    }

    fn insert(&mut self, shape: Shape) -> LayerId {
        let id = LayerId(self.next_id);
        self.next_id += 1;
        self.layers.insert(
            id,
            PlacedLayer {
                id,
                shape,
                popup: None,
            },
        );
        id
    }

    pub fn view(&self) -> SceneView {
        SceneView {
            base_layer: self.base_layer,
            layers: self.layers.values().cloned().collect(),
            notice: self.notice.clone(),
        }
    }
}

/// Inspection helpers for tests.
#[cfg(test)]
impl Scene {
    pub fn layer(&self, id: LayerId) -> Option<&PlacedLayer> {
        self.layers.get(&id)
    }

    pub fn markers(&self) -> impl Iterator<Item = &PlacedLayer> {
        self.layers
            .values()
            .filter(|l| matches!(l.shape, Shape::Marker(_)))
    }

    pub fn circles(&self) -> impl Iterator<Item = &PlacedLayer> {
        self.layers
            .values()
            .filter(|l| matches!(l.shape, Shape::Circle(_)))
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    pub fn base_layer(&self) -> &TileLayer {
        &self.base_layer
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new(TileLayer::light())
    }
}

impl MapSurface for Scene {
    fn add_marker(&mut self, marker: Marker) -> LayerId {
        self.insert(Shape::Marker(marker))
    }

    fn add_circle(&mut self, circle: Circle) -> LayerId {
        self.insert(Shape::Circle(circle))
    }

    fn bind_popup(&mut self, id: LayerId, html: String) -> bool {
        match self.layers.get_mut(&id) {
            Some(layer) => {
                layer.popup = Some(html);
                true
            }
            None => false,
        }
    }

    fn remove_layer(&mut self, id: LayerId) -> bool {
        self.layers.remove(&id).is_some()
    }

    fn set_base_layer(&mut self, layer: TileLayer) {
        self.base_layer = layer;
    }

    fn set_notice(&mut self, notice: Option<String>) {
        self.notice = notice;
    }
}
