//! Placed station markers and render generations.
//!
//! Every render pass takes a [`Generation`] when it starts. When it
//! finishes, its markers are applied only if no newer pass has been
//! requested since. This keeps a slow, older pass from overwriting the
//! result of a faster, newer one.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;
use tracing::debug;

use crate::domain::StationId;
use crate::map::{LayerId, MapSurface};

use super::markers::StationMarker;

/// Sequence number of a render pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Generation(pub u64);

/// Monotonic source of render generations.
#[derive(Debug, Default)]
pub struct RenderGenerations {
    latest: AtomicU64,
}

impl RenderGenerations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new pass. Everything issued before it becomes stale.
    pub fn next(&self) -> Generation {
        Generation(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// The most recently issued generation.
    pub fn latest(&self) -> Generation {
        Generation(self.latest.load(Ordering::SeqCst))
    }

    pub fn is_latest(&self, generation: Generation) -> bool {
        self.latest() == generation
    }
}

/// Outcome of trying to apply a finished pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    /// Markers were replaced
    Replaced { generation: Generation, markers: usize },
    /// A newer pass was requested meanwhile; nothing changed
    Stale { generation: Generation },
}

/// The station markers currently on a surface.
///
/// Owns the handles of everything it placed, so a new pass can take the
/// old markers down before putting the new ones up.
#[derive(Debug, Default)]
pub struct StationLayer {
    placed: Vec<(StationId, LayerId)>,
    applied: Option<Generation>,
}

impl StationLayer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace all placed markers with `markers`, unless `generation` is stale.
    ///
    /// Callers hold exclusive access to the surface for the whole call, so
    /// nobody observes a half-replaced layer.
    pub fn apply<S: MapSurface>(
        &mut self,
        surface: &mut S,
        generations: &RenderGenerations,
        generation: Generation,
        markers: Vec<StationMarker>,
    ) -> Applied {
        if !generations.is_latest(generation) {
            debug!(
                generation = generation.0,
                latest = generations.latest().0,
                "discarding stale render pass"
            );
            return Applied::Stale { generation };
        }

        self.clear(surface);

        for station in markers {
            let id = surface.add_marker(station.marker);
            surface.bind_popup(id, station.popup);
            self.placed.push((station.station_id, id));
        }
        self.applied = Some(generation);

        Applied::Replaced {
            generation,
            markers: self.placed.len(),
        }
    }

    /// Remove every marker this layer placed.
    pub fn clear<S: MapSurface>(&mut self, surface: &mut S) {
        for (_, id) in self.placed.drain(..) {
            surface.remove_layer(id);
        }
    }

    /// Generation of the pass currently on the map.
    pub fn applied(&self) -> Option<Generation> {
        self.applied
    }
}

#[cfg(test)]
impl StationLayer {
    /// Handle of the marker placed for a station.
    pub fn marker_for(&self, station: &StationId) -> Option<LayerId> {
        self.placed
            .iter()
            .find(|(s, _)| s == station)
            .map(|(_, id)| *id)
    }

    pub fn len(&self) -> usize {
        self.placed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placed.is_empty()
    }
}
