//! The map application: toggle states wired to the render step.
//!
//! Each piece of UI state is owned separately and only re-renders what it
//! affects:
//! - the filter re-renders every station marker
//! - appearance swaps the base tile layer
//! - the help overlay only flips its own flag
//!
//! Fetching a snapshot is separate from rendering one. `refresh` hits the
//! feed; toggling the filter re-renders the last snapshot.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, info, warn};

use crate::domain::{Appearance, FilterMode, HelpOverlay, RenderError};
use crate::feed::StationFeed;
use crate::locate::{LocateError, Position, YOU_ARE_HERE};
use crate::map::{LayerId, MapSurface, Scene, SceneView, TileLayer};
use crate::render::{Applied, Generation, RenderGenerations, StationLayer, render_stations};
use crate::snapshot::Snapshot;

/// Everything drawn on the map, guarded together.
#[derive(Debug, Default)]
struct Canvas {
    scene: Scene,
    stations: StationLayer,
    user_location: Option<LayerId>,
}

/// Last fetched snapshot, tagged with the fetch that produced it.
#[derive(Debug)]
struct Cached {
    fetch: u64,
    snapshot: Arc<Snapshot>,
}

/// Point-in-time copy of the app for the page.
#[derive(Debug, Clone)]
pub struct MapState {
    pub filter: FilterMode,
    pub appearance: Appearance,
    pub help: HelpOverlay,
    pub scene: SceneView,
    /// Generation of the station markers on the map
    pub generation: Option<Generation>,
    pub last_updated: Option<DateTime<Utc>>,
}

/// Bike-share map backed by a station feed.
pub struct MapApp<F> {
    feed: F,
    filter: RwLock<FilterMode>,
    appearance: RwLock<Appearance>,
    help: RwLock<HelpOverlay>,
    snapshot: RwLock<Option<Cached>>,
    fetches: AtomicU64,
    generations: RenderGenerations,
    canvas: Mutex<Canvas>,
}

impl<F: StationFeed> MapApp<F> {
    /// Create an app with initial states: bikes, light, help hidden.
    pub fn new(feed: F) -> Self {
        let appearance = Appearance::default();
        Self {
            feed,
            filter: RwLock::new(FilterMode::default()),
            appearance: RwLock::new(appearance),
            help: RwLock::new(HelpOverlay::default()),
            snapshot: RwLock::new(None),
            fetches: AtomicU64::new(0),
            generations: RenderGenerations::new(),
            canvas: Mutex::new(Canvas {
                scene: Scene::new(TileLayer::for_appearance(appearance)),
                ..Canvas::default()
            }),
        }
    }

    pub fn feed(&self) -> &F {
        &self.feed
    }

    pub async fn filter(&self) -> FilterMode {
        *self.filter.read().await
    }

    pub async fn appearance(&self) -> Appearance {
        *self.appearance.read().await
    }

    pub async fn help(&self) -> HelpOverlay {
        *self.help.read().await
    }

    /// Fetch a fresh snapshot and render it under the current filter.
    ///
    /// The snapshot is cached even if a filter toggle renders in the
    /// meantime; only a newer fetch supersedes it.
    pub async fn refresh(&self) -> Result<Applied, RenderError> {
        let fetch = self.fetches.fetch_add(1, Ordering::SeqCst);
        let observed = self.generations.latest();

        let fetched = match Snapshot::fetch(&self.feed).await {
            Ok(snapshot) => self.store(fetch, snapshot).await,
            Err(e) => return Err(self.fail(observed, e).await),
        };

        let (generation, mode) = self.begin_pass().await;
        let snapshot = self.cached().await.unwrap_or(fetched);
        self.render(generation, &snapshot, mode).await
    }

    /// Flip between bikes and docks and re-render the stations.
    ///
    /// Uses the last snapshot; fetches one only if none exists yet. The new
    /// mode sticks even if rendering fails.
    pub async fn toggle_filter(&self) -> Result<Applied, RenderError> {
        let (generation, mode) = {
            let mut filter = self.filter.write().await;
            *filter = filter.toggled();
            (self.generations.next(), *filter)
        };
        info!(mode = mode.as_str(), generation = generation.0, "filter toggled");

        match self.cached().await {
            Some(snapshot) => self.render(generation, &snapshot, mode).await,
            None => self.refresh().await,
        }
    }

    /// Switch between the light and dark base map.
    pub async fn toggle_appearance(&self) -> Appearance {
        let appearance = {
            let mut current = self.appearance.write().await;
            *current = current.toggled();
            *current
        };

        let mut canvas = self.canvas.lock().await;
        canvas
            .scene
            .set_base_layer(TileLayer::for_appearance(appearance));
        info!(dark = appearance.is_dark(), "appearance toggled");
        appearance
    }

    /// Show or hide the help panel.
    pub async fn toggle_help(&self) -> HelpOverlay {
        let mut help = self.help.write().await;
        *help = help.toggled();
        debug!(visible = help.is_visible(), "help toggled");
        *help
    }

    /// Place the "You are here" circle, replacing any earlier one.
    pub async fn locate(&self, position: Position) -> Result<LayerId, LocateError> {
        let circle = position.circle()?;

        let mut canvas = self.canvas.lock().await;
        if let Some(previous) = canvas.user_location.take() {
            canvas.scene.remove_layer(previous);
        }
        let id = canvas.scene.add_circle(circle);
        canvas.scene.bind_popup(id, YOU_ARE_HERE.to_string());
        canvas.user_location = Some(id);

        debug!(lat = position.lat, lon = position.lon, radius = circle.radius_m, "user located");
        Ok(id)
    }

    /// Copy of everything the page needs.
    pub async fn state(&self) -> MapState {
        let filter = self.filter().await;
        let appearance = self.appearance().await;
        let help = self.help().await;
        let last_updated = self.cached().await.and_then(|s| s.last_updated);

        let canvas = self.canvas.lock().await;
        MapState {
            filter,
            appearance,
            help,
            scene: canvas.scene.view(),
            generation: canvas.stations.applied(),
            last_updated,
        }
    }

    /// Take a generation together with the filter it renders.
    ///
    /// Toggles flip the filter and take their generation under the write
    /// lock, so generation order always matches filter order.
    async fn begin_pass(&self) -> (Generation, FilterMode) {
        let filter = self.filter.read().await;
        (self.generations.next(), *filter)
    }

    async fn cached(&self) -> Option<Arc<Snapshot>> {
        self.snapshot.read().await.as_ref().map(|c| c.snapshot.clone())
    }

    /// Cache a fetched snapshot unless a later fetch already landed.
    async fn store(&self, fetch: u64, snapshot: Snapshot) -> Arc<Snapshot> {
        let snapshot = Arc::new(snapshot);
        let mut cached = self.snapshot.write().await;
        match cached.as_ref() {
            Some(newer) if newer.fetch > fetch => {
                debug!(fetch, newer = newer.fetch, "dropping superseded snapshot");
            }
            _ => {
                *cached = Some(Cached {
                    fetch,
                    snapshot: snapshot.clone(),
                });
            }
        }
        snapshot
    }

    async fn render(
        &self,
        generation: Generation,
        snapshot: &Snapshot,
        mode: FilterMode,
    ) -> Result<Applied, RenderError> {
        let markers = match render_stations(snapshot, mode) {
            Ok(markers) => markers,
            Err(e) => return Err(self.fail(generation, e).await),
        };

        let mut canvas = self.canvas.lock().await;
        let Canvas {
            scene, stations, ..
        } = &mut *canvas;

        let applied = stations.apply(scene, &self.generations, generation, markers);
        if let Applied::Replaced { markers, .. } = applied {
            scene.set_notice(None);
            info!(
                generation = generation.0,
                markers,
                mode = mode.as_str(),
                "stations rendered"
            );
        }
        Ok(applied)
    }

    /// Record a failed pass. Markers stay as they are; the notice goes up
    /// only if no pass was requested after `generation`.
    async fn fail(&self, generation: Generation, error: RenderError) -> RenderError {
        warn!(generation = generation.0, %error, "render pass failed");

        let mut canvas = self.canvas.lock().await;
        if self.generations.is_latest(generation) {
            canvas
                .scene
                .set_notice(Some(format!("Stations unavailable: {error}")));
        }
        error
    }
}
