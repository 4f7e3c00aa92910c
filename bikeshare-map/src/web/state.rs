//! Application state for the web layer.

use std::sync::Arc;

use crate::app::MapApp;
use crate::config::MapConfig;
use crate::feed::FeedSource;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// The map and its toggles
    pub app: Arc<MapApp<FeedSource>>,

    /// Fixed map presentation settings
    pub map: Arc<MapConfig>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(app: MapApp<FeedSource>, map: MapConfig) -> Self {
        Self {
            app: Arc::new(app),
            map: Arc::new(map),
        }
    }
}
