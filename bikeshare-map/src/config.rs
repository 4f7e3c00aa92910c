//! Server and map configuration.
//!
//! Everything has a built-in default. A few deployment settings can be
//! overridden from the environment.

use std::net::SocketAddr;
use std::path::PathBuf;

use crate::feed::{DEFAULT_BASE_URL, DEFAULT_CLIENT_ID, FeedConfig};
use crate::map::LatLng;

/// Default listen address.
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

/// Default directory for static assets.
const DEFAULT_STATIC_DIR: &str = "static";

/// Error returned for an unusable environment override.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {var}: {message}")]
pub struct ConfigError {
    pub var: &'static str,
    pub message: String,
}

/// Fixed map presentation settings.
#[derive(Debug, Clone, PartialEq)]
pub struct MapConfig {
    /// Initial centre when the user's position is unknown (Oslo)
    pub center: LatLng,
    /// Initial zoom level
    pub zoom: u8,
    /// Max zoom when jumping to the user's position
    pub locate_max_zoom: u8,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            center: LatLng::new(59.9139, 10.7522),
            zoom: 15,
            locate_max_zoom: 17,
        }
    }
}

/// Top-level server configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub feed: FeedConfig,
    /// Serve saved feed documents from here instead of the network
    pub fixture_dir: Option<PathBuf>,
    pub static_dir: PathBuf,
    pub map: MapConfig,
}

impl AppConfig {
    /// Read overrides from the process environment.
    ///
    /// - `BIKESHARE_BIND_ADDR`
    /// - `GBFS_BASE_URL`
    /// - `GBFS_CLIENT_ID`
    /// - `GBFS_FIXTURE_DIR`
    /// - `BIKESHARE_STATIC_DIR`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let bind_str = get("BIKESHARE_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr: SocketAddr = bind_str.parse().map_err(|_| ConfigError {
            var: "BIKESHARE_BIND_ADDR",
            message: format!("not a socket address: {bind_str}"),
        })?;

        let base_url = get("GBFS_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(ConfigError {
                var: "GBFS_BASE_URL",
                message: format!("expected an http(s) URL, got {base_url}"),
            });
        }

        let client_id = get("GBFS_CLIENT_ID").unwrap_or_else(|| DEFAULT_CLIENT_ID.to_string());

        Ok(Self {
            bind_addr,
            feed: FeedConfig::new()
                .with_base_url(base_url)
                .with_client_id(client_id),
            fixture_dir: get("GBFS_FIXTURE_DIR").map(PathBuf::from),
            static_dir: get("BIKESHARE_STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR)),
            map: MapConfig::default(),
        })
    }
}
