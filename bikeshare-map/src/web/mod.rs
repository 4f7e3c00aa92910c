//! Web layer for the station map.
//!
//! Serves the map page and a small JSON API; each toggle endpoint changes
//! one piece of state and returns the updated map.

mod dto;
mod routes;
mod state;
pub mod templates;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
pub use templates::*;
