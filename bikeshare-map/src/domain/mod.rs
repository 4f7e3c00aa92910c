//! Domain types for the station map.
//!
//! Station records as the rest of the crate sees them, independent of the
//! GBFS wire format, plus the toggle states and render errors.

mod error;
mod mode;
mod station;

pub use error::RenderError;
pub use mode::{Appearance, FilterMode, HelpOverlay};
pub use station::{InvalidStationId, StationId, StationInfo, StationStatus, StationView};
