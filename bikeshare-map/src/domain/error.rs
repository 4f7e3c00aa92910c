//! Render pass error types.
//!
//! A render pass can fail either because a feed could not be read or
//! because the two feeds disagree about which stations exist.

use crate::feed::FeedError;

use super::StationId;

/// Errors that abort a render pass.
///
/// A failed pass never touches the markers already on the map.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// Either feed failed (network, HTTP status or malformed body)
    #[error("feed unavailable: {0}")]
    FeedUnavailable(#[from] FeedError),

    /// The status feed lists a station the information feed does not know
    #[error("station {station_id} has status but no station information")]
    JoinMismatch { station_id: StationId },

    /// A station popup could not be rendered
    #[error("popup template error: {message}")]
    Template { message: String },
}
