//! "You are here" marker from a browser geolocation fix.

use serde::Deserialize;

use crate::map::{Circle, LatLng};

/// Popup text on the user's position.
pub const YOU_ARE_HERE: &str = "You are here";

/// A one-shot position report from the browser.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Position {
    pub lat: f64,
    pub lon: f64,
    /// Accuracy radius in metres
    pub accuracy: f64,
}

/// Error returned for a position the map can't show.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LocateError {
    #[error("coordinates out of range: {0}")]
    InvalidCoordinates(LatLng),

    #[error("accuracy must be a non-negative number of metres, got {0}")]
    InvalidAccuracy(f64),
}

impl Position {
    /// Circle centred on the position, with a radius of half the accuracy.
    pub fn circle(&self) -> Result<Circle, LocateError> {
        let center = LatLng::new(self.lat, self.lon);
        if !center.is_valid() {
            return Err(LocateError::InvalidCoordinates(center));
        }
        if !self.accuracy.is_finite() || self.accuracy < 0.0 {
            return Err(LocateError::InvalidAccuracy(self.accuracy));
        }

        Ok(Circle {
            center,
            radius_m: self.accuracy / 2.0,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn radius_is_half_accuracy() {
        let pos = Position {
            lat: 59.9139,
            lon: 10.7522,
            accuracy: 40.0,
        };
        let circle = pos.circle().unwrap();
        assert_eq!(circle.center, LatLng::new(59.9139, 10.7522));
        assert_eq!(circle.radius_m, 20.0);
    }

    #[test]
    fn zero_accuracy_is_allowed() {
        let pos = Position {
            lat: 0.0,
            lon: 0.0,
            accuracy: 0.0,
        };
        assert_eq!(pos.circle().unwrap().radius_m, 0.0);
    }

    #[test]
    fn rejects_bad_positions() {
        let pos = Position {
            lat: 120.0,
            lon: 0.0,
            accuracy: 10.0,
        };
        assert!(matches!(
            pos.circle(),
            Err(LocateError::InvalidCoordinates(_))
        ));

        let pos = Position {
            lat: 10.0,
            lon: 0.0,
            accuracy: -1.0,
        };
        assert_eq!(pos.circle(), Err(LocateError::InvalidAccuracy(-1.0)));

        let pos = Position {
            lat: 10.0,
            lon: 0.0,
            accuracy: f64::NAN,
        };
        assert!(matches!(pos.circle(), Err(LocateError::InvalidAccuracy(_))));
    }

    #[test]
    fn deserializes_from_browser_payload() {
        let pos: Position =
            serde_json::from_str(r#"{"lat": 59.9, "lon": 10.7, "accuracy": 25.5}"#).unwrap();
        assert_eq!(pos.accuracy, 25.5);
    }
}
