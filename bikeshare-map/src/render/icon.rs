//! Station icon selection.

use serde::Serialize;

use crate::domain::{FilterMode, StationStatus};
use crate::map::IconSpec;

const ICON_SIZE: [u32; 2] = [30, 30];
const ICON_ANCHOR: [i32; 2] = [5, 5];
const POPUP_ANCHOR: [i32; 2] = [10, 0];

/// The four station icons. There are no partial-availability tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StationIcon {
    BikesAvailable,
    NoBikes,
    DocksAvailable,
    NoDocks,
}

impl StationIcon {
    /// Pick the icon for a station under the given filter.
    pub fn select(mode: FilterMode, status: &StationStatus) -> Self {
        match mode {
            FilterMode::Bikes if status.bikes_available == 0 => StationIcon::NoBikes,
            FilterMode::Bikes => StationIcon::BikesAvailable,
            FilterMode::Docks if status.docks_available == 0 => StationIcon::NoDocks,
            FilterMode::Docks => StationIcon::DocksAvailable,
        }
    }

    /// Path of the icon asset under the static route.
    pub fn asset_path(self) -> &'static str {
        match self {
            StationIcon::BikesAvailable => "/static/icons/free_bikes.svg",
            StationIcon::NoBikes => "/static/icons/no_free_bikes.svg",
            StationIcon::DocksAvailable => "/static/icons/free_parking.svg",
            StationIcon::NoDocks => "/static/icons/no_free_parking.svg",
        }
    }

    pub fn spec(self) -> IconSpec {
        IconSpec {
            url: self.asset_path(),
            size: ICON_SIZE,
            anchor: ICON_ANCHOR,
            popup_anchor: POPUP_ANCHOR,
        }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Bikes mode depends only on whether bikes are available
        #[test]
        fn bikes_mode_ignores_docks(bikes in 0u32..100, docks in 0u32..100) {
            let icon = StationIcon::select(FilterMode::Bikes, &StationStatus {
                bikes_available: bikes,
                docks_available: docks,
            });
            let expected = if bikes == 0 { StationIcon::NoBikes } else { StationIcon::BikesAvailable };
            prop_assert_eq!(icon, expected);
        }

        /// Docks mode depends only on whether docks are free
        #[test]
        fn docks_mode_ignores_bikes(bikes in 0u32..100, docks in 0u32..100) {
            let icon = StationIcon::select(FilterMode::Docks, &StationStatus {
                bikes_available: bikes,
                docks_available: docks,
            });
            let expected = if docks == 0 { StationIcon::NoDocks } else { StationIcon::DocksAvailable };
            prop_assert_eq!(icon, expected);
        }

        /// Toggling the filter twice restores the icon
        #[test]
        fn double_toggle_restores_icon(bikes in 0u32..5, docks in 0u32..5, docks_first in any::<bool>()) {
            let mode = if docks_first { FilterMode::Docks } else { FilterMode::Bikes };
            let status = StationStatus { bikes_available: bikes, docks_available: docks };
            prop_assert_eq!(
                StationIcon::select(mode.toggled().toggled(), &status),
                StationIcon::select(mode, &status)
            );
        }
    }
}
