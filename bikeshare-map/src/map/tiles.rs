//! Base tile layer presets.

use serde::Serialize;

use crate::domain::Appearance;

/// CSS filter applied to the dark preset's tiles.
const DARK_FILTER: &[&str] = &[
    "blur:0px",
    "brightness:40%",
    "contrast:130%",
    "grayscale:80%",
    "hue:0deg",
    "opacity:100%",
    "invert:0%",
    "saturate:100%",
    "sepia:10%",
];

/// A raster tile source as Leaflet expects it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TileLayer {
    pub name: &'static str,
    pub url_template: &'static str,
    pub attribution: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subdomains: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_zoom: Option<u8>,
    /// Colour filter entries; empty means the tiles are shown unmodified
    pub color_filter: &'static [&'static str],
}

impl TileLayer {
    /// CARTO Voyager, the default light map.
    pub const fn light() -> Self {
        Self {
            name: "light",
            url_template: "https://{s}.basemaps.cartocdn.com/rastertiles/voyager_labels_under/{z}/{x}/{y}{r}.png",
            attribution: "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors &copy; <a href=\"https://carto.com/attributions\">CARTO</a>",
            subdomains: Some("abcd"),
            max_zoom: Some(19),
            color_filter: &[],
        }
    }

    /// Wikimedia OSM tiles, darkened and desaturated.
    pub const fn dark() -> Self {
        Self {
            name: "dark",
            url_template: "https://maps.wikimedia.org/osm-intl/{z}/{x}/{y}.png",
            attribution: "<a href=\"https://wikimediafoundation.org/wiki/Maps_Terms_of_Use\">Wikimedia</a>",
            subdomains: None,
            max_zoom: None,
            color_filter: DARK_FILTER,
        }
    }

    pub const fn for_appearance(appearance: Appearance) -> Self {
        match appearance {
            Appearance::Light => Self::light(),
            Appearance::Dark => Self::dark(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_follow_appearance() {
        assert_eq!(TileLayer::for_appearance(Appearance::Light), TileLayer::light());
        assert_eq!(TileLayer::for_appearance(Appearance::Dark), TileLayer::dark());
    }

    #[test]
    fn only_dark_is_filtered() {
        assert!(TileLayer::light().color_filter.is_empty());
        assert!(TileLayer::dark().color_filter.contains(&"brightness:40%"));
        assert_eq!(TileLayer::dark().color_filter.len(), 9);
    }

    #[test]
    fn serialization_omits_missing_options() {
        let json = serde_json::to_value(TileLayer::dark()).unwrap();
        assert!(json.get("subdomains").is_none());
        assert!(json.get("max_zoom").is_none());

        let json = serde_json::to_value(TileLayer::light()).unwrap();
        assert_eq!(json["subdomains"], "abcd");
        assert_eq!(json["max_zoom"], 19);
    }
}
