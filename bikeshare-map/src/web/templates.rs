//! Askama templates for the web frontend.

use askama::Template;

use crate::app::MapState;
use crate::config::MapConfig;

/// The map page.
///
/// Control labels are rendered server-side so the first paint matches the
/// current state; the page script keeps them in sync afterwards.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub title: &'static str,
    pub filter_icon: &'static str,
    pub dark_mode_icon: &'static str,
    pub dark_mode_on: bool,
    pub help_class: &'static str,
    pub center_lat: f64,
    pub center_lon: f64,
    pub zoom: u8,
    pub locate_max_zoom: u8,
}

impl IndexTemplate {
    pub fn new(state: &MapState, map: &MapConfig) -> Self {
        Self {
            title: state.filter.title(),
            filter_icon: state.filter.button_icon(),
            dark_mode_icon: state.appearance.button_icon(),
            dark_mode_on: state.appearance.is_dark(),
            help_class: state.help.css_class(),
            center_lat: map.center.lat,
            center_lon: map.center.lon,
            zoom: map.zoom,
            locate_max_zoom: map.locate_max_zoom,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Appearance, FilterMode, HelpOverlay};
    use crate::map::Scene;

    fn state(filter: FilterMode, appearance: Appearance, help: HelpOverlay) -> MapState {
        MapState {
            filter,
            appearance,
            help,
            scene: Scene::default().view(),
            generation: None,
            last_updated: None,
        }
    }

    #[test]
    fn renders_initial_labels() {
        let html = IndexTemplate::new(
            &state(FilterMode::Bikes, Appearance::Light, HelpOverlay::Hidden),
            &MapConfig::default(),
        )
        .render()
        .unwrap();

        assert!(html.contains("Find a bike"));
        assert!(html.contains(r#"id="filter_icon">local_parking<"#));
        assert!(html.contains(r#"id="dark_mode_icon">nights_stay<"#));
        assert!(html.contains("help_container hidden"));
        assert!(html.contains("59.9139"));
    }

    #[test]
    fn renders_toggled_labels() {
        let html = IndexTemplate::new(
            &state(FilterMode::Docks, Appearance::Dark, HelpOverlay::Visible),
            &MapConfig::default(),
        )
        .render()
        .unwrap();

        assert!(html.contains("Find somewhere to park"));
        assert!(html.contains(r#"id="filter_icon">pedal_bike<"#));
        assert!(html.contains(r#"id="dark_mode_icon">wb_sunny<"#));
        assert!(html.contains("help_container visible"));
        assert!(html.contains(r#"class="dark_mode on""#));
    }
}
