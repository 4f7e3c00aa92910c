//! The three user-facing toggles.
//!
//! Each toggle is a small value type owned by whoever renders it. Flipping
//! one never touches the others.

use serde::Serialize;

/// Which availability metric drives station icons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterMode {
    /// Looking for a bike to pick up.
    #[default]
    Bikes,
    /// Looking for a free dock to park at.
    Docks,
}

impl FilterMode {
    /// The other mode.
    pub fn toggled(self) -> Self {
        match self {
            FilterMode::Bikes => FilterMode::Docks,
            FilterMode::Docks => FilterMode::Bikes,
        }
    }

    /// Page title shown while this mode is active.
    pub fn title(self) -> &'static str {
        match self {
            FilterMode::Bikes => "Find a bike",
            FilterMode::Docks => "Find somewhere to park",
        }
    }

    /// Material icon on the filter button. The button shows the mode a
    /// click switches to.
    pub fn button_icon(self) -> &'static str {
        match self {
            FilterMode::Bikes => "local_parking",
            FilterMode::Docks => "pedal_bike",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FilterMode::Bikes => "bikes",
            FilterMode::Docks => "docks",
        }
    }
}

/// Light or dark base map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Appearance {
    #[default]
    Light,
    Dark,
}

impl Appearance {
    pub fn toggled(self) -> Self {
        match self {
            Appearance::Light => Appearance::Dark,
            Appearance::Dark => Appearance::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Appearance::Dark
    }

    /// Material icon on the dark-mode button.
    pub fn button_icon(self) -> &'static str {
        match self {
            Appearance::Light => "nights_stay",
            Appearance::Dark => "wb_sunny",
        }
    }
}

/// Visibility of the static help panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HelpOverlay {
    #[default]
    Hidden,
    Visible,
}

impl HelpOverlay {
    pub fn toggled(self) -> Self {
        match self {
            HelpOverlay::Hidden => HelpOverlay::Visible,
            HelpOverlay::Visible => HelpOverlay::Hidden,
        }
    }

    pub fn is_visible(self) -> bool {
        self == HelpOverlay::Visible
    }

    /// CSS class applied to the help panel.
    pub fn css_class(self) -> &'static str {
        match self {
            HelpOverlay::Hidden => "hidden",
            HelpOverlay::Visible => "visible",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_states() {
        assert_eq!(FilterMode::default(), FilterMode::Bikes);
        assert_eq!(Appearance::default(), Appearance::Light);
        assert_eq!(HelpOverlay::default(), HelpOverlay::Hidden);
    }

    #[test]
    fn filter_flips_unconditionally() {
        assert_eq!(FilterMode::Bikes.toggled(), FilterMode::Docks);
        assert_eq!(FilterMode::Docks.toggled(), FilterMode::Bikes);
    }

    #[test]
    fn filter_labels() {
        assert_eq!(FilterMode::Bikes.title(), "Find a bike");
        assert_eq!(FilterMode::Docks.title(), "Find somewhere to park");
        assert_eq!(FilterMode::Bikes.button_icon(), "local_parking");
        assert_eq!(FilterMode::Docks.button_icon(), "pedal_bike");
    }

    #[test]
    fn appearance_toggle() {
        let dark = Appearance::Light.toggled();
        assert!(dark.is_dark());
        assert_eq!(dark.button_icon(), "wb_sunny");
        assert!(!dark.toggled().is_dark());
    }

    #[test]
    fn help_toggle() {
        let shown = HelpOverlay::Hidden.toggled();
        assert!(shown.is_visible());
        assert_eq!(shown.css_class(), "visible");
        assert_eq!(shown.toggled().css_class(), "hidden");
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(serde_json::to_string(&FilterMode::Docks).unwrap(), "\"docks\"");
        assert_eq!(serde_json::to_string(&Appearance::Dark).unwrap(), "\"dark\"");
        assert_eq!(
            serde_json::to_string(&HelpOverlay::Visible).unwrap(),
            "\"visible\""
        );
    }
}
