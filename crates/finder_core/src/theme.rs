use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    /// The theme checkbox is checked exactly when the light theme is active.
    pub fn from_toggle(checked: bool) -> Self {
        if checked {
            Theme::Light
        } else {
            Theme::Dark
        }
    }

    pub fn toggle_checked(self) -> bool {
        self == Theme::Light
    }

    /// Body class applied for this theme, if any.
    pub fn body_class(self) -> Option<&'static str> {
        match self {
            Theme::Light => Some("light-theme"),
            Theme::Dark => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

/// Picks the startup theme: a saved preference wins, otherwise follow the system.
pub fn resolve_initial_theme(saved: Option<Theme>, prefers_dark: bool) -> Theme {
    match saved {
        Some(theme) => theme,
        None if prefers_dark => Theme::Dark,
        None => Theme::Light,
    }
}
