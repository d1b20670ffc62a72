use crate::storage::KeyValueStore;

pub const THEME_KEY: &str = "theme";
pub const LIGHT_MODE_CLASS: &str = "light-mode";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    /// Unknown values fall back to dark.
    pub fn parse(raw: &str) -> Self {
        if raw.trim() == "light" {
            Theme::Light
        } else {
            Theme::Dark
        }
    }

    /// The toggle reads "checked" as dark.
    pub fn from_toggle(checked: bool) -> Self {
        if checked {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    #[inline]
    pub fn toggle_checked(self) -> bool {
        self == Theme::Dark
    }

    #[inline]
    pub fn is_light(self) -> bool {
        self == Theme::Light
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemePolicy {
    /// Remember the visitor's choice in local storage.
    #[default]
    Persist,
    /// Always dark; any stored choice is discarded.
    ForceDark,
}

impl ThemePolicy {
    /// Theme to apply on page load.
    pub fn load(self, store: &mut dyn KeyValueStore) -> Theme {
        match self {
            ThemePolicy::Persist => store.get(THEME_KEY).map(|v| Theme::parse(&v)).unwrap_or_default(),
            ThemePolicy::ForceDark => {
                if let Err(e) = store.remove(THEME_KEY) {
                    log::warn!("[theme] could not clear stored theme: {e}");
                }
                Theme::Dark
            }
        }
    }

    /// Toggle changed; returns the theme to apply.
    pub fn toggled(self, checked: bool, store: &mut dyn KeyValueStore) -> Theme {
        match self {
            ThemePolicy::Persist => {
                let theme = Theme::from_toggle(checked);
                if let Err(e) = store.set(THEME_KEY, theme.as_str()) {
                    log::warn!("[theme] could not store theme: {e}");
                }
                theme
            }
            ThemePolicy::ForceDark => Theme::Dark,
        }
    }
}
