//! Theme model and its persistence
//!
//! Provides:
//! - Theme enum (Light, Dark)
//! - Startup resolution: persisted value, then OS preference, then light
//! - ThemeStore for reading, writing and toggling the persisted value

use super::storage::{KeyValueStore, THEME_KEY};

/// UI color theme
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Persisted value, also the class set on the document element
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Parse a persisted value. Anything else is treated as absent.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }

    /// Accessible label for the toggle button
    pub fn toggle_label(&self) -> &'static str {
        match self {
            Theme::Light => "Switch to dark mode",
            Theme::Dark => "Switch to light mode",
        }
    }
}

/// Reads and writes the theme preference in a [`KeyValueStore`]
#[derive(Debug, Clone)]
pub struct ThemeStore<S> {
    store: S,
}

impl<S: KeyValueStore> ThemeStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Theme persisted by a previous session, if any
    pub fn persisted(&self) -> Option<Theme> {
        self.store.get(THEME_KEY).and_then(|v| Theme::parse(&v))
    }

    /// Resolve the startup theme.
    ///
    /// `system_prefers_dark` is `None` when there is no browser to ask.
    pub fn resolve(&self, system_prefers_dark: Option<bool>) -> Theme {
        if let Some(theme) = self.persisted() {
            return theme;
        }
        match system_prefers_dark {
            Some(true) => Theme::Dark,
            Some(false) | None => Theme::Light,
        }
    }

    pub fn save(&self, theme: Theme) {
        self.store.set(THEME_KEY, theme.as_str());
    }

    /// Flip `current`, persist the result and return it
    pub fn toggle(&self, current: Theme) -> Theme {
        let next = current.toggled();
        self.save(next);
        next
    }
}
