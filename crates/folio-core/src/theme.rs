//! Persisted light/dark theme preference.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::FolioResult;

/// Storage key holding the theme flag.
pub const THEME_KEY: &str = "theme";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    /// Only an explicit `"light"` selects the light theme.
    pub fn from_stored(value: Option<&str>) -> Theme {
        match value {
            Some("light") => Theme::Light,
            _ => Theme::Dark,
        }
    }

    pub fn toggled(&self) -> Theme {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

/// String key/value store backing user preferences.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> FolioResult<()>;
}

/// In-memory preference store.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> FolioResult<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// The active theme together with the store it is persisted in.
#[derive(Debug)]
pub struct ThemePreference<S> {
    store: S,
    theme: Theme,
}

impl<S: PreferenceStore> ThemePreference<S> {
    /// Read the saved theme, defaulting to dark.
    pub fn load(store: S) -> Self {
        let theme = Theme::from_stored(store.get(THEME_KEY).as_deref());
        Self { store, theme }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Flip the theme and persist the new value.
    pub fn toggle(&mut self) -> FolioResult<Theme> {
        let next = self.theme.toggled();
        self.store.set(THEME_KEY, next.as_str())?;
        self.theme = next;
        tracing::debug!(theme = next.as_str(), "Theme toggled");
        Ok(next)
    }

    /// Class to put on `<body>`, if any.
    pub fn body_class(&self) -> Option<&'static str> {
        match self.theme {
            Theme::Light => Some("light-theme"),
            Theme::Dark => None,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
