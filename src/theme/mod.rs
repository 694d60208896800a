//! Theme preference store
//!
//! A single-writer, multi-reader cell holding the visual theme preference,
//! persisted through an injected storage backend. Rendering code subscribes
//! to changes and mirrors the value onto whatever surface it styles.

mod storage;

pub use storage::{FilePreferences, MemoryPreferences, PreferenceStore};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tokio::sync::watch;

/// Storage key the preference is persisted under
pub const STORAGE_KEY: &str = "color-scheme";

/// The visual theme preference
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Legal values, in toggle order
    pub const ALL: [Theme; 2] = [Theme::Light, Theme::Dark];

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// The next theme in cyclic order
    pub fn next(self) -> Theme {
        let pos = Self::ALL.iter().position(|t| *t == self).unwrap_or(0);
        Self::ALL[(pos + 1) % Self::ALL.len()]
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            _ => Err(()),
        }
    }
}

/// The theme preference store.
///
/// Holds the current value in memory, persists changes through the injected
/// backend and broadcasts them to subscribers. Without a backend the store
/// reports the default, matching environments where persisted storage is
/// unavailable.
pub struct ThemeStore {
    storage: Option<Box<dyn PreferenceStore>>,
    current: watch::Sender<Theme>,
}

impl ThemeStore {
    /// Create a store backed by persistent storage.
    ///
    /// A previously persisted value is restored when present and valid;
    /// otherwise the default applies.
    pub fn new(storage: Box<dyn PreferenceStore>) -> Self {
        let initial = storage
            .load(STORAGE_KEY)
            .and_then(|raw| raw.parse().ok())
            .unwrap_or_default();

        let (current, _) = watch::channel(initial);
        Self {
            storage: Some(storage),
            current,
        }
    }

    /// Create a store with no storage attached; `get` reports the default
    pub fn detached() -> Self {
        let (current, _) = watch::channel(Theme::default());
        Self {
            storage: None,
            current,
        }
    }

    /// Current theme
    pub fn get(&self) -> Theme {
        *self.current.borrow()
    }

    /// Set the theme, persisting and notifying subscribers
    pub fn set(&self, theme: Theme) {
        if let Some(storage) = &self.storage {
            storage.store(STORAGE_KEY, theme.as_str());
        }
        self.current.send_replace(theme);
    }

    /// Set the theme from its string form; values outside the legal set are
    /// silently ignored
    pub fn set_str(&self, value: &str) {
        if let Ok(theme) = value.parse() {
            self.set(theme);
        }
    }

    /// Advance to the next theme and return it
    pub fn toggle(&self) -> Theme {
        let next = self.get().next();
        self.set(next);
        next
    }

    /// Subscribe to theme changes
    pub fn subscribe(&self) -> watch::Receiver<Theme> {
        self.current.subscribe()
    }
}
