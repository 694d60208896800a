//! Preference persistence backends

use serde_json::Value;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

/// A simple string-keyed, string-valued preference store.
///
/// Implementations swallow their own failures: a read that fails reports the
/// value as absent, a write that fails is dropped.
pub trait PreferenceStore: Send + Sync {
    fn load(&self, key: &str) -> Option<String>;
    fn store(&self, key: &str, value: &str);
}

/// JSON-file-backed preferences
pub struct FilePreferences {
    path: PathBuf,
}

impl FilePreferences {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    fn read_all(&self) -> serde_json::Map<String, Value> {
        fs::read_to_string(&self.path)
            .ok()
            .and_then(|content| serde_json::from_str(&content).ok())
            .unwrap_or_default()
    }
}

impl PreferenceStore for FilePreferences {
    fn load(&self, key: &str) -> Option<String> {
        self.read_all()
            .get(key)
            .and_then(|v| v.as_str())
            .map(|s| s.to_string())
    }

    fn store(&self, key: &str, value: &str) {
        let mut all = self.read_all();
        all.insert(key.to_string(), Value::String(value.to_string()));

        if let Some(parent) = self.path.parent() {
            if fs::create_dir_all(parent).is_err() {
                tracing::warn!("Failed to create preference directory {:?}", parent);
                return;
            }
        }
        match serde_json::to_string_pretty(&all) {
            Ok(content) => {
                if let Err(e) = fs::write(&self.path, content) {
                    tracing::warn!("Failed to persist preference {:?}: {}", key, e);
                }
            }
            Err(e) => tracing::warn!("Failed to encode preferences: {}", e),
        }
    }
}

/// In-memory preferences, a stand-in for client-local storage in tests
#[derive(Default)]
pub struct MemoryPreferences {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryPreferences {
    fn load(&self, key: &str) -> Option<String> {
        self.values.lock().ok()?.get(key).cloned()
    }

    fn store(&self, key: &str, value: &str) {
        if let Ok(mut values) = self.values.lock() {
            values.insert(key.to_string(), value.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_preferences_roundtrip() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join(".folio").join("preferences.json");

        let prefs = FilePreferences::new(path.clone());
        assert_eq!(prefs.load("color-scheme"), None);

        prefs.store("color-scheme", "dark");
        assert_eq!(prefs.load("color-scheme"), Some("dark".to_string()));

        // A fresh handle reads the persisted value back
        let reopened = FilePreferences::new(path);
        assert_eq!(reopened.load("color-scheme"), Some("dark".to_string()));
    }

    #[test]
    fn test_file_preferences_corrupt_file_is_absent() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("preferences.json");
        fs::write(&path, "not json at all").unwrap();

        let prefs = FilePreferences::new(path);
        assert_eq!(prefs.load("color-scheme"), None);

        // Writing over the corrupt file recovers it
        prefs.store("color-scheme", "light");
        assert_eq!(prefs.load("color-scheme"), Some("light".to_string()));
    }

    #[test]
    fn test_memory_preferences() {
        let prefs = MemoryPreferences::new();
        assert_eq!(prefs.load("k"), None);
        prefs.store("k", "v");
        assert_eq!(prefs.load("k"), Some("v".to_string()));
    }
}
