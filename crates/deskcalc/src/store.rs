//! Key/value persistence surviving restarts.
//!
//! The store keeps the flat string-to-string shape of browser local
//! storage: the session reads whole values at startup and rewrites them
//! after every mutation. Writes are synchronous and best-effort - a failed
//! write is logged and swallowed, and the in-memory state stays
//! authoritative for the rest of the session.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::warn;

/// Storage key for the persisted theme flag
pub const THEME_KEY: &str = "theme";

/// Storage key for the serialized history list
pub const HISTORY_KEY: &str = "calculator_history";

/// Key/value store abstraction for session state
pub trait StateStore {
    /// Returns the stored value for `key`, if any
    fn get(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key` (best-effort)
    fn set(&mut self, key: &str, value: &str);

    /// Removes `key` (best-effort)
    fn remove(&mut self, key: &str);
}

/// Volatile in-memory store, used by tests and `--no-persist`
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    /// Creates an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl StateStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }

    fn remove(&mut self, key: &str) {
        self.values.remove(key);
    }
}

/// Store backed by a single JSON file.
///
/// The whole map is rewritten on every mutation; the file is small (two
/// keys) and writes happen at most once per keystroke.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    values: HashMap<String, String>,
}

impl JsonFileStore {
    /// Opens the store at `path`, tolerating a missing or corrupt file
    #[must_use]
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let values = match fs::read_to_string(&path) {
            Ok(contents) => serde_json::from_str(&contents).unwrap_or_else(|err| {
                warn!(path = %path.display(), %err, "state file is corrupt, starting empty");
                HashMap::new()
            }),
            Err(err) if err.kind() == io::ErrorKind::NotFound => HashMap::new(),
            Err(err) => {
                warn!(path = %path.display(), %err, "cannot read state file, starting empty");
                HashMap::new()
            }
        };
        Self { path, values }
    }

    /// Default location under the user config directory
    #[must_use]
    pub fn default_path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("deskcalc");
        path.push("state.json");
        path
    }

    /// Path backing this store
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) {
        if let Some(parent) = self.path.parent() {
            if let Err(err) = fs::create_dir_all(parent) {
                warn!(path = %parent.display(), %err, "cannot create state directory");
                return;
            }
        }
        let payload = match serde_json::to_string_pretty(&self.values) {
            Ok(payload) => payload,
            Err(err) => {
                warn!(%err, "cannot serialize state");
                return;
            }
        };
        if let Err(err) = fs::write(&self.path, payload) {
            warn!(path = %self.path.display(), %err, "state write failed, keeping in-memory state");
        }
    }
}

impl StateStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
        self.flush();
    }

    fn remove(&mut self, key: &str) {
        if self.values.remove(key).is_some() {
            self.flush();
        }
    }
}
