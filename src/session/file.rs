//! File-backed session store.

use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
    sync::{Mutex, PoisonError},
};

use tracing::warn;

use crate::session::store::SessionStore;

/// Session store persisted as a small JSON object on disk.
///
/// Entries are kept in memory and written through on every mutation, so the
/// session survives process restarts. I/O problems are logged and otherwise
/// swallowed: a missing or unreadable file behaves as an empty store.
pub struct FileSessionStore {
    path: PathBuf,
    entries: Mutex<HashMap<String, String>>,
}

impl FileSessionStore {
    /// Open the store at `path`, loading any previously persisted entries.
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        let entries = load_entries(&path);

        Self {
            path,
            entries: Mutex::new(entries),
        }
    }

    fn persist(&self, entries: &HashMap<String, String>) {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
            && let Err(error) = fs::create_dir_all(parent)
        {
            warn!(path = %self.path.display(), %error, "failed to create session directory");
            return;
        }

        let serialized = match serde_json::to_string_pretty(entries) {
            Ok(serialized) => serialized,
            Err(error) => {
                warn!(%error, "failed to serialize session entries");
                return;
            }
        };

        if let Err(error) = fs::write(&self.path, serialized) {
            warn!(path = %self.path.display(), %error, "failed to write session file");
        }
    }
}

impl SessionStore for FileSessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn set(&self, key: &str, value: &str) {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);

        entries.insert(key.to_string(), value.to_string());
        self.persist(&entries);
    }

    fn remove(&self, key: &str) {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);

        if entries.remove(key).is_some() {
            self.persist(&entries);
        }
    }
}

fn load_entries(path: &Path) -> HashMap<String, String> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => return HashMap::new(),
        Err(error) => {
            warn!(path = %path.display(), %error, "failed to read session file");
            return HashMap::new();
        }
    };

    match serde_json::from_str(&contents) {
        Ok(entries) => entries,
        Err(error) => {
            warn!(path = %path.display(), %error, "session file is corrupt; starting empty");
            HashMap::new()
        }
    }
}
