//! File-backed key-value store at `~/.foyer/site_state.json`.

use super::KvStore;
use crate::error::{SiteError, SiteResult};
use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::PathBuf;

/// The state directory name under the home directory.
const STATE_DIR: &str = ".foyer";

/// The state file name.
const STATE_FILE: &str = "site_state.json";

/// A [`KvStore`] persisted as a single JSON object on disk.
///
/// The whole map is loaded once at startup and rewritten on every `set`.
/// A missing or corrupt file loads as an empty map; the site's persisted
/// values are all reconstructible defaults, so there is nothing to
/// recover.
#[derive(Debug)]
pub struct FileStore {
    /// Path to the state file.
    state_path: PathBuf,
    /// In-memory copy of the persisted map.
    values: HashMap<String, String>,
}

impl FileStore {
    /// Open the store at the default location under the home directory.
    ///
    /// Fails only if no home directory can be determined.
    pub fn open_default() -> SiteResult<Self> {
        let home = dirs::home_dir().ok_or(SiteError::NoHomeDirectory)?;
        Ok(Self::open(home.join(STATE_DIR).join(STATE_FILE)))
    }

    /// Open the store at an explicit path.
    ///
    /// The file is read eagerly; a missing or unreadable file yields an
    /// empty store.
    pub fn open(state_path: PathBuf) -> Self {
        let values = Self::load_map(&state_path);
        Self { state_path, values }
    }

    /// Path to the backing file.
    pub fn state_path(&self) -> &PathBuf {
        &self.state_path
    }

    /// Load the JSON map from disk, defaulting to empty on any failure.
    fn load_map(path: &PathBuf) -> HashMap<String, String> {
        if !path.exists() {
            return HashMap::new();
        }

        let file = match File::open(path) {
            Ok(f) => f,
            Err(_) => return HashMap::new(),
        };

        let reader = BufReader::new(file);
        match serde_json::from_reader(reader) {
            Ok(map) => map,
            Err(_) => HashMap::new(),
        }
    }

    /// Write the whole map back to disk, creating the parent directory
    /// if needed.
    fn persist(&self) -> SiteResult<()> {
        if let Some(parent) = self.state_path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(|source| SiteError::Storage {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }

        let file = File::create(&self.state_path).map_err(|source| SiteError::Storage {
            path: self.state_path.clone(),
            source,
        })?;

        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, &self.values)?;
        writer.flush().map_err(|source| SiteError::Storage {
            path: self.state_path.clone(),
            source,
        })?;
        Ok(())
    }
}

impl KvStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
        // Lost writes only cost a counter tick or a theme preference.
        if let Err(e) = self.persist() {
            tracing::warn!("failed to persist site state: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{KEY_PAGE_VIEWS, KEY_THEME};
    use tempfile::TempDir;

    fn store_in(temp: &TempDir) -> FileStore {
        FileStore::open(temp.path().join(STATE_DIR).join(STATE_FILE))
    }

    #[test]
    fn test_open_missing_file_is_empty() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);
        assert_eq!(store.get(KEY_THEME), None);
    }

    #[test]
    fn test_set_creates_parent_and_survives_reopen() {
        let temp = TempDir::new().unwrap();
        let mut store = store_in(&temp);
        store.set(KEY_THEME, "dark");
        store.set(KEY_PAGE_VIEWS, "42");
        assert!(store.state_path().exists());

        let reopened = store_in(&temp);
        assert_eq!(reopened.get(KEY_THEME), Some("dark".to_string()));
        assert_eq!(reopened.get(KEY_PAGE_VIEWS), Some("42".to_string()));
    }

    #[test]
    fn test_corrupt_file_loads_as_empty() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(STATE_DIR).join(STATE_FILE);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "not valid json").unwrap();

        let store = FileStore::open(path);
        assert_eq!(store.get(KEY_THEME), None);
    }

    #[test]
    fn test_set_overwrites() {
        let temp = TempDir::new().unwrap();
        let mut store = store_in(&temp);
        store.set(KEY_PAGE_VIEWS, "1");
        store.set(KEY_PAGE_VIEWS, "2");
        assert_eq!(store.get(KEY_PAGE_VIEWS), Some("2".to_string()));
    }
}
