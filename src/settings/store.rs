//! Settings persistence.
//!
//! A flat key-value blob: callers ask for a set of keys and get back the ones
//! that are stored, and write back a mapping that is merged into the blob.

use std::env;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::error::StoreError;

pub trait SettingsStore {
    /// Stored values for `keys`. Keys that are not stored are omitted.
    fn get(&self, keys: &[&str]) -> Result<Map<String, Value>, StoreError>;

    /// Merge `values` into the stored blob.
    fn set(&mut self, values: Map<String, Value>) -> Result<(), StoreError>;
}

/// JSON object on disk.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `$SEGPASS_CONFIG`, or `~/.config/segpass/settings.json`.
    pub fn open_default() -> Self {
        Self::new(default_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<Map<String, Value>, StoreError> {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Map::new()),
            Err(e) => return Err(e.into()),
        };

        if data.trim().is_empty() {
            return Ok(Map::new());
        }

        match serde_json::from_str(&data)? {
            Value::Object(map) => Ok(map),
            _ => Err(StoreError::NotAnObject),
        }
    }
}

impl SettingsStore for FileStore {
    fn get(&self, keys: &[&str]) -> Result<Map<String, Value>, StoreError> {
        let mut all = self.read_all()?;
        Ok(keys
            .iter()
            .filter_map(|&k| all.remove(k).map(|v| (k.to_string(), v)))
            .collect())
    }

    fn set(&mut self, values: Map<String, Value>) -> Result<(), StoreError> {
        // Only malformed content is replaced. A file that cannot be read
        // stays as it is.
        let mut all = match self.read_all() {
            Ok(all) => all,
            Err(e @ (StoreError::Json(_) | StoreError::NotAnObject)) => {
                warn!(path = %self.path.display(), error = %e, "replacing malformed settings file");
                Map::new()
            }
            Err(e) => return Err(e),
        };
        all.extend(values);

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let mut data = serde_json::to_string_pretty(&Value::Object(all))?;
        data.push('\n');
        fs::write(&self.path, data)?;
        debug!(path = %self.path.display(), "settings written");
        Ok(())
    }
}

/// In-process store, nothing survives the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: Map<String, Value>,
}

impl SettingsStore for MemoryStore {
    fn get(&self, keys: &[&str]) -> Result<Map<String, Value>, StoreError> {
        Ok(keys
            .iter()
            .filter_map(|&k| self.values.get(k).map(|v| (k.to_string(), v.clone())))
            .collect())
    }

    fn set(&mut self, values: Map<String, Value>) -> Result<(), StoreError> {
        self.values.extend(values);
        Ok(())
    }
}

#[inline]
fn default_path() -> PathBuf {
    if let Ok(path) = env::var("SEGPASS_CONFIG")
        && !path.is_empty()
    {
        return PathBuf::from(path);
    }
    let home = env::var("HOME").unwrap_or_else(|_| ".".into());
    PathBuf::from(format!("{}/.config/segpass/settings.json", home))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn map(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => unreachable!(),
        }
    }

    #[test]
    fn missing_file_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("nope.json"));
        assert!(store.get(&["segments"]).unwrap().is_empty());
    }

    #[test]
    fn set_creates_parents_and_merges() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a/b/settings.json");
        let mut store = FileStore::new(&path);

        store.set(map(json!({"segments": 4, "letter": true}))).unwrap();
        store.set(map(json!({"segments": 2, "forbidden": "x"}))).unwrap();

        let got = store.get(&["segments", "letter", "forbidden", "length"]).unwrap();
        assert_eq!(got.len(), 3);
        assert_eq!(got["segments"], json!(2));
        assert_eq!(got["letter"], json!(true));
        assert_eq!(got["forbidden"], json!("x"));

        let reopened = FileStore::new(&path);
        assert_eq!(reopened.get(&["segments"]).unwrap()["segments"], json!(2));
    }

    #[test]
    fn get_only_returns_requested_keys() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().join("s.json"));
        store.set(map(json!({"segments": 1, "theme": "dark"}))).unwrap();
        let got = store.get(&["segments"]).unwrap();
        assert_eq!(got.len(), 1);
        assert!(!got.contains_key("theme"));
    }

    #[test]
    fn corrupt_file_is_an_error_on_read_and_replaced_on_write() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("s.json");
        fs::write(&path, "{not json").unwrap();

        let mut store = FileStore::new(&path);
        assert!(matches!(store.get(&["segments"]), Err(StoreError::Json(_))));

        store.set(map(json!({"segments": 7}))).unwrap();
        assert_eq!(store.get(&["segments"]).unwrap()["segments"], json!(7));
    }

    #[test]
    fn unreadable_file_is_not_overwritten() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("s.json");
        let bytes = [0xff, 0xfe, b'{', b'}'];
        fs::write(&path, bytes).unwrap();

        let mut store = FileStore::new(&path);
        assert!(matches!(
            store.set(map(json!({"segments": 7}))),
            Err(StoreError::Io(_))
        ));
        assert_eq!(fs::read(&path).unwrap(), bytes);
    }

    #[test]
    fn non_object_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("s.json");
        fs::write(&path, "[1, 2, 3]").unwrap();
        let store = FileStore::new(&path);
        assert!(matches!(store.get(&["segments"]), Err(StoreError::NotAnObject)));
    }

    #[test]
    fn memory_store_round_trip() {
        let mut store = MemoryStore::default();
        store.set(map(json!({"additional": "§"}))).unwrap();
        assert_eq!(store.get(&["additional"]).unwrap()["additional"], json!("§"));
        assert!(store.get(&["segments"]).unwrap().is_empty());
    }
}
