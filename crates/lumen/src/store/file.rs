//! JSON-file preference store.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::PreferenceStore;
use crate::error::StoreError;

const APP_DIR: &str = "lumen";
const FILE_NAME: &str = "preferences.json";

/// A store persisted as a flat JSON object in a single file.
///
/// A missing file is an empty store. Saving rewrites the whole file and keeps
/// keys it does not own.
///
/// # Example
///
/// ```rust
/// use lumen::{FileStore, PreferenceStore};
///
/// let dir = tempfile::tempdir().unwrap();
/// let mut store = FileStore::new(dir.path().join("prefs.json"));
///
/// assert_eq!(store.load("theme").unwrap(), None);
/// store.save("theme", "dark").unwrap();
/// assert_eq!(store.load("theme").unwrap().as_deref(), Some("dark"));
/// ```
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Opens the store at the platform's default location.
    pub fn open_default() -> Result<Self, StoreError> {
        Ok(Self::new(Self::default_location()?))
    }

    /// `<config dir>/lumen/preferences.json`.
    pub fn default_location() -> Result<PathBuf, StoreError> {
        let dir = dirs::config_dir().ok_or(StoreError::NoConfigDir)?;
        Ok(dir.join(APP_DIR).join(FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>, StoreError> {
        let content = match fs::read(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(source) => {
                return Err(StoreError::Read {
                    path: self.path.clone(),
                    source,
                })
            }
        };
        if content.iter().all(u8::is_ascii_whitespace) {
            return Ok(BTreeMap::new());
        }
        serde_json::from_slice(&content).map_err(|source| StoreError::Malformed {
            path: self.path.clone(),
            source,
        })
    }

    fn write_all(&self, values: &BTreeMap<String, String>) -> Result<(), StoreError> {
        let write_err = |source| StoreError::Write {
            path: self.path.clone(),
            source,
        };
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(write_err)?;
        }
        let mut json = serde_json::to_string_pretty(values).map_err(StoreError::Encode)?;
        json.push('\n');

        let staging = self.path.with_extension("json.tmp");
        replace_file(&staging, &self.path, json.as_bytes()).map_err(write_err)
    }
}

/// Writes `contents` to `staging`, then renames it over `target` so readers
/// never see a torn file. The staging file does not outlive a failed rename.
fn replace_file(staging: &Path, target: &Path, contents: &[u8]) -> std::io::Result<()> {
    fs::write(staging, contents)?;
    fs::rename(staging, target).inspect_err(|_| {
        let _ = fs::remove_file(staging);
    })
}

impl PreferenceStore for FileStore {
    fn load(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.read_all()?.remove(key))
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut values = match self.read_all() {
            Ok(values) => values,
            Err(err @ StoreError::Malformed { .. }) => {
                warn!(%err, "replacing unreadable preferences file");
                BTreeMap::new()
            }
            Err(err) => return Err(err),
        };
        values.insert(key.to_string(), value.to_string());
        self.write_all(&values)?;
        debug!(path = %self.path.display(), key, value, "saved preference");
        Ok(())
    }
}
