use std::collections::BTreeMap;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

/// Key holding the dark/light display preference
pub const DARK_MODE_KEY: &str = "darkMode";

/// File name of the preference store inside the config directory
pub const PREFS_FILE: &str = "prefs.json";

/// Error type for preference store writes
#[derive(Debug, thiserror::Error)]
pub enum PrefError {
    #[error("could not write {path}: {source}")]
    WriteError { path: PathBuf, source: io::Error },
    #[error("could not serialize preferences: {0}")]
    SerializeError(#[from] serde_json::Error),
}

/// Durable string key-value store for display preferences
pub trait PrefStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), PrefError>;
}

/// Read the dark-mode flag. Anything other than `"true"` is light mode.
pub fn load_dark_mode(store: &dyn PrefStore) -> bool {
    let value = store.get(DARK_MODE_KEY);
    log::debug!("read {} = {:?}", DARK_MODE_KEY, value);
    value.as_deref() == Some("true")
}

/// Write the dark-mode flag as `"true"` / `"false"`
pub fn store_dark_mode(store: &mut dyn PrefStore, dark: bool) -> Result<(), PrefError> {
    store.set(DARK_MODE_KEY, if dark { "true" } else { "false" })
}

// ---------------------------------------------------------------------------
// File-backed store
// ---------------------------------------------------------------------------

/// Preferences kept as a flat JSON object in a single file.
///
/// The file is read once when the store is opened. Every `set` rewrites the
/// whole file atomically, so a crash mid-write leaves the previous contents.
#[derive(Debug)]
pub struct FilePrefStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl FilePrefStore {
    /// Open the store at `path`. A missing file is an empty store; a
    /// malformed one is treated as empty and replaced on the next write.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let values = read_values(&path);
        FilePrefStore { path, values }
    }

    /// Open `prefs.json` inside a config directory
    pub fn in_dir(config_dir: &Path) -> Self {
        Self::open(config_dir.join(PREFS_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<(), PrefError> {
        let content = serde_json::to_string_pretty(&self.values)?;
        let write_err = |source| PrefError::WriteError {
            path: self.path.clone(),
            source,
        };
        if let Some(dir) = self.path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir).map_err(write_err)?;
        }
        atomic_write(&self.path, content.as_bytes()).map_err(write_err)
    }
}

impl PrefStore for FilePrefStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PrefError> {
        self.values.insert(key.to_string(), value.to_string());
        self.flush()
    }
}

fn read_values(path: &Path) -> BTreeMap<String, String> {
    let content = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            if e.kind() != io::ErrorKind::NotFound {
                log::warn!("could not read {}: {}", path.display(), e);
            }
            return BTreeMap::new();
        }
    };
    match serde_json::from_str(&content) {
        Ok(values) => values,
        Err(e) => {
            log::warn!("ignoring malformed {}: {}", path.display(), e);
            BTreeMap::new()
        }
    }
}

/// Write `content` to `path` atomically using a temp file + rename.
fn atomic_write(path: &Path, content: &[u8]) -> io::Result<()> {
    let dir = match path.parent() {
        Some(d) if !d.as_os_str().is_empty() => d,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content)?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

// ---------------------------------------------------------------------------
// In-memory store
// ---------------------------------------------------------------------------

/// Session-only store (tests, `--no-persist`)
#[derive(Debug, Clone, Default)]
pub struct MemoryPrefStore {
    values: BTreeMap<String, String>,
}

impl MemoryPrefStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(key: &str, value: &str) -> Self {
        let mut store = Self::default();
        store.values.insert(key.to_string(), value.to_string());
        store
    }
}

impl PrefStore for MemoryPrefStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PrefError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
