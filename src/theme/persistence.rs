use std::{
    collections::HashMap,
    fs, io,
    path::{Path, PathBuf},
    sync::Mutex,
};

use super::{PersistedTheme, ThemeError, ThemeResult};

/// Where a session's [`PersistedTheme`] lives between runs.
///
/// Hosts construct a storage and hand it to the store; nothing in this crate
/// reaches for a global one.
pub trait ThemeStorage: Send + Sync {
    fn load(&self, key: &str) -> ThemeResult<Option<PersistedTheme>>;
    fn save(&self, key: &str, theme: &PersistedTheme) -> ThemeResult<()>;
    fn clear(&self, key: &str) -> ThemeResult<()>;
}

/// Stores each key as `<dir>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FileThemeStorage {
    dir: PathBuf,
}

impl FileThemeStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, key: &str) -> ThemeResult<PathBuf> {
        validate_key(key)?;
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl ThemeStorage for FileThemeStorage {
    fn load(&self, key: &str) -> ThemeResult<Option<PersistedTheme>> {
        let path = self.path_for(key)?;

        let serialized = match fs::read_to_string(&path) {
            Ok(serialized) => serialized,
            Err(source) if source.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(source) => return Err(ThemeError::ReadConfig { path, source }),
        };

        serde_json::from_str(&serialized)
            .map(Some)
            .map_err(|source| ThemeError::ParseTheme { path, source })
    }

    fn save(&self, key: &str, theme: &PersistedTheme) -> ThemeResult<()> {
        let path = self.path_for(key)?;

        fs::create_dir_all(&self.dir).map_err(|source| ThemeError::WriteConfig {
            path: path.clone(),
            source,
        })?;

        let serialized = serde_json::to_string_pretty(theme)?;
        fs::write(&path, serialized).map_err(|source| ThemeError::WriteConfig { path, source })
    }

    fn clear(&self, key: &str) -> ThemeResult<()> {
        let path = self.path_for(key)?;

        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(source) if source.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(ThemeError::WriteConfig { path, source }),
        }
    }
}

/// Keeps preferences in memory for the lifetime of the storage.
#[derive(Debug, Default)]
pub struct MemoryThemeStorage {
    entries: Mutex<HashMap<String, PersistedTheme>>,
}

impl MemoryThemeStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(self, key: impl Into<String>, theme: PersistedTheme) -> Self {
        self.lock().insert(key.into(), theme);
        self
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, PersistedTheme>> {
        // A poisoned map still holds complete entries.
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl ThemeStorage for MemoryThemeStorage {
    fn load(&self, key: &str) -> ThemeResult<Option<PersistedTheme>> {
        validate_key(key)?;
        Ok(self.lock().get(key).cloned())
    }

    fn save(&self, key: &str, theme: &PersistedTheme) -> ThemeResult<()> {
        validate_key(key)?;
        self.lock().insert(key.to_string(), theme.clone());
        Ok(())
    }

    fn clear(&self, key: &str) -> ThemeResult<()> {
        validate_key(key)?;
        self.lock().remove(key);
        Ok(())
    }
}

fn validate_key(key: &str) -> ThemeResult<()> {
    let invalid = key.trim().is_empty()
        || key == "."
        || key == ".."
        || key.contains(['/', '\\'])
        || key.contains('\0');

    if invalid {
        return Err(ThemeError::InvalidPersistKey(key.to_string()));
    }

    Ok(())
}
