use crate::prelude::*;
use bookshelf_core::store::{KeyValueStore, StoreError};
use std::fs;
use std::path::{Path, PathBuf};

/// Key-value store with one file per key inside a directory
///
/// The directory is created on first write. Reads of missing or unreadable
/// keys yield nothing.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn key_path(&self, key: &str) -> Result<PathBuf, StoreError> {
        validate_key(key)?;
        Ok(self.dir.join(key))
    }
}

fn validate_key(key: &str) -> Result<(), StoreError> {
    if key.is_empty() {
        return Err(StoreError::InvalidKey("Key cannot be empty".to_string()));
    }

    if !key
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(StoreError::InvalidKey(key.to_string()));
    }

    Ok(())
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        let path = self.key_path(key).ok()?;
        match fs::read_to_string(&path) {
            Ok(value) => Some(value),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
            Err(e) => {
                warn!("Failed to read {}: {e}", path.display());
                None
            }
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let path = self.key_path(key)?;
        fs::create_dir_all(&self.dir)?;
        fs::write(&path, value)?;
        debug!("Stored {key} in {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookshelf_core::store::SEARCH_TERM_KEY;
    use tempfile::TempDir;

    #[test]
    fn test_get_missing_key() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::new(temp_dir.path());

        assert_eq!(store.get(SEARCH_TERM_KEY), None);
    }

    #[test]
    fn test_set_then_get_in_fresh_store() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().join("nested").join("bookshelf");

        let mut store = FileStore::new(&dir);
        store.set(SEARCH_TERM_KEY, "Pride and Prejudice").unwrap();

        let reopened = FileStore::new(&dir);
        assert_eq!(
            reopened.get(SEARCH_TERM_KEY).as_deref(),
            Some("Pride and Prejudice")
        );
    }

    #[test]
    fn test_overwrite_with_empty_value() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = FileStore::new(temp_dir.path());

        store.set(SEARCH_TERM_KEY, "dune").unwrap();
        store.set(SEARCH_TERM_KEY, "").unwrap();

        assert_eq!(store.get(SEARCH_TERM_KEY), Some(String::new()));
    }

    #[test]
    fn test_invalid_keys() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = FileStore::new(temp_dir.path());

        assert!(matches!(
            store.set("../escape", "x"),
            Err(StoreError::InvalidKey(_))
        ));
        assert!(store.set("", "x").is_err());
        assert_eq!(store.get("../escape"), None);
    }

    #[test]
    fn test_set_fails_when_dir_is_a_file() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("bookshelf");
        fs::write(&blocker, "not a directory").unwrap();
        let mut store = FileStore::new(&blocker);

        let result = store.set(SEARCH_TERM_KEY, "dune");

        assert!(matches!(result, Err(StoreError::Io(_))));
        assert_eq!(store.get(SEARCH_TERM_KEY), None);
    }
}
