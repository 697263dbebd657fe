//! Directory-backed key-value storage.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;

use super::KeyValueStore;
use crate::error::Result;

/// Suffix marking files owned by a store. Other files in the directory are
/// never listed or removed.
const ENTRY_SUFFIX: &str = ".mfkv.json";

/// Durable storage keeping one file per key inside a directory.
///
/// Keys are percent-encoded into file names. Writes go through a temp file followed by a rename so a crash never
/// leaves a partially written entry behind.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Create a store rooted at `dir`. The directory is created lazily.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Get the store directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn ensure_dir(&self) -> Result<()> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("Failed to create store directory {:?}", self.dir))?;
        Ok(())
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}{}", encode_key(key), ENTRY_SUFFIX))
    }

    fn entry_paths(&self) -> Result<Vec<(String, PathBuf)>> {
        if !self.dir.exists() {
            return Ok(Vec::new());
        }

        let mut entries = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let path = entry?.path();
            let key = path
                .file_name()
                .and_then(|name| name.to_str())
                .and_then(|name| name.strip_suffix(ENTRY_SUFFIX))
                .and_then(decode_key);
            if let Some(key) = key {
                entries.push((key, path));
            }
        }
        Ok(entries)
    }
}

impl KeyValueStore for FileStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        let path = self.entry_path(key);
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read store entry {:?}", path))?;
        Ok(Some(content))
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        self.ensure_dir()?;
        let path = self.entry_path(key);

        let temp_path = temp_path(&path);
        fs::write(&temp_path, value)
            .with_context(|| format!("Failed to write store entry {:?}", temp_path))?;
        fs::rename(&temp_path, &path)
            .with_context(|| format!("Failed to replace store entry {:?}", path))?;

        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> Result<()> {
        let path = self.entry_path(key);
        if path.exists() {
            fs::remove_file(&path)
                .with_context(|| format!("Failed to remove store entry {:?}", path))?;
        }
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        for (_, path) in self.entry_paths()? {
            fs::remove_file(&path)
                .with_context(|| format!("Failed to remove store entry {:?}", path))?;
        }
        Ok(())
    }

    fn keys(&self) -> Result<Vec<String>> {
        let mut keys: Vec<String> = self.entry_paths()?.into_iter().map(|(k, _)| k).collect();
        keys.sort();
        Ok(keys)
    }
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".tmp");
    PathBuf::from(name)
}

/// Encode a key into a filename-safe stem.
///
/// Everything but ASCII alphanumerics and `-_.~` becomes `%XX`, so path
/// separators never reach the file system.
fn encode_key(key: &str) -> String {
    urlencoding::encode(key).into_owned()
}

fn decode_key(stem: &str) -> Option<String> {
    urlencoding::decode(stem).ok().map(|key| key.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn set_and_get_round_trip() {
        let temp = TempDir::new().unwrap();
        let mut store = FileStore::new(temp.path().join("local"));

        store.set_item("practiceHistory", "[]").unwrap();

        assert_eq!(
            store.get_item("practiceHistory").unwrap(),
            Some("[]".to_string())
        );
    }

    #[test]
    fn get_missing_key_returns_none() {
        let temp = TempDir::new().unwrap();
        let store = FileStore::new(temp.path());

        assert_eq!(store.get_item("missing").unwrap(), None);
    }

    #[test]
    fn set_leaves_no_temp_file() {
        let temp = TempDir::new().unwrap();
        let mut store = FileStore::new(temp.path());

        store.set_item("settings", "{}").unwrap();

        assert!(!temp_path(&store.entry_path("settings")).exists());
    }

    #[test]
    fn remove_deletes_entry() {
        let temp = TempDir::new().unwrap();
        let mut store = FileStore::new(temp.path());

        store.set_item("userProfile", "{}").unwrap();
        store.remove_item("userProfile").unwrap();

        assert_eq!(store.get_item("userProfile").unwrap(), None);
    }

    #[test]
    fn remove_missing_key_is_ok() {
        let temp = TempDir::new().unwrap();
        let mut store = FileStore::new(temp.path());

        assert!(store.remove_item("never-set").is_ok());
    }

    #[test]
    fn clear_removes_every_entry() {
        let temp = TempDir::new().unwrap();
        let mut store = FileStore::new(temp.path());

        store.set_item("a", "1").unwrap();
        store.set_item("b", "2").unwrap();
        store.clear().unwrap();

        assert!(store.keys().unwrap().is_empty());
    }

    #[test]
    fn clear_on_missing_dir_is_ok() {
        let temp = TempDir::new().unwrap();
        let mut store = FileStore::new(temp.path().join("never-created"));

        assert!(store.clear().is_ok());
    }

    #[test]
    fn keys_are_decoded_and_sorted() {
        let temp = TempDir::new().unwrap();
        let mut store = FileStore::new(temp.path());

        store.set_item("settings", "{}").unwrap();
        store.set_item("__storage_test__", "x").unwrap();
        store.set_item("odd key/with.dots", "1").unwrap();

        assert_eq!(
            store.keys().unwrap(),
            vec!["__storage_test__", "odd key/with.dots", "settings"]
        );
    }

    #[test]
    fn encode_key_escapes_separators() {
        assert_eq!(encode_key("practiceHistory"), "practiceHistory");
        assert_eq!(encode_key("../etc"), "..%2Fetc");
        assert_eq!(decode_key("..%2Fetc"), Some("../etc".to_string()));
    }

    #[test]
    fn entry_stays_inside_store_dir() {
        let temp = TempDir::new().unwrap();
        let store = FileStore::new(temp.path());

        assert_eq!(store.entry_path("../etc").parent(), Some(temp.path()));
    }

    #[test]
    fn decode_rejects_invalid_utf8() {
        assert_eq!(decode_key("%FF%FE"), None);
    }

    #[test]
    fn clear_keeps_foreign_files() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("package.json"), "{}").unwrap();
        fs::write(temp.path().join("notes.txt"), "keep").unwrap();
        let mut store = FileStore::new(temp.path());
        store.set_item("settings", "{}").unwrap();

        assert_eq!(store.keys().unwrap(), vec!["settings"]);
        store.clear().unwrap();

        assert!(store.keys().unwrap().is_empty());
        assert!(temp.path().join("package.json").exists());
        assert!(temp.path().join("notes.txt").exists());
    }
}
