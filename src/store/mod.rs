//! Whole-collection JSON file store.
//!
//! Each collection lives in a single file under the data directory and is
//! read and fully rewritten on every mutation. There is no locking and no
//! concurrent-writer protection; that trade-off is inherited from the
//! storage contract, not solved here.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("io error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed collection {path}: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone)]
pub struct JsonStore {
    root: PathBuf,
}

impl JsonStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, name: &str) -> PathBuf {
        self.root.join(format!("{}.json", name))
    }

    /// Read a whole collection. A missing file is an empty collection.
    pub fn collection<T: DeserializeOwned>(&self, name: &str) -> Result<Vec<T>, StoreError> {
        let path = self.path_for(name);
        if !path.exists() {
            return Ok(Vec::new());
        }
        let raw = fs::read_to_string(&path).map_err(|source| StoreError::Io {
            path: path.clone(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| StoreError::Malformed { path, source })
    }

    /// Rewrite a whole collection.
    pub fn replace<T: Serialize>(&self, name: &str, records: &[T]) -> Result<(), StoreError> {
        let path = self.path_for(name);
        let raw = serde_json::to_string_pretty(records).map_err(|source| StoreError::Malformed {
            path: path.clone(),
            source,
        })?;
        self.write_file(&path, &raw)
    }

    /// Read a singleton object (e.g. site settings). Missing file yields None.
    pub fn object<T: DeserializeOwned>(&self, name: &str) -> Result<Option<T>, StoreError> {
        let path = self.path_for(name);
        if !path.exists() {
            return Ok(None);
        }
        let raw = fs::read_to_string(&path).map_err(|source| StoreError::Io {
            path: path.clone(),
            source,
        })?;
        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|source| StoreError::Malformed { path, source })
    }

    /// Rewrite a singleton object.
    pub fn replace_object<T: Serialize>(&self, name: &str, value: &T) -> Result<(), StoreError> {
        let path = self.path_for(name);
        let raw = serde_json::to_string_pretty(value).map_err(|source| StoreError::Malformed {
            path: path.clone(),
            source,
        })?;
        self.write_file(&path, &raw)
    }

    fn write_file(&self, path: &Path, raw: &str) -> Result<(), StoreError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| StoreError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        fs::write(path, raw).map_err(|source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}
