//! On-disk result cache, one JSON record per job key.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{JobError, Result};
use crate::key::JobKey;

#[derive(Debug, Serialize, Deserialize)]
struct CacheRecord<T> {
    key: String,
    stored_at: DateTime<Utc>,
    value: T,
}

/// Directory-backed cache of completed job results.
#[derive(Debug, Clone)]
pub struct JobCache {
    dir: PathBuf,
}

impl JobCache {
    /// Open (and create if needed) a cache directory.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|source| JobError::CacheIo {
            path: dir.clone(),
            source,
        })?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn record_path(&self, key: &JobKey) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    /// The cached value for a key, if one was stored.
    pub fn load<T: DeserializeOwned>(&self, key: &JobKey) -> Result<Option<T>> {
        let path = self.record_path(key);
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(source) => return Err(JobError::CacheIo { path, source }),
        };
        let record: CacheRecord<T> =
            serde_json::from_str(&raw).map_err(|source| JobError::CacheDecode { path, source })?;
        Ok(Some(record.value))
    }

    /// Store a completed result.
    pub fn store<T: Serialize>(&self, key: &JobKey, value: &T) -> Result<()> {
        let record = CacheRecord {
            key: key.as_str().to_string(),
            stored_at: Utc::now(),
            value,
        };
        let body = serde_json::to_vec_pretty(&record).map_err(JobError::CacheEncode)?;
        let path = self.record_path(key);
        fs::write(&path, body).map_err(|source| JobError::CacheIo { path, source })?;
        debug!(%key, "stored job result");
        Ok(())
    }

    /// Drop every stored record.
    pub fn clear(&self) -> Result<()> {
        let entries = fs::read_dir(&self.dir).map_err(|source| JobError::CacheIo {
            path: self.dir.clone(),
            source,
        })?;
        for entry in entries {
            let entry = entry.map_err(|source| JobError::CacheIo {
                path: self.dir.clone(),
                source,
            })?;
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                fs::remove_file(&path).map_err(|source| JobError::CacheIo { path, source })?;
            }
        }
        Ok(())
    }
}
