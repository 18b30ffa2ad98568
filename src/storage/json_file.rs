//! Snapshot file storage.
//!
//! The whole collection lives in one JSON document, `{"products": [...]}`, rewritten after
//! every commit. Older snapshots that also carry a `likedProducts` array still load; the
//! array is ignored because the liked view is derived from `isLiked`.

use crate::model::Product;
use crate::product_actor::ProductError;
use actor_framework::{FrameworkError, Persistence};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Serialize)]
struct SnapshotRef<'a> {
    products: &'a [Product],
}

#[derive(Deserialize)]
struct Snapshot {
    #[serde(default)]
    products: Vec<Product>,
}

/// [`Persistence`] backed by a JSON snapshot file.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the snapshot. A missing file is an empty collection.
    pub async fn read_snapshot(&self) -> Result<Vec<Product>, ProductError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No snapshot yet");
                return Ok(Vec::new());
            }
            Err(e) => return Err(self.storage_error("read", e)),
        };
        let snapshot: Snapshot =
            serde_json::from_slice(&bytes).map_err(|e| self.storage_error("decode", e))?;
        Ok(snapshot.products)
    }

    /// Writes the snapshot through a sibling temporary file, so a crash mid-write leaves the
    /// previous snapshot intact.
    pub async fn write_snapshot(&self, products: &[Product]) -> Result<(), ProductError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| self.storage_error("create directory for", e))?;
        }

        let json = serde_json::to_vec_pretty(&SnapshotRef { products })
            .map_err(|e| self.storage_error("encode", e))?;
        let temp = self.temp_path();
        tokio::fs::write(&temp, json)
            .await
            .map_err(|e| self.storage_error("write", e))?;
        tokio::fs::rename(&temp, &self.path)
            .await
            .map_err(|e| self.storage_error("replace", e))?;

        debug!(path = %self.path.display(), count = products.len(), "Snapshot written");
        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        match self.path.file_name() {
            Some(name) => {
                let mut name = name.to_os_string();
                name.push(".tmp");
                self.path.with_file_name(name)
            }
            None => self.path.with_extension("tmp"),
        }
    }

    fn storage_error(&self, op: &str, e: impl std::fmt::Display) -> ProductError {
        ProductError::Storage(format!("{op} {}: {e}", self.path.display()))
    }
}

#[async_trait]
impl Persistence<Product> for JsonFileStorage {
    async fn load(&self) -> Result<Vec<Product>, FrameworkError> {
        self.read_snapshot().await.map_err(FrameworkError::persistence)
    }

    async fn save(&self, items: &[Product]) -> Result<(), FrameworkError> {
        self.write_snapshot(items)
            .await
            .map_err(FrameworkError::persistence)
    }
}
