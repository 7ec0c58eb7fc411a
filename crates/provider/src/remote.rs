//! File-backed and no-op remote stores.

use crate::RemoteStore;
use async_trait::async_trait;
use roster_core::error::{RosterError, RosterResult};
use roster_core::types::ListItem;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

/// Persists the authoritative list as pretty-printed JSON.
///
/// Every upload rewrites the whole document; there is no delta format. The
/// removed item accompanying a deletion is logged rather than stored.
///
/// ```ignore
/// let store: JsonFileStore<RosterEntry> = JsonFileStore::new("roster.json");
/// let entries = store.load().await?;
/// ```
pub struct JsonFileStore<T> {
    path: PathBuf,
    _item: PhantomData<T>,
}

impl<T> JsonFileStore<T>
where
    T: ListItem + Serialize + DeserializeOwned,
{
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            _item: PhantomData,
        }
    }

    /// Reads the list back. A missing file is an empty list, not an error.
    pub async fn load(&self) -> RosterResult<Vec<T>> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => serde_json::from_slice(&bytes).map_err(|e| {
                RosterError::Remote(format!("Malformed store {}: {e}", self.path.display()))
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(RosterError::Remote(format!(
                "Failed to read {}: {e}",
                self.path.display()
            ))),
        }
    }
}

#[async_trait]
impl<T> RemoteStore for JsonFileStore<T>
where
    T: ListItem + Serialize + DeserializeOwned,
{
    type Item = T;

    async fn upload(&self, list: &[T], removed: Option<&T>) -> RosterResult<()> {
        let body = serde_json::to_vec_pretty(list)
            .map_err(|e| RosterError::Remote(format!("Failed to encode list: {e}")))?;

        // Stage to a sibling file, then rename over the document; a reader
        // never observes a half-written list.
        let staged = staging_path(&self.path);
        tokio::fs::write(&staged, body).await.map_err(|e| {
            RosterError::Remote(format!("Failed to write {}: {e}", staged.display()))
        })?;
        tokio::fs::rename(&staged, &self.path).await.map_err(|e| {
            RosterError::Remote(format!("Failed to replace {}: {e}", self.path.display()))
        })?;

        if let Some(item) = removed {
            tracing::debug!(id = %item.id(), name = item.name(), "item dropped from store");
        }
        tracing::info!(items = list.len(), path = %self.path.display(), "uploaded list");
        Ok(())
    }
}

fn staging_path(path: &Path) -> PathBuf {
    let mut staged = path.as_os_str().to_owned();
    staged.push(".tmp");
    PathBuf::from(staged)
}

/// Discards every upload. Backs dry-run modes and tests that only exercise
/// list arithmetic.
pub struct NullRemote<T> {
    _item: PhantomData<T>,
}

impl<T> NullRemote<T> {
    pub fn new() -> Self {
        Self { _item: PhantomData }
    }
}

impl<T> Default for NullRemote<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: ListItem> RemoteStore for NullRemote<T> {
    type Item = T;

    async fn upload(&self, list: &[T], _removed: Option<&T>) -> RosterResult<()> {
        tracing::debug!(items = list.len(), "upload skipped (null remote)");
        Ok(())
    }
}
