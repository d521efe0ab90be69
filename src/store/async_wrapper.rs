//! Async wrapper around the synchronous JsonFileStore.
//!
//! File reads and writes run on tokio's blocking pool so request handlers
//! never stall the runtime on disk I/O.

use super::{Collection, JsonFileStore};
use crate::error::{StoreError, StoreResult};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;

/// Cheaply clonable async handle to a [`JsonFileStore`].
#[derive(Clone)]
pub struct AsyncJsonStore {
    store: Arc<JsonFileStore>,
}

impl AsyncJsonStore {
    pub fn new(store: JsonFileStore) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// Create missing collection files.
    pub async fn init(&self) -> StoreResult<()> {
        let store = self.store.clone();

        tokio::task::spawn_blocking(move || store.init())
            .await
            .map_err(|e| StoreError::TaskJoin(e.to_string()))?
    }

    /// Load a whole collection, serving read failures as empty.
    pub async fn load_or_empty<T>(&self, collection: Collection) -> StoreResult<Vec<T>>
    where
        T: DeserializeOwned + Send + 'static,
    {
        let store = self.store.clone();

        tokio::task::spawn_blocking(move || store.load_or_empty(collection))
            .await
            .map_err(|e| StoreError::TaskJoin(e.to_string()))
    }

    /// Read-modify-write a collection under its lock.
    pub async fn update<T, R, F>(&self, collection: Collection, apply: F) -> StoreResult<R>
    where
        T: Serialize + DeserializeOwned + Send + 'static,
        R: Send + 'static,
        F: FnOnce(&mut Vec<T>) -> StoreResult<R> + Send + 'static,
    {
        let store = self.store.clone();

        tokio::task::spawn_blocking(move || store.update(collection, apply))
            .await
            .map_err(|e| StoreError::TaskJoin(e.to_string()))?
    }
}
