//! Query and mutation bindings over the data-access layer.
//!
//! Reads consult the cache first and only hit the data-access layer on a
//! miss. Writes go straight through and then mark the affected keys stale:
//!
//! - create → the list
//! - update → the entity's detail and the list
//! - delete → the list
//! - toggle → the entity's detail and the list
//!
//! A failed write invalidates nothing: the cache still matches the
//! unmutated store. There is no optimistic patching of cached values;
//! invalidation always forces a full refetch on the next read.

use crate::cache::QueryCache;
use crate::key::QueryKey;
use mocktodo_api::TodoApi;
use mocktodo_core::{ApiError, CreateTodoInput, Todo, TodoId, TodoListResponse, UpdateTodoInput};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Cached query/mutation client for the todo collection
///
/// Cloning the client clones the handle: all clones share the same
/// data-access client, cache and fetch counter.
#[derive(Clone)]
pub struct TodoQueries {
    api: TodoApi,
    cache: QueryCache,
    fetches: Arc<AtomicU64>,
}

impl TodoQueries {
    /// Creates a client with an empty cache over the given data-access
    /// layer
    #[must_use]
    pub fn new(api: TodoApi) -> Self {
        Self {
            api,
            cache: QueryCache::new(),
            fetches: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Returns the full list, from cache when fresh
    ///
    /// # Errors
    ///
    /// Propagates [`ApiError::Network`] from the underlying fetch on a
    /// cache miss; a cache hit cannot fail.
    pub async fn list(&self) -> Result<TodoListResponse, ApiError> {
        if let Some(cached) = self.cache.get_list() {
            tracing::trace!(key = %QueryKey::TodoList, "cache hit");
            return Ok(cached);
        }

        let response = self.fetch_list().await?;
        Ok(response)
    }

    /// Returns one todo, from cache when fresh
    ///
    /// # Errors
    ///
    /// Propagates [`ApiError::Network`] or [`ApiError::NotFound`] from the
    /// underlying fetch on a cache miss; a cache hit cannot fail.
    pub async fn detail(&self, id: &TodoId) -> Result<Todo, ApiError> {
        if let Some(cached) = self.cache.get_detail(id) {
            tracing::trace!(key = %QueryKey::detail(id), "cache hit");
            return Ok(cached);
        }

        self.fetches.fetch_add(1, Ordering::SeqCst);
        let todo = self.api.get(id).await?;
        self.cache.insert_detail(todo.clone());
        Ok(todo)
    }

    /// Creates a todo, then marks the list stale
    ///
    /// # Errors
    ///
    /// Propagates [`ApiError::Validation`] and [`ApiError::Network`] from
    /// the data-access layer; on error nothing is invalidated.
    pub async fn create(&self, input: CreateTodoInput) -> Result<Todo, ApiError> {
        let todo = self.api.create(input).await?;
        self.cache.invalidate(&QueryKey::TodoList);
        Ok(todo)
    }

    /// Updates a todo, then marks its detail and the list stale
    ///
    /// # Errors
    ///
    /// Propagates [`ApiError::Validation`], [`ApiError::Network`] and
    /// [`ApiError::NotFound`] from the data-access layer; on error nothing
    /// is invalidated.
    pub async fn update(&self, id: &TodoId, patch: UpdateTodoInput) -> Result<Todo, ApiError> {
        let todo = self.api.update(id, patch).await?;
        self.cache.invalidate(&QueryKey::detail(id));
        self.cache.invalidate(&QueryKey::TodoList);
        Ok(todo)
    }

    /// Deletes a todo, then marks the list stale
    ///
    /// # Errors
    ///
    /// Propagates [`ApiError::Network`] and [`ApiError::NotFound`] from the
    /// data-access layer; on error nothing is invalidated.
    pub async fn delete(&self, id: &TodoId) -> Result<(), ApiError> {
        self.api.delete(id).await?;
        self.cache.invalidate(&QueryKey::TodoList);
        Ok(())
    }

    /// Toggles a todo's completion, then marks its detail and the list
    /// stale
    ///
    /// # Errors
    ///
    /// Propagates [`ApiError::Network`] and [`ApiError::NotFound`] from the
    /// data-access layer; on error nothing is invalidated.
    pub async fn toggle(&self, id: &TodoId) -> Result<Todo, ApiError> {
        let todo = self.api.toggle(id).await?;
        self.cache.invalidate(&QueryKey::detail(id));
        self.cache.invalidate(&QueryKey::TodoList);
        Ok(todo)
    }

    /// Marks one key stale, for explicit refresh actions
    pub fn invalidate(&self, key: &QueryKey) {
        self.cache.invalidate(key);
    }

    /// Marks every key stale, for the retry-after-error affordance
    pub fn invalidate_all(&self) {
        self.cache.invalidate_all();
    }

    /// The cache behind this client, for staleness assertions
    #[must_use]
    pub const fn cache(&self) -> &QueryCache {
        &self.cache
    }

    /// Number of reads that went through to the data-access layer
    #[must_use]
    pub fn fetch_count(&self) -> u64 {
        self.fetches.load(Ordering::SeqCst)
    }

    async fn fetch_list(&self) -> Result<TodoListResponse, ApiError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        let response = self.api.list().await?;
        self.cache.insert_list(response.clone());
        Ok(response)
    }
}
