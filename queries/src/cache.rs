//! Cached query results keyed by [`QueryKey`].
//!
//! An entry is either present (fresh) or absent: invalidation removes the
//! entry so the next read misses and refetches. No partial patching of
//! cached values; a write makes affected keys miss, nothing more.

use crate::key::QueryKey;
use mocktodo_core::{Todo, TodoId, TodoListResponse};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

/// A cached read result
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CachedQuery {
    /// Result of a list read
    List(TodoListResponse),
    /// Result of a detail read
    Detail(Todo),
}

/// Query cache shared by all clones of a
/// [`TodoQueries`](crate::TodoQueries) handle
#[derive(Clone, Debug, Default)]
pub struct QueryCache {
    entries: Arc<Mutex<HashMap<QueryKey, CachedQuery>>>,
}

impl QueryCache {
    /// Creates an empty cache
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<QueryKey, CachedQuery>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns the cached list, if fresh
    #[must_use]
    pub fn get_list(&self) -> Option<TodoListResponse> {
        match self.lock().get(&QueryKey::TodoList) {
            Some(CachedQuery::List(response)) => Some(response.clone()),
            _ => None,
        }
    }

    /// Returns the cached detail for the given id, if fresh
    #[must_use]
    pub fn get_detail(&self, id: &TodoId) -> Option<Todo> {
        match self.lock().get(&QueryKey::detail(id)) {
            Some(CachedQuery::Detail(todo)) => Some(todo.clone()),
            _ => None,
        }
    }

    /// Stores a list result
    pub fn insert_list(&self, response: TodoListResponse) {
        self.lock()
            .insert(QueryKey::TodoList, CachedQuery::List(response));
    }

    /// Stores a detail result under the entity's own id
    pub fn insert_detail(&self, todo: Todo) {
        self.lock()
            .insert(QueryKey::detail(&todo.id), CachedQuery::Detail(todo));
    }

    /// Marks the given key stale by removing its entry
    ///
    /// Returns true if an entry was present.
    pub fn invalidate(&self, key: &QueryKey) -> bool {
        let removed = self.lock().remove(key).is_some();
        if removed {
            tracing::debug!(%key, "invalidated query");
        }
        removed
    }

    /// Drops every entry in the todos namespace
    pub fn invalidate_all(&self) {
        let mut entries = self.lock();
        let dropped = entries.len();
        entries.clear();
        tracing::debug!(dropped, "invalidated all queries");
    }

    /// Returns true if the key currently has a fresh entry
    #[must_use]
    pub fn contains(&self, key: &QueryKey) -> bool {
        self.lock().contains_key(key)
    }

    /// Number of fresh entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Returns true if no entry is fresh
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)] // Test code can use unwrap

    use super::*;
    use chrono::Utc;

    fn sample_todo() -> Todo {
        Todo::new(TodoId::new(), "Sample".to_string(), None, Utc::now())
    }

    #[test]
    fn list_round_trip() {
        let cache = QueryCache::new();
        assert!(cache.get_list().is_none());

        cache.insert_list(TodoListResponse::from_todos(vec![sample_todo()]));

        assert_eq!(cache.get_list().unwrap().total, 1);
        assert!(cache.contains(&QueryKey::TodoList));
    }

    #[test]
    fn detail_round_trip() {
        let cache = QueryCache::new();
        let todo = sample_todo();

        cache.insert_detail(todo.clone());

        assert_eq!(cache.get_detail(&todo.id).unwrap(), todo);
        assert!(cache.get_detail(&TodoId::new()).is_none());
    }

    #[test]
    fn invalidate_removes_only_the_given_key() {
        let cache = QueryCache::new();
        let todo = sample_todo();
        cache.insert_list(TodoListResponse::from_todos(Vec::new()));
        cache.insert_detail(todo.clone());

        assert!(cache.invalidate(&QueryKey::TodoList));

        assert!(cache.get_list().is_none());
        assert!(cache.get_detail(&todo.id).is_some());
        // A second invalidation is a no-op
        assert!(!cache.invalidate(&QueryKey::TodoList));
    }

    #[test]
    fn invalidate_all_clears_everything() {
        let cache = QueryCache::new();
        cache.insert_list(TodoListResponse::from_todos(Vec::new()));
        cache.insert_detail(sample_todo());

        cache.invalidate_all();

        assert!(cache.is_empty());
    }

    #[test]
    fn clones_share_the_same_entries() {
        let cache = QueryCache::new();
        let handle = cache.clone();

        handle.insert_list(TodoListResponse::from_todos(Vec::new()));

        assert_eq!(cache.len(), 1);
    }
}
