//! In-memory store holding the authoritative todo collection.
//!
//! The store is an explicit object owned by the data-access layer, not
//! process-global state: every [`TodoApi`](crate::TodoApi) (and every test)
//! constructs its own. Critical sections are brief and synchronous and the
//! lock is never held across an await, matching the single-logical-thread
//! model where mutations are atomic once an operation resumes.

use chrono::{DateTime, TimeZone, Utc};
use mocktodo_core::{Todo, TodoId};
use std::sync::{Arc, Mutex, PoisonError};

/// The three-entity fixture set seeded at construction and restored by
/// [`TodoStore::reset`].
pub mod fixtures {
    use super::{DateTime, TimeZone, Todo, TodoId, Utc};
    use uuid::{Uuid, uuid};

    /// Id of the seeded "learn the router" todo
    pub const ROUTER_TODO: Uuid = uuid!("550e8400-e29b-41d4-a716-446655440001");

    /// Id of the seeded "learn the query cache" todo
    pub const QUERY_TODO: Uuid = uuid!("550e8400-e29b-41d4-a716-446655440002");

    /// Id of the seeded "learn the form library" todo
    pub const FORM_TODO: Uuid = uuid!("550e8400-e29b-41d4-a716-446655440003");

    fn date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
            .single()
            .unwrap_or_default()
    }

    /// Builds the canonical seed collection, in insertion order
    #[must_use]
    pub fn seed() -> Vec<Todo> {
        let router = Todo::new(
            TodoId::from_uuid(ROUTER_TODO),
            "TanStack Routerを学ぶ".to_string(),
            Some("ファイルベースルーティングとloaderの使い方を理解する".to_string()),
            date(2025, 1, 1),
        );

        let mut query = Todo::new(
            TodoId::from_uuid(QUERY_TODO),
            "TanStack Queryを学ぶ".to_string(),
            Some("useSuspenseQueryとキャッシュ管理を理解する".to_string()),
            date(2025, 1, 2),
        );
        query.completed = true;
        query.updated_at = date(2025, 1, 3);

        let form = Todo::new(
            TodoId::from_uuid(FORM_TODO),
            "TanStack Formを学ぶ".to_string(),
            Some("Zodとの統合でバリデーションを実装する".to_string()),
            date(2025, 1, 3),
        );

        vec![router, query, form]
    }

    /// Ids of the seed collection, in insertion order
    #[must_use]
    pub fn seed_ids() -> [TodoId; 3] {
        [
            TodoId::from_uuid(ROUTER_TODO),
            TodoId::from_uuid(QUERY_TODO),
            TodoId::from_uuid(FORM_TODO),
        ]
    }
}

/// In-memory ordered collection of todos
///
/// Cloning the store clones the handle, not the data: all clones share the
/// same collection.
#[derive(Clone, Debug)]
pub struct TodoStore {
    todos: Arc<Mutex<Vec<Todo>>>,
}

impl TodoStore {
    /// Creates a store seeded with the three-entity fixture set
    #[must_use]
    pub fn with_fixtures() -> Self {
        Self::from_todos(fixtures::seed())
    }

    /// Creates an empty store
    #[must_use]
    pub fn empty() -> Self {
        Self::from_todos(Vec::new())
    }

    /// Creates a store holding the given collection
    #[must_use]
    pub fn from_todos(todos: Vec<Todo>) -> Self {
        Self {
            todos: Arc::new(Mutex::new(todos)),
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Todo>> {
        self.todos.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns a clone of the whole collection, in insertion order
    #[must_use]
    pub fn snapshot(&self) -> Vec<Todo> {
        self.lock().clone()
    }

    /// Returns a clone of the todo with the given id
    #[must_use]
    pub fn find(&self, id: &TodoId) -> Option<Todo> {
        self.lock().iter().find(|t| &t.id == id).cloned()
    }

    /// Appends a todo to the collection
    pub fn insert(&self, todo: Todo) {
        self.lock().push(todo);
    }

    /// Applies `f` to the todo with the given id and returns the updated
    /// clone, or `None` if the id is absent
    pub fn modify<F>(&self, id: &TodoId, f: F) -> Option<Todo>
    where
        F: FnOnce(&mut Todo),
    {
        let mut todos = self.lock();
        let todo = todos.iter_mut().find(|t| &t.id == id)?;
        f(todo);
        Some(todo.clone())
    }

    /// Removes the todo with the given id, returning it if present
    pub fn remove(&self, id: &TodoId) -> Option<Todo> {
        let mut todos = self.lock();
        let index = todos.iter().position(|t| &t.id == id)?;
        Some(todos.remove(index))
    }

    /// Replaces the whole collection
    pub fn replace(&self, todos: Vec<Todo>) {
        *self.lock() = todos;
    }

    /// Restores the three-entity fixture state, for test isolation
    pub fn reset(&self) {
        self.replace(fixtures::seed());
    }

    /// Number of todos in the collection
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Returns true if the collection is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}

impl Default for TodoStore {
    fn default() -> Self {
        Self::with_fixtures()
    }
}
