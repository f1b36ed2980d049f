//! Data-access operations over the in-memory store.
//!
//! Each operation stands in for a network call: it suspends for the
//! operation's simulated latency, draws once from the injected failure
//! policy, and only then touches the store. A failed draw surfaces
//! [`ApiError::Network`] before the "server" can look anything up, so a
//! transient failure never mutates state and an absent id behind a failing
//! network reports the network error, not `NotFound`.
//!
//! Validation runs before the latency simulation: the client of the real
//! API validates before the request leaves the process.

use crate::store::TodoStore;
use chrono::{DateTime, Utc};
use mocktodo_core::{
    ApiEnvironment, ApiError, Clock, CreateTodoInput, FailurePolicy, Todo, TodoId,
    TodoListResponse, UpdateTodoInput,
};
use std::time::Duration;
use tokio::time::sleep;

/// Asynchronous data-access client for the todo collection
///
/// Cloning the client clones the handle: all clones share the same store
/// and environment.
#[derive(Clone)]
pub struct TodoApi {
    store: TodoStore,
    env: ApiEnvironment,
}

impl TodoApi {
    /// Creates a client over a fixture-seeded store
    #[must_use]
    pub fn new(env: ApiEnvironment) -> Self {
        Self::with_store(TodoStore::with_fixtures(), env)
    }

    /// Creates a client over an explicit store
    #[must_use]
    pub fn with_store(store: TodoStore, env: ApiEnvironment) -> Self {
        Self { store, env }
    }

    /// Restores the store to its three-entity fixture state
    ///
    /// Bare synchronous reset hook for use between test cases; no latency,
    /// no failure draw.
    pub fn reset(&self) {
        self.store.reset();
    }

    /// Lists all todos ordered by `created_at` descending
    ///
    /// Ties keep their original insertion order (stable sort). `total` is
    /// the size of the collection.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Network`] on an injected transient failure.
    pub async fn list(&self) -> Result<TodoListResponse, ApiError> {
        self.simulate("list", self.env.latency.list).await?;

        let mut todos = self.store.snapshot();
        todos.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        tracing::debug!(total = todos.len(), "listed todos");
        Ok(TodoListResponse::from_todos(todos))
    }

    /// Returns the todo with the given id
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Network`] on an injected transient failure, or
    /// [`ApiError::NotFound`] if the id is absent.
    pub async fn get(&self, id: &TodoId) -> Result<Todo, ApiError> {
        self.simulate("get", self.env.latency.get).await?;

        self.store.find(id).ok_or_else(|| ApiError::not_found(id))
    }

    /// Creates a new todo from a validated input
    ///
    /// The new entity is appended to the collection with an assigned id,
    /// `completed = false` and both timestamps set to the current time.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] for malformed input (rejected
    /// before any latency or store mutation), or [`ApiError::Network`] on
    /// an injected transient failure.
    pub async fn create(&self, input: CreateTodoInput) -> Result<Todo, ApiError> {
        input.validate()?;
        self.simulate("create", self.env.latency.create).await?;

        let todo = Todo::new(
            TodoId::new(),
            input.title,
            input.description,
            self.env.clock.now(),
        );
        self.store.insert(todo.clone());

        tracing::debug!(id = %todo.id, "created todo");
        Ok(todo)
    }

    /// Merges a partial patch into the todo with the given id
    ///
    /// `None` fields are left unchanged; `updated_at` is refreshed and
    /// `id`/`created_at` are never touched.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] for malformed patch fields,
    /// [`ApiError::Network`] on an injected transient failure, or
    /// [`ApiError::NotFound`] if the id is absent.
    pub async fn update(&self, id: &TodoId, patch: UpdateTodoInput) -> Result<Todo, ApiError> {
        patch.validate()?;
        self.simulate("update", self.env.latency.update).await?;

        let updated = self.apply(id, |todo, now| todo.apply_patch(&patch, now))?;
        tracing::debug!(id = %updated.id, "updated todo");
        Ok(updated)
    }

    /// Removes the todo with the given id from the collection
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Network`] on an injected transient failure, or
    /// [`ApiError::NotFound`] if the id is absent.
    pub async fn delete(&self, id: &TodoId) -> Result<(), ApiError> {
        self.simulate("delete", self.env.latency.delete).await?;

        self.store
            .remove(id)
            .map(drop)
            .ok_or_else(|| ApiError::not_found(id))?;

        tracing::debug!(%id, "deleted todo");
        Ok(())
    }

    /// Flips the completion status of the todo with the given id
    ///
    /// Delegates through the same patch-merge path as [`TodoApi::update`],
    /// so an absent id reports `NotFound` exactly once, but pays its own
    /// (shorter) latency rather than the update latency.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Network`] on an injected transient failure, or
    /// [`ApiError::NotFound`] if the id is absent.
    pub async fn toggle(&self, id: &TodoId) -> Result<Todo, ApiError> {
        self.simulate("toggle", self.env.latency.toggle).await?;

        let updated = self.apply(id, |todo, now| {
            let patch = UpdateTodoInput::new().with_completed(!todo.completed);
            todo.apply_patch(&patch, now);
        })?;
        tracing::debug!(id = %updated.id, completed = updated.completed, "toggled todo");
        Ok(updated)
    }

    /// The single mutate-by-id path shared by update and toggle
    fn apply<F>(&self, id: &TodoId, patch_fn: F) -> Result<Todo, ApiError>
    where
        F: FnOnce(&mut Todo, DateTime<Utc>),
    {
        let now = self.env.clock.now();
        self.store
            .modify(id, |todo| patch_fn(todo, now))
            .ok_or_else(|| ApiError::not_found(id))
    }

    /// Simulated network round-trip: latency suspension, then one failure
    /// draw
    async fn simulate(&self, operation: &'static str, delay: Duration) -> Result<(), ApiError> {
        tracing::trace!(operation, ?delay, "simulating request");
        sleep(delay).await;

        if self.env.failure.should_fail() {
            tracing::warn!(operation, "injected transient network failure");
            return Err(ApiError::Network);
        }

        Ok(())
    }
}

impl Default for TodoApi {
    /// Fixture-seeded store with the production-like environment
    fn default() -> Self {
        Self::new(ApiEnvironment::default())
    }
}
