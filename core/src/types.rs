//! Domain types for the todo resource.
//!
//! The serialized shape follows the JSON payloads of the API this stack
//! mocks: camelCase field names, `description` omitted when absent.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a todo item
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TodoId(Uuid);

impl TodoId {
    /// Creates a new random `TodoId`
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a `TodoId` from a UUID
    #[must_use]
    pub const fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Returns the inner UUID
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for TodoId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for TodoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single todo item
///
/// `id` and `created_at` are assigned once at creation and never touched
/// again; `updated_at` is refreshed on every successful mutation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    /// Unique identifier, immutable after creation
    pub id: TodoId,
    /// Title of the todo (non-empty, at most 100 characters)
    pub title: String,
    /// Optional free-form description (at most 500 characters)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Whether the todo is completed
    pub completed: bool,
    /// When the todo was created, immutable after creation
    pub created_at: DateTime<Utc>,
    /// When the todo was last mutated; always `>= created_at`
    pub updated_at: DateTime<Utc>,
}

impl Todo {
    /// Creates a new todo item with `completed = false` and both timestamps
    /// set to `created_at`
    #[must_use]
    pub const fn new(
        id: TodoId,
        title: String,
        description: Option<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title,
            description,
            completed: false,
            created_at,
            updated_at: created_at,
        }
    }

    /// Merges a partial patch into this todo and refreshes `updated_at`
    ///
    /// `None` fields are left unchanged; `id` and `created_at` are never
    /// touched.
    pub fn apply_patch(&mut self, patch: &UpdateTodoInput, updated_at: DateTime<Utc>) {
        if let Some(title) = &patch.title {
            self.title = title.clone();
        }
        if let Some(description) = &patch.description {
            self.description = Some(description.clone());
        }
        if let Some(completed) = patch.completed {
            self.completed = completed;
        }
        self.updated_at = updated_at;
    }
}

/// Input for creating a todo
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTodoInput {
    /// Title of the new todo (required, non-empty)
    pub title: String,
    /// Optional description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl CreateTodoInput {
    /// Creates an input with the given title and no description
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
        }
    }

    /// Sets the description
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Partial patch for updating a todo
///
/// All fields are optional; `None` means "leave unchanged". An empty patch
/// is valid and only refreshes `updated_at`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTodoInput {
    /// New title, if changing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// New description, if changing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// New completion status, if changing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

impl UpdateTodoInput {
    /// Creates an empty patch
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the title field of the patch
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the description field of the patch
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the completion field of the patch
    #[must_use]
    pub const fn with_completed(mut self, completed: bool) -> Self {
        self.completed = Some(completed);
        self
    }

    /// Returns true if the patch changes nothing
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.completed.is_none()
    }
}

/// Response shape for listing todos
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoListResponse {
    /// Entities ordered by `created_at` descending
    pub todos: Vec<Todo>,
    /// Number of entities in the collection
    pub total: usize,
}

impl TodoListResponse {
    /// Builds a response from an already-ordered list of todos
    #[must_use]
    pub fn from_todos(todos: Vec<Todo>) -> Self {
        let total = todos.len();
        Self { todos, total }
    }
}
