//! # Mocktodo Core
//!
//! Domain types, validation and injected dependencies for the mocktodo
//! demonstration stack.
//!
//! This crate defines the shape of a todo item and its create/update inputs,
//! the error taxonomy shared by every layer above it, and the environment
//! traits (clock, failure policy, latency profile) that the data-access
//! layer depends on.
//!
//! ## Core Concepts
//!
//! - **Types**: [`Todo`], [`CreateTodoInput`], [`UpdateTodoInput`],
//!   [`TodoListResponse`]
//! - **Validation**: per-field input checks surfaced as
//!   [`validate::ValidationError`], rejected before any store mutation
//! - **Errors**: [`ApiError`] with a dedicated `NotFound` variant so callers
//!   can pattern-match instead of string-matching messages
//! - **Environment**: injected dependencies via traits, so tests substitute
//!   deterministic clocks and failure policies
//!
//! ## Example
//!
//! ```
//! use mocktodo_core::{CreateTodoInput, TodoId};
//!
//! let input = CreateTodoInput::new("Buy milk").with_description("2 liters");
//! assert!(input.validate().is_ok());
//!
//! let id = TodoId::new();
//! assert!(!id.to_string().is_empty());
//! ```

pub mod environment;
pub mod error;
pub mod types;
pub mod validate;

// Re-export commonly used types
pub use chrono::{DateTime, Utc};
pub use environment::{ApiEnvironment, Clock, FailurePolicy, LatencyProfile};
pub use error::ApiError;
pub use types::{CreateTodoInput, Todo, TodoId, TodoListResponse, UpdateTodoInput};
pub use validate::ValidationError;
