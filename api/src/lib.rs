//! # Mocktodo API
//!
//! Mock data-access layer for the mocktodo demonstration stack: an
//! in-memory store plus asynchronous CRUD operations that simulate network
//! latency and inject transient failures.
//!
//! There is no server. Every operation suspends for a fixed per-operation
//! delay, draws once from an injected failure policy, and then performs a
//! synchronous effect on the store. That is the same request/response
//! shape the real API would have, minus the wire.
//!
//! ## Example
//!
//! ```
//! use mocktodo_api::TodoApi;
//! use mocktodo_core::{ApiEnvironment, CreateTodoInput, LatencyProfile};
//! use mocktodo_core::environment::{NeverFail, SystemClock};
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), mocktodo_core::ApiError> {
//! let env = ApiEnvironment::new(
//!     Arc::new(SystemClock),
//!     Arc::new(NeverFail),
//!     LatencyProfile::none(),
//! );
//! let api = TodoApi::new(env);
//!
//! let before = api.list().await?.total;
//! api.create(CreateTodoInput::new("Buy milk")).await?;
//! assert_eq!(api.list().await?.total, before + 1);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod store;

// Re-export commonly used types
pub use client::TodoApi;
pub use store::{TodoStore, fixtures};
