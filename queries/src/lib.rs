//! # Mocktodo Queries
//!
//! Query-cache bindings for the mocktodo data-access layer: a key space
//! (one key for the full list, one per entity id for detail reads), a
//! cache of read results, and mutation wrappers that mark the affected
//! keys stale so subsequent reads refetch instead of serving stale data.
//!
//! ## Invalidation contract
//!
//! | write  | keys marked stale        |
//! |--------|--------------------------|
//! | create | list                     |
//! | update | detail of the id, list   |
//! | delete | list                     |
//! | toggle | detail of the id, list   |
//!
//! ## Example
//!
//! ```
//! use mocktodo_api::TodoApi;
//! use mocktodo_core::{ApiEnvironment, CreateTodoInput, LatencyProfile};
//! use mocktodo_core::environment::{NeverFail, SystemClock};
//! use mocktodo_queries::TodoQueries;
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), mocktodo_core::ApiError> {
//! let env = ApiEnvironment::new(
//!     Arc::new(SystemClock),
//!     Arc::new(NeverFail),
//!     LatencyProfile::none(),
//! );
//! let queries = TodoQueries::new(TodoApi::new(env));
//!
//! let first = queries.list().await?;
//! let again = queries.list().await?; // served from cache
//! assert_eq!(first.total, again.total);
//!
//! queries.create(CreateTodoInput::new("Buy milk")).await?;
//! let refetched = queries.list().await?; // list was invalidated
//! assert_eq!(refetched.total, first.total + 1);
//! # Ok(())
//! # }
//! ```

pub mod cache;
pub mod client;
pub mod key;

// Re-export commonly used types
pub use cache::{CachedQuery, QueryCache};
pub use client::TodoQueries;
pub use key::QueryKey;
