//! Error types for the data-access layer.
//!
//! The taxonomy keeps the three failure classes distinguishable so callers
//! can pattern-match instead of string-matching messages: a presentation
//! layer renders a dedicated not-found view for [`ApiError::NotFound`], a
//! retryable error view for [`ApiError::Network`], and per-field messages
//! for [`ApiError::Validation`]. Messages are in the origin locale of the
//! API this stack mocks.

use crate::types::TodoId;
use crate::validate::ValidationError;
use thiserror::Error;

/// Errors returned by the data-access operations
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Injected transient failure simulating unreliable network conditions
    ///
    /// Never retried internally; the caller re-invokes explicitly.
    #[error("ネットワークエラーが発生しました。もう一度お試しください。")]
    Network,

    /// The requested todo does not exist in the collection
    #[error("指定されたTODOが見つかりません: {id}")]
    NotFound {
        /// The id that was looked up
        id: TodoId,
    },

    /// Malformed create/update input, rejected before any store mutation
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl ApiError {
    /// Builds a `NotFound` error for the given id
    #[must_use]
    pub fn not_found(id: &TodoId) -> Self {
        Self::NotFound { id: id.clone() }
    }

    /// Returns true for the not-found variant
    ///
    /// Routing layers use this to render a dedicated not-found view rather
    /// than a generic error view.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Returns true for the injected transient failure variant
    #[must_use]
    pub const fn is_transient(&self) -> bool {
        matches!(self, Self::Network)
    }
}
