//! # Mocktodo Testing
//!
//! Testing utilities for the mocktodo stack.
//!
//! This crate provides:
//! - Mock implementations of the environment traits (deterministic clocks,
//!   scripted failure policies)
//! - A canonical deterministic [`test_environment`]
//! - Assertion helpers for the error taxonomy
//!
//! ## Example
//!
//! ```ignore
//! use mocktodo_api::TodoApi;
//! use mocktodo_testing::{assertions, test_environment};
//!
//! #[tokio::test]
//! async fn get_missing_id_is_not_found() {
//!     let api = TodoApi::new(test_environment());
//!     let id = TodoId::new();
//!
//!     let result = api.get(&id).await;
//!     assertions::assert_not_found(&result, &id);
//! }
//! ```

use chrono::{DateTime, TimeZone, Utc};
use mocktodo_core::environment::NeverFail;
use mocktodo_core::{ApiEnvironment, LatencyProfile};
use std::sync::Arc;

pub mod mocks;

/// The fixed instant returned by the canonical test clock
///
/// Later than every fixture timestamp, so mutations in tests keep
/// `updated_at >= created_at`.
#[must_use]
pub fn test_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0)
        .single()
        .unwrap_or_default()
}

/// Canonical deterministic environment: fixed clock, no failures, no
/// latency
#[must_use]
pub fn test_environment() -> ApiEnvironment {
    ApiEnvironment::new(
        Arc::new(mocks::FixedClock::new(test_time())),
        Arc::new(NeverFail),
        LatencyProfile::none(),
    )
}

/// Assertion helpers for the error taxonomy
pub mod assertions {
    use mocktodo_core::{ApiError, TodoId};

    /// Asserts that a result failed with `NotFound` carrying the given id
    ///
    /// # Panics
    ///
    /// Panics if the result is `Ok` or a different error variant.
    #[allow(clippy::panic)] // Test assertion
    pub fn assert_not_found<T: std::fmt::Debug>(result: &Result<T, ApiError>, id: &TodoId) {
        match result {
            Err(ApiError::NotFound { id: carried }) => {
                assert_eq!(carried, id, "NotFound carried the wrong id");
            }
            other => panic!("expected NotFound for {id}, got {other:?}"),
        }
    }

    /// Asserts that a result failed with the injected transient network
    /// error
    ///
    /// # Panics
    ///
    /// Panics if the result is `Ok` or a different error variant.
    #[allow(clippy::panic)] // Test assertion
    pub fn assert_network_error<T: std::fmt::Debug>(result: &Result<T, ApiError>) {
        assert!(
            matches!(result, Err(ApiError::Network)),
            "expected a transient network error, got {result:?}"
        );
    }

    /// Asserts that a result failed validation on the given field
    ///
    /// # Panics
    ///
    /// Panics if the result is `Ok`, a different error variant, or the
    /// field did not fail.
    #[allow(clippy::panic)] // Test assertion
    pub fn assert_validation_error<T: std::fmt::Debug>(result: &Result<T, ApiError>, field: &str) {
        match result {
            Err(ApiError::Validation(error)) => {
                assert!(
                    error.message_for(field).is_some(),
                    "expected a validation error on `{field}`, got {error:?}"
                );
            }
            other => panic!("expected a validation error on `{field}`, got {other:?}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mocktodo_core::environment::{Clock, FailurePolicy};

    #[test]
    fn test_environment_is_deterministic() {
        let env = test_environment();
        assert_eq!(env.clock.now(), test_time());
        assert!(!env.failure.should_fail());
        assert_eq!(env.latency, LatencyProfile::none());
    }
}
