//! Injected dependencies for the data-access layer.
//!
//! All nondeterminism (time, randomized failure, simulated latency) is
//! abstracted behind traits and plain config structs injected via
//! [`ApiEnvironment`], so tests substitute deterministic implementations
//! instead of monkey-patching a global random source.

use chrono::{DateTime, Utc};
use std::sync::Arc;
use std::time::Duration;

/// Failure rate of the production environment: one in twenty calls
pub const DEFAULT_FAILURE_RATE: f64 = 0.05;

/// Clock trait - abstracts time operations for testability
pub trait Clock: Send + Sync {
    /// Get the current time
    fn now(&self) -> DateTime<Utc>;
}

/// Production clock backed by the system time
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Failure injection policy for data-access operations
///
/// Each operation draws once from its policy before touching the store; a
/// `true` draw aborts the operation with a transient network error and no
/// state change.
pub trait FailurePolicy: Send + Sync {
    /// Returns true if the current operation should fail
    fn should_fail(&self) -> bool;
}

/// Production policy: fail with a fixed probability
///
/// Draws a uniform random value in `[0, 1)` and fails when it falls below
/// the configured rate.
#[derive(Clone, Copy, Debug)]
pub struct RandomFailure {
    rate: f64,
}

impl RandomFailure {
    /// Creates a policy with the given failure rate, clamped to `[0, 1]`
    #[must_use]
    pub fn new(rate: f64) -> Self {
        Self {
            rate: rate.clamp(0.0, 1.0),
        }
    }

    /// Returns the configured failure rate
    #[must_use]
    pub const fn rate(&self) -> f64 {
        self.rate
    }
}

impl Default for RandomFailure {
    fn default() -> Self {
        Self::new(DEFAULT_FAILURE_RATE)
    }
}

impl FailurePolicy for RandomFailure {
    fn should_fail(&self) -> bool {
        use rand::Rng;

        rand::thread_rng().gen_range(0.0..1.0) < self.rate
    }
}

/// Policy that never fails
///
/// The default for tests that exercise the success paths.
#[derive(Clone, Copy, Debug, Default)]
pub struct NeverFail;

impl FailurePolicy for NeverFail {
    fn should_fail(&self) -> bool {
        false
    }
}

/// Simulated network latency, one fixed delay per operation
///
/// The default profile carries the production-like delays; tests zero them
/// with [`LatencyProfile::none`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LatencyProfile {
    /// Delay for the list operation
    pub list: Duration,
    /// Delay for the get-by-id operation
    pub get: Duration,
    /// Delay for the create operation
    pub create: Duration,
    /// Delay for the update operation
    pub update: Duration,
    /// Delay for the delete operation
    pub delete: Duration,
    /// Delay for the toggle operation
    pub toggle: Duration,
}

impl Default for LatencyProfile {
    fn default() -> Self {
        Self {
            list: Duration::from_millis(1500),
            get: Duration::from_millis(800),
            create: Duration::from_millis(800),
            update: Duration::from_millis(600),
            delete: Duration::from_millis(600),
            toggle: Duration::from_millis(500),
        }
    }
}

impl LatencyProfile {
    /// Profile with no delay on any operation
    #[must_use]
    pub const fn none() -> Self {
        Self::uniform(Duration::ZERO)
    }

    /// Profile with the same delay on every operation
    #[must_use]
    pub const fn uniform(delay: Duration) -> Self {
        Self {
            list: delay,
            get: delay,
            create: delay,
            update: delay,
            delete: delay,
            toggle: delay,
        }
    }
}

/// Environment dependencies for the data-access layer
#[derive(Clone)]
pub struct ApiEnvironment {
    /// Clock for generating timestamps
    pub clock: Arc<dyn Clock>,
    /// Failure injection policy
    pub failure: Arc<dyn FailurePolicy>,
    /// Simulated latency per operation
    pub latency: LatencyProfile,
}

impl ApiEnvironment {
    /// Creates a new `ApiEnvironment`
    #[must_use]
    pub fn new(
        clock: Arc<dyn Clock>,
        failure: Arc<dyn FailurePolicy>,
        latency: LatencyProfile,
    ) -> Self {
        Self {
            clock,
            failure,
            latency,
        }
    }
}

impl Default for ApiEnvironment {
    /// System clock, 5% random failure, production-like latency
    fn default() -> Self {
        Self::new(
            Arc::new(SystemClock),
            Arc::new(RandomFailure::default()),
            LatencyProfile::default(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_clock_does_not_go_backwards() {
        let clock = SystemClock;
        let first = clock.now();
        let second = clock.now();
        assert!(second >= first);
    }

    #[test]
    fn random_failure_rate_zero_never_fails() {
        let policy = RandomFailure::new(0.0);
        assert!((0..1000).all(|_| !policy.should_fail()));
    }

    #[test]
    fn random_failure_rate_one_always_fails() {
        let policy = RandomFailure::new(1.0);
        assert!((0..1000).all(|_| policy.should_fail()));
    }

    #[test]
    fn random_failure_rate_is_clamped() {
        assert!((RandomFailure::new(2.0).rate() - 1.0).abs() < f64::EPSILON);
        assert!(RandomFailure::new(-1.0).rate().abs() < f64::EPSILON);
    }

    #[test]
    fn never_fail_never_fails() {
        assert!(!NeverFail.should_fail());
    }

    #[test]
    fn latency_profile_none_is_all_zero() {
        let profile = LatencyProfile::none();
        assert_eq!(profile.list, Duration::ZERO);
        assert_eq!(profile.toggle, Duration::ZERO);
    }

    #[test]
    fn default_profile_uses_distinct_delays() {
        let profile = LatencyProfile::default();
        assert_eq!(profile.list, Duration::from_millis(1500));
        assert_eq!(profile.get, Duration::from_millis(800));
        assert_eq!(profile.toggle, Duration::from_millis(500));
    }
}
