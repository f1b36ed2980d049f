//! Mock implementations of the environment traits.

use chrono::{DateTime, Duration, Utc};
use mocktodo_core::environment::{Clock, FailurePolicy};
use std::sync::Mutex;
use std::sync::PoisonError;
use std::sync::atomic::{AtomicU64, Ordering};

/// Fixed clock for deterministic tests
///
/// Always returns the same time, making tests reproducible.
///
/// # Example
///
/// ```
/// use mocktodo_testing::mocks::FixedClock;
/// use mocktodo_core::environment::Clock;
/// use chrono::Utc;
///
/// let clock = FixedClock::new(Utc::now());
/// let time1 = clock.now();
/// let time2 = clock.now();
/// assert_eq!(time1, time2); // Always the same!
/// ```
#[derive(Debug)]
pub struct FixedClock {
    time: DateTime<Utc>,
}

impl FixedClock {
    /// Create a new fixed clock with the given time
    #[must_use]
    pub const fn new(time: DateTime<Utc>) -> Self {
        Self { time }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.time
    }
}

/// Clock that advances a fixed step on every `now()` call
///
/// Each reading is strictly later than the previous one, for tests that
/// assert `updated_at` monotonicity.
#[derive(Debug)]
pub struct SteppingClock {
    current: Mutex<DateTime<Utc>>,
    step: Duration,
}

impl SteppingClock {
    /// Create a clock starting at `start` and advancing by `step` per call
    #[must_use]
    pub const fn new(start: DateTime<Utc>, step: Duration) -> Self {
        Self {
            current: Mutex::new(start),
            step,
        }
    }
}

impl Clock for SteppingClock {
    fn now(&self) -> DateTime<Utc> {
        let mut current = self
            .current
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        let reading = *current;
        *current = reading + self.step;
        reading
    }
}

/// Policy that fails every draw
///
/// For exercising the transient-failure paths deterministically.
#[derive(Clone, Copy, Debug, Default)]
pub struct AlwaysFail;

impl FailurePolicy for AlwaysFail {
    fn should_fail(&self) -> bool {
        true
    }
}

/// Policy that fails exactly one draw, by index, and succeeds otherwise
///
/// `FailNth::new(0)` fails the first operation and lets every later one
/// through: the shape of a user-visible error followed by a retry.
#[derive(Debug, Default)]
pub struct FailNth {
    n: u64,
    draws: AtomicU64,
}

impl FailNth {
    /// Create a policy that fails the draw with the given zero-based index
    #[must_use]
    pub const fn new(n: u64) -> Self {
        Self {
            n,
            draws: AtomicU64::new(0),
        }
    }
}

impl FailurePolicy for FailNth {
    fn should_fail(&self) -> bool {
        self.draws.fetch_add(1, Ordering::SeqCst) == self.n
    }
}
