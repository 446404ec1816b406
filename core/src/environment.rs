//! Injected dependencies for reducers.
//!
//! All external inputs a reducer needs (the current time, fresh identifiers)
//! are abstracted behind traits and handed over through the Environment
//! parameter, so tests can substitute deterministic versions.

use chrono::{DateTime, Utc};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Clock trait - abstracts time operations for testability
///
/// # Examples
///
/// ```ignore
/// // Production - uses system clock
/// struct SystemClock;
/// impl Clock for SystemClock {
///     fn now(&self) -> DateTime<Utc> {
///         Utc::now()
///     }
/// }
///
/// // Test - fixed time for deterministic tests
/// struct FixedClock { time: DateTime<Utc> }
/// impl Clock for FixedClock {
///     fn now(&self) -> DateTime<Utc> {
///         self.time
///     }
/// }
/// ```
pub trait Clock: Send + Sync {
    /// Get the current time
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time from the operating system
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Source of unique identifiers
///
/// Implementations must never hand out the same value twice for the lifetime
/// of the generator. Once the id space is used up they return `None` for
/// good instead of wrapping around.
pub trait IdGenerator: Send + Sync {
    /// Produce the next identifier, or `None` if none are left
    fn next_id(&self) -> Option<u64>;
}

/// Monotonic counter ids: 1, 2, 3, ...
///
/// `u64::MAX` marks the counter as exhausted, so the last id handed out is
/// `u64::MAX - 1`.
///
/// # Example
///
/// ```
/// use pawdo_core::environment::{IdGenerator, SequentialIds};
///
/// let ids = SequentialIds::new();
/// assert_eq!(ids.next_id(), Some(1));
/// assert_eq!(ids.next_id(), Some(2));
/// ```
#[derive(Debug)]
pub struct SequentialIds {
    next: AtomicU64,
}

impl SequentialIds {
    /// Counter starting at 1
    #[must_use]
    pub const fn new() -> Self {
        Self::starting_at(1)
    }

    /// Counter whose first id is `first`
    #[must_use]
    pub const fn starting_at(first: u64) -> Self {
        Self {
            next: AtomicU64::new(first),
        }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&self) -> Option<u64> {
        self.next
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |next| next.checked_add(1))
            .ok()
    }
}

/// Time-based ids: the clock's Unix time in milliseconds
///
/// Two ids requested within the same millisecond (or while the clock stands
/// still or runs backwards) would collide, so every id is forced to be
/// strictly greater than the previous one. After `u64::MAX` has been handed
/// out the generator is exhausted.
pub struct ClockIds {
    clock: Arc<dyn Clock>,
    last: AtomicU64,
}

impl ClockIds {
    /// Creates a generator reading from `clock`
    #[must_use]
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            clock,
            last: AtomicU64::new(0),
        }
    }
}

impl std::fmt::Debug for ClockIds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClockIds")
            .field("last", &self.last.load(Ordering::Relaxed))
            .finish_non_exhaustive()
    }
}

impl IdGenerator for ClockIds {
    fn next_id(&self) -> Option<u64> {
        let now = u64::try_from(self.clock.now().timestamp_millis()).unwrap_or(0);
        let bump = |prev: u64| prev.checked_add(1).map(|floor| now.max(floor));

        let Ok(previous) = self
            .last
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, bump)
        else {
            tracing::warn!("clock ids exhausted");
            return None;
        };

        let id = bump(previous)?;
        if id != now {
            tracing::trace!(clock_millis = now, id, "clock did not advance, bumped id");
        }
        Some(id)
    }
}
