//! # pawdo Testing
//!
//! Testing utilities and helpers for the pawdo store architecture.
//!
//! This crate provides:
//! - Mock implementations of Environment traits
//! - A fluent Given-When-Then harness for reducers ([`ReducerTest`])
//! - A recorder for store change notifications
//! - Property-based testing strategies
//!
//! ## Example
//!
//! ```ignore
//! use pawdo_testing::ChangeRecorder;
//! use pawdo_runtime::Store;
//!
//! #[test]
//! fn add_notifies() {
//!     let mut store = Store::new(TodoState::new(), TodoReducer::new(), env);
//!     let recorder = ChangeRecorder::new();
//!     store.subscribe(recorder.listener(|s: &TodoState| s.len()));
//!
//!     let _ = store.send(TodoAction::Add { text: "Buy milk".into() });
//!
//!     assert_eq!(recorder.snapshots(), vec![1]);
//! }
//! ```

use chrono::{DateTime, Utc};
use pawdo_core::environment::Clock;

/// Given-When-Then reducer harness
pub mod reducer_test;

/// Mock implementations of Environment traits
pub mod mocks {
    use super::{Clock, DateTime, Utc};

    /// Fixed clock for deterministic tests
    ///
    /// Always returns the same time, making tests reproducible.
    ///
    /// # Example
    ///
    /// ```
    /// use pawdo_testing::mocks::FixedClock;
    /// use pawdo_core::environment::Clock;
    /// use chrono::Utc;
    ///
    /// let clock = FixedClock::new(Utc::now());
    /// let time1 = clock.now();
    /// let time2 = clock.now();
    /// assert_eq!(time1, time2); // Always the same!
    /// ```
    #[derive(Debug, Clone)]
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

    /// Create a default fixed clock for tests (2025-01-01 00:00:00 UTC)
    ///
    /// # Panics
    ///
    /// This function will panic if the hardcoded timestamp fails to parse,
    /// which should never happen in practice.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn test_clock() -> FixedClock {
        FixedClock::new(
            DateTime::parse_from_rfc3339("2025-01-01T00:00:00Z")
                .expect("hardcoded timestamp should always parse")
                .with_timezone(&Utc),
        )
    }
}

/// Test helpers and utilities
pub mod helpers {
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Records a projection of the state every time a store notifies
    ///
    /// Clones share the same log, so one clone can be moved into the store
    /// while the test keeps another for assertions.
    #[derive(Debug)]
    pub struct ChangeRecorder<T> {
        snapshots: Rc<RefCell<Vec<T>>>,
    }

    impl<T> Clone for ChangeRecorder<T> {
        fn clone(&self) -> Self {
            Self {
                snapshots: Rc::clone(&self.snapshots),
            }
        }
    }

    impl<T> Default for ChangeRecorder<T> {
        fn default() -> Self {
            Self {
                snapshots: Rc::new(RefCell::new(Vec::new())),
            }
        }
    }

    impl<T: 'static> ChangeRecorder<T> {
        /// Create an empty recorder
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// Build a store listener that records `project(state)` on each call
        pub fn listener<S, F>(&self, project: F) -> impl FnMut(&S) + 'static
        where
            F: Fn(&S) -> T + 'static,
        {
            let snapshots = Rc::clone(&self.snapshots);
            move |state: &S| snapshots.borrow_mut().push(project(state))
        }

        /// Number of notifications received
        #[must_use]
        pub fn count(&self) -> usize {
            self.snapshots.borrow().len()
        }

        /// All recorded projections, oldest first
        #[must_use]
        pub fn snapshots(&self) -> Vec<T>
        where
            T: Clone,
        {
            self.snapshots.borrow().clone()
        }

        /// The most recent projection
        #[must_use]
        pub fn last(&self) -> Option<T>
        where
            T: Clone,
        {
            self.snapshots.borrow().last().cloned()
        }
    }

    /// Route `tracing` output through the test harness's captured stdout
    ///
    /// Safe to call from every test; only the first call installs the
    /// subscriber. Honors `RUST_LOG`.
    pub fn init_test_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    }
}

/// Property-based testing strategies for to-do input
pub mod properties {
    use proptest::prelude::*;

    /// Strings that are empty after trimming (including the empty string)
    pub fn blank_text() -> impl Strategy<Value = String> {
        "[ \t\r\n]{0,12}"
    }

    /// Strings with at least one visible character, possibly padded with
    /// surrounding whitespace
    pub fn task_title() -> impl Strategy<Value = String> {
        "[ \t]{0,3}[A-Za-z0-9][A-Za-z0-9 .,!?'-]{0,30}[ \t]{0,3}"
    }

    /// Anything a user might type into the input field
    pub fn raw_input() -> impl Strategy<Value = String> {
        prop_oneof![blank_text(), task_title()]
    }
}

// Re-export commonly used items
pub use helpers::{ChangeRecorder, init_test_tracing};
pub use mocks::{FixedClock, test_clock};
pub use reducer_test::{ReducerTest, assertions};
