//! # pawdo Core
//!
//! Core traits and types for the pawdo store architecture.
//!
//! This crate provides the small set of abstractions the to-do screen is built
//! on: a pure reducer, the outcome it reports, and the injected dependencies it
//! may consult.
//!
//! ## Core Concepts
//!
//! - **State**: Domain state owned by a store
//! - **Action**: All possible commands a reducer accepts
//! - **Reducer**: Pure function `(State, Action, Environment) → Outcome`
//! - **Outcome**: Whether the action changed anything (`Applied`) or was
//!   silently ignored (`NoOp`)
//! - **Environment**: Injected dependencies via traits (clock, id generator)
//!
//! ## Architecture Principles
//!
//! - Functional Core, Imperative Shell
//! - Unidirectional Data Flow
//! - Invalid input degrades to a no-op, never to an error
//! - Dependency Injection via Environment
//!
//! ## Example
//!
//! ```
//! use pawdo_core::{outcome::Outcome, reducer::Reducer};
//!
//! struct CounterReducer;
//!
//! impl Reducer for CounterReducer {
//!     type State = u32;
//!     type Action = u32;
//!     type Environment = ();
//!
//!     fn reduce(&self, state: &mut u32, by: u32, _env: &()) -> Outcome {
//!         if by == 0 {
//!             return Outcome::NoOp;
//!         }
//!         *state += by;
//!         Outcome::Applied
//!     }
//! }
//!
//! let mut count = 0;
//! assert_eq!(CounterReducer.reduce(&mut count, 2, &()), Outcome::Applied);
//! assert_eq!(CounterReducer.reduce(&mut count, 0, &()), Outcome::NoOp);
//! assert_eq!(count, 2);
//! ```

// Re-export commonly used types
pub use chrono::{DateTime, Utc};

/// Environment module - Dependency injection traits and their production
/// implementations
pub mod environment;

/// Reducer module - The core trait for business logic
///
/// Reducers are pure functions: `(State, Action, Environment) → Outcome`
///
/// They contain all business logic and are deterministic and testable.
pub mod reducer {
    use super::outcome::Outcome;

    /// The Reducer trait - core abstraction for business logic
    ///
    /// # Type Parameters
    ///
    /// - `State`: The domain state this reducer operates on
    /// - `Action`: The action type this reducer processes
    /// - `Environment`: The injected dependencies this reducer needs
    ///
    /// # Example
    ///
    /// ```ignore
    /// impl Reducer for TodoReducer {
    ///     type State = TodoState;
    ///     type Action = TodoAction;
    ///     type Environment = TodoEnvironment;
    ///
    ///     fn reduce(
    ///         &self,
    ///         state: &mut TodoState,
    ///         action: TodoAction,
    ///         env: &TodoEnvironment,
    ///     ) -> Outcome {
    ///         match action {
    ///             TodoAction::Add { text } => { /* ... */ Outcome::Applied }
    ///             _ => Outcome::NoOp,
    ///         }
    ///     }
    /// }
    /// ```
    pub trait Reducer {
        /// The state type this reducer operates on
        type State;

        /// The action type this reducer processes
        type Action;

        /// The environment type with injected dependencies
        type Environment;

        /// Reduce an action into a state change
        ///
        /// This is a pure function that:
        /// 1. Validates the action
        /// 2. Updates state in place
        /// 3. Reports whether anything was applied
        ///
        /// Reducers never fail. An action that cannot be applied (blank input,
        /// unknown id) must leave `state` untouched and return
        /// [`Outcome::NoOp`].
        fn reduce(
            &self,
            state: &mut Self::State,
            action: Self::Action,
            env: &Self::Environment,
        ) -> Outcome;
    }
}

/// Outcome module - The success/no-op signal returned by every mutation
pub mod outcome {
    use std::fmt;

    /// Result of reducing a single action
    ///
    /// This is deliberately not a `Result`: nothing a reducer does can fail.
    /// Callers branch on it to drive presentation reactions (clearing an input
    /// field, moving focus) and the store uses it to decide whether to notify
    /// subscribers.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    #[must_use]
    pub enum Outcome {
        /// The action was accepted and state was written
        Applied,
        /// The action was accepted but produced no state change
        NoOp,
    }

    impl Outcome {
        /// Returns `true` if the action was applied
        #[must_use]
        pub const fn is_applied(self) -> bool {
            matches!(self, Self::Applied)
        }

        /// Returns `true` if the action was ignored
        #[must_use]
        pub const fn is_noop(self) -> bool {
            matches!(self, Self::NoOp)
        }

        /// `Applied` when `applied` is true, `NoOp` otherwise
        pub const fn from_applied(applied: bool) -> Self {
            if applied { Self::Applied } else { Self::NoOp }
        }
    }

    impl fmt::Display for Outcome {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match self {
                Self::Applied => write!(f, "applied"),
                Self::NoOp => write!(f, "no-op"),
            }
        }
    }
}
