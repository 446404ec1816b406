//! # pawdo Runtime
//!
//! Runtime implementation for the pawdo store architecture.
//!
//! This crate provides the [`Store`]: the single owner of a feature's state.
//! It runs the reducer for every action it is sent and tells subscribers when
//! state actually changed.
//!
//! ## Core Components
//!
//! - **Store**: Owns state, reducer and environment
//! - **Subscribers**: Callbacks invoked synchronously after every applied
//!   action, in subscription order
//!
//! ## Example
//!
//! ```ignore
//! use pawdo_runtime::Store;
//!
//! let mut store = Store::new(initial_state, my_reducer, environment);
//!
//! let subscription = store.subscribe(|state| redraw(state));
//!
//! // Send an action
//! let outcome = store.send(Action::DoSomething);
//!
//! // Read state
//! let value = store.state(|s| s.some_field);
//! ```
//!
//! ## Execution model
//!
//! Everything happens on the caller's thread. `send` takes `&mut self`, so
//! the borrow checker already serializes mutations; there is no lock, no
//! background task and nothing to cancel.

use pawdo_core::{outcome::Outcome, reducer::Reducer};

pub mod store {
    //! The [`Store`] type and its subscription handles.

    use super::{Outcome, Reducer};
    use std::fmt;

    /// Boxed subscriber callback
    type Listener<S> = Box<dyn FnMut(&S)>;

    /// Handle returned by [`Store::subscribe`]
    ///
    /// Pass it to [`Store::unsubscribe`] to stop receiving notifications.
    /// Dropping the handle does not unsubscribe.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Subscription(u64);

    impl fmt::Display for Subscription {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "subscription#{}", self.0)
        }
    }

    /// The Store - runtime owner of a reducer's state
    ///
    /// The Store manages:
    /// 1. State (owned, mutated only through `send`)
    /// 2. Reducer (business logic)
    /// 3. Environment (injected dependencies)
    /// 4. Subscribers (notified after every applied action)
    ///
    /// # Type Parameters
    ///
    /// - `S`: State type
    /// - `A`: Action type
    /// - `E`: Environment type
    /// - `R`: Reducer implementation
    ///
    /// # Example
    ///
    /// ```ignore
    /// let mut store = Store::new(
    ///     TodoState::default(),
    ///     TodoReducer::new(),
    ///     TodoEnvironment::new(Arc::new(SequentialIds::new())),
    /// );
    ///
    /// store.send(TodoAction::Add { text: "Buy milk".into() });
    /// ```
    pub struct Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E>,
    {
        state: S,
        reducer: R,
        environment: E,
        listeners: Vec<(Subscription, Listener<S>)>,
        next_subscription: u64,
    }

    impl<S, A, E, R> Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E>,
        A: fmt::Debug,
    {
        /// Create a new store with initial state, reducer, and environment
        #[must_use]
        pub const fn new(initial_state: S, reducer: R, environment: E) -> Self {
            Self {
                state: initial_state,
                reducer,
                environment,
                listeners: Vec::new(),
                next_subscription: 0,
            }
        }

        /// Send an action to the store
        ///
        /// This:
        /// 1. Calls the reducer with (state, action, environment)
        /// 2. On [`Outcome::Applied`], calls every subscriber with the new state
        /// 3. Returns the outcome so the caller can drive its own reactions
        ///
        /// Subscribers run before `send` returns. A no-op action notifies
        /// nobody.
        ///
        /// # Example
        ///
        /// ```ignore
        /// if store.send(TodoAction::Add { text }).is_applied() {
        ///     input.clear();
        /// }
        /// ```
        #[tracing::instrument(skip(self, action), name = "store_send")]
        pub fn send(&mut self, action: A) -> Outcome {
            tracing::debug!(?action, "Processing action");
            metrics::counter!("store.actions.total").increment(1);

            let outcome = {
                let span = tracing::debug_span!("reducer_execution");
                let _enter = span.enter();

                let start = std::time::Instant::now();
                let outcome = self.reducer.reduce(&mut self.state, action, &self.environment);
                metrics::histogram!("store.reducer.duration_seconds")
                    .record(start.elapsed().as_secs_f64());

                tracing::trace!(%outcome, "Reducer completed");
                outcome
            };

            match outcome {
                Outcome::Applied => {
                    metrics::counter!("store.actions.applied").increment(1);
                    self.notify();
                }
                Outcome::NoOp => {
                    metrics::counter!("store.actions.noop").increment(1);
                    tracing::debug!("Action was a no-op, subscribers not notified");
                }
            }

            outcome
        }

        /// Read current state via a closure
        ///
        /// ```ignore
        /// let count = store.state(|s| s.len());
        /// ```
        pub fn state<F, T>(&self, f: F) -> T
        where
            F: FnOnce(&S) -> T,
        {
            f(&self.state)
        }

        /// Register a callback invoked after every applied action
        ///
        /// Callbacks run synchronously inside [`Store::send`], in the order
        /// they were registered, and receive the state as it is after the
        /// action.
        pub fn subscribe<F>(&mut self, listener: F) -> Subscription
        where
            F: FnMut(&S) + 'static,
        {
            let subscription = Subscription(self.next_subscription);
            self.next_subscription += 1;
            self.listeners.push((subscription, Box::new(listener)));
            tracing::trace!(%subscription, "Subscriber registered");
            subscription
        }

        /// Remove a subscriber
        ///
        /// Returns `false` if the subscription was unknown (already removed).
        pub fn unsubscribe(&mut self, subscription: Subscription) -> bool {
            let before = self.listeners.len();
            self.listeners.retain(|(id, _)| *id != subscription);
            let removed = self.listeners.len() != before;
            tracing::trace!(%subscription, removed, "Subscriber removed");
            removed
        }

        /// Number of registered subscribers
        #[must_use]
        pub fn subscriber_count(&self) -> usize {
            self.listeners.len()
        }

        /// The injected environment
        #[must_use]
        pub const fn environment(&self) -> &E {
            &self.environment
        }

        fn notify(&mut self) {
            tracing::trace!(subscribers = self.listeners.len(), "Notifying subscribers");
            for (_, listener) in &mut self.listeners {
                listener(&self.state);
            }
        }
    }

    impl<S, A, E, R> fmt::Debug for Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E>,
        S: fmt::Debug,
    {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.debug_struct("Store")
                .field("state", &self.state)
                .field("subscribers", &self.listeners.len())
                .finish_non_exhaustive()
        }
    }
}

pub use store::{Store, Subscription};

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug, Clone, Default, PartialEq)]
    struct CounterState {
        count: i64,
    }

    #[derive(Debug, Clone)]
    enum CounterAction {
        Add(i64),
    }

    struct CounterReducer;

    impl Reducer for CounterReducer {
        type State = CounterState;
        type Action = CounterAction;
        type Environment = ();

        fn reduce(&self, state: &mut CounterState, action: CounterAction, _env: &()) -> Outcome {
            match action {
                CounterAction::Add(0) => Outcome::NoOp,
                CounterAction::Add(n) => {
                    state.count += n;
                    Outcome::Applied
                }
            }
        }
    }

    fn counter_store() -> Store<CounterState, CounterAction, (), CounterReducer> {
        Store::new(CounterState::default(), CounterReducer, ())
    }

    #[test]
    fn send_applies_and_reads_back() {
        let mut store = counter_store();
        assert_eq!(store.send(CounterAction::Add(3)), Outcome::Applied);
        assert_eq!(store.state(|s| s.count), 3);
    }

    #[test]
    fn subscribers_see_state_after_action() {
        let mut store = counter_store();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let _subscription = store.subscribe(move |s: &CounterState| sink.borrow_mut().push(s.count));

        let _ = store.send(CounterAction::Add(1));
        let _ = store.send(CounterAction::Add(0));
        let _ = store.send(CounterAction::Add(2));

        assert_eq!(*seen.borrow(), vec![1, 3]);
    }

    #[test]
    fn unsubscribe_stops_notifications() {
        let mut store = counter_store();
        let calls = Rc::new(RefCell::new(0));
        let sink = Rc::clone(&calls);
        let subscription = store.subscribe(move |_| *sink.borrow_mut() += 1);

        let _ = store.send(CounterAction::Add(1));
        assert!(store.unsubscribe(subscription));
        assert!(!store.unsubscribe(subscription));
        let _ = store.send(CounterAction::Add(1));

        assert_eq!(*calls.borrow(), 1);
        assert_eq!(store.subscriber_count(), 0);
    }

    #[test]
    fn subscribers_run_in_registration_order() {
        let mut store = counter_store();
        let order = Rc::new(RefCell::new(Vec::new()));
        for tag in ["first", "second", "third"] {
            let sink = Rc::clone(&order);
            let _ = store.subscribe(move |_| sink.borrow_mut().push(tag));
        }

        let _ = store.send(CounterAction::Add(5));

        assert_eq!(*order.borrow(), vec!["first", "second", "third"]);
    }
}
