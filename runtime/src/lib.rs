//! # Todo List Runtime
//!
//! The [`Store`] coordinates reducer execution and effect handling.
//!
//! ## Core Components
//!
//! - **Store**: owns state, runs the reducer, executes effects
//! - **Effect execution**: `Effect::Dispatch` feeds actions back into the
//!   reducer before `send` returns
//! - **Subscribers**: observers called with every reduced action and the state
//!   it produced, which is how a view layer knows to re-render
//!
//! The store is synchronous and single-threaded. `send` takes `&mut self`, so
//! two mutations can never interleave.
//!
//! ## Example
//!
//! ```ignore
//! use todo_list_runtime::Store;
//!
//! let mut store = Store::new(initial_state, my_reducer, environment);
//!
//! // Send an action
//! store.send(Action::DoSomething)?;
//!
//! // Read state
//! let value = store.state(|s| s.some_field);
//! ```

use todo_list_core::{effect::Effect, reducer::Reducer, SmallVec};

/// Metric names and descriptions
pub mod metrics;

/// Error types for the Store runtime
pub mod error {
    use thiserror::Error;

    /// Errors that can occur during Store operations
    #[derive(Error, Debug, Clone, PartialEq, Eq)]
    pub enum StoreError {
        /// A chain of dispatched actions grew past the configured depth
        ///
        /// Actions reduced before the limit was hit keep their state changes;
        /// the remaining queued actions are dropped.
        #[error("Dispatch chain exceeded the maximum depth of {max_depth}")]
        DispatchDepthExceeded {
            /// The configured limit
            max_depth: usize,
        },
    }
}

pub use error::StoreError;

/// Configuration for Store behavior
///
/// # Example
///
/// ```
/// use todo_list_runtime::StoreConfig;
///
/// let config = StoreConfig::default().with_max_dispatch_depth(4);
/// assert_eq!(config.max_dispatch_depth, 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreConfig {
    /// How many times an action may be fed back through `Effect::Dispatch`
    /// before `send` gives up. The action passed to `send` is depth 0.
    pub max_dispatch_depth: usize,
}

impl StoreConfig {
    /// Default dispatch depth limit
    pub const DEFAULT_MAX_DISPATCH_DEPTH: usize = 16;

    /// Create a new configuration with custom values
    #[must_use]
    pub const fn new(max_dispatch_depth: usize) -> Self {
        Self { max_dispatch_depth }
    }

    /// Set the maximum dispatch depth
    #[must_use]
    pub const fn with_max_dispatch_depth(mut self, depth: usize) -> Self {
        self.max_dispatch_depth = depth;
        self
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_DISPATCH_DEPTH)
    }
}

/// Store module - the runtime coordinator for a reducer
pub mod store {
    use super::metrics::{
        ACTIONS_TOTAL, DISPATCH_DEPTH_EXCEEDED, EFFECTS_DISPATCHED, REDUCER_DURATION_SECONDS,
    };
    use super::{Effect, Reducer, SmallVec, StoreConfig, StoreError};
    use std::collections::VecDeque;

    /// Handle returned by [`Store::subscribe`], used to unsubscribe
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct SubscriptionId(u64);

    /// Observer invoked after every reduced action
    type Subscriber<S, A> = Box<dyn FnMut(&A, &S)>;

    /// The Store - runtime coordinator for a reducer
    ///
    /// The Store manages:
    /// 1. State (owned, mutated in place)
    /// 2. Reducer (business logic)
    /// 3. Environment (injected dependencies)
    /// 4. Effect execution (with feedback loop)
    /// 5. Subscribers (notified after each reduced action)
    ///
    /// # Type Parameters
    ///
    /// - `S`: State type
    /// - `A`: Action type
    /// - `E`: Environment type
    /// - `R`: Reducer implementation
    pub struct Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E>,
    {
        state: S,
        reducer: R,
        environment: E,
        config: StoreConfig,
        subscribers: Vec<(SubscriptionId, Subscriber<S, A>)>,
        next_subscription: u64,
    }

    impl<S, A, E, R> Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E>,
        A: Clone,
    {
        /// Create a new store with initial state, reducer, and environment
        ///
        /// Uses [`StoreConfig::default`].
        #[must_use]
        pub fn new(initial_state: S, reducer: R, environment: E) -> Self {
            Self::with_config(initial_state, reducer, environment, StoreConfig::default())
        }

        /// Create a new store with custom configuration
        #[must_use]
        pub const fn with_config(
            initial_state: S,
            reducer: R,
            environment: E,
            config: StoreConfig,
        ) -> Self {
            Self {
                state: initial_state,
                reducer,
                environment,
                config,
                subscribers: Vec::new(),
                next_subscription: 0,
            }
        }

        /// The configuration this store runs with
        #[must_use]
        pub const fn config(&self) -> &StoreConfig {
            &self.config
        }

        /// The injected environment
        #[must_use]
        pub const fn environment(&self) -> &E {
            &self.environment
        }

        /// Send an action to the store
        ///
        /// The action is reduced, subscribers are notified, and the returned
        /// effects are executed. Actions produced by `Effect::Dispatch` are
        /// reduced in order before this method returns, so callers never see a
        /// command whose events have not been applied yet.
        ///
        /// # Errors
        ///
        /// Returns [`StoreError::DispatchDepthExceeded`] if effects keep
        /// dispatching past [`StoreConfig::max_dispatch_depth`].
        #[tracing::instrument(skip_all, name = "store_send")]
        pub fn send(&mut self, action: A) -> Result<(), StoreError> {
            let max_depth = self.config.max_dispatch_depth;
            let mut queue = VecDeque::from([(action, 0_usize)]);

            while let Some((action, depth)) = queue.pop_front() {
                if depth > max_depth {
                    tracing::warn!(
                        depth,
                        max_depth,
                        dropped = queue.len() + 1,
                        "Dispatch chain too deep, dropping remaining actions"
                    );
                    ::metrics::counter!(DISPATCH_DEPTH_EXCEEDED).increment(1);
                    return Err(StoreError::DispatchDepthExceeded { max_depth });
                }

                let effects = self.reduce(action);

                tracing::trace!(depth, "Executing {} effects", effects.len());
                for effect in effects {
                    Self::enqueue(effect, depth + 1, &mut queue);
                }
            }

            tracing::debug!("Action processing completed");
            Ok(())
        }

        /// Run the reducer for one action and notify subscribers
        fn reduce(&mut self, action: A) -> SmallVec<[Effect<A>; 4]> {
            ::metrics::counter!(ACTIONS_TOTAL).increment(1);

            let observed = (!self.subscribers.is_empty()).then(|| action.clone());

            let span = tracing::debug_span!("reducer_execution");
            let _enter = span.enter();

            let start = std::time::Instant::now();
            let effects = self
                .reducer
                .reduce(&mut self.state, action, &self.environment);
            ::metrics::histogram!(REDUCER_DURATION_SECONDS).record(start.elapsed().as_secs_f64());

            if let Some(action) = observed {
                for (_, subscriber) in &mut self.subscribers {
                    subscriber(&action, &self.state);
                }
            }

            effects
        }

        /// Flatten an effect into the dispatch queue, preserving order
        fn enqueue(effect: Effect<A>, depth: usize, queue: &mut VecDeque<(A, usize)>) {
            match effect {
                Effect::None => {
                    tracing::trace!("Executing Effect::None (no-op)");
                },
                Effect::Dispatch(action) => {
                    ::metrics::counter!(EFFECTS_DISPATCHED).increment(1);
                    queue.push_back((*action, depth));
                },
                Effect::Sequential(effects) => {
                    for effect in effects {
                        Self::enqueue(effect, depth, queue);
                    }
                },
            }
        }

        /// Read current state via a closure
        ///
        /// ```ignore
        /// let open = store.state(|s| s.incomplete_items().len());
        /// ```
        pub fn state<F, T>(&self, f: F) -> T
        where
            F: FnOnce(&S) -> T,
        {
            f(&self.state)
        }

        /// Borrow the current state
        #[must_use]
        pub const fn state_ref(&self) -> &S {
            &self.state
        }

        /// Consume the store, returning its state
        #[must_use]
        pub fn into_state(self) -> S {
            self.state
        }

        /// Register an observer called after every reduced action
        ///
        /// Subscribers run in registration order with the action and the state
        /// it produced. They only get shared access, so they cannot mutate the
        /// store while it is reducing.
        pub fn subscribe<F>(&mut self, subscriber: F) -> SubscriptionId
        where
            F: FnMut(&A, &S) + 'static,
        {
            let id = SubscriptionId(self.next_subscription);
            self.next_subscription += 1;
            self.subscribers.push((id, Box::new(subscriber)));
            id
        }

        /// Remove a subscriber
        ///
        /// Returns false if the subscription was already removed.
        pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
            let before = self.subscribers.len();
            self.subscribers.retain(|(existing, _)| *existing != id);
            self.subscribers.len() != before
        }
    }
}

pub use store::{Store, SubscriptionId};
