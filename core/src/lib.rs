//! # Todo List Core
//!
//! Core traits and types for the todo list.
//!
//! The todo list is modelled as a reducer over owned state:
//!
//! - **State**: the lists and the pending input text
//! - **Action**: everything the view layer can ask for, plus the events that
//!   record what actually happened
//! - **Reducer**: `(State, Action, Environment) → (State, Effects)`
//! - **Effect**: descriptions of follow-up work, executed by the runtime
//! - **Environment**: injected dependencies (the clock)
//!
//! ## Example
//!
//! ```
//! use todo_list_core::{effect::Effect, reducer::Reducer, smallvec, SmallVec};
//!
//! #[derive(Clone, Debug, Default)]
//! struct Tally {
//!     count: u32,
//! }
//!
//! #[derive(Clone, Debug)]
//! enum TallyAction {
//!     Bump,
//!     Bumped,
//! }
//!
//! struct TallyReducer;
//!
//! impl Reducer for TallyReducer {
//!     type State = Tally;
//!     type Action = TallyAction;
//!     type Environment = ();
//!
//!     fn reduce(
//!         &self,
//!         state: &mut Tally,
//!         action: TallyAction,
//!         _env: &(),
//!     ) -> SmallVec<[Effect<TallyAction>; 4]> {
//!         match action {
//!             TallyAction::Bump => smallvec![Effect::dispatch(TallyAction::Bumped)],
//!             TallyAction::Bumped => {
//!                 state.count += 1;
//!                 SmallVec::new()
//!             },
//!         }
//!     }
//! }
//!
//! let mut state = Tally::default();
//! let effects = TallyReducer.reduce(&mut state, TallyAction::Bump, &());
//! assert_eq!(effects.len(), 1);
//! assert_eq!(state.count, 0);
//! ```

// Re-export commonly used types
pub use chrono::{DateTime, Utc};
pub use serde::{Deserialize, Serialize};
pub use smallvec::{smallvec, SmallVec};

/// Reducer module - the core trait for business logic
///
/// Reducers are pure functions: `(State, Action, Environment) → (State, Effects)`.
/// They hold every rule about how state may change and are deterministic.
pub mod reducer {
    use super::effect::Effect;
    use smallvec::SmallVec;

    /// The Reducer trait - core abstraction for business logic
    ///
    /// # Type Parameters
    ///
    /// - `State`: The domain state this reducer operates on
    /// - `Action`: The action type this reducer processes
    /// - `Environment`: The injected dependencies this reducer needs
    pub trait Reducer {
        /// The state type this reducer operates on
        type State;

        /// The action type this reducer processes
        type Action;

        /// The environment type with injected dependencies
        type Environment;

        /// Reduce an action into state changes and effects
        ///
        /// This is a pure function that:
        /// 1. Validates the action against current state
        /// 2. Updates state in place
        /// 3. Returns effect descriptions to be executed
        ///
        /// # Returns
        ///
        /// Effects to be executed by the runtime. Most actions produce at most
        /// one, hence the inline capacity of four.
        fn reduce(
            &self,
            state: &mut Self::State,
            action: Self::Action,
            env: &Self::Environment,
        ) -> SmallVec<[Effect<Self::Action>; 4]>;
    }
}

/// Effect module - side effect descriptions
///
/// Effects are values, not execution. The runtime decides when and how to
/// run them.
pub mod effect {
    /// Effect type - describes follow-up work for the runtime
    ///
    /// # Type Parameters
    ///
    /// - `Action`: The action type that effects can produce (feedback loop)
    #[derive(Clone, Debug, PartialEq, Eq)]
    pub enum Effect<Action> {
        /// No-op effect
        None,

        /// Feed an action back into the reducer before `send` returns
        Dispatch(Box<Action>),

        /// Run effects in order
        Sequential(Vec<Effect<Action>>),
    }

    impl<Action> Effect<Action> {
        /// Describe dispatching `action` back into the reducer
        #[must_use]
        pub fn dispatch(action: Action) -> Self {
            Self::Dispatch(Box::new(action))
        }

        /// Chain effects to run sequentially
        #[must_use]
        pub const fn chain(effects: Vec<Self>) -> Self {
            Self::Sequential(effects)
        }

        /// Returns true if running this effect does nothing
        #[must_use]
        pub fn is_none(&self) -> bool {
            match self {
                Self::None => true,
                Self::Dispatch(_) => false,
                Self::Sequential(effects) => effects.iter().all(Self::is_none),
            }
        }

        /// Returns the actions this effect dispatches, in execution order
        #[must_use]
        pub fn dispatched(&self) -> Vec<&Action> {
            match self {
                Self::None => Vec::new(),
                Self::Dispatch(action) => vec![action.as_ref()],
                Self::Sequential(effects) => effects.iter().flat_map(Self::dispatched).collect(),
            }
        }
    }
}

/// Environment module - dependency injection traits
///
/// All external dependencies are abstracted behind traits and injected via
/// the Environment parameter.
pub mod environment {
    use chrono::{DateTime, Utc};

    /// Clock trait - abstracts time operations for testability
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::{DateTime, Utc};
    /// use todo_list_core::environment::Clock;
    ///
    /// // Test - fixed time for deterministic tests
    /// struct FrozenClock {
    ///     time: DateTime<Utc>,
    /// }
    ///
    /// impl Clock for FrozenClock {
    ///     fn now(&self) -> DateTime<Utc> {
    ///         self.time
    ///     }
    /// }
    /// ```
    pub trait Clock: Send + Sync {
        /// Get the current time
        fn now(&self) -> DateTime<Utc>;
    }

    /// Production clock backed by the system time
    #[derive(Debug, Clone, Copy, Default)]
    pub struct SystemClock;

    impl Clock for SystemClock {
        fn now(&self) -> DateTime<Utc> {
            Utc::now()
        }
    }
}
