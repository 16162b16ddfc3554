//! Metric names and descriptions recorded by the [`Store`](crate::Store).
//!
//! Recording goes through the `metrics` facade. Nothing is exported unless
//! the embedding application installs a recorder; call
//! [`describe_store_metrics`] once after installing it.

use metrics::{describe_counter, describe_histogram, Unit};

/// Actions reduced by any store, including dispatched ones
pub const ACTIONS_TOTAL: &str = "store.actions.total";

/// Actions fed back into a store through `Effect::Dispatch`
pub const EFFECTS_DISPATCHED: &str = "store.effects.dispatched";

/// Sends aborted because a dispatch chain grew too deep
pub const DISPATCH_DEPTH_EXCEEDED: &str = "store.dispatch.depth_exceeded";

/// Time spent inside `Reducer::reduce`
pub const REDUCER_DURATION_SECONDS: &str = "store.reducer.duration_seconds";

/// Register descriptions for every store metric with the installed recorder.
pub fn describe_store_metrics() {
    describe_counter!(ACTIONS_TOTAL, "Actions reduced, including dispatched ones");
    describe_counter!(
        EFFECTS_DISPATCHED,
        "Actions fed back into the reducer by effects"
    );
    describe_counter!(
        DISPATCH_DEPTH_EXCEEDED,
        "Sends aborted because a dispatch chain exceeded the configured depth"
    );
    describe_histogram!(
        REDUCER_DURATION_SECONDS,
        Unit::Seconds,
        "Time spent inside the reducer per action"
    );
}
