//! Reducer trait: the pure state-transition function.

use super::action::Action;
use super::state::StoreState;

/// Reducer transforms state based on actions.
///
/// The reducer is the only place where state transitions happen.
/// `reduce` must be free of observable side effects and total over the
/// action set: every action produces a well-defined next state, and
/// inputs that match nothing (an unknown expense id, say) leave the
/// affected field untouched.
///
/// Reducers take `&self` so that injected dependencies (an id
/// generator, for instance) can be swapped for deterministic stubs in
/// tests; given fixed dependencies the function is deterministic.
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: StoreState;

    /// The action type this reducer handles.
    type Action: Action;

    /// Process an action and return the new state.
    ///
    /// Never mutates `state` in place observably: the previous value is
    /// consumed and a new one returned, structurally sharing whatever
    /// the action did not touch.
    fn reduce(&self, state: Self::State, action: Self::Action) -> Self::State;
}
