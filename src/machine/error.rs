//! Machine error types.

use crate::core::StateId;
use thiserror::Error;

/// Errors surfaced by state machine operations.
///
/// Redundant removals (a transition, callback, or state that is already
/// gone) are benign no-ops and never produce an error; only invalid
/// references and duplicate registrations fail.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MachineError {
    /// The referenced uid is not in the state map. Add the state first.
    #[error("no state with uid {0} exists")]
    UnknownState(StateId),

    /// `add_state` would silently discard the callbacks of an already
    /// registered state with the same uid.
    #[error("a state with uid {0} is already registered")]
    DuplicateState(StateId),

    /// `revert_to_previous` called before any genuine transition occurred.
    #[error("no previous state has been recorded yet")]
    NoPreviousState,
}
