//! Build errors for the machine builder.

use crate::machine::MachineError;
use thiserror::Error;

/// Errors that can occur when building a machine.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("no states declared. Add at least one state before build()")]
    NoStates,

    /// Duplicate state uids, callbacks or an initial state naming an
    /// undeclared uid.
    #[error(transparent)]
    Machine(#[from] MachineError),
}
