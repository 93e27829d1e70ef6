//! State machines and automatic transitions.
//!
//! [`StateMachine`] owns the keyed state collection and implements state
//! switching with Enter/Exit firing. [`TransitionMachine`] layers a
//! directed, predicate-labeled adjacency structure on top and checks it
//! once per regular tick, after the state's own Tick callbacks.

mod error;
mod state_machine;
mod transition;

pub use error::MachineError;
pub use state_machine::StateMachine;
pub use transition::{Transition, TransitionMachine};
