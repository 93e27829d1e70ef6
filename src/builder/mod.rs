//! Fluent construction of transition machines.
//!
//! The machine types can be assembled call by call; the builder collects
//! the same declarations up front and validates them in one place, so a
//! misdeclared machine fails at `build()` instead of at first tick.

pub mod error;
pub mod macros;

pub use error::BuildError;

use crate::core::{Callback, State, StateEvent, StateId};
use crate::machine::{Transition, TransitionMachine};

/// Builder for a [`TransitionMachine`].
///
/// # Example
///
/// ```rust
/// use tickstate::builder::MachineBuilder;
/// use tickstate::core::{callback, StateEvent};
/// use tickstate::machine::Transition;
///
/// let machine = MachineBuilder::new()
///     .state(0)
///     .state(1)
///     .on(0, StateEvent::Enter, callback(|| println!("idle")))
///     .transition(0, 1, Transition::new(|| false))
///     .initial(0)
///     .build()
///     .unwrap();
///
/// assert_eq!(machine.current_uid(), Some(0));
/// ```
#[derive(Default)]
pub struct MachineBuilder {
    states: Vec<State>,
    callbacks: Vec<(StateId, StateEvent, Callback)>,
    transitions: Vec<(StateId, StateId, Transition)>,
    initial: Option<StateId>,
}

impl MachineBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare an empty state under `uid`.
    pub fn state(mut self, uid: StateId) -> Self {
        self.states.push(State::new(uid));
        self
    }

    /// Declare a pre-populated state.
    pub fn add_state(mut self, state: State) -> Self {
        self.states.push(state);
        self
    }

    /// Attach `callback` to the `event` slot of the state at `uid`.
    pub fn on(mut self, uid: StateId, event: StateEvent, callback: Callback) -> Self {
        self.callbacks.push((uid, event, callback));
        self
    }

    /// Declare the edge `(from, to)` with `transition` as its predicate.
    pub fn transition(mut self, from: StateId, to: StateId, transition: Transition) -> Self {
        self.transitions.push((from, to, transition));
        self
    }

    /// Enter `uid` at `build()`. Optional; without it the machine starts
    /// uninitialized.
    pub fn initial(mut self, uid: StateId) -> Self {
        self.initial = Some(uid);
        self
    }

    /// Assemble the machine.
    ///
    /// Fails with [`BuildError::NoStates`] when nothing was declared, and
    /// surfaces duplicate uids, callbacks on undeclared states, and an
    /// undeclared initial state as [`BuildError::Machine`].
    pub fn build(self) -> Result<TransitionMachine, BuildError> {
        if self.states.is_empty() {
            return Err(BuildError::NoStates);
        }

        let mut machine = TransitionMachine::new();
        for state in self.states {
            machine.add_state(state)?;
        }
        for (uid, event, callback) in self.callbacks {
            machine.add_state_callback(uid, event, callback)?;
        }
        for (from, to, transition) in self.transitions {
            machine.add_transition(from, to, transition);
        }
        if let Some(initial) = self.initial {
            machine.change_state(initial)?;
        }
        Ok(machine)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::callback;
    use crate::machine::MachineError;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn build_requires_states() {
        let result = MachineBuilder::new().build();
        assert!(matches!(result, Err(BuildError::NoStates)));
    }

    #[test]
    fn duplicate_state_fails() {
        let result = MachineBuilder::new().state(1).state(1).build();
        assert!(matches!(
            result,
            Err(BuildError::Machine(MachineError::DuplicateState(1)))
        ));
    }

    #[test]
    fn undeclared_initial_fails() {
        let result = MachineBuilder::new().state(1).initial(2).build();
        assert!(matches!(
            result,
            Err(BuildError::Machine(MachineError::UnknownState(2)))
        ));
    }

    #[test]
    fn callback_on_undeclared_state_fails() {
        let result = MachineBuilder::new()
            .state(1)
            .on(2, StateEvent::Tick, callback(|| {}))
            .build();
        assert!(matches!(
            result,
            Err(BuildError::Machine(MachineError::UnknownState(2)))
        ));
    }

    #[test]
    fn builder_wires_callbacks_transitions_and_initial() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let record = |label: &'static str| {
            let log = Rc::clone(&log);
            callback(move || log.borrow_mut().push(label))
        };

        let mut machine = MachineBuilder::new()
            .state(0)
            .state(1)
            .on(0, StateEvent::Enter, record("0-enter"))
            .on(0, StateEvent::Exit, record("0-exit"))
            .on(1, StateEvent::Enter, record("1-enter"))
            .transition(0, 1, Transition::always())
            .initial(0)
            .build()
            .unwrap();

        assert_eq!(*log.borrow(), vec!["0-enter"]);

        machine.tick().unwrap();
        assert_eq!(*log.borrow(), vec!["0-enter", "0-exit", "1-enter"]);
        assert_eq!(machine.current_uid(), Some(1));
    }

    #[test]
    fn machine_without_initial_starts_uninitialized() {
        let machine = MachineBuilder::new().state(0).build().unwrap();
        assert_eq!(machine.current_uid(), None);
    }
}
