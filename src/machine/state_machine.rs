//! The base state machine: a keyed state collection with Enter/Exit
//! lifecycle firing.

use super::error::MachineError;
use crate::core::{Callback, State, StateEvent, StateId};
use std::collections::HashMap;

/// Owns a collection of [`State`]s keyed by uid, tracks the current and
/// previous state, and implements state switching with Enter/Exit firing.
///
/// The machine is driven by one external caller invoking [`tick`] and
/// [`fixed_tick`] once per discrete time step; it contains no loop and no
/// notion of frame timing. It tolerates being ticked before any state is
/// set.
///
/// [`tick`]: StateMachine::tick
/// [`fixed_tick`]: StateMachine::fixed_tick
///
/// # Example
///
/// ```rust
/// use tickstate::core::{callback, StateEvent};
/// use tickstate::machine::StateMachine;
///
/// let mut machine = StateMachine::from_uids(&[0, 1], 0).unwrap();
/// machine
///     .add_state_callback(1, StateEvent::Enter, callback(|| println!("now walking")))
///     .unwrap();
///
/// machine.change_state(1).unwrap(); // fires 0's Exit, then 1's Enter
/// assert_eq!(machine.current_uid(), Some(1));
/// assert_eq!(machine.previous_uid(), Some(0));
/// ```
#[derive(Debug, Default)]
pub struct StateMachine {
    states: HashMap<StateId, State>,
    current: Option<StateId>,
    previous: Option<StateId>,
}

impl StateMachine {
    /// Create an empty machine with no current state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a machine containing `initial`, immediately entered: its
    /// Enter callbacks fire before this returns. `previous` stays unset.
    pub fn with_initial(initial: State) -> Self {
        let uid = initial.uid();
        let mut machine = Self::new();
        machine.states.insert(uid, initial);
        machine.current = Some(uid);
        log::debug!("entering initial state {uid}");
        if let Some(state) = machine.states.get(&uid) {
            state.run(StateEvent::Enter);
        }
        machine
    }

    /// Create a machine with an empty state per uid, then change into
    /// `initial` (firing only its Enter callbacks).
    ///
    /// Fails with [`MachineError::DuplicateState`] on repeated uids and
    /// [`MachineError::UnknownState`] if `initial` is not among `uids`.
    pub fn from_uids(uids: &[StateId], initial: StateId) -> Result<Self, MachineError> {
        let mut machine = Self::new();
        for &uid in uids {
            machine.add_state_id(uid)?;
        }
        machine.change_state(initial)?;
        Ok(machine)
    }

    /// Register `state` under its uid.
    ///
    /// Fails with [`MachineError::DuplicateState`] if the uid is taken;
    /// overwriting would silently discard the prior state's callbacks.
    pub fn add_state(&mut self, state: State) -> Result<(), MachineError> {
        let uid = state.uid();
        if self.states.contains_key(&uid) {
            return Err(MachineError::DuplicateState(uid));
        }
        self.states.insert(uid, state);
        Ok(())
    }

    /// Register an empty state under `uid`.
    pub fn add_state_id(&mut self, uid: StateId) -> Result<(), MachineError> {
        self.add_state(State::new(uid))
    }

    /// Remove the state registered under `uid`, discarding its callbacks.
    ///
    /// A no-op if the uid is absent. If the removed state was current, the
    /// machine returns to the uninitialized condition without firing Exit:
    /// removal is administrative, not a transition.
    pub fn remove_state(&mut self, uid: StateId) {
        self.states.remove(&uid);
        if self.current == Some(uid) {
            self.current = None;
        }
    }

    /// Switch the machine into the state registered under `uid`.
    ///
    /// - Fails with [`MachineError::UnknownState`] if `uid` is absent.
    /// - With no current state yet, enters `uid` (Enter fires) and leaves
    ///   the previous-state record untouched.
    /// - When `uid` is already current, does nothing.
    /// - Otherwise records the outgoing state as previous, fires its Exit
    ///   callbacks, then fires the incoming state's Enter callbacks. Exit
    ///   always completes before Enter begins.
    pub fn change_state(&mut self, uid: StateId) -> Result<(), MachineError> {
        if !self.states.contains_key(&uid) {
            return Err(MachineError::UnknownState(uid));
        }
        match self.current {
            None => {
                self.current = Some(uid);
                log::debug!("entering initial state {uid}");
                if let Some(state) = self.states.get(&uid) {
                    state.run(StateEvent::Enter);
                }
            }
            Some(current) if current == uid => {}
            Some(current) => {
                log::debug!("state change {current} -> {uid}");
                self.previous = Some(current);
                if let Some(state) = self.states.get(&current) {
                    state.run(StateEvent::Exit);
                }
                self.current = Some(uid);
                if let Some(state) = self.states.get(&uid) {
                    state.run(StateEvent::Enter);
                }
            }
        }
        Ok(())
    }

    /// Change back into the previously recorded state.
    ///
    /// Fails with [`MachineError::NoPreviousState`] if no genuine
    /// transition has happened yet, or [`MachineError::UnknownState`] if
    /// the previous state has since been removed.
    pub fn revert_to_previous(&mut self) -> Result<(), MachineError> {
        let uid = self.previous.ok_or(MachineError::NoPreviousState)?;
        self.change_state(uid)
    }

    /// Fire the current state's Tick callbacks; a no-op when no state is
    /// current.
    pub fn tick(&self) {
        if let Some(state) = self.current.and_then(|uid| self.states.get(&uid)) {
            state.run(StateEvent::Tick);
        }
    }

    /// Fire the current state's FixedTick callbacks; a no-op when no state
    /// is current.
    pub fn fixed_tick(&self) {
        if let Some(state) = self.current.and_then(|uid| self.states.get(&uid)) {
            state.run(StateEvent::FixedTick);
        }
    }

    /// The current state, if any.
    pub fn current_state(&self) -> Option<&State> {
        self.current.and_then(|uid| self.states.get(&uid))
    }

    /// The last distinct state prior to the current one, if it is still
    /// registered.
    pub fn previous_state(&self) -> Option<&State> {
        self.previous.and_then(|uid| self.states.get(&uid))
    }

    /// The current state's uid, if any.
    pub fn current_uid(&self) -> Option<StateId> {
        self.current
    }

    /// The previously recorded state's uid, if any.
    pub fn previous_uid(&self) -> Option<StateId> {
        self.previous
    }

    /// Check whether a state is registered under `uid`.
    pub fn contains(&self, uid: StateId) -> bool {
        self.states.contains_key(&uid)
    }

    /// Number of registered states.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Check whether no states are registered.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Append `callback` to the `event` slot of the state at `uid`.
    ///
    /// Unlike callback removal on an existing slot, a missing state is a
    /// hard [`MachineError::UnknownState`] failure.
    pub fn add_state_callback(
        &mut self,
        uid: StateId,
        event: StateEvent,
        callback: Callback,
    ) -> Result<(), MachineError> {
        self.state_mut(uid)?.add_callback(event, callback);
        Ok(())
    }

    /// Remove the most recent registration of `callback` from the `event`
    /// slot of the state at `uid`.
    pub fn remove_state_callback(
        &mut self,
        uid: StateId,
        event: StateEvent,
        callback: &Callback,
    ) -> Result<(), MachineError> {
        self.state_mut(uid)?.remove_callback(event, callback);
        Ok(())
    }

    /// Replace the `event` slot of the state at `uid` with `callback`.
    pub fn set_state_callback(
        &mut self,
        uid: StateId,
        event: StateEvent,
        callback: Callback,
    ) -> Result<(), MachineError> {
        self.state_mut(uid)?.set_callback(event, callback);
        Ok(())
    }

    fn state_mut(&mut self, uid: StateId) -> Result<&mut State, MachineError> {
        self.states
            .get_mut(&uid)
            .ok_or(MachineError::UnknownState(uid))
    }
}
