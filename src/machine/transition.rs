//! Automatic transitions: predicate-labeled edges checked every tick.

use super::error::MachineError;
use super::state_machine::StateMachine;
use crate::core::{Callback, State, StateEvent, StateId};
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

/// A transition predicate: a zero-argument boolean check attached to a
/// directed edge.
///
/// Predicates capture whatever context they need (counters, flags, input
/// snapshots) and are expected to be observation-only; the engine never
/// catches a panic raised inside one.
///
/// # Example
///
/// ```rust
/// use tickstate::machine::Transition;
/// use std::cell::Cell;
/// use std::rc::Rc;
///
/// let health = Rc::new(Cell::new(10));
/// let watched = Rc::clone(&health);
/// let low_health = Transition::new(move || watched.get() < 3);
///
/// assert!(!low_health.check());
/// health.set(2);
/// assert!(low_health.check());
/// ```
pub struct Transition {
    check: Rc<dyn Fn() -> bool>,
}

impl Transition {
    /// Wrap a predicate closure.
    pub fn new<F>(check: F) -> Self
    where
        F: Fn() -> bool + 'static,
    {
        Self {
            check: Rc::new(check),
        }
    }

    /// A transition that always fires.
    pub fn always() -> Self {
        Self::new(|| true)
    }

    /// Evaluate the predicate.
    pub fn check(&self) -> bool {
        (self.check)()
    }
}

impl Clone for Transition {
    fn clone(&self) -> Self {
        Self {
            check: Rc::clone(&self.check),
        }
    }
}

impl fmt::Debug for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transition").finish_non_exhaustive()
    }
}

#[derive(Debug)]
struct TransitionEdge {
    to: StateId,
    transition: Transition,
}

/// A [`StateMachine`] extended with a directed, predicate-labeled
/// adjacency structure and an automatic transition check each tick.
///
/// [`tick`](TransitionMachine::tick) first runs the current state's own
/// Tick callbacks, then evaluates the outgoing edges of the current state
/// in insertion order; the first predicate that returns true triggers the
/// state change and ends the scan, so at most one automatic transition
/// fires per tick. [`fixed_tick`](TransitionMachine::fixed_tick) never
/// evaluates transitions.
///
/// Edges may name uids that are not (yet) registered; such an edge only
/// fails if its predicate fires while the destination is still missing.
///
/// # Example
///
/// ```rust
/// use tickstate::machine::{Transition, TransitionMachine};
/// use std::cell::Cell;
/// use std::rc::Rc;
///
/// let mut machine = TransitionMachine::from_uids(&[0, 1], 0).unwrap();
///
/// let ready = Rc::new(Cell::new(false));
/// let watched = Rc::clone(&ready);
/// machine.add_transition(0, 1, Transition::new(move || watched.get()));
///
/// machine.tick().unwrap();
/// assert_eq!(machine.current_uid(), Some(0));
///
/// ready.set(true);
/// machine.tick().unwrap();
/// assert_eq!(machine.current_uid(), Some(1));
/// ```
#[derive(Debug, Default)]
pub struct TransitionMachine {
    machine: StateMachine,
    transitions: HashMap<StateId, Vec<TransitionEdge>>,
}

impl TransitionMachine {
    /// Create an empty machine with no states and no transitions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a machine containing `initial`, immediately entered.
    pub fn with_initial(initial: State) -> Self {
        Self {
            machine: StateMachine::with_initial(initial),
            transitions: HashMap::new(),
        }
    }

    /// Create a machine with an empty state per uid, changed into
    /// `initial`.
    pub fn from_uids(uids: &[StateId], initial: StateId) -> Result<Self, MachineError> {
        Ok(Self {
            machine: StateMachine::from_uids(uids, initial)?,
            transitions: HashMap::new(),
        })
    }

    /// Insert or overwrite the predicate for the edge `(from, to)`.
    ///
    /// Overwriting keeps the edge's position in the check order; only its
    /// predicate is replaced.
    pub fn add_transition(&mut self, from: StateId, to: StateId, transition: Transition) {
        let edges = self.transitions.entry(from).or_default();
        if let Some(edge) = edges.iter_mut().find(|edge| edge.to == to) {
            edge.transition = transition;
        } else {
            edges.push(TransitionEdge { to, transition });
        }
    }

    /// Remove the edge `(from, to)` if present; a no-op otherwise.
    pub fn remove_transition(&mut self, from: StateId, to: StateId) {
        if let Some(edges) = self.transitions.get_mut(&from) {
            edges.retain(|edge| edge.to != to);
        }
    }

    /// Check whether an edge `(from, to)` is registered.
    pub fn has_transition(&self, from: StateId, to: StateId) -> bool {
        self.transitions
            .get(&from)
            .is_some_and(|edges| edges.iter().any(|edge| edge.to == to))
    }

    /// Run the current state's Tick callbacks, then check transitions.
    ///
    /// The order lets a predicate react to side effects the Tick callbacks
    /// just produced. Fails only when a fired edge names a missing
    /// destination ([`MachineError::UnknownState`]); a panicking callback
    /// aborts the tick before any transition check happens.
    pub fn tick(&mut self) -> Result<(), MachineError> {
        self.machine.tick();
        self.check_transitions()
    }

    /// Run the current state's FixedTick callbacks. Transitions are only
    /// evaluated on the regular tick cadence.
    pub fn fixed_tick(&self) {
        self.machine.fixed_tick();
    }

    /// Evaluate the current state's outgoing edges in insertion order and
    /// change state on the first predicate that holds.
    ///
    /// With no current state, or no edges registered for it, this is a
    /// no-op. If no predicate holds, the current state is unchanged and no
    /// Enter/Exit callback fires.
    pub fn check_transitions(&mut self) -> Result<(), MachineError> {
        let Some(current) = self.machine.current_uid() else {
            return Ok(());
        };
        let Some(edges) = self.transitions.get(&current) else {
            return Ok(());
        };
        let fired = edges
            .iter()
            .find(|edge| edge.transition.check())
            .map(|edge| edge.to);
        if let Some(to) = fired {
            log::trace!("transition {current} -> {to} fired");
            self.machine.change_state(to)?;
        }
        Ok(())
    }

    // State management surface, delegated to the inner machine.

    /// See [`StateMachine::add_state`].
    pub fn add_state(&mut self, state: State) -> Result<(), MachineError> {
        self.machine.add_state(state)
    }

    /// See [`StateMachine::add_state_id`].
    pub fn add_state_id(&mut self, uid: StateId) -> Result<(), MachineError> {
        self.machine.add_state_id(uid)
    }

    /// See [`StateMachine::remove_state`]. Transitions naming the removed
    /// uid are not cleaned up; they become dangling edges.
    pub fn remove_state(&mut self, uid: StateId) {
        self.machine.remove_state(uid);
    }

    /// See [`StateMachine::change_state`].
    pub fn change_state(&mut self, uid: StateId) -> Result<(), MachineError> {
        self.machine.change_state(uid)
    }

    /// See [`StateMachine::revert_to_previous`].
    pub fn revert_to_previous(&mut self) -> Result<(), MachineError> {
        self.machine.revert_to_previous()
    }

    /// See [`StateMachine::current_state`].
    pub fn current_state(&self) -> Option<&State> {
        self.machine.current_state()
    }

    /// See [`StateMachine::previous_state`].
    pub fn previous_state(&self) -> Option<&State> {
        self.machine.previous_state()
    }

    /// See [`StateMachine::current_uid`].
    pub fn current_uid(&self) -> Option<StateId> {
        self.machine.current_uid()
    }

    /// See [`StateMachine::previous_uid`].
    pub fn previous_uid(&self) -> Option<StateId> {
        self.machine.previous_uid()
    }

    /// See [`StateMachine::contains`].
    pub fn contains(&self, uid: StateId) -> bool {
        self.machine.contains(uid)
    }

    /// See [`StateMachine::len`].
    pub fn len(&self) -> usize {
        self.machine.len()
    }

    /// See [`StateMachine::is_empty`].
    pub fn is_empty(&self) -> bool {
        self.machine.is_empty()
    }

    /// See [`StateMachine::add_state_callback`].
    pub fn add_state_callback(
        &mut self,
        uid: StateId,
        event: StateEvent,
        callback: Callback,
    ) -> Result<(), MachineError> {
        self.machine.add_state_callback(uid, event, callback)
    }

    /// See [`StateMachine::remove_state_callback`].
    pub fn remove_state_callback(
        &mut self,
        uid: StateId,
        event: StateEvent,
        callback: &Callback,
    ) -> Result<(), MachineError> {
        self.machine.remove_state_callback(uid, event, callback)
    }

    /// See [`StateMachine::set_state_callback`].
    pub fn set_state_callback(
        &mut self,
        uid: StateId,
        event: StateEvent,
        callback: Callback,
    ) -> Result<(), MachineError> {
        self.machine.set_state_callback(uid, event, callback)
    }
}


#[cfg(test)]
mod integration_tests {
    use super::*;
    use std::cell::Cell;

    // States {1, 2, 3}; 1 -> 2 once the counter reaches 3, 1 -> 3 once it
    // reaches 5. The machine settles in 2 and never reaches 3, because
    // transitions are only evaluated for the current state.
    #[test]
    fn counter_thresholds_settle_in_first_matching_state() {
        let counter = Rc::new(Cell::new(0));
        let mut machine = TransitionMachine::from_uids(&[1, 2, 3], 1).unwrap();

        let at_three = Rc::clone(&counter);
        machine.add_transition(1, 2, Transition::new(move || at_three.get() >= 3));
        let at_five = Rc::clone(&counter);
        machine.add_transition(1, 3, Transition::new(move || at_five.get() >= 5));

        for step in 1..=6 {
            counter.set(step);
            machine.tick().unwrap();
            let expected = if step < 3 { 1 } else { 2 };
            assert_eq!(machine.current_uid(), Some(expected), "at step {step}");
        }
    }
}
