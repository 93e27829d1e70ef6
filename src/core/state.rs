//! States: identified nodes owning one callback slot per lifecycle event.

use super::callback::{Callback, CallbackSlot};
use super::event::StateEvent;

/// Caller-chosen integer identifier for a state.
///
/// Callers typically define an enum for their states and convert it to a
/// `StateId` (see the [`state_ids!`](crate::state_ids) macro). Identifiers
/// must be unique within one machine; [`UNASSIGNED`] is reserved.
pub type StateId = i32;

/// Reserved identifier meaning "no state assigned".
pub const UNASSIGNED: StateId = -1;

/// A node the machine can be "in", owning one [`CallbackSlot`] per
/// lifecycle event.
///
/// States are constructed standalone and then registered into exactly one
/// machine. The identifier is immutable after construction.
///
/// # Example
///
/// ```rust
/// use tickstate::core::{callback, State, StateEvent};
///
/// let mut idle = State::new(0);
/// idle.add_callback(StateEvent::Enter, callback(|| println!("entering idle")));
///
/// idle.run(StateEvent::Enter);
/// idle.run(StateEvent::Tick); // empty slot, safe no-op
/// ```
#[derive(Debug)]
pub struct State {
    uid: StateId,
    enter: CallbackSlot,
    exit: CallbackSlot,
    tick: CallbackSlot,
    fixed_tick: CallbackSlot,
}

impl State {
    /// Create a state with the given identifier and empty callback slots.
    pub fn new(uid: StateId) -> Self {
        Self {
            uid,
            enter: CallbackSlot::new(),
            exit: CallbackSlot::new(),
            tick: CallbackSlot::new(),
            fixed_tick: CallbackSlot::new(),
        }
    }

    /// The state's identifier.
    pub fn uid(&self) -> StateId {
        self.uid
    }

    /// Borrow the slot for `event`.
    pub fn slot(&self, event: StateEvent) -> &CallbackSlot {
        match event {
            StateEvent::Enter => &self.enter,
            StateEvent::Exit => &self.exit,
            StateEvent::Tick => &self.tick,
            StateEvent::FixedTick => &self.fixed_tick,
        }
    }

    /// Mutably borrow the slot for `event`.
    pub fn slot_mut(&mut self, event: StateEvent) -> &mut CallbackSlot {
        match event {
            StateEvent::Enter => &mut self.enter,
            StateEvent::Exit => &mut self.exit,
            StateEvent::Tick => &mut self.tick,
            StateEvent::FixedTick => &mut self.fixed_tick,
        }
    }

    /// Invoke every callback registered for `event`, in registration order.
    pub fn run(&self, event: StateEvent) {
        self.slot(event).run();
    }

    /// Append `callback` to the slot for `event`.
    pub fn add_callback(&mut self, event: StateEvent, callback: Callback) {
        self.slot_mut(event).add(callback);
    }

    /// Remove the most recent registration of `callback` from the slot for
    /// `event`; a no-op if it is not registered.
    pub fn remove_callback(&mut self, event: StateEvent, callback: &Callback) {
        self.slot_mut(event).remove(callback);
    }

    /// Replace all registrations in the slot for `event` with `callback`.
    pub fn set_callback(&mut self, event: StateEvent, callback: Callback) {
        self.slot_mut(event).set(callback);
    }

    /// Empty the slot for `event`.
    pub fn clear_callbacks(&mut self, event: StateEvent) {
        self.slot_mut(event).clear();
    }

    /// Number of callbacks registered for `event`, counting duplicates.
    pub fn callback_count(&self, event: StateEvent) -> usize {
        self.slot(event).len()
    }
}

impl Default for State {
    /// An unassigned state (`uid == UNASSIGNED`) with empty slots.
    fn default() -> Self {
        Self::new(UNASSIGNED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::callback;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn new_state_has_empty_slots() {
        let state = State::new(7);
        assert_eq!(state.uid(), 7);
        for event in StateEvent::ALL {
            assert_eq!(state.callback_count(event), 0);
        }
    }

    #[test]
    fn default_state_is_unassigned() {
        let state = State::default();
        assert_eq!(state.uid(), UNASSIGNED);
    }

    #[test]
    fn callbacks_route_to_their_event_slot() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut state = State::new(0);

        for event in StateEvent::ALL {
            let log = Rc::clone(&log);
            state.add_callback(event, callback(move || log.borrow_mut().push(event.name())));
        }

        state.run(StateEvent::FixedTick);
        state.run(StateEvent::Enter);

        assert_eq!(*log.borrow(), vec!["FixedTick", "Enter"]);
    }

    #[test]
    fn run_on_empty_slot_is_noop() {
        let state = State::new(0);
        state.run(StateEvent::Tick);
    }

    #[test]
    fn remove_and_set_delegate_to_slot() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let make = |label: &'static str| {
            let log = Rc::clone(&log);
            callback(move || log.borrow_mut().push(label))
        };

        let mut state = State::new(0);
        let removable = make("removable");
        state.add_callback(StateEvent::Tick, Rc::clone(&removable));
        state.add_callback(StateEvent::Tick, make("kept"));
        state.remove_callback(StateEvent::Tick, &removable);
        state.run(StateEvent::Tick);
        assert_eq!(*log.borrow(), vec!["kept"]);

        log.borrow_mut().clear();
        state.set_callback(StateEvent::Tick, make("only"));
        state.run(StateEvent::Tick);
        assert_eq!(*log.borrow(), vec!["only"]);
    }
}
