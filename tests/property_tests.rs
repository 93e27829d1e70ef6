//! Property-based tests for the engine.
//!
//! These tests use proptest to verify invariants hold across many
//! randomly generated registration and transition sequences.

use proptest::prelude::*;
use std::cell::Cell;
use std::collections::HashSet;
use std::rc::Rc;
use tickstate::core::{callback, CallbackSlot, StateEvent, StateId};
use tickstate::machine::{MachineError, StateMachine, Transition, TransitionMachine};

#[derive(Clone, Debug)]
enum StateOp {
    Add(StateId),
    Remove(StateId),
}

fn arbitrary_ops() -> impl Strategy<Value = Vec<StateOp>> {
    prop::collection::vec(
        (any::<bool>(), 0..16i32).prop_map(|(add, uid)| {
            if add {
                StateOp::Add(uid)
            } else {
                StateOp::Remove(uid)
            }
        }),
        0..64,
    )
}

proptest! {
    // The state map's key set equals exactly the set of uids added minus
    // those removed, for any interleaving.
    #[test]
    fn key_set_matches_adds_minus_removes(ops in arbitrary_ops()) {
        let mut machine = StateMachine::new();
        let mut model: HashSet<StateId> = HashSet::new();

        for op in ops {
            match op {
                StateOp::Add(uid) => {
                    let result = machine.add_state_id(uid);
                    if model.insert(uid) {
                        prop_assert!(result.is_ok());
                    } else {
                        prop_assert_eq!(result, Err(MachineError::DuplicateState(uid)));
                    }
                }
                StateOp::Remove(uid) => {
                    machine.remove_state(uid);
                    model.remove(&uid);
                }
            }
        }

        prop_assert_eq!(machine.len(), model.len());
        for uid in 0..16 {
            prop_assert_eq!(machine.contains(uid), model.contains(&uid));
        }
    }

    // Each registration fires once, in order, regardless of duplicates.
    #[test]
    fn slot_fires_once_per_registration(registrations in 0..16usize) {
        let hits = Rc::new(Cell::new(0));
        let counter = Rc::clone(&hits);
        let cb = callback(move || counter.set(counter.get() + 1));

        let mut slot = CallbackSlot::new();
        for _ in 0..registrations {
            slot.add(Rc::clone(&cb));
        }
        slot.run();

        prop_assert_eq!(slot.len(), registrations);
        prop_assert_eq!(hits.get(), registrations);
    }

    // Removal drops exactly one occurrence per call until none remain.
    #[test]
    fn remove_drops_exactly_one_occurrence(
        registrations in 1..8usize,
        removals in 0..12usize,
    ) {
        let hits = Rc::new(Cell::new(0));
        let counter = Rc::clone(&hits);
        let cb = callback(move || counter.set(counter.get() + 1));

        let mut slot = CallbackSlot::new();
        for _ in 0..registrations {
            slot.add(Rc::clone(&cb));
        }
        for _ in 0..removals {
            slot.remove(&cb);
        }
        slot.run();

        let expected = registrations.saturating_sub(removals);
        prop_assert_eq!(slot.len(), expected);
        prop_assert_eq!(hits.get(), expected);
    }

    // Changing into the already-current state never fires Enter or Exit.
    #[test]
    fn repeated_change_state_fires_lifecycle_once(
        targets in prop::collection::vec(0..4i32, 1..32)
    ) {
        let uids = [0, 1, 2, 3];
        let mut machine = StateMachine::from_uids(&uids, 0).unwrap();

        let enters: Vec<Rc<Cell<usize>>> =
            uids.iter().map(|_| Rc::new(Cell::new(0))).collect();
        let exits: Vec<Rc<Cell<usize>>> =
            uids.iter().map(|_| Rc::new(Cell::new(0))).collect();
        for &uid in &uids {
            let enter = Rc::clone(&enters[uid as usize]);
            machine
                .add_state_callback(uid, StateEvent::Enter, callback(move || {
                    enter.set(enter.get() + 1);
                }))
                .unwrap();
            let exit = Rc::clone(&exits[uid as usize]);
            machine
                .add_state_callback(uid, StateEvent::Exit, callback(move || {
                    exit.set(exit.get() + 1);
                }))
                .unwrap();
        }

        let mut expected_enters = [0usize; 4];
        let mut expected_exits = [0usize; 4];
        let mut current = 0i32;
        for &target in &targets {
            if target != current {
                expected_exits[current as usize] += 1;
                expected_enters[target as usize] += 1;
                current = target;
            }
            machine.change_state(target).unwrap();
        }

        prop_assert_eq!(machine.current_uid(), Some(current));
        for uid in 0..4usize {
            prop_assert_eq!(enters[uid].get(), expected_enters[uid]);
            prop_assert_eq!(exits[uid].get(), expected_exits[uid]);
        }
    }

    // One tick moves to the first edge (in registration order) whose
    // predicate holds, or nowhere.
    #[test]
    fn first_true_predicate_in_registration_order_wins(
        flags in prop::collection::vec(any::<bool>(), 1..8)
    ) {
        let source = 0i32;
        let mut uids = vec![source];
        uids.extend((1..=flags.len() as i32).collect::<Vec<_>>());
        let mut machine = TransitionMachine::from_uids(&uids, source).unwrap();

        for (i, &flag) in flags.iter().enumerate() {
            let to = i as i32 + 1;
            machine.add_transition(source, to, Transition::new(move || flag));
        }

        machine.tick().unwrap();

        let expected = flags
            .iter()
            .position(|&flag| flag)
            .map(|i| i as i32 + 1)
            .unwrap_or(source);
        prop_assert_eq!(machine.current_uid(), Some(expected));
    }
}
