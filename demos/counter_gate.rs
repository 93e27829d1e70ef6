//! Threshold gates driven through the host adapter.
//!
//! A `StateDriver` receives a state-change request before its machine
//! exists (the deferred-change slot), then parks the machine in the first
//! state whose counter threshold is reached. With gates at 3 and 5 on the
//! same source state, the counter=3 gate always wins and the counter=5
//! gate never fires: transitions are only evaluated for the current state.
//!
//! Run with: cargo run --example counter_gate

use std::cell::Cell;
use std::rc::Rc;
use tickstate::core::{callback, StateEvent};
use tickstate::driver::StateDriver;
use tickstate::machine::Transition;

const COUNTING: i32 = 1;
const LOW_GATE: i32 = 2;
const HIGH_GATE: i32 = 3;

fn main() {
    env_logger::init();

    let mut driver = StateDriver::new();

    // Requested before init(): queued in the deferred slot, not lost.
    driver.change_state(COUNTING).expect("queued, not forwarded");
    println!("queued change: {:?}", driver.queued_state_change());

    driver.init();
    for uid in [COUNTING, LOW_GATE, HIGH_GATE] {
        driver.add_state_id(uid).expect("uids are unique");
    }

    let counter = Rc::new(Cell::new(0));
    {
        let counter = Rc::clone(&counter);
        driver
            .add_state_callback(COUNTING, StateEvent::Tick, callback(move || {
                counter.set(counter.get() + 1);
            }))
            .expect("state exists");
    }
    driver
        .add_state_callback(LOW_GATE, StateEvent::Enter, callback(|| {
            println!("low gate reached (counter hit 3)");
        }))
        .expect("state exists");
    driver
        .add_state_callback(HIGH_GATE, StateEvent::Enter, callback(|| {
            println!("high gate reached (counter hit 5) -- never happens");
        }))
        .expect("state exists");

    let at_three = Rc::clone(&counter);
    driver
        .add_transition(COUNTING, LOW_GATE, Transition::new(move || at_three.get() >= 3))
        .expect("driver is initialized");
    let at_five = Rc::clone(&counter);
    driver
        .add_transition(COUNTING, HIGH_GATE, Transition::new(move || at_five.get() >= 5))
        .expect("driver is initialized");

    for step in 1..=6 {
        driver.tick().expect("all destinations are registered");
        println!(
            "tick {step}: counter={} state={:?}",
            counter.get(),
            driver.current_uid()
        );
    }
}
