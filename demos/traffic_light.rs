//! Traffic light, cycling on a per-state timer.
//!
//! Each phase resets a shared timer on Enter and advances it on Tick; the
//! outgoing transition fires once the phase has lasted long enough. Shows
//! callbacks and transitions sharing captured state through `Rc<Cell<_>>`.
//!
//! Run with: cargo run --example traffic_light

use std::cell::Cell;
use std::rc::Rc;
use tickstate::builder::MachineBuilder;
use tickstate::core::{callback, StateEvent};
use tickstate::machine::Transition;
use tickstate::state_ids;

state_ids! {
    enum Light {
        Red = 0,
        Green = 1,
        Yellow = 2,
    }
}

fn main() {
    env_logger::init();

    let timer = Rc::new(Cell::new(0u32));

    let reset = |label: &'static str| {
        let timer = Rc::clone(&timer);
        callback(move || {
            timer.set(0);
            println!("-> {label}");
        })
    };
    let advance = || {
        let timer = Rc::clone(&timer);
        callback(move || timer.set(timer.get() + 1))
    };
    let elapsed = |ticks: u32| {
        let timer = Rc::clone(&timer);
        Transition::new(move || timer.get() >= ticks)
    };

    let mut machine = MachineBuilder::new()
        .state(Light::Red.id())
        .state(Light::Green.id())
        .state(Light::Yellow.id())
        .on(Light::Red.id(), StateEvent::Enter, reset("Red: stop"))
        .on(Light::Green.id(), StateEvent::Enter, reset("Green: go"))
        .on(Light::Yellow.id(), StateEvent::Enter, reset("Yellow: caution"))
        .on(Light::Red.id(), StateEvent::Tick, advance())
        .on(Light::Green.id(), StateEvent::Tick, advance())
        .on(Light::Yellow.id(), StateEvent::Tick, advance())
        .transition(Light::Red.id(), Light::Green.id(), elapsed(4))
        .transition(Light::Green.id(), Light::Yellow.id(), elapsed(3))
        .transition(Light::Yellow.id(), Light::Red.id(), elapsed(1))
        .initial(Light::Red.id())
        .build()
        .expect("light machine is well-formed");

    for step in 1..=16 {
        machine.tick().expect("all destinations are registered");
        println!(
            "tick {step:>2}: phase uid {}",
            machine.current_uid().expect("a phase is always current")
        );
    }
}
