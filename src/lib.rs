//! Tickstate: a tick-driven finite state machine engine.
//!
//! Each state owns a set of composable lifecycle callbacks (Enter, Exit,
//! Tick, FixedTick); transitions between states are boolean predicates on
//! directed edges, evaluated automatically once per regular tick with
//! first-match-wins semantics. The engine contains no loop and no notion
//! of frame timing: a single external driver calls
//! [`tick`](machine::TransitionMachine::tick) and
//! [`fixed_tick`](machine::TransitionMachine::fixed_tick) once per
//! discrete step.
//!
//! # Core Concepts
//!
//! - **[`State`]**: a node identified by an integer uid, owning one
//!   callback slot per lifecycle event
//! - **[`CallbackSlot`]**: an ordered, composable callback set with
//!   add/remove/replace/run-all operations
//! - **[`TransitionMachine`]**: a [`StateMachine`] plus a directed,
//!   predicate-labeled transition graph
//! - **[`StateDriver`]**: the host-object adapter, with a deferred
//!   state-change slot for requests made before the machine exists
//!
//! # Example
//!
//! ```rust
//! use tickstate::core::{callback, StateEvent};
//! use tickstate::machine::{Transition, TransitionMachine};
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! const IDLE: i32 = 0;
//! const WALK: i32 = 1;
//!
//! let mut machine = TransitionMachine::from_uids(&[IDLE, WALK], IDLE).unwrap();
//!
//! // Count ticks spent idling.
//! let steps = Rc::new(Cell::new(0));
//! let counter = Rc::clone(&steps);
//! machine
//!     .add_state_callback(IDLE, StateEvent::Tick, callback(move || {
//!         counter.set(counter.get() + 1);
//!     }))
//!     .unwrap();
//!
//! // Start walking after three idle ticks.
//! let watched = Rc::clone(&steps);
//! machine.add_transition(IDLE, WALK, Transition::new(move || watched.get() >= 3));
//!
//! for _ in 0..3 {
//!     machine.tick().unwrap();
//! }
//! assert_eq!(machine.current_uid(), Some(WALK));
//! ```

pub mod builder;
pub mod core;
pub mod driver;
pub mod machine;

// Re-export commonly used types
pub use crate::builder::{BuildError, MachineBuilder};
pub use crate::core::{callback, Callback, CallbackSlot, State, StateEvent, StateId, UNASSIGNED};
pub use crate::driver::{DriverError, StateDriver};
pub use crate::machine::{MachineError, StateMachine, Transition, TransitionMachine};
