//! Core building blocks of the engine.
//!
//! This module contains the leaf types everything else is assembled from:
//! - Lifecycle event kinds via [`StateEvent`]
//! - Composable callback sets via [`CallbackSlot`]
//! - States owning one slot per event via [`State`]
//!
//! Nothing here knows about machines or transitions; a [`State`] is a
//! passive bundle of callbacks until a machine drives it.

mod callback;
mod event;
mod state;

pub use callback::{callback, Callback, CallbackSlot};
pub use event::StateEvent;
pub use state::{State, StateId, UNASSIGNED};
