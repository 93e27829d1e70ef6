//! Composable callback slots for lifecycle events.
//!
//! A [`CallbackSlot`] is the Rust rendering of a multicast delegate: an
//! ordered list of zero-argument callbacks that can be added, removed,
//! replaced, and invoked as a unit.

use std::fmt;
use std::rc::Rc;

/// Shared handle to a zero-argument callback.
///
/// The engine is single-threaded, so callbacks are `Rc`-shared rather than
/// `Arc`-shared. Cloning the handle lets the same callback be registered
/// in several slots, or registered and later removed again. Callbacks that
/// need to mutate outside state capture `Rc<Cell<_>>` or `Rc<RefCell<_>>`
/// handles of their own.
pub type Callback = Rc<dyn Fn()>;

/// Wrap a closure into a [`Callback`] handle.
///
/// # Example
///
/// ```rust
/// use tickstate::core::{callback, CallbackSlot};
/// use std::cell::Cell;
/// use std::rc::Rc;
///
/// let hits = Rc::new(Cell::new(0));
/// let counter = Rc::clone(&hits);
///
/// let mut slot = CallbackSlot::new();
/// slot.add(callback(move || counter.set(counter.get() + 1)));
/// slot.run();
///
/// assert_eq!(hits.get(), 1);
/// ```
pub fn callback<F>(f: F) -> Callback
where
    F: Fn() + 'static,
{
    Rc::new(f)
}

/// Ordered, composable set of callbacks for one lifecycle event.
///
/// Invoking an empty slot is a safe no-op. The same handle may be
/// registered more than once; each registration fires independently.
/// Panics raised by an invoked callback are not caught.
pub struct CallbackSlot {
    callbacks: Vec<Callback>,
}

impl CallbackSlot {
    /// Create an empty slot.
    pub fn new() -> Self {
        Self {
            callbacks: Vec::new(),
        }
    }

    /// Invoke every registered callback, in registration order.
    ///
    /// Does nothing when no callbacks are registered.
    pub fn run(&self) {
        for cb in &self.callbacks {
            cb();
        }
    }

    /// Append `callback` to the registration order.
    ///
    /// Duplicate handles are allowed and fire once per registration.
    pub fn add(&mut self, callback: Callback) {
        self.callbacks.push(callback);
    }

    /// Remove the most recent registration of `callback`, matched by
    /// handle identity.
    ///
    /// Removing a callback that is not registered is a no-op. Matching the
    /// most recent occurrence mirrors delegate subtraction, which unhooks
    /// the last matching entry of a multicast chain.
    pub fn remove(&mut self, callback: &Callback) {
        if let Some(index) = self.callbacks.iter().rposition(|cb| Rc::ptr_eq(cb, callback)) {
            self.callbacks.remove(index);
        }
    }

    /// Discard all registrations and install `callback` as the sole entry.
    pub fn set(&mut self, callback: Callback) {
        self.callbacks.clear();
        self.callbacks.push(callback);
    }

    /// Discard all registrations, leaving the slot empty.
    pub fn clear(&mut self) {
        self.callbacks.clear();
    }

    /// Number of registered callbacks, counting duplicates.
    pub fn len(&self) -> usize {
        self.callbacks.len()
    }

    /// Check whether the slot has no registrations.
    pub fn is_empty(&self) -> bool {
        self.callbacks.is_empty()
    }
}

impl Default for CallbackSlot {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for CallbackSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CallbackSlot")
            .field("callbacks", &self.callbacks.len())
            .finish()
    }
}
