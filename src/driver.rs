//! Host adapter binding a machine to a per-frame driver.
//!
//! A host object embeds a [`StateDriver`] and forwards its own per-frame
//! callbacks into it, once per discrete step and in program order:
//! [`tick`](StateDriver::tick) on the regular cadence,
//! [`fixed_tick`](StateDriver::fixed_tick) on the fixed cadence. The
//! driver applies any pending deferred state change before delegating.

use crate::core::{Callback, State, StateEvent, StateId};
use crate::machine::{MachineError, Transition, TransitionMachine};
use thiserror::Error;

/// Errors surfaced by the driver boundary.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DriverError {
    /// A configuration call arrived before the machine was installed.
    #[error("state machine not initialized; call init() or with_machine() first")]
    NotInitialized,

    /// The underlying machine rejected the operation.
    #[error(transparent)]
    Machine(#[from] MachineError),
}

/// Drives a [`TransitionMachine`] from a host object's frame loop, with a
/// single deferred state-change slot.
///
/// The machine may not exist yet when behavior code first asks for a state
/// change (setup order between host objects is not guaranteed).
/// [`change_state`](StateDriver::change_state) therefore queues the
/// request when called before [`init`](StateDriver::init); only the most
/// recent request is kept, and it is applied at the start of the next tick.
///
/// # Example
///
/// ```rust
/// use tickstate::driver::StateDriver;
///
/// let mut driver = StateDriver::new();
///
/// // Requested before the machine exists: queued, not lost.
/// driver.change_state(5).unwrap();
/// assert_eq!(driver.queued_state_change(), Some(5));
///
/// driver.init();
/// driver.add_state_id(5).unwrap();
///
/// driver.tick().unwrap(); // applies the pending request first
/// assert_eq!(driver.current_uid(), Some(5));
/// assert_eq!(driver.queued_state_change(), None);
/// ```
#[derive(Debug, Default)]
pub struct StateDriver {
    machine: Option<TransitionMachine>,
    pending: Option<StateId>,
}

impl StateDriver {
    /// Create a driver with no machine and nothing pending.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a driver around a pre-built machine.
    pub fn with_machine(machine: TransitionMachine) -> Self {
        Self {
            machine: Some(machine),
            pending: None,
        }
    }

    /// Install an empty [`TransitionMachine`], to be configured through
    /// the driver's delegation surface.
    pub fn init(&mut self) {
        self.machine = Some(TransitionMachine::new());
    }

    /// Check whether a machine has been installed.
    pub fn is_initialized(&self) -> bool {
        self.machine.is_some()
    }

    /// Borrow the machine for inspection, if installed.
    pub fn machine(&self) -> Option<&TransitionMachine> {
        self.machine.as_ref()
    }

    /// Request a state change.
    ///
    /// Forwards immediately when the machine exists; otherwise records
    /// `uid` as the single pending request, overwriting any earlier one.
    pub fn change_state(&mut self, uid: StateId) -> Result<(), DriverError> {
        match self.machine.as_mut() {
            Some(machine) => {
                machine.change_state(uid)?;
                Ok(())
            }
            None => {
                self.pending = Some(uid);
                Ok(())
            }
        }
    }

    /// The pending request's target uid, or `None` if nothing is queued.
    pub fn queued_state_change(&self) -> Option<StateId> {
        self.pending
    }

    /// Apply any pending deferred change, then run one regular tick.
    ///
    /// A no-op before [`init`](StateDriver::init).
    pub fn tick(&mut self) -> Result<(), DriverError> {
        self.apply_pending()?;
        if let Some(machine) = self.machine.as_mut() {
            machine.tick()?;
        }
        Ok(())
    }

    /// Apply any pending deferred change, then run one fixed tick.
    ///
    /// A no-op before [`init`](StateDriver::init). Transitions are not
    /// evaluated on this cadence.
    pub fn fixed_tick(&mut self) -> Result<(), DriverError> {
        self.apply_pending()?;
        if let Some(machine) = self.machine.as_ref() {
            machine.fixed_tick();
        }
        Ok(())
    }

    fn apply_pending(&mut self) -> Result<(), MachineError> {
        let Some(machine) = self.machine.as_mut() else {
            return Ok(());
        };
        if let Some(uid) = self.pending.take() {
            machine.change_state(uid)?;
        }
        Ok(())
    }

    // Configuration surface, delegated to the installed machine. All of
    // these fail with NotInitialized before init().

    /// See [`TransitionMachine::add_state`].
    pub fn add_state(&mut self, state: State) -> Result<(), DriverError> {
        self.machine_mut()?.add_state(state)?;
        Ok(())
    }

    /// See [`TransitionMachine::add_state_id`].
    pub fn add_state_id(&mut self, uid: StateId) -> Result<(), DriverError> {
        self.machine_mut()?.add_state_id(uid)?;
        Ok(())
    }

    /// See [`TransitionMachine::remove_state`].
    pub fn remove_state(&mut self, uid: StateId) -> Result<(), DriverError> {
        self.machine_mut()?.remove_state(uid);
        Ok(())
    }

    /// See [`TransitionMachine::add_state_callback`].
    pub fn add_state_callback(
        &mut self,
        uid: StateId,
        event: StateEvent,
        callback: Callback,
    ) -> Result<(), DriverError> {
        self.machine_mut()?.add_state_callback(uid, event, callback)?;
        Ok(())
    }

    /// See [`TransitionMachine::remove_state_callback`].
    pub fn remove_state_callback(
        &mut self,
        uid: StateId,
        event: StateEvent,
        callback: &Callback,
    ) -> Result<(), DriverError> {
        self.machine_mut()?
            .remove_state_callback(uid, event, callback)?;
        Ok(())
    }

    /// See [`TransitionMachine::set_state_callback`].
    pub fn set_state_callback(
        &mut self,
        uid: StateId,
        event: StateEvent,
        callback: Callback,
    ) -> Result<(), DriverError> {
        self.machine_mut()?.set_state_callback(uid, event, callback)?;
        Ok(())
    }

    /// See [`TransitionMachine::add_transition`].
    pub fn add_transition(
        &mut self,
        from: StateId,
        to: StateId,
        transition: Transition,
    ) -> Result<(), DriverError> {
        self.machine_mut()?.add_transition(from, to, transition);
        Ok(())
    }

    /// See [`TransitionMachine::remove_transition`].
    pub fn remove_transition(&mut self, from: StateId, to: StateId) -> Result<(), DriverError> {
        self.machine_mut()?.remove_transition(from, to);
        Ok(())
    }

    /// The current state's uid, if a machine is installed and a state is
    /// current.
    pub fn current_uid(&self) -> Option<StateId> {
        self.machine.as_ref().and_then(|m| m.current_uid())
    }

    fn machine_mut(&mut self) -> Result<&mut TransitionMachine, DriverError> {
        self.machine.as_mut().ok_or(DriverError::NotInitialized)
    }
}
