//! Lifecycle event kinds for state callbacks.

use std::fmt;

/// The four lifecycle events a state can react to.
///
/// The set is closed: every [`State`](super::State) owns exactly one
/// callback slot per variant, so there is no way to request an event kind
/// that does not exist.
///
/// - `Enter` / `Exit` fire exactly once per activation/deactivation.
/// - `Tick` fires once per regular tick while the state is current.
/// - `FixedTick` fires once per fixed time step while the state is current.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StateEvent {
    Enter,
    Exit,
    Tick,
    FixedTick,
}

impl StateEvent {
    /// All event kinds, in a stable order.
    pub const ALL: [StateEvent; 4] = [
        StateEvent::Enter,
        StateEvent::Exit,
        StateEvent::Tick,
        StateEvent::FixedTick,
    ];

    /// Get the event's name for display/logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Enter => "Enter",
            Self::Exit => "Exit",
            Self::Tick => "Tick",
            Self::FixedTick => "FixedTick",
        }
    }
}

impl fmt::Display for StateEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
