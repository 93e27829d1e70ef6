//! Macros for ergonomic state declaration.

/// Generate an `i32`-repr enum of state identifiers.
///
/// Machines key their states by [`StateId`](crate::core::StateId); this
/// macro gives those integers names. Each variant converts to a `StateId`
/// via `From` or the generated `id()` method.
///
/// # Example
///
/// ```
/// use tickstate::machine::TransitionMachine;
/// use tickstate::state_ids;
///
/// state_ids! {
///     pub enum Phase {
///         Idle = 0,
///         Walk = 1,
///         Attack = 2,
///     }
/// }
///
/// let machine =
///     TransitionMachine::from_uids(&[Phase::Idle.id(), Phase::Walk.id()], Phase::Idle.id())
///         .unwrap();
/// assert_eq!(machine.current_uid(), Some(Phase::Idle.id()));
/// ```
#[macro_export]
macro_rules! state_ids {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident = $value:expr
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        #[repr(i32)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant = $value
            ),*
        }

        impl $name {
            /// The variant's machine identifier.
            $vis const fn id(self) -> $crate::core::StateId {
                self as $crate::core::StateId
            }
        }

        impl From<$name> for $crate::core::StateId {
            fn from(value: $name) -> Self {
                value.id()
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::core::StateId;

    state_ids! {
        enum TestPhase {
            Idle = 0,
            Walk = 1,
            Attack = 10,
        }
    }

    #[test]
    fn variants_convert_to_their_ids() {
        assert_eq!(TestPhase::Idle.id(), 0);
        assert_eq!(TestPhase::Walk.id(), 1);
        assert_eq!(TestPhase::Attack.id(), 10);
        assert_eq!(StateId::from(TestPhase::Walk), 1);
    }

    #[test]
    fn macro_supports_visibility_and_attributes() {
        state_ids! {
            /// Doorway states.
            pub enum Door {
                Closed = 0,
                Open = 1,
            }
        }

        assert_eq!(Door::Open.id(), 1);
    }
}
