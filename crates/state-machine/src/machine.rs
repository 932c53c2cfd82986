//! The priority-ordered state machine.
//!
//! [`StateMachine`] evaluates its states from highest to lowest priority and
//! runs the first whose guard passes. This is the same short-circuit shape as a
//! behavior-tree selector, except that guards and effects are split so a guard
//! can be queried by other states without running anything.

use crate::{Outcome, State};

/// Ordered roster of states evaluated once per tick.
///
/// # Semantics
///
/// Each call to [`StateMachine::tick`] walks the roster from index 0:
/// - If a state's `check` returns `true`, its `run` is called and the tick **stops**
/// - If it returns `false`, evaluation **continues** with the next state
/// - If no state matches, the tick is a no-op and returns [`Outcome::Idle`]
///
/// Guards are never cached between ticks.
pub struct StateMachine<C> {
    states: Vec<Box<dyn State<C>>>,
}

impl<C> StateMachine<C> {
    /// Creates a machine whose priority order is the order of `states`.
    ///
    /// # Panics
    ///
    /// Panics if `states` is empty. A machine with no states is
    /// meaningless and likely indicates a programming error.
    pub fn new(states: Vec<Box<dyn State<C>>>) -> Self {
        assert!(
            !states.is_empty(),
            "StateMachine must have at least one state"
        );
        Self { states }
    }

    /// Evaluates one tick against `ctx`.
    pub fn tick(&mut self, ctx: &mut C) -> Outcome {
        for state in &mut self.states {
            if state.check(ctx) {
                state.run(ctx);
                return Outcome::Ran(state.name());
            }
        }
        Outcome::Idle
    }

    /// State names in priority order, highest first.
    pub fn priority_order(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.states.iter().map(|state| state.name())
    }

    /// Number of states in the roster.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Always `false`; construction rejects empty rosters.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}
