//! Builder utilities for ergonomic roster construction.
//!
//! Instead of assembling `vec![Box::new(..) as Box<dyn State<C>>, ..]` by hand,
//! push states in priority order, highest first:
//!
//! ```rust,ignore
//! let machine = StateMachineBuilder::new()
//!     .state(RestState::default())
//!     .state(ApproachState::default())
//!     .build();
//! ```

use crate::{State, StateMachine};

/// Collects states in priority order.
pub struct StateMachineBuilder<C> {
    states: Vec<Box<dyn State<C>>>,
}

impl<C> StateMachineBuilder<C> {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self { states: Vec::new() }
    }

    /// Appends a state below every state added so far.
    #[must_use]
    pub fn state<S>(mut self, state: S) -> Self
    where
        S: State<C> + 'static,
    {
        self.states.push(Box::new(state));
        self
    }

    /// Appends an already boxed state.
    #[must_use]
    pub fn boxed(mut self, state: Box<dyn State<C>>) -> Self {
        self.states.push(state);
        self
    }

    /// Builds the machine.
    ///
    /// # Panics
    ///
    /// Panics if no state was added.
    pub fn build(self) -> StateMachine<C> {
        StateMachine::new(self.states)
    }
}

impl<C> Default for StateMachineBuilder<C> {
    fn default() -> Self {
        Self::new()
    }
}
