//! Result of a single state machine tick.

/// What happened during one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The named state's guard passed and its effect ran.
    Ran(&'static str),

    /// No guard passed; the tick was a no-op.
    Idle,
}

impl Outcome {
    /// Returns `true` if a state ran this tick.
    #[inline]
    pub fn is_ran(self) -> bool {
        matches!(self, Outcome::Ran(_))
    }

    /// Returns `true` if no state ran this tick.
    #[inline]
    pub fn is_idle(self) -> bool {
        matches!(self, Outcome::Idle)
    }

    /// Name of the state that ran, if any.
    #[inline]
    pub fn state_name(self) -> Option<&'static str> {
        match self {
            Outcome::Ran(name) => Some(name),
            Outcome::Idle => None,
        }
    }
}
