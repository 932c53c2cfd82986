//! Core state trait.
//!
//! This module defines the [`State`] trait, the unit of decision making in a
//! [`crate::StateMachine`]. The trait is generic over a context type `C`, so the
//! same machinery drives any agent that can describe its world as a context.

/// A named decision unit: a side-effect free guard plus an effect.
///
/// States may keep small private bookkeeping (timers, cursors) across ticks,
/// which is why [`State::run`] takes `&mut self`. Guards take `&self` and must
/// not mutate anything: other states are allowed to call them to express
/// "unless that one would fire".
pub trait State<C>: Send {
    /// Stable name used for logging and reporting.
    fn name(&self) -> &'static str;

    /// Returns `true` if this state wants to act on the given context.
    fn check(&self, ctx: &C) -> bool;

    /// Performs this state's effect.
    ///
    /// Only called in the same tick in which [`State::check`] returned `true`.
    fn run(&mut self, ctx: &mut C);
}

/// Blanket implementation for boxed states.
///
/// This allows `Box<dyn State<C>>` to also implement `State<C>`,
/// enabling dynamic dispatch and heterogeneous rosters.
impl<C> State<C> for Box<dyn State<C>> {
    #[inline]
    fn name(&self) -> &'static str {
        (**self).name()
    }

    #[inline]
    fn check(&self, ctx: &C) -> bool {
        (**self).check(ctx)
    }

    #[inline]
    fn run(&mut self, ctx: &mut C) {
        (**self).run(ctx)
    }
}
