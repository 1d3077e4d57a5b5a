//! Policy.
use super::TimeStep;
use crate::action::ModelAction;
use anyhow::Result;

/// A recurrent policy.
///
/// The state is opaque to callers. It is created once per episode with
/// [`Policy::initial_state`] and then handed back and forth with every
/// [`Policy::step`]: the state returned by step `i` is the one to pass to step `i + 1`.
pub trait Policy {
    /// Recurrent state carried across the steps of an episode.
    type State;

    /// Returns the state at the beginning of an episode.
    fn initial_state(&mut self, batch_size: usize) -> Result<Self::State>;

    /// Computes an action and the next state.
    fn step(
        &mut self,
        time_step: &TimeStep<'_>,
        state: Self::State,
    ) -> Result<(ModelAction, Self::State)>;
}

impl<P: Policy + ?Sized> Policy for Box<P> {
    type State = P::State;

    fn initial_state(&mut self, batch_size: usize) -> Result<Self::State> {
        (**self).initial_state(batch_size)
    }

    fn step(
        &mut self,
        time_step: &TimeStep<'_>,
        state: Self::State,
    ) -> Result<(ModelAction, Self::State)> {
        (**self).step(time_step, state)
    }
}
