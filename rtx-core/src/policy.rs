//! Policies that do not run a model.
//!
//! Used for replaying logged predictions and in tests of the inference loop.
use crate::{action::ModelAction, error::RtxError, Policy, TimeStep};
use anyhow::Result;

/// Replays a logged sequence of actions.
///
/// The state is the index of the next action to emit.
#[derive(Debug, Clone)]
pub struct ReplayPolicy {
    actions: Vec<ModelAction>,
}

impl ReplayPolicy {
    /// Constructs the policy from actions in temporal order.
    pub fn new(actions: Vec<ModelAction>) -> Self {
        Self { actions }
    }
}

impl Policy for ReplayPolicy {
    type State = usize;

    fn initial_state(&mut self, _batch_size: usize) -> Result<Self::State> {
        Ok(0)
    }

    fn step(&mut self, _time_step: &TimeStep<'_>, state: usize) -> Result<(ModelAction, usize)> {
        let act = self
            .actions
            .get(state)
            .cloned()
            .ok_or(RtxError::EpisodeExhausted(state))?;
        Ok((act, state + 1))
    }
}

/// Emits the same action at every step.
///
/// The state counts the steps taken in the current episode.
#[derive(Debug, Clone, Default)]
pub struct ConstantPolicy {
    action: ModelAction,
}

impl ConstantPolicy {
    /// Constructs the policy.
    pub fn new(action: ModelAction) -> Self {
        Self { action }
    }
}

impl Policy for ConstantPolicy {
    type State = u64;

    fn initial_state(&mut self, _batch_size: usize) -> Result<Self::State> {
        Ok(0)
    }

    fn step(&mut self, _time_step: &TimeStep<'_>, state: u64) -> Result<(ModelAction, u64)> {
        Ok((self.action.clone(), state + 1))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::Observation;

    #[test]
    fn test_replay_policy_exhausts() -> Result<()> {
        let mut policy = ReplayPolicy::new(vec![ModelAction::default()]);
        let obs = Observation::zeros(4, 4);
        let ts = TimeStep::transition(&obs, 0.0);

        let state = policy.initial_state(1)?;
        let (_, state) = policy.step(&ts, state)?;
        assert_eq!(state, 1);

        let err = policy.step(&ts, state).unwrap_err();
        assert_eq!(
            err.downcast_ref::<RtxError>(),
            Some(&RtxError::EpisodeExhausted(1))
        );
        Ok(())
    }
}
