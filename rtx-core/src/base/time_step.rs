//! Input of a policy step.
use super::Observation;

/// Position of a time step in an episode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepType {
    /// First step of an episode.
    First,

    /// Any step between the first and the last.
    Mid,

    /// Last step of an episode.
    Last,
}

/// An observation together with the reward and discount of the transition
/// that led to it.
#[derive(Debug, Clone, Copy)]
pub struct TimeStep<'a> {
    /// Position in the episode.
    pub step_type: StepType,

    /// Reward.
    pub reward: f32,

    /// Discount.
    pub discount: f32,

    /// Observation.
    pub observation: &'a Observation,
}

impl<'a> TimeStep<'a> {
    /// A mid-episode time step with discount `1`.
    pub fn transition(observation: &'a Observation, reward: f32) -> Self {
        Self {
            step_type: StepType::Mid,
            reward,
            discount: 1.0,
            observation,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_transition() {
        let obs = Observation::zeros(2, 2);
        let ts = TimeStep::transition(&obs, 0.0);
        assert_eq!(ts.step_type, StepType::Mid);
        assert_eq!(ts.reward, 0.0);
        assert_eq!(ts.discount, 1.0);
        assert_eq!(ts.observation.natural_language_embedding.len(), 512);
    }
}
