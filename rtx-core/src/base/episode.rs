//! Recorded episodes.
use crate::action::RawAction;
use anyhow::Result;
use ndarray::ArrayD;

/// Observation of a step as recorded in the dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct StepObservation {
    /// Camera frame, expected to have shape `[height, width, 3]`.
    pub image: ArrayD<u8>,
}

/// A recorded timestep: an observation and the action taken at it.
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    /// Observation.
    pub observation: StepObservation,

    /// Action in the dataset's encoding.
    pub action: RawAction,
}

impl Step {
    /// Constructs a [`Step`].
    pub fn new(image: ArrayD<u8>, action: RawAction) -> Self {
        Self {
            observation: StepObservation { image },
            action,
        }
    }
}

/// A recorded task execution.
///
/// Steps are kept in temporal order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Episode {
    steps: Vec<Step>,
}

impl From<Vec<Step>> for Episode {
    fn from(steps: Vec<Step>) -> Self {
        Self { steps }
    }
}

impl Episode {
    /// Constructs an [`Episode`] from steps in temporal order.
    pub fn new(steps: Vec<Step>) -> Self {
        steps.into()
    }

    /// The number of steps.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Returns `true` if the episode has no steps.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Steps in temporal order.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Returns an iterator over the steps.
    pub fn iter(&self) -> std::slice::Iter<'_, Step> {
        self.steps.iter()
    }

    /// Raw camera frames, before any preprocessing.
    pub fn images(&self) -> Vec<&ArrayD<u8>> {
        self.steps.iter().map(|s| &s.observation.image).collect()
    }
}

/// Provides recorded episodes.
pub trait EpisodeSource {
    /// Returns the next episode, or `None` when the source is exhausted.
    fn next_episode(&mut self) -> Result<Option<Episode>>;
}

/// An [`EpisodeSource`] over episodes held in memory.
#[derive(Debug)]
pub struct VecEpisodeSource {
    episodes: std::vec::IntoIter<Episode>,
}

impl VecEpisodeSource {
    /// Constructs the source, yielding `episodes` in order.
    pub fn new(episodes: Vec<Episode>) -> Self {
        Self {
            episodes: episodes.into_iter(),
        }
    }
}

impl EpisodeSource for VecEpisodeSource {
    fn next_episode(&mut self) -> Result<Option<Episode>> {
        Ok(self.episodes.next())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use ndarray::IxDyn;

    fn step(v: u8) -> Step {
        Step::new(
            ArrayD::from_elem(IxDyn(&[2, 2, 3]), v),
            RawAction::new([0.0; 3], [0.0; 3], true, 0.0),
        )
    }

    #[test]
    fn test_order_preserved() {
        let episode = Episode::new(vec![step(1), step(2), step(3)]);
        let firsts: Vec<u8> = episode.images().iter().map(|im| im[[0, 0, 0]]).collect();
        assert_eq!(firsts, vec![1, 2, 3]);
        assert_eq!(episode.len(), 3);
    }

    #[test]
    fn test_vec_source() -> Result<()> {
        let mut source = VecEpisodeSource::new(vec![
            Episode::new(vec![step(0)]),
            Episode::new(vec![step(0), step(1)]),
        ]);
        assert_eq!(source.next_episode()?.map(|e| e.len()), Some(1));
        assert_eq!(source.next_episode()?.map(|e| e.len()), Some(2));
        assert!(source.next_episode()?.is_none());
        Ok(())
    }
}
