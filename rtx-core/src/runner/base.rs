//! Stepwise replay of recorded episodes through a policy.
use super::InferenceRunnerConfig;
use crate::{
    action::{ActionSpaceAdapter, ModelAction},
    comparison::{step_record, ActionComparison},
    preprocess::ImagePreprocessor,
    record::{RecordValue, Recorder},
    Episode, EpisodeSource, Observation, Policy, TimeStep,
};
use anyhow::Result;
use chrono::Local;
use ndarray::Array3;

/// Outputs of replaying an episode.
///
/// The three sequences are index-aligned with the steps of the episode.
#[derive(Debug, Clone, Default)]
pub struct Rollout {
    /// Preprocessed frames given to the policy.
    pub images: Vec<Array3<u8>>,

    /// Dataset actions converted into the policy's action space.
    pub ground_truth: Vec<ModelAction>,

    /// Actions predicted by the policy.
    pub predicted: Vec<ModelAction>,
}

impl Rollout {
    /// The number of steps.
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Returns `true` if no step was replayed.
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Per-dimension comparison of ground truth and prediction.
    pub fn comparison(&self) -> Result<ActionComparison> {
        ActionComparison::new(&self.ground_truth, &self.predicted)
    }
}

/// Replays episodes through a [`Policy`] and collects its predictions
/// next to the ground-truth actions.
///
/// For each step of an episode, in order:
///
/// 1. The frame is preprocessed and put into the observation. All other
///    fields of the observation come from a fixed template.
/// 2. The policy is stepped with the observation and the state returned by the
///    previous step (or the initial state on the first step).
/// 3. The dataset action is converted into the ground-truth model action.
///
/// Any failure aborts the episode and is returned as is.
pub struct InferenceRunner {
    batch_size: usize,
    preprocessor: ImagePreprocessor,
    adapter: ActionSpaceAdapter,
    template: Observation,
}

impl InferenceRunner {
    /// Builds the runner.
    ///
    /// `template` provides the fields of the observation other than the image.
    pub fn build(config: &InferenceRunnerConfig, template: Observation) -> Result<Self> {
        log::debug!("Inference runner config: {:?}", config);
        let runner = Self {
            batch_size: config.batch_size,
            preprocessor: ImagePreprocessor::build(&config.preprocessor),
            adapter: ActionSpaceAdapter::build(&config.action)?,
            template,
        };
        log::info!(
            "Built inference runner, frame shape {:?}",
            runner.preprocessor.output_shape()
        );
        Ok(runner)
    }

    /// Replays an episode.
    pub fn run_episode<P: Policy>(&self, policy: &mut P, episode: &Episode) -> Result<Rollout> {
        self.run(policy, episode, |_, _, _| {})
    }

    /// Replays an episode, writing a [`Record`](crate::record::Record) per step into `recorder`.
    ///
    /// Each record has the keys `step`, `ground_truth/<dim>` and `predicted/<dim>`.
    /// A summary with the mean absolute error of every dimension, the episode length
    /// and the instruction is written last.
    pub fn run_episode_with_recorder<P, R>(
        &self,
        policy: &mut P,
        episode: &Episode,
        recorder: &mut R,
    ) -> Result<Rollout>
    where
        P: Policy,
        R: Recorder,
    {
        let rollout = self.run(policy, episode, |ix, gt, pred| {
            recorder.write(step_record(ix, gt, pred));
        })?;

        let mut summary = rollout.comparison()?.mean_abs_error();
        summary.insert("datetime", RecordValue::DateTime(Local::now()));
        summary.insert("episode_length", RecordValue::Scalar(rollout.len() as f32));
        summary.insert(
            "instruction",
            RecordValue::String(self.template.natural_language_instruction.clone()),
        );
        recorder.write(summary);
        recorder.flush();

        Ok(rollout)
    }

    /// Replays up to `n_episodes` episodes of `source`, or all of them if `None`.
    ///
    /// Each episode starts from a fresh initial state.
    pub fn run_source<P, S>(
        &self,
        policy: &mut P,
        source: &mut S,
        n_episodes: Option<usize>,
    ) -> Result<Vec<Rollout>>
    where
        P: Policy,
        S: EpisodeSource,
    {
        let mut rollouts = vec![];
        while n_episodes.map_or(true, |n| rollouts.len() < n) {
            match source.next_episode()? {
                Some(episode) => {
                    log::debug!("Episode {}", rollouts.len());
                    rollouts.push(self.run_episode(policy, &episode)?);
                }
                None => break,
            }
        }
        Ok(rollouts)
    }

    fn run<P, F>(&self, policy: &mut P, episode: &Episode, mut on_step: F) -> Result<Rollout>
    where
        P: Policy,
        F: FnMut(usize, &ModelAction, &ModelAction),
    {
        log::info!("Replaying episode with {} steps", episode.len());

        let mut rollout = Rollout {
            images: Vec::with_capacity(episode.len()),
            ground_truth: Vec::with_capacity(episode.len()),
            predicted: Vec::with_capacity(episode.len()),
        };
        let mut observation = self.template.clone();
        let mut state = policy.initial_state(self.batch_size)?;

        for (ix, step) in episode.iter().enumerate() {
            observation.image = self.preprocessor.preprocess(&step.observation.image)?;

            let time_step = TimeStep::transition(&observation, 0.0);
            let (predicted, next_state) = policy.step(&time_step, state)?;
            let ground_truth = self.adapter.to_model_action(&step.action)?;
            log::trace!(
                "Step {}: predicted = {:?}, ground truth = {:?}",
                ix,
                predicted,
                ground_truth
            );
            on_step(ix, &ground_truth, &predicted);

            rollout.images.push(observation.image.clone());
            rollout.ground_truth.push(ground_truth);
            rollout.predicted.push(predicted);
            state = next_state;
        }

        log::info!("Finished episode, {} steps", rollout.len());
        Ok(rollout)
    }
}
