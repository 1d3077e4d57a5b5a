#![warn(missing_docs)]
//! Replay of recorded robot episodes through a pretrained policy.
//!
//! The crate converts dataset actions into the action space of a policy,
//! feeds recorded camera frames to the policy step by step while threading its
//! recurrent state, and returns the predicted actions next to the converted
//! ground truth.
//!
//! ```no_run
//! # use anyhow::Result;
//! use rtx_core::{
//!     policy::ConstantPolicy, Episode, InferenceRunner, InferenceRunnerConfig, Observation,
//! };
//!
//! fn main() -> Result<()> {
//!     # let episode = Episode::default();
//!     let config = InferenceRunnerConfig::default();
//!     let template = Observation::zeros(256, 320).instruction("place the can", vec![0.0; 512]);
//!     let runner = InferenceRunner::build(&config, template)?;
//!
//!     let mut policy = ConstantPolicy::default();
//!     let rollout = runner.run_episode(&mut policy, &episode)?;
//!     let comparison = rollout.comparison()?;
//!
//!     for name in comparison.names() {
//!         let (gt, pred) = comparison.series(name).unwrap();
//!         println!("{}: {:?} {:?}", name, gt, pred);
//!     }
//!     Ok(())
//! }
//! ```
pub mod action;
pub mod comparison;
pub mod error;
pub mod export;
pub mod policy;
pub mod preprocess;
pub mod record;

mod base;
pub use base::{
    Episode, EpisodeSource, Observation, Policy, Step, StepObservation, StepType, TimeStep,
    VecEpisodeSource,
};

mod runner;
pub use runner::{InferenceRunner, InferenceRunnerConfig, Rollout};
