//! Inference loop over recorded episodes.
mod base;
mod config;
pub use base::{InferenceRunner, Rollout};
pub use config::InferenceRunnerConfig;
