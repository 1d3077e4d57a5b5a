//! Configuration of [`InferenceRunner`](super::InferenceRunner).
use crate::{action::ActionAdapterConfig, preprocess::PreprocessorConfig};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{
    fs::File,
    io::{BufReader, Write},
    path::Path,
};

/// Configuration of [`InferenceRunner`](super::InferenceRunner).
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
pub struct InferenceRunnerConfig {
    /// Batch size passed to [`Policy::initial_state`](crate::Policy::initial_state).
    pub batch_size: usize,

    /// Resizing of camera frames.
    pub preprocessor: PreprocessorConfig,

    /// Conversion of dataset actions into ground-truth model actions.
    pub action: ActionAdapterConfig,
}

impl Default for InferenceRunnerConfig {
    fn default() -> Self {
        Self {
            batch_size: 1,
            preprocessor: PreprocessorConfig::default(),
            action: ActionAdapterConfig::default(),
        }
    }
}

impl InferenceRunnerConfig {
    /// Sets the batch size.
    pub fn batch_size(mut self, v: usize) -> Self {
        self.batch_size = v;
        self
    }

    /// Sets the configuration of frame resizing.
    pub fn preprocessor(mut self, v: PreprocessorConfig) -> Self {
        self.preprocessor = v;
        self
    }

    /// Sets the configuration of action conversion.
    pub fn action(mut self, v: ActionAdapterConfig) -> Self {
        self.action = v;
        self
    }

    /// Constructs [`InferenceRunnerConfig`] from YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        let rdr = BufReader::new(file);
        let b = serde_yaml::from_reader(rdr)?;
        Ok(b)
    }

    /// Saves [`InferenceRunnerConfig`].
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let mut file = File::create(path)?;
        file.write_all(serde_yaml::to_string(&self)?.as_bytes())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{action::RescaleConfig, preprocess::ResizeFilter};
    use tempdir::TempDir;

    #[test]
    fn test_serde_runner_config() -> Result<()> {
        let config = InferenceRunnerConfig::default()
            .preprocessor(
                PreprocessorConfig::default()
                    .size(128, 160)
                    .filter(ResizeFilter::Nearest),
            )
            .action(
                ActionAdapterConfig::default()
                    .rotation_delta(RescaleConfig::new(-0.5, 0.5).safety_margin(0.02)),
            );

        let dir = TempDir::new("runner_config")?;
        let path = dir.path().join("runner_config.yaml");
        config.save(&path)?;
        let config_ = InferenceRunnerConfig::load(&path)?;
        assert_eq!(config, config_);
        Ok(())
    }

    #[test]
    fn test_default_bounds() {
        let config = InferenceRunnerConfig::default();
        assert_eq!(config.batch_size, 1);
        assert_eq!(config.action.world_vector, RescaleConfig::WORLD_VECTOR);
        assert_eq!(config.action.rotation_delta, RescaleConfig::ROTATION_DELTA);
        assert_eq!((config.preprocessor.height, config.preprocessor.width), (256, 320));
    }
}
