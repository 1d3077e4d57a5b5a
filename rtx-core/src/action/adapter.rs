//! Conversion of dataset actions into the policy's action schema.
use super::{
    gripper::resolve_gripper, terminate::terminate_flag_to_one_hot, ModelAction, RawAction,
    RescaleConfig,
};
use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Configuration of [`ActionSpaceAdapter`].
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
pub struct ActionAdapterConfig {
    /// Bounds for `world_vector`.
    pub world_vector: RescaleConfig,

    /// Bounds for `rotation_delta`.
    pub rotation_delta: RescaleConfig,
}

impl Default for ActionAdapterConfig {
    fn default() -> Self {
        Self {
            world_vector: RescaleConfig::WORLD_VECTOR,
            rotation_delta: RescaleConfig::ROTATION_DELTA,
        }
    }
}

impl ActionAdapterConfig {
    /// Sets the bounds for `world_vector`.
    pub fn world_vector(mut self, v: RescaleConfig) -> Self {
        self.world_vector = v;
        self
    }

    /// Sets the bounds for `rotation_delta`.
    pub fn rotation_delta(mut self, v: RescaleConfig) -> Self {
        self.rotation_delta = v;
        self
    }
}

/// Converts a [`RawAction`] into a [`ModelAction`].
///
/// The conversion is a pure composition of the gripper resolver,
/// the termination encoder and the rescaler. It fails only when
/// `open_gripper` is not a boolean.
#[derive(Debug, Clone)]
pub struct ActionSpaceAdapter {
    world_vector: RescaleConfig,
    rotation_delta: RescaleConfig,
}

impl Default for ActionSpaceAdapter {
    fn default() -> Self {
        Self {
            world_vector: RescaleConfig::WORLD_VECTOR,
            rotation_delta: RescaleConfig::ROTATION_DELTA,
        }
    }
}

impl ActionSpaceAdapter {
    /// Builds the adapter, rejecting bounds that leave no output range.
    pub fn build(config: &ActionAdapterConfig) -> Result<Self> {
        config.world_vector.check()?;
        config.rotation_delta.check()?;
        Ok(Self {
            world_vector: config.world_vector,
            rotation_delta: config.rotation_delta,
        })
    }

    /// Converts a dataset action into the model's action schema.
    pub fn to_model_action(&self, raw: &RawAction) -> Result<ModelAction> {
        let gripper = resolve_gripper(&raw.open_gripper)?;

        Ok(ModelAction {
            world_vector: self.world_vector.rescale_vec(raw.world_vector),
            rotation_delta: self.rotation_delta.rescale_vec(raw.rotation_delta),
            gripper_closedness_action: [gripper],
            terminate_episode: terminate_flag_to_one_hot(raw.terminate_episode),
        })
    }
}

/// Converts a dataset action with the default bounds.
pub fn to_model_action(raw: &RawAction) -> Result<ModelAction> {
    ActionSpaceAdapter::default().to_model_action(raw)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{action::ActionValue, error::RtxError};

    fn close(a: &[f32], b: &[f32]) -> bool {
        a.iter().zip(b.iter()).all(|(x, y)| (x - y).abs() < 1e-5)
    }

    #[test]
    fn test_to_model_action() -> Result<()> {
        let raw = RawAction::new([0.05, -0.05, 0.025], [0.25, -0.25, 0.0], true, 1.0);
        let act = to_model_action(&raw)?;

        assert!(close(&act.world_vector, &[1.74, -1.74, 0.875]));
        assert!(close(&act.rotation_delta, &[1.39, -1.39, 0.0]));
        assert_eq!(act.gripper_closedness_action, [-1.0]);
        assert_eq!(act.terminate_episode, [1, 0, 0]);

        let raw = RawAction::new([0.0; 3], [0.0; 3], false, 0.0);
        let act = to_model_action(&raw)?;
        assert_eq!(act.gripper_closedness_action, [1.0]);
        assert_eq!(act.terminate_episode, [0, 1, 0]);
        Ok(())
    }

    #[test]
    fn test_output_within_clip_bounds() -> Result<()> {
        let adapter = ActionSpaceAdapter::default();
        for &x in [-1.0f32, -0.06, -0.05, 0.0, 0.049, 0.3, 1.0].iter() {
            let act = adapter.to_model_action(&RawAction::new([x; 3], [x; 3], false, 0.0))?;
            assert!(act.world_vector.iter().all(|v| v.abs() <= 1.74f32 + 1e-6));
            assert!(act.rotation_delta.iter().all(|v| v.abs() <= 1.39f32 + 1e-6));
        }
        Ok(())
    }

    #[test]
    fn test_invalid_gripper_fails() {
        let mut raw = RawAction::new([0.0; 3], [0.0; 3], true, 0.0);
        raw.open_gripper = ActionValue::Scalar(0.5);
        let err = to_model_action(&raw).unwrap_err();
        assert_eq!(
            err.downcast_ref::<RtxError>(),
            Some(&RtxError::GripperDomain("0.5".to_string()))
        );
    }

    #[test]
    fn test_build_rejects_empty_range() {
        let config = ActionAdapterConfig::default().world_vector(RescaleConfig::new(0.1, -0.1));
        let err = ActionSpaceAdapter::build(&config).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<RtxError>(),
            Some(RtxError::InvalidRescaleBound { .. })
        ));
    }
}
