//! Action in the schema the policy consumes and emits.
use crate::record::{Record, RecordValue};
use serde::{Deserialize, Serialize};

/// Action of the policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelAction {
    /// Rescaled translation of the end effector.
    pub world_vector: [f32; 3],

    /// Rescaled rotation of the end effector.
    pub rotation_delta: [f32; 3],

    /// `-1` opens the gripper, `1` closes it.
    pub gripper_closedness_action: [f32; 1],

    /// One-hot termination category.
    pub terminate_episode: [i32; 3],
}

impl Default for ModelAction {
    fn default() -> Self {
        Self {
            world_vector: [0.0; 3],
            rotation_delta: [0.0; 3],
            gripper_closedness_action: [0.0],
            terminate_episode: super::terminate::CONTINUE,
        }
    }
}

impl ModelAction {
    /// Field names, in the order dimensions are flattened.
    pub const FIELDS: [&'static str; 4] = [
        "terminate_episode",
        "world_vector",
        "rotation_delta",
        "gripper_closedness_action",
    ];

    /// The number of flattened dimensions.
    pub const N_DIMS: usize = 10;

    /// Names of the flattened dimensions, e.g., `world_vector_0`.
    pub fn dim_names() -> Vec<String> {
        let sizes = [3, 3, 3, 1];
        Self::FIELDS
            .iter()
            .zip(sizes.iter())
            .flat_map(|(name, &n)| (0..n).map(move |i| format!("{}_{}", name, i)))
            .collect()
    }

    /// Values of the flattened dimensions, aligned with [`ModelAction::dim_names`].
    pub fn dims(&self) -> Vec<f32> {
        self.terminate_episode
            .iter()
            .map(|&v| v as f32)
            .chain(self.world_vector.iter().cloned())
            .chain(self.rotation_delta.iter().cloned())
            .chain(self.gripper_closedness_action.iter().cloned())
            .collect()
    }

    /// Writes every flattened dimension as a scalar under `prefix/<dim name>`.
    pub fn to_record(&self, prefix: &str) -> Record {
        let mut record = Record::empty();
        for (name, v) in Self::dim_names().into_iter().zip(self.dims()) {
            record.insert(format!("{}/{}", prefix, name), RecordValue::Scalar(v));
        }
        record
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_dims() {
        let act = ModelAction {
            world_vector: [0.1, 0.2, 0.3],
            rotation_delta: [0.4, 0.5, 0.6],
            gripper_closedness_action: [-1.0],
            terminate_episode: [1, 0, 0],
        };
        let names = ModelAction::dim_names();
        let dims = act.dims();
        assert_eq!(names.len(), ModelAction::N_DIMS);
        assert_eq!(dims.len(), ModelAction::N_DIMS);
        assert_eq!(names[0], "terminate_episode_0");
        assert_eq!(names[3], "world_vector_0");
        assert_eq!(names[8], "rotation_delta_2");
        assert_eq!(names[9], "gripper_closedness_action_0");
        assert_eq!(dims[0], 1.0);
        assert_eq!(dims[5], 0.3);
        assert_eq!(dims[9], -1.0);

        let record = act.to_record("predicted");
        assert_eq!(record.len(), ModelAction::N_DIMS);
        assert_eq!(record.get_scalar("predicted/rotation_delta_1").unwrap(), 0.5);
    }
}
