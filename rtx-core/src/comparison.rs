//! Per-dimension comparison of ground-truth and predicted actions.
use crate::{
    action::ModelAction,
    error::RtxError,
    record::{Record, RecordValue},
};
use anyhow::Result;

/// Time series of every action dimension, for ground truth and prediction.
///
/// Dimensions are ordered as `terminate_episode_0..2`, `world_vector_0..2`,
/// `rotation_delta_0..2`, `gripper_closedness_action_0`.
#[derive(Debug, Clone)]
pub struct ActionComparison {
    steps: Vec<(ModelAction, ModelAction)>,
    names: Vec<String>,
    ground_truth: Vec<Vec<f32>>,
    predicted: Vec<Vec<f32>>,
}

impl ActionComparison {
    /// Builds the series from index-aligned action sequences.
    pub fn new(ground_truth: &[ModelAction], predicted: &[ModelAction]) -> Result<Self> {
        if ground_truth.len() != predicted.len() {
            return Err(RtxError::LengthMismatch {
                ground_truth: ground_truth.len(),
                predicted: predicted.len(),
            }
            .into());
        }

        Ok(Self {
            steps: ground_truth
                .iter()
                .cloned()
                .zip(predicted.iter().cloned())
                .collect(),
            names: ModelAction::dim_names(),
            ground_truth: transpose(ground_truth),
            predicted: transpose(predicted),
        })
    }

    /// Names of the dimensions.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// The number of time steps.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Returns `true` if there are no time steps.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Ground-truth and predicted series of the dimension `name`.
    pub fn series(&self, name: &str) -> Option<(&[f32], &[f32])> {
        let ix = self.names.iter().position(|n| n == name)?;
        Some((&self.ground_truth[ix], &self.predicted[ix]))
    }

    /// One record per time step, laid out as in [`step_record`].
    pub fn to_records(&self) -> Vec<Record> {
        self.steps
            .iter()
            .enumerate()
            .map(|(t, (gt, pred))| step_record(t, gt, pred))
            .collect()
    }

    /// Mean absolute error of every dimension, with keys `mae/<dim>`.
    ///
    /// Empty if there are no time steps.
    pub fn mean_abs_error(&self) -> Record {
        let mut record = Record::empty();
        if self.is_empty() {
            return record;
        }
        let n = self.len() as f32;
        for (i, name) in self.names.iter().enumerate() {
            let sum: f32 = self.ground_truth[i]
                .iter()
                .zip(self.predicted[i].iter())
                .map(|(g, p)| (g - p).abs())
                .sum();
            record.insert(format!("mae/{}", name), RecordValue::Scalar(sum / n));
        }
        record
    }
}

/// The record of a single step, with keys `step`, `ground_truth/<dim>` and `predicted/<dim>`.
pub fn step_record(step: usize, ground_truth: &ModelAction, predicted: &ModelAction) -> Record {
    let mut record = Record::from_scalar("step", step as f32);
    record.merge_inplace(ground_truth.to_record("ground_truth"));
    record.merge_inplace(predicted.to_record("predicted"));
    record
}

fn transpose(actions: &[ModelAction]) -> Vec<Vec<f32>> {
    let mut series = vec![Vec::with_capacity(actions.len()); ModelAction::N_DIMS];
    for act in actions {
        for (s, v) in series.iter_mut().zip(act.dims()) {
            s.push(v);
        }
    }
    series
}

#[cfg(test)]
mod test {
    use super::*;

    fn act(x: f32, open: bool) -> ModelAction {
        ModelAction {
            world_vector: [x, 0.0, 0.0],
            rotation_delta: [0.0; 3],
            gripper_closedness_action: [if open { -1.0 } else { 1.0 }],
            terminate_episode: [0, 1, 0],
        }
    }

    #[test]
    fn test_series() -> Result<()> {
        let gt = vec![act(0.1, true), act(0.2, true), act(0.3, false)];
        let pred = vec![act(0.0, true), act(0.2, false), act(0.6, false)];
        let cmp = ActionComparison::new(&gt, &pred)?;

        assert_eq!(cmp.len(), 3);
        let (g, p) = cmp.series("world_vector_0").unwrap();
        assert_eq!(g, &[0.1, 0.2, 0.3]);
        assert_eq!(p, &[0.0, 0.2, 0.6]);
        assert!(cmp.series("base_displacement_vector_0").is_none());

        let mae = cmp.mean_abs_error();
        assert!((mae.get_scalar("mae/world_vector_0")? - 0.4 / 3.0).abs() < 1e-6);
        assert!((mae.get_scalar("mae/gripper_closedness_action_0")? - 2.0 / 3.0).abs() < 1e-6);
        assert_eq!(mae.get_scalar("mae/terminate_episode_1")?, 0.0);

        let records = cmp.to_records();
        assert_eq!(records.len(), 3);
        assert_eq!(records[2].get_scalar("step")?, 2.0);
        assert_eq!(records[2].get_scalar("predicted/world_vector_0")?, 0.6);
        assert_eq!(records[1], step_record(1, &gt[1], &pred[1]));
        assert_eq!(records[1].len(), 1 + 2 * ModelAction::N_DIMS);
        Ok(())
    }

    #[test]
    fn test_length_mismatch() {
        let err = ActionComparison::new(&[act(0.0, true)], &[]).unwrap_err();
        assert_eq!(
            err.downcast_ref::<RtxError>(),
            Some(&RtxError::LengthMismatch {
                ground_truth: 1,
                predicted: 0
            })
        );
    }
}
