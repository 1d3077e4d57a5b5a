//! Errors in the library.
use thiserror::Error;

/// Errors in the library.
#[derive(Error, Debug, PartialEq)]
pub enum RtxError {
    /// `open_gripper` of a dataset action was not a boolean.
    #[error("open_gripper must be a boolean, got {0}")]
    GripperDomain(String),

    /// Image does not have the shape `[height, width, 3]`.
    #[error("Image shape error: expected [height, width, 3], got {0:?}")]
    ImageShape(Vec<usize>),

    /// Image contains a value that cannot be cast to `u8`.
    #[error("Image value error: {0}")]
    ImageValue(String),

    /// A field of a raw action record is missing or ill-typed.
    #[error("Action field error: {0}")]
    ActionField(String),

    /// Rescaling bounds leave no valid output range.
    #[error("Invalid rescale bound: low = {low}, high = {high}, safety_margin = {safety_margin}, post_scaling = [{post_scaling_min}, {post_scaling_max}]")]
    InvalidRescaleBound {
        /// Lower bound of the input range.
        low: f32,
        /// Upper bound of the input range.
        high: f32,
        /// Margin subtracted from both ends of the output range.
        safety_margin: f32,
        /// Lower bound of the output range.
        post_scaling_min: f32,
        /// Upper bound of the output range.
        post_scaling_max: f32,
    },

    /// A replayed action log has no action at the given index.
    #[error("Action log exhausted at step {0}")]
    EpisodeExhausted(usize),

    /// Ground-truth and predicted sequences are not index-aligned.
    #[error("Length mismatch: {ground_truth} ground-truth actions, {predicted} predicted actions")]
    LengthMismatch {
        /// Number of ground-truth actions.
        ground_truth: usize,
        /// Number of predicted actions.
        predicted: usize,
    },

    /// Record key error.
    #[error("Record key error: {0}")]
    RecordKey(String),

    /// Record value type error.
    #[error("Record value type error: {0}")]
    RecordValueType(String),
}
