//! Action records as stored in the source dataset.
use crate::error::RtxError;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A dynamically typed value of a dataset field.
///
/// Dataset records are not typed on the Rust side, so a field expected to be
/// a boolean can arrive holding anything else. Such values are kept as-is and
/// rejected where they are interpreted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ActionValue {
    /// Boolean.
    Bool(bool),

    /// Number.
    Scalar(f64),

    /// Array of numbers.
    Array(Vec<f64>),

    /// Text.
    String(String),
}

impl fmt::Display for ActionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(v) => write!(f, "{}", v),
            Self::Scalar(v) => write!(f, "{}", v),
            Self::Array(v) => write!(f, "{:?}", v),
            Self::String(v) => write!(f, "{:?}", v),
        }
    }
}

impl From<bool> for ActionValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

/// Action of a step in the source dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawAction {
    /// Translation of the end effector.
    pub world_vector: [f32; 3],

    /// Rotation of the end effector.
    pub rotation_delta: [f32; 3],

    /// `true` when the gripper is commanded open.
    pub open_gripper: ActionValue,

    /// `1.0` on the step that terminates the episode, `0.0` otherwise.
    pub terminate_episode: f32,
}

impl RawAction {
    /// Constructs a [`RawAction`] with a boolean gripper flag.
    pub fn new(
        world_vector: [f32; 3],
        rotation_delta: [f32; 3],
        open_gripper: bool,
        terminate_episode: f32,
    ) -> Self {
        Self {
            world_vector,
            rotation_delta,
            open_gripper: open_gripper.into(),
            terminate_episode,
        }
    }

    /// Parses a JSON object with the fields of [`RawAction`].
    ///
    /// Missing or ill-typed fields are reported as [`RtxError::ActionField`].
    pub fn from_json(s: &str) -> Result<Self> {
        serde_json::from_str(s).map_err(|e| RtxError::ActionField(e.to_string()).into())
    }
}
