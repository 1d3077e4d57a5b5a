//! Translation of the dataset gripper flag into the model's gripper command.
//!
//! In the dataset, `open_gripper == true` means the gripper is open. The model
//! instead takes a signed closedness command where `-1` opens and `1` closes.
//! Every conversion between the two encodings goes through this module.
use super::ActionValue;
use crate::error::RtxError;

/// Closedness command that opens the gripper.
pub const GRIPPER_OPEN: f32 = -1.0;

/// Closedness command that closes the gripper.
pub const GRIPPER_CLOSE: f32 = 1.0;

/// Returns the closedness command for a boolean gripper flag.
pub fn gripper_closedness(open_gripper: bool) -> f32 {
    if open_gripper {
        GRIPPER_OPEN
    } else {
        GRIPPER_CLOSE
    }
}

/// Returns the closedness command for a dataset value of `open_gripper`.
///
/// Anything other than a boolean is malformed upstream data and yields
/// [`RtxError::GripperDomain`] carrying the offending value.
pub fn resolve_gripper(open_gripper: &ActionValue) -> Result<f32, RtxError> {
    match open_gripper {
        ActionValue::Bool(v) => Ok(gripper_closedness(*v)),
        v => Err(RtxError::GripperDomain(v.to_string())),
    }
}
