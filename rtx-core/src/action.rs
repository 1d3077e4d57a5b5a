//! Translation of dataset actions into the action space of the policy.
//!
//! Dataset actions ([`RawAction`]) and policy actions ([`ModelAction`]) differ in
//! three ways:
//!
//! * Continuous fields live in different ranges and are remapped with [`RescaleConfig`].
//! * The gripper sign convention is flipped, see [`gripper`].
//! * Termination is a scalar flag in the dataset and a one-hot vector for the
//!   policy, see [`terminate`].
//!
//! [`ActionSpaceAdapter`] composes the three.
mod adapter;
pub mod gripper;
mod model_action;
mod raw_action;
mod rescale;
pub mod terminate;
pub use adapter::{to_model_action, ActionAdapterConfig, ActionSpaceAdapter};
pub use model_action::ModelAction;
pub use raw_action::{ActionValue, RawAction};
pub use rescale::{rescale_action_with_bound, RescaleConfig};
