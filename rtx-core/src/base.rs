//! Core types and traits.
mod episode;
mod observation;
mod policy;
mod time_step;
pub use episode::{Episode, EpisodeSource, Step, StepObservation, VecEpisodeSource};
pub use observation::Observation;
pub use policy::Policy;
pub use time_step::{StepType, TimeStep};
