//! Types and traits for recording replay results.
//!
//! * [`Record`] - A container of named values
//! * [`RecordValue`] - The types of values that can be stored
//! * [`Recorder`] - A trait defining the output destination of records
//! * [`BufferedRecorder`] - A recorder that keeps records in memory
//! * [`NullRecorder`] - A recorder that discards all records
//!
//! The inference runner writes one record per step, containing the ground-truth
//! and the predicted value of every action dimension.
//!
//! ```rust
//! use rtx_core::record::{Record, RecordValue};
//!
//! let mut record = Record::empty();
//! record.insert("step", RecordValue::Scalar(0.0));
//! record.insert("predicted/world_vector_0", RecordValue::Scalar(0.3));
//! record.insert("instruction", RecordValue::String("open the drawer".into()));
//! ```
mod base;
mod buffered_recorder;
mod null_recorder;
mod recorder;

pub use base::{Record, RecordValue};
pub use buffered_recorder::BufferedRecorder;
pub use null_recorder::NullRecorder;
pub use recorder::Recorder;
