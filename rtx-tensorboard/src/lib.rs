//! TensorBoard output for replayed episodes.
//!
//! Ground-truth and predicted action dimensions are written as scalar curves
//! over the steps of an episode, so both can be overlaid in TensorBoard.
use rtx_core::{
    comparison::ActionComparison,
    record::{Record, RecordValue, Recorder},
};
use std::path::Path;
use tensorboard_rs::summary_writer::SummaryWriter;

/// Write records to TFRecord.
pub struct TensorboardRecorder {
    writer: SummaryWriter,
    step_key: String,
    last_step: usize,
    ignore_unsupported_value: bool,
}

impl TensorboardRecorder {
    /// Construct a [`TensorboardRecorder`].
    ///
    /// TFRecord will be stored in `logdir`.
    pub fn new<P: AsRef<Path>>(logdir: P) -> Self {
        Self {
            writer: SummaryWriter::new(logdir),
            step_key: "step".to_string(),
            last_step: 0,
            ignore_unsupported_value: true,
        }
    }

    /// Construct a [`TensorboardRecorder`] that warns about values it cannot write.
    ///
    /// TFRecord will be stored in `logdir`.
    pub fn new_with_check_unsupported_value<P: AsRef<Path>>(logdir: P) -> Self {
        Self {
            ignore_unsupported_value: false,
            ..Self::new(logdir)
        }
    }

    /// Writes every step of `comparison` followed by its mean absolute errors.
    pub fn write_comparison(&mut self, comparison: &ActionComparison) {
        for record in comparison.to_records() {
            self.write(record);
        }
        self.write(comparison.mean_abs_error());
        self.flush();
    }
}

impl Recorder for TensorboardRecorder {
    /// Write a given [Record] into a TFRecord.
    ///
    /// Scalars are written at the step given by the `step` key. A record without
    /// that key, such as an episode summary, is written at the last step seen.
    /// [RecordValue::DateTime] is discarded; other variants are not supported.
    fn write(&mut self, record: Record) {
        let step = match record.get(&self.step_key) {
            Some(RecordValue::Scalar(v)) => *v as usize,
            Some(v) => {
                log::warn!("Ignored record with non-scalar step: {:?}", v);
                return;
            }
            None => self.last_step,
        };
        self.last_step = step;

        for (k, v) in record.iter() {
            if *k == self.step_key {
                continue;
            }
            match v {
                RecordValue::Scalar(v) => self.writer.add_scalar(k, *v, step),
                RecordValue::DateTime(_) => {} // discard value
                _ => {
                    if !self.ignore_unsupported_value {
                        log::warn!("Unsupported value: {:?}", (k, v));
                    }
                }
            }
        }
    }

    fn flush(&mut self) {
        self.writer.flush();
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use anyhow::Result;
    use rtx_core::action::ModelAction;
    use tempdir::TempDir;

    #[test]
    fn test_write_comparison() -> Result<()> {
        let dir = TempDir::new("tensorboard")?;
        let logdir = dir.path().join("run");

        let gt = vec![ModelAction::default(); 4];
        let pred = vec![ModelAction::default(); 4];
        let mut recorder = TensorboardRecorder::new_with_check_unsupported_value(&logdir);
        recorder.write_comparison(&ActionComparison::new(&gt, &pred)?);
        assert_eq!(recorder.last_step, 3);

        recorder.write(Record::from_slice(&[(
            "instruction",
            RecordValue::String("ignored".into()),
        )]));
        recorder.flush();

        assert!(std::fs::read_dir(&logdir)?.count() > 0);
        Ok(())
    }
}
