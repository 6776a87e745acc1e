use super::base::DataSplitter;
use super::types::IndexSplit;
use crate::config::{ConfigSection, RollingConfig};
use crate::error::{CvGuardError, Result};
use polars::prelude::*;

/// Rolling-horizon splitter.
///
/// Slides a fixed `batch_unit`-wide train window with its `horizon`-wide
/// test window attached directly behind it, advancing by `horizon`
/// positions per fold. With `latest_first` the last fold's test window
/// ends exactly at the newest row and the walk runs backward. Train and
/// test never overlap by construction, so no purging is involved.
pub struct RollingHorizonSplitter {
    config: RollingConfig,
}

impl RollingHorizonSplitter {
    pub fn new(config: RollingConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &RollingConfig {
        &self.config
    }

    /// Lazily iterate folds over a dataset of `n_samples` rows.
    ///
    /// Fails if not even one full train+test window fits.
    pub fn split(&self, n_samples: usize) -> Result<RollingFolds> {
        let window = self.config.batch_unit + self.config.horizon;
        if n_samples < window {
            return Err(CvGuardError::InsufficientData(format!(
                "{} samples cannot fit one window of {} (batch_unit {} + horizon {})",
                n_samples, window, self.config.batch_unit, self.config.horizon
            )));
        }

        let first_start = if self.config.latest_first {
            n_samples - window
        } else {
            0
        };

        Ok(RollingFolds {
            n_samples,
            batch_unit: self.config.batch_unit,
            horizon: self.config.horizon,
            latest_first: self.config.latest_first,
            next_start: Some(first_start),
            fold_num: 0,
        })
    }

    pub fn split_all(&self, n_samples: usize) -> Result<Vec<IndexSplit>> {
        Ok(self.split(n_samples)?.collect())
    }
}

impl DataSplitter for RollingHorizonSplitter {
    fn split(&self, data: &DataFrame) -> std::result::Result<Vec<IndexSplit>, CvGuardError> {
        self.split_all(data.height())
    }
}

/// Lazy fold stream produced by [`RollingHorizonSplitter::split`].
pub struct RollingFolds {
    n_samples: usize,
    batch_unit: usize,
    horizon: usize,
    latest_first: bool,
    next_start: Option<usize>,
    fold_num: usize,
}

impl Iterator for RollingFolds {
    type Item = IndexSplit;

    fn next(&mut self) -> Option<IndexSplit> {
        let train_start = self.next_start?;
        let train_end = train_start + self.batch_unit;
        let test_end = train_end + self.horizon;

        self.next_start = if self.latest_first {
            // Stop once a full window no longer fits at the front.
            train_start.checked_sub(self.horizon)
        } else if test_end + self.horizon <= self.n_samples {
            Some(train_start + self.horizon)
        } else {
            None
        };

        let fold = IndexSplit {
            fold_num: self.fold_num,
            train_idx: (train_start..train_end).collect(),
            test_idx: (train_end..test_end).collect(),
        };
        self.fold_num += 1;
        Some(fold)
    }
}
