use super::base::DataSplitter;
use super::blocks::partition_blocks;
use super::combinations::{binomial, Combinations};
use super::embargo::apply_embargo;
use super::purge::{apply_purge, PurgeStrategy};
use super::types::IndexSplit;
use crate::config::{ConfigSection, CpcvConfig};
use crate::data::{has_barrier_columns, intervals_from_dataframe, LabelInterval};
use crate::error::{CvGuardError, Result};
use polars::prelude::*;
use rayon::prelude::*;
use std::ops::Range;

/// Combinatorial purged cross-validation.
///
/// Cuts the dataset into `n_blocks` contiguous blocks, takes every
/// combination of `n_test_blocks` of them as a test set, and purges and
/// embargoes the remaining blocks before they become the train set.
pub struct CpcvSplitter {
    config: CpcvConfig,
}

impl CpcvSplitter {
    /// Fails fast on an invalid block geometry (`n_test_blocks` must be
    /// strictly between 0 and `n_blocks`).
    pub fn new(config: CpcvConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &CpcvConfig {
        &self.config
    }

    /// Number of folds the splitter will emit: C(n_blocks, n_test_blocks).
    pub fn n_folds(&self) -> usize {
        binomial(self.config.n_blocks, self.config.n_test_blocks)
    }

    /// Lazily iterate folds over a dataset of `n_samples` rows.
    ///
    /// With barrier times the purge uses exact label horizons; without
    /// them it falls back to the configured `purge_window`. Fold `i+1`
    /// is not computed until the consumer asks for it; iterating again
    /// recomputes the same sequence.
    pub fn split<'a>(
        &self,
        n_samples: usize,
        barrier_times: Option<&'a [LabelInterval]>,
    ) -> Result<CpcvFolds<'a>> {
        let blocks = partition_blocks(n_samples, self.config.n_blocks)?;

        if let Some(intervals) = barrier_times {
            if intervals.len() != n_samples {
                return Err(CvGuardError::Validation(format!(
                    "Barrier times cover {} rows but dataset has {}",
                    intervals.len(),
                    n_samples
                )));
            }
        }

        log::debug!(
            "CPCV split: {} samples, {} blocks, {} test blocks, {} folds",
            n_samples,
            self.config.n_blocks,
            self.config.n_test_blocks,
            self.n_folds()
        );

        Ok(CpcvFolds {
            blocks,
            combos: Combinations::new(self.config.n_blocks, self.config.n_test_blocks),
            barrier_times,
            purge_window: self.config.purge_window,
            embargo_window: self.config.embargo_window,
            fold_num: 0,
        })
    }

    /// Materialize every fold in lexicographic order.
    pub fn split_all(
        &self,
        n_samples: usize,
        barrier_times: Option<&[LabelInterval]>,
    ) -> Result<Vec<IndexSplit>> {
        Ok(self.split(n_samples, barrier_times)?.collect())
    }

    /// Materialize every fold, building them across the rayon pool.
    ///
    /// Each fold is a pure function of the block partition and its test
    /// combination, so folds are independent; output order is still
    /// lexicographic.
    pub fn split_parallel(
        &self,
        n_samples: usize,
        barrier_times: Option<&[LabelInterval]>,
    ) -> Result<Vec<IndexSplit>> {
        let folds = self.split(n_samples, barrier_times)?;
        let blocks = folds.blocks.clone();
        let strategy = folds.strategy();
        let embargo_window = folds.embargo_window;

        let combos: Vec<Vec<usize>> =
            Combinations::new(self.config.n_blocks, self.config.n_test_blocks).collect();

        Ok(combos
            .into_par_iter()
            .enumerate()
            .map(|(fold_num, test_blocks)| {
                build_fold(&blocks, &test_blocks, strategy, embargo_window, fold_num)
            })
            .collect())
    }
}

impl DataSplitter for CpcvSplitter {
    /// Split a DataFrame by position. If the frame carries `t0`/`t1`
    /// datetime columns they drive the purge; otherwise the position
    /// fallback applies.
    fn split(&self, data: &DataFrame) -> std::result::Result<Vec<IndexSplit>, CvGuardError> {
        let n_samples = data.height();
        if has_barrier_columns(data) {
            let intervals = intervals_from_dataframe(data)?;
            self.split_all(n_samples, Some(&intervals))
        } else {
            self.split_all(n_samples, None)
        }
    }
}

/// Lazy fold stream produced by [`CpcvSplitter::split`].
pub struct CpcvFolds<'a> {
    blocks: Vec<Range<usize>>,
    combos: Combinations,
    barrier_times: Option<&'a [LabelInterval]>,
    purge_window: usize,
    embargo_window: usize,
    fold_num: usize,
}

impl<'a> CpcvFolds<'a> {
    fn strategy(&self) -> PurgeStrategy<'a> {
        match self.barrier_times {
            Some(intervals) => PurgeStrategy::BarrierTimes(intervals),
            None => PurgeStrategy::PositionWindow(self.purge_window),
        }
    }
}

impl<'a> Iterator for CpcvFolds<'a> {
    type Item = IndexSplit;

    fn next(&mut self) -> Option<IndexSplit> {
        let test_blocks = self.combos.next()?;
        let fold = build_fold(
            &self.blocks,
            &test_blocks,
            self.strategy(),
            self.embargo_window,
            self.fold_num,
        );
        self.fold_num += 1;
        Some(fold)
    }
}

fn build_fold(
    blocks: &[Range<usize>],
    test_blocks: &[usize],
    strategy: PurgeStrategy<'_>,
    embargo_window: usize,
    fold_num: usize,
) -> IndexSplit {
    // test_blocks is sorted ascending (lexicographic enumeration), so
    // concatenating in enumeration order keeps positions ascending.
    let test_idx: Vec<usize> = test_blocks
        .iter()
        .flat_map(|&b| blocks[b].clone())
        .collect();

    let train_idx: Vec<usize> = (0..blocks.len())
        .filter(|b| test_blocks.binary_search(b).is_err())
        .flat_map(|b| blocks[b].clone())
        .collect();

    let train_idx = apply_purge(strategy, &train_idx, &test_idx);
    let train_idx = apply_embargo(&train_idx, &test_idx, embargo_window);

    if train_idx.is_empty() {
        log::warn!("Fold {}: train set empty after purge/embargo", fold_num);
    }

    IndexSplit {
        fold_num,
        train_idx,
        test_idx,
    }
}
