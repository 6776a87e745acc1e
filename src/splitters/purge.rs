use crate::data::LabelInterval;

/// How train rows overlapping the test period are detected.
///
/// With barrier times available the label horizon of every row is known
/// exactly; without them a fixed position window approximates it.
#[derive(Debug, Clone, Copy)]
pub enum PurgeStrategy<'a> {
    /// Per-row entry/exit times, aligned 1:1 with dataset positions.
    /// The slice must cover every train/test position passed to
    /// [`apply_purge`]; indexing past it panics. `CpcvSplitter::split`
    /// validates this alignment against the dataset length.
    BarrierTimes(&'a [LabelInterval]),
    /// Assume every label horizon spans at most this many positions.
    PositionWindow(usize),
}

/// Drop candidate train rows whose label could only be known by peeking
/// into the test period. Never adds positions; may return an empty set.
///
/// With [`PurgeStrategy::BarrierTimes`] every position in `train_idx`
/// and `test_idx` must index into the intervals slice.
pub fn apply_purge(
    strategy: PurgeStrategy<'_>,
    train_idx: &[usize],
    test_idx: &[usize],
) -> Vec<usize> {
    match strategy {
        PurgeStrategy::BarrierTimes(intervals) => {
            purge_with_barrier_times(intervals, train_idx, test_idx)
        }
        PurgeStrategy::PositionWindow(purge_window) => {
            purge_with_position_window(purge_window, train_idx, test_idx)
        }
    }
}

/// Retain a train row only if its exit time does not postdate the
/// earliest test entry. The tie `t1 == test_entry_min` is kept: that
/// label is fully known the instant the test period starts.
fn purge_with_barrier_times(
    intervals: &[LabelInterval],
    train_idx: &[usize],
    test_idx: &[usize],
) -> Vec<usize> {
    let test_entry_min = match test_idx.iter().map(|&p| intervals[p].t0).min() {
        Some(t) => t,
        None => return train_idx.to_vec(),
    };

    train_idx
        .iter()
        .copied()
        .filter(|&p| intervals[p].t1 <= test_entry_min)
        .collect()
}

/// Fallback when no barrier times exist: keep only rows more than
/// `purge_window` positions before the test start.
fn purge_with_position_window(
    purge_window: usize,
    train_idx: &[usize],
    test_idx: &[usize],
) -> Vec<usize> {
    let test_start = match test_idx.iter().min() {
        Some(&p) => p,
        None => return train_idx.to_vec(),
    };
    let purge_threshold = test_start.saturating_sub(purge_window);

    train_idx
        .iter()
        .copied()
        .filter(|&p| p < purge_threshold)
        .collect()
}
