/// Single fold: train and test positions into the caller's dataset.
///
/// Positions are concatenated in block order and never re-sorted; the
/// caller projects them back onto actual rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexSplit {
    pub fold_num: usize,
    pub train_idx: Vec<usize>,
    pub test_idx: Vec<usize>,
}
