/// Drop train rows inside the cooldown window right after the test
/// block. Rows before the test block are untouched; the embargo only
/// protects the period after test, purging handles the period before.
///
/// A row at exactly `test_end + embargo_window` is still dropped; the
/// retain condition past the test block is strict.
pub fn apply_embargo(train_idx: &[usize], test_idx: &[usize], embargo_window: usize) -> Vec<usize> {
    let (test_start, test_end) = match (test_idx.iter().min(), test_idx.iter().max()) {
        (Some(&start), Some(&end)) => (start, end),
        _ => return train_idx.to_vec(),
    };
    let embargo_threshold = test_end + embargo_window;

    train_idx
        .iter()
        .copied()
        .filter(|&p| p < test_start || p > embargo_threshold)
        .collect()
}
