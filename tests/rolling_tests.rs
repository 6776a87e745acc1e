use cvguard::config::RollingConfig;
use cvguard::error::CvGuardError;
use cvguard::splitters::RollingHorizonSplitter;

fn rolling(batch_unit: usize, horizon: usize, latest_first: bool) -> RollingHorizonSplitter {
    RollingHorizonSplitter::new(RollingConfig {
        batch_unit,
        horizon,
        latest_first,
    })
    .unwrap()
}

// Scenario: N=210, batch_unit=200, horizon=5, latest first -> 2 folds.
#[test]
fn test_latest_first_anchors_at_newest_row() {
    let folds = rolling(200, 5, true).split_all(210).unwrap();

    assert_eq!(folds.len(), 2);

    assert_eq!(folds[0].train_idx, (5..205).collect::<Vec<_>>());
    assert_eq!(folds[0].test_idx, (205..210).collect::<Vec<_>>());

    assert_eq!(folds[1].train_idx, (0..200).collect::<Vec<_>>());
    assert_eq!(folds[1].test_idx, (200..205).collect::<Vec<_>>());
}

#[test]
fn test_forward_walk_starts_at_zero() {
    let folds = rolling(20, 5, false).split_all(40).unwrap();

    // Starts [0, 5, 10, 15]: last full window is train [15,35) test [35,40).
    assert_eq!(folds.len(), 4);
    assert_eq!(folds[0].train_idx, (0..20).collect::<Vec<_>>());
    assert_eq!(folds[0].test_idx, (20..25).collect::<Vec<_>>());
    assert_eq!(folds[3].train_idx, (15..35).collect::<Vec<_>>());
    assert_eq!(folds[3].test_idx, (35..40).collect::<Vec<_>>());
}

#[test]
fn test_windows_have_no_gap_and_stride_equals_horizon() {
    for latest_first in [false, true] {
        let folds = rolling(30, 7, latest_first).split_all(100).unwrap();
        assert!(!folds.is_empty());

        for fold in &folds {
            assert_eq!(fold.train_idx.len(), 30);
            assert_eq!(fold.test_idx.len(), 7);
            // Test begins exactly where train ends.
            assert_eq!(fold.test_idx[0], fold.train_idx[29] + 1);
        }

        for pair in folds.windows(2) {
            let stride = pair[0].train_idx[0].abs_diff(pair[1].train_idx[0]);
            assert_eq!(stride, 7);
        }
    }
}

#[test]
fn test_exact_single_window() {
    let folds = rolling(200, 5, true).split_all(205).unwrap();
    assert_eq!(folds.len(), 1);
    assert_eq!(folds[0].train_idx, (0..200).collect::<Vec<_>>());
    assert_eq!(folds[0].test_idx, (200..205).collect::<Vec<_>>());
}

#[test]
fn test_insufficient_data_fails_at_split() {
    let splitter = rolling(200, 5, true);
    assert!(matches!(
        splitter.split(204),
        Err(CvGuardError::InsufficientData(_))
    ));
}

#[test]
fn test_zero_width_windows_fail_at_construction() {
    for (batch_unit, horizon) in [(0, 5), (200, 0)] {
        let result = RollingHorizonSplitter::new(RollingConfig {
            batch_unit,
            horizon,
            latest_first: true,
        });
        assert!(matches!(result, Err(CvGuardError::Configuration(_))));
    }
}

#[test]
fn test_fold_numbers_are_sequential() {
    let folds = rolling(10, 2, true).split_all(50).unwrap();
    for (i, fold) in folds.iter().enumerate() {
        assert_eq!(fold.fold_num, i);
    }
}
