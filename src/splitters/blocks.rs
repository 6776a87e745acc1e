use crate::error::{CvGuardError, Result};
use std::ops::Range;

/// Cut `[0, n_samples)` into `n_blocks` contiguous half-open ranges.
///
/// Block sizes are `n_samples / n_blocks`; the last block absorbs the
/// remainder, so sizes differ by at most one unit. Every position lands
/// in exactly one block.
pub fn partition_blocks(n_samples: usize, n_blocks: usize) -> Result<Vec<Range<usize>>> {
    if n_blocks == 0 {
        return Err(CvGuardError::Configuration(
            "n_blocks must be positive".to_string(),
        ));
    }
    if n_samples < n_blocks {
        return Err(CvGuardError::InsufficientData(format!(
            "{} samples cannot fill {} blocks",
            n_samples, n_blocks
        )));
    }

    let block_size = n_samples / n_blocks;
    let mut blocks = Vec::with_capacity(n_blocks);

    for i in 0..n_blocks {
        let start = i * block_size;
        let end = if i < n_blocks - 1 {
            (i + 1) * block_size
        } else {
            n_samples
        };
        blocks.push(start..end);
    }

    Ok(blocks)
}
