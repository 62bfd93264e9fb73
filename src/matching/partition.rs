//! Splitting the reference collection into per-worker ranges.

use std::ops::Range;

use crate::core::types::MapError;
use crate::utils::validation::validate_worker_count;

/// Half-open interval `[start, end)` of reference indices handled by one worker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkRange {
    pub start: usize,
    pub end: usize,
}

impl WorkRange {
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Reference indices covered by this range, ascending
    #[must_use]
    pub const fn indices(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// Partition `total` items into exactly `workers` contiguous ranges.
///
/// Every range holds `total / workers` items and the first
/// `total % workers` ranges hold one more. Ranges are returned in ascending
/// order, cover `[0, total)` without gaps, and may be empty when there are
/// fewer items than workers. The layout depends only on the two arguments.
///
/// # Examples
///
/// ```
/// use map_strings::matching::partition::{partition, WorkRange};
///
/// let ranges = partition(7, 3).unwrap();
/// assert_eq!(
///     ranges,
///     vec![WorkRange::new(0, 3), WorkRange::new(3, 5), WorkRange::new(5, 7)]
/// );
/// ```
///
/// # Errors
///
/// Returns `MapError::Config` if `workers` is zero.
pub fn partition(total: usize, workers: usize) -> Result<Vec<WorkRange>, MapError> {
    validate_worker_count(workers)?;

    let per_worker = total / workers;
    let num_big = total % workers;

    let mut ranges = Vec::with_capacity(workers);
    let mut start = 0;
    for worker_idx in 0..workers {
        let size = if worker_idx < num_big {
            per_worker + 1
        } else {
            per_worker
        };
        ranges.push(WorkRange::new(start, start + size));
        start += size;
    }

    debug_assert_eq!(start, total);
    Ok(ranges)
}
