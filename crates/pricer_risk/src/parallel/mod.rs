//! Rayon-based parallelisation utilities.
//!
//! Every helper here returns results in input order, so reductions performed
//! afterwards are sequential and bit-identical regardless of thread count.

use rayon::prelude::*;

/// Batch size for parallel processing.
///
/// Minimum number of items a Rayon task is split down to.
pub const DEFAULT_BATCH_SIZE: usize = 64;

/// Default minimum item count before work is handed to the Rayon pool.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 256;

/// Configuration for parallel execution.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParallelConfig {
    /// Minimum items per Rayon task
    pub batch_size: usize,
    /// Minimum items before using parallelism
    pub parallel_threshold: usize,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

impl ParallelConfig {
    /// Creates a new parallel configuration.
    pub fn new(batch_size: usize, parallel_threshold: usize) -> Self {
        Self {
            batch_size: batch_size.max(1),
            parallel_threshold,
        }
    }

    /// Configuration that never leaves the calling thread.
    pub fn serial() -> Self {
        Self::new(DEFAULT_BATCH_SIZE, usize::MAX)
    }

    /// Returns whether to use parallel processing for the given item count.
    #[inline]
    pub fn should_parallelize(&self, n_items: usize) -> bool {
        n_items >= self.parallel_threshold
    }
}

/// Maps each item through `mapper`, in parallel above the threshold.
///
/// The output preserves the order of `items`.
pub fn parallel_map<T, R, F>(items: &[T], config: &ParallelConfig, mapper: F) -> Vec<R>
where
    T: Sync,
    R: Send,
    F: Fn(&T) -> R + Sync + Send,
{
    if config.should_parallelize(items.len()) {
        items
            .par_iter()
            .with_min_len(config.batch_size.max(1))
            .map(mapper)
            .collect()
    } else {
        items.iter().map(mapper).collect()
    }
}

/// Maps each index in `0..n` through `mapper`, in parallel above the threshold.
///
/// The output preserves index order.
pub fn map_indices<R, F>(n: usize, config: &ParallelConfig, mapper: F) -> Vec<R>
where
    R: Send,
    F: Fn(usize) -> R + Sync + Send,
{
    if config.should_parallelize(n) {
        (0..n)
            .into_par_iter()
            .with_min_len(config.batch_size.max(1))
            .map(mapper)
            .collect()
    } else {
        (0..n).map(mapper).collect()
    }
}
