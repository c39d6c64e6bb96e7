//! Static range queries for idempotent operators.
//!
//! Construction takes O(n log n) time and memory. A query combines two power-of-two blocks that
//! together cover the range; they may overlap, which is only sound because the operator is
//! idempotent.

use crate::range::{RangeError, check_inclusive};
use tracing::debug;

/// An associative, commutative operator with `combine(x, x) == x`.
pub trait Idempotent<T> {
    fn combine(&self, a: &T, b: &T) -> T;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct Max;

impl<T: Ord + Clone> Idempotent<T> for Max {
    fn combine(&self, a: &T, b: &T) -> T {
        a.max(b).clone()
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct Min;

impl<T: Ord + Clone> Idempotent<T> for Min {
    fn combine(&self, a: &T, b: &T) -> T {
        a.min(b).clone()
    }
}

pub type MaxSparseTable<T> = SparseTable<T, Max>;

#[derive(Clone, Debug)]
pub struct SparseTable<T, Op> {
    op: Op,
    // `levels[j][i]` aggregates `2^j` elements starting at `i`, so level `j` has `len - 2^j + 1`
    // entries.
    levels: Vec<Vec<T>>,
}

impl<T: Clone, Op: Idempotent<T>> SparseTable<T, Op> {
    pub fn new(op: Op, values: &[T]) -> Self {
        let len = values.len();
        let n_levels = bit_length(len);
        let mut levels: Vec<Vec<T>> = Vec::with_capacity(n_levels);

        if n_levels > 0 {
            levels.push(values.to_vec());
        }
        for level in 1..n_levels {
            let half = 1 << (level - 1);
            let prev = &levels[level - 1];
            let next: Vec<T> = (0..=len - (1 << level))
                .map(|i| op.combine(&prev[i], &prev[i + half]))
                .collect();
            levels.push(next);
        }

        debug!(len, levels = n_levels, "built sparse table");
        Self { op, levels }
    }

    pub fn len(&self) -> usize {
        self.levels.first().map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Number of levels, i.e. `floor(log2(len)) + 1`, or zero for an empty table.
    pub fn levels(&self) -> usize {
        self.levels.len()
    }

    /// The aggregate of the `2^level` elements starting at `start`, if that block fits.
    pub fn block(&self, start: usize, level: usize) -> Option<&T> {
        self.levels.get(level)?.get(start)
    }

    /// Aggregates `left..=right`.
    pub fn query(&self, left: usize, right: usize) -> Result<T, RangeError> {
        check_inclusive(left, right, self.len())?;
        let level = floor_log2(right - left + 1);
        let blocks = &self.levels[level];
        Ok(self
            .op
            .combine(&blocks[left], &blocks[right + 1 - (1 << level)]))
    }
}

fn bit_length(n: usize) -> usize {
    (usize::BITS - n.leading_zeros()) as usize
}

// `n` must be non-zero.
fn floor_log2(n: usize) -> usize {
    n.ilog2() as usize
}
