use crate::range::{RangeError, check_inclusive};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AccumulatorError {
    #[error("{0}")]
    Range(#[from] RangeError),

    #[error("Integer overflow at index {index}")]
    Overflow { index: usize },
}

/// Applies range additions in O(1) each by recording them in a difference array, and
/// materializes the result with a single prefix-sum pass.
#[derive(Clone, Debug)]
pub struct RangeAccumulator {
    values: Vec<i64>,
    // The amount pending for element `i` is the sum of `deltas[..=i]`. Partial sums of `i64`
    // updates only need to fit once added to a base value, so they are kept wide.
    deltas: Vec<i128>,
}

impl RangeAccumulator {
    pub fn new(len: usize) -> Self {
        Self::from_values(vec![0; len])
    }

    pub fn from_values(values: Vec<i64>) -> Self {
        Self {
            deltas: vec![0; values.len()],
            values,
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Adds `value` to every element in `left..=right`.
    ///
    /// On error, the accumulator is left unchanged. Overflow is only detected by
    /// [`finalize`](Self::finalize), once final values are known.
    pub fn update(
        &mut self,
        left: usize,
        right: usize,
        value: i64,
    ) -> Result<(), AccumulatorError> {
        check_inclusive(left, right, self.len())?;

        // Cannot overflow: it would take more than 2^64 updates.
        self.deltas[left] += i128::from(value);
        // A range touching the last element has no closing delta.
        if let Some(delta) = self.deltas.get_mut(right + 1) {
            *delta -= i128::from(value);
        }
        Ok(())
    }

    /// Folds the pending deltas into the base values and returns the final array.
    ///
    /// Fails with [`AccumulatorError::Overflow`] at the first element whose final value does not
    /// fit in `i64`.
    pub fn finalize(self) -> Result<Vec<i64>, AccumulatorError> {
        let Self { mut values, deltas } = self;
        debug!(len = values.len(), "finalizing range accumulator");

        let mut running: i128 = 0;
        for (index, (value, delta)) in values.iter_mut().zip(deltas).enumerate() {
            running += delta;
            *value = i64::try_from(i128::from(*value) + running)
                .map_err(|_| AccumulatorError::Overflow { index })?;
        }
        Ok(values)
    }
}
