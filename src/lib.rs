//! Range additions over an array followed by a maximum query.
//!
//! Updates are recorded in a difference array ([`RangeAccumulator`]), materialized with a single
//! prefix-sum pass, and indexed by a sparse table ([`SparseTable`]) that answers range maximum
//! queries in O(1).

pub mod input;
pub mod range;
pub mod range_accumulator;
pub mod sparse_table;

pub use crate::input::{InputError, Problem, Update, parse_problem};
pub use crate::range::RangeError;
pub use crate::range_accumulator::{AccumulatorError, RangeAccumulator};
pub use crate::sparse_table::{Idempotent, Max, MaxSparseTable, Min, SparseTable};
use thiserror::Error;
use tracing::{debug, trace};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SolveError {
    #[error("Failed to parse input: {0}")]
    Input(#[from] InputError),

    #[error("In update {index} ({update}): {error}")]
    Update {
        // 1-based, matching the input.
        index: usize,
        update: Update,
        error: AccumulatorError,
    },

    #[error("While materializing the array: {0}")]
    Accumulator(#[from] AccumulatorError),

    #[error("While querying the maximum: {0}")]
    Query(#[from] RangeError),
}

/// Applies all updates to a zero-filled array and returns the final values.
pub fn materialize(problem: &Problem) -> Result<Vec<i64>, SolveError> {
    let mut accumulator = RangeAccumulator::new(problem.len);
    for (i, update) in problem.updates.iter().enumerate() {
        trace!(%update, "applying update");
        accumulator
            .update(update.left, update.right, update.value)
            .map_err(|error| SolveError::Update {
                index: i + 1,
                update: *update,
                error,
            })?;
    }
    Ok(accumulator.finalize()?)
}

/// The maximum element after all updates.
pub fn solve(problem: &Problem) -> Result<i64, SolveError> {
    if problem.len == 0 {
        return Err(InputError::EmptyArray.into());
    }
    let values = materialize(problem)?;
    let table = MaxSparseTable::new(Max, &values);
    let max = table.query(0, values.len() - 1)?;
    debug!(max, "solved");
    Ok(max)
}

pub fn run(input: &str) -> Result<i64, SolveError> {
    solve(&parse_problem(input)?)
}
