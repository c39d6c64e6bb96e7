use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RangeError {
    #[error("Range [{left}, {right}] is reversed")]
    Reversed { left: usize, right: usize },

    #[error("Index {index} is out of bounds for length {len}")]
    OutOfBounds { index: usize, len: usize },
}

// Accepts `left <= right < len`. Reversal is reported before bounds, so an empty array reports
// `OutOfBounds` for any well-ordered range.
pub fn check_inclusive(left: usize, right: usize, len: usize) -> Result<(), RangeError> {
    if left > right {
        return Err(RangeError::Reversed { left, right });
    }
    if right >= len {
        return Err(RangeError::OutOfBounds { index: right, len });
    }
    Ok(())
}
