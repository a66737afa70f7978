//! Error types for sequence operations.

use thiserror::Error;

/// Errors that can occur during indexed access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IndexError {
    /// The index has no corresponding element.
    ///
    /// Indexed access never clamps; only slicing does.
    #[error("index {index} out of range for sequence of length {len}")]
    OutOfRange {
        /// The requested logical index.
        index: isize,
        /// The length of the sequence at the time of access.
        len: usize,
    },
}

/// Errors that can occur during slicing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SliceError {
    /// The slice step is zero, which selects no direction.
    #[error("slice step cannot be zero")]
    ZeroStep,
}
