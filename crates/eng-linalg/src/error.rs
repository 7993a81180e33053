use thiserror::Error;

/// Error returned when a runtime-sized sequence is converted to a fixed-size type of a different
/// dimension.
///
/// Operations between [`Vector`][crate::Vector]s and [`Matrix`][crate::Matrix]es never produce
/// this error, since their dimensions are part of the type. It only occurs at the boundary to
/// dynamically sized data, eg. when converting a slice with [`TryFrom`].
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("dimension mismatch: expected {expected} elements, got {actual}")]
pub struct DimensionMismatch {
    /// The number of elements the target type holds.
    pub expected: usize,
    /// The number of elements that were supplied.
    pub actual: usize,
}
