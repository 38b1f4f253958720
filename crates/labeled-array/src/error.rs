//! Error types for labeled-array operations.

use thiserror::Error;

/// Result type for labeled-array operations.
pub type Result<T> = std::result::Result<T, LabeledArrayError>;

/// Errors that can occur while building or accessing a labeled array.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LabeledArrayError {
    /// Labels along a single axis must be pairwise distinct
    #[error("Duplicated label '{label}' on axis {axis}")]
    DuplicatedLabel { axis: usize, label: String },

    /// Key length (or array rank) does not match the container rank
    #[error("Expected dimension: {expected}, but {actual} dimensions are given")]
    WrongDimension { expected: usize, actual: usize },

    /// Replacement array has the right rank but a different shape
    #[error("Expected shape {expected:?}, got {actual:?}")]
    WrongShape {
        expected: Vec<usize>,
        actual: Vec<usize>,
    },

    /// Label is not declared on the given axis
    #[error("Unknown label '{label}' on axis {axis}")]
    UnknownLabel { axis: usize, label: String },

    /// Operation is intentionally not supported
    #[error("Operation not supported: {0}")]
    Unsupported(&'static str),

    /// Source of a sparse conversion is already sparse
    #[error("Source is already a sparse labeled array")]
    AlreadySparse,

    /// Label sets cannot be inferred from an empty mapping
    #[error("Cannot infer axis labels from an empty mapping")]
    EmptyMapping,

    /// Integer index outside the storage shape
    #[error("Index {index:?} out of bounds for shape {shape:?}")]
    IndexOutOfBounds {
        index: Vec<usize>,
        shape: Vec<usize>,
    },

    /// Number of values does not match the shape product
    #[error("Expected {expected} values for the given shape, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// Density for random sparse generation must lie in [0, 1]
    #[error("Density must be within [0, 1], got {0}")]
    InvalidDensity(f64),
}
