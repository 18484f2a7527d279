//! Error types for graycheck-core.

use thiserror::Error;

/// Result type for graycheck-core operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the neighbor graph and the adjacency classifier.
///
/// Every variant describes invalid input. A constellation with fewer than
/// two symbols is not an error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Two labels compared for a transition have different bit widths.
    #[error(
        "invalid input: cannot compare label {left} ({left_width} bits) with {right} ({right_width} bits)"
    )]
    LabelWidthMismatch {
        left: String,
        left_width: u32,
        right: String,
        right_width: u32,
    },

    /// A label value needs more bits than its width allows.
    #[error("invalid input: value {value} does not fit in {width} bits")]
    LabelOverflow { value: u64, width: u32 },

    /// Label width outside `1..=64`.
    #[error("invalid input: label width must be between 1 and 64, got {0}")]
    InvalidWidth(u32),

    /// A label string that is not a non-empty run of `0`/`1`.
    #[error("invalid input: {0:?} is not a bit string")]
    InvalidLabel(String),

    /// Two symbols share the same index.
    #[error("invalid input: duplicate symbol index {0}")]
    DuplicateIndex(u64),

    /// Tolerance is negative or not finite.
    #[error("invalid input: tolerance must be finite and non-negative, got {0}")]
    InvalidTolerance(f64),

    /// A symbol position has a NaN or infinite coordinate.
    #[error("invalid input: symbol {index} has a non-finite position")]
    NonFinitePosition { index: u64 },

    /// Two finite positions are too far apart for their distance to be finite.
    #[error("invalid input: distance between symbols {a} and {b} is not finite")]
    NonFiniteDistance { a: u64, b: u64 },

    /// An edge references a symbol index with no label.
    #[error("invalid input: edge references unknown symbol {0}")]
    UnknownSymbol(u64),
}
