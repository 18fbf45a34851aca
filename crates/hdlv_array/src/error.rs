//! Error types for range and array operations.
//!
//! Every failure here is a programming or input error surfaced immediately
//! to the caller; nothing is recovered internally and no operation leaves an
//! array partially mutated (validation happens before any write).

use crate::range::Direction;
use hdlv_logic::LogicError;

/// Errors that can occur constructing or operating on ranges and arrays.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ArrayError {
    /// A direction spelling other than `to` or `downto` was given.
    #[error("direction must be 'to' or 'downto', got {spelling:?}")]
    InvalidDirection {
        /// The rejected spelling.
        spelling: String,
    },

    /// The direction inferred from requested sub-bounds disagrees with the
    /// direction of the parent range or array.
    #[error("slice direction {requested} does not match parent direction {actual}")]
    DirectionMismatch {
        /// Direction inferred from the requested bounds.
        requested: Direction,
        /// Direction of the parent range or array.
        actual: Direction,
    },

    /// An index is not spanned by the range (every index is out of bounds
    /// for a null range).
    #[error("index {index} out of bounds for range ({left} {direction} {right})")]
    IndexOutOfBounds {
        /// The rejected index.
        index: i64,
        /// Left bound of the range.
        left: i64,
        /// Direction of the range.
        direction: Direction,
        /// Right bound of the range.
        right: i64,
    },

    /// A supplied value sequence does not have the length of the target span.
    #[error("value of length {actual} does not fit in span of length {expected}")]
    LengthMismatch {
        /// Length of the target span.
        expected: usize,
        /// Length of the supplied value sequence.
        actual: usize,
    },

    /// A step other than 1 or -1 was requested.
    #[error("step must be 1 or -1, got {step}")]
    UnsupportedStep {
        /// The rejected step.
        step: i64,
    },

    /// A numeric value does not fit the target width and signedness.
    #[error("{kind} value {value} does not fit in {width} bits")]
    ValueOutOfRange {
        /// Either `"unsigned"` or `"signed"`.
        kind: &'static str,
        /// The rejected value, rendered as text.
        value: String,
        /// Bit width of the target span.
        width: usize,
    },

    /// Numeric interpretation was requested on an array containing states
    /// other than driven 0 and 1.
    #[error("array contains non-0/1 values")]
    NotResolvable,

    /// A reduction operator was applied to an empty array.
    #[error("cannot reduce an empty array")]
    EmptyReduction,

    /// A scalar literal failed conversion while filling an array.
    #[error(transparent)]
    Logic(#[from] LogicError),
}
