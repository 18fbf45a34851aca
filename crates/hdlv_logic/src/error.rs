//! Error types for scalar logic value construction and conversion.

/// Errors that can occur when constructing or converting a scalar logic value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LogicError {
    /// The input is not in the literal table of the target logic type.
    #[error("{literal:?} is not a valid {kind} literal")]
    InvalidLiteral {
        /// Name of the logic type that rejected the literal.
        kind: &'static str,
        /// The offending literal, rendered as text.
        literal: String,
    },

    /// The value has no boolean meaning (only driven 0 and 1 do).
    #[error("'{value}' is not convertible to bool")]
    NotBoolConvertible {
        /// Display character of the unconvertible state.
        value: char,
    },

    /// The value has no integer meaning (only driven 0 and 1 do).
    #[error("'{value}' is not convertible to int")]
    NotIntConvertible {
        /// Display character of the unconvertible state.
        value: char,
    },
}
