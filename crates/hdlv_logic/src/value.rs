//! The capability trait shared by all scalar logic types.

use crate::error::LogicError;
use std::fmt;
use std::hash::Hash;
use std::ops::{BitAnd, BitOr, BitXor, Not};

/// A scalar value with a total bitwise algebra over a finite state set.
///
/// Implemented by [`StdLogic`](crate::StdLogic) (9 states),
/// [`Logic`](crate::Logic) (4 states), and [`Bit`](crate::Bit) (2 states).
/// Each refinement is a validation layer over a smaller state set, not new
/// behavior: the operators of every implementor are closed over its own
/// states. Array types in `hdlv_array` are generic over this trait.
pub trait LogicValue:
    Copy
    + Eq
    + Hash
    + Default
    + fmt::Debug
    + fmt::Display
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + BitXor<Output = Self>
    + Not<Output = Self>
{
    /// Type name used in error messages, e.g. `"Logic"`.
    const NAME: &'static str;

    /// Converts a character from the literal table to a value.
    ///
    /// Characters outside the implementor's table fail with
    /// [`LogicError::InvalidLiteral`].
    fn try_from_char(c: char) -> Result<Self, LogicError>;

    /// Returns the canonical display character of this value.
    fn to_char(self) -> char;

    /// Converts a boolean to a driven 0 or 1.
    fn from_bool(b: bool) -> Self;

    /// Converts to a boolean, if the state is a driven 0 or 1.
    ///
    /// All other states fail with [`LogicError::NotBoolConvertible`].
    fn to_bool(self) -> Result<bool, LogicError>;

    /// Converts to an integer 0 or 1, if the state is a driven 0 or 1.
    ///
    /// All other states fail with [`LogicError::NotIntConvertible`].
    fn to_int(self) -> Result<u8, LogicError> {
        match self.to_bool() {
            Ok(b) => Ok(u8::from(b)),
            Err(_) => Err(LogicError::NotIntConvertible {
                value: self.to_char(),
            }),
        }
    }
}
