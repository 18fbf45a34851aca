//! Four-state logic values with truth-table-based operators.

use crate::error::LogicError;
use crate::value::LogicValue;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{BitAnd, BitOr, BitXor, Not};

/// A single 4-state logic value.
///
/// The four states represent:
/// - `Zero` — logic low (driven 0)
/// - `One` — logic high (driven 1)
/// - `X` — unknown or uninitialized value
/// - `Z` — high-impedance (tri-state, not driven)
///
/// The literal table accepts the full 9-state alphabet and collapses the
/// drive-strength states at construction: weak 0/1 (`L`/`H`) become `Zero`
/// and `One`, while `U`, `W`, and `-` all become `X`. Use
/// [`StdLogic`](crate::StdLogic) to keep them distinguishable.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[repr(u8)]
pub enum Logic {
    /// Logic low (0).
    Zero = 0,
    /// Logic high (1).
    One = 1,
    /// Unknown or uninitialized.
    X = 2,
    /// High-impedance (tri-state).
    Z = 3,
}

impl Logic {
    /// Converts a character to a [`Logic`] value.
    ///
    /// Accepts '0'/'L'/'l', '1'/'H'/'h', 'x'/'X'/'u'/'U'/'w'/'W'/'-',
    /// and 'z'/'Z', collapsing weak states to their strong counterparts.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '0' | 'l' | 'L' => Some(Logic::Zero),
            '1' | 'h' | 'H' => Some(Logic::One),
            'x' | 'X' | 'u' | 'U' | 'w' | 'W' | '-' => Some(Logic::X),
            'z' | 'Z' => Some(Logic::Z),
            _ => None,
        }
    }
}

/// The unknown state `X`, matching the uninitialized default of the
/// collapsed `U`.
impl Default for Logic {
    fn default() -> Self {
        Logic::X
    }
}

impl fmt::Display for Logic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Logic::Zero => write!(f, "0"),
            Logic::One => write!(f, "1"),
            Logic::X => write!(f, "X"),
            Logic::Z => write!(f, "Z"),
        }
    }
}

/// Four-state AND truth table:
/// ```text
///     0  1  X  Z
/// 0 | 0  0  0  0
/// 1 | 0  1  X  X
/// X | 0  X  X  X
/// Z | 0  X  X  X
/// ```
impl BitAnd for Logic {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        use Logic::*;
        match (self, rhs) {
            (Zero, _) | (_, Zero) => Zero,
            (One, One) => One,
            _ => X,
        }
    }
}

/// Four-state OR truth table:
/// ```text
///     0  1  X  Z
/// 0 | 0  1  X  X
/// 1 | 1  1  1  1
/// X | X  1  X  X
/// Z | X  1  X  X
/// ```
impl BitOr for Logic {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        use Logic::*;
        match (self, rhs) {
            (One, _) | (_, One) => One,
            (Zero, Zero) => Zero,
            _ => X,
        }
    }
}

/// Four-state XOR truth table:
/// ```text
///     0  1  X  Z
/// 0 | 0  1  X  X
/// 1 | 1  0  X  X
/// X | X  X  X  X
/// Z | X  X  X  X
/// ```
impl BitXor for Logic {
    type Output = Self;

    fn bitxor(self, rhs: Self) -> Self {
        use Logic::*;
        match (self, rhs) {
            (Zero, Zero) | (One, One) => Zero,
            (Zero, One) | (One, Zero) => One,
            _ => X,
        }
    }
}

/// Four-state NOT:
/// - `!0 = 1`, `!1 = 0`, `!X = X`, `!Z = X`
impl Not for Logic {
    type Output = Self;

    fn not(self) -> Self {
        use Logic::*;
        match self {
            Zero => One,
            One => Zero,
            X | Z => X,
        }
    }
}

impl BitAnd<bool> for Logic {
    type Output = Self;

    fn bitand(self, rhs: bool) -> Self {
        self & Logic::from(rhs)
    }
}

impl BitOr<bool> for Logic {
    type Output = Self;

    fn bitor(self, rhs: bool) -> Self {
        self | Logic::from(rhs)
    }
}

impl BitXor<bool> for Logic {
    type Output = Self;

    fn bitxor(self, rhs: bool) -> Self {
        self ^ Logic::from(rhs)
    }
}

impl From<bool> for Logic {
    fn from(b: bool) -> Self {
        if b {
            Logic::One
        } else {
            Logic::Zero
        }
    }
}

impl TryFrom<u8> for Logic {
    type Error = LogicError;

    fn try_from(n: u8) -> Result<Self, LogicError> {
        match n {
            0 => Ok(Logic::Zero),
            1 => Ok(Logic::One),
            _ => Err(LogicError::InvalidLiteral {
                kind: Self::NAME,
                literal: n.to_string(),
            }),
        }
    }
}

impl TryFrom<char> for Logic {
    type Error = LogicError;

    fn try_from(c: char) -> Result<Self, LogicError> {
        Self::try_from_char(c)
    }
}

impl LogicValue for Logic {
    const NAME: &'static str = "Logic";

    fn try_from_char(c: char) -> Result<Self, LogicError> {
        Self::from_char(c).ok_or_else(|| LogicError::InvalidLiteral {
            kind: Self::NAME,
            literal: c.to_string(),
        })
    }

    fn to_char(self) -> char {
        match self {
            Logic::Zero => '0',
            Logic::One => '1',
            Logic::X => 'X',
            Logic::Z => 'Z',
        }
    }

    fn from_bool(b: bool) -> Self {
        Self::from(b)
    }

    fn to_bool(self) -> Result<bool, LogicError> {
        match self {
            Logic::Zero => Ok(false),
            Logic::One => Ok(true),
            other => Err(LogicError::NotBoolConvertible {
                value: other.to_char(),
            }),
        }
    }
}
