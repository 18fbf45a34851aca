//! Two-state bit values.

use crate::error::LogicError;
use crate::logic::Logic;
use crate::std_logic::StdLogic;
use crate::value::LogicValue;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{BitAnd, BitOr, BitXor, Not};

/// A single 2-state bit, the strictest refinement of the logic scalars.
///
/// Only the driven states survive here; every metavalue (`X`, `Z`, weak
/// states) is rejected at construction with
/// [`LogicError::InvalidLiteral`]. In exchange the bitwise algebra is the
/// ordinary boolean one and conversions to `bool`/`int` are total.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[repr(u8)]
pub enum Bit {
    /// Logic low (0).
    Zero = 0,
    /// Logic high (1).
    One = 1,
}

impl Bit {
    /// Converts a character to a [`Bit`] value. Accepts only '0' and '1'.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '0' => Some(Bit::Zero),
            '1' => Some(Bit::One),
            _ => None,
        }
    }
}

/// The low state, matching VHDL's `'0'` default for `bit`.
impl Default for Bit {
    fn default() -> Self {
        Bit::Zero
    }
}

impl fmt::Display for Bit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bit::Zero => write!(f, "0"),
            Bit::One => write!(f, "1"),
        }
    }
}

impl BitAnd for Bit {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Bit::from(self == Bit::One && rhs == Bit::One)
    }
}

impl BitOr for Bit {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Bit::from(self == Bit::One || rhs == Bit::One)
    }
}

impl BitXor for Bit {
    type Output = Self;

    fn bitxor(self, rhs: Self) -> Self {
        Bit::from(self != rhs)
    }
}

impl Not for Bit {
    type Output = Self;

    fn not(self) -> Self {
        match self {
            Bit::Zero => Bit::One,
            Bit::One => Bit::Zero,
        }
    }
}

impl BitAnd<bool> for Bit {
    type Output = Self;

    fn bitand(self, rhs: bool) -> Self {
        self & Bit::from(rhs)
    }
}

impl BitOr<bool> for Bit {
    type Output = Self;

    fn bitor(self, rhs: bool) -> Self {
        self | Bit::from(rhs)
    }
}

impl BitXor<bool> for Bit {
    type Output = Self;

    fn bitxor(self, rhs: bool) -> Self {
        self ^ Bit::from(rhs)
    }
}

impl From<bool> for Bit {
    fn from(b: bool) -> Self {
        if b {
            Bit::One
        } else {
            Bit::Zero
        }
    }
}

impl TryFrom<u8> for Bit {
    type Error = LogicError;

    fn try_from(n: u8) -> Result<Self, LogicError> {
        match n {
            0 => Ok(Bit::Zero),
            1 => Ok(Bit::One),
            _ => Err(LogicError::InvalidLiteral {
                kind: Self::NAME,
                literal: n.to_string(),
            }),
        }
    }
}

impl TryFrom<char> for Bit {
    type Error = LogicError;

    fn try_from(c: char) -> Result<Self, LogicError> {
        Self::try_from_char(c)
    }
}

/// Widening into the 4-state domain is total.
impl From<Bit> for Logic {
    fn from(b: Bit) -> Self {
        match b {
            Bit::Zero => Logic::Zero,
            Bit::One => Logic::One,
        }
    }
}

/// Widening into the 9-state domain is total.
impl From<Bit> for StdLogic {
    fn from(b: Bit) -> Self {
        match b {
            Bit::Zero => StdLogic::Zero,
            Bit::One => StdLogic::One,
        }
    }
}

/// Widening a 4-state value into the 9-state domain is total.
impl From<Logic> for StdLogic {
    fn from(l: Logic) -> Self {
        match l {
            Logic::Zero => StdLogic::Zero,
            Logic::One => StdLogic::One,
            Logic::X => StdLogic::X,
            Logic::Z => StdLogic::Z,
        }
    }
}

/// Collapses a 9-state value to its 4-state counterpart.
impl From<StdLogic> for Logic {
    fn from(s: StdLogic) -> Self {
        s.collapse()
    }
}

/// Narrowing rejects any state that is not a driven 0 or 1.
impl TryFrom<Logic> for Bit {
    type Error = LogicError;

    fn try_from(l: Logic) -> Result<Self, LogicError> {
        match l {
            Logic::Zero => Ok(Bit::Zero),
            Logic::One => Ok(Bit::One),
            other => Err(LogicError::InvalidLiteral {
                kind: Self::NAME,
                literal: other.to_char().to_string(),
            }),
        }
    }
}

/// Narrowing rejects any state that is not a driven 0 or 1.
///
/// Weak states are rejected rather than collapsed; collapse to
/// [`Logic`] first if that behavior is wanted.
impl TryFrom<StdLogic> for Bit {
    type Error = LogicError;

    fn try_from(s: StdLogic) -> Result<Self, LogicError> {
        match s {
            StdLogic::Zero => Ok(Bit::Zero),
            StdLogic::One => Ok(Bit::One),
            other => Err(LogicError::InvalidLiteral {
                kind: Self::NAME,
                literal: other.to_char().to_string(),
            }),
        }
    }
}

impl LogicValue for Bit {
    const NAME: &'static str = "Bit";

    fn try_from_char(c: char) -> Result<Self, LogicError> {
        Self::from_char(c).ok_or_else(|| LogicError::InvalidLiteral {
            kind: Self::NAME,
            literal: c.to_string(),
        })
    }

    fn to_char(self) -> char {
        match self {
            Bit::Zero => '0',
            Bit::One => '1',
        }
    }

    fn from_bool(b: bool) -> Self {
        Self::from(b)
    }

    fn to_bool(self) -> Result<bool, LogicError> {
        Ok(self == Bit::One)
    }
}
