//! IEEE 1164 nine-state logic values with truth-table-based operators.

use crate::error::LogicError;
use crate::logic::Logic;
use crate::value::LogicValue;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{BitAnd, BitOr, BitXor, Not};

/// A single 9-state logic value following the IEEE 1164 standard.
///
/// Beyond the four states of [`Logic`], this type keeps the drive-strength
/// states distinguishable:
/// - `U` — uninitialized
/// - `X` — forcing unknown
/// - `Zero` / `One` — driven (forcing) 0 and 1
/// - `Z` — high-impedance
/// - `W` — weak unknown
/// - `L` / `H` — weak 0 and weak 1
/// - `DontCare` — don't care (`-`)
///
/// Weak states resolve like their strong counterparts under the bitwise
/// operators and only differ in display. Variants are declared in IEEE 1164
/// order so their discriminants index the truth tables directly.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[repr(u8)]
pub enum StdLogic {
    /// Uninitialized.
    U = 0,
    /// Forcing unknown.
    X = 1,
    /// Driven logic low (0).
    Zero = 2,
    /// Driven logic high (1).
    One = 3,
    /// High-impedance (tri-state).
    Z = 4,
    /// Weak unknown.
    W = 5,
    /// Weak logic low.
    L = 6,
    /// Weak logic high.
    H = 7,
    /// Don't care (`-`).
    DontCare = 8,
}

use StdLogic::{DontCare, One, Zero, H, L, U, W, X, Z};

/// IEEE 1164 `and` resolution. Rows are `self`, columns are `rhs`, both in
/// declaration order. 0 (and weak 0) dominates; `U` wins over everything a
/// dominant 0 does not decide.
const AND_TABLE: [[StdLogic; 9]; 9] = [
    //  U     X     0     1     Z     W     L     H     -
    [U, U, Zero, U, U, U, Zero, U, U],             // U
    [U, X, Zero, X, X, X, Zero, X, X],             // X
    [Zero; 9],                                     // 0
    [U, X, Zero, One, X, X, Zero, One, X],         // 1
    [U, X, Zero, X, X, X, Zero, X, X],             // Z
    [U, X, Zero, X, X, X, Zero, X, X],             // W
    [Zero; 9],                                     // L
    [U, X, Zero, One, X, X, Zero, One, X],         // H
    [U, X, Zero, X, X, X, Zero, X, X],             // -
];

/// IEEE 1164 `or` resolution. 1 (and weak 1) dominates.
const OR_TABLE: [[StdLogic; 9]; 9] = [
    //  U     X     0     1     Z     W     L     H     -
    [U, U, U, One, U, U, U, One, U],               // U
    [U, X, X, One, X, X, X, One, X],               // X
    [U, X, Zero, One, X, X, Zero, One, X],         // 0
    [One; 9],                                      // 1
    [U, X, X, One, X, X, X, One, X],               // Z
    [U, X, X, One, X, X, X, One, X],               // W
    [U, X, Zero, One, X, X, Zero, One, X],         // L
    [One; 9],                                      // H
    [U, X, X, One, X, X, X, One, X],               // -
];

/// IEEE 1164 `xor` resolution. Nothing dominates; any undecided operand
/// poisons the result.
const XOR_TABLE: [[StdLogic; 9]; 9] = [
    //  U     X     0     1     Z     W     L     H     -
    [U; 9],                                        // U
    [U, X, X, X, X, X, X, X, X],                   // X
    [U, X, Zero, One, X, X, Zero, One, X],         // 0
    [U, X, One, Zero, X, X, One, Zero, X],         // 1
    [U, X, X, X, X, X, X, X, X],                   // Z
    [U, X, X, X, X, X, X, X, X],                   // W
    [U, X, Zero, One, X, X, Zero, One, X],         // L
    [U, X, One, Zero, X, X, One, Zero, X],         // H
    [U, X, X, X, X, X, X, X, X],                   // -
];

/// IEEE 1164 `not`: inversion of anything that is not a driven or weak 0/1
/// yields `X` (or stays `U`).
const NOT_TABLE: [StdLogic; 9] = [U, X, One, Zero, X, X, One, Zero, X];

impl StdLogic {
    /// Converts a character to a [`StdLogic`] value.
    ///
    /// Accepts the full IEEE 1164 alphabet in either case:
    /// `U`, `X`, `0`, `1`, `Z`, `W`, `L`, `H`, and `-`.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'u' | 'U' => Some(U),
            'x' | 'X' => Some(X),
            '0' => Some(Zero),
            '1' => Some(One),
            'z' | 'Z' => Some(Z),
            'w' | 'W' => Some(W),
            'l' | 'L' => Some(L),
            'h' | 'H' => Some(H),
            '-' => Some(DontCare),
            _ => None,
        }
    }

    /// Collapses this value to the 4-state subset.
    ///
    /// Weak values map to their strong counterparts (`L` → 0, `H` → 1,
    /// `W` → `X`); `U` and `-` map to `X`; `Z` stays `Z`.
    pub fn collapse(self) -> Logic {
        match self {
            Zero | L => Logic::Zero,
            One | H => Logic::One,
            U | X | W | DontCare => Logic::X,
            Z => Logic::Z,
        }
    }
}

/// The uninitialized state `U`, matching VHDL's default for `std_logic`.
impl Default for StdLogic {
    fn default() -> Self {
        U
    }
}

impl fmt::Display for StdLogic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = match self {
            U => 'U',
            X => 'X',
            Zero => '0',
            One => '1',
            Z => 'Z',
            W => 'W',
            L => 'L',
            H => 'H',
            DontCare => '-',
        };
        write!(f, "{c}")
    }
}

impl BitAnd for StdLogic {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        AND_TABLE[self as usize][rhs as usize]
    }
}

impl BitOr for StdLogic {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        OR_TABLE[self as usize][rhs as usize]
    }
}

impl BitXor for StdLogic {
    type Output = Self;

    fn bitxor(self, rhs: Self) -> Self {
        XOR_TABLE[self as usize][rhs as usize]
    }
}

impl Not for StdLogic {
    type Output = Self;

    fn not(self) -> Self {
        NOT_TABLE[self as usize]
    }
}

impl BitAnd<bool> for StdLogic {
    type Output = Self;

    fn bitand(self, rhs: bool) -> Self {
        self & StdLogic::from(rhs)
    }
}

impl BitOr<bool> for StdLogic {
    type Output = Self;

    fn bitor(self, rhs: bool) -> Self {
        self | StdLogic::from(rhs)
    }
}

impl BitXor<bool> for StdLogic {
    type Output = Self;

    fn bitxor(self, rhs: bool) -> Self {
        self ^ StdLogic::from(rhs)
    }
}

impl From<bool> for StdLogic {
    fn from(b: bool) -> Self {
        if b {
            One
        } else {
            Zero
        }
    }
}

impl TryFrom<u8> for StdLogic {
    type Error = LogicError;

    fn try_from(n: u8) -> Result<Self, LogicError> {
        match n {
            0 => Ok(Zero),
            1 => Ok(One),
            _ => Err(LogicError::InvalidLiteral {
                kind: Self::NAME,
                literal: n.to_string(),
            }),
        }
    }
}

impl TryFrom<char> for StdLogic {
    type Error = LogicError;

    fn try_from(c: char) -> Result<Self, LogicError> {
        Self::try_from_char(c)
    }
}

impl LogicValue for StdLogic {
    const NAME: &'static str = "StdLogic";

    fn try_from_char(c: char) -> Result<Self, LogicError> {
        Self::from_char(c).ok_or_else(|| LogicError::InvalidLiteral {
            kind: Self::NAME,
            literal: c.to_string(),
        })
    }

    fn to_char(self) -> char {
        match self {
            U => 'U',
            X => 'X',
            Zero => '0',
            One => '1',
            Z => 'Z',
            W => 'W',
            L => 'L',
            H => 'H',
            DontCare => '-',
        }
    }

    fn from_bool(b: bool) -> Self {
        Self::from(b)
    }

    fn to_bool(self) -> Result<bool, LogicError> {
        match self {
            Zero => Ok(false),
            One => Ok(true),
            other => Err(LogicError::NotBoolConvertible {
                value: other.to_char(),
            }),
        }
    }
}
