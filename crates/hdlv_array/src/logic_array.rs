//! Bitwise vector operations and numeric conversion for logic-typed arrays.

use crate::array::Array;
use crate::error::ArrayError;
use crate::range::{Direction, Range};
use hdlv_logic::{Bit, Logic, LogicValue, StdLogic};
use std::ops::{BitAnd, BitOr, BitXor, Not};
use std::str::FromStr;

/// An arbitrarily-indexed vector of 9-state [`StdLogic`] values.
pub type StdLogicArray = Array<StdLogic>;

/// An arbitrarily-indexed vector of 4-state [`Logic`] values, the library's
/// primary bit-vector type.
pub type LogicArray = Array<Logic>;

/// An arbitrarily-indexed vector of 2-state [`Bit`] values.
pub type BitArray = Array<Bit>;

/// The canonical result range `1 to n` used by bitwise operations.
fn canonical(len: usize) -> Range {
    Range::with_direction(1, Direction::To, len as i64)
}

impl<T: LogicValue> Array<T> {
    /// Parses a literal string over an explicit range.
    ///
    /// Each character goes through the element type's literal table; the
    /// character count must equal the range's length, else
    /// [`ArrayError::LengthMismatch`].
    pub fn from_str_with_range(range: Range, s: &str) -> Result<Self, ArrayError> {
        let elems = s
            .chars()
            .map(T::try_from_char)
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(range, elems)
    }

    fn zip_with(&self, other: &Self, f: impl Fn(T, T) -> T) -> Result<Self, ArrayError> {
        if self.len() != other.len() {
            return Err(ArrayError::LengthMismatch {
                expected: self.len(),
                actual: other.len(),
            });
        }
        let elems = self
            .iter()
            .zip(other.iter())
            .map(|(&a, &b)| f(a, b))
            .collect();
        Self::new(canonical(self.len()), elems)
    }

    /// Element-wise AND over equal-length arrays.
    ///
    /// Fails with [`ArrayError::LengthMismatch`] on unequal lengths. The
    /// result is re-based to the canonical range `1 to n`; neither
    /// operand's bounds survive.
    pub fn try_and(&self, other: &Self) -> Result<Self, ArrayError> {
        self.zip_with(other, |a, b| a & b)
    }

    /// Element-wise OR over equal-length arrays, re-based to `1 to n`.
    ///
    /// Fails with [`ArrayError::LengthMismatch`] on unequal lengths.
    pub fn try_or(&self, other: &Self) -> Result<Self, ArrayError> {
        self.zip_with(other, |a, b| a | b)
    }

    /// Element-wise XOR over equal-length arrays, re-based to `1 to n`.
    ///
    /// Fails with [`ArrayError::LengthMismatch`] on unequal lengths.
    pub fn try_xor(&self, other: &Self) -> Result<Self, ArrayError> {
        self.zip_with(other, |a, b| a ^ b)
    }

    /// Element-wise NOT, re-based to the canonical range `1 to n`.
    pub fn invert(&self) -> Self {
        let elems = self.iter().map(|&v| !v).collect();
        Self::new(canonical(self.len()), elems).unwrap_or_else(|_| unreachable!())
    }

    /// Concatenates two arrays into a new one over `1 to m+n`, this array's
    /// values followed by `other`'s.
    pub fn concat(&self, other: &Self) -> Self {
        let elems: Vec<T> = self.iter().chain(other.iter()).copied().collect();
        let range = canonical(elems.len());
        Self::new(range, elems).unwrap_or_else(|_| unreachable!())
    }

    /// ANDs all elements together, left to right.
    ///
    /// Fails with [`ArrayError::EmptyReduction`] on an empty array.
    pub fn and_reduce(&self) -> Result<T, ArrayError> {
        self.reduce(|acc, v| acc & v)
    }

    /// ORs all elements together, left to right.
    ///
    /// Fails with [`ArrayError::EmptyReduction`] on an empty array.
    pub fn or_reduce(&self) -> Result<T, ArrayError> {
        self.reduce(|acc, v| acc | v)
    }

    /// XORs all elements together, left to right.
    ///
    /// Fails with [`ArrayError::EmptyReduction`] on an empty array.
    pub fn xor_reduce(&self) -> Result<T, ArrayError> {
        self.reduce(|acc, v| acc ^ v)
    }

    fn reduce(&self, f: impl Fn(T, T) -> T) -> Result<T, ArrayError> {
        let mut it = self.iter().copied();
        let first = it.next().ok_or(ArrayError::EmptyReduction)?;
        Ok(it.fold(first, f))
    }

    /// Returns `true` if every element is a driven 0 or 1, the precondition
    /// for numeric interpretation.
    pub fn resolvable(&self) -> bool {
        self.iter().all(|v| v.to_bool().is_ok())
    }

    /// Interprets the array as an unsigned binary number, most significant
    /// digit at the left bound.
    ///
    /// Fails with [`ArrayError::NotResolvable`] if any element is not a
    /// driven 0 or 1, and with [`ArrayError::ValueOutOfRange`] for widths
    /// past 128 bits. An empty array reads as 0.
    pub fn to_unsigned(&self) -> Result<u128, ArrayError> {
        if !self.resolvable() {
            return Err(ArrayError::NotResolvable);
        }
        if self.len() > 128 {
            return Err(ArrayError::ValueOutOfRange {
                kind: "unsigned",
                value: self.to_string(),
                width: self.len(),
            });
        }
        let mut acc: u128 = 0;
        for v in self.iter() {
            let bit = v.to_bool().unwrap_or_else(|_| unreachable!());
            acc = (acc << 1) | u128::from(bit);
        }
        Ok(acc)
    }

    /// Interprets the array as a two's-complement signed number, the left
    /// bound carrying weight `-2^(n-1)`.
    ///
    /// Same failure modes as [`to_unsigned`](Array::to_unsigned).
    pub fn to_twos_complement(&self) -> Result<i128, ArrayError> {
        let n = self.len();
        let unsigned = self.to_unsigned()?;
        if n == 0 {
            return Ok(0);
        }
        // sign-extend the n-bit pattern through the full i128 width
        let shift = 128 - n as u32;
        Ok(((unsigned << shift) as i128) >> shift)
    }

    /// Renders `value` as an unsigned `n`-digit binary number positioned
    /// over `range`.
    ///
    /// Fails with [`ArrayError::ValueOutOfRange`] when `value` does not fit
    /// in `[0, 2^n - 1]` for `n = range.len()`.
    pub fn from_unsigned(range: Range, value: u128) -> Result<Self, ArrayError> {
        let n = range.len();
        let fits = match n {
            0 => value == 0,
            1..=127 => value >> n == 0,
            _ => true,
        };
        if !fits {
            return Err(ArrayError::ValueOutOfRange {
                kind: "unsigned",
                value: value.to_string(),
                width: n,
            });
        }
        Ok(Self::from_bit_pattern(range, value, false))
    }

    /// Renders `value` as a two's-complement `n`-digit binary number
    /// positioned over `range`; negative values are reduced modulo `2^n`.
    ///
    /// Fails with [`ArrayError::ValueOutOfRange`] when `value` does not fit
    /// in `[-2^(n-1), 2^(n-1) - 1]` for `n = range.len()` (no value fits a
    /// zero-width span).
    pub fn from_twos_complement(range: Range, value: i128) -> Result<Self, ArrayError> {
        let n = range.len();
        let fits = match n {
            0 => false,
            1..=127 => {
                let half = 1i128 << (n - 1);
                -half <= value && value < half
            }
            _ => true,
        };
        if !fits {
            return Err(ArrayError::ValueOutOfRange {
                kind: "signed",
                value: value.to_string(),
                width: n,
            });
        }
        Ok(Self::from_bit_pattern(range, value as u128, value < 0))
    }

    /// Positions the low bits of `pattern` over `range`, MSB at the left
    /// bound. Positions beyond bit 127 take `high_fill` (the sign fill for
    /// spans wider than the pattern).
    fn from_bit_pattern(range: Range, pattern: u128, high_fill: bool) -> Self {
        let n = range.len();
        let elems = (0..n)
            .map(|offset| {
                let pos = n - 1 - offset;
                let bit = if pos < 128 {
                    (pattern >> pos) & 1 == 1
                } else {
                    high_fill
                };
                T::from_bool(bit)
            })
            .collect();
        Self::new(range, elems).unwrap_or_else(|_| unreachable!())
    }
}

impl<T: LogicValue> FromStr for Array<T> {
    type Err = ArrayError;

    /// Parses a literal string into an array over the inferred range
    /// `0 to len-1`.
    fn from_str(s: &str) -> Result<Self, ArrayError> {
        let elems = s
            .chars()
            .map(T::try_from_char)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::from_values(elems))
    }
}

/// Element-wise AND, re-based to `1 to n`.
///
/// # Panics
///
/// Panics on unequal lengths; use [`Array::try_and`] to get a
/// [`ArrayError::LengthMismatch`] instead.
impl<T: LogicValue> BitAnd for &Array<T> {
    type Output = Array<T>;

    fn bitand(self, rhs: Self) -> Array<T> {
        self.try_and(rhs).expect("array length mismatch in AND")
    }
}

/// Element-wise OR, re-based to `1 to n`.
///
/// # Panics
///
/// Panics on unequal lengths; use [`Array::try_or`] to get a
/// [`ArrayError::LengthMismatch`] instead.
impl<T: LogicValue> BitOr for &Array<T> {
    type Output = Array<T>;

    fn bitor(self, rhs: Self) -> Array<T> {
        self.try_or(rhs).expect("array length mismatch in OR")
    }
}

/// Element-wise XOR, re-based to `1 to n`.
///
/// # Panics
///
/// Panics on unequal lengths; use [`Array::try_xor`] to get a
/// [`ArrayError::LengthMismatch`] instead.
impl<T: LogicValue> BitXor for &Array<T> {
    type Output = Array<T>;

    fn bitxor(self, rhs: Self) -> Array<T> {
        self.try_xor(rhs).expect("array length mismatch in XOR")
    }
}

/// Element-wise NOT, re-based to `1 to n`.
impl<T: LogicValue> Not for &Array<T> {
    type Output = Array<T>;

    fn not(self) -> Array<T> {
        self.invert()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn la(s: &str) -> LogicArray {
        s.parse().unwrap()
    }

    #[test]
    fn parse_and_display_round_trip() {
        let a = la("01XZ");
        assert_eq!(a.len(), 4);
        assert_eq!(a.range(), Range::new(0, 3));
        assert_eq!(a.to_string(), "01XZ");
        assert_eq!(la(&a.to_string()), a);
    }

    #[test]
    fn parse_collapses_weak_literals() {
        assert_eq!(la("LHuw-"), la("01XXX"));
    }

    #[test]
    fn parse_rejects_bad_literals() {
        assert!("01A".parse::<LogicArray>().is_err());
        // Bit arrays reject every metavalue
        assert!("0X1".parse::<BitArray>().is_err());
        assert!("01Z".parse::<BitArray>().is_err());
        assert!("0011".parse::<BitArray>().is_ok());
    }

    #[test]
    fn parse_with_explicit_range() {
        let a = LogicArray::from_str_with_range(Range::new(7, 4), "01XZ").unwrap();
        assert_eq!(a.left(), 7);
        assert_eq!(*a.get(7).unwrap(), Logic::Zero);
        assert_eq!(*a.get(4).unwrap(), Logic::Z);
        assert!(matches!(
            LogicArray::from_str_with_range(Range::new(1, 2), "01XZ"),
            Err(ArrayError::LengthMismatch {
                expected: 2,
                actual: 4
            })
        ));
    }

    #[test]
    fn bitwise_ops_rebase_to_canonical_range() {
        let a = LogicArray::from_str_with_range(Range::new(7, 4), "1100").unwrap();
        let b = LogicArray::from_str_with_range(Range::new(0, 3), "1010").unwrap();
        let r = a.try_and(&b).unwrap();
        assert_eq!(r.to_string(), "1000");
        assert_eq!(r.range(), Range::new(1, 4));
        assert_eq!((&a | &b).to_string(), "1110");
        assert_eq!((&a ^ &b).to_string(), "0110");
    }

    #[test]
    fn bitwise_ops_resolve_metavalues() {
        let a = la("0X1Z");
        let b = la("ZZ1X");
        assert_eq!(a.try_and(&b).unwrap().to_string(), "0X1X");
        assert_eq!(a.try_or(&b).unwrap().to_string(), "XX1X");
        assert_eq!(a.try_xor(&b).unwrap().to_string(), "XX0X");
    }

    #[test]
    fn bitwise_length_mismatch() {
        let a = la("01");
        let b = la("011");
        assert_eq!(
            a.try_and(&b),
            Err(ArrayError::LengthMismatch {
                expected: 2,
                actual: 3
            })
        );
    }

    #[test]
    fn invert_rebases() {
        let a = LogicArray::from_str_with_range(Range::new(3, 0), "10XZ").unwrap();
        let r = !&a;
        assert_eq!(r.to_string(), "01XX");
        assert_eq!(r.range(), Range::new(1, 4));
    }

    #[test]
    fn concat_chains_values() {
        let a = LogicArray::from_str_with_range(Range::new(5, 4), "01").unwrap();
        let b = LogicArray::from_str_with_range(Range::new(1, 0), "XZ").unwrap();
        let c = a.concat(&b);
        assert_eq!(c.to_string(), "01XZ");
        assert_eq!(c.range(), Range::new(1, 4));
    }

    #[test]
    fn reductions() {
        assert_eq!(la("111").and_reduce(), Ok(Logic::One));
        assert_eq!(la("101").and_reduce(), Ok(Logic::Zero));
        assert_eq!(la("000").or_reduce(), Ok(Logic::Zero));
        assert_eq!(la("001").or_reduce(), Ok(Logic::One));
        assert_eq!(la("0110").xor_reduce(), Ok(Logic::Zero));
        assert_eq!(la("0111").xor_reduce(), Ok(Logic::One));
        // Z collapses to X through the fold, 0 still dominates AND
        assert_eq!(la("1Z1").and_reduce(), Ok(Logic::X));
        assert_eq!(la("0Z1").and_reduce(), Ok(Logic::Zero));
    }

    #[test]
    fn reduction_of_empty_array_fails() {
        let empty = la("");
        assert_eq!(empty.and_reduce(), Err(ArrayError::EmptyReduction));
        assert_eq!(empty.or_reduce(), Err(ArrayError::EmptyReduction));
        assert_eq!(empty.xor_reduce(), Err(ArrayError::EmptyReduction));
    }

    #[test]
    fn resolvable() {
        assert!(la("0101").resolvable());
        assert!(!la("01XZ").resolvable());
        assert!(!StdLogicArray::filled(Range::new(0, 3)).resolvable());
    }

    #[test]
    fn to_unsigned() {
        assert_eq!(la("0101").to_unsigned(), Ok(5));
        assert_eq!(la("1111").to_unsigned(), Ok(15));
        assert_eq!(la("01").to_unsigned(), Ok(1));
        assert_eq!(la("").to_unsigned(), Ok(0));
        assert_eq!(la("01XZ").to_unsigned(), Err(ArrayError::NotResolvable));
    }

    #[test]
    fn to_twos_complement() {
        assert_eq!(la("1111").to_twos_complement(), Ok(-1));
        assert_eq!(la("1000").to_twos_complement(), Ok(-8));
        assert_eq!(la("0111").to_twos_complement(), Ok(7));
        assert_eq!(la("0").to_twos_complement(), Ok(0));
        assert_eq!(la("1").to_twos_complement(), Ok(-1));
        assert_eq!(la("Z1").to_twos_complement(), Err(ArrayError::NotResolvable));
    }

    #[test]
    fn from_unsigned() {
        let a = LogicArray::from_unsigned(Range::new(1, 4), 5).unwrap();
        assert_eq!(a.to_string(), "0101");
        assert_eq!(a.range(), Range::new(1, 4));
        assert_eq!(
            LogicArray::from_unsigned(Range::new(1, 4), 16),
            Err(ArrayError::ValueOutOfRange {
                kind: "unsigned",
                value: "16".to_string(),
                width: 4
            })
        );
        // descending bounds position the MSB at the left bound
        let d = LogicArray::from_unsigned(Range::new(3, 0), 9).unwrap();
        assert_eq!(d.to_string(), "1001");
        assert_eq!(*d.get(3).unwrap(), Logic::One);
        assert_eq!(*d.get(0).unwrap(), Logic::One);
    }

    #[test]
    fn from_twos_complement() {
        let a = LogicArray::from_twos_complement(Range::new(1, 4), -1).unwrap();
        assert_eq!(a.to_string(), "1111");
        let b = LogicArray::from_twos_complement(Range::new(1, 4), -8).unwrap();
        assert_eq!(b.to_string(), "1000");
        assert_eq!(
            LogicArray::from_twos_complement(Range::new(1, 4), 8),
            Err(ArrayError::ValueOutOfRange {
                kind: "signed",
                value: "8".to_string(),
                width: 4
            })
        );
        assert!(LogicArray::from_twos_complement(Range::new(1, 4), -9).is_err());
    }

    #[test]
    fn numeric_round_trips() {
        for n in 1usize..=9 {
            let range = Range::new(n as i64 - 1, 0);
            for v in 0..(1u128 << n) {
                let a = BitArray::from_unsigned(range, v).unwrap();
                assert_eq!(a.to_unsigned(), Ok(v));
            }
            let half = 1i128 << (n - 1);
            for v in -half..half {
                let a = LogicArray::from_twos_complement(range, v).unwrap();
                assert_eq!(a.to_twos_complement(), Ok(v));
            }
        }
    }

    #[test]
    fn wide_spans_sign_fill() {
        // 130-bit span: -1 renders as all ones past the 128-bit pattern
        let range = Range::new(129, 0);
        let a = LogicArray::from_twos_complement(range, -1).unwrap();
        assert_eq!(a.count(&Logic::One), 130);
        let b = LogicArray::from_unsigned(range, 3).unwrap();
        assert_eq!(b.count(&Logic::One), 2);
        // exporting a >128-bit span is out of range even when resolvable
        assert!(matches!(
            b.to_unsigned(),
            Err(ArrayError::ValueOutOfRange { width: 130, .. })
        ));
    }

    #[test]
    fn extreme_width_boundaries() {
        let r128 = Range::new(127, 0);
        let a = LogicArray::from_unsigned(r128, u128::MAX).unwrap();
        assert_eq!(a.to_unsigned(), Ok(u128::MAX));
        assert_eq!(a.to_twos_complement(), Ok(-1));
        let b = LogicArray::from_twos_complement(r128, i128::MIN).unwrap();
        assert_eq!(b.to_twos_complement(), Ok(i128::MIN));
    }

    #[test]
    fn zero_width_numeric() {
        let null = Range::with_direction(1, Direction::Downto, 4);
        assert!(LogicArray::from_unsigned(null, 0).unwrap().is_empty());
        assert!(LogicArray::from_unsigned(null, 1).is_err());
        assert!(LogicArray::from_twos_complement(null, 0).is_err());
    }

    #[test]
    fn std_logic_array_keeps_weak_states() {
        let a: StdLogicArray = "UW-LH".parse().unwrap();
        assert_eq!(a.to_string(), "UW-LH");
        // weak states resolve like strong ones through the vector ops
        let b: StdLogicArray = "11111".parse().unwrap();
        assert_eq!(a.try_and(&b).unwrap().to_string(), "UXX01");
    }

    #[test]
    fn bit_array_numeric() {
        let a = BitArray::from_unsigned(Range::new(7, 0), 0xA5).unwrap();
        assert_eq!(a.to_string(), "10100101");
        assert_eq!(a.to_unsigned(), Ok(0xA5));
    }
}
