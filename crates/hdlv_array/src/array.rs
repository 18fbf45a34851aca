//! Fixed-length containers indexed by an arbitrary bounded range.

use crate::error::ArrayError;
use crate::range::{Direction, Range};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A fixed-length, arbitrarily-indexed container.
///
/// The element count always equals the owning [`Range`]'s length. Bounds can
/// start and end at any integer and run in either direction; element access
/// goes through the range's index translation, so `a.get(7)` on a
/// `7 downto 2` array returns the first element.
///
/// The array exclusively owns its backing storage. Slicing copies into a new
/// independent array, never a view. Mutation happens only through
/// [`set`](Array::set), [`slice_assign`](Array::slice_assign), and
/// [`set_range`](Array::set_range), each of which validates before writing.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Array<T> {
    range: Range,
    elems: Vec<T>,
}

impl<T> Array<T> {
    /// Creates an array over `range` holding `values`.
    ///
    /// Fails with [`ArrayError::LengthMismatch`] when the value count does
    /// not equal the range's length.
    pub fn new(range: Range, values: Vec<T>) -> Result<Self, ArrayError> {
        if values.len() != range.len() {
            return Err(ArrayError::LengthMismatch {
                expected: range.len(),
                actual: values.len(),
            });
        }
        Ok(Self {
            range,
            elems: values,
        })
    }

    /// Creates an array over `range` filled with default-constructed
    /// elements.
    pub fn filled(range: Range) -> Self
    where
        T: Default,
    {
        let elems = (0..range.len()).map(|_| T::default()).collect();
        Self { range, elems }
    }

    /// Creates an array from values alone, with the range inferred as
    /// `0 to len-1`.
    pub fn from_values(values: Vec<T>) -> Self {
        let range = Range::with_direction(0, Direction::To, values.len() as i64 - 1);
        Self {
            range,
            elems: values,
        }
    }

    /// The owning range.
    pub fn range(&self) -> Range {
        self.range
    }

    /// The left bound.
    pub fn left(&self) -> i64 {
        self.range.left()
    }

    /// The right bound.
    pub fn right(&self) -> i64 {
        self.range.right()
    }

    /// The direction.
    pub fn direction(&self) -> Direction {
        self.range.direction()
    }

    /// The number of elements.
    pub fn len(&self) -> usize {
        self.elems.len()
    }

    /// Returns `true` if the array holds no elements (a null array).
    pub fn is_empty(&self) -> bool {
        self.elems.is_empty()
    }

    /// The backing elements in index order (left to right).
    pub fn values(&self) -> &[T] {
        &self.elems
    }

    /// Returns the element at index `i`.
    ///
    /// Fails with [`ArrayError::IndexOutOfBounds`] when `i` is not spanned
    /// by the array's range.
    pub fn get(&self, i: i64) -> Result<&T, ArrayError> {
        let offset = self.range.index_of(i)?;
        Ok(&self.elems[offset])
    }

    /// Replaces the element at index `i`.
    ///
    /// Fails with [`ArrayError::IndexOutOfBounds`] when `i` is not spanned
    /// by the array's range.
    pub fn set(&mut self, i: i64, value: T) -> Result<(), ArrayError> {
        let offset = self.range.index_of(i)?;
        self.elems[offset] = value;
        Ok(())
    }

    /// Copies the elements between indexes `lo` and `hi` (inclusive) into a
    /// new array over the range `(lo, self.direction(), hi)`.
    ///
    /// The direction inferred from `(lo, hi)` must match the array's own,
    /// else [`ArrayError::DirectionMismatch`]; both bounds must be spanned,
    /// else [`ArrayError::IndexOutOfBounds`]. Slicing with the array's own
    /// bounds copies the whole array.
    pub fn slice(&self, lo: i64, hi: i64) -> Result<Self, ArrayError>
    where
        T: Clone,
    {
        let sub = self.range.sub_range(lo, hi)?;
        let start = self.range.index_of(lo)?;
        let end = self.range.index_of(hi)?;
        Ok(Self {
            range: sub,
            elems: self.elems[start..=end].to_vec(),
        })
    }

    /// Replaces the elements between indexes `lo` and `hi` (inclusive) with
    /// `values`, leaving the rest of the array untouched.
    ///
    /// All validation happens before any element is written: direction and
    /// bounds as for [`slice`](Array::slice), and `values` must have exactly
    /// the sub-span's length, else [`ArrayError::LengthMismatch`].
    pub fn slice_assign(&mut self, lo: i64, hi: i64, values: Vec<T>) -> Result<(), ArrayError> {
        let sub = self.range.sub_range(lo, hi)?;
        let start = self.range.index_of(lo)?;
        let end = self.range.index_of(hi)?;
        if values.len() != sub.len() {
            return Err(ArrayError::LengthMismatch {
                expected: sub.len(),
                actual: values.len(),
            });
        }
        for (slot, value) in self.elems[start..=end].iter_mut().zip(values) {
            *slot = value;
        }
        Ok(())
    }

    /// Re-labels the array with new bounds of the same length.
    ///
    /// Fails with [`ArrayError::LengthMismatch`] when the new range's
    /// length differs; the elements are untouched.
    pub fn set_range(&mut self, new: Range) -> Result<(), ArrayError> {
        if new.len() != self.elems.len() {
            return Err(ArrayError::LengthMismatch {
                expected: self.elems.len(),
                actual: new.len(),
            });
        }
        self.range = new;
        Ok(())
    }

    /// Iterates over the elements in index order (left to right).
    ///
    /// The iterator is double-ended and restartable.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elems.iter()
    }

    /// Returns `true` if some element equals `value`.
    pub fn contains_value(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.elems.contains(value)
    }

    /// Returns the index (not offset) of the first element equal to `value`.
    pub fn find(&self, value: &T) -> Option<i64>
    where
        T: PartialEq,
    {
        self.range
            .iter()
            .zip(&self.elems)
            .find(|(_, v)| *v == value)
            .map(|(i, _)| i)
    }

    /// Counts the elements equal to `value`.
    pub fn count(&self, value: &T) -> usize
    where
        T: PartialEq,
    {
        self.elems.iter().filter(|v| *v == value).count()
    }
}

/// Equality compares only the element sequence in index order; bounds and
/// direction are deliberately not part of it, so `(1 to 4)` and
/// `(4 downto 1)` arrays with the same values compare equal.
impl<T: PartialEq> PartialEq for Array<T> {
    fn eq(&self, other: &Self) -> bool {
        self.elems == other.elems
    }
}

impl<T: Eq> Eq for Array<T> {}

impl<T: fmt::Display> fmt::Display for Array<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for v in &self.elems {
            write!(f, "{v}")?;
        }
        Ok(())
    }
}

impl<T> IntoIterator for Array<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elems.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Array<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descending() -> Array<i32> {
        Array::new(Range::new(7, 2), vec![10, 20, 30, 40, 50, 60]).unwrap()
    }

    #[test]
    fn new_checks_length() {
        assert!(Array::new(Range::new(0, 2), vec![1, 2, 3]).is_ok());
        assert_eq!(
            Array::new(Range::new(0, 2), vec![1, 2]),
            Err(ArrayError::LengthMismatch {
                expected: 3,
                actual: 2
            })
        );
    }

    #[test]
    fn filled_uses_defaults() {
        let a: Array<i32> = Array::filled(Range::new(1, 4));
        assert_eq!(a.values(), &[0, 0, 0, 0]);
    }

    #[test]
    fn from_values_infers_zero_based_range() {
        let a = Array::from_values(vec!['a', 'b', 'c']);
        assert_eq!(a.range(), Range::new(0, 2));
        let empty: Array<char> = Array::from_values(vec![]);
        assert!(empty.is_empty());
        assert!(empty.range().is_null());
    }

    #[test]
    fn get_translates_indexes() {
        let a = descending();
        assert_eq!(a.get(7), Ok(&10));
        assert_eq!(a.get(5), Ok(&30));
        assert_eq!(a.get(2), Ok(&60));
        assert!(a.get(1).is_err());
        assert!(a.get(8).is_err());
    }

    #[test]
    fn set_translates_indexes() {
        let mut a = descending();
        a.set(4, 99).unwrap();
        assert_eq!(a.values(), &[10, 20, 30, 99, 50, 60]);
        assert!(a.set(0, 1).is_err());
    }

    #[test]
    fn slice_copies_sub_span() {
        let a = descending();
        let s = a.slice(5, 3).unwrap();
        assert_eq!(s.range(), Range::new(5, 3));
        assert_eq!(s.values(), &[30, 40, 50]);
        // independent copy
        let mut a2 = a.clone();
        a2.set(5, 0).unwrap();
        assert_eq!(s.get(5), Ok(&30));
    }

    #[test]
    fn slice_full_bounds_is_copy() {
        let a = descending();
        let s = a.slice(7, 2).unwrap();
        assert_eq!(s, a);
        assert_eq!(s.range(), a.range());
    }

    #[test]
    fn slice_rejects_direction_mismatch() {
        let a = descending();
        assert_eq!(
            a.slice(3, 5),
            Err(ArrayError::DirectionMismatch {
                requested: Direction::To,
                actual: Direction::Downto,
            })
        );
    }

    #[test]
    fn slice_single_index() {
        let a = Array::new(Range::new(2, 7), vec![10, 20, 30, 40, 50, 60]).unwrap();
        let s = a.slice(4, 4).unwrap();
        assert_eq!(s.values(), &[30]);
        assert_eq!(s.left(), 4);
        // (4, 4) infers ascending, so descending arrays reject it
        assert_eq!(
            descending().slice(4, 4),
            Err(ArrayError::DirectionMismatch {
                requested: Direction::To,
                actual: Direction::Downto,
            })
        );
    }

    #[test]
    fn slice_assign_replaces_sub_span() {
        let mut a = descending();
        a.slice_assign(6, 4, vec![1, 2, 3]).unwrap();
        assert_eq!(a.values(), &[10, 1, 2, 3, 50, 60]);
    }

    #[test]
    fn slice_assign_validates_before_writing() {
        let mut a = descending();
        let before = a.clone();
        assert_eq!(
            a.slice_assign(6, 4, vec![1, 2]),
            Err(ArrayError::LengthMismatch {
                expected: 3,
                actual: 2
            })
        );
        assert!(a.slice_assign(9, 6, vec![1, 2, 3, 4]).is_err());
        assert_eq!(a.values(), before.values());
    }

    #[test]
    fn set_range_relabels_bounds() {
        let mut a = descending();
        a.set_range(Range::new(0, 5)).unwrap();
        assert_eq!(a.get(0), Ok(&10));
        assert_eq!(
            a.set_range(Range::new(0, 3)),
            Err(ArrayError::LengthMismatch {
                expected: 6,
                actual: 4
            })
        );
    }

    #[test]
    fn iteration_is_index_ordered_and_restartable() {
        let a = descending();
        let forward: Vec<_> = a.iter().copied().collect();
        assert_eq!(forward, vec![10, 20, 30, 40, 50, 60]);
        let again: Vec<_> = a.iter().copied().collect();
        assert_eq!(forward, again);
        let backward: Vec<_> = a.iter().rev().copied().collect();
        assert_eq!(backward, vec![60, 50, 40, 30, 20, 10]);
    }

    #[test]
    fn equality_ignores_bounds() {
        let a = Array::new(Range::new(1, 4), vec![1, 2, 3, 4]).unwrap();
        let b = Array::new(Range::new(4, 1), vec![1, 2, 3, 4]).unwrap();
        assert_eq!(a, b);
        let c = Array::new(Range::new(1, 4), vec![4, 3, 2, 1]).unwrap();
        assert_ne!(a, c);
    }

    #[test]
    fn find_contains_count() {
        let a = Array::new(Range::new(7, 2), vec![1, 2, 1, 3, 1, 2]).unwrap();
        assert!(a.contains_value(&3));
        assert!(!a.contains_value(&9));
        assert_eq!(a.find(&1), Some(7));
        assert_eq!(a.find(&2), Some(6));
        assert_eq!(a.find(&9), None);
        assert_eq!(a.count(&1), 3);
    }

    #[test]
    fn null_array_rejects_everything() {
        let a: Array<i32> = Array::filled(Range::with_direction(1, Direction::Downto, 4));
        assert!(a.is_empty());
        assert!(a.get(1).is_err());
        assert!(a.get(2).is_err());
    }

    #[test]
    fn serde_roundtrip() {
        let a = descending();
        let json = serde_json::to_string(&a).unwrap();
        let back: Array<i32> = serde_json::from_str(&json).unwrap();
        assert_eq!(back.range(), a.range());
        assert_eq!(back.values(), a.values());
    }
}
