//! Bounded index spans with ascending and descending directions.

use crate::error::ArrayError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Whether indexes increase (`to`) or decrease (`downto`) from left to right.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Direction {
    /// Ascending indexes, VHDL `to`.
    To,
    /// Descending indexes, VHDL `downto`.
    Downto,
}

impl Direction {
    /// The index step of this direction: `1` for `to`, `-1` for `downto`.
    pub fn step(self) -> i64 {
        match self {
            Direction::To => 1,
            Direction::Downto => -1,
        }
    }

    /// Infers the direction from bound ordering: `to` iff `left <= right`.
    pub fn infer(left: i64, right: i64) -> Self {
        if left <= right {
            Direction::To
        } else {
            Direction::Downto
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::To => write!(f, "to"),
            Direction::Downto => write!(f, "downto"),
        }
    }
}

impl FromStr for Direction {
    type Err = ArrayError;

    fn from_str(s: &str) -> Result<Self, ArrayError> {
        match s {
            "to" => Ok(Direction::To),
            "downto" => Ok(Direction::Downto),
            other => Err(ArrayError::InvalidDirection {
                spelling: other.to_string(),
            }),
        }
    }
}

/// An immutable description of an index span: a left bound, a right bound,
/// and a direction.
///
/// A range whose direction disagrees with its bound ordering (e.g. `4 to 1`)
/// is a legal *null range* of length 0; every index is out of bounds for it.
/// Equality and hashing are structural over all three fields.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct Range {
    left: i64,
    right: i64,
    direction: Direction,
}

impl Range {
    /// Creates a range with the direction inferred from bound ordering
    /// (`to` when `left <= right`, `downto` otherwise). Never null.
    pub fn new(left: i64, right: i64) -> Self {
        Self {
            left,
            right,
            direction: Direction::infer(left, right),
        }
    }

    /// Creates a range with an explicit direction.
    ///
    /// When the direction disagrees with the bound ordering the result is a
    /// null range of length 0.
    pub fn with_direction(left: i64, direction: Direction, right: i64) -> Self {
        Self {
            left,
            right,
            direction,
        }
    }

    /// Creates a range from a left bound, right bound, and step.
    ///
    /// Only unit steps are supported: `1` yields an ascending range, `-1` a
    /// descending one; anything else fails with
    /// [`ArrayError::UnsupportedStep`].
    pub fn from_step(left: i64, right: i64, step: i64) -> Result<Self, ArrayError> {
        let direction = match step {
            1 => Direction::To,
            -1 => Direction::Downto,
            other => return Err(ArrayError::UnsupportedStep { step: other }),
        };
        Ok(Self::with_direction(left, direction, right))
    }

    /// The left bound.
    pub fn left(&self) -> i64 {
        self.left
    }

    /// The right bound.
    pub fn right(&self) -> i64 {
        self.right
    }

    /// The direction.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// The number of indexes spanned; 0 for null ranges, never negative.
    pub fn len(&self) -> usize {
        let (lo, hi) = match self.direction {
            Direction::To => (self.left, self.right),
            Direction::Downto => (self.right, self.left),
        };
        (i128::from(hi) - i128::from(lo) + 1).max(0) as usize
    }

    /// Returns `true` if the range spans no indexes.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if this is a null range (direction and bound ordering
    /// disagree).
    pub fn is_null(&self) -> bool {
        self.is_empty()
    }

    /// Returns `true` if the range spans index `i`.
    pub fn contains(&self, i: i64) -> bool {
        match self.direction {
            Direction::To => self.left <= i && i <= self.right,
            Direction::Downto => self.right <= i && i <= self.left,
        }
    }

    /// Translates index `i` to a 0-based offset from the left bound.
    ///
    /// Fails with [`ArrayError::IndexOutOfBounds`] when `i` is not spanned,
    /// which includes every index of a null range.
    pub fn index_of(&self, i: i64) -> Result<usize, ArrayError> {
        if !self.contains(i) {
            return Err(ArrayError::IndexOutOfBounds {
                index: i,
                left: self.left,
                direction: self.direction,
                right: self.right,
            });
        }
        let offset = match self.direction {
            Direction::To => i128::from(i) - i128::from(self.left),
            Direction::Downto => i128::from(self.left) - i128::from(i),
        };
        Ok(offset as usize)
    }

    /// Builds the sub-range `(lo, self.direction, hi)`.
    ///
    /// The direction inferred from `(lo, hi)` must match this range's
    /// direction, else [`ArrayError::DirectionMismatch`]. Inference is `to`
    /// when `lo <= hi`, so single-index sub-bounds (`lo == hi`) only match
    /// ascending parents. Containment within the parent span is not checked
    /// here — containers enforce it through offset translation.
    pub fn sub_range(&self, lo: i64, hi: i64) -> Result<Range, ArrayError> {
        let requested = Direction::infer(lo, hi);
        if requested != self.direction {
            return Err(ArrayError::DirectionMismatch {
                requested,
                actual: self.direction,
            });
        }
        Ok(Range::with_direction(lo, self.direction, hi))
    }

    /// Iterates over the concrete indexes from `left` to `right` inclusive.
    ///
    /// The iterator is finite, double-ended, and restartable — each call
    /// yields a fresh traversal.
    pub fn iter(&self) -> Indexes {
        Indexes {
            front: self.left,
            back: self.right,
            remaining: self.len(),
            step: self.direction.step(),
        }
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.left, self.direction, self.right)
    }
}

impl IntoIterator for &Range {
    type Item = i64;
    type IntoIter = Indexes;

    fn into_iter(self) -> Indexes {
        self.iter()
    }
}

/// Iterator over the concrete indexes of a [`Range`].
#[derive(Clone, Debug)]
pub struct Indexes {
    front: i64,
    back: i64,
    remaining: usize,
    step: i64,
}

impl Iterator for Indexes {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        if self.remaining == 0 {
            return None;
        }
        let i = self.front;
        self.remaining -= 1;
        if self.remaining > 0 {
            self.front += self.step;
        }
        Some(i)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl DoubleEndedIterator for Indexes {
    fn next_back(&mut self) -> Option<i64> {
        if self.remaining == 0 {
            return None;
        }
        let i = self.back;
        self.remaining -= 1;
        if self.remaining > 0 {
            self.back -= self.step;
        }
        Some(i)
    }
}

impl ExactSizeIterator for Indexes {}
