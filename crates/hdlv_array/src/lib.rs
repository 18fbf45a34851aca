//! Bounded, arbitrarily-indexed arrays and logic vectors.
//!
//! This crate provides [`Range`] — an immutable description of an ascending
//! (`to`) or descending (`downto`) integer index span — and [`Array`], a
//! fixed-length container indexed by such a range. For element types
//! implementing [`LogicValue`](hdlv_logic::LogicValue) the array gains
//! bitwise vector operations, concatenation, reductions, and signed/unsigned
//! numeric conversion; [`StdLogicArray`], [`LogicArray`], and [`BitArray`]
//! are the ready-made aliases.

#![warn(missing_docs)]

pub mod array;
pub mod error;
pub mod logic_array;
pub mod range;

pub use array::Array;
pub use error::ArrayError;
pub use logic_array::{BitArray, LogicArray, StdLogicArray};
pub use range::{Direction, Range};
