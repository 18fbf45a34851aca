//! Scalar multi-valued logic types for modelling VHDL-style signals.
//!
//! This crate provides the three scalar logic types — the full 9-state
//! [`StdLogic`], the 4-state [`Logic`], and the 2-state [`Bit`] — together
//! with the [`LogicValue`] trait that abstracts over their shared bitwise
//! algebra. Vector/array types are built on top of these in `hdlv_array`.

#![warn(missing_docs)]

pub mod bit;
pub mod error;
pub mod logic;
pub mod std_logic;
pub mod value;

pub use bit::Bit;
pub use error::LogicError;
pub use logic::Logic;
pub use std_logic::StdLogic;
pub use value::LogicValue;
