//! Proptest strategies for law operands.

pub mod intervals;
pub mod operands;
