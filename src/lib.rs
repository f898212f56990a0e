//! # algebraic-laws
//!
//! `algebraic-laws` checks that binary operations obey the algebraic laws their
//! types promise. It is organized around:
//! - `law`: primitive laws, composite structures, permuted variants and interval laws
//! - `reference`: small interval containers that satisfy the interval laws
//! - `generators`: proptest strategies for law operands
//!
//! Every check comes as `verify_*`, returning a [`law::Verdict`], and as `check_*`,
//! which panics with a report of every violated law.
//!
//! ```rust
//! use algebraic_laws::prelude::*;
//!
//! check_abelian_group(Plus, &0_i64, &3, &5, &7);
//! let verdict = verify_commutativity(Minus, &NaturalEquality, &3_i64, &5_i64);
//! assert!(verdict.violates(Law::Commutativity));
//! ```

#![warn(missing_docs)]

pub mod generators;
pub mod law;
pub mod prelude;
pub mod reference;

/// Re-export `proptest` for convenience.
pub use proptest;
