//! Law assertions.
//!
//! - [`algebraic`]: associativity, neutrality, commutativity and inversion.
//! - [`structure`]: monoids and groups composed from those laws.
//! - [`permuted`]: structures re-run over operand permutations and associated values.
//! - [`containment`] and [`complement`]: interval and set laws over collaborator traits.
//! - [`verdict`] and [`report`]: accumulation and rendering of violations.

pub mod algebraic;
pub mod complement;
pub mod containment;
pub mod equality;
pub mod identity;
pub mod operator;
pub mod permuted;
pub mod report;
pub mod structure;
pub mod verdict;

pub use equality::{Equality, NaturalEquality};
pub use identity::{IdentityElement, identity_of};
pub use operator::{
    Applied, BinaryOperation, Caret, Custom, Et, GroupOperator, Minus, Operator, OperatorKind,
    Pipe, Plus,
};
pub use report::{ReportConfig, ReportFormat, render_verdict};
pub use structure::{
    AbelianGroup, AbelianMonoid, AlgebraicStructure, Monoid, PartialInvertiveMonoid, Structure,
};
pub use verdict::{Law, LawFailure, Verdict, Violation};
