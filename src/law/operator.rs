//! Operator tags and the binary-operation capability the laws are checked against.
//!
//! A law is never written per operator. Instead every check is generic over a
//! zero-sized tag (`Plus`, `Pipe`, `Et`, `Caret`, `Minus`) that maps to exactly one
//! `std::ops` trait, or over a [`Custom`] operation wrapping an explicit closure.
//!
//! # Example
//!
//! ```rust
//! use algebraic_laws::law::operator::{BinaryOperation, Plus, Pipe};
//!
//! assert_eq!(Plus.apply(3_i32, 4_i32), 7);
//! assert_eq!(Pipe.apply(0b01_u8, 0b10_u8), 0b11);
//! ```

use std::fmt::{self, Debug};
use std::ops::{Add, BitAnd, BitOr, BitXor, Sub};

use serde::Serialize;

/// Runtime name of an operator, used when reporting violations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OperatorKind {
    /// Addition / union, `+`.
    Plus,
    /// Bitwise or / union, `|`.
    Pipe,
    /// Bitwise and / intersection, `&`.
    Et,
    /// Bitwise xor / symmetric difference, `^`.
    Caret,
    /// Subtraction / difference, `-`.
    Minus,
    /// Caller-supplied operation.
    Custom(&'static str),
}

impl OperatorKind {
    /// Tag name as used in law names (`plus`, `pipe`, ...).
    #[must_use]
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Plus => "plus",
            Self::Pipe => "pipe",
            Self::Et => "et",
            Self::Caret => "caret",
            Self::Minus => "minus",
            Self::Custom(name) => name,
        }
    }

    /// Operator symbol.
    #[must_use]
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Plus => "+",
            Self::Pipe => "|",
            Self::Et => "&",
            Self::Caret => "^",
            Self::Minus => "-",
            Self::Custom(name) => name,
        }
    }
}

impl fmt::Display for OperatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Custom(name) => write!(f, "{name}"),
            _ => write!(f, "{} ({})", self.tag(), self.symbol()),
        }
    }
}

/// A tag selecting one binary operation.
pub trait Operator: Copy + Debug {
    /// Which operation this tag stands for.
    fn kind(&self) -> OperatorKind;
}

/// Capability to combine a `Lhs` with a `Rhs`.
pub trait BinaryOperation<Lhs, Rhs = Lhs>: Operator {
    /// Result of the combination.
    type Output;

    /// Combine two owned operands.
    fn apply(self, lhs: Lhs, rhs: Rhs) -> Self::Output;
}

/// Shorthand for the output of `Op` applied to `L` and `R`.
pub type Applied<Op, L, R> = <Op as BinaryOperation<L, R>>::Output;

/// Operators for which the abelian-group checks are defined.
///
/// Intersection and symmetric difference have no inverse with respect to the
/// identity element over the intended domains, so only `Plus` and `Pipe` carry it.
pub trait GroupOperator: Operator {}

macro_rules! operator_tag {
    ($(#[$doc:meta])* $tag:ident, $kind:ident, $trait:ident, $method:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
        pub struct $tag;

        impl Operator for $tag {
            fn kind(&self) -> OperatorKind {
                OperatorKind::$kind
            }
        }

        impl<L, R> BinaryOperation<L, R> for $tag
        where
            L: $trait<R>,
        {
            type Output = <L as $trait<R>>::Output;

            fn apply(self, lhs: L, rhs: R) -> Self::Output {
                lhs.$method(rhs)
            }
        }
    };
}

operator_tag!(
    /// `+`: addition, or union for containers.
    Plus, Plus, Add, add
);
operator_tag!(
    /// `|`: bitwise or, or union for containers.
    Pipe, Pipe, BitOr, bitor
);
operator_tag!(
    /// `&`: bitwise and, or intersection for containers.
    Et, Et, BitAnd, bitand
);
operator_tag!(
    /// `^`: bitwise xor, or symmetric difference for containers.
    Caret, Caret, BitXor, bitxor
);
operator_tag!(
    /// `-`: subtraction, or difference for containers.
    Minus, Minus, Sub, sub
);

impl GroupOperator for Plus {}
impl GroupOperator for Pipe {}

/// Named operation backed by a closure.
///
/// The closure must be `Copy`, which holds for any closure that captures
/// nothing or only `Copy` values.
///
/// ```rust
/// use algebraic_laws::law::operator::{BinaryOperation, Custom};
///
/// let max = Custom::new("max", |a: i32, b: i32| a.max(b));
/// assert_eq!(max.apply(3, 9), 9);
/// ```
#[derive(Clone, Copy)]
pub struct Custom<F> {
    name: &'static str,
    f: F,
}

impl<F> Custom<F> {
    /// Wrap `f` under `name`.
    pub fn new(name: &'static str, f: F) -> Self {
        Self { name, f }
    }
}

impl<F> Debug for Custom<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Custom").field("name", &self.name).finish()
    }
}

impl<F: Copy> Operator for Custom<F> {
    fn kind(&self) -> OperatorKind {
        OperatorKind::Custom(self.name)
    }
}

impl<F, L, R, O> BinaryOperation<L, R> for Custom<F>
where
    F: Fn(L, R) -> O + Copy,
{
    type Output = O;

    fn apply(self, lhs: L, rhs: R) -> O {
        (self.f)(lhs, rhs)
    }
}
