//! Equality predicates used to compare the two sides of a law.
//!
//! Plain checks compare with [`NaturalEquality`] (`PartialEq`). The `_equal` variants
//! accept any [`Equality`], which every `Fn(&T, &T) -> bool` already is. This matters
//! for containers whose `==` is structural (segment borders) while the law only holds
//! for the elements they contain.

/// Binary predicate deciding whether two values count as equal.
pub trait Equality<T: ?Sized> {
    /// True if `lhs` and `rhs` are considered equal.
    fn equal(&self, lhs: &T, rhs: &T) -> bool;
}

/// Equality through `PartialEq`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NaturalEquality;

impl<T: PartialEq + ?Sized> Equality<T> for NaturalEquality {
    fn equal(&self, lhs: &T, rhs: &T) -> bool {
        lhs == rhs
    }
}

impl<T: ?Sized, F> Equality<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    fn equal(&self, lhs: &T, rhs: &T) -> bool {
        self(lhs, rhs)
    }
}
