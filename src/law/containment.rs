//! Containment laws for set-like containers.
//!
//! These laws hold for sets. They do not hold for maps whose intersection combines
//! the associated values (for example by adding them): `a & b` then carries values
//! that `a` does not contain, so [`verify_intersection_containedness`] is only
//! meaningful for containers whose intersection is a pure key intersection.

use std::fmt::Debug;

use super::operator::{Applied, BinaryOperation, Et, OperatorKind, Plus};
use super::verdict::{Law, Verdict};

/// `self` contains every part of `rhs`.
pub trait Contains<Rhs: ?Sized> {
    /// True if `rhs` is contained in `self`.
    fn contains(&self, rhs: &Rhs) -> bool;
}

/// A container whose keys form a set.
pub trait Domain {
    /// The key-set type.
    type Set;

    /// The set of keys.
    fn domain(&self) -> Self::Set;
}

/// A set with an observable first element.
pub trait ElementSet {
    /// Element type.
    type Element;

    /// Smallest element, `None` when empty.
    fn first_element(&self) -> Option<Self::Element>;

    /// True if the set has no elements.
    fn is_empty(&self) -> bool;
}

/// `container` contains `item`.
pub fn contains<T, R>(container: &T, item: &R) -> bool
where
    T: Contains<R> + ?Sized,
    R: ?Sized,
{
    container.contains(item)
}

/// `item` is contained in `container`; the inverse of [`contains`].
pub fn within<R, T>(item: &R, container: &T) -> bool
where
    T: Contains<R> + ?Sized,
    R: ?Sized,
{
    container.contains(item)
}

/// Evaluate intersection containedness:
/// `contains(a, a & b)`, `contains(a, b & a)`, `within(a & b, a)`, `within(b & a, a)`.
///
/// Only valid for set-like containers; see the module documentation.
pub fn verify_intersection_containedness<T, B>(a: &T, b: &B) -> Verdict
where
    Et: BinaryOperation<T, B> + BinaryOperation<B, T>,
    Applied<Et, T, B>: Into<T>,
    Applied<Et, B, T>: Into<T>,
    T: Contains<T> + Clone + Debug,
    B: Clone,
{
    let ab: T = <Et as BinaryOperation<T, B>>::apply(Et, a.clone(), b.clone()).into();
    let ba: T = <Et as BinaryOperation<B, T>>::apply(Et, b.clone(), a.clone()).into();
    let op = Some(OperatorKind::Et);
    let law = Law::IntersectionContainedness;

    Verdict::require(law, op, contains(a, &ab), || {
        format!("contains(a, a & b): a = {a:?}, a & b = {ab:?}")
    })
    .merge(Verdict::require(law, op, contains(a, &ba), || {
        format!("contains(a, b & a): a = {a:?}, b & a = {ba:?}")
    }))
    .merge(Verdict::require(law, op, within(&ab, a), || {
        format!("within(a & b, a): a & b = {ab:?}, a = {a:?}")
    }))
    .merge(Verdict::require(law, op, within(&ba, a), || {
        format!("within(b & a, a): b & a = {ba:?}, a = {a:?}")
    }))
}

/// Assert intersection containedness.
///
/// # Panics
///
/// Panics if `a & b` or `b & a` is not contained in `a`.
#[track_caller]
pub fn check_intersection_containedness<T, B>(a: &T, b: &B)
where
    Et: BinaryOperation<T, B> + BinaryOperation<B, T>,
    Applied<Et, T, B>: Into<T>,
    Applied<Et, B, T>: Into<T>,
    T: Contains<T> + Clone + Debug,
    B: Clone,
{
    verify_intersection_containedness(a, b).assert();
}

/// Evaluate union containedness:
/// `within(a, a + b)`, `within(a, b + a)`, `contains(a + b, a)`, `contains(b + a, a)`.
pub fn verify_union_containedness<T, B>(a: &T, b: &B) -> Verdict
where
    Plus: BinaryOperation<T, B> + BinaryOperation<B, T>,
    Applied<Plus, T, B>: Into<T>,
    Applied<Plus, B, T>: Into<T>,
    T: Contains<T> + Clone + Debug,
    B: Clone,
{
    let ab: T = <Plus as BinaryOperation<T, B>>::apply(Plus, a.clone(), b.clone()).into();
    let ba: T = <Plus as BinaryOperation<B, T>>::apply(Plus, b.clone(), a.clone()).into();
    let op = Some(OperatorKind::Plus);
    let law = Law::UnionContainedness;

    Verdict::require(law, op, within(a, &ab), || {
        format!("within(a, a + b): a = {a:?}, a + b = {ab:?}")
    })
    .merge(Verdict::require(law, op, within(a, &ba), || {
        format!("within(a, b + a): a = {a:?}, b + a = {ba:?}")
    }))
    .merge(Verdict::require(law, op, contains(&ab, a), || {
        format!("contains(a + b, a): a + b = {ab:?}, a = {a:?}")
    }))
    .merge(Verdict::require(law, op, contains(&ba, a), || {
        format!("contains(b + a, a): b + a = {ba:?}, a = {a:?}")
    }))
}

/// Assert union containedness.
///
/// # Panics
///
/// Panics if `a` is not contained in `a + b` or `b + a`.
#[track_caller]
pub fn check_union_containedness<T, B>(a: &T, b: &B)
where
    Plus: BinaryOperation<T, B> + BinaryOperation<B, T>,
    Applied<Plus, T, B>: Into<T>,
    Applied<Plus, B, T>: Into<T>,
    T: Contains<T> + Clone + Debug,
    B: Clone,
{
    verify_union_containedness(a, b).assert();
}

/// Evaluate domain containedness: the domain of `a` is contained in `a`, and so is
/// its first element when the domain is not empty.
pub fn verify_domain_containedness<M>(a: &M) -> Verdict
where
    M: Domain + Contains<M::Set> + Contains<<M::Set as ElementSet>::Element> + Debug,
    M::Set: ElementSet + Debug,
    <M::Set as ElementSet>::Element: Debug,
{
    let dom = a.domain();
    let law = Law::DomainContainedness;

    let verdict = Verdict::require(law, None, within(&dom, a), || {
        format!("within(domain(a), a): domain(a) = {dom:?}, a = {a:?}")
    })
    .merge(Verdict::require(law, None, contains(a, &dom), || {
        format!("contains(a, domain(a)): a = {a:?}, domain(a) = {dom:?}")
    }));

    if ElementSet::is_empty(&dom) {
        return verdict;
    }
    match dom.first_element() {
        Some(first) => verdict
            .merge(Verdict::require(law, None, within(&first, a), || {
                format!("within(first, a): first = {first:?}, a = {a:?}")
            }))
            .merge(Verdict::require(law, None, contains(a, &first), || {
                format!("contains(a, first): a = {a:?}, first = {first:?}")
            })),
        None => verdict.merge(Verdict::fail(
            law,
            None,
            format!("non-empty domain without a first element: {dom:?}"),
        )),
    }
}

/// Assert domain containedness.
///
/// # Panics
///
/// Panics if the domain of `a`, or its first element, is not contained in `a`.
#[track_caller]
pub fn check_domain_containedness<M>(a: &M)
where
    M: Domain + Contains<M::Set> + Contains<<M::Set as ElementSet>::Element> + Debug,
    M::Set: ElementSet + Debug,
    <M::Set as ElementSet>::Element: Debug,
{
    verify_domain_containedness(a).assert();
}

#[cfg(test)]
mod tests {
    use std::collections::{BTreeMap, BTreeSet};
    use std::ops::{Add, BitAnd};

    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Keys(BTreeSet<u8>);

    impl Contains<Keys> for Keys {
        fn contains(&self, rhs: &Keys) -> bool {
            rhs.0.is_subset(&self.0)
        }
    }

    impl Add for Keys {
        type Output = Keys;
        fn add(self, rhs: Keys) -> Keys {
            Keys(self.0.union(&rhs.0).copied().collect())
        }
    }

    impl BitAnd for Keys {
        type Output = Keys;
        fn bitand(self, rhs: Keys) -> Keys {
            Keys(self.0.intersection(&rhs.0).copied().collect())
        }
    }

    fn keys(items: &[u8]) -> Keys {
        Keys(items.iter().copied().collect())
    }

    #[test]
    fn sets_satisfy_containment() {
        check_intersection_containedness(&keys(&[1, 2, 3]), &keys(&[2, 3, 4]));
        check_union_containedness(&keys(&[1, 2, 3]), &keys(&[2, 3, 4]));
    }

    #[test]
    fn empty_operands_are_trivially_contained() {
        check_intersection_containedness(&keys(&[]), &keys(&[]));
        check_union_containedness(&keys(&[]), &keys(&[7]));
        assert_eq!(verify_union_containedness(&keys(&[]), &keys(&[])).evaluated, 4);
    }

    #[derive(Debug, Clone)]
    struct Ledger(BTreeMap<u8, i32>);

    impl Domain for Ledger {
        type Set = Keys;
        fn domain(&self) -> Keys {
            Keys(self.0.keys().copied().collect())
        }
    }

    impl ElementSet for Keys {
        type Element = u8;
        fn first_element(&self) -> Option<u8> {
            self.0.first().copied()
        }
        fn is_empty(&self) -> bool {
            self.0.is_empty()
        }
    }

    impl Contains<Keys> for Ledger {
        fn contains(&self, rhs: &Keys) -> bool {
            rhs.0.iter().all(|key| self.0.contains_key(key))
        }
    }

    impl Contains<u8> for Ledger {
        fn contains(&self, rhs: &u8) -> bool {
            self.0.contains_key(rhs)
        }
    }

    #[test]
    fn domain_is_contained_in_map() {
        let ledger = Ledger([(3, 10), (5, -2)].into_iter().collect());
        check_domain_containedness(&ledger);
        assert_eq!(verify_domain_containedness(&ledger).evaluated, 4);

        let empty = Ledger(BTreeMap::new());
        let verdict = verify_domain_containedness(&empty);
        assert!(verdict.holds());
        assert_eq!(verdict.evaluated, 2);
    }

    #[test]
    fn broken_contains_is_reported() {
        #[derive(Debug, Clone)]
        struct Forgetful;
        impl Contains<Forgetful> for Forgetful {
            fn contains(&self, _: &Forgetful) -> bool {
                false
            }
        }
        impl Add for Forgetful {
            type Output = Forgetful;
            fn add(self, _: Forgetful) -> Forgetful {
                Forgetful
            }
        }

        let verdict = verify_union_containedness(&Forgetful, &Forgetful);
        assert_eq!(verdict.violations().len(), 4);
        assert!(verdict.violates(Law::UnionContainedness));
        assert!(verdict.violations()[0].detail.starts_with("within(a, a + b)"));
    }
}
