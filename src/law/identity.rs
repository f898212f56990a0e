//! Identity-element capability used by the permuted and instance checks.
//!
//! Primitive and composite checks take the identity as an explicit argument. Only the
//! permuted checks, which switch the subject between two operand types, need to
//! resolve it from the type, and they do so through this trait rather than any global
//! lookup table.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::hash::Hash;

/// A type with a distinguished neutral value.
///
/// The value is the default or empty one: `0` for numbers, the empty collection for
/// containers. It is neutral for `+` and `|`; for `&` and `^` the symmetric
/// neutrality check still holds because both sides collapse the same way.
pub trait IdentityElement: Sized {
    /// The neutral value.
    fn identity_element() -> Self;
}

macro_rules! numeric_identity {
    ($($ty:ty),* $(,)?) => {
        $(
            impl IdentityElement for $ty {
                fn identity_element() -> Self {
                    0 as $ty
                }
            }
        )*
    };
}

numeric_identity!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64
);

impl IdentityElement for bool {
    fn identity_element() -> Self {
        false
    }
}

impl IdentityElement for String {
    fn identity_element() -> Self {
        String::new()
    }
}

impl<T> IdentityElement for Vec<T> {
    fn identity_element() -> Self {
        Vec::new()
    }
}

impl<T> IdentityElement for VecDeque<T> {
    fn identity_element() -> Self {
        VecDeque::new()
    }
}

impl<T: Ord> IdentityElement for BTreeSet<T> {
    fn identity_element() -> Self {
        BTreeSet::new()
    }
}

impl<K: Ord, V> IdentityElement for BTreeMap<K, V> {
    fn identity_element() -> Self {
        BTreeMap::new()
    }
}

impl<T: Eq + Hash> IdentityElement for HashSet<T> {
    fn identity_element() -> Self {
        HashSet::new()
    }
}

impl<K: Eq + Hash, V> IdentityElement for HashMap<K, V> {
    fn identity_element() -> Self {
        HashMap::new()
    }
}

/// Resolve the identity element of `T`.
#[must_use]
pub fn identity_of<T: IdentityElement>() -> T {
    T::identity_element()
}
