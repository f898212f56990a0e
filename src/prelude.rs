//! Prelude module for convenient imports.
//!
//! ```rust
//! use algebraic_laws::prelude::*;
//!
//! check_monoid(Pipe, &0_u8, &0b0011, &0b0101, &0b1001);
//! ```

pub use proptest::prelude::*;

pub use crate::generators::intervals::{interval, interval_map, interval_set};
pub use crate::generators::operands::{bit_pattern_u32, operand_triple, small_i64};
pub use crate::law::algebraic::{
    check_associativity, check_associativity_equal, check_commutativity,
    check_commutativity_equal, check_inversion, check_inversion_equal, check_neutrality,
    check_neutrality_equal, check_partial_inversion, check_partial_inversion_equal,
    check_right_neutrality, check_right_neutrality_equal, verify_associativity,
    verify_commutativity, verify_inversion, verify_neutrality, verify_partial_inversion,
    verify_right_neutrality,
};
pub use crate::law::complement::{
    Between, Hull, Join, Measure, check_inner_complementarity, check_length_as_distance,
    check_length_complementarity, has_inner_complementarity, has_length_as_distance,
    has_length_complementarity, verify_inner_complementarity, verify_length_as_distance,
    verify_length_complementarity,
};
pub use crate::law::containment::{
    Contains, Domain, ElementSet, check_domain_containedness, check_intersection_containedness,
    check_union_containedness, contains, verify_domain_containedness,
    verify_intersection_containedness, verify_union_containedness, within,
};
pub use crate::law::permuted::{
    check_instance, check_instance_equal, check_permuted, check_permuted_equal, verify_instance,
    verify_permuted,
};
pub use crate::law::structure::{
    check_abelian_group, check_abelian_group_equal, check_abelian_monoid,
    check_abelian_monoid_equal, check_monoid, check_monoid_equal, check_partial_invertive_monoid,
    check_partial_invertive_monoid_equal, verify_abelian_group, verify_abelian_monoid,
    verify_monoid, verify_partial_invertive_monoid,
};
pub use crate::law::{
    AbelianGroup, AbelianMonoid, Caret, Custom, Equality, Et, IdentityElement, Law, Minus,
    Monoid, NaturalEquality, PartialInvertiveMonoid, Pipe, Plus, Verdict,
};
pub use crate::reference::{Interval, IntervalMap, IntervalSet};
