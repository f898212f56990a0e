//! Scalar operands for the algebraic laws.

use proptest::prelude::*;

/// Bound that keeps sums and differences of a few operands well inside `i64`.
pub const SMALL_BOUND: i64 = 1 << 40;

/// `i64` in `[-SMALL_BOUND, SMALL_BOUND]`, weighted toward zero and unit values.
///
/// Sums and differences of a handful of these never overflow, so arithmetic laws
/// can be checked without wrapping.
pub fn small_i64() -> impl Strategy<Value = i64> + Clone {
    prop_oneof![
        1 => Just(0_i64),
        1 => Just(1_i64),
        1 => Just(-1_i64),
        1 => Just(SMALL_BOUND),
        1 => Just(-SMALL_BOUND),
        5 => -SMALL_BOUND..=SMALL_BOUND,
    ]
}

/// Arbitrary bit patterns for the bitwise operators.
pub fn bit_pattern_u32() -> impl Strategy<Value = u32> + Clone {
    prop_oneof![
        1 => Just(0_u32),
        1 => Just(u32::MAX),
        4 => any::<u32>(),
    ]
}

/// Three independent draws from `operand`.
pub fn operand_triple<S>(operand: S) -> impl Strategy<Value = (S::Value, S::Value, S::Value)>
where
    S: Strategy + Clone,
{
    (operand.clone(), operand.clone(), operand)
}

#[cfg(test)]
mod tests {
    use super::*;

    proptest! {
        #[test]
        fn small_values_stay_bounded(v in small_i64()) {
            prop_assert!((-SMALL_BOUND..=SMALL_BOUND).contains(&v));
        }

        #[test]
        fn triples_do_not_overflow_when_summed((a, b, c) in operand_triple(small_i64())) {
            prop_assert!(a.checked_add(b).and_then(|ab| ab.checked_add(c)).is_some());
            prop_assert!(a.checked_sub(b).and_then(|ab| ab.checked_sub(c)).is_some());
        }

        #[test]
        fn bit_pattern_triples_compose_with_xor(
            (a, b, c) in operand_triple(bit_pattern_u32())
        ) {
            prop_assert_eq!(a ^ b ^ c ^ a, b ^ c);
        }
    }
}
