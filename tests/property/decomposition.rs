//! Properties of complete decompositions.

use super::common::{check_decomposition, from_msd};
use palsum::search::{three_palindromes, DEFAULT_BUDGET};
use palsum::{decompose, decompose_with, Error, Options, Precondition};
use proptest::prelude::*;

// ============================================================================
// STRATEGIES
// ============================================================================

/// A base and a most-significant-first digit string of 3..=14 digits, biased
/// towards the leading and trailing digits the classifier cares about.
fn shaped_number() -> impl Strategy<Value = (u32, u128)> {
    prop::sample::select(vec![5u32, 6, 7, 8, 10, 16, 36]).prop_flat_map(|g| {
        (
            Just(g),
            prop::collection::vec(0..g, 3..=14),
            prop_oneof![Just(1u32), 1..g],
            prop_oneof![Just(0u32), Just(1), Just(2), 0..g],
            prop_oneof![Just(0u32), Just(3), 0..g],
        )
            .prop_map(|(g, mut ds, lead, second, last)| {
                ds[0] = lead;
                ds[1] = second;
                let end = ds.len() - 1;
                ds[end] = last;
                (g, from_msd(&ds, g))
            })
    })
}

// ============================================================================
// PROPERTIES
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    /// Every returned triple sums to n and every term is a palindrome.
    #[test]
    fn prop_decomposition_is_valid((g, n) in shaped_number()) {
        let d = decompose(n, g).unwrap();
        prop_assert_eq!(d.n, n);
        prop_assert_eq!(d.base, g);
        if let Err(msg) = check_decomposition(&d) {
            return Err(TestCaseError::fail(msg));
        }
    }

    /// Same input, same output.
    #[test]
    fn prop_decomposition_is_deterministic((g, n) in shaped_number()) {
        prop_assert_eq!(decompose(n, g).unwrap(), decompose(n, g).unwrap());
    }

    /// Strict mode either agrees with the default or fails with an inspectable error.
    #[test]
    fn prop_strict_is_a_restriction((g, n) in shaped_number()) {
        match decompose_with(n, g, &Options::strict()) {
            Ok(strict) => prop_assert_eq!(strict, decompose(n, g).unwrap()),
            Err(e) => prop_assert!(
                !matches!(e, Error::Precondition(_) | Error::Invariant(_)),
                "{}",
                e
            ),
        }
    }

    /// Bases below 5 are rejected before anything else runs.
    #[test]
    fn prop_small_base_rejected(n in any::<u64>(), g in 0u32..5) {
        prop_assert_eq!(
            decompose(u128::from(n), g).unwrap_err(),
            Error::Precondition(Precondition::BaseTooSmall { base: g })
        );
    }

    /// The search on its own is a valid decomposer for small n.
    #[test]
    fn prop_search_valid(n in 0u128..1_000_000, g in 3u32..=36) {
        let [a, b, c] = three_palindromes(n, g, DEFAULT_BUDGET).unwrap();
        prop_assert_eq!(a + b + c, n);
    }
}
