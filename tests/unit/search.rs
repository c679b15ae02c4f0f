//! Tests for the greedy search fallback.

use palsum::digits::is_palindrome;
use palsum::search::{largest_palindrome_le, three_palindromes, DEFAULT_BUDGET};
use palsum::{decompose_with, Category, Error, Options, Strategy};

#[test]
fn test_search_covers_small_bases() {
    // the constructive path needs g >= 5; search does not
    for base in [3, 4] {
        for n in 0..300u128 {
            let [a, b, c] = three_palindromes(n, base, DEFAULT_BUDGET).unwrap();
            assert_eq!(a + b + c, n);
            assert!(a >= b && b >= c, "{:?}", [a, b, c]);
            for v in [a, b, c] {
                assert!(is_palindrome(v, base).unwrap());
            }
        }
    }
}

#[test]
fn test_largest_palindrome_le_is_palindrome_and_bounded() {
    for base in [5, 10, 36] {
        for x in [u128::from(base), 1_000_000, 987_654_321, u128::from(u64::MAX)] {
            let p = largest_palindrome_le(x, base).unwrap();
            assert!(p <= x);
            assert!(is_palindrome(p, base).unwrap());
        }
    }
}

#[test]
fn test_large_n_within_budget() {
    let n = 123_456_789_012_345_678u128;
    let [a, b, c] = three_palindromes(n, 10, DEFAULT_BUDGET).unwrap();
    assert_eq!(a + b + c, n);
}

#[test]
fn test_decompose_tries_shadowed_before_search() {
    // B_3 with n[L-2] = 0 cannot be seeded; the A_6 underneath can
    let d = decompose_with(10_010, 10, &Options::default()).unwrap();
    assert_eq!(d.strategy, Strategy::Shadowed);
    assert_eq!(d.category, Some(Category::A6));
    assert_eq!(d.values().iter().sum::<u128>(), 10_010);
}

#[test]
fn test_decompose_falls_back_to_search() {
    // B_5 cannot be seeded and A_5 leaves no closing assignment
    let d = decompose_with(10_002, 10, &Options::default()).unwrap();
    assert_eq!(d.strategy, Strategy::Search);
    assert_eq!(d.category, None);
    assert_eq!(d.repair_depth, 0);
    assert_eq!(d.values().iter().sum::<u128>(), 10_002);
}

#[test]
fn test_strict_options_skip_search() {
    let err = decompose_with(10_010, 10, &Options::strict()).unwrap_err();
    assert!(matches!(err, Error::DigitOutOfRange { .. }));
}

#[test]
fn test_zero_budget_fails_search() {
    let options = Options {
        search_budget: 0,
        ..Options::default()
    };
    let err = decompose_with(10_002, 10, &options).unwrap_err();
    assert_eq!(err, Error::Unresolved { n: 10_002, base: 10 });
}

#[test]
fn test_exhausted_closing_budget_falls_back() {
    let starved = Options {
        closing_budget: 0,
        ..Options::default()
    };
    let d = decompose_with(2_025, 10, &starved).unwrap();
    assert_eq!(d.strategy, Strategy::Search);
    assert_eq!(d.values().iter().sum::<u128>(), 2_025);

    let strict = Options {
        closing_budget: 0,
        ..Options::strict()
    };
    assert_eq!(
        decompose_with(2_025, 10, &strict).unwrap_err(),
        Error::Unresolved { n: 2_025, base: 10 }
    );
}
