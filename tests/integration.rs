//! End-to-end decomposition scenarios.

mod common;

use common::{assert_decomposes, check_decomposition, pow, BASES};
use palsum::{
    decompose, sweep, Category, Error, Options, Precondition, Strategy, VerifiedTriple,
};

// ============================================================================
// EXHAUSTIVE RANGES
// ============================================================================

#[test]
fn test_every_base_ten_number_up_to_ten_thousand() {
    let report = sweep(10, 100..10_000, &Options::default(), |_| {});
    assert!(report.is_clean(), "{:?}", report.failures);
    assert_eq!(report.decomposed, 9_900);
    assert_eq!(report.skipped, 0);
    // the constructive path carries the bulk of the range
    let constructive = report.by_strategy.get(&Strategy::Constructive).copied();
    assert!(constructive.unwrap_or(0) > 5_000);

    // sum, palindromes and the special flag against p1, for every n
    let mut special = 0;
    for n in 100..10_000u128 {
        let d = decompose(n, 10).unwrap();
        if let Err(msg) = check_decomposition(&d) {
            panic!("{}: {}", n, msg);
        }
        special += u64::from(d.is_special);
    }
    assert_eq!(special, report.special);
}

#[test]
fn test_small_bases_exhaustively() {
    for base in [5u32, 6, 7] {
        let lo = pow(base, 2);
        let hi = pow(base, 5).min(20_000);
        for n in lo..hi {
            assert_decomposes(n, base);
        }
    }
}

#[test]
fn test_every_base_at_its_boundaries() {
    for base in BASES {
        for k in 2..=8 {
            let edge = pow(base, k);
            for n in [edge, edge + 1, edge * 2 - 1, edge * u128::from(base) - 1] {
                assert_decomposes(n, base);
            }
        }
    }
}

// ============================================================================
// PRECONDITIONS
// ============================================================================

#[test]
fn test_base_four_is_rejected() {
    assert_eq!(
        decompose(1_000, 4).unwrap_err(),
        Error::Precondition(Precondition::BaseTooSmall { base: 4 })
    );
}

#[test]
fn test_two_digit_numbers_are_rejected() {
    for n in [0u128, 7, 42, 99] {
        assert_eq!(
            decompose(n, 10).unwrap_err(),
            Error::Precondition(Precondition::TooShort {
                digits: if n < 10 { 1 } else { 2 }
            })
        );
    }
}

// ============================================================================
// WORKED EXAMPLES
// ============================================================================

#[test]
fn test_known_values() {
    let d = assert_decomposes(2_025, 10);
    assert_eq!(d.values().iter().sum::<u128>(), 2_025);

    let d = assert_decomposes(31_415_926_535, 10);
    assert_eq!(d.category, Some(Category::A3));
    assert_eq!(d.strategy, Strategy::Constructive);

    let d = assert_decomposes(73_926_184, 10);
    assert_eq!(d.category, Some(Category::A1));
}

#[test]
fn test_large_values() {
    for base in [10u32, 16, 36] {
        for n in [u128::from(u64::MAX), 10u128.pow(30) + 12_345, u128::MAX / 7] {
            assert_decomposes(n, base);
        }
    }
}

#[test]
fn test_result_revalidates() {
    let d = decompose(987_654_321, 16).unwrap();
    let triple = VerifiedTriple::new(d.n, d.base, d.values()).unwrap();
    assert_eq!(triple.values(), d.values());
    assert_eq!(triple.terms(), &d.terms);
}

#[test]
fn test_json_shape() {
    let d = decompose(2_025, 10).unwrap();
    let json = serde_json::to_value(&d).unwrap();
    assert_eq!(json["base"], 10);
    assert_eq!(json["terms"].as_array().map(Vec::len), Some(3));
    assert!(json["strategy"].is_string());
}
