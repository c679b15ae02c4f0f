//! Properties of digit conversion and palindrome detection.

use palsum::digits::{digit_len, is_palindrome};
use palsum::search::largest_palindrome_le;
use palsum::{from_digits, is_special, parse_symbols, to_digits, to_symbols, DigitSeq};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    #[test]
    fn prop_digits_round_trip(n in any::<u128>(), g in 2u32..=1000) {
        let digits = to_digits(n, g).unwrap();
        prop_assert_eq!(digits.len(), digit_len(n, g).unwrap());
        prop_assert!(digits.iter().all(|&d| d < g));
        prop_assert_eq!(from_digits(&digits, g).unwrap(), n);
    }

    #[test]
    fn prop_symbols_round_trip(n in any::<u128>(), g in 2u32..=36) {
        let s = to_symbols(n, g).unwrap();
        prop_assert_eq!(parse_symbols(&s, g).unwrap(), n);
    }

    /// Filling the lower half of a mirrored sequence always yields a palindrome.
    #[test]
    fn prop_mirrored_writes_build_palindromes(
        g in 5u32..=36,
        half in prop::collection::vec(0u32..36, 1..12),
        odd in any::<bool>(),
    ) {
        let half: Vec<u32> = half.into_iter().map(|d| d % g).collect();
        let len = 2 * half.len() - usize::from(odd);
        let mut p = DigitSeq::palindrome(g, len);
        for (i, &d) in half.iter().enumerate() {
            p.set(i + 1, d).unwrap();
        }
        let value = p.to_integer().unwrap();
        // a leading zero shortens the expansion but keeps the symmetry of the rest
        if half[0] != 0 {
            prop_assert!(is_palindrome(value, g).unwrap());
            prop_assert_eq!(digit_len(value, g).unwrap(), len);
        }
    }

    #[test]
    fn prop_largest_palindrome_le(x in any::<u64>(), g in 2u32..=36) {
        let x = u128::from(x);
        let p = largest_palindrome_le(x, g).unwrap();
        prop_assert!(p <= x);
        prop_assert!(is_palindrome(p, g).unwrap());
        // nothing between p and x is a palindrome
        for v in (p + 1)..=x.min(p + 200) {
            prop_assert!(!is_palindrome(v, g).unwrap());
        }
    }

    /// Odd-length expansions are never special.
    #[test]
    fn prop_odd_length_not_special(
        half in prop::collection::vec(0u32..10, 0..10),
        centre in 0u32..10,
    ) {
        let mut digits = half.clone();
        digits.push(centre);
        digits.extend(half.iter().rev());
        prop_assert!(!is_special(&digits));
    }
}
