//! Properties of the classifier and the constructive pipeline.

use palsum::seed::seed;
use palsum::{classify, Category, Error, Number, Precondition, MIN_DIGITS};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    /// Every number with at least three digits gets a category.
    #[test]
    fn prop_classification_is_total(n in any::<u128>(), g in 5u32..=100) {
        let number = Number::new(n, g).unwrap();
        match classify(&number) {
            Ok(c) => {
                prop_assert!(!matches!(
                    c.category,
                    Category::A5 | Category::A6 | Category::B1 | Category::B2
                ));
                prop_assert_ne!(Some(c.category), c.shadowed);
            }
            Err(e) => {
                prop_assert!(number.len() < MIN_DIGITS);
                prop_assert_eq!(
                    e,
                    Error::Precondition(Precondition::TooShort { digits: number.len() })
                );
            }
        }
    }

    /// A leading 1 always lands in the B families; anything else never does.
    #[test]
    fn prop_leading_digit_picks_family(n in 50_000u128..u128::from(u64::MAX), g in 5u32..=36) {
        let number = Number::new(n, g).unwrap();
        let c = classify(&number).unwrap();
        let leading = number.digit(number.len() - 1).unwrap();
        prop_assert_eq!(c.category.is_b(), leading == 1);
        if let Some(shadowed) = c.shadowed {
            prop_assert!(!shadowed.is_b());
            prop_assert_eq!(leading, 1);
        }
    }

    /// Seeded palindromes are never longer than n and keep mirrored digits equal.
    #[test]
    fn prop_seed_shapes(n in 100_000u128..u128::from(u64::MAX), g in 5u32..=36) {
        let number = Number::new(n, g).unwrap();
        let category = classify(&number).unwrap().category;
        if let Ok(terms) = seed(&number, category) {
            for p in &terms {
                prop_assert!(p.len() <= number.len());
                let cells = p.array().cells();
                for (a, b) in cells.iter().zip(cells.iter().rev()) {
                    prop_assert_eq!(a, b);
                }
            }
        }
    }
}
