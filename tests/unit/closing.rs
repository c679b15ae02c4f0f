//! Tests for propagation followed by the closing solver.

use palsum::closing::{close, open_pairs};
use palsum::digits::is_palindrome;
use palsum::propagate::{propagate, Engine};
use palsum::{classify, decompose_with, Category, Error, Number, Options, Strategy};

/// Seed, propagate and close the net category, if the seed is valid.
fn construct(n: u128, base: u32, depth: usize) -> Option<Result<[u128; 3], Error>> {
    let number = Number::new(n, base).ok()?;
    let category = classify(&number).ok()?.category;
    let propagated = propagate(&number, category).ok()?;
    Some(close(&number, &propagated.terms, depth).and_then(|closed| {
        let mut values = [0u128; 3];
        for (v, p) in values.iter_mut().zip(&closed.terms) {
            *v = p.to_integer()?;
        }
        Ok(values)
    }))
}

#[test]
fn test_closed_terms_sum_to_n() {
    for base in [5, 10, 13] {
        let start = u128::from(base).pow(4);
        let (mut closed, mut unresolved) = (0, 0);
        for n in (start..start + 3000).step_by(7) {
            match construct(n, base, 4) {
                None => continue,
                Some(Ok(values)) => {
                    assert_eq!(values.iter().sum::<u128>(), n);
                    for v in values {
                        assert!(is_palindrome(v, base).unwrap(), "{} not a palindrome", v);
                    }
                    closed += 1;
                }
                Some(Err(e)) => {
                    assert_eq!(e, Error::Unresolved { n, base });
                    unresolved += 1;
                }
            }
        }
        // the loop's greedy digits almost always leave a solvable centre
        assert!(unresolved * 4 < closed, "base {}: {} / {}", base, unresolved, closed);
    }
}

#[test]
fn test_odd_length_a_numbers_close_without_repair() {
    let options = Options {
        max_repair_depth: 0,
        ..Options::strict()
    };
    // (base, first n, stride, count); odd lengths 9 and 11, leading digit 3 or more
    let sweeps: [(u32, u128, u128, usize); 3] = [
        (10, 300_000_000, 1_734_567, 400),
        (10, 30_000_000_001, 171_234_567, 400),
        (16, 0x300_0000_0000, 0x1_2345_6789, 300),
    ];
    for (base, start, stride, count) in sweeps {
        for k in 0..count as u128 {
            let n = start + k * stride;
            let d = decompose_with(n, base, &options)
                .unwrap_or_else(|e| panic!("{} in base {}: {}", n, base, e));
            assert_eq!(d.strategy, Strategy::Constructive);
            assert!(matches!(
                d.category,
                Some(Category::A1 | Category::A2 | Category::A3 | Category::A4)
            ));
            assert_eq!(d.repair_depth, 0, "{} in base {}", n, base);
        }
    }
}

#[test]
fn test_propagation_leaves_only_central_pairs() {
    let number = Number::new(31_415_926_535, 10).unwrap();
    let category = classify(&number).unwrap().category;
    let propagated = propagate(&number, category).unwrap();
    assert!(propagated.steps > 0);

    // every palindrome still has its outer pair; only inner ones can be open
    for p in &propagated.terms {
        if !p.is_empty() {
            assert!(p.array().get(0).unwrap().is_set());
        }
    }
    let open = open_pairs(&propagated.terms, 0);
    assert!(open.iter().all(|pair| pair.low > 0));
}

#[test]
fn test_engine_steps_are_resumable() {
    let number = Number::new(73_926_184, 10).unwrap();
    let category = classify(&number).unwrap().category;

    let mut engine = Engine::new(&number, category).unwrap();
    let mut steps = 0;
    while engine.step().unwrap() {
        steps += 1;
    }
    // once done, stepping again writes nothing
    assert!(!engine.step().unwrap());
    let batch = propagate(&number, category).unwrap();
    assert_eq!(batch.steps, steps);
    assert_eq!(&batch.terms, engine.terms());
    assert_eq!(&batch.carry, engine.carry());
}
