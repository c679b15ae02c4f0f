//! Tests for digit containers and radix conversion through the public API.

use palsum::digits::radix::{digit_len, is_palindrome};
use palsum::{
    from_digits, is_special, parse_symbols, to_digits, to_symbols, Cell, DigitSeq, Error,
    WriteMode,
};

#[test]
fn test_symbols_round_trip_across_bases() {
    for base in [2, 5, 10, 16, 36] {
        for n in [0u128, 1, 35, 1_000_003, u128::from(u64::MAX)] {
            let s = to_symbols(n, base).unwrap();
            assert_eq!(parse_symbols(&s, base).unwrap(), n, "{} in base {}", n, base);
            assert_eq!(parse_symbols(&s.to_lowercase(), base).unwrap(), n);
        }
    }
}

#[test]
fn test_parse_symbols_errors() {
    assert_eq!(
        parse_symbols("12G", 16),
        Err(Error::InvalidSymbol {
            symbol: 'G',
            base: 16
        })
    );
    assert_eq!(parse_symbols("", 10), Err(Error::EmptyInput));
    // the base is checked before the input
    assert_eq!(parse_symbols("", 40), Err(Error::UnsupportedBase { base: 40 }));
    assert_eq!(parse_symbols("1", 37), Err(Error::UnsupportedBase { base: 37 }));
}

#[test]
fn test_u128_edges() {
    let digits = to_digits(u128::MAX, 10).unwrap();
    assert_eq!(digits.len(), 39);
    assert_eq!(from_digits(&digits, 10).unwrap(), u128::MAX);

    let mut too_big = digits;
    too_big.push(1);
    assert_eq!(from_digits(&too_big, 10), Err(Error::Overflow));
}

#[test]
fn test_digit_len() {
    assert_eq!(digit_len(0, 10).unwrap(), 1);
    assert_eq!(digit_len(99, 10).unwrap(), 2);
    assert_eq!(digit_len(100, 10).unwrap(), 3);
    assert_eq!(digit_len(u128::MAX, 2).unwrap(), 128);
}

#[test]
fn test_is_palindrome() {
    assert!(is_palindrome(0, 10).unwrap());
    assert!(is_palindrome(12321, 10).unwrap());
    assert!(!is_palindrome(10, 10).unwrap());
    // 0x1F1
    assert!(is_palindrome(497, 16).unwrap());
}

#[test]
fn test_is_special_reads_central_pair() {
    // least significant first; length 4, centre at indices 1 and 2
    assert!(is_special(&[1, 0, 0, 1]));
    assert!(!is_special(&[1, 2, 2, 1]));
    // odd lengths never qualify
    assert!(!is_special(&[1, 0, 1]));
    assert!(!is_special(&[]));
}

#[test]
fn test_carry_column_writes_plainly() {
    let mut c = DigitSeq::carry_column(10, 4);
    c.set(1, 1).unwrap();
    assert_eq!(c.mode(), WriteMode::Plain);
    assert_eq!(c.get(4).unwrap(), Cell::Unset);
    assert_eq!(c.array().undetermined(), 3);
}

#[test]
fn test_palindrome_fills_both_halves() {
    let mut p = DigitSeq::palindrome(7, 5);
    for (pos, d) in [(1, 3), (2, 0), (3, 6)] {
        p.set(pos, d).unwrap();
    }
    assert!(p.array().is_complete());
    let v = p.to_integer().unwrap();
    assert!(is_palindrome(v, 7).unwrap());
    assert_eq!(to_symbols(v, 7).unwrap(), "30603");
}
