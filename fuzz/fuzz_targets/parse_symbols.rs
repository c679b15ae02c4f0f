// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for symbol parsing.
//!
//! Arbitrary strings must parse or fail cleanly; whatever parses must print
//! back to the same value.

#![no_main]

use libfuzzer_sys::fuzz_target;
use palsum::{parse_symbols, to_symbols};

fuzz_target!(|data: (u8, &str)| {
    let (base, text) = data;
    let base = u32::from(base % 40);

    if let Ok(n) = parse_symbols(text, base) {
        let printed = to_symbols(n, base).expect("a parsed base has an alphabet");
        let reparsed = parse_symbols(&printed, base).expect("printed symbols must parse");
        assert_eq!(reparsed, n, "round trip through {:?}", printed);
    }
});
