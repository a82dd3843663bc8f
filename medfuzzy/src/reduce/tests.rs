// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: Copyright (C) 2025 medfuzzy developers
// grcov-excl-br-start

//! Tests: [`crate::reduce`].

#![cfg(test)]

use alloc::borrow::Cow;

use itertools::Itertools;

use super::{
    extract_bytes, reduce, window_size_for_fuzziness, Granularity, ReduceError,
    MAX_INPUT_SIZE, MAX_WINDOW_SIZE,
};
use crate::test_utils::{cover_auto_clone, cover_auto_debug, test_auto_clone};


const CONCRETE_1: &[u8] = b"tre concrete is unprocessable there!";
const CONCRETE_2: &[u8] = b"the concrete is unprocessable therz!";
const ELEPHANTS_LIKE: &[u8] = b"elephants like horses";
const ELEPHANTS_ARE: &[u8] = b"elephants are horses";

/// `"0123456789"` in hexadecimal.
const DIGITS: &[u8] = &[0x01, 0x23, 0x45, 0x67, 0x89];


#[test]
fn reduce_error_impls() {
    // Test Clone
    test_auto_clone::<ReduceError>(&ReduceError::OutputCountTooLarge);
    // Test Debug
    crate::test_utils::test_auto_debug_for_enum!(ReduceError, [
        OutputCountTooLarge,
        OutputCountIsZero,
        FuzzinessIsInvalid,
        InputTooLarge,
    ]);
}

#[rustfmt::skip]
#[test]
fn reduce_error_impl_display() {
    assert_eq!(format!("{}", ReduceError::OutputCountTooLarge), "output count is larger than the input size");
    assert_eq!(format!("{}", ReduceError::OutputCountIsZero),   "output count is zero on a non-empty input");
    assert_eq!(format!("{}", ReduceError::FuzzinessIsInvalid),  "fuzziness factor is out of the valid range");
    assert_eq!(format!("{}", ReduceError::InputTooLarge),       "input size is too large to reduce");
}

#[test]
fn granularity_impls() {
    let granularity = Granularity::Fuzziness(0.5);
    cover_auto_clone(&granularity);
    cover_auto_debug(&granularity);
    let copied = granularity;
    assert_eq!(copied, Granularity::Fuzziness(0.5));
    assert_ne!(Granularity::OutputCount(3), Granularity::OutputCount(4));
}

#[test]
fn window_size_examples() {
    assert_eq!(window_size_for_fuzziness(1.0),    Ok(12));
    assert_eq!(window_size_for_fuzziness(2.0),    Ok(24));
    assert_eq!(window_size_for_fuzziness(0.5),    Ok(6));
    assert_eq!(window_size_for_fuzziness(0.25),   Ok(3));
    assert_eq!(window_size_for_fuzziness(0.3333), Ok(4));
    assert_eq!(window_size_for_fuzziness(0.01),   Ok(1));
    assert_eq!(window_size_for_fuzziness(1e-300), Ok(1));
    assert_eq!(window_size_for_fuzziness(100.0),  Ok(1200));
}

#[test]
fn window_size_invalid() {
    for &fuzziness in &[0.0, -0.0, -1.0, f64::NAN, f64::INFINITY, f64::NEG_INFINITY, f64::MAX, 1e12] {
        assert_eq!(
            window_size_for_fuzziness(fuzziness),
            Err(ReduceError::FuzzinessIsInvalid),
            "failed on fuzziness={}", fuzziness
        );
    }
    // The largest window is still accepted.
    let largest = MAX_WINDOW_SIZE as f64 / 12.0;
    assert_eq!(window_size_for_fuzziness(largest), Ok(MAX_WINDOW_SIZE));
}

#[test]
fn extract_bytes_unchanged_on_same_size() {
    let inputs: [&[u8]; 4] = [b"", b"a", ELEPHANTS_ARE, CONCRETE_1];
    for input in inputs {
        let extracted = extract_bytes(input, input.len()).unwrap();
        assert!(matches!(extracted, Cow::Borrowed(_)), "failed on input={:?}", input);
        assert_eq!(&*extracted, input);
    }
}

#[test]
fn extract_bytes_errors() {
    assert_eq!(extract_bytes(b"", 1), Err(ReduceError::OutputCountTooLarge));
    assert_eq!(extract_bytes(ELEPHANTS_ARE, ELEPHANTS_ARE.len() + 1), Err(ReduceError::OutputCountTooLarge));
    assert_eq!(extract_bytes(ELEPHANTS_ARE, usize::MAX), Err(ReduceError::OutputCountTooLarge));
    assert_eq!(extract_bytes(ELEPHANTS_ARE, 0), Err(ReduceError::OutputCountIsZero));
}

#[test]
fn extract_bytes_windows() {
    // "0123456789" (rough median: '5')
    // window 5: "01234" "56789"
    assert_eq!(&*extract_bytes(DIGITS, 2).unwrap(), b"27");
    // window 3: "012" "345" "678" ("95": partial, not sampled)
    assert_eq!(&*extract_bytes(DIGITS, 3).unwrap(), b"147");
    // window 2: "01" "23" "45" "67" "89"
    assert_eq!(&*extract_bytes(DIGITS, 4).unwrap(), b"13579");
}

#[test]
fn extract_bytes_examples() {
    assert_eq!(&*extract_bytes(b"Hello, World!", 4).unwrap(), b"6c66");
    assert_eq!(&*extract_bytes(b"elephants are like horses", 16).unwrap(), b"66667422566628756");
    assert_eq!(&*extract_bytes(ELEPHANTS_LIKE, 16).unwrap(), b"6c6786e772c9b628f7767");
    assert_eq!(&*extract_bytes(ELEPHANTS_ARE,  16).unwrap(), b"6c6786e77267628f7767");
}

#[test]
fn extract_bytes_fine_and_coarse() {
    const CASES: &[(usize, bool)] = &[
        (1, true),
        (2, true),
        (3, false),
        (4, true),
        (5, false),
        (16, false),
        (19, false),
    ];
    for &(count, same) in CASES {
        let a = extract_bytes(ELEPHANTS_LIKE, count).unwrap();
        let b = extract_bytes(ELEPHANTS_ARE,  count).unwrap();
        assert_eq!(a == b, same, "failed on count={}", count);
    }
}

#[test]
fn reduce_output_count() {
    let reduction = reduce(DIGITS, Granularity::OutputCount(3)).unwrap();
    assert_eq!(reduction.as_bytes(), b"147");
    assert_eq!(reduction.tolerance(), 3);
    assert!(!reduction.is_unchanged());
    let reduction = reduce(DIGITS, Granularity::OutputCount(DIGITS.len())).unwrap();
    assert_eq!(reduction.as_bytes(), DIGITS);
    assert_eq!(reduction.tolerance(), 5);
    assert!(reduction.is_unchanged());
    test_auto_clone(&reduction);
    assert!(matches!(reduction.into_bytes(), Cow::Borrowed(_)));
    assert_eq!(reduce(DIGITS, Granularity::OutputCount(6)), Err(ReduceError::OutputCountTooLarge));
}

#[test]
fn reduce_fuzziness() {
    const CASES: &[(f64, &[u8], i64)] = &[
        // window 3: same as the output count 3.
        (0.25,   b"147", 3),
        // window 4: padded with "55" and "8955" is the last window.
        (0.3333, b"268", 4),
        // window 6: padded with "5555", "55" is not sampled.
        (0.5,    b"37",  6),
        // window 12: larger than the input; the whole input is one window.
        (1.0,    b"5",   12),
        (100.0,  b"5",   1200),
    ];
    for &(fuzziness, expected, tolerance) in CASES {
        let reduction = reduce(DIGITS, Granularity::Fuzziness(fuzziness)).unwrap();
        assert_eq!(reduction.as_bytes(), expected, "failed on fuzziness={}", fuzziness);
        assert_eq!(reduction.tolerance(), tolerance, "failed on fuzziness={}", fuzziness);
        assert!(!reduction.is_unchanged());
    }
}

#[test]
fn reduce_fuzziness_edge_inputs() {
    let reduction = reduce(b"", Granularity::Fuzziness(1.0)).unwrap();
    assert!(reduction.as_bytes().is_empty());
    assert_eq!(reduction.tolerance(), 12);
    let reduction = reduce(&[0xab], Granularity::Fuzziness(0.01)).unwrap();
    assert_eq!(reduction.as_bytes(), b"ab");
    assert_eq!(reduction.tolerance(), 1);
    let reduction = reduce(&[0xab], Granularity::Fuzziness(100.0)).unwrap();
    assert_eq!(reduction.as_bytes(), b"b");
    assert_eq!(reduce(DIGITS, Granularity::Fuzziness(0.0)), Err(ReduceError::FuzzinessIsInvalid));
    assert_eq!(reduce(DIGITS, Granularity::Fuzziness(f64::NAN)), Err(ReduceError::FuzzinessIsInvalid));
}

#[test]
fn reduce_fuzziness_ladder() {
    const CASES: &[(f64, bool)] = &[
        (0.25,  false),
        (0.5,   false),
        (1.0,   true),
        (2.0,   true),
        (10.0,  true),
        (100.0, true),
    ];
    for &(fuzziness, same) in CASES {
        let a = reduce(CONCRETE_1, Granularity::Fuzziness(fuzziness)).unwrap();
        let b = reduce(CONCRETE_2, Granularity::Fuzziness(fuzziness)).unwrap();
        assert_eq!(a == b, same, "failed on fuzziness={}", fuzziness);
    }
}

#[test]
fn reduce_output_length() {
    // Output length: floor((n + n % w) / w) where n is the hex length.
    for (len, count) in (1..=40usize).cartesian_product(1..=40usize) {
        if count >= len {
            continue;
        }
        let input: Vec<u8> = (0..len).map(|x| (x * 37 % 251) as u8).collect();
        let hex_len = len * 2;
        let window = hex_len / count;
        let expected = (hex_len + hex_len % window) / window;
        assert_eq!(
            extract_bytes(&input, count).unwrap().len(),
            expected,
            "failed on len={}, count={}", len, count
        );
    }
}

#[test]
fn reduce_is_deterministic() {
    let inputs = [CONCRETE_1, CONCRETE_2, ELEPHANTS_LIKE, ELEPHANTS_ARE, DIGITS];
    for input in inputs {
        for count in 1..=input.len() {
            let granularity = Granularity::OutputCount(count);
            assert_eq!(reduce(input, granularity), reduce(input, granularity));
        }
        for fuzziness in [0.1, 0.5, 1.0, 3.5] {
            let granularity = Granularity::Fuzziness(fuzziness);
            assert_eq!(reduce(input, granularity), reduce(input, granularity));
        }
    }
}

#[test]
fn reduced_bytes_are_hex_digits() {
    for fuzziness in [0.05, 0.2, 0.7, 1.3] {
        let reduction = reduce(CONCRETE_1, Granularity::Fuzziness(fuzziness)).unwrap();
        assert!(
            reduction.as_bytes().iter().all(u8::is_ascii_hexdigit),
            "failed on fuzziness={}", fuzziness
        );
    }
}

#[test]
fn max_input_size_fits_in_tolerance() {
    assert!(i64::try_from(MAX_INPUT_SIZE).is_ok());
    assert!(i64::try_from(MAX_WINDOW_SIZE).is_ok());
}
