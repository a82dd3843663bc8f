// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: Copyright (C) 2025 medfuzzy developers

#![cfg(feature = "easy-functions")]

use sha1::Sha1;
use sha2::{Sha256, Sha512};

use crate::hash::FuzzyHash;
use crate::reduce::{Granularity, ReduceError};




/// Generates a fuzzy hash with SHA-1, extracting `count` bytes from the input.
///
/// See [`extract_bytes()`](crate::extract_bytes()) for the reduction.
pub fn hash_sha1(buffer: &[u8], count: usize) -> Result<FuzzyHash, ReduceError> {
    FuzzyHash::hash_with::<Sha1>(buffer, Granularity::OutputCount(count))
}

/// Generates a fuzzy hash with SHA-256, extracting `count` bytes from the input.
///
/// # Example
///
/// ```
/// assert_eq!(
///     medfuzzy::hash_sha256(b"elephants are like horses", 16).unwrap().to_string(),
///     "045827d5d10a1300430e95683ed7b57b295aae163b789a24f246f33a446a57c6:16"
/// );
/// ```
pub fn hash_sha256(buffer: &[u8], count: usize) -> Result<FuzzyHash, ReduceError> {
    FuzzyHash::hash_with::<Sha256>(buffer, Granularity::OutputCount(count))
}

/// Generates a fuzzy hash with SHA-512, extracting `count` bytes from the input.
pub fn hash_sha512(buffer: &[u8], count: usize) -> Result<FuzzyHash, ReduceError> {
    FuzzyHash::hash_with::<Sha512>(buffer, Granularity::OutputCount(count))
}

/// Generates a fuzzy hash with SHA-256 and the window size derived from
/// the fuzziness factor.
///
/// # Example
///
/// ```
/// let hash1 = medfuzzy::hash_sha256_fuzzy(b"tre concrete is unprocessable there!", 1.0).unwrap();
/// let hash2 = medfuzzy::hash_sha256_fuzzy(b"the concrete is unprocessable therz!", 1.0).unwrap();
/// assert_eq!(hash1, hash2);
/// assert_eq!(hash1.tolerance(), 12);
/// ```
pub fn hash_sha256_fuzzy(buffer: &[u8], fuzziness: f64) -> Result<FuzzyHash, ReduceError> {
    FuzzyHash::hash_with::<Sha256>(buffer, Granularity::Fuzziness(fuzziness))
}

/// Unwraps a fuzzy hash generation result or panics.
///
/// This is a convenience wrapper for inputs already known to be valid
/// (e.g. constant test data).  Use the [`Result`] returned by the
/// generator functions everywhere else.
///
/// # Panics
///
/// Panics with the error message if `result` is an error.
///
/// # Example
///
/// ```
/// use medfuzzy::{hash_sha256, must_hash};
/// let hash = must_hash(hash_sha256(b"elephants like horses", 1));
/// assert_eq!(hash.tolerance(), 1);
/// ```
///
/// ```should_panic
/// use medfuzzy::{hash_sha256, must_hash};
/// let _ = must_hash(hash_sha256(b"short", 6));
/// ```
#[track_caller]
pub fn must_hash<E: core::fmt::Display>(result: Result<FuzzyHash, E>) -> FuzzyHash {
    match result {
        Ok(hash) => hash,
        Err(err) => panic!("failed to generate a fuzzy hash: {}", err),
    }
}
