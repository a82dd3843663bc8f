// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: Copyright (C) 2025 medfuzzy developers

//! # medfuzzy: median-sampling fuzzy hashes
//!
//! This crate generates "fuzzy hashes": digests that stay the same for
//! inputs differing only slightly.  Unlike a cryptographic hash, a small
//! change to the input often does *not* change the output.
//!
//! A fuzzy hash is generated in two steps:
//!
//! 1.  **Reduction.**  The input is encoded in lowercase hexadecimal and
//!     split into fixed-size windows.  Each window contributes its
//!     [rough median](rough_median()) as one byte of the reduced sequence.
//!     The window size is controlled by the [`Granularity`]: larger windows
//!     mean shorter, fuzzier output.
//! 2.  **Digest.**  The reduced sequence is fed into a cryptographic hash
//!     function (SHA-1, SHA-256, SHA-512 or any [`digest::Digest`]).  The
//!     digest and the tolerance are packaged as a [`FuzzyHash`].
//!
//! Two fuzzy hashes are compared by equality only.  This crate does not
//! compute a similarity score, and the fuzzy hash is not designed to resist
//! adversarial inputs.
//!
//! ## Usage: Basic
//!
//! ```
//! // Requires the "easy-functions" feature (default enabled).
//! # #[cfg(feature = "easy-functions")]
//! # {
//! let hash1 = medfuzzy::hash_sha256(b"tre concrete is unprocessable there!", 1).unwrap();
//! let hash2 = medfuzzy::hash_sha256(b"the concrete is unprocessable therz!", 1).unwrap();
//! assert_eq!(hash1, hash2);
//!
//! let hash3 = medfuzzy::hash_sha256(b"elephants like horses", 16).unwrap();
//! let hash4 = medfuzzy::hash_sha256(b"elephants are horses", 16).unwrap();
//! assert_ne!(hash3, hash4);
//! # }
//! ```
//!
//! ## Usage: String representation
//!
//! ```
//! use medfuzzy::{FuzzyHash, Granularity};
//! use sha2::Sha256;
//!
//! let hash = FuzzyHash::hash_with::<Sha256>(
//!     b"elephants are like horses", Granularity::OutputCount(16)).unwrap();
//! let hash_str = hash.to_string();
//! assert_eq!(hash_str, "045827d5d10a1300430e95683ed7b57b295aae163b789a24f246f33a446a57c6:16");
//! let parsed: FuzzyHash = str::parse(&hash_str).unwrap();
//! assert_eq!(parsed, hash);
//! ```
//!
//! ## Crate Features
//!
//! *   `std` (default)
//!     Enables [`std::error::Error`] implementations and
//!     file / stream hashing functions.
//! *   `easy-functions` (default)
//!     Enables SHA convenience functions such as [`hash_sha256()`].
//! *   `serde`
//!     Serializes a [`FuzzyHash`] as its string representation.
//!
//! Without `std`, this crate is `no_std` (but requires `alloc`).

// no_std
#![cfg_attr(not(any(test, doc, feature = "std")), no_std)]
// In the code maintenance mode, disallow all warnings.
#![cfg_attr(feature = "maint-code", deny(warnings))]
#![forbid(unsafe_code)]
// Non-test code requires documents
#![cfg_attr(not(test), warn(missing_docs))]
#![cfg_attr(not(test), warn(clippy::missing_docs_in_private_items))]
// Unless in the maintenance mode, allow unknown lints.
#![cfg_attr(not(feature = "maint-lints"), allow(unknown_lints))]
// Unless in the maintenance mode, allow old lint names.
#![cfg_attr(not(feature = "maint-lints"), allow(renamed_and_removed_lints))]
// Tests: constant (and/or obvious) assertions should be allowed.
#![cfg_attr(test, allow(clippy::assertions_on_constants))]

extern crate alloc;

mod generate_easy;
mod generate_easy_std;
mod hash;
mod macros;
mod median;
mod reduce;
mod test_utils;
mod utils;

#[cfg(feature = "easy-functions")]
pub use generate_easy::{hash_sha1, hash_sha256, hash_sha256_fuzzy, hash_sha512, must_hash};
#[cfg(all(feature = "easy-functions", feature = "std"))]
pub use generate_easy_std::{
    hash_file, hash_file_with, hash_stream, hash_stream_with, HashOrIOError,
};
pub use hash::parser_state::{ParseError, ParseErrorInfo, ParseErrorKind};
pub use hash::FuzzyHash;
pub use median::{rough_median, rough_median_by};
pub use reduce::{
    extract_bytes, reduce, window_size_for_fuzziness, Granularity, ReduceError, Reduction,
    FUZZINESS_WINDOW_SCALE, MAX_INPUT_SIZE, MAX_WINDOW_SIZE,
};

/// Constant assertions related to the base requirements.
#[doc(hidden)]
mod const_asserts {
    use super::*;
    use static_assertions::{assert_impl_all, const_assert};

    // Window sizes up to u32::MAX must be representable.
    const_assert!(usize::BITS >= 32);

    // Every input size and window size fits in a tolerance.
    const_assert!(MAX_INPUT_SIZE as u128 <= i64::MAX as u128);
    const_assert!(MAX_WINDOW_SIZE as u128 <= i64::MAX as u128);

    // The hexadecimal representation of the largest input fits in usize.
    const_assert!(MAX_INPUT_SIZE <= usize::MAX / 2);

    // Values can be shared between threads.
    assert_impl_all!(FuzzyHash: Send, Sync);
    assert_impl_all!(Granularity: Send, Sync, Copy);
    assert_impl_all!(ReduceError: Send, Sync, Copy);
    assert_impl_all!(ParseError: Send, Sync, Copy);
}
