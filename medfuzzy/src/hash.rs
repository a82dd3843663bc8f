// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: Copyright (C) 2025 medfuzzy developers

//! Fuzzy hash structure: a digest and its tolerance.

use alloc::string::String;
use alloc::vec::Vec;

use digest::Digest;

use crate::hash::parser_state::{parse_digest, parse_tolerance, split_fields, ParseError};
use crate::reduce::{reduce, Granularity, ReduceError, Reduction};

pub mod parser_state;



/// A fuzzy hash: a digest of the reduced input along with its tolerance.
///
/// # Fuzzy Hash Internals
///
/// A fuzzy hash consists of two parts:
///
/// 1.  Digest.  The output of a cryptographic hash function
///     (e.g. SHA-256) applied to the [reduced](crate::reduce()) input.
///     Its length is the output length of the hash function.
/// 2.  Tolerance.  The granularity setting the reduction ran with
///     (see [`Reduction::tolerance()`]).
///
/// The string representation is the lowercase hexadecimal digest followed by
/// a colon and the decimal tolerance:
///
/// ```text
/// 045827d5d10a1300430e95683ed7b57b295aae163b789a24f246f33a446a57c6:16
/// \______________________________________________________________/|\/
///                            Digest                               | Tolerance
///                                                                 +-- (sep:colon)
/// ```
///
/// # Equality
///
/// Two fuzzy hashes are equal if and only if both the digest and the
/// tolerance are the same.  Fuzziness only lives in the reduction: once two
/// inputs are reduced to the same byte sequence, their digests are the same.
///
/// Fuzzy hashes with different tolerance values are never equal, even if
/// their digests match.
///
/// # Example
///
/// ```
/// use medfuzzy::{FuzzyHash, Granularity};
/// use sha2::Sha256;
///
/// let hash1 = FuzzyHash::hash_with::<Sha256>(
///     b"tre concrete is unprocessable there!", Granularity::OutputCount(1)).unwrap();
/// let hash2 = FuzzyHash::hash_with::<Sha256>(
///     b"the concrete is unprocessable therz!", Granularity::OutputCount(1)).unwrap();
/// assert_eq!(hash1, hash2);
/// ```
///
/// # Serialization
///
/// With the `serde` feature, a fuzzy hash is serialized as its string
/// representation and deserialized with [`FuzzyHash::from_bytes()`].
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(into = "String", try_from = "String"))]
pub struct FuzzyHash {
    /// The digest of the reduced input.
    digest: Vec<u8>,
    /// The tolerance value.
    tolerance: i64,
}

impl FuzzyHash {
    /// Generates a fuzzy hash with the hash function `D`.
    ///
    /// The input is reduced with given granularity and the reduced bytes
    /// (not the original input) are hashed.
    pub fn hash_with<D: Digest>(input: &[u8], granularity: Granularity) -> Result<Self, ReduceError> {
        Self::hash_with_hasher(D::new(), input, granularity)
    }

    /// Generates a fuzzy hash with the given hasher object.
    ///
    /// The hasher may be already fed with some data (e.g. a domain prefix).
    ///
    /// # Example
    ///
    /// ```
    /// use medfuzzy::{FuzzyHash, Granularity};
    /// use sha2::{Digest, Sha512};
    ///
    /// let hash = FuzzyHash::hash_with_hasher(
    ///     Sha512::new(), b"elephants are like horses", Granularity::Fuzziness(1.0)).unwrap();
    /// assert_eq!(hash.digest().len(), 64);
    /// assert_eq!(hash.tolerance(), 12);
    /// ```
    pub fn hash_with_hasher<D: Digest>(
        hasher: D,
        input: &[u8],
        granularity: Granularity,
    ) -> Result<Self, ReduceError> {
        let reduction = reduce(input, granularity)?;
        Ok(Self::from_reduction_with_hasher(hasher, &reduction))
    }

    /// Generates a fuzzy hash from an existing reduction.
    pub fn from_reduction<D: Digest>(reduction: &Reduction<'_>) -> Self {
        Self::from_reduction_with_hasher(D::new(), reduction)
    }

    /// Generates a fuzzy hash from an existing reduction
    /// with the given hasher object.
    pub fn from_reduction_with_hasher<D: Digest>(mut hasher: D, reduction: &Reduction<'_>) -> Self {
        hasher.update(reduction.as_bytes());
        let hash = Self {
            digest: hasher.finalize().to_vec(),
            tolerance: reduction.tolerance(),
        };
        log::debug!(
            "generated a fuzzy hash {} from {} reduced bytes",
            hash,
            reduction.as_bytes().len()
        );
        hash
    }

    /// Returns the digest.
    #[inline]
    pub fn digest(&self) -> &[u8] {
        &self.digest
    }

    /// Returns the tolerance.
    #[inline]
    pub fn tolerance(&self) -> i64 {
        self.tolerance
    }

    /// Returns the digest in lowercase hexadecimal
    /// (without the tolerance part).
    pub fn digest_hex(&self) -> String {
        hex::encode(&self.digest)
    }

    /// Parses a fuzzy hash from given bytes.
    ///
    /// The input must consist of a hexadecimal digest (either case, even
    /// length), a colon and a decimal tolerance (optionally signed).
    /// No other validation is performed: the tolerance may be zero or
    /// negative and the digest may have any length.
    ///
    /// # Example
    ///
    /// ```
    /// use medfuzzy::{FuzzyHash, ParseErrorInfo, ParseErrorKind};
    ///
    /// let hash = FuzzyHash::from_bytes(b"00ff:-3").unwrap();
    /// assert_eq!(hash.digest(), &[0x00, 0xff]);
    /// assert_eq!(hash.tolerance(), -3);
    ///
    /// let err = FuzzyHash::from_bytes(b"nothex:3").unwrap_err();
    /// assert_eq!(err.kind(), ParseErrorKind::InvalidDigest);
    /// ```
    pub fn from_bytes(str: &[u8]) -> Result<Self, ParseError> {
        let (digest, tolerance, tolerance_offset) = split_fields(str)?;
        let digest = parse_digest(digest)?;
        let tolerance = parse_tolerance(tolerance, tolerance_offset)?;
        Ok(Self { digest, tolerance })
    }
}

impl core::fmt::Display for FuzzyHash {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        for byte in &self.digest {
            write!(f, "{:02x}", byte)?;
        }
        write!(f, ":{}", self.tolerance)
    }
}

impl core::fmt::Debug for FuzzyHash {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FuzzyHash")
            .field("digest", &self.digest_hex())
            .field("tolerance", &self.tolerance)
            .finish()
    }
}

impl core::str::FromStr for FuzzyHash {
    type Err = ParseError;
    #[inline(always)]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_bytes(s.as_bytes())
    }
}

impl core::convert::From<FuzzyHash> for String {
    fn from(value: FuzzyHash) -> Self {
        alloc::string::ToString::to_string(&value)
    }
}

impl core::convert::TryFrom<String> for FuzzyHash {
    type Error = ParseError;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_bytes(value.as_bytes())
    }
}
