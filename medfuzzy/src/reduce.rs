// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: Copyright (C) 2025 medfuzzy developers

//! Lossy reduction of input bytes by windowed median sampling.

use alloc::borrow::Cow;
use alloc::vec::Vec;

use crate::macros::impl_error;
use crate::median::{rough_median, rough_median_in_place};
use crate::utils::f64_ceil_nonneg;


#[cfg(test)]
mod tests;


/// The maximum input size (in bytes) to reduce.
///
/// The reducer works on the hexadecimal representation of the input,
/// which is twice as long as the input itself.
pub const MAX_INPUT_SIZE: usize = (isize::MAX as usize) / 2;

/// The maximum window size (in hexadecimal characters) derived from
/// a fuzziness factor.
pub const MAX_WINDOW_SIZE: usize = u32::MAX as usize;

/// The number of hexadecimal characters per window
/// for the fuzziness factor of `1.0`.
///
/// This is equivalent to 6 input bytes.
pub const FUZZINESS_WINDOW_SCALE: f64 = 12.0;


/// The granularity of a reduction.
///
/// It decides how many characters of the hexadecimal representation of
/// the input collapse into one output byte.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Granularity {
    /// Requests (approximately) this number of output bytes.
    ///
    /// The window size is `2 * input_len / count` (rounded down).
    /// The larger this number is, the less fuzzy the hash will be.
    ///
    /// If the count equals the input size, the input is left unchanged.
    OutputCount(usize),
    /// Derives the window size from a fuzziness factor `t`:
    /// `ceil(12 * t)` hexadecimal characters, regardless of the input size.
    ///
    /// The larger this number is, the more fuzzy the hash will be.
    Fuzziness(f64),
}


/// The error type for the reduction (an invalid parameter).
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReduceError {
    /// The requested output count is larger than the input size.
    OutputCountTooLarge,
    /// The requested output count is zero while the input is not empty.
    OutputCountIsZero,
    /// The fuzziness factor is not finite, not positive or too large.
    FuzzinessIsInvalid,
    /// The input is too large to reduce.
    ///
    /// See [`MAX_INPUT_SIZE`].
    InputTooLarge,
}

impl core::fmt::Display for ReduceError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(match self {
            ReduceError::OutputCountTooLarge => "output count is larger than the input size",
            ReduceError::OutputCountIsZero   => "output count is zero on a non-empty input",
            ReduceError::FuzzinessIsInvalid  => "fuzziness factor is out of the valid range",
            ReduceError::InputTooLarge       => "input size is too large to reduce",
        })
    }
}

impl_error!(ReduceError {});


/// The result of a reduction.
///
/// It holds the reduced byte sequence and the tolerance to record in
/// a [`FuzzyHash`](crate::FuzzyHash):
///
/// *   [`Granularity::OutputCount`]: the requested count,
/// *   [`Granularity::Fuzziness`]: the derived window size
///     (not clamped to the input).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reduction<'a> {
    /// Reduced bytes (borrowed if the input is returned unchanged).
    bytes: Cow<'a, [u8]>,
    /// The tolerance value.
    tolerance: i64,
}

impl<'a> Reduction<'a> {
    /// Returns the reduced byte sequence.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Returns the tolerance this reduction ran with.
    #[inline]
    pub fn tolerance(&self) -> i64 {
        self.tolerance
    }

    /// Returns whether the input is returned as-is.
    #[inline]
    pub fn is_unchanged(&self) -> bool {
        matches!(self.bytes, Cow::Borrowed(_))
    }

    /// Consumes this object and returns the reduced byte sequence.
    #[inline]
    pub fn into_bytes(self) -> Cow<'a, [u8]> {
        self.bytes
    }
}


/// Converts an in-range size into a tolerance value.
fn to_tolerance(value: usize) -> Result<i64, ReduceError> {
    i64::try_from(value).map_err(|_| ReduceError::InputTooLarge)
}

/// Computes the window size (in hexadecimal characters)
/// from a fuzziness factor.
///
/// The result is `ceil(12 * fuzziness)`.  It does not depend on the input.
///
/// # Example
///
/// ```
/// use medfuzzy::window_size_for_fuzziness;
/// assert_eq!(window_size_for_fuzziness(1.0),  Ok(12));
/// assert_eq!(window_size_for_fuzziness(0.25), Ok(3));
/// assert!(window_size_for_fuzziness(0.0).is_err());
/// ```
pub fn window_size_for_fuzziness(fuzziness: f64) -> Result<usize, ReduceError> {
    if !(fuzziness.is_finite() && fuzziness > 0.0) {
        return Err(ReduceError::FuzzinessIsInvalid);
    }
    let scaled = FUZZINESS_WINDOW_SCALE * fuzziness;
    if scaled > MAX_WINDOW_SIZE as f64 {
        return Err(ReduceError::FuzzinessIsInvalid);
    }
    // 0 < scaled <= MAX_WINDOW_SIZE
    let window = f64_ceil_nonneg(scaled) as usize;
    debug_assert!((1..=MAX_WINDOW_SIZE).contains(&window));
    Ok(window)
}

/// Samples one rough median per window from the hexadecimal representation.
///
/// The representation is padded with `encoded.len() % window` copies of the
/// rough median of the whole representation.  Only full windows of the
/// padded sequence are sampled.
fn sample_windows(encoded: &[u8], window: usize) -> Vec<u8> {
    debug_assert!(window >= 1);
    let padding_byte = match rough_median(encoded) {
        Some(value) => value,
        None => return Vec::new(),
    };
    let padding_len = encoded.len() % window;
    let mut padded = Vec::with_capacity(encoded.len() + padding_len);
    padded.extend_from_slice(encoded);
    padded.resize(encoded.len() + padding_len, padding_byte);
    log::trace!(
        "sampling {} windows of {} hex characters (padding: {} x {:#04x})",
        padded.len() / window,
        window,
        padding_len,
        padding_byte
    );
    let mut scratch = Vec::with_capacity(window);
    padded
        .chunks_exact(window)
        .filter_map(|chunk| {
            // Never empty (window >= 1).
            scratch.clear();
            scratch.extend_from_slice(chunk);
            rough_median_in_place(&mut scratch)
        })
        .collect()
}

/// Extracts (approximately) `count` bytes from the input.
///
/// *   If `count` equals the input size, the input is returned unchanged.
/// *   If `count` is larger than the input size,
///     [`ReduceError::OutputCountTooLarge`] is returned.
/// *   If `count` is zero (on a non-empty input),
///     [`ReduceError::OutputCountIsZero`] is returned.
///
/// # Example
///
/// ```
/// use medfuzzy::extract_bytes;
/// assert_eq!(&*extract_bytes(b"Hello, World!", 4).unwrap(), b"6c66");
/// assert_eq!(&*extract_bytes(b"Hello, World!", 13).unwrap(), b"Hello, World!");
/// assert!(extract_bytes(b"Hello, World!", 14).is_err());
/// ```
pub fn extract_bytes(input: &[u8], count: usize) -> Result<Cow<'_, [u8]>, ReduceError> {
    if count == input.len() {
        return Ok(Cow::Borrowed(input));
    }
    if count > input.len() {
        return Err(ReduceError::OutputCountTooLarge);
    }
    if count == 0 {
        return Err(ReduceError::OutputCountIsZero);
    }
    if input.len() > MAX_INPUT_SIZE {
        return Err(ReduceError::InputTooLarge);
    }
    let encoded = hex::encode(input).into_bytes();
    // 0 < count < input.len() implies window >= 2.
    let window = encoded.len() / count;
    Ok(Cow::Owned(sample_windows(&encoded, window)))
}

/// Reduces the input with given granularity.
///
/// # Example
///
/// ```
/// use medfuzzy::{reduce, Granularity};
///
/// let reduction = reduce(b"Hello, World!", Granularity::Fuzziness(0.5)).unwrap();
/// assert_eq!(reduction.as_bytes(), b"6c66");
/// assert_eq!(reduction.tolerance(), 6);
///
/// let reduction = reduce(b"Hello, World!", Granularity::OutputCount(4)).unwrap();
/// assert_eq!(reduction.as_bytes(), b"6c66");
/// assert_eq!(reduction.tolerance(), 4);
/// ```
pub fn reduce(input: &[u8], granularity: Granularity) -> Result<Reduction<'_>, ReduceError> {
    if input.len() > MAX_INPUT_SIZE {
        return Err(ReduceError::InputTooLarge);
    }
    match granularity {
        Granularity::OutputCount(count) => {
            let bytes = extract_bytes(input, count)?;
            Ok(Reduction { bytes, tolerance: to_tolerance(count)? })
        }
        Granularity::Fuzziness(fuzziness) => {
            let window = window_size_for_fuzziness(fuzziness)?;
            let tolerance = to_tolerance(window)?;
            let encoded = hex::encode(input).into_bytes();
            // A window larger than the input covers all of it.
            let bytes = sample_windows(&encoded, window.min(encoded.len()).max(1));
            Ok(Reduction { bytes: Cow::Owned(bytes), tolerance })
        }
    }
}
