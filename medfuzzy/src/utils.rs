// SPDX-License-Identifier: CC0-1.0
// SPDX-FileCopyrightText: Authored by medfuzzy developers in 2025




/// Computes the ceiling of a finite, non-negative [`f64`] value.
///
/// This is the wrapper with a fallback for [`f64::ceil`],
/// which is only available with `std`.
#[inline(always)]
pub(crate) fn f64_ceil_nonneg(value: f64) -> f64 {
    cfg_if::cfg_if! {
        if #[cfg(feature = "std")] {
            value.ceil()
        }
        else {
            f64_ceil_nonneg_fallback(value)
        }
    }
}

/// Computes the ceiling of a finite, non-negative [`f64`] value
/// without `std`.
#[cfg_attr(all(feature = "std", not(test)), allow(dead_code))]
#[inline]
pub(crate) fn f64_ceil_nonneg_fallback(value: f64) -> f64 {
    debug_assert!(value.is_finite() && value >= 0.0);
    // 2^52: every value at or above this has no fractional part.
    if value >= 4_503_599_627_370_496.0 {
        return value;
    }
    let truncated = value as u64 as f64;
    if truncated < value {
        truncated + 1.0
    } else {
        truncated
    }
}
