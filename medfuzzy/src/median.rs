// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: Copyright (C) 2025 medfuzzy developers

//! Rough median over ordered values.

use core::cmp::Ordering;

use alloc::vec::Vec;




/// Computes the rough median of given values.
///
/// The rough median is the element at the index `len / 2` (zero-indexed) of
/// the sorted sequence.  On even-length input, two middle elements are never
/// averaged; the upper one of them is returned.
///
/// The input is left untouched (the selection runs on a copy).
/// If `values` is empty, [`None`] is returned.
///
/// # Example
///
/// ```
/// use medfuzzy::rough_median;
/// assert_eq!(rough_median(&[3, 1, 4, 1, 5]), Some(3));
/// assert_eq!(rough_median(&[3, 1, 4, 1]), Some(3));
/// assert_eq!(rough_median::<u8>(&[]), None);
/// ```
pub fn rough_median<T: Copy + Ord>(values: &[T]) -> Option<T> {
    let mut buffer: Vec<T> = values.to_vec();
    rough_median_in_place(&mut buffer)
}

/// Computes the rough median of given values with a comparison function.
///
/// This is [`rough_median()`] for types without a total order such as
/// [`f32`] and [`f64`] (use [`f64::total_cmp`] or [`f32::total_cmp`]).
///
/// # Example
///
/// ```
/// use medfuzzy::rough_median_by;
/// assert_eq!(rough_median_by(&[0.5, -2.0, 1.5, 0.25], f64::total_cmp), Some(0.5));
/// assert_eq!(rough_median_by(&[] as &[f32], f32::total_cmp), None);
/// ```
pub fn rough_median_by<T, F>(values: &[T], compare: F) -> Option<T>
where
    T: Copy,
    F: FnMut(&T, &T) -> Ordering,
{
    let mut buffer: Vec<T> = values.to_vec();
    rough_median_in_place_by(&mut buffer, compare)
}

/// Computes the rough median of given values, reordering them.
///
/// This is the same as [`rough_median()`] but uses `values` as a scratch
/// buffer.  After the call, the order of `values` is unspecified.
#[inline]
pub(crate) fn rough_median_in_place<T: Copy + Ord>(values: &mut [T]) -> Option<T> {
    rough_median_in_place_by(values, Ord::cmp)
}

/// Computes the rough median of given values with a comparison function,
/// reordering them.
fn rough_median_in_place_by<T, F>(values: &mut [T], compare: F) -> Option<T>
where
    T: Copy,
    F: FnMut(&T, &T) -> Ordering,
{
    if values.is_empty() {
        return None;
    }
    let middle = values.len() / 2;
    // Selection places the same element at `middle` as a full sort would.
    let (_, median, _) = values.select_nth_unstable_by(middle, compare);
    Some(*median)
}
