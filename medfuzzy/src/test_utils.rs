// SPDX-License-Identifier: CC0-1.0
// SPDX-FileCopyrightText: Authored by medfuzzy developers in 2025
// grcov-excl-br-start

#![cfg(test)]


/// Testing function for [`Clone`] (for coverage).
///
/// This function is suitable if we have no comparison function for these.
pub(crate) fn cover_auto_clone<T: Clone>(orig_value: &T) {
    let mut cloned: T = orig_value.clone();
    cloned.clone_from(orig_value);
}


/// Testing function for [`Eq`] + [`Clone`].
///
/// It also requires [`core::fmt::Debug`] for assertion.
pub(crate) fn test_auto_clone<T: Clone + Eq + core::fmt::Debug>(orig_value: &T) {
    let mut cloned: T = orig_value.clone();
    assert_eq!(*orig_value, cloned);
    cloned.clone_from(orig_value);
    assert_eq!(*orig_value, cloned);
}


/// Testing function for [`Debug`](core::fmt::Debug) (for coverage).
pub(crate) fn cover_auto_debug<T: core::fmt::Debug>(value: &T) {
    let _ = format!("{:?}", value);
}


/// Test whether the type is both [`Send`] and [`Sync`].
pub(crate) fn test_send_sync<T: Send + Sync>() {}


/// Test automatically derived [`Debug`](core::fmt::Debug) output for
/// unit variants of an enum.
#[doc(alias = "test_auto_debug_for_enum")]
macro_rules! test_auto_debug_for_enum_impl {
    ($ty: ty, [$($variant: ident),* $(,)?]) => {{
        $(
            assert_eq!(format!("{:?}", <$ty>::$variant), stringify!($variant));
        )*
    }};
}

pub(crate) use test_auto_debug_for_enum_impl as test_auto_debug_for_enum;
