// SPDX-License-Identifier: CC0-1.0
// SPDX-FileCopyrightText: Authored by medfuzzy developers in 2025

//! Internal macros.

/// Implements [`Error`](std::error::Error) trait on `std`.
///
/// Without the `std` feature, the error types only implement
/// [`Display`](core::fmt::Display) and [`Debug`](core::fmt::Debug).
///
/// ```ignore
/// # // Because this is an internal macro, we must ignore on the doctest.
/// impl_error!(ReduceError {});
/// impl_error!(HashOrIOError {
///     fn source(&self) -> Option<&(dyn std::error::Error + 'static)> { None }
/// });
/// ```
macro_rules! impl_error_impl {
    ($type:ty { $($tokens:tt)* }) => {
        #[cfg(feature = "std")]
        impl std::error::Error for $type {
            $($tokens)*
        }
    }
}
pub(crate) use impl_error_impl as impl_error;
