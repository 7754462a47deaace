// tl-result
// Module: Failure construction macros
//
// Copyright (c) 2025 The tl-result Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Format-string failure construction.

/// Builds a [`Failure`](crate::Failure) marker from a format string and
/// arguments, storing the rendered message in the calling thread's error
/// slot.
///
/// The macro form of [`err_args`](crate::err_args); the plain-message
/// counterpart is the [`err`](crate::helpers::err) function.
///
/// # Examples
///
/// ```
/// use tl_result::{err, Result};
///
/// let result: Result<i32> = err!("code {}", 7).into();
/// assert_eq!(result.unwrap_err(), "code 7");
/// ```
#[macro_export]
macro_rules! err {
    ($($arg:tt)*) => {
        $crate::err_args(core::format_args!($($arg)*))
    };
}
