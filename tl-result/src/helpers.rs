// tl-result
// Module: Constructor helpers
//
// Copyright (c) 2025 The tl-result Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! The sanctioned entry points for building result values.
//!
//! Success helpers wrap a payload (or nothing) with no side effects. The
//! failure helpers first store the rendered message in the calling
//! thread's error slot, then return the opaque [`Failure`] marker; the
//! write-then-wrap ordering is what lets a `Result` carry only a tag.

use std::fmt;

use crate::result::{Failure, Success};
use crate::slot;

/// Wraps a payload into the success marker consumed by
/// [`Result`](crate::Result)'s `From` constructor.
///
/// Takes the value by move; callers that need to keep their copy clone
/// before wrapping.
#[must_use]
pub fn ok<T>(value: T) -> Success<T> {
    Success { value }
}

/// The no-payload success form, for [`Status`](crate::Status) producers.
#[must_use]
pub const fn ok_unit() -> Success<()> {
    Success { value: () }
}

/// Stores `message` in the calling thread's error slot and returns the
/// failure marker.
///
/// Fast path for an already-built message: no formatting is performed.
/// Overwrites whatever the slot held before.
pub fn err<M: Into<String>>(message: M) -> Failure {
    slot::replace(message.into());
    Failure
}

/// Renders `args` and stores the result in the calling thread's error
/// slot, returning the failure marker.
///
/// The formatted form behind the [`err!`](macro@crate::err) macro. Rendering
/// goes through growable string formatting, so arbitrarily long messages
/// are stored in full rather than truncated.
pub fn err_args(args: fmt::Arguments<'_>) -> Failure {
    match args.as_str() {
        // A literal with no directives needs no render pass.
        Some(literal) => slot::replace(literal.to_owned()),
        None => slot::replace(fmt::format(args)),
    }
    Failure
}
