// tl-result
// Module: Result container
//
// Copyright (c) 2025 The tl-result Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! The success-or-failure container.
//!
//! A [`Result`] holds either a fully constructed payload or a failure tag.
//! It never stores a message of its own: the message of the most recent
//! failure lives in the calling thread's error slot, written by the failure
//! constructors in [`crate::helpers`] before the marker consumed here was
//! produced.

use std::fmt;
use std::process;

use crate::slot;

/// Success marker wrapping a payload, produced by [`ok`](crate::ok) or
/// [`ok_unit`](crate::ok_unit).
///
/// Consumed by `Result`'s `From` constructor; carries no behavior of its
/// own.
#[derive(Debug, Clone)]
pub struct Success<T> {
    pub(crate) value: T,
}

/// Opaque failure marker, produced by [`err`](crate::helpers::err) or the
/// [`err!`](macro@crate::err) macro.
///
/// Carries no data: the rendered message was already stored in the calling
/// thread's error slot by the helper that built this marker.
#[derive(Debug, Clone, Copy)]
pub struct Failure;

/// Outcome of a fallible operation: a payload of type `T`, or a failure
/// tag whose message is held in the thread error slot.
///
/// The state is set exactly once at construction and never changes. The
/// expected usage is move-only propagation up a call chain, with exactly
/// one extraction call at the end; copies are permitted via `Clone`.
#[must_use = "a Result may hold a failure that should be inspected"]
#[derive(Debug, Clone)]
pub struct Result<T> {
    failed: bool,
    inner:  T,
}

impl<T: Default> Default for Result<T> {
    /// A default result is a success holding `T::default()`.
    fn default() -> Self {
        Self {
            failed: false,
            inner:  T::default(),
        }
    }
}

impl<T> From<Success<T>> for Result<T> {
    fn from(success: Success<T>) -> Self {
        Self {
            failed: false,
            inner:  success.value,
        }
    }
}

impl<T: Default> From<Failure> for Result<T> {
    /// Builds the failure state. The payload slot is filled with
    /// `T::default()` and is not meaningful; only the tag is.
    fn from(_: Failure) -> Self {
        Self {
            failed: true,
            inner:  T::default(),
        }
    }
}

impl<T> Result<T> {
    /// True if the result holds a failure.
    #[must_use]
    pub fn is_err(&self) -> bool {
        self.failed
    }

    /// True if the result holds a payload.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        !self.failed
    }

    /// Extracts the payload, aborting the process on a failed result.
    ///
    /// Calling this on a failure is a contract violation, not a
    /// recoverable condition: the thread's stored error message is written
    /// to stderr and the process halts immediately.
    #[must_use]
    pub fn unwrap(self) -> T {
        if self.failed {
            die(format_args!(
                "unwrap called on a failed result\nreason: {}",
                slot::snapshot()
            ));
        }
        self.inner
    }

    /// Extracts the payload, aborting with a caller-supplied context line
    /// on a failed result.
    ///
    /// Identical to [`Result::unwrap`] except the terminate-path
    /// diagnostic includes `msg` in addition to the stored error message.
    pub fn expect(self, msg: &str) -> T {
        if self.failed {
            die(format_args!(
                "error: {msg}\nreason: {}",
                slot::snapshot()
            ));
        }
        self.inner
    }

    /// Extracts the payload slot without checking the state.
    ///
    /// Escape hatch for callers that have already verified success through
    /// other means. On a failed result this returns `T::default()`, a
    /// value with no meaning for the operation that produced the result.
    /// Never aborts.
    #[must_use]
    pub fn unwrap_unverified(self) -> T {
        self.inner
    }

    /// Extracts the payload, or `T::default()` on a failed result.
    ///
    /// The only total extraction operation: never aborts, for either
    /// state.
    #[must_use]
    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        if self.failed {
            T::default()
        } else {
            self.inner
        }
    }

    /// Returns the thread's stored error message, aborting on a success
    /// result.
    ///
    /// Extracting an error from a success is always a caller bug: a
    /// diagnostic is written to stderr and the process halts. On a failed
    /// result the slot's message is returned as a copy; the slot itself is
    /// neither consumed nor cleared.
    pub fn unwrap_err(self) -> String {
        if !self.failed {
            die(format_args!("unwrap_err called on a success value"));
        }
        slot::snapshot()
    }
}

impl<T> From<&Result<T>> for bool {
    /// Boolean conversion, equal to [`Result::is_ok`].
    fn from(result: &Result<T>) -> Self {
        result.is_ok()
    }
}

/// Reports a contract violation and halts the process.
///
/// Emitted through the `log` facade first so embedders with a logger
/// installed capture the diagnostic, then written to stderr for the bare
/// case. `abort` rather than panic: the halt must not be catchable.
#[cold]
fn die(diagnostic: fmt::Arguments<'_>) -> ! {
    log::error!("{diagnostic}");
    eprintln!("{diagnostic}");
    process::abort()
}
