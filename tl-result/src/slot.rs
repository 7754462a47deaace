// tl-result
// Module: Thread error slot
//
// Copyright (c) 2025 The tl-result Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! One mutable message slot per execution thread.
//!
//! The slot holds the message of the most recently constructed failure on
//! this thread. It is a single-slot overwrite log, not a stack: building a
//! second failure before reading the first's message discards the first
//! message. That last-write-wins behavior is part of the contract, not
//! something to fix with queuing.
//!
//! Being `thread_local`, each thread gets an independent slot initialized
//! empty at thread start and torn down at thread exit. No locking is
//! needed; the write a failure constructor performs sequentially precedes
//! any read a later `unwrap`/`unwrap_err` on the same thread performs.

use std::cell::RefCell;

thread_local! {
    static LAST_ERROR: RefCell<String> = const { RefCell::new(String::new()) };
}

/// Overwrites the calling thread's slot with `message`.
///
/// Only the failure constructors in [`crate::helpers`] call this.
pub(crate) fn replace(message: String) {
    LAST_ERROR.with(|slot| {
        *slot.borrow_mut() = message;
    });
}

/// Returns a copy of the calling thread's slot without clearing it.
pub(crate) fn snapshot() -> String {
    LAST_ERROR.with(|slot| slot.borrow().clone())
}
