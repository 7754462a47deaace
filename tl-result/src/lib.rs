// tl-result
// Module: Error propagation primitive
//
// Copyright (c) 2025 The tl-result Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Success-or-failure container backed by a thread-local last-error slot.
//!
//! A fallible operation builds a [`Result`] through exactly one of two
//! constructor paths: a success wrap ([`ok`] / [`ok_unit`]) or a failure
//! wrap ([`err`](fn@err) / the [`err!`](macro@err) macro). The failure
//! path renders a message
//! and stores it in the calling thread's error slot before producing the
//! marker, so the `Result` itself carries only a tag. Callers inspect the
//! state with [`Result::is_ok`] / [`Result::is_err`] and extract either
//! the payload or the stored message.
//!
//! There is one encoded failure kind: "operation failed with message M".
//! No codes, no causes, no combinators. Misusing an extraction operation
//! (`unwrap` on a failure, `unwrap_err` on a success) is a contract
//! violation: it writes a diagnostic to stderr and aborts the process.
//!
//! # Usage
//!
//! ```
//! use tl_result::{err, ok, Result};
//!
//! fn parse_port(raw: &str) -> Result<u16> {
//!     match raw.parse::<u16>() {
//!         Ok(port) => ok(port).into(),
//!         Err(_) => err!("invalid port: {raw}").into(),
//!     }
//! }
//!
//! let port = parse_port("8080");
//! assert!(port.is_ok());
//! assert_eq!(port.unwrap(), 8080);
//!
//! let bad = parse_port("not a port");
//! assert!(bad.is_err());
//! assert_eq!(bad.unwrap_err(), "invalid port: not a port");
//! ```
//!
//! # The error slot
//!
//! The slot is one independent `String` per execution thread: no locking,
//! no cross-thread sharing, no data races. It is a single-slot overwrite
//! log — constructing a second failure before reading the first's message
//! silently discards the first message. Within one thread the slot write
//! always precedes the read a later extraction performs; that is the whole
//! ordering story.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Free constructor functions for success and failure values.
pub mod helpers;
/// The `Result` container and its marker types.
pub mod result;

mod slot;

// Macros for format-string failure construction
#[macro_use]
pub mod macros;

pub mod prelude;

pub use helpers::{err, err_args, ok, ok_unit};
pub use result::{Failure, Result, Success};

/// A value-less result, for operations that succeed with no payload.
///
/// The specialization of [`Result`] over `()`: every extraction operation
/// is available, with pure success/failure-check semantics.
pub type Status = Result<()>;
