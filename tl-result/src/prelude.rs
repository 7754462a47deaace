// tl-result
// Module: Prelude
//
// Copyright (c) 2025 The tl-result Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Prelude module for tl-result.
//!
//! Re-exports the full public surface so consumers can bring the
//! container, the markers and the constructor helpers in with one import.

pub use crate::helpers::{err_args, ok, ok_unit};
pub use crate::result::{Failure, Result, Success};
// `err` at the crate root names both the plain-message function and the
// format macro; one import covers both namespaces.
pub use crate::{err, Status};
