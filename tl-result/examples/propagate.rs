// tl-result
// Module: Propagation example
//
// Copyright (c) 2025 The tl-result Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Propagating a failure up a small call chain.
//!
//! Run with: `cargo run --example propagate`

use tl_result::prelude::*;

fn read_quota(raw: &str) -> Result<u64> {
    match raw.parse::<u64>() {
        Ok(quota) => ok(quota).into(),
        Err(_) => err!("not a number: {raw:?}").into(),
    }
}

fn check_quota(raw: &str) -> Status {
    let quota = read_quota(raw);
    if quota.is_err() {
        // Re-wrap with context; the overwrite discards the inner message,
        // so fold it into the new one first.
        return err!("quota check failed: {}", quota.unwrap_err()).into();
    }
    if quota.unwrap() == 0 {
        return err!("quota must be positive").into();
    }
    ok_unit().into()
}

fn main() {
    let good = check_quota("42");
    println!("check_quota(\"42\") ok: {}", good.is_ok());

    let bad = check_quota("many");
    if bad.is_err() {
        println!("check_quota(\"many\") failed: {}", bad.unwrap_err());
    }
}
