// tl-result
// Module: Termination path tests
//
// Copyright (c) 2025 The tl-result Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Subprocess assertions for the contract-violation termination paths.
//!
//! Each test re-executes this test binary with an env var selecting the
//! violating call, then asserts that the child aborted and that the
//! diagnostic on stderr names the operation and carries the stored error
//! message. Running the violation in a child process is the only way to
//! observe an abort without taking the harness down with it.

use std::env;
use std::process::{Command, Output};

use tl_result::{err, ok, ok_unit, Result, Status};

const CASE_ENV: &str = "TL_RESULT_ABORT_CASE";

fn in_case(case: &str) -> bool {
    env::var(CASE_ENV).as_deref() == Ok(case)
}

fn run_case(test_name: &str, case: &str) -> Output {
    let exe = env::current_exe().expect("test binary path");
    Command::new(exe)
        .args([test_name, "--exact", "--nocapture"])
        .env(CASE_ENV, case)
        .output()
        .expect("spawn abort case")
}

fn assert_aborted(out: &Output) -> String {
    assert!(
        !out.status.success(),
        "child was expected to abort, exited with {:?}",
        out.status
    );
    String::from_utf8_lossy(&out.stderr).into_owned()
}

#[test]
fn unwrap_on_failure_aborts_with_stored_message() {
    if in_case("unwrap") {
        let result: Result<u32> = err("disk full").into();
        let _value = result.unwrap();
        return; // not reached
    }
    let out = run_case("unwrap_on_failure_aborts_with_stored_message", "unwrap");
    let stderr = assert_aborted(&out);
    assert!(stderr.contains("unwrap"), "diagnostic names the operation: {stderr}");
    assert!(stderr.contains("disk full"), "diagnostic carries the message: {stderr}");
}

#[test]
fn expect_on_failure_aborts_with_context_and_message() {
    if in_case("expect") {
        let result: Result<u32> = err("disk full").into();
        let _value = result.expect("loading snapshot");
        return;
    }
    let out = run_case("expect_on_failure_aborts_with_context_and_message", "expect");
    let stderr = assert_aborted(&out);
    assert!(stderr.contains("loading snapshot"), "caller context present: {stderr}");
    assert!(stderr.contains("disk full"), "stored message present: {stderr}");
}

#[test]
fn unwrap_err_on_success_aborts() {
    if in_case("unwrap_err") {
        let result: Result<u32> = ok(1).into();
        let _message = result.unwrap_err();
        return;
    }
    let out = run_case("unwrap_err_on_success_aborts", "unwrap_err");
    let stderr = assert_aborted(&out);
    assert!(stderr.contains("unwrap_err"), "diagnostic names the operation: {stderr}");
}

#[test]
fn unit_unwrap_on_failure_aborts() {
    if in_case("unit_unwrap") {
        let status: Status = err("unit failure").into();
        let () = status.unwrap();
        return;
    }
    let out = run_case("unit_unwrap_on_failure_aborts", "unit_unwrap");
    let stderr = assert_aborted(&out);
    assert!(stderr.contains("unit failure"), "stored message present: {stderr}");
}

#[test]
fn unwrap_or_default_never_aborts() {
    // Runs in-process on purpose: the total extraction must be safe to
    // call in the harness itself, for both states.
    let success: Result<u32> = ok(7).into();
    assert_eq!(success.unwrap_or_default(), 7);

    let failure: Result<u32> = err("still alive").into();
    assert_eq!(failure.unwrap_or_default(), 0);

    let status: Status = ok_unit().into();
    let () = status.unwrap_or_default();
}
