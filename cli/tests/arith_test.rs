//! Integration tests for the `add` and `divide` commands.

mod common;

use common::{check_stdout, primer};
use expect_test::expect;
use predicates::prelude::*;

// ============================================================================
// add
// ============================================================================

#[test]
fn add_two_numbers() {
    check_stdout(&["add", "1", "2"], expect!["3\n"]);
}

#[test]
fn add_negative_numbers() {
    check_stdout(&["add", "-4", "-6"], expect!["-10\n"]);
}

// ============================================================================
// divide
// ============================================================================

#[test]
fn divide_exact() {
    check_stdout(&["divide", "10", "2"], expect!["5\n"]);
}

#[test]
fn divide_truncates() {
    check_stdout(&["divide", "-7", "2"], expect!["-3\n"]);
}

#[test]
fn divide_by_zero_is_reported() {
    primer()
        .args(["--no-color", "divide", "10", "0"])
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("division by zero"))
        .stderr(predicate::str::contains("primer::division_by_zero"));
}

#[test]
fn divide_overflow_is_reported() {
    primer()
        .args(["--no-color", "divide", "-9223372036854775808", "-1"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("integer overflow"));
}

#[test]
fn unchecked_divide_by_zero_is_fatal() {
    primer()
        .args(["divide", "--unchecked", "10", "0"])
        .assert()
        .code(101)
        .stdout("")
        .stderr(predicate::str::contains("fatal error: attempt to divide by zero"));
}

#[test]
fn unchecked_divide_agrees_otherwise() {
    check_stdout(&["divide", "--unchecked", "10", "2"], expect!["5\n"]);
}

// ============================================================================
// completions
// ============================================================================

#[test]
fn completions_bash() {
    primer()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("primer"));
}
