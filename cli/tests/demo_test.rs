//! Integration tests for the `demo` command.

mod common;

use common::{check_stdout, primer};
use expect_test::expect;
use predicates::prelude::*;

#[test]
fn demo_basics() {
    check_stdout(
        &["demo", "basics"],
        expect![[r#"
            === Primer Demonstrations ===

            --- Basic Demonstrations ---
            30
            1 2 3
            1 hello 1.2
            10 hello 1.2
            1 hello 1.2
            3.14
            1 hello 1.2
        "#]],
    );
}

#[test]
fn demo_functions() {
    check_stdout(
        &["demo", "functions"],
        expect![[r#"
            === Primer Demonstrations ===

            --- Function Demonstrations ---
            Hello, World!
            3.141592653589793
            add(1, 2) = 3
            meow() = meow
        "#]],
    );
}

#[test]
fn demo_errors() {
    check_stdout(
        &["demo", "errors"],
        expect![[r#"
            === Primer Demonstrations ===

            --- Error Handling ---
            Error: division by zero
            Result: 5
            division_or_zero(10, 0) = (0, division by zero)
        "#]],
    );
}

#[test]
fn demo_arrays() {
    check_stdout(
        &["demo", "arrays"],
        expect![[r#"
            === Primer Demonstrations ===

            --- Array Demonstrations ---
            Empty array: [0 0 0 0 0]
            Initialized array: [1 2 3 4 5]
            Array with inferred size: [1 2 3]
            First element: 1
            After modification: [10 2 3 4 5]
            Array length: 5
            Copy taken before b[1] = 20: [10 2 3 4 5]
        "#]],
    );
}

#[test]
fn demo_slices() {
    check_stdout(
        &["demo", "slices"],
        expect![[r#"
            === Primer Demonstrations ===

            --- Array and Slice Demonstrations ---
            [1 2 3 4 5]
            [1 2]
            [1 2 6]
            Array after append: [1 2 6 4 5]
            Slice after three more appends: [1 2 6 7 8 9] (len 6, cap 10)
            Array after those appends: [1 2 6 7 8]
            Slice after grown[0] = 100: [100 2 6 7 8 9]
            Array is no longer shared: [1 2 6 7 8]
        "#]],
    );
}

#[test]
fn demo_maps() {
    check_stdout(
        &["demo", "maps"],
        expect![[r#"
            === Primer Demonstrations ===

            --- Map Demonstrations ---
            five 5
            four 4
            one 1
            two 2
            Map a: map[] (nil: true)
            Map b: map[five:5 four:4 one:1 two:2]
            Map c: map[one:1 two:2]
            Value of key 'one' in map b: 1
            Value of key 'three' in map b: 0 false
            Length of map b: 4
            Value of key 'one' in map a: (0, false)
        "#]],
    );
}

#[test]
fn demo_runs_every_section_by_default() {
    primer()
        .arg("demo")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("=== Primer Demonstrations ===\n"))
        .stdout(predicate::str::contains("--- Basic Demonstrations ---"))
        .stdout(predicate::str::contains("--- Map Demonstrations ---"));
}

#[test]
fn demo_rejects_unknown_section() {
    primer()
        .args(["demo", "channels"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value 'channels'"));
}
