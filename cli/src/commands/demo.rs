//! The `demo` command - print the demonstration transcript.
//!
//! Each section writes plain lines to `out`. Map contents are printed with
//! sorted keys so the transcript is the same on every run; the maps
//! themselves promise no order.

use std::io::{self, Write};

use primer::{
    AssocMap, DynamicView, FixedSequence, MapHandle, add, assoc, division, division_or_zero,
    fixed, meow,
};

use crate::cli::{DemoArgs, Section};
use crate::common::CliResult;

/// Run the demo command.
pub fn run(args: DemoArgs, out: &mut dyn Write) -> CliResult<()> {
    let sections = if args.sections.is_empty() {
        Section::ALL.to_vec()
    } else {
        args.sections
    };

    writeln!(out, "=== Primer Demonstrations ===")?;
    for section in sections {
        tracing::debug!(?section, "Running demo section");
        writeln!(out)?;
        writeln!(out, "--- {} ---", section.title())?;
        match section {
            Section::Basics => basics(out)?,
            Section::Functions => functions(out)?,
            Section::Errors => errors(out)?,
            Section::Arrays => arrays(out)?,
            Section::Slices => slices(out)?,
            Section::Maps => maps(out)?,
        }
    }
    Ok(())
}

#[allow(clippy::approx_constant)]
fn basics(out: &mut dyn Write) -> io::Result<()> {
    let a: i64 = 10;
    let b: i64 = 20;
    let c: i64 = a + b;
    writeln!(out, "{c}")?;

    // several bindings at once
    let (d, e, f) = (1, 2, 3);
    writeln!(out, "{d} {e} {f}")?;

    // several bindings, several types
    let (g, h, i): (i64, &str, f64) = (1, "hello", 1.2);
    writeln!(out, "{g} {h} {i}")?;

    // inferred types
    let j = 10;
    let k = "hello";
    let l = 1.2;
    writeln!(out, "{j} {k} {l}")?;

    let (m, n, o) = (1, "hello", 1.2);
    writeln!(out, "{m} {n} {o}")?;

    const PI: f64 = 3.14;
    writeln!(out, "{PI}")?;

    const X: i64 = 1;
    const Y: &str = "hello";
    const Z: f64 = 1.2;
    writeln!(out, "{X} {Y} {Z}")
}

fn functions(out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "Hello, World!")?;
    writeln!(out, "{}", std::f64::consts::PI)?;
    writeln!(out, "add(1, 2) = {}", add(1, 2))?;
    writeln!(out, "meow() = {}", meow())
}

fn errors(out: &mut dyn Write) -> io::Result<()> {
    for (x, y) in [(10, 0), (10, 2)] {
        match division(x, y) {
            Ok(result) => writeln!(out, "Result: {result}")?,
            Err(err) => writeln!(out, "Error: {err}")?,
        }
    }

    let (quotient, err) = division_or_zero(10, 0);
    match err {
        Some(err) => writeln!(out, "division_or_zero(10, 0) = ({quotient}, {err})"),
        None => writeln!(out, "division_or_zero(10, 0) = ({quotient}, no error)"),
    }
}

fn arrays(out: &mut dyn Write) -> io::Result<()> {
    let a: FixedSequence<i64, 5> = FixedSequence::new();
    writeln!(out, "Empty array: {a}")?;

    let mut b: FixedSequence<i64, 5> = fixed![1, 2, 3, 4, 5];
    writeln!(out, "Initialized array: {b}")?;

    let c: FixedSequence<i64, 3> = fixed![1, 2, 3];
    writeln!(out, "Array with inferred size: {c}")?;

    writeln!(out, "First element: {}", b.get(0))?;

    b.set(0, 10);
    writeln!(out, "After modification: {b}")?;

    writeln!(out, "Array length: {}", b.len())?;

    let copy = b.clone();
    b.set(1, 20);
    writeln!(out, "Copy taken before b[1] = 20: {copy}")
}

fn slices(out: &mut dyn Write) -> io::Result<()> {
    let a: FixedSequence<i64, 5> = fixed![1, 2, 3, 4, 5];
    let slice: DynamicView<i64> = a.view(0, 2);
    writeln!(out, "{a}")?;
    writeln!(out, "{slice}")?;

    let slice = slice.append(6);
    writeln!(out, "{slice}")?;
    writeln!(out, "Array after append: {a}")?;

    let mut grown = slice.extend([7, 8, 9]);
    writeln!(
        out,
        "Slice after three more appends: {grown} (len {}, cap {})",
        grown.len(),
        grown.capacity()
    )?;
    writeln!(out, "Array after those appends: {a}")?;

    grown.set(0, 100);
    writeln!(out, "Slice after grown[0] = 100: {grown}")?;
    writeln!(out, "Array is no longer shared: {a}")
}

fn maps(out: &mut dyn Write) -> io::Result<()> {
    let a: MapHandle<&str, i64> = MapHandle::Nil;
    let mut b: MapHandle<&str, i64> = MapHandle::make();
    let c: AssocMap<&str, i64> = assoc! { "one" => 1, "two" => 2 };

    b.insert("one", 1);
    b.insert("two", 2);
    b.insert("three", 3);
    b.insert("four", 4);
    b.insert("five", 5);

    b.delete("three");

    let (value, exists) = b.lookup("three");
    let length = b.len();

    let mut entries: Vec<(&str, i64)> = b.iter().map(|(k, v)| (*k, *v)).collect();
    entries.sort();
    for (key, value) in entries {
        writeln!(out, "{key} {value}")?;
    }

    writeln!(out, "Map a: {a} (nil: {})", a.is_nil())?;
    writeln!(out, "Map b: {b}")?;
    writeln!(out, "Map c: {c}")?;
    writeln!(out, "Value of key 'one' in map b: {}", b.lookup("one").0)?;
    writeln!(out, "Value of key 'three' in map b: {value} {exists}")?;
    writeln!(out, "Length of map b: {length}")?;
    writeln!(out, "Value of key 'one' in map a: {:?}", a.lookup("one"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transcript(sections: Vec<Section>) -> String {
        let mut out = Vec::new();
        run(DemoArgs { sections }, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn all_sections_by_default() {
        let out = transcript(vec![]);
        for section in Section::ALL {
            assert!(out.contains(section.title()), "missing {section:?}");
        }
    }

    #[test]
    fn sections_run_in_requested_order() {
        let out = transcript(vec![Section::Maps, Section::Basics]);
        let maps = out.find("Map Demonstrations").unwrap();
        let basics = out.find("Basic Demonstrations").unwrap();
        assert!(maps < basics);
        assert!(!out.contains("Array Demonstrations"));
    }
}
