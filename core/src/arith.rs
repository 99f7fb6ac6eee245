//! Integer helpers
//!
//! Functions:
//! - `add(x, y)`: wrapping addition
//! - `meow()`: the string `"meow"`
//! - `division(x, y)`: truncated division with explicit errors
//! - `division_or_zero(x, y)`: the same, as a `(quotient, error)` pair
//! - `division_unchecked(x, y)`: truncated division that panics on a zero divisor

use crate::error::Error;

// ============================================================================
// Error Handling
// ============================================================================

/// Check for division by zero and return an appropriate error
#[inline]
fn check_division_by_zero(y: i64) -> Result<(), Error> {
    if y == 0 {
        Err(Error::DivisionByZero)
    } else {
        Ok(())
    }
}

/// Check for overflow in i64::MIN / -1 case and return an appropriate error
#[inline]
fn check_overflow(x: i64, y: i64) -> Result<(), Error> {
    if x == i64::MIN && y == -1 {
        Err(Error::IntegerOverflow)
    } else {
        Ok(())
    }
}

// ============================================================================
// Functions
// ============================================================================

/// Sum of `x` and `y`, wrapping on overflow.
pub fn add(x: i64, y: i64) -> i64 {
    x.wrapping_add(y)
}

pub fn meow() -> &'static str {
    "meow"
}

/// Truncated division (rounds towards zero).
///
/// Errors:
/// - DivisionByZero if `y == 0`
/// - IntegerOverflow if `x == i64::MIN && y == -1`
///
/// Examples:
/// - `division(10, 2)  -> Ok(5)`
/// - `division(-7, 2)  -> Ok(-3)`
/// - `division(10, 0)  -> Err(DivisionByZero)`
pub fn division(x: i64, y: i64) -> Result<i64, Error> {
    check_division_by_zero(y)?;
    check_overflow(x, y)?;
    Ok(x / y)
}

/// [`division`] as a pair: the quotient, or zero alongside the error.
pub fn division_or_zero(x: i64, y: i64) -> (i64, Option<Error>) {
    match division(x, y) {
        Ok(quotient) => (quotient, None),
        Err(err) => (0, Some(err)),
    }
}

/// Truncated division with no error channel.
///
/// A zero divisor (or `i64::MIN / -1`) panics. Kept for the demonstration of
/// what an unchecked division does; use [`division`] everywhere else.
///
/// # Panics
///
/// Panics if `y == 0` or the quotient overflows.
pub fn division_unchecked(x: i64, y: i64) -> i64 {
    x / y
}

#[cfg(test)]
#[path = "arith_test.rs"]
mod arith_test;
