//! Error type shared by the checked operations of this crate.
//!
//! Misuse of a container (indexing past its end, writing to a nil map) panics
//! in the primary API. The `try_*` variants report the same conditions through
//! [`Error`] so callers that expect them can recover.

use thiserror::Error;

/// Errors returned by the checked operations.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Integer division with a zero divisor.
    #[error("division by zero")]
    DivisionByZero,

    /// `i64::MIN / -1` does not fit in an `i64`.
    #[error("integer overflow")]
    IntegerOverflow,

    /// Insert into a map handle that was never made.
    #[error("assignment to entry in nil map")]
    NilMapWrite,

    /// Element index outside `0..len`.
    #[error("index out of range [{index}] with length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// Slice bounds that are inverted or run past the available capacity.
    #[error("slice bounds out of range [{start}:{end}] with capacity {capacity}")]
    SliceOutOfRange {
        start: usize,
        end: usize,
        capacity: usize,
    },
}

impl Error {
    /// Short stable code, used by the renderer in the facade crate.
    pub fn code(&self) -> &'static str {
        match self {
            Error::DivisionByZero => "primer::division_by_zero",
            Error::IntegerOverflow => "primer::integer_overflow",
            Error::NilMapWrite => "primer::nil_map_write",
            Error::IndexOutOfRange { .. } => "primer::index_out_of_range",
            Error::SliceOutOfRange { .. } => "primer::slice_out_of_range",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn messages_match_runtime_wording() {
        assert_eq!(Error::DivisionByZero.to_string(), "division by zero");
        assert_eq!(
            Error::IndexOutOfRange { index: 5, len: 5 }.to_string(),
            "index out of range [5] with length 5"
        );
        assert_eq!(
            Error::SliceOutOfRange {
                start: 1,
                end: 9,
                capacity: 5
            }
            .to_string(),
            "slice bounds out of range [1:9] with capacity 5"
        );
    }

    #[test]
    fn codes_are_distinct() {
        let codes = [
            Error::DivisionByZero.code(),
            Error::IntegerOverflow.code(),
            Error::NilMapWrite.code(),
            Error::IndexOutOfRange { index: 0, len: 0 }.code(),
            Error::SliceOutOfRange {
                start: 0,
                end: 0,
                capacity: 0,
            }
            .code(),
        ];
        for (i, a) in codes.iter().enumerate() {
            for b in &codes[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
