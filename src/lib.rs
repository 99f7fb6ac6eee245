//! Primer - container semantics and checked arithmetic, with readable errors
//!
//! # Overview
//!
//! Primer models two kinds of sequence and one kind of map:
//!
//! - [`FixedSequence`]: exactly `N` elements, copied on clone.
//! - [`DynamicView`]: a growable window that writes through to the storage it
//!   was cut from, until an append outgrows it.
//! - [`AssocMap`] / [`MapHandle`]: a hash map, and a handle that may be nil
//!   (readable as empty, fatal to write).
//!
//! # Quick Start
//!
//! ```
//! use primer::{MapHandle, division, fixed};
//!
//! let array = fixed![1, 2, 3, 4, 5];
//! let slice = array.view(0, 2).append(6);
//! assert_eq!(slice.to_string(), "[1 2 6]");
//! assert_eq!(array.to_string(), "[1 2 6 4 5]");
//!
//! let mut scores: MapHandle<&str, i64> = MapHandle::make();
//! scores.insert("one", 1);
//! assert_eq!(scores.lookup("two"), (0, false));
//!
//! assert!(division(10, 0).is_err());
//! ```
//!
//! # Errors
//!
//! Misuse (indexing out of range, writing to a nil map) panics. Expected
//! failures come back as [`Error`]; [`render_error_to`] turns one into a
//! terminal report.

// Error rendering utilities
pub mod error_renderer;
pub use error_renderer::{CharSet, RenderConfig, Report, render_error, render_error_to};

// Re-export public API from primer_core
pub use primer_core::{
    AssocMap, DynamicView, Error, FixedSequence, MapHandle, add, arith, assoc, division,
    division_or_zero, fixed, meow,
};
