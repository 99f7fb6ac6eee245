#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]
#![deny(unsafe_code)]

//! Container semantics and checked arithmetic.
//!
//! - [`FixedSequence`]: a fixed-length array with value semantics.
//! - [`DynamicView`]: a growable window onto shared backing storage that
//!   writes through to its parent until an append outgrows its capacity.
//! - [`AssocMap`] and [`MapHandle`]: a hash map, and the nil-or-live handle
//!   that separates read-only empty maps from writable ones.
//! - [`arith`]: addition and division with an explicit division-by-zero error.
//!
//! # Example
//!
//! ```
//! use primer_core::{FixedSequence, fixed};
//!
//! let array: FixedSequence<i64, 5> = fixed![1, 2, 3, 4, 5];
//! let slice = array.view(0, 2);
//! assert_eq!(slice.capacity(), 5);
//!
//! // Spare capacity: the append lands in the array's own storage.
//! let slice = slice.append(6);
//! assert_eq!(slice.to_vec(), [1, 2, 6]);
//! assert_eq!(array.to_vec(), [1, 2, 6, 4, 5]);
//! ```

extern crate alloc;

pub mod arith;
pub mod error;
pub mod map;
pub mod sequence;
pub mod storage;
pub mod view;

pub use arith::{add, division, division_or_zero, meow};
pub use error::Error;
pub use map::{AssocMap, MapHandle};
pub use sequence::FixedSequence;
pub use view::DynamicView;
