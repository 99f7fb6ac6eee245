//! Fixed-length sequences with value semantics.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use crate::error::Error;
use crate::storage::Backing;
use crate::view::DynamicView;

/// An ordered container of exactly `N` elements.
///
/// Cloning copies every element into fresh storage, so two sequences never
/// alias. Views taken with [`FixedSequence::view`] do alias the sequence
/// they came from.
pub struct FixedSequence<T, const N: usize> {
    backing: Backing<T>,
}

static_assertions::assert_eq_size!(FixedSequence<u8, 4>, usize);

/// Build a [`FixedSequence`] whose length is the number of listed values.
///
/// `fixed![v; n]` repeats a single value `n` times.
///
/// ```
/// use primer_core::{FixedSequence, fixed};
///
/// let inferred = fixed![1, 2, 3];
/// assert_eq!(inferred.len(), 3);
///
/// let zeros: FixedSequence<i64, 4> = fixed![0; 4];
/// assert_eq!(zeros.to_vec(), [0, 0, 0, 0]);
/// ```
///
/// An explicit length that disagrees with the value count does not compile:
///
/// ```compile_fail
/// use primer_core::{FixedSequence, fixed};
///
/// let short: FixedSequence<i64, 5> = fixed![1, 2, 3];
/// ```
#[macro_export]
macro_rules! fixed {
    ($value:expr; $n:expr) => {
        $crate::FixedSequence::from([$value; $n])
    };
    ($($value:expr),* $(,)?) => {
        $crate::FixedSequence::from([$($value),*])
    };
}

impl<T: Default, const N: usize> FixedSequence<T, N> {
    /// A sequence of `N` default values.
    pub fn new() -> Self {
        let data: Box<[T]> = (0..N).map(|_| T::default()).collect();
        Self {
            backing: Backing::from_boxed(data),
        }
    }
}

impl<T, const N: usize> FixedSequence<T, N> {
    /// Always `N`.
    pub const fn len(&self) -> usize {
        N
    }

    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Replace the element at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= N`.
    pub fn set(&mut self, index: usize, value: T) {
        if let Err(err) = self.try_set(index, value) {
            panic!("{err}");
        }
    }

    /// Replace the element at `index`, or report why it cannot be replaced.
    pub fn try_set(&mut self, index: usize, value: T) -> Result<(), Error> {
        check_index(index, N)?;
        self.backing.set(index, value);
        Ok(())
    }

    /// A view over `[start, end)` that shares this sequence's storage.
    ///
    /// The view's capacity runs to the end of the sequence, so appends
    /// through it overwrite elements `end..N` before any reallocation.
    ///
    /// # Panics
    ///
    /// Panics unless `start <= end <= N`.
    pub fn view(&self, start: usize, end: usize) -> DynamicView<T> {
        match self.try_view(start, end) {
            Ok(view) => view,
            Err(err) => panic!("{err}"),
        }
    }

    /// Checked form of [`FixedSequence::view`].
    pub fn try_view(&self, start: usize, end: usize) -> Result<DynamicView<T>, Error> {
        if start > end || end > N {
            return Err(Error::SliceOutOfRange {
                start,
                end,
                capacity: N,
            });
        }
        Ok(DynamicView::over(
            self.backing.clone(),
            start,
            end - start,
            N - start,
        ))
    }

    /// A view over the whole sequence.
    pub fn as_view(&self) -> DynamicView<T> {
        self.view(0, N)
    }
}

impl<T: Clone, const N: usize> FixedSequence<T, N> {
    /// The element at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= N`.
    pub fn get(&self, index: usize) -> T {
        match self.try_get(index) {
            Some(value) => value,
            None => panic!("{}", Error::IndexOutOfRange { index, len: N }),
        }
    }

    pub fn try_get(&self, index: usize) -> Option<T> {
        (index < N).then(|| self.backing.get(index))
    }

    /// Copy the elements out, in order.
    pub fn to_vec(&self) -> Vec<T> {
        self.backing.to_vec(0..N)
    }

    /// Iterate over copies of the elements.
    pub fn iter(&self) -> impl Iterator<Item = T> + '_ {
        (0..N).map(|index| self.backing.get(index))
    }
}

pub(crate) fn check_index(index: usize, len: usize) -> Result<(), Error> {
    if index < len {
        Ok(())
    } else {
        Err(Error::IndexOutOfRange { index, len })
    }
}

impl<T, const N: usize> From<[T; N]> for FixedSequence<T, N> {
    fn from(values: [T; N]) -> Self {
        let data: Box<[T]> = Box::new(values);
        Self {
            backing: Backing::from_boxed(data),
        }
    }
}

impl<T: Default, const N: usize> Default for FixedSequence<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone, const N: usize> Clone for FixedSequence<T, N> {
    fn clone(&self) -> Self {
        Self {
            backing: self.backing.deep_copy(),
        }
    }
}

impl<T: PartialEq, const N: usize> PartialEq for FixedSequence<T, N> {
    fn eq(&self, other: &Self) -> bool {
        self.backing
            .with_range(0..N, |lhs| other.backing.with_range(0..N, |rhs| lhs == rhs))
    }
}

impl<T: Eq, const N: usize> Eq for FixedSequence<T, N> {}

impl<T: fmt::Debug, const N: usize> fmt::Debug for FixedSequence<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("FixedSequence").field(&self.backing).finish()
    }
}

/// Space-separated elements in brackets: `[1 2 3]`.
impl<T: fmt::Display, const N: usize> fmt::Display for FixedSequence<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.backing
            .with_range(0..N, |values| write_bracketed(f, values))
    }
}

pub(crate) fn write_bracketed<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    values: &[T],
) -> fmt::Result {
    f.write_str("[")?;
    for (i, value) in values.iter().enumerate() {
        if i > 0 {
            f.write_str(" ")?;
        }
        write!(f, "{value}")?;
    }
    f.write_str("]")
}

#[cfg(test)]
#[path = "sequence_test.rs"]
mod sequence_test;
