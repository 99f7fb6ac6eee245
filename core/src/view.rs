//! Growable views over shared backing storage.
//!
//! A [`DynamicView`] is an `(storage, offset, len, capacity)` header. Cloning
//! a view copies the header only, so clones, the parent
//! [`FixedSequence`](crate::FixedSequence), and any sibling views all see
//! each other's writes for as long as they share storage.
//!
//! [`DynamicView::append`] is where sharing can end:
//!
//! - `len < capacity`: the value is written into the existing storage at
//!   `offset + len`, overwriting whatever the parent held there.
//! - `len == capacity`: a new buffer is allocated, the `len` visible elements
//!   are copied over, and the returned view no longer aliases anything.

use alloc::vec::Vec;
use core::fmt;

use crate::error::Error;
use crate::sequence::{check_index, write_bracketed};
use crate::storage::Backing;

/// A window onto a contiguous run of backing storage.
pub struct DynamicView<T> {
    backing: Backing<T>,
    offset: usize,
    len: usize,
    capacity: usize,
}

static_assertions::assert_eq_size!(DynamicView<u8>, [usize; 4]);

/// Capacity of the buffer allocated when a full view receives one more element.
pub fn grown_capacity(capacity: usize) -> usize {
    capacity.saturating_mul(2).max(capacity + 1)
}

impl<T> DynamicView<T> {
    /// The nil view: no storage, length and capacity zero.
    pub fn new() -> Self {
        Self::over(Backing::empty(), 0, 0, 0)
    }

    pub(crate) fn over(backing: Backing<T>, offset: usize, len: usize, capacity: usize) -> Self {
        debug_assert!(len <= capacity);
        debug_assert!(offset + capacity <= backing.len());
        Self {
            backing,
            offset,
            len,
            capacity,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// How long this view can grow before an append reallocates.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Whether both views currently write into the same buffer.
    pub fn shares_storage_with(&self, other: &DynamicView<T>) -> bool {
        self.backing.ptr_eq(&other.backing)
    }

    /// Replace the element at `index`.
    ///
    /// The write is visible through every view and sequence sharing this
    /// view's storage.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    pub fn set(&mut self, index: usize, value: T) {
        if let Err(err) = self.try_set(index, value) {
            panic!("{err}");
        }
    }

    pub fn try_set(&mut self, index: usize, value: T) -> Result<(), Error> {
        check_index(index, self.len)?;
        self.backing.set(self.offset + index, value);
        Ok(())
    }

    /// Re-slice to `[start, end)` of this view.
    ///
    /// `end` may run past `len()` up to `capacity()`, exposing slots that an
    /// earlier in-place append (or the parent sequence) wrote. The result has
    /// capacity `capacity() - start`.
    ///
    /// # Panics
    ///
    /// Panics unless `start <= end <= capacity()`.
    pub fn reslice(&self, start: usize, end: usize) -> Self {
        match self.try_reslice(start, end) {
            Ok(view) => view,
            Err(err) => panic!("{err}"),
        }
    }

    pub fn try_reslice(&self, start: usize, end: usize) -> Result<Self, Error> {
        if start > end || end > self.capacity {
            return Err(Error::SliceOutOfRange {
                start,
                end,
                capacity: self.capacity,
            });
        }
        tracing::trace!(start, end, capacity = self.capacity, "Reslicing view");
        Ok(Self::over(
            self.backing.clone(),
            self.offset + start,
            end - start,
            self.capacity - start,
        ))
    }

    fn visible(&self) -> core::ops::Range<usize> {
        self.offset..self.offset + self.len
    }
}

impl<T: Clone> DynamicView<T> {
    /// The element at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    pub fn get(&self, index: usize) -> T {
        match self.try_get(index) {
            Some(value) => value,
            None => panic!(
                "{}",
                Error::IndexOutOfRange {
                    index,
                    len: self.len
                }
            ),
        }
    }

    pub fn try_get(&self, index: usize) -> Option<T> {
        (index < self.len).then(|| self.backing.get(self.offset + index))
    }

    /// Copy the visible elements out, in order.
    pub fn to_vec(&self) -> Vec<T> {
        self.backing.to_vec(self.visible())
    }

    /// Iterate over copies of the visible elements.
    pub fn iter(&self) -> impl Iterator<Item = T> + '_ {
        self.visible().map(|slot| self.backing.get(slot))
    }
}

impl<T: Clone + Default> DynamicView<T> {
    /// A view of `len` default values with room for `capacity`.
    ///
    /// # Panics
    ///
    /// Panics if `len > capacity`.
    pub fn with_capacity(len: usize, capacity: usize) -> Self {
        assert!(
            len <= capacity,
            "{}",
            Error::SliceOutOfRange {
                start: 0,
                end: len,
                capacity
            }
        );
        Self::over(Backing::empty().regrow(0..0, capacity), 0, len, capacity)
    }

    /// This view with `value` added at the end.
    ///
    /// With spare capacity the value is written in place and the returned
    /// view still shares storage with `self`. Without it, the returned view
    /// owns a new buffer of [`grown_capacity`] slots and shares nothing.
    /// `self` is left untouched either way, as a header.
    #[must_use = "append returns the grown view; `self` keeps its old length"]
    pub fn append(&self, value: T) -> Self {
        if self.len < self.capacity {
            self.backing.set(self.offset + self.len, value);
            return Self::over(
                self.backing.clone(),
                self.offset,
                self.len + 1,
                self.capacity,
            );
        }

        let capacity = grown_capacity(self.capacity);
        tracing::debug!(
            len = self.len,
            old_capacity = self.capacity,
            new_capacity = capacity,
            "View outgrew its storage, reallocating"
        );
        let backing = self.backing.regrow(self.visible(), capacity);
        backing.set(self.len, value);
        Self::over(backing, 0, self.len + 1, capacity)
    }

    /// Append in place: `view.push(x)` is `view = view.append(x)`.
    pub fn push(&mut self, value: T) {
        *self = self.append(value);
    }

    /// This view with every value of `values` appended in order.
    #[must_use = "extend returns the grown view; `self` keeps its old length"]
    pub fn extend(&self, values: impl IntoIterator<Item = T>) -> Self {
        let mut view = self.clone();
        for value in values {
            view.push(value);
        }
        view
    }
}

impl<T> Default for DynamicView<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Copies the header; the storage stays shared.
impl<T> Clone for DynamicView<T> {
    fn clone(&self) -> Self {
        Self {
            backing: self.backing.clone(),
            offset: self.offset,
            len: self.len,
            capacity: self.capacity,
        }
    }
}

impl<T> From<Vec<T>> for DynamicView<T> {
    fn from(values: Vec<T>) -> Self {
        let len = values.len();
        Self::over(Backing::from_boxed(values.into_boxed_slice()), 0, len, len)
    }
}

impl<T> FromIterator<T> for DynamicView<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

/// Compares visible elements only; storage identity and capacity are ignored.
impl<T: PartialEq> PartialEq for DynamicView<T> {
    fn eq(&self, other: &Self) -> bool {
        self.backing.with_range(self.visible(), |lhs| {
            other.backing.with_range(other.visible(), |rhs| lhs == rhs)
        })
    }
}

impl<T: fmt::Debug> fmt::Debug for DynamicView<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.backing.with_range(self.visible(), |values| {
            f.debug_struct("DynamicView")
                .field("values", &values)
                .field("offset", &self.offset)
                .field("capacity", &self.capacity)
                .finish()
        })
    }
}

/// Space-separated elements in brackets: `[1 2 6]`.
impl<T: fmt::Display> fmt::Display for DynamicView<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.backing
            .with_range(self.visible(), |values| write_bracketed(f, values))
    }
}

#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;
