//! Shared backing storage for sequences and views.
//!
//! A [`Backing`] is a reference-counted, fixed-length buffer with interior
//! mutability. Every [`FixedSequence`](crate::FixedSequence) owns exactly one,
//! and every [`DynamicView`](crate::DynamicView) derived from it holds another
//! handle to the same buffer, so a write through either is visible through
//! both. The buffer never changes length: growing a view means allocating a
//! new `Backing`, never resizing an existing one.
//!
//! No `RefCell` borrow outlives a method call on this type, so borrow
//! conflicts cannot surface through the public API.

use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::RefCell;
use core::fmt;
use core::ops::Range;

/// A handle to a fixed-length buffer that may be shared.
///
/// `Clone` produces another handle to the *same* buffer. Use
/// [`Backing::deep_copy`] for an independent buffer.
pub struct Backing<T> {
    cells: Rc<RefCell<Box<[T]>>>,
}

impl<T> Backing<T> {
    /// Wrap an owned buffer.
    pub fn from_boxed(data: Box<[T]>) -> Self {
        Self {
            cells: Rc::new(RefCell::new(data)),
        }
    }

    /// A zero-length buffer, used by nil views.
    pub fn empty() -> Self {
        Self::from_boxed(Box::new([]))
    }

    /// Number of element slots in the buffer.
    pub fn len(&self) -> usize {
        self.cells.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Overwrite the slot at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`. Callers validate indices against their
    /// own (narrower) bounds first.
    pub fn set(&self, index: usize, value: T) {
        self.cells.borrow_mut()[index] = value;
    }

    /// Run `f` over the slots in `range`.
    pub fn with_range<R>(&self, range: Range<usize>, f: impl FnOnce(&[T]) -> R) -> R {
        f(&self.cells.borrow()[range])
    }

    /// Whether both handles point at the same buffer.
    pub fn ptr_eq(&self, other: &Backing<T>) -> bool {
        Rc::ptr_eq(&self.cells, &other.cells)
    }

    /// Number of live handles to this buffer.
    pub fn handle_count(&self) -> usize {
        Rc::strong_count(&self.cells)
    }
}

impl<T: Clone> Backing<T> {
    /// Read the slot at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    pub fn get(&self, index: usize) -> T {
        self.cells.borrow()[index].clone()
    }

    /// Copy the slots in `range` out of the buffer.
    pub fn to_vec(&self, range: Range<usize>) -> Vec<T> {
        self.with_range(range, |slots| slots.to_vec())
    }

    /// A new, unshared buffer with the same contents.
    pub fn deep_copy(&self) -> Self {
        Self::from_boxed(self.cells.borrow().clone())
    }
}

impl<T: Clone + Default> Backing<T> {
    /// A new buffer of `capacity` slots holding a copy of `range` followed by
    /// default values.
    pub fn regrow(&self, range: Range<usize>, capacity: usize) -> Self {
        debug_assert!(range.len() <= capacity);
        let mut data = Vec::with_capacity(capacity);
        self.with_range(range, |src| data.extend_from_slice(src));
        data.resize_with(capacity, T::default);
        Self::from_boxed(data.into_boxed_slice())
    }
}

impl<T> Clone for Backing<T> {
    fn clone(&self) -> Self {
        Self {
            cells: Rc::clone(&self.cells),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Backing<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.cells.borrow().iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn backing(values: &[i64]) -> Backing<i64> {
        Backing::from_boxed(values.to_vec().into_boxed_slice())
    }

    #[test]
    fn clone_shares_the_buffer() {
        let a = backing(&[1, 2, 3]);
        let b = a.clone();
        b.set(1, 20);
        assert_eq!(a.get(1), 20);
        assert!(a.ptr_eq(&b));
        assert_eq!(a.handle_count(), 2);
    }

    #[test]
    fn deep_copy_is_independent() {
        let a = backing(&[1, 2, 3]);
        let b = a.deep_copy();
        b.set(0, 10);
        assert_eq!(a.get(0), 1);
        assert!(!a.ptr_eq(&b));
    }

    #[test]
    fn regrow_copies_prefix_and_fills_default() {
        let a = backing(&[1, 2, 3, 4]);
        let b = a.regrow(1..3, 5);
        assert_eq!(b.to_vec(0..5), vec![2, 3, 0, 0, 0]);
        assert!(!a.ptr_eq(&b));
    }

    #[test]
    fn empty_buffer() {
        let a = Backing::<i64>::empty();
        assert!(a.is_empty());
        assert_eq!(a.to_vec(0..0), vec![]);
    }

    #[test]
    #[should_panic]
    fn set_past_end_panics() {
        backing(&[1]).set(1, 2);
    }
}
