use std::marker::PhantomData;
use std::mem;
use std::ptr::{self, NonNull};

use crate::{release_buffer, DynamicArray};

/// Owning iterator returned by [`DynamicArray::into_iter`].
pub struct IntoIter<T> {
    buf: NonNull<T>,
    cap: usize,
    head: usize,
    tail: usize,
    _marker: PhantomData<T>,
}

// SAFETY: IntoIter owns its remaining elements exactly like DynamicArray does
unsafe impl<T: Send> Send for IntoIter<T> {}
unsafe impl<T: Sync> Sync for IntoIter<T> {}

impl<T> IntoIter<T> {
    /// The elements that have not been yielded yet.
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: [head, tail) are initialized and not yet moved out
        unsafe { std::slice::from_raw_parts(self.buf.as_ptr().add(self.head), self.tail - self.head) }
    }
}

impl<T> IntoIterator for DynamicArray<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        let this = mem::ManuallyDrop::new(self);
        IntoIter {
            buf: this.ptr,
            cap: this.cap,
            head: 0,
            tail: this.len,
            _marker: PhantomData,
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.head == self.tail {
            return None;
        }
        // SAFETY: head < tail, so the slot is initialized; advancing head
        // transfers its ownership to the caller
        let item = unsafe { ptr::read(self.buf.as_ptr().add(self.head)) };
        self.head += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.tail - self.head;
        (remaining, Some(remaining))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        if self.head == self.tail {
            return None;
        }
        self.tail -= 1;
        // SAFETY: tail was decremented past an initialized slot
        Some(unsafe { ptr::read(self.buf.as_ptr().add(self.tail)) })
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        unsafe {
            let remaining = ptr::slice_from_raw_parts_mut(
                self.buf.as_ptr().add(self.head),
                self.tail - self.head,
            );
            ptr::drop_in_place(remaining);
            release_buffer(self.buf, self.cap);
        }
    }
}

impl<'a, T> IntoIterator for &'a DynamicArray<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut DynamicArray<T> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T> FromIterator<T> for DynamicArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut array = DynamicArray::new();
        array.extend(iter);
        array
    }
}

impl<T> Extend<T> for DynamicArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        if lower > 0 {
            self.ensure_capacity(self.len.saturating_add(lower));
        }
        for item in iter {
            self.push(item);
        }
    }
}

impl<T> From<Vec<T>> for DynamicArray<T> {
    fn from(items: Vec<T>) -> Self {
        items.into_iter().collect()
    }
}

impl<T, const N: usize> From<[T; N]> for DynamicArray<T> {
    fn from(items: [T; N]) -> Self {
        items.into_iter().collect()
    }
}
