//! A growable array with explicit capacity control.
//!
//! [`DynamicArray`] owns one contiguous buffer obtained straight from the
//! global allocator and keeps its logical length separate from the buffer's
//! capacity. Growth doubles the buffer (starting at [`DEFAULT_CAPACITY`]),
//! which keeps [`DynamicArray::push`] amortized O(1); insertions and removals
//! shift the tail in place.
//!
//! ```
//! use dynamic_array::DynamicArray;
//!
//! let mut list = DynamicArray::new();
//! list.push("aaa");
//! list.push("ccc");
//! list.insert(1, "bbb")?;
//! assert_eq!(list.as_slice(), ["aaa", "bbb", "ccc"]);
//! assert_eq!(list.last_index_of(&"ccc"), Some(2));
//! # Ok::<(), dynamic_array::ListError>(())
//! ```

use std::alloc::{self, Layout};
use std::fmt;
use std::marker::PhantomData;
use std::mem;
use std::ops::{Deref, DerefMut, Range};
use std::ptr::{self, NonNull};

mod cursor;
mod error;
mod iter;

pub use cursor::Cursor;
pub use error::{ListError, Result};
pub use iter::IntoIter;

/// Capacity of the first buffer allocated by the growth policy.
pub const DEFAULT_CAPACITY: usize = 4;

/// Largest number of `T` that fits in a single allocation on this platform.
pub const fn max_capacity<T>() -> usize {
    let size = mem::size_of::<T>();
    if size == 0 {
        isize::MAX as usize
    } else {
        isize::MAX as usize / size
    }
}

pub struct DynamicArray<T> {
    ptr: NonNull<T>,
    cap: usize,
    len: usize,
    _marker: PhantomData<T>,
}

// SAFETY: the buffer is owned exclusively, so DynamicArray<T> is as
// thread-safe as T itself
unsafe impl<T: Send> Send for DynamicArray<T> {}
unsafe impl<T: Sync> Sync for DynamicArray<T> {}

impl<T> DynamicArray<T> {
    /// Creates an empty array. Nothing is allocated until the first push.
    pub const fn new() -> Self {
        Self {
            ptr: NonNull::dangling(),
            cap: 0,
            len: 0,
            _marker: PhantomData,
        }
    }

    /// Creates an empty array whose buffer holds exactly `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut array = Self::new();
        array.reallocate(capacity);
        array
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn capacity(&self) -> usize {
        self.cap
    }

    /// Resizes the buffer to exactly `capacity` slots.
    ///
    /// Fails with [`ListError::InvalidArgument`] when `capacity` is smaller
    /// than the current length. A capacity of zero releases the buffer.
    pub fn set_capacity(&mut self, capacity: usize) -> Result<()> {
        if capacity < self.len {
            return Err(ListError::InvalidArgument {
                reason: "capacity is smaller than the current length",
            });
        }
        self.try_reallocate(capacity)
    }

    /// Makes room for at least `min` elements using the doubling policy.
    ///
    /// # Panics
    ///
    /// Panics if `min` exceeds [`max_capacity`].
    pub fn ensure_capacity(&mut self, min: usize) {
        if self.cap < min {
            self.reallocate(self.grown_capacity(min));
        }
    }

    /// Fallible version of [`DynamicArray::ensure_capacity`].
    pub fn try_ensure_capacity(&mut self, min: usize) -> Result<()> {
        if self.cap >= min {
            return Ok(());
        }
        if min > max_capacity::<T>() {
            return Err(ListError::CapacityOverflow);
        }
        self.try_reallocate(self.grown_capacity(min))
    }

    /// Reserves room for `additional` more elements without panicking.
    pub fn try_reserve(&mut self, additional: usize) -> Result<()> {
        let required = self
            .len
            .checked_add(additional)
            .ok_or(ListError::CapacityOverflow)?;
        self.try_ensure_capacity(required)
    }

    /// Shrinks the buffer to the current length.
    pub fn shrink_to_fit(&mut self) {
        self.reallocate(self.len);
    }

    /// Appends `item` to the end of the array.
    pub fn push(&mut self, item: T) {
        if self.len == self.cap {
            self.ensure_capacity(self.len + 1);
        }
        unsafe {
            // SAFETY: len < cap after growing, so the slot is in bounds and free
            ptr::write(self.ptr.as_ptr().add(self.len), item);
        }
        self.len += 1;
    }

    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        // SAFETY: the slot at the old last index is initialized and no longer counted
        Some(unsafe { ptr::read(self.ptr.as_ptr().add(self.len)) })
    }

    /// Inserts `item` at `index`, shifting later elements one slot right.
    ///
    /// `index` may equal [`len`](Self::len), which appends.
    pub fn insert(&mut self, index: usize, item: T) -> Result<()> {
        if index > self.len {
            return Err(ListError::IndexOutOfRange {
                index,
                len: self.len,
            });
        }
        if self.len == self.cap {
            self.ensure_capacity(self.len + 1);
        }

        unsafe {
            let p = self.ptr.as_ptr().add(index);
            // SAFETY: [index, len) moves to [index + 1, len + 1), which is within cap
            ptr::copy(p, p.add(1), self.len - index);
            ptr::write(p, item);
        }
        self.len += 1;
        Ok(())
    }

    /// Inserts every element of `items` at `index`, keeping their order.
    ///
    /// The buffer grows at most once, however many items are inserted.
    pub fn insert_range<I>(&mut self, index: usize, items: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
    {
        if index > self.len {
            return Err(ListError::IndexOutOfRange {
                index,
                len: self.len,
            });
        }

        // Drain the source first so a panicking iterator leaves us untouched.
        let mut incoming: DynamicArray<T> = items.into_iter().collect();
        let count = incoming.len;
        if count == 0 {
            return Ok(());
        }

        self.ensure_capacity(self.len + count);
        unsafe {
            let p = self.ptr.as_ptr().add(index);
            // SAFETY: the tail shifts right by count within the new capacity,
            // then the gap is filled from a separate allocation
            ptr::copy(p, p.add(count), self.len - index);
            ptr::copy_nonoverlapping(incoming.ptr.as_ptr(), p, count);
            incoming.len = 0;
        }
        self.len += count;
        Ok(())
    }

    /// Removes the first element equal to `item`. Returns whether one was found.
    pub fn remove(&mut self, item: &T) -> bool
    where
        T: PartialEq,
    {
        match self.index_of(item) {
            Some(index) => {
                drop(self.take(index));
                true
            }
            None => false,
        }
    }

    /// Removes and returns the element at `index`.
    pub fn remove_at(&mut self, index: usize) -> Result<T> {
        if index >= self.len {
            return Err(ListError::IndexOutOfRange {
                index,
                len: self.len,
            });
        }
        Ok(self.take(index))
    }

    /// Removes `count` contiguous elements starting at `index`.
    pub fn remove_range(&mut self, index: usize, count: usize) -> Result<()> {
        let end = match index.checked_add(count) {
            Some(end) if end <= self.len => end,
            _ => {
                let index = if index > self.len {
                    index
                } else {
                    index.saturating_add(count)
                };
                return Err(ListError::IndexOutOfRange {
                    index,
                    len: self.len,
                });
            }
        };
        if count == 0 {
            return Ok(());
        }

        let tail = self.len - end;
        unsafe {
            let p = self.ptr.as_ptr().add(index);
            // A panicking destructor leaks the tail instead of dropping it twice.
            self.len = index;
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(p, count));
            ptr::copy(p.add(count), p, tail);
        }
        self.len = index + tail;
        Ok(())
    }

    pub fn contains(&self, item: &T) -> bool
    where
        T: PartialEq,
    {
        self.index_of(item).is_some()
    }

    /// Position of the first element equal to `item`.
    pub fn index_of(&self, item: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.as_slice().iter().position(|x| x == item)
    }

    /// Position of the last element equal to `item`.
    pub fn last_index_of(&self, item: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.as_slice().iter().rposition(|x| x == item)
    }

    /// Drops every element and releases the buffer, leaving capacity at zero.
    pub fn clear(&mut self) {
        let len = self.len;
        self.len = 0;
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.ptr.as_ptr(), len));
        }
        self.reallocate(0);
    }

    /// Reverses the order of the elements in place.
    pub fn reverse(&mut self) {
        let items = self.as_mut_slice();
        let len = items.len();
        for front in 0..len / 2 {
            items.swap(front, len - 1 - front);
        }
    }

    /// Clones every element into the start of `target`.
    pub fn copy_to(&self, target: &mut [T]) -> Result<()>
    where
        T: Clone,
    {
        if target.len() < self.len {
            return Err(ListError::InvalidArgument {
                reason: "target is smaller than the list",
            });
        }
        target[..self.len].clone_from_slice(self.as_slice());
        Ok(())
    }

    /// Clones every element into `target` starting at `insertion_index`.
    pub fn copy_to_at(&self, target: &mut [T], insertion_index: usize) -> Result<()>
    where
        T: Clone,
    {
        if insertion_index >= target.len() {
            return Err(ListError::InvalidArgument {
                reason: "insertion index is outside the target",
            });
        }
        if self.len > target.len() - insertion_index {
            return Err(ListError::InvalidArgument {
                reason: "list does not fit in the target at the insertion index",
            });
        }
        target[insertion_index..insertion_index + self.len].clone_from_slice(self.as_slice());
        Ok(())
    }

    /// Clones the elements in `range` into `target` starting at `insertion_index`.
    pub fn copy_range_to(
        &self,
        range: Range<usize>,
        target: &mut [T],
        insertion_index: usize,
    ) -> Result<()>
    where
        T: Clone,
    {
        let Range { start, end } = range;
        if start > end {
            return Err(ListError::InvalidArgument {
                reason: "range start is past the range end",
            });
        }
        if end > self.len {
            return Err(ListError::InvalidArgument {
                reason: "range extends past the end of the list",
            });
        }
        if insertion_index > target.len() {
            return Err(ListError::InvalidArgument {
                reason: "insertion index is outside the target",
            });
        }
        let count = end - start;
        if count > target.len() - insertion_index {
            return Err(ListError::InvalidArgument {
                reason: "range does not fit in the target at the insertion index",
            });
        }
        target[insertion_index..insertion_index + count].clone_from_slice(&self[start..end]);
        Ok(())
    }

    /// Returns a copy of the valid elements that shares nothing with the buffer.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.as_slice().to_vec()
    }

    pub fn as_slice(&self) -> &[T] {
        // SAFETY: [0, len) is initialized; ptr is dangling only when len == 0
        unsafe { std::slice::from_raw_parts(self.ptr.as_ptr(), self.len) }
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        unsafe { std::slice::from_raw_parts_mut(self.ptr.as_ptr(), self.len) }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Starts a traversal that detects length changes between steps.
    pub fn cursor(&self) -> Cursor {
        Cursor::new(self.len)
    }

    /// Moves the element at `index` out and closes the gap. `index` must be valid.
    fn take(&mut self, index: usize) -> T {
        debug_assert!(index < self.len);
        unsafe {
            self.len -= 1;
            let p = self.ptr.as_ptr().add(index);
            let removed = ptr::read(p);
            ptr::copy(p.add(1), p, self.len - index);
            removed
        }
    }

    fn grown_capacity(&self, min: usize) -> usize {
        let max = max_capacity::<T>();
        let mut new_cap = if self.cap == 0 {
            DEFAULT_CAPACITY
        } else {
            self.cap.checked_mul(2).unwrap_or(max)
        };
        if new_cap > max {
            new_cap = max;
        }
        if new_cap < min {
            new_cap = min;
        }
        new_cap
    }

    fn reallocate(&mut self, new_cap: usize) {
        match self.try_reallocate(new_cap) {
            Ok(()) => {}
            Err(ListError::AllocFailed { capacity }) => {
                // SAFETY: try_reallocate only reports AllocFailed for sizes it validated
                alloc::handle_alloc_error(unsafe { buffer_layout::<T>(capacity) })
            }
            Err(_) => capacity_overflow(),
        }
    }

    fn try_reallocate(&mut self, new_cap: usize) -> Result<()> {
        debug_assert!(new_cap >= self.len);
        if new_cap == self.cap {
            return Ok(());
        }
        if new_cap > max_capacity::<T>() {
            return Err(ListError::CapacityOverflow);
        }
        tracing::trace!(from = self.cap, to = new_cap, len = self.len, "resizing buffer");

        if mem::size_of::<T>() == 0 {
            self.cap = new_cap;
            return Ok(());
        }
        if new_cap == 0 {
            unsafe { release_buffer(self.ptr, self.cap) };
            self.ptr = NonNull::dangling();
            self.cap = 0;
            return Ok(());
        }

        let new_layout = Layout::array::<T>(new_cap).map_err(|_| ListError::CapacityOverflow)?;
        let raw = if self.cap == 0 {
            unsafe { alloc::alloc(new_layout) }
        } else {
            // SAFETY: ptr was allocated with the layout for the current cap
            unsafe {
                alloc::realloc(
                    self.ptr.as_ptr().cast(),
                    buffer_layout::<T>(self.cap),
                    new_layout.size(),
                )
            }
        };
        // On failure the old buffer is still ours and still valid.
        self.ptr = NonNull::new(raw.cast::<T>())
            .ok_or(ListError::AllocFailed { capacity: new_cap })?;
        self.cap = new_cap;
        Ok(())
    }
}

/// Layout of a buffer holding `cap` elements.
///
/// # Safety
///
/// `cap` must not exceed [`max_capacity`] for `T`.
unsafe fn buffer_layout<T>(cap: usize) -> Layout {
    unsafe { Layout::from_size_align_unchecked(mem::size_of::<T>() * cap, mem::align_of::<T>()) }
}

/// Returns a buffer to the allocator. Does nothing for empty or zero-sized buffers.
///
/// # Safety
///
/// `ptr` must come from a `DynamicArray<T>` whose capacity is `cap`, and
/// must not be used afterwards.
pub(crate) unsafe fn release_buffer<T>(ptr: NonNull<T>, cap: usize) {
    if cap != 0 && mem::size_of::<T>() != 0 {
        unsafe { alloc::dealloc(ptr.as_ptr().cast(), buffer_layout::<T>(cap)) }
    }
}

#[cold]
fn capacity_overflow() -> ! {
    panic!("capacity overflow");
}

impl<T> Drop for DynamicArray<T> {
    fn drop(&mut self) {
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.ptr.as_ptr(), self.len));
            release_buffer(self.ptr, self.cap);
        }
    }
}

impl<T> Deref for DynamicArray<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> DerefMut for DynamicArray<T> {
    fn deref_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T> Default for DynamicArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for DynamicArray<T> {
    fn clone(&self) -> Self {
        let mut copy = Self::with_capacity(self.len);
        copy.extend(self.iter().cloned());
        copy
    }
}

impl<T: PartialEq> PartialEq for DynamicArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for DynamicArray<T> {}

impl<T: fmt::Debug> fmt::Debug for DynamicArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynamicArray")
            .field("len", &self.len)
            .field("capacity", &self.cap)
            .field("items", &self.as_slice())
            .finish()
    }
}

impl<T> fmt::Display for DynamicArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Count = {}", self.len)
    }
}
