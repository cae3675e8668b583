use crate::{DynamicArray, ListError, Result};

/// A detached read position into a [`DynamicArray`].
///
/// Unlike [`DynamicArray::iter`], a cursor does not hold a borrow between
/// steps, so the array may be mutated while a traversal is in progress. The
/// cursor remembers the length it started with and refuses to continue once
/// the array no longer has that length.
///
/// ```
/// use dynamic_array::{DynamicArray, ListError};
///
/// let mut list: DynamicArray<i32> = [1, 2, 3].into_iter().collect();
/// let mut cursor = list.cursor();
/// assert_eq!(cursor.next(&list), Ok(Some(&1)));
///
/// list.push(4);
/// assert_eq!(
///     cursor.next(&list),
///     Err(ListError::CollectionModified { expected: 3, found: 4 })
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cursor {
    position: usize,
    expected_len: usize,
}

impl Cursor {
    pub(crate) fn new(len: usize) -> Self {
        Self {
            position: 0,
            expected_len: len,
        }
    }

    /// Returns the next element, `Ok(None)` once the snapshot range is
    /// exhausted, or [`ListError::CollectionModified`] if the length of
    /// `array` differs from the one recorded when the cursor was created.
    pub fn next<'a, T>(&mut self, array: &'a DynamicArray<T>) -> Result<Option<&'a T>> {
        if array.len() != self.expected_len {
            return Err(ListError::CollectionModified {
                expected: self.expected_len,
                found: array.len(),
            });
        }

        let item = array.as_slice().get(self.position);
        if item.is_some() {
            self.position += 1;
        }
        Ok(item)
    }

    /// Index of the element the next call to [`Cursor::next`] yields.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Rewinds to the start and takes a fresh snapshot of `array`'s length.
    pub fn reset<T>(&mut self, array: &DynamicArray<T>) {
        self.position = 0;
        self.expected_len = array.len();
    }
}
