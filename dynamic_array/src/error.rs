use thiserror::Error;

/// Errors returned by [`DynamicArray`](crate::DynamicArray) operations.
///
/// Every failing call reports its error before touching the array, so the
/// array is unchanged whenever one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListError {
    /// An argument is inconsistent with the array or the copy target.
    #[error("invalid argument: {reason}")]
    InvalidArgument { reason: &'static str },

    /// An index or the end of a range lies outside the valid elements.
    #[error("index {index} is out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// The requested capacity does not fit in a single allocation.
    #[error("capacity overflow")]
    CapacityOverflow,

    /// The allocator could not provide a buffer of the requested size.
    #[error("failed to allocate a buffer for {capacity} elements")]
    AllocFailed { capacity: usize },

    /// The array's length changed while a [`Cursor`](crate::Cursor) was walking it.
    #[error("collection was modified during enumeration: expected length {expected}, found {found}")]
    CollectionModified { expected: usize, found: usize },
}

pub type Result<T> = std::result::Result<T, ListError>;
