//! Low-level primitives for buffer memory operations.
//!
//! Holds the single buffer allocation routine and the unchecked element
//! accessors. This is the only module allowed to contain `unsafe` code;
//! every `unsafe` block carries a `// SAFETY:` comment.

#![allow(unsafe_code)]

use std::mem;

use tracing::{event, Level};

use crate::array::DynArray;
use crate::error::ArrayError;

/// Target for buffer allocation events.
pub(crate) const ALLOC_TARGET: &str = "dynarr::alloc";

/// Replace `storage` with a buffer of exactly `capacity` slots holding the
/// first `len` elements of the old one, in order.
///
/// Slots past `len` are default-initialized; the old stale tail is dropped
/// with the old buffer. On failure `storage` is not touched.
pub(crate) fn reallocate<T: Default>(
    storage: &mut Box<[T]>,
    len: usize,
    capacity: usize,
) -> Result<(), ArrayError> {
    debug_assert!(len <= capacity && len <= storage.len());
    let mut buffer: Vec<T> = Vec::new();
    if buffer.try_reserve_exact(capacity).is_err() {
        let bytes = capacity.saturating_mul(mem::size_of::<T>());
        event!(
            target: ALLOC_TARGET,
            Level::DEBUG,
            capacity,
            bytes,
            "buffer allocation refused"
        );
        return Err(ArrayError::AllocationFailed { capacity, bytes });
    }
    let mut old = mem::take(storage).into_vec();
    old.truncate(len);
    buffer.extend(old);
    buffer.resize_with(capacity, T::default);
    *storage = buffer.into_boxed_slice();
    Ok(())
}

impl<T> DynArray<T> {
    /// Reference to slot `pos` without any bounds check.
    ///
    /// This is the zero-overhead counterpart of indexing. Every slot of the
    /// buffer holds an initialized value, so positions in
    /// `[size(), capacity())` are memory-safe but yield stale or default
    /// values.
    ///
    /// # Safety
    ///
    /// `pos` must be less than [`capacity()`](DynArray::capacity).
    pub unsafe fn get_unchecked(&self, pos: usize) -> &T {
        debug_assert!(pos < self.capacity());
        // SAFETY: the caller guarantees `pos < capacity`, and `storage` is
        // exactly `capacity` initialized slots.
        unsafe { self.storage.get_unchecked(pos) }
    }

    /// Mutable reference to slot `pos` without any bounds check.
    ///
    /// Writing into `[size(), capacity())` is memory-safe but the value is
    /// not part of the live range until `size()` grows over it.
    ///
    /// # Safety
    ///
    /// `pos` must be less than [`capacity()`](DynArray::capacity).
    pub unsafe fn get_unchecked_mut(&mut self, pos: usize) -> &mut T {
        debug_assert!(pos < self.capacity());
        // SAFETY: the caller guarantees `pos < capacity`, and `storage` is
        // exactly `capacity` initialized slots.
        unsafe { self.storage.get_unchecked_mut(pos) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reallocate_keeps_prefix_and_defaults_tail() {
        let mut storage: Box<[String]> = vec!["a".into(), "b".into(), "stale".into()].into();
        reallocate(&mut storage, 2, 4).unwrap();
        assert_eq!(&storage[..], ["a", "b", "", ""]);
    }

    #[test]
    fn reallocate_to_zero_releases_buffer() {
        let mut storage: Box<[u32]> = vec![1, 2].into();
        reallocate(&mut storage, 0, 0).unwrap();
        assert!(storage.is_empty());
    }

    #[test]
    fn refused_allocation_reports_bytes_and_keeps_buffer() {
        let mut storage: Box<[u64]> = vec![7, 8].into();
        let err = reallocate(&mut storage, 2, usize::MAX / 8).unwrap_err();
        assert_eq!(
            err,
            ArrayError::AllocationFailed {
                capacity: usize::MAX / 8,
                bytes: (usize::MAX / 8) * 8,
            }
        );
        assert_eq!(&storage[..], [7, 8]);
    }

    #[test]
    fn unchecked_access_reaches_spare_capacity() {
        let mut array: DynArray<i32> = DynArray::new();
        array.reserve(4).unwrap();
        array.push_back(9).unwrap();
        unsafe {
            assert_eq!(*array.get_unchecked(0), 9);
            assert_eq!(*array.get_unchecked(3), 0);
            *array.get_unchecked_mut(0) = 11;
        }
        assert_eq!(array[0], 11);
    }
}
