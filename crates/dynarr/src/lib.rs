//! A contiguous, geometrically growing dynamic array.
//!
//! [`DynArray`] stores its elements in one exclusively owned buffer with a
//! logical `size` and an allocated `capacity`. Appending into a full buffer
//! reallocates according to a [`GrowthPolicy`] (doubling, with 0 growing
//! to 1), moving every live element into the new buffer in order.
//!
//! # Architecture
//!
//! ```text
//! DynArray<T>
//! ├── storage: Box<[T]>   (capacity slots, all initialized; empty = no allocation)
//! ├── len                 (live prefix of storage)
//! └── GrowthPolicy        (next capacity when full)
//! ```
//!
//! # Access paths
//!
//! - **Checked:** [`DynArray::at`] / [`DynArray::at_mut`] return
//!   [`ArrayError::OutOfRange`] for any position `>= size()`.
//! - **Indexing:** `array[i]` and `front()`/`back()` treat a position past
//!   the live range as a caller bug and panic.
//! - **Unchecked:** [`DynArray::get_unchecked`] skips every check; the
//!   caller must stay below `capacity()`.
//!
//! # Positions and invalidation
//!
//! Positional operations take a [`Cursor`] (an offset, `begin() + n`).
//! Any insert, erase, push, pop, reserve, shrink, swap, clear or move
//! invalidates previously obtained cursors: they must be re-derived
//! from `begin()`. References are protected by the borrow checker.
//!
//! # Errors
//!
//! Operations that may allocate return [`ArrayError::CapacityOverflow`]
//! when the request exceeds [`DynArray::max_size`] and
//! [`ArrayError::AllocationFailed`] when the allocator refuses; the array
//! is left unchanged in both cases.
//!
//! # Concurrency
//!
//! No internal synchronization. `DynArray<T>` is `Send`/`Sync` when `T`
//! is; shared mutation needs an external lock.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

pub mod array;
pub mod config;
pub mod cursor;
pub mod error;
mod partial_eq;
mod raw;

// Public re-exports for the primary API surface.
pub use array::DynArray;
pub use config::GrowthPolicy;
pub use cursor::Cursor;
pub use error::ArrayError;

/// Create a [`DynArray`] from a list of values, appended in order.
///
/// Panics if the allocator refuses the buffer.
///
/// ```
/// use dynarr::dynarr;
///
/// let array = dynarr![2, 4, 6, 8, 8, 6, 4, 2];
/// assert_eq!(array.size(), 8);
/// assert_eq!(array[3], 8);
/// ```
#[macro_export]
macro_rules! dynarr {
    () => (
        $crate::DynArray::new()
    );
    ($($x:expr),+ $(,)?) => (
        $crate::DynArray::from([$($x),+])
    );
}
