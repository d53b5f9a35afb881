//! The dynamic array container.
//!
//! [`DynArray`] owns one contiguous buffer of `capacity` slots, of which the
//! first `size` hold live elements. Every slot is an initialized `T`: slots
//! past `size` hold default or stale values, never uninitialized memory.
//!
//! # Aliasing rule
//!
//! References and slices handed out by the accessors borrow the array, so
//! the compiler rejects any use after a mutating call. [`Cursor`]s do not
//! borrow; a cursor taken before insert, erase, push, pop, reserve,
//! shrink, swap, clear or a move must be re-derived from `begin()`
//! afterwards. Using a stale cursor is memory-safe but may address a
//! different element.

use std::fmt;
use std::mem;
use std::ops::{Deref, DerefMut, Index, IndexMut};
use std::slice::{self, SliceIndex};

use smallvec::SmallVec;
use tracing::{event, Level};

use crate::config::GrowthPolicy;
use crate::cursor::Cursor;
use crate::error::ArrayError;
use crate::raw;

/// Target for reallocation events.
const REALLOC_TARGET: &str = "dynarr::realloc";

/// Bulk insertions of up to this many values are staged on the stack.
const INLINE_STAGING: usize = 8;

/// A contiguous, growable array with explicit size and capacity.
///
/// Growth follows the array's [`GrowthPolicy`] (doubling by default, with
/// 0 growing to 1). All live elements stay in order across every
/// reallocation.
///
/// # Examples
///
/// ```
/// use dynarr::DynArray;
///
/// let mut array = DynArray::new();
/// array.push_back(2)?;
/// array.insert_many_back([3, 7, 8, 9])?;
/// assert_eq!(array, [2, 3, 7, 8, 9]);
/// assert_eq!(array.capacity(), 8);
/// # Ok::<(), dynarr::ArrayError>(())
/// ```
pub struct DynArray<T> {
    /// Exactly `capacity` initialized slots. Empty means no allocation.
    pub(crate) storage: Box<[T]>,
    /// Number of live elements at the front of `storage`.
    pub(crate) len: usize,
    pub(crate) policy: GrowthPolicy,
}

impl<T> DynArray<T> {
    /// Create an empty array. Does not allocate.
    pub fn new() -> Self {
        Self {
            storage: Box::default(),
            len: 0,
            policy: GrowthPolicy::DOUBLING,
        }
    }

    /// Create an empty array that grows according to `policy`.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::InvalidGrowthPolicy`] if the policy fails
    /// validation.
    pub fn with_policy(policy: GrowthPolicy) -> Result<Self, ArrayError> {
        policy.validate()?;
        Ok(Self {
            storage: Box::default(),
            len: 0,
            policy,
        })
    }

    /// The growth policy used when the buffer is full.
    pub fn policy(&self) -> GrowthPolicy {
        self.policy
    }

    /// Number of live elements.
    pub fn size(&self) -> usize {
        self.len
    }

    /// Number of allocated slots.
    pub fn capacity(&self) -> usize {
        self.storage.len()
    }

    /// Whether the array holds no live elements.
    pub fn empty(&self) -> bool {
        self.len == 0
    }

    /// Advisory upper bound on `size()`.
    ///
    /// Defined as `usize::MAX / (2 * size_of::<T>())`, independent of the
    /// array's state. Zero-sized types count as one byte.
    pub fn max_size(&self) -> usize {
        usize::MAX / (2 * mem::size_of::<T>().max(1))
    }

    /// Memory used by the buffer in bytes, spare capacity included.
    pub fn memory_bytes(&self) -> usize {
        self.storage.len() * mem::size_of::<T>()
    }

    /// Bounds-checked reference to the element at `pos`.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::OutOfRange`] if `pos >= size()`. Capacity is
    /// never consulted.
    pub fn at(&self, pos: usize) -> Result<&T, ArrayError> {
        self.as_slice().get(pos).ok_or(ArrayError::OutOfRange {
            index: pos,
            size: self.len,
        })
    }

    /// Bounds-checked mutable reference to the element at `pos`.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::OutOfRange`] if `pos >= size()`.
    pub fn at_mut(&mut self, pos: usize) -> Result<&mut T, ArrayError> {
        let size = self.len;
        self.as_mut_slice()
            .get_mut(pos)
            .ok_or(ArrayError::OutOfRange { index: pos, size })
    }

    /// Bounds-checked reference to the element at a cursor.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::OutOfRange`] if `pos` is at or past `end()`.
    pub fn get_at(&self, pos: Cursor) -> Result<&T, ArrayError> {
        self.at(pos.offset())
    }

    /// Bounds-checked mutable reference to the element at a cursor.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::OutOfRange`] if `pos` is at or past `end()`.
    pub fn get_at_mut(&mut self, pos: Cursor) -> Result<&mut T, ArrayError> {
        self.at_mut(pos.offset())
    }

    /// First live element.
    ///
    /// # Panics
    ///
    /// Panics if the array is empty.
    pub fn front(&self) -> &T {
        assert!(self.len > 0, "front() called on an empty DynArray");
        &self.storage[0]
    }

    /// Mutable reference to the first live element.
    ///
    /// # Panics
    ///
    /// Panics if the array is empty.
    pub fn front_mut(&mut self) -> &mut T {
        assert!(self.len > 0, "front_mut() called on an empty DynArray");
        &mut self.storage[0]
    }

    /// Last live element.
    ///
    /// # Panics
    ///
    /// Panics if the array is empty.
    pub fn back(&self) -> &T {
        assert!(self.len > 0, "back() called on an empty DynArray");
        &self.storage[self.len - 1]
    }

    /// Mutable reference to the last live element.
    ///
    /// # Panics
    ///
    /// Panics if the array is empty.
    pub fn back_mut(&mut self) -> &mut T {
        assert!(self.len > 0, "back_mut() called on an empty DynArray");
        let last = self.len - 1;
        &mut self.storage[last]
    }

    /// The whole buffer, all `capacity()` slots, or `None` when nothing is
    /// allocated.
    ///
    /// Only the first `size()` slots are live; the rest hold default or
    /// stale values.
    pub fn data(&self) -> Option<&[T]> {
        if self.storage.is_empty() {
            None
        } else {
            Some(&self.storage[..])
        }
    }

    /// Mutable view of the whole buffer, or `None` when nothing is
    /// allocated.
    ///
    /// Writes past `size()` are allowed but do not extend the live range.
    pub fn data_mut(&mut self) -> Option<&mut [T]> {
        if self.storage.is_empty() {
            None
        } else {
            Some(&mut self.storage[..])
        }
    }

    /// The live elements.
    pub fn as_slice(&self) -> &[T] {
        &self.storage[..self.len]
    }

    /// The live elements, mutably.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.storage[..self.len]
    }

    /// Position of the first element.
    #[must_use]
    pub fn begin(&self) -> Cursor {
        Cursor::new(0)
    }

    /// Position one past the last live element. Never dereferenceable.
    #[must_use]
    pub fn end(&self) -> Cursor {
        Cursor::new(self.len)
    }

    /// Forget all live elements.
    ///
    /// Capacity is retained and the old values stay in their slots until
    /// they are overwritten or the buffer is released.
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Drop the last element from the live range.
    ///
    /// The vacated slot keeps its value; capacity is unchanged.
    ///
    /// # Panics
    ///
    /// Panics if the array is empty.
    pub fn pop_back(&mut self) {
        assert!(self.len > 0, "pop_back() called on an empty DynArray");
        self.len -= 1;
    }

    /// Remove the element at `pos`, shifting every later element one slot
    /// toward the front.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is at or past `end()`.
    pub fn erase(&mut self, pos: Cursor) {
        let offset = pos.offset();
        assert!(
            offset < self.len,
            "erase position (is {offset}) should be < size (is {})",
            self.len
        );
        // The erased value rotates into the vacated last slot.
        self.storage[offset..self.len].rotate_left(1);
        self.len -= 1;
    }

    /// Exchange size, capacity and contents with `other` in O(1).
    ///
    /// Each array keeps its own growth policy.
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(&mut self.storage, &mut other.storage);
        mem::swap(&mut self.len, &mut other.len);
    }

    /// Move the contents out, leaving `self` empty with no allocation.
    ///
    /// The returned array has the size, capacity and elements `self` had,
    /// and the same growth policy.
    pub fn take(&mut self) -> Self {
        Self {
            storage: mem::take(&mut self.storage),
            len: mem::replace(&mut self.len, 0),
            policy: self.policy,
        }
    }

    /// Release this array's buffer and take over `source`'s, leaving
    /// `source` empty.
    pub fn move_from(&mut self, source: &mut Self) {
        *self = source.take();
    }
}

impl<T: Default> DynArray<T> {
    /// Create an array of `n` default-valued elements with capacity exactly
    /// `n`. `n == 0` does not allocate.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::CapacityOverflow`] if `n > max_size()` and
    /// [`ArrayError::AllocationFailed`] if the buffer cannot be obtained.
    pub fn with_len(n: usize) -> Result<Self, ArrayError> {
        let mut array = Self::new();
        if n > 0 {
            array.realloc(n)?;
            array.len = n;
        }
        Ok(array)
    }

    /// Create an array by appending `values` in order.
    ///
    /// Growth follows the normal policy, so the final capacity is the one
    /// repeated `push_back` calls would reach.
    ///
    /// # Errors
    ///
    /// Propagates allocation errors from [`push_back`](Self::push_back).
    pub fn from_values<I>(values: I) -> Result<Self, ArrayError>
    where
        I: IntoIterator<Item = T>,
    {
        let mut array = Self::new();
        array.insert_many_back(values)?;
        Ok(array)
    }

    /// Ensure capacity for at least `n` slots.
    ///
    /// Reallocates to exactly `n` slots when `n > capacity()`; otherwise
    /// does nothing. Never shrinks.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::CapacityOverflow`] or
    /// [`ArrayError::AllocationFailed`]; the array is unchanged on error.
    pub fn reserve(&mut self, n: usize) -> Result<(), ArrayError> {
        if n > self.capacity() {
            self.realloc(n)?;
        }
        Ok(())
    }

    /// Reallocate so that `capacity() == size()`.
    ///
    /// An empty array releases its buffer entirely.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::AllocationFailed`]; the array is unchanged on
    /// error.
    pub fn shrink_to_fit(&mut self) -> Result<(), ArrayError> {
        if self.capacity() != self.len {
            self.realloc(self.len)?;
        }
        Ok(())
    }

    /// Append `value`, growing the buffer first if it is full.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::CapacityOverflow`] or
    /// [`ArrayError::AllocationFailed`] if the buffer must grow and cannot.
    /// `value` is dropped and the array is unchanged.
    pub fn push_back(&mut self, value: T) -> Result<(), ArrayError> {
        if self.len == self.capacity() {
            self.grow()?;
        }
        self.storage[self.len] = value;
        self.len += 1;
        Ok(())
    }

    /// Insert `value` at `pos`, shifting the element there and every later
    /// element one slot toward the end.
    ///
    /// `pos` may equal `end()` (append) or `begin()` (prepend), including on
    /// an array with no allocation. Returns the position of the inserted
    /// element, valid in the possibly reallocated buffer.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::CapacityOverflow`] or
    /// [`ArrayError::AllocationFailed`] if the buffer must grow and cannot.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is past `end()`.
    pub fn insert(&mut self, pos: Cursor, value: T) -> Result<Cursor, ArrayError> {
        let offset = pos.offset();
        assert!(
            offset <= self.len,
            "insert position (is {offset}) should be <= size (is {})",
            self.len
        );
        if self.len == self.capacity() {
            self.grow()?;
        }
        // The spare slot at `len` rotates down to `offset` and is overwritten.
        self.storage[offset..=self.len].rotate_right(1);
        self.storage[offset] = value;
        self.len += 1;
        Ok(pos)
    }

    /// Append every value in order.
    ///
    /// An empty sequence is a no-op.
    ///
    /// # Errors
    ///
    /// Stops at the first allocation failure. Values appended before the
    /// failure stay in the array.
    pub fn insert_many_back<I>(&mut self, values: I) -> Result<(), ArrayError>
    where
        I: IntoIterator<Item = T>,
    {
        for value in values {
            self.push_back(value)?;
        }
        Ok(())
    }

    /// Insert every value starting at `pos`, preserving their order.
    ///
    /// `values[0]` lands at the original offset of `pos`, `values[1]` right
    /// after it, and so on. The suffix moves once, and the buffer grows at
    /// most once, to the capacity repeated single inserts would reach.
    /// Returns the position of the first inserted element.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::CapacityOverflow`] or
    /// [`ArrayError::AllocationFailed`]; the array is unchanged on error.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is past `end()`.
    pub fn insert_many<I>(&mut self, pos: Cursor, values: I) -> Result<Cursor, ArrayError>
    where
        I: IntoIterator<Item = T>,
    {
        let offset = pos.offset();
        assert!(
            offset <= self.len,
            "insert position (is {offset}) should be <= size (is {})",
            self.len
        );
        let staged: SmallVec<[T; INLINE_STAGING]> = values.into_iter().collect();
        let count = staged.len();
        if count == 0 {
            return Ok(pos);
        }
        let required = self
            .len
            .checked_add(count)
            .ok_or(ArrayError::CapacityOverflow {
                requested: usize::MAX,
                max: self.max_size(),
            })?;
        if required > self.capacity() {
            let capacity = self.policy.capacity_for(self.capacity(), required);
            self.realloc(capacity)?;
        }
        for (slot, value) in self.storage[self.len..required].iter_mut().zip(staged) {
            *slot = value;
        }
        self.storage[offset..required].rotate_right(count);
        self.len = required;
        Ok(pos)
    }

    fn grow(&mut self) -> Result<(), ArrayError> {
        let capacity = self.policy.next_capacity(self.capacity());
        self.realloc(capacity)
    }

    /// Move the live elements into a fresh buffer of exactly `capacity`
    /// slots and release the old one.
    ///
    /// The only reallocating path; `swap`, `take` and `move_from` hand
    /// buffers over without allocating.
    fn realloc(&mut self, capacity: usize) -> Result<(), ArrayError> {
        debug_assert!(capacity >= self.len);
        let max = self.max_size();
        if capacity > max {
            return Err(ArrayError::CapacityOverflow {
                requested: capacity,
                max,
            });
        }
        let old_capacity = self.storage.len();
        raw::reallocate(&mut self.storage, self.len, capacity)?;
        event!(
            target: REALLOC_TARGET,
            Level::TRACE,
            old_capacity,
            new_capacity = capacity,
            size = self.len,
            "reallocated storage"
        );
        Ok(())
    }
}

impl<T: Default + Clone> DynArray<T> {
    /// Copy into a new, independent array with the same capacity.
    ///
    /// Exactly `size()` elements are cloned; the spare slots of the copy
    /// are default-valued.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::AllocationFailed`] if the buffer cannot be
    /// obtained.
    pub fn try_clone(&self) -> Result<Self, ArrayError> {
        let mut copy = Self {
            storage: Box::default(),
            len: 0,
            policy: self.policy,
        };
        if self.capacity() > 0 {
            copy.realloc(self.capacity())?;
        }
        copy.storage[..self.len].clone_from_slice(self.as_slice());
        copy.len = self.len;
        Ok(copy)
    }
}

impl<T> Default for DynArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Panics if the allocator refuses the buffer, as `Vec` does.
impl<T: Default + Clone> Clone for DynArray<T> {
    fn clone(&self) -> Self {
        match self.try_clone() {
            Ok(copy) => copy,
            Err(err) => panic!("failed to clone DynArray: {err}"),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for DynArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl<T> Deref for DynArray<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> DerefMut for DynArray<T> {
    fn deref_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T> AsRef<[T]> for DynArray<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> AsMut<[T]> for DynArray<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

/// Indexing is checked against `size()`: a position past the live range
/// violates the caller contract and panics.
impl<T, I: SliceIndex<[T]>> Index<I> for DynArray<T> {
    type Output = I::Output;

    fn index(&self, index: I) -> &Self::Output {
        Index::index(self.as_slice(), index)
    }
}

impl<T, I: SliceIndex<[T]>> IndexMut<I> for DynArray<T> {
    fn index_mut(&mut self, index: I) -> &mut Self::Output {
        IndexMut::index_mut(self.as_mut_slice(), index)
    }
}

/// Panics if the allocator refuses the buffer.
impl<T: Default> Extend<T> for DynArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        if let Err(err) = self.insert_many_back(iter) {
            panic!("failed to extend DynArray: {err}");
        }
    }
}

impl<T: Default> FromIterator<T> for DynArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut array = Self::new();
        array.extend(iter);
        array
    }
}

impl<T: Default, const N: usize> From<[T; N]> for DynArray<T> {
    fn from(values: [T; N]) -> Self {
        values.into_iter().collect()
    }
}

impl<T: Default + Clone> From<&[T]> for DynArray<T> {
    fn from(values: &[T]) -> Self {
        values.iter().cloned().collect()
    }
}

impl<'a, T> IntoIterator for &'a DynArray<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl<'a, T> IntoIterator for &'a mut DynArray<T> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_mut_slice().iter_mut()
    }
}

/// Yields the live elements; stale slots are dropped with the buffer.
impl<T> IntoIterator for DynArray<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        let mut elements = self.storage.into_vec();
        elements.truncate(self.len);
        elements.into_iter()
    }
}
