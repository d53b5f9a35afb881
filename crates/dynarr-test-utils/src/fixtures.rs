//! Lifecycle-recording element types.
//!
//! [`Tracked`] counts how many instances are alive and how many were made
//! by `clone()`. Counters are thread-local, so tests running in parallel
//! do not see each other's values.

use std::cell::Cell;
use std::fmt;

thread_local! {
    static LIVE: Cell<isize> = const { Cell::new(0) };
    static CLONES: Cell<usize> = const { Cell::new(0) };
}

/// Number of `Tracked` values alive on this thread.
///
/// Negative means something was dropped twice.
pub fn live_count() -> isize {
    LIVE.with(Cell::get)
}

/// Number of `Tracked::clone` calls on this thread.
pub fn clone_count() -> usize {
    CLONES.with(Cell::get)
}

/// Zero both counters for the current thread.
pub fn reset_counters() {
    LIVE.with(|c| c.set(0));
    CLONES.with(|c| c.set(0));
}

/// An integer payload that reports construction, cloning and dropping.
///
/// `Default` produces a live value with payload 0, so default-filled
/// spare slots are counted like any other instance.
pub struct Tracked {
    pub value: i64,
}

impl Tracked {
    pub fn new(value: i64) -> Self {
        LIVE.with(|c| c.set(c.get() + 1));
        Self { value }
    }
}

impl Default for Tracked {
    fn default() -> Self {
        Self::new(0)
    }
}

impl Clone for Tracked {
    fn clone(&self) -> Self {
        CLONES.with(|c| c.set(c.get() + 1));
        Self::new(self.value)
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        LIVE.with(|c| c.set(c.get() - 1));
    }
}

impl PartialEq for Tracked {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl PartialEq<i64> for Tracked {
    fn eq(&self, other: &i64) -> bool {
        self.value == *other
    }
}

impl fmt::Debug for Tracked {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tracked({})", self.value)
    }
}
