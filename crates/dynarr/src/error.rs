//! Dynamic-array error types.

use std::error::Error;
use std::fmt;

/// Errors that can occur during dynamic array operations.
///
/// Only the checked accessors and the operations that may allocate return
/// errors. Violations of the unchecked-access contract (indexing past the
/// live range, `front`/`back`/`pop_back` on an empty array, erasing at or
/// past `end()`) panic instead.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArrayError {
    /// A checked access named a position at or beyond the live size.
    OutOfRange {
        /// The requested position.
        index: usize,
        /// Number of live elements at the time of the access.
        size: usize,
    },
    /// The requested capacity exceeds [`max_size`](crate::DynArray::max_size)
    /// or cannot be represented at all.
    CapacityOverflow {
        /// Number of slots requested.
        requested: usize,
        /// The advisory ceiling for this element type.
        max: usize,
    },
    /// The allocator refused to provide a buffer of the requested size.
    AllocationFailed {
        /// Number of slots requested.
        capacity: usize,
        /// Size of the refused allocation in bytes.
        bytes: usize,
    },
    /// A [`GrowthPolicy`](crate::GrowthPolicy) that cannot make progress.
    InvalidGrowthPolicy {
        /// The rejected growth factor.
        factor: usize,
        /// The rejected capacity used when growing from zero.
        min_capacity: usize,
    },
}

impl fmt::Display for ArrayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { index, size } => {
                write!(f, "index {index} out of range for array of size {size}")
            }
            Self::CapacityOverflow { requested, max } => {
                write!(f, "capacity overflow: requested {requested} slots, max size {max}")
            }
            Self::AllocationFailed { capacity, bytes } => {
                write!(f, "allocation failed: {capacity} slots ({bytes} bytes)")
            }
            Self::InvalidGrowthPolicy { factor, min_capacity } => {
                write!(
                    f,
                    "invalid growth policy: factor {factor} (must be >= 2), \
                     min capacity {min_capacity} (must be >= 1)"
                )
            }
        }
    }
}

impl Error for ArrayError {}
