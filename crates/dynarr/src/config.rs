//! Growth policy configuration.

use crate::error::ArrayError;

/// Rule for choosing a new capacity when the buffer is full.
///
/// Every mutator that runs out of room asks the policy for the next
/// capacity. The default policy doubles, except that growth from an empty
/// buffer goes straight to a single slot. Validated at construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GrowthPolicy {
    /// Multiplier applied to the old capacity on each grow.
    ///
    /// Default: 2. Must be at least 2 so that push is amortized O(1).
    pub factor: usize,

    /// Capacity chosen when growing a buffer that has no slots.
    ///
    /// Default: 1. Must be non-zero.
    pub min_capacity: usize,
}

impl GrowthPolicy {
    /// Default growth factor.
    pub const DEFAULT_FACTOR: usize = 2;

    /// Default capacity when growing from zero.
    pub const DEFAULT_MIN_CAPACITY: usize = 1;

    /// Capacity doubles on each grow; 0 grows to 1.
    pub const DOUBLING: Self = Self {
        factor: Self::DEFAULT_FACTOR,
        min_capacity: Self::DEFAULT_MIN_CAPACITY,
    };

    /// Create a validated growth policy.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::InvalidGrowthPolicy`] if `factor < 2` or
    /// `min_capacity == 0`.
    pub fn new(factor: usize, min_capacity: usize) -> Result<Self, ArrayError> {
        let policy = Self {
            factor,
            min_capacity,
        };
        policy.validate()?;
        Ok(policy)
    }

    /// Check that the policy makes progress from every capacity.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::InvalidGrowthPolicy`] if `factor < 2` or
    /// `min_capacity == 0`.
    pub fn validate(&self) -> Result<(), ArrayError> {
        if self.factor < 2 || self.min_capacity == 0 {
            return Err(ArrayError::InvalidGrowthPolicy {
                factor: self.factor,
                min_capacity: self.min_capacity,
            });
        }
        Ok(())
    }

    /// Capacity after a single grow from `old`.
    ///
    /// Saturates at `usize::MAX`; the caller's allocation then fails with
    /// [`ArrayError::CapacityOverflow`].
    pub fn next_capacity(&self, old: usize) -> usize {
        old.saturating_mul(self.factor).max(self.min_capacity)
    }

    /// Capacity reached by growing from `old` until at least `required`
    /// slots fit.
    ///
    /// This is the capacity a run of single-element grows would end at, so
    /// bulk insertion can reallocate once and still land on the same value.
    /// Returns `old` unchanged when it already fits.
    pub fn capacity_for(&self, old: usize, required: usize) -> usize {
        let mut capacity = old;
        while capacity < required {
            let next = self.next_capacity(capacity);
            if next == capacity {
                return required;
            }
            capacity = next;
        }
        capacity
    }
}

impl Default for GrowthPolicy {
    fn default() -> Self {
        Self::DOUBLING
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn doubling_goes_zero_one_two_four() {
        let policy = GrowthPolicy::default();
        assert_eq!(policy.next_capacity(0), 1);
        assert_eq!(policy.next_capacity(1), 2);
        assert_eq!(policy.next_capacity(2), 4);
        assert_eq!(policy.next_capacity(6), 12);
    }

    #[test]
    fn capacity_for_matches_repeated_grows() {
        let policy = GrowthPolicy::DOUBLING;
        assert_eq!(policy.capacity_for(0, 5), 8);
        assert_eq!(policy.capacity_for(3, 4), 6);
        assert_eq!(policy.capacity_for(3, 7), 12);
        assert_eq!(policy.capacity_for(8, 8), 8);
        assert_eq!(policy.capacity_for(8, 0), 8);
    }

    #[test]
    fn saturation_does_not_loop() {
        let policy = GrowthPolicy::DOUBLING;
        assert_eq!(policy.next_capacity(usize::MAX / 2 + 1), usize::MAX);
        assert_eq!(policy.capacity_for(usize::MAX - 1, usize::MAX), usize::MAX);
    }

    #[test]
    fn custom_policy_applies_min_capacity() {
        let policy = GrowthPolicy::new(3, 4).unwrap();
        assert_eq!(policy.next_capacity(0), 4);
        assert_eq!(policy.next_capacity(1), 4);
        assert_eq!(policy.next_capacity(4), 12);
    }

    #[test]
    fn rejects_policies_without_progress() {
        assert!(matches!(
            GrowthPolicy::new(1, 1),
            Err(ArrayError::InvalidGrowthPolicy { factor: 1, .. })
        ));
        assert!(matches!(
            GrowthPolicy::new(2, 0),
            Err(ArrayError::InvalidGrowthPolicy {
                min_capacity: 0,
                ..
            })
        ));
    }
}
