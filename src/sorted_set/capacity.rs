use super::SortedSet;
use crate::compare::Natural;
use crate::raw::RawWbTree;

impl<T> SortedSet<T> {
    /// Creates an empty set with room for at least `capacity` elements before
    /// the node storage reallocates.
    ///
    /// # Examples
    ///
    /// ```
    /// use wbtree::SortedSet;
    ///
    /// let set: SortedSet<i32> = SortedSet::with_capacity(16);
    /// assert!(set.is_empty());
    /// assert!(set.capacity() >= 16);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(capacity) for memory allocation.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        SortedSet::with_capacity_and_comparator(capacity, Natural)
    }
}

impl<T, C> SortedSet<T, C> {
    /// Creates an empty set ordered by `compare` with room for at least
    /// `capacity` elements.
    #[must_use]
    pub fn with_capacity_and_comparator(capacity: usize, compare: C) -> Self {
        SortedSet {
            raw: RawWbTree::with_capacity(capacity),
            compare,
        }
    }

    /// Returns how many elements the set can hold before its node storage
    /// reallocates. Slots freed by removals are reused first.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.raw.capacity()
    }
}
