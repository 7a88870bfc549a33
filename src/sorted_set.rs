use alloc::vec;
use core::fmt;
use core::iter::FusedIterator;

use crate::compare::{Comparator, Natural};
use crate::error::TreeError;
use crate::raw::{InOrder, RawWbTree};

mod capacity;
mod order_statistic;

/// An ordered set based on a weight-balanced binary search tree.
///
/// Every node records the size of its subtree. Balance is kept by comparing
/// those sizes rather than heights, and the same sizes answer positional
/// queries: [`get`] (the value at a sorted position) and [`bisect`] (how many
/// values sort before a given one) both run in O(log n).
///
/// The order is defined by a [`Comparator`], [`Natural`] ([`Ord`]) unless
/// another one is supplied with [`with_comparator`]. It is a logic error for
/// a value to change its position under the comparator while it is in the
/// set; the result is unspecified but memory safe.
///
/// Iterators returned by [`SortedSet::iter`] and [`SortedSet::into_iter`]
/// produce their items in ascending order.
///
/// [`get`]: SortedSet::get
/// [`bisect`]: SortedSet::bisect
/// [`with_comparator`]: SortedSet::with_comparator
///
/// # Examples
///
/// ```
/// use wbtree::SortedSet;
///
/// let mut primes = SortedSet::new();
/// primes.insert(7);
/// primes.insert(2);
/// primes.insert(5);
/// primes.insert(3);
///
/// assert!(primes.contains(&5));
/// assert_eq!(primes.get(1), Some(&3));
/// assert_eq!(primes.bisect(&4), 2);
///
/// primes.remove(&7);
/// assert_eq!(primes.iter().copied().collect::<Vec<_>>(), [2, 3, 5]);
/// ```
#[derive(Clone)]
pub struct SortedSet<T, C = Natural> {
    raw: RawWbTree<T>,
    compare: C,
}

/// An iterator over the items of a `SortedSet`.
///
/// This `struct` is created by the [`iter`] method on [`SortedSet`].
///
/// # Examples
///
/// ```
/// use wbtree::SortedSet;
///
/// let set = SortedSet::from([3, 1, 2]);
/// let mut iter = set.iter();
/// assert_eq!(iter.next(), Some(&1));
/// assert_eq!(iter.next_back(), Some(&3));
/// assert_eq!(iter.next(), Some(&2));
/// assert_eq!(iter.next(), None);
/// ```
///
/// [`iter`]: SortedSet::iter
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Iter<'a, T: 'a> {
    inner: InOrder<'a, T>,
}

/// An owning iterator over the items of a `SortedSet` in ascending order.
///
/// This `struct` is created by the [`into_iter`] method on [`SortedSet`]
/// (provided by the [`IntoIterator`] trait).
///
/// [`into_iter`]: SortedSet#method.into_iter
pub struct IntoIter<T> {
    inner: vec::IntoIter<T>,
}

impl<T> SortedSet<T> {
    /// Makes a new, empty `SortedSet` ordered by [`Ord`].
    ///
    /// # Examples
    ///
    /// ```
    /// use wbtree::SortedSet;
    ///
    /// let mut set = SortedSet::new();
    /// set.insert(1);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub const fn new() -> SortedSet<T> {
        SortedSet::with_comparator(Natural)
    }
}

impl<T, C> SortedSet<T, C> {
    /// Makes a new, empty `SortedSet` ordered by `compare`.
    ///
    /// # Examples
    ///
    /// ```
    /// use wbtree::SortedSet;
    ///
    /// let mut set = SortedSet::with_comparator(|a: &&str, b: &&str| a.len().cmp(&b.len()));
    /// set.insert("ccc");
    /// set.insert("a");
    /// // Same length as "a", so it counts as already present.
    /// assert!(!set.insert("b"));
    /// assert_eq!(set.iter().copied().collect::<Vec<_>>(), ["a", "ccc"]);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub const fn with_comparator(compare: C) -> Self {
        SortedSet {
            raw: RawWbTree::new(),
            compare,
        }
    }

    /// Returns the comparator that orders this set.
    #[must_use]
    pub const fn comparator(&self) -> &C {
        &self.compare
    }

    /// Clears the set, removing all elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use wbtree::SortedSet;
    ///
    /// let mut v = SortedSet::new();
    /// v.insert(1);
    /// v.clear();
    /// assert!(v.is_empty());
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n)
    pub fn clear(&mut self) {
        self.raw.clear();
    }

    /// Gets an iterator that visits the elements in the `SortedSet` in
    /// ascending order.
    ///
    /// Each call starts a fresh traversal of the current contents. The
    /// iterator borrows the set, so the set cannot change while it is alive.
    ///
    /// # Examples
    ///
    /// ```
    /// use wbtree::SortedSet;
    ///
    /// let set = SortedSet::from([3, 1, 2]);
    /// let mut set_iter = set.iter();
    /// assert_eq!(set_iter.next(), Some(&1));
    /// assert_eq!(set_iter.next(), Some(&2));
    /// assert_eq!(set_iter.next(), Some(&3));
    /// assert_eq!(set_iter.next(), None);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n) to create the iterator; amortized O(1) per step.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.raw.in_order(),
        }
    }

    /// Returns the number of elements in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use wbtree::SortedSet;
    ///
    /// let mut a = SortedSet::new();
    /// assert_eq!(a.len(), 0);
    /// a.insert(1);
    /// assert_eq!(a.len(), 1);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn len(&self) -> usize {
        self.raw.len()
    }

    /// Returns `true` if the set contains no elements.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }
}

impl<T, C: Comparator<T>> SortedSet<T, C> {
    /// Returns `true` if the set contains a value equal to `value` under the
    /// set's comparator.
    ///
    /// # Examples
    ///
    /// ```
    /// use wbtree::SortedSet;
    ///
    /// let set = SortedSet::from([1, 2, 3]);
    /// assert_eq!(set.contains(&1), true);
    /// assert_eq!(set.contains(&4), false);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    #[must_use]
    pub fn contains(&self, value: &T) -> bool {
        self.raw.find(|node| self.compare.compare(value, node.value())).is_some()
    }

    /// Alias of [`contains`](SortedSet::contains).
    #[must_use]
    pub fn has(&self, value: &T) -> bool {
        self.contains(value)
    }

    /// Adds a value to the set.
    ///
    /// Returns whether the value was newly inserted. If an equal value is
    /// already present the set is left unchanged and `value` is dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use wbtree::SortedSet;
    ///
    /// let mut set = SortedSet::new();
    ///
    /// assert_eq!(set.insert(2), true);
    /// assert_eq!(set.insert(2), false);
    /// assert_eq!(set.len(), 1);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn insert(&mut self, value: T) -> bool {
        if self.contains(&value) {
            return false;
        }
        self.raw.insert(value, &self.compare).is_ok()
    }

    /// Adds a value to the set if absent and returns the resulting length.
    ///
    /// # Examples
    ///
    /// ```
    /// use wbtree::SortedSet;
    ///
    /// let mut set = SortedSet::new();
    /// assert_eq!(set.add(5), 1);
    /// assert_eq!(set.add(9), 2);
    /// assert_eq!(set.add(5), 2);
    /// ```
    pub fn add(&mut self, value: T) -> usize {
        self.insert(value);
        self.len()
    }

    /// Inserts `value` without a membership pre-check, reporting a duplicate
    /// as an error. The set is unchanged on error.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::DuplicateValue`] if an equal value is present.
    ///
    /// # Examples
    ///
    /// ```
    /// use wbtree::{SortedSet, TreeError};
    ///
    /// let mut set = SortedSet::new();
    /// assert_eq!(set.try_insert(1), Ok(()));
    /// assert_eq!(set.try_insert(1), Err(TreeError::DuplicateValue));
    /// ```
    pub fn try_insert(&mut self, value: T) -> Result<(), TreeError> {
        self.raw.insert(value, &self.compare)
    }

    /// If the set contains a value equal to `value`, removes it from the set
    /// and drops it. Returns whether such a value was present.
    ///
    /// # Examples
    ///
    /// ```
    /// use wbtree::SortedSet;
    ///
    /// let mut set = SortedSet::new();
    /// set.insert(2);
    /// assert_eq!(set.remove(&2), true);
    /// assert_eq!(set.remove(&2), false);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn remove(&mut self, value: &T) -> bool {
        self.take(value).is_some()
    }

    /// Alias of [`remove`](SortedSet::remove).
    pub fn delete(&mut self, value: &T) -> bool {
        self.remove(value)
    }

    /// Removes and returns the value in the set, if any, that is equal to the
    /// given one.
    ///
    /// # Examples
    ///
    /// ```
    /// use wbtree::SortedSet;
    ///
    /// let mut set = SortedSet::from([1, 2, 3]);
    /// assert_eq!(set.take(&2), Some(2));
    /// assert_eq!(set.take(&2), None);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn take(&mut self, value: &T) -> Option<T> {
        if !self.contains(value) {
            return None;
        }
        self.raw.remove(value, &self.compare).ok()
    }

    /// Removes the value equal to `value`, reporting absence as an error.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::NotFound`] if no equal value is present.
    pub fn try_remove(&mut self, value: &T) -> Result<T, TreeError> {
        self.raw.remove(value, &self.compare)
    }

    /// Retains only the elements specified by the predicate.
    ///
    /// # Examples
    ///
    /// ```
    /// use wbtree::SortedSet;
    ///
    /// let mut set: SortedSet<i32> = (1..=6).collect();
    /// set.retain(|&v| v % 2 == 0);
    /// assert_eq!(set.iter().copied().collect::<Vec<_>>(), [2, 4, 6]);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n log n)
    pub fn retain<F>(&mut self, mut keep: F)
    where
        F: FnMut(&T) -> bool,
    {
        let raw = core::mem::replace(&mut self.raw, RawWbTree::new());
        for value in raw.into_sorted_vec() {
            if keep(&value) {
                // Values arrive sorted and distinct, so these never collide.
                let _ = self.raw.insert(value, &self.compare);
            }
        }
    }
}

impl<T, C: Default> Default for SortedSet<T, C> {
    /// Creates an empty `SortedSet`.
    fn default() -> SortedSet<T, C> {
        SortedSet::with_comparator(C::default())
    }
}

impl<T: fmt::Debug, C> fmt::Debug for SortedSet<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Renders the set as `[ SortedSet 1, 2, 3 ]`.
impl<T: fmt::Display, C> fmt::Display for SortedSet<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[ SortedSet ")?;
        for (position, value) in self.iter().enumerate() {
            if position > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{value}")?;
        }
        f.write_str(" ]")
    }
}

impl<T: PartialEq, C> PartialEq for SortedSet<T, C> {
    fn eq(&self, other: &SortedSet<T, C>) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq, C> Eq for SortedSet<T, C> {}

impl<T, C: Comparator<T> + Default> FromIterator<T> for SortedSet<T, C> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> SortedSet<T, C> {
        let mut set = SortedSet::default();
        set.extend(iter);
        set
    }
}

impl<T, C: Comparator<T>> Extend<T> for SortedSet<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<'a, T: 'a + Copy, C: Comparator<T>> Extend<&'a T> for SortedSet<T, C> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        for &value in iter {
            self.insert(value);
        }
    }
}

impl<T: Ord, const N: usize> From<[T; N]> for SortedSet<T> {
    /// Converts a `[T; N]` into a `SortedSet<T>`, dropping duplicates.
    ///
    /// ```
    /// use wbtree::SortedSet;
    ///
    /// let set1 = SortedSet::from([1, 2, 3, 4]);
    /// let set2: SortedSet<_> = [1, 2, 3, 4].into();
    /// assert_eq!(set1, set2);
    /// ```
    fn from(arr: [T; N]) -> Self {
        arr.into_iter().collect()
    }
}

impl<T, C> IntoIterator for SortedSet<T, C> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    /// Gets an iterator for moving out the `SortedSet`'s contents in
    /// ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use wbtree::SortedSet;
    ///
    /// let set = SortedSet::from([1, 2, 3, 4]);
    ///
    /// let v: Vec<_> = set.into_iter().collect();
    /// assert_eq!(v, [1, 2, 3, 4]);
    /// ```
    fn into_iter(self) -> IntoIter<T> {
        IntoIter {
            inner: self.raw.into_sorted_vec().into_iter(),
        }
    }
}

impl<'a, T, C> IntoIterator for &'a SortedSet<T, C> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.inner.next_value()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.inner.remaining();
        (remaining, Some(remaining))
    }

    fn last(mut self) -> Option<&'a T> {
        self.next_back()
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> {
        self.inner.next_back_value()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {
    fn len(&self) -> usize {
        self.inner.remaining()
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter {
            inner: self.inner.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntoIter").field("inner", &self.inner).finish()
    }
}

impl<T> Default for IntoIter<T> {
    /// Creates an empty `sorted_set::IntoIter`.
    ///
    /// ```
    /// # use wbtree::sorted_set;
    /// let iter: sorted_set::IntoIter<u8> = Default::default();
    /// assert_eq!(iter.len(), 0);
    /// ```
    fn default() -> Self {
        IntoIter {
            inner: vec::IntoIter::default(),
        }
    }
}
