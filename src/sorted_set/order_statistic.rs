use core::cmp::Ordering;
use core::ops::Index;

use super::SortedSet;
use crate::compare::Comparator;
use crate::order_statistic::{Rank, RankIndex};
use crate::raw::NodeRef;

impl<T, C> SortedSet<T, C> {
    /// Returns the value at sorted position `index` (zero-based).
    ///
    /// `index` may be any primitive number. Positions outside `0..len()`,
    /// negative numbers, fractions, `NaN` and infinities all yield `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use wbtree::SortedSet;
    ///
    /// let set = SortedSet::from([10, 20, 30]);
    /// assert_eq!(set.get(1), Some(&20));
    /// assert_eq!(set.get(2.0), Some(&30));
    /// assert_eq!(set.get(3), None);
    /// assert_eq!(set.get(-1), None);
    /// assert_eq!(set.get(f64::NAN), None);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    #[must_use]
    pub fn get<I: RankIndex>(&self, index: I) -> Option<&T> {
        let mut remaining = index.to_rank().filter(|&rank| rank < self.len())?;
        self.raw
            .find(|node| {
                let left = node.left_size();
                match remaining.cmp(&left) {
                    Ordering::Greater => {
                        remaining -= left + 1;
                        Ordering::Greater
                    }
                    descend_or_stop => descend_or_stop,
                }
            })
            .map(|node| node.value())
    }

    /// Returns the first (smallest) value in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use wbtree::SortedSet;
    ///
    /// let mut set = SortedSet::new();
    /// assert_eq!(set.first(), None);
    /// set.insert(2);
    /// set.insert(1);
    /// assert_eq!(set.first(), Some(&1));
    /// ```
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.get(0usize)
    }

    /// Returns the last (largest) value in the set.
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.len().checked_sub(1).and_then(|rank| self.get(rank))
    }

    /// Walks down the tree steered by `progress` and returns the value it
    /// stops at.
    ///
    /// `progress` is called on each visited node and answers where to go:
    /// [`Less`](Ordering::Less) descends left, [`Greater`](Ordering::Greater)
    /// descends right, [`Equal`](Ordering::Equal) stops here. The walk returns
    /// `None` when it falls off the tree. The callback must agree with the
    /// set's order; if it does not, the answer is unspecified.
    ///
    /// This is the primitive that [`contains`](SortedSet::contains),
    /// [`get`](SortedSet::get) and [`bisect`](SortedSet::bisect) are built on.
    ///
    /// # Examples
    ///
    /// The smallest value not below a bound:
    ///
    /// ```
    /// use core::cmp::Ordering;
    /// use wbtree::SortedSet;
    ///
    /// let set = SortedSet::from([10, 20, 30, 40]);
    ///
    /// let mut best = None;
    /// set.find_by(|node| {
    ///     if *node.value() >= 25 {
    ///         best = Some(*node.value());
    ///         Ordering::Less
    ///     } else {
    ///         Ordering::Greater
    ///     }
    /// });
    /// assert_eq!(best, Some(30));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n) calls to `progress`.
    pub fn find_by<'a, F>(&'a self, progress: F) -> Option<&'a T>
    where
        F: FnMut(NodeRef<'a, T>) -> Ordering,
    {
        self.raw.find(progress).map(|node| node.value())
    }
}

impl<T, C: Comparator<T>> SortedSet<T, C> {
    /// Returns the number of values that sort strictly before `value`.
    ///
    /// This is where `value` sits, or would be inserted, in sorted order.
    ///
    /// # Examples
    ///
    /// ```
    /// use wbtree::SortedSet;
    ///
    /// let set = SortedSet::from([10, 20, 30]);
    /// assert_eq!(set.bisect(&5), 0);
    /// assert_eq!(set.bisect(&20), 1);
    /// assert_eq!(set.bisect(&25), 2);
    /// assert_eq!(set.bisect(&99), 3);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    #[must_use]
    pub fn bisect(&self, value: &T) -> usize {
        let mut rank = 0;
        self.raw.find(|node| {
            let ordering = self.compare.compare(value, node.value());
            match ordering {
                Ordering::Greater => rank += node.left_size() + 1,
                Ordering::Equal => rank += node.left_size(),
                Ordering::Less => {}
            }
            ordering
        });
        rank
    }

    /// Returns the zero-based rank of `value` in sorted order, or `None` if
    /// the value is not present.
    ///
    /// # Examples
    ///
    /// ```
    /// use wbtree::SortedSet;
    ///
    /// let set = SortedSet::from([10, 20]);
    ///
    /// assert_eq!(set.rank_of(&20), Some(1));
    /// assert_eq!(set.rank_of(&15), None);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    #[must_use]
    pub fn rank_of(&self, value: &T) -> Option<usize> {
        let mut rank = 0;
        self.raw
            .find(|node| {
                let ordering = self.compare.compare(value, node.value());
                if ordering == Ordering::Greater {
                    rank += node.left_size() + 1;
                }
                ordering
            })
            .map(|node| rank + node.left_size())
    }
}

/// Indexes into the set by rank.
///
/// # Panics
///
/// Panics if `rank` is out of bounds.
///
/// # Examples
///
/// ```
/// use wbtree::{Rank, SortedSet};
///
/// let set = SortedSet::from([10, 20, 30]);
/// assert_eq!(set[Rank(1)], 20);
/// ```
impl<T, C> Index<Rank> for SortedSet<T, C> {
    type Output = T;

    fn index(&self, rank: Rank) -> &Self::Output {
        self.get(rank).expect("rank out of bounds")
    }
}
