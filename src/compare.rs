use alloc::string::ToString;
use core::cmp::Ordering;
use core::fmt::Display;

/// A three-way comparison that defines the order of a [`SortedSet`].
///
/// Implementations must describe a total order: antisymmetric, transitive,
/// and consistent over the lifetime of the set. A comparator that breaks
/// these rules does not cause undefined behavior, but lookups and iteration
/// order become unspecified.
///
/// Any `Fn(&T, &T) -> Ordering` closure is a comparator.
///
/// [`SortedSet`]: crate::SortedSet
///
/// # Examples
///
/// ```
/// use wbtree::SortedSet;
///
/// let mut set: SortedSet<i32, _> = SortedSet::with_comparator(|a: &i32, b: &i32| b.cmp(a));
/// set.extend([1, 3, 2]);
/// assert_eq!(set.iter().copied().collect::<Vec<_>>(), [3, 2, 1]);
/// ```
pub trait Comparator<T: ?Sized> {
    /// Compares `a` against `b`.
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

/// Orders values by their [`Ord`] implementation.
///
/// This is the default comparator of [`SortedSet`](crate::SortedSet).
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct Natural;

impl<T: Ord + ?Sized> Comparator<T> for Natural {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// Orders values by comparing their [`Display`] renderings as strings.
///
/// Numbers therefore sort as text: `10` comes before `2`. Each comparison renders both values,
/// which allocates.
///
/// # Examples
///
/// ```
/// use wbtree::{Lexicographic, SortedSet};
///
/// let mut set: SortedSet<i32, Lexicographic> = SortedSet::with_comparator(Lexicographic);
/// set.extend([2, 10, 1]);
/// assert_eq!(set.iter().copied().collect::<Vec<_>>(), [1, 10, 2]);
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct Lexicographic;

impl<T: Display + ?Sized> Comparator<T> for Lexicographic {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.to_string().cmp(&b.to_string())
    }
}

impl<T: ?Sized, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}
