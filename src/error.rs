/// Failure of a core tree mutation whose precondition did not hold.
///
/// The raw insert and remove paths report these instead of corrupting the
/// subtree sizes. A failed mutation leaves the tree exactly as it was.
///
/// # Examples
///
/// ```
/// use wbtree::{SortedSet, TreeError};
///
/// let mut set = SortedSet::from([1, 2]);
/// assert_eq!(set.try_insert(2), Err(TreeError::DuplicateValue));
/// assert_eq!(set.try_remove(&7), Err(TreeError::NotFound));
/// assert_eq!(set.len(), 2);
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum TreeError {
    /// An equal value is already stored in the tree.
    #[error("an equal value is already present in the tree")]
    DuplicateValue,
    /// No equal value is stored in the tree.
    #[error("no equal value is present in the tree")]
    NotFound,
}
