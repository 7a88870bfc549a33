use core::cmp::Ordering;
use core::fmt;

use super::arena::Arena;
use super::handle::Handle;
use super::node::Node;

/// A read-only view of one node of a set's tree, handed to the `progress`
/// callback of [`SortedSet::find_by`](crate::SortedSet::find_by).
///
/// Besides the stored value it exposes subtree sizes, which is what rank
/// based descents need.
pub struct NodeRef<'a, T> {
    nodes: &'a Arena<Node<T>>,
    handle: Handle,
}

impl<'a, T> NodeRef<'a, T> {
    pub(crate) fn new(nodes: &'a Arena<Node<T>>, handle: Handle) -> Self {
        Self {
            nodes,
            handle,
        }
    }

    fn node(&self) -> &'a Node<T> {
        self.nodes.get(self.handle)
    }

    /// The value stored in this node.
    #[must_use]
    pub fn value(&self) -> &'a T {
        self.node().value()
    }

    /// Number of values in the subtree rooted at this node, itself included.
    #[must_use]
    pub fn size(&self) -> usize {
        self.node().size()
    }

    /// Number of values in the left subtree; all of them order before this
    /// node's value.
    #[must_use]
    pub fn left_size(&self) -> usize {
        self.nodes.size_of(self.node().left())
    }

    /// Number of values in the right subtree.
    #[must_use]
    pub fn right_size(&self) -> usize {
        self.nodes.size_of(self.node().right())
    }

    #[must_use]
    pub fn left(&self) -> Option<NodeRef<'a, T>> {
        self.node().left().map(|handle| NodeRef::new(self.nodes, handle))
    }

    #[must_use]
    pub fn right(&self) -> Option<NodeRef<'a, T>> {
        self.node().right().map(|handle| NodeRef::new(self.nodes, handle))
    }
}

impl<T> Clone for NodeRef<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NodeRef<'_, T> {}

impl<T: fmt::Debug> fmt::Debug for NodeRef<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef").field("value", self.value()).field("size", &self.size()).finish()
    }
}

/// Walks down from `root`, steered by `progress`.
///
/// `progress` is evaluated on each visited node: `Less` continues in the left
/// subtree, `Greater` in the right one, and `Equal` stops at the node. Returns
/// `None` if the walk falls off the tree.
///
/// `progress` must agree with the tree order for the answer to mean anything;
/// a callback that does not is not detected.
pub(crate) fn find<'a, T, F>(nodes: &'a Arena<Node<T>>, root: Option<Handle>, mut progress: F) -> Option<NodeRef<'a, T>>
where
    F: FnMut(NodeRef<'a, T>) -> Ordering,
{
    let mut current = root;
    while let Some(handle) = current {
        let node = NodeRef::new(nodes, handle);
        current = match progress(node) {
            Ordering::Less => nodes.get(handle).left(),
            Ordering::Greater => nodes.get(handle).right(),
            Ordering::Equal => return Some(node),
        };
    }
    None
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::raw::testing::attach;
    use alloc::vec::Vec;

    /// ```text
    ///        40
    ///      /    \
    ///    20      60
    ///   /  \       \
    ///  10  30       70
    /// ```
    fn sample() -> (Arena<Node<i32>>, Handle) {
        let mut nodes = Arena::new();
        let ten = attach(&mut nodes, 10, None, None);
        let thirty = attach(&mut nodes, 30, None, None);
        let twenty = attach(&mut nodes, 20, Some(ten), Some(thirty));
        let seventy = attach(&mut nodes, 70, None, None);
        let sixty = attach(&mut nodes, 60, None, Some(seventy));
        let root = attach(&mut nodes, 40, Some(twenty), Some(sixty));
        (nodes, root)
    }

    #[test]
    fn finds_by_value() {
        let (nodes, root) = sample();
        for target in [10, 20, 30, 40, 60, 70] {
            let found = find(&nodes, Some(root), |node| target.cmp(node.value()));
            assert_eq!(found.map(|node| *node.value()), Some(target));
        }
        assert!(find(&nodes, Some(root), |node| 35.cmp(node.value())).is_none());
        assert!(find(&nodes, None, |node: NodeRef<'_, i32>| 35.cmp(node.value())).is_none());
    }

    #[test]
    fn finds_by_rank() {
        let (nodes, root) = sample();
        let by_rank = |rank: usize| {
            let mut remaining = rank;
            find(&nodes, Some(root), |node| {
                let left = node.left_size();
                match remaining.cmp(&left) {
                    Ordering::Greater => {
                        remaining -= left + 1;
                        Ordering::Greater
                    }
                    other => other,
                }
            })
            .map(|node| *node.value())
        };
        let ranked: Vec<_> = (0..6).map(by_rank).collect();
        assert_eq!(ranked, [Some(10), Some(20), Some(30), Some(40), Some(60), Some(70)]);
        assert_eq!(by_rank(6), None);
    }

    #[test]
    fn visits_only_the_search_path() {
        let (nodes, root) = sample();
        let mut visited = Vec::new();
        find(&nodes, Some(root), |node| {
            visited.push(*node.value());
            70.cmp(node.value())
        });
        assert_eq!(visited, [40, 60, 70]);
    }

    #[test]
    fn node_views_expose_sizes() {
        let (nodes, root) = sample();
        let view = NodeRef::new(&nodes, root);
        assert_eq!(view.size(), 6);
        assert_eq!(view.left_size(), 3);
        assert_eq!(view.right_size(), 2);
        let right = view.right().map(|node| *node.value());
        assert_eq!(right, Some(60));
        assert!(view.right().and_then(|node| node.left()).is_none());
    }
}
