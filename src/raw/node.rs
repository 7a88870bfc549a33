use super::arena::Arena;
use super::handle::Handle;

/// A binary tree node.
///
/// `size` counts the nodes of the subtree rooted here, this node included.
/// Every mutation that relinks children must restore
/// `size == size(left) + size(right) + 1` before returning.
#[derive(Clone, Debug)]
pub(crate) struct Node<T> {
    value: T,
    left: Option<Handle>,
    right: Option<Handle>,
    size: usize,
}

impl<T> Node<T> {
    /// Creates a childless node of size 1.
    pub(crate) const fn leaf(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
            size: 1,
        }
    }

    #[inline]
    pub(crate) const fn value(&self) -> &T {
        &self.value
    }

    /// Swaps in a new value, returning the old one. Links and size are kept.
    pub(crate) fn replace_value(&mut self, value: T) -> T {
        core::mem::replace(&mut self.value, value)
    }

    pub(crate) fn into_value(self) -> T {
        self.value
    }

    #[inline]
    pub(crate) const fn left(&self) -> Option<Handle> {
        self.left
    }

    #[inline]
    pub(crate) const fn right(&self) -> Option<Handle> {
        self.right
    }

    pub(crate) fn set_left(&mut self, left: Option<Handle>) {
        self.left = left;
    }

    pub(crate) fn set_right(&mut self, right: Option<Handle>) {
        self.right = right;
    }

    #[inline]
    pub(crate) const fn size(&self) -> usize {
        self.size
    }
}

impl<T> Arena<Node<T>> {
    /// Size of the subtree behind a child link; an absent child has size 0.
    #[inline]
    pub(crate) fn size_of(&self, link: Option<Handle>) -> usize {
        link.map_or(0, |handle| self.get(handle).size)
    }

    /// Recomputes a node's size from its children.
    pub(crate) fn update_size(&mut self, handle: Handle) {
        let node = self.get(handle);
        let size = self.size_of(node.left) + self.size_of(node.right) + 1;
        self.get_mut(handle).size = size;
    }
}
