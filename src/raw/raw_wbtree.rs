use alloc::vec::Vec;
use core::cmp::Ordering;

use super::arena::Arena;
use super::balance::{balance_left, balance_right};
use super::handle::Handle;
use super::iter::InOrder;
use super::node::Node;
use super::search::{NodeRef, find};
use crate::compare::Comparator;
use crate::error::TreeError;

/// The weight-balanced tree backing `SortedSet`.
///
/// Mutators recurse from the root to the affected leaf and rebuild on the way
/// back: each level gets its child link reassigned, its size recomputed and
/// a balancing operator applied, and hands its (possibly new) local root to
/// its parent.
#[derive(Clone, Debug)]
pub(crate) struct RawWbTree<T> {
    /// Arena storing all tree nodes.
    nodes: Arena<Node<T>>,
    /// Handle to the root node, if the tree is non-empty.
    root: Option<Handle>,
}

impl<T> RawWbTree<T> {
    pub(crate) const fn new() -> Self {
        Self {
            nodes: Arena::new(),
            root: None,
        }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Arena::with_capacity(capacity),
            root: None,
        }
    }

    pub(crate) fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    /// Number of values, read off the root's size.
    pub(crate) fn len(&self) -> usize {
        self.nodes.size_of(self.root)
    }

    pub(crate) const fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub(crate) fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
    }

    /// Generalized descent from the root. See [`find`].
    pub(crate) fn find<'a, F>(&'a self, progress: F) -> Option<NodeRef<'a, T>>
    where
        F: FnMut(NodeRef<'a, T>) -> Ordering,
    {
        find(&self.nodes, self.root, progress)
    }

    pub(crate) fn in_order(&self) -> InOrder<'_, T> {
        InOrder::new(&self.nodes, self.root)
    }

    /// Moves every value out in ascending order.
    pub(crate) fn into_sorted_vec(mut self) -> Vec<T> {
        let order: Vec<Handle> = {
            let mut walk = self.in_order();
            core::iter::from_fn(|| walk.next_handle()).collect()
        };
        let values: Vec<T> = order.into_iter().map(|handle| self.nodes.take(handle).into_value()).collect();
        self.root = None;
        values
    }

    /// Detaches the rightmost node below `handle`.
    /// Returns the new subtree root and the detached value.
    fn remove_max(&mut self, handle: Handle) -> (Option<Handle>, T) {
        match self.nodes.get(handle).right() {
            Some(right) => {
                let (right, max) = self.remove_max(right);
                self.nodes.get_mut(handle).set_right(right);
                self.nodes.update_size(handle);
                (Some(balance_right(&mut self.nodes, handle)), max)
            }
            None => {
                let node = self.nodes.take(handle);
                (node.left(), node.into_value())
            }
        }
    }

    /// Inserts a value that must not already be in the tree.
    ///
    /// Returns [`TreeError::DuplicateValue`] if `compare` finds an equal value;
    /// the tree is left unchanged and `value` is dropped.
    pub(crate) fn insert<C>(&mut self, value: T, compare: &C) -> Result<(), TreeError>
    where
        C: Comparator<T> + ?Sized,
    {
        let root = self.insert_at(self.root, value, compare)?;
        self.root = Some(root);
        Ok(())
    }

    fn insert_at<C>(&mut self, link: Option<Handle>, value: T, compare: &C) -> Result<Handle, TreeError>
    where
        C: Comparator<T> + ?Sized,
    {
        let Some(handle) = link else {
            return Ok(self.nodes.alloc(Node::leaf(value)));
        };
        let node = self.nodes.get(handle);
        let (left, right) = (node.left(), node.right());

        match compare.compare(&value, node.value()) {
            Ordering::Less => {
                let left = self.insert_at(left, value, compare)?;
                self.nodes.get_mut(handle).set_left(Some(left));
                self.nodes.update_size(handle);
                Ok(balance_right(&mut self.nodes, handle))
            }
            Ordering::Greater => {
                let right = self.insert_at(right, value, compare)?;
                self.nodes.get_mut(handle).set_right(Some(right));
                self.nodes.update_size(handle);
                Ok(balance_left(&mut self.nodes, handle))
            }
            Ordering::Equal => Err(TreeError::DuplicateValue),
        }
    }

    /// Removes the value equal to `value` and returns it.
    ///
    /// Returns [`TreeError::NotFound`] if there is none; the tree is left
    /// unchanged.
    pub(crate) fn remove<C>(&mut self, value: &T, compare: &C) -> Result<T, TreeError>
    where
        C: Comparator<T> + ?Sized,
    {
        let (root, removed) = self.remove_at(self.root, value, compare)?;
        self.root = root;
        Ok(removed)
    }

    fn remove_at<C>(&mut self, link: Option<Handle>, value: &T, compare: &C) -> Result<(Option<Handle>, T), TreeError>
    where
        C: Comparator<T> + ?Sized,
    {
        let Some(handle) = link else {
            return Err(TreeError::NotFound);
        };
        let node = self.nodes.get(handle);
        let (left, right) = (node.left(), node.right());

        match compare.compare(value, node.value()) {
            Ordering::Less => {
                let (left, removed) = self.remove_at(left, value, compare)?;
                self.nodes.get_mut(handle).set_left(left);
                self.nodes.update_size(handle);
                Ok((Some(balance_left(&mut self.nodes, handle)), removed))
            }
            Ordering::Greater => {
                let (right, removed) = self.remove_at(right, value, compare)?;
                self.nodes.get_mut(handle).set_right(right);
                self.nodes.update_size(handle);
                Ok((Some(balance_right(&mut self.nodes, handle)), removed))
            }
            Ordering::Equal => match (left, right) {
                (Some(left), Some(_)) => {
                    // Replace with the in-order predecessor and drop its node instead.
                    let (left, predecessor) = self.remove_max(left);
                    let removed = self.nodes.get_mut(handle).replace_value(predecessor);
                    self.nodes.get_mut(handle).set_left(left);
                    self.nodes.update_size(handle);
                    Ok((Some(balance_left(&mut self.nodes, handle)), removed))
                }
                (child, None) | (None, child) => Ok((child, self.nodes.take(handle).into_value())),
            },
        }
    }
}
