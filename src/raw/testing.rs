//! Hand-built trees and invariant probes shared by the raw unit tests.

use alloc::vec::Vec;

use super::arena::Arena;
use super::balance::is_balanced;
use super::handle::Handle;
use super::node::Node;

/// Allocates a node over already-built children and sizes it.
pub(crate) fn attach<T>(nodes: &mut Arena<Node<T>>, value: T, left: Option<Handle>, right: Option<Handle>) -> Handle {
    let handle = nodes.alloc(Node::leaf(value));
    nodes.get_mut(handle).set_left(left);
    nodes.get_mut(handle).set_right(right);
    nodes.update_size(handle);
    handle
}

/// True if every stored size equals the counted size of its subtree.
pub(crate) fn sizes_consistent<T>(nodes: &Arena<Node<T>>, root: Option<Handle>) -> bool {
    fn count<T>(nodes: &Arena<Node<T>>, link: Option<Handle>) -> Option<usize> {
        let Some(handle) = link else { return Some(0) };
        let node = nodes.get(handle);
        let size = count(nodes, node.left())? + count(nodes, node.right())? + 1;
        (size == node.size()).then_some(size)
    }
    count(nodes, root).is_some()
}

/// True if no node is too heavy on either side.
pub(crate) fn weight_balanced<T>(nodes: &Arena<Node<T>>, root: Option<Handle>) -> bool {
    let Some(handle) = root else { return true };
    let node = nodes.get(handle);
    let left = nodes.size_of(node.left());
    let right = nodes.size_of(node.right());
    is_balanced(left, right)
        && is_balanced(right, left)
        && weight_balanced(nodes, node.left())
        && weight_balanced(nodes, node.right())
}

pub(crate) fn in_order<T: Clone>(nodes: &Arena<Node<T>>, root: Option<Handle>) -> Vec<T> {
    fn walk<T: Clone>(nodes: &Arena<Node<T>>, link: Option<Handle>, out: &mut Vec<T>) {
        if let Some(handle) = link {
            let node = nodes.get(handle);
            walk(nodes, node.left(), out);
            out.push(node.value().clone());
            walk(nodes, node.right(), out);
        }
    }
    let mut out = Vec::new();
    walk(nodes, root, &mut out);
    out
}
