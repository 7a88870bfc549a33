//! Rotations. Each takes the pivot and returns the new local root; the caller
//! relinks that root into the pivot's old parent slot.

use super::arena::Arena;
use super::handle::Handle;
use super::node::Node;

/// ```text
///     a
///      \            b
///       b    ->   /   \
///        \       a     c
///         c
/// ```
///
/// Returns `a` unchanged if it has no right child.
pub(crate) fn single_left<T>(nodes: &mut Arena<Node<T>>, a: Handle) -> Handle {
    let Some(b) = nodes.get(a).right() else {
        return a;
    };
    let inner = nodes.get(b).left();
    nodes.get_mut(a).set_right(inner);
    nodes.get_mut(b).set_left(Some(a));
    // `a` is now below `b`, so it must be resized first.
    nodes.update_size(a);
    nodes.update_size(b);
    b
}

/// ```text
///         c
///        /          b
///       b    ->   /   \
///      /         a     c
///     a
/// ```
///
/// Returns `c` unchanged if it has no left child.
pub(crate) fn single_right<T>(nodes: &mut Arena<Node<T>>, c: Handle) -> Handle {
    let Some(b) = nodes.get(c).left() else {
        return c;
    };
    let inner = nodes.get(b).right();
    nodes.get_mut(c).set_left(inner);
    nodes.get_mut(b).set_right(Some(c));
    nodes.update_size(c);
    nodes.update_size(b);
    b
}

/// ```text
///     a
///      \          b
///       c  ->   /   \
///      /       a     c
///     b
/// ```
pub(crate) fn double_left<T>(nodes: &mut Arena<Node<T>>, a: Handle) -> Handle {
    let Some(c) = nodes.get(a).right() else {
        return a;
    };
    let right = single_right(nodes, c);
    nodes.get_mut(a).set_right(Some(right));
    single_left(nodes, a)
}

/// ```text
///       c
///      /          b
///     a    ->   /   \
///      \       a     c
///       b
/// ```
pub(crate) fn double_right<T>(nodes: &mut Arena<Node<T>>, c: Handle) -> Handle {
    let Some(a) = nodes.get(c).left() else {
        return c;
    };
    let left = single_left(nodes, a);
    nodes.get_mut(c).set_left(Some(left));
    single_right(nodes, c)
}
