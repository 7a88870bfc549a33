//! The weight-balance criterion and the operators that restore it.
//!
//! Weights count a subtree's nodes plus one, so an empty side weighs 1. With
//! `l` and `r` the weights of the two sides, a node is balanced while
//! `2r² < (l + r)²` holds in both directions, i.e. neither side carries more
//! than `1/√2` of the node's weight. Everything here is integer arithmetic;
//! no square roots are taken.

use super::arena::Arena;
use super::handle::Handle;
use super::node::Node;
use super::rotate::{double_left, double_right, single_left, single_right};

#[inline]
fn weight(size: usize) -> u128 {
    size as u128 + 1
}

/// Decides between a single and a double rotation.
///
/// `inner` and `outer` are the sizes of the heavy child's subtrees, `inner`
/// being the one closer to the node being rebalanced. A single rotation keeps
/// the result balanced while `inner` is light enough compared to `outer`.
#[inline]
pub(crate) fn is_single(inner: usize, outer: usize) -> bool {
    let inner = weight(inner);
    let outer = weight(outer);
    inner * inner < 2 * outer * outer
}

/// True if the `heavy` side does not outweigh the `light` side beyond the
/// tolerance. Only checks one direction.
#[inline]
pub(crate) fn is_balanced(light: usize, heavy: usize) -> bool {
    let light = weight(light);
    let heavy = weight(heavy);
    let total = light + heavy;
    2 * heavy * heavy < total * total
}

/// Rebalances `handle` after its right side grew or its left side shrank.
/// Returns the new local root.
pub(crate) fn balance_left<T>(nodes: &mut Arena<Node<T>>, handle: Handle) -> Handle {
    let node = nodes.get(handle);
    let (left, right) = (node.left(), node.right());
    if is_balanced(nodes.size_of(left), nodes.size_of(right)) {
        return handle;
    }
    // An empty right side weighs 1 and can never be the heavy one.
    let Some(right) = right else {
        return handle;
    };
    let heavy = nodes.get(right);
    if is_single(nodes.size_of(heavy.left()), nodes.size_of(heavy.right())) {
        single_left(nodes, handle)
    } else {
        double_left(nodes, handle)
    }
}

/// Rebalances `handle` after its left side grew or its right side shrank.
/// Returns the new local root.
pub(crate) fn balance_right<T>(nodes: &mut Arena<Node<T>>, handle: Handle) -> Handle {
    let node = nodes.get(handle);
    let (left, right) = (node.left(), node.right());
    if is_balanced(nodes.size_of(right), nodes.size_of(left)) {
        return handle;
    }
    let Some(left) = left else {
        return handle;
    };
    let heavy = nodes.get(left);
    if is_single(nodes.size_of(heavy.right()), nodes.size_of(heavy.left())) {
        single_right(nodes, handle)
    } else {
        double_right(nodes, handle)
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::raw::testing::{attach, in_order, sizes_consistent, weight_balanced};
    use alloc::vec;
    use proptest::prelude::*;

    #[test]
    fn balance_boundaries() {
        // Weights 1 vs 1, 2 vs 2: even.
        assert!(is_balanced(0, 0));
        assert!(is_balanced(1, 1));
        // Weights 1 vs 2: 8 < 9.
        assert!(is_balanced(0, 1));
        // Weights 1 vs 3: 18 >= 16.
        assert!(!is_balanced(0, 2));
        // Weights 2 vs 4: 32 < 36; 2 vs 5: 50 >= 49.
        assert!(is_balanced(1, 3));
        assert!(!is_balanced(1, 4));
        // Weights 5 vs 12: 288 >= 289 is false, so still balanced; 5 vs 13 is not.
        assert!(is_balanced(4, 11));
        assert!(!is_balanced(4, 12));
    }

    #[test]
    fn single_boundaries() {
        // Weights 1 vs 1: 1 < 2.
        assert!(is_single(0, 0));
        // Weights 2 vs 1: 4 >= 2.
        assert!(!is_single(1, 0));
        // Weights 3 vs 3: 9 < 18; 5 vs 4: 25 < 32; 6 vs 4: 36 >= 32.
        assert!(is_single(2, 2));
        assert!(is_single(4, 3));
        assert!(!is_single(5, 3));
    }

    #[test]
    fn no_overflow_at_the_size_limit() {
        // A tree never holds more nodes than there are handles.
        let max = Handle::MAX + 1;
        assert!(is_balanced(max, max));
        assert!(!is_balanced(0, max));
        assert!(is_single(0, max));
        assert!(!is_single(max, 0));
    }

    #[test]
    fn perfect_three_node_tree_is_balanced() {
        let mut nodes = Arena::new();
        let a = attach(&mut nodes, 'a', None, None);
        let c = attach(&mut nodes, 'c', None, None);
        let b = attach(&mut nodes, 'b', Some(a), Some(c));

        assert!(weight_balanced(&nodes, Some(b)));
        assert_eq!(balance_left(&mut nodes, b), b);
        assert_eq!(balance_right(&mut nodes, b), b);
    }

    #[test]
    fn balance_left_repairs_right_heavy_chain() {
        let mut nodes = Arena::new();
        let b = attach(&mut nodes, 'b', None, None);
        let c = attach(&mut nodes, 'c', Some(b), None);
        let a = attach(&mut nodes, 'a', None, Some(c));
        assert!(!weight_balanced(&nodes, Some(a)));

        // The heavy child leans inward, which takes a double rotation.
        let root = balance_left(&mut nodes, a);
        assert_eq!(root, b);
        assert!(weight_balanced(&nodes, Some(root)));
        assert!(sizes_consistent(&nodes, Some(root)));
        assert_eq!(in_order(&nodes, Some(root)), vec!['a', 'b', 'c']);
    }

    #[test]
    fn balance_right_repairs_left_heavy_chain() {
        let mut nodes = Arena::new();
        let a = attach(&mut nodes, 'a', None, None);
        let b = attach(&mut nodes, 'b', Some(a), None);
        let c = attach(&mut nodes, 'c', Some(b), None);
        assert!(!weight_balanced(&nodes, Some(c)));

        let root = balance_right(&mut nodes, c);
        assert_eq!(root, b);
        assert!(weight_balanced(&nodes, Some(root)));
        assert!(sizes_consistent(&nodes, Some(root)));
        assert_eq!(in_order(&nodes, Some(root)), vec!['a', 'b', 'c']);
    }

    #[test]
    fn balance_leaves_light_side_growth_alone() {
        // Right side grew, but the node is left heavy within tolerance.
        let mut nodes = Arena::new();
        let a = attach(&mut nodes, 1, None, None);
        let b = attach(&mut nodes, 2, Some(a), None);
        assert_eq!(balance_left(&mut nodes, b), b);
        assert_eq!(balance_right(&mut nodes, b), b);
    }

    proptest! {
        #[test]
        fn balance_is_symmetric_at_equal_weight(size in 0usize..1_000_000) {
            prop_assert!(is_balanced(size, size));
        }

        #[test]
        fn heavier_side_is_never_more_balanced(light in 0usize..10_000, heavy in 0usize..10_000) {
            if !is_balanced(light, heavy) {
                prop_assert!(!is_balanced(light, heavy + 1));
                prop_assert!(heavy > light);
            }
        }
    }
}
