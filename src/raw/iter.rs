use smallvec::SmallVec;

use super::arena::Arena;
use super::handle::Handle;
use super::node::Node;

/// Ancestors still to be visited. A weight-balanced tree of `n` nodes is
/// about `2 log2(n)` deep at worst, so 32 slots cover most sets without
/// touching the heap.
type Spine = SmallVec<[Handle; 32]>;

/// In-order walk over a tree with an explicit stack at each end.
///
/// `front` holds the left spine still to be visited going forwards, `back`
/// the right spine going backwards. `remaining` stops the two ends from
/// crossing.
pub(crate) struct InOrder<'a, T> {
    nodes: &'a Arena<Node<T>>,
    front: Spine,
    back: Spine,
    remaining: usize,
}

impl<'a, T> InOrder<'a, T> {
    pub(crate) fn new(nodes: &'a Arena<Node<T>>, root: Option<Handle>) -> Self {
        let mut walk = Self {
            nodes,
            front: Spine::new(),
            back: Spine::new(),
            remaining: nodes.size_of(root),
        };
        walk.descend_left(root);
        walk.descend_right(root);
        walk
    }

    fn descend_left(&mut self, mut link: Option<Handle>) {
        while let Some(handle) = link {
            self.front.push(handle);
            link = self.nodes.get(handle).left();
        }
    }

    fn descend_right(&mut self, mut link: Option<Handle>) {
        while let Some(handle) = link {
            self.back.push(handle);
            link = self.nodes.get(handle).right();
        }
    }

    pub(crate) fn next_handle(&mut self) -> Option<Handle> {
        if self.remaining == 0 {
            return None;
        }
        let handle = self.front.pop()?;
        self.descend_left(self.nodes.get(handle).right());
        self.remaining -= 1;
        Some(handle)
    }

    pub(crate) fn next_back_handle(&mut self) -> Option<Handle> {
        if self.remaining == 0 {
            return None;
        }
        let handle = self.back.pop()?;
        self.descend_right(self.nodes.get(handle).left());
        self.remaining -= 1;
        Some(handle)
    }

    pub(crate) fn next_value(&mut self) -> Option<&'a T> {
        let handle = self.next_handle()?;
        Some(self.nodes.get(handle).value())
    }

    pub(crate) fn next_back_value(&mut self) -> Option<&'a T> {
        let handle = self.next_back_handle()?;
        Some(self.nodes.get(handle).value())
    }

    pub(crate) const fn remaining(&self) -> usize {
        self.remaining
    }
}

impl<T> Clone for InOrder<'_, T> {
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes,
            front: self.front.clone(),
            back: self.back.clone(),
            remaining: self.remaining,
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::raw::testing::attach;
    use alloc::vec::Vec;

    fn sample() -> (Arena<Node<u8>>, Handle) {
        let mut nodes = Arena::new();
        let one = attach(&mut nodes, 1, None, None);
        let three = attach(&mut nodes, 3, None, None);
        let two = attach(&mut nodes, 2, Some(one), Some(three));
        let five = attach(&mut nodes, 5, None, None);
        let six = attach(&mut nodes, 6, Some(five), None);
        let root = attach(&mut nodes, 4, Some(two), Some(six));
        (nodes, root)
    }

    #[test]
    fn forwards_and_backwards() {
        let (nodes, root) = sample();

        let mut walk = InOrder::new(&nodes, Some(root));
        let forwards: Vec<u8> = core::iter::from_fn(|| walk.next_value().copied()).collect();
        assert_eq!(forwards, [1, 2, 3, 4, 5, 6]);

        let mut walk = InOrder::new(&nodes, Some(root));
        let backwards: Vec<u8> = core::iter::from_fn(|| walk.next_back_value().copied()).collect();
        assert_eq!(backwards, [6, 5, 4, 3, 2, 1]);
    }

    #[test]
    fn ends_meet_without_repeats() {
        let (nodes, root) = sample();
        let mut walk = InOrder::new(&nodes, Some(root));
        assert_eq!(walk.next_value(), Some(&1));
        assert_eq!(walk.next_back_value(), Some(&6));
        assert_eq!(walk.next_back_value(), Some(&5));
        assert_eq!(walk.next_value(), Some(&2));
        assert_eq!(walk.remaining(), 2);
        assert_eq!(walk.next_back_value(), Some(&4));
        assert_eq!(walk.next_value(), Some(&3));
        assert_eq!(walk.next_value(), None);
        assert_eq!(walk.next_back_value(), None);
    }

    #[test]
    fn empty_tree() {
        let nodes: Arena<Node<u8>> = Arena::new();
        let mut walk = InOrder::new(&nodes, None);
        assert_eq!(walk.remaining(), 0);
        assert_eq!(walk.next_value(), None);
        assert_eq!(walk.next_back_value(), None);
    }
}
