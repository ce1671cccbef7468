//! Tree nodes with exclusively owned child links

use std::cmp::Ordering;
use std::fmt;

/// Which link slot of a parent a deletion targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Side {
    Left,
    Right,
}

/// A single element of the tree.
///
/// Each node owns its subtrees through the `left`/`right` links; dropping a
/// node reclaims everything below it. The BST invariant holds for every node:
/// all values to the left compare less than `data`, all values to the right
/// compare greater, and no value appears twice.
#[derive(Debug, Clone)]
pub struct Node<T> {
    data: T,
    left: Option<Box<Node<T>>>,
    right: Option<Box<Node<T>>>,
}

impl<T: Ord> Node<T> {
    pub fn new(data: T) -> Self {
        Self {
            data,
            left: None,
            right: None,
        }
    }

    pub fn data(&self) -> &T {
        &self.data
    }

    pub fn left(&self) -> Option<&Node<T>> {
        self.left.as_deref()
    }

    pub fn right(&self) -> Option<&Node<T>> {
        self.right.as_deref()
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    pub fn has_one_child(&self) -> bool {
        self.left.is_some() ^ self.right.is_some()
    }

    /// Present children, left before right. Absent links are never yielded,
    /// which keeps level-order queues free of placeholder entries.
    pub fn children(&self) -> impl Iterator<Item = &Node<T>> {
        self.left.as_deref().into_iter().chain(self.right.as_deref())
    }

    /// Insert `node` into this subtree. An equal value is a silent no-op
    /// (set semantics).
    pub(crate) fn insert(&mut self, node: Box<Node<T>>) {
        match node.data.cmp(&self.data) {
            Ordering::Less => match &mut self.left {
                Some(left) => left.insert(node),
                None => self.left = Some(node),
            },
            Ordering::Equal => {}
            Ordering::Greater => match &mut self.right {
                Some(right) => right.insert(node),
                None => self.right = Some(node),
            },
        }
    }

    /// Remove `target` from this subtree.
    ///
    /// The caller guarantees `target != self.data`; a node never eliminates
    /// itself, only a direct child (the tree handles the root case).
    pub(crate) fn delete(&mut self, target: &T) {
        let side = match target.cmp(&self.data) {
            Ordering::Less => Side::Left,
            Ordering::Greater => Side::Right,
            Ordering::Equal => return,
        };
        let link = match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        };
        let child_is_target = matches!(link, Some(child) if child.data == *target);
        if child_is_target {
            Self::eliminate(link);
        } else if let Some(child) = link {
            child.delete(target);
        }
    }

    /// Replace the node held by `link` according to its shape: clear a leaf,
    /// promote a single child, or splice in the in-order successor. The
    /// replaced node is dropped here, together with anything it still owns.
    pub(crate) fn eliminate(link: &mut Option<Box<Node<T>>>) {
        let Some(mut node) = link.take() else {
            return;
        };
        if node.is_leaf() {
            return;
        }
        if node.has_one_child() {
            *link = node.take_single_child();
            return;
        }
        if let Some(successor) = node.promote_successor() {
            *link = Some(successor);
        }
    }

    /// Detach the in-order successor and hand it this node's links.
    ///
    /// The successor always inherits the left link. The right link is only
    /// inherited when the successor came from deeper in the right subtree;
    /// when the direct right child is itself the successor, detachment has
    /// emptied `self.right` and the successor keeps its own right subtree.
    pub(crate) fn promote_successor(&mut self) -> Option<Box<Node<T>>> {
        let mut successor = self.detach_inorder_successor()?;
        successor.left = self.left.take();
        if self.right.is_some() {
            successor.right = self.right.take();
        }
        Some(successor)
    }

    // Used for root replacement, where no parent slot exists to run
    // `eliminate` against.
    pub(crate) fn take_single_child(&mut self) -> Option<Box<Node<T>>> {
        self.left.take().or_else(|| self.right.take())
    }

    /// The smallest node of the right subtree, or `None` when there is no
    /// right subtree.
    pub fn inorder_successor(&self) -> Option<&Node<T>> {
        let mut node = self.right.as_deref()?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Some(node)
    }

    /// Unlink and return the in-order successor by ownership transfer.
    ///
    /// Only meaningful during a two-child elimination; returns `None` when
    /// there is no right subtree.
    pub(crate) fn detach_inorder_successor(&mut self) -> Option<Box<Node<T>>> {
        if self.right.as_ref()?.left.is_none() {
            // The right child has no left subtree, so it is the successor.
            return self.right.take();
        }
        let mut parent = self.right.as_mut()?;
        while parent.left.as_ref().is_some_and(|left| left.left.is_some()) {
            parent = parent.left.as_mut()?;
        }
        parent.left.take()
    }
}

impl<T: Ord> PartialEq for Node<T> {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl<T: Ord> Eq for Node<T> {}

impl<T: Ord> PartialOrd for Node<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: Ord> Ord for Node<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.data.cmp(&other.data)
    }
}

impl<T: fmt::Display> fmt::Display for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn subtree(values: &[i32]) -> Box<Node<i32>> {
        let mut root = Box::new(Node::new(values[0]));
        for &v in &values[1..] {
            root.insert(Box::new(Node::new(v)));
        }
        root
    }

    #[test]
    fn eliminate_leaf_clears_the_link() {
        let mut link = Some(subtree(&[5]));
        Node::eliminate(&mut link);
        assert!(link.is_none());
    }

    #[test]
    fn eliminate_one_child_promotes_the_descendant() {
        let mut link = Some(subtree(&[5, 3]));
        Node::eliminate(&mut link);
        let node = link.unwrap();
        assert_eq!(*node.data(), 3);
        assert!(node.is_leaf());
    }

    #[test]
    fn eliminate_two_children_promotes_the_inorder_successor() {
        // 5 with left 3 and right 8; successor of 5 is 7 (leftmost under 8).
        let mut link = Some(subtree(&[5, 3, 8, 7, 9]));
        Node::eliminate(&mut link);
        let node = link.unwrap();
        assert_eq!(*node.data(), 7);
        assert_eq!(node.left().map(Node::data), Some(&3));
        assert_eq!(node.right().map(Node::data), Some(&8));
        // 7 was removed from below 8.
        assert!(node.right().unwrap().left().is_none());
    }

    #[test]
    fn eliminate_when_right_child_is_the_successor() {
        // Right child 8 has no left subtree, so 8 itself is promoted.
        let mut link = Some(subtree(&[5, 3, 8, 9]));
        Node::eliminate(&mut link);
        let node = link.unwrap();
        assert_eq!(*node.data(), 8);
        assert_eq!(node.left().map(Node::data), Some(&3));
        assert_eq!(node.right().map(Node::data), Some(&9));
    }

    #[test]
    fn inorder_successor_walks_leftmost_of_right() {
        let node = subtree(&[5, 3, 9, 7, 6, 8]);
        assert_eq!(node.inorder_successor().map(Node::data), Some(&6));
        assert!(subtree(&[5, 3]).inorder_successor().is_none());
    }

    #[test]
    fn structural_predicates() {
        let node = subtree(&[5, 3, 8]);
        assert!(!node.is_leaf());
        assert!(!node.has_one_child());
        assert!(subtree(&[5, 3]).has_one_child());
        assert!(subtree(&[5]).is_leaf());
        let children: Vec<&i32> = node.children().map(Node::data).collect();
        assert_eq!(children, [&3, &8]);
    }
}
