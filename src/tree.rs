//! Balanced binary search tree over any totally ordered element type.
//!
//! The tree is built once from a non-empty collection and always has a root.
//! Construction sorts and deduplicates its input, then picks the lower-middle
//! element of every (sub)range as the subtree root, yielding the canonical
//! minimum-height shape for that element set. Inserts and deletes are plain
//! BST edits; `rebalance` rebuilds the canonical shape from the current
//! element set.

use std::collections::VecDeque;
use std::fmt;

use itertools::Itertools;
use tracing::instrument;

use crate::errors::{TreeError, TreeResult};
use crate::node::Node;

#[derive(Debug, Clone)]
pub struct Tree<T> {
    root: Box<Node<T>>,
}

impl<T: Ord + Clone + fmt::Debug> Tree<T> {
    /// Build a tree from any collection of elements.
    ///
    /// The input is sorted and deduplicated first; duplicates collapse into a
    /// single element. Fails with [`TreeError::EmptyCollection`] when nothing
    /// remains.
    #[instrument(level = "debug", skip(collection))]
    pub fn build<I>(collection: I) -> TreeResult<Self>
    where
        I: IntoIterator<Item = T>,
    {
        let items: Vec<T> = collection.into_iter().sorted().dedup().collect();
        if items.is_empty() {
            return Err(TreeError::EmptyCollection);
        }
        Ok(Self {
            root: Self::build_node(&items),
        })
    }

    // Lower-middle element becomes the subtree root; the strict halves on
    // either side become its children. `items` must be sorted, unique and
    // non-empty.
    fn build_node(items: &[T]) -> Box<Node<T>> {
        debug_assert!(!items.is_empty());
        let mid = items.len() / 2;
        let mut node = Box::new(Node::new(items[mid].clone()));
        if mid > 0 {
            node.insert(Self::build_node(&items[..mid]));
        }
        if mid + 1 < items.len() {
            node.insert(Self::build_node(&items[mid + 1..]));
        }
        node
    }

    pub fn root(&self) -> &Node<T> {
        &self.root
    }

    /// Insert a value. An already present value is a silent no-op.
    #[instrument(level = "trace", skip(self))]
    pub fn insert(&mut self, data: T) {
        self.root.insert(Box::new(Node::new(data)));
    }

    /// Delete a value. An absent value is a silent no-op.
    ///
    /// Deleting the only remaining element fails with
    /// [`TreeError::WouldEmptyTree`]: a tree keeps its root for its whole
    /// lifetime.
    #[instrument(level = "trace", skip(self))]
    pub fn delete(&mut self, data: &T) -> TreeResult<()> {
        if self.root.data() != data {
            self.root.delete(data);
            return Ok(());
        }
        if self.root.is_leaf() {
            return Err(TreeError::WouldEmptyTree);
        }
        if self.root.has_one_child() {
            if let Some(child) = self.root.take_single_child() {
                self.root = child;
            }
            return Ok(());
        }
        if let Some(successor) = self.root.promote_successor() {
            self.root = successor;
        }
        Ok(())
    }

    /// Breadth-first search for a value, stopping at the first match.
    #[instrument(level = "trace", skip(self))]
    pub fn find(&self, data: &T) -> Option<&Node<T>> {
        self.iter_level_order().find(|node| node.data() == data)
    }

    /// Edge count of the deeper subtree below the node holding `data`, or
    /// `None` when the value is absent.
    ///
    /// A leaf subtree counts one edge, an absent link zero. A node whose only
    /// descendant is a single leaf child therefore reports height 1.
    #[instrument(level = "trace", skip(self))]
    pub fn height(&self, data: &T) -> Option<usize> {
        let node = self.find(data)?;
        Some(Self::edges(node.left()).max(Self::edges(node.right())))
    }

    fn edges(node: Option<&Node<T>>) -> usize {
        match node {
            None => 0,
            Some(node) if node.is_leaf() => 1,
            Some(node) => 1 + Self::edges(node.left()).max(Self::edges(node.right())),
        }
    }

    /// Number of edges from the root down to the node holding `data`, or
    /// `None` when the value is absent. The root value itself has depth 0.
    #[instrument(level = "trace", skip(self))]
    pub fn depth(&self, data: &T) -> Option<usize> {
        self.find(data)?;
        if self.root.data() == data {
            return Some(0);
        }
        // Only the branch actually holding the value contributes a non-zero
        // count; the other probe returns 0 and the max selects correctly.
        Some(
            Self::down_edges(self.root.left(), data, 0)
                .max(Self::down_edges(self.root.right(), data, 0)),
        )
    }

    fn down_edges(node: Option<&Node<T>>, target: &T, depth: usize) -> usize {
        let Some(node) = node else {
            return 0;
        };
        let depth = depth + 1;
        if node.data() == target {
            return depth;
        }
        Self::down_edges(node.left(), target, depth)
            .max(Self::down_edges(node.right(), target, depth))
    }

    /// Root-only balance check: the subtrees below the root's two children
    /// may differ by at most one edge. A leaf root is trivially balanced; a
    /// root with a single child is balanced only when that child is a leaf.
    #[instrument(level = "trace", skip(self))]
    pub fn is_balanced(&self) -> bool {
        match (self.root.left(), self.root.right()) {
            (None, None) => true,
            (Some(child), None) | (None, Some(child)) => child.is_leaf(),
            (Some(left), Some(right)) => {
                let left_height = Self::edges(left.left()).max(Self::edges(left.right()));
                let right_height = Self::edges(right.left()).max(Self::edges(right.right()));
                left_height.abs_diff(right_height) <= 1
            }
        }
    }

    /// Rebuild the canonical balanced shape into a fresh tree, leaving this
    /// one untouched. The rebuild happens unconditionally; callers typically
    /// guard with [`Self::is_balanced`] first.
    #[instrument(level = "debug", skip(self))]
    pub fn rebalance(&self) -> Tree<T> {
        Self {
            root: Self::rebuild(self.level_order()),
        }
    }

    /// Rebuild the canonical balanced shape in place.
    #[instrument(level = "debug", skip(self))]
    pub fn rebalance_in_place(&mut self) {
        self.root = Self::rebuild(self.level_order());
    }

    // Construction sorts and deduplicates regardless of arrival order, so
    // feeding breadth-first data produces the same canonical shape as sorted
    // input would.
    fn rebuild(items: Vec<T>) -> Box<Node<T>> {
        let items: Vec<T> = items.into_iter().sorted().dedup().collect();
        Self::build_node(&items)
    }

    /// Breadth-first iterator over the nodes, left-to-right within a level.
    pub fn iter_level_order(&self) -> LevelOrderIter<'_, T> {
        LevelOrderIter::new(self)
    }

    /// Element sequence in breadth-first order.
    pub fn level_order(&self) -> Vec<T> {
        self.iter_level_order()
            .map(|node| node.data().clone())
            .collect()
    }

    /// Element sequence in ascending order.
    pub fn inorder(&self) -> Vec<T> {
        let mut out = Vec::new();
        Self::inorder_walk(&self.root, &mut out);
        out
    }

    fn inorder_walk(node: &Node<T>, out: &mut Vec<T>) {
        if let Some(left) = node.left() {
            Self::inorder_walk(left, out);
        }
        out.push(node.data().clone());
        if let Some(right) = node.right() {
            Self::inorder_walk(right, out);
        }
    }

    /// Element sequence in root-left-right order.
    pub fn preorder(&self) -> Vec<T> {
        let mut out = Vec::new();
        Self::preorder_walk(&self.root, &mut out);
        out
    }

    fn preorder_walk(node: &Node<T>, out: &mut Vec<T>) {
        out.push(node.data().clone());
        if let Some(left) = node.left() {
            Self::preorder_walk(left, out);
        }
        if let Some(right) = node.right() {
            Self::preorder_walk(right, out);
        }
    }

    /// Element sequence in left-right-root order.
    pub fn postorder(&self) -> Vec<T> {
        let mut out = Vec::new();
        Self::postorder_walk(&self.root, &mut out);
        out
    }

    fn postorder_walk(node: &Node<T>, out: &mut Vec<T>) {
        if let Some(left) = node.left() {
            Self::postorder_walk(left, out);
        }
        if let Some(right) = node.right() {
            Self::postorder_walk(right, out);
        }
        out.push(node.data().clone());
    }
}

pub struct LevelOrderIter<'a, T> {
    queue: VecDeque<&'a Node<T>>,
}

impl<'a, T: Ord> LevelOrderIter<'a, T> {
    fn new(tree: &'a Tree<T>) -> Self {
        let mut queue = VecDeque::new();
        queue.push_back(tree.root.as_ref());
        Self { queue }
    }
}

impl<'a, T: Ord> Iterator for LevelOrderIter<'a, T> {
    type Item = &'a Node<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.queue.pop_front()?;
        for child in node.children() {
            self.queue.push_back(child);
        }
        Some(node)
    }
}
