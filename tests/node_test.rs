//! Node ordering and structural queries

use balanced_bst::{Node, Tree};
use rstest::rstest;

#[rstest]
fn given_nodes_when_comparing_then_ordering_follows_data() {
    let a = Node::new(5);
    let b = Node::new(6);
    let c = Node::new(5);

    assert_eq!(a, c);
    assert_ne!(a, b);
    assert!(a < b);
    assert!(a <= b);
    assert!(a <= c);
    assert!(b > c);
    assert!(!(a > b));
}

#[rstest]
fn given_letters_when_inspecting_root_then_structure_is_exposed() {
    let tree = Tree::build('A'..='K').unwrap();
    let root = tree.root();

    assert_eq!(*root.data(), 'F');
    assert_eq!(root.left().map(Node::data), Some(&'C'));
    assert_eq!(root.right().map(Node::data), Some(&'I'));
    assert!(!root.is_leaf());
    assert!(!root.has_one_child());

    let children: Vec<&char> = root.children().map(Node::data).collect();
    assert_eq!(children, [&'C', &'I']);
}

#[rstest]
fn given_letters_when_walking_inorder_successor_then_leftmost_of_right() {
    let tree = Tree::build('A'..='K').unwrap();
    // Successor of F is G, the leftmost node under I.
    assert_eq!(tree.root().inorder_successor().map(Node::data), Some(&'G'));
    // A leaf has no successor.
    let leaf = tree.find(&'A').unwrap();
    assert!(leaf.inorder_successor().is_none());
}
