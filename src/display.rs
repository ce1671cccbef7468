//! Debug rendering of tree shape.
//!
//! Two renderers: a box-drawing text layout (right subtree above the node,
//! left below, connector prefixes accumulated per level) and a conversion to
//! [`termtree::Tree`] for a top-down structural dump. Both read only element
//! values and child presence; neither affects tree semantics.

use std::fmt;

use termtree::Tree as TermTree;
use tracing::instrument;

use crate::node::Node;
use crate::tree::Tree;

pub trait TreeRender {
    /// Box-drawing rendering, one line per node.
    fn render_string(&self) -> String;

    /// Print [`Self::render_string`] to stdout.
    fn pretty_print(&self);

    /// Convert to a [`termtree::Tree`] of element labels.
    fn to_tree_string(&self) -> TermTree<String>;
}

impl<T: Ord + Clone + fmt::Debug + fmt::Display> TreeRender for Tree<T> {
    #[instrument(level = "debug", skip(self))]
    fn render_string(&self) -> String {
        let mut out = String::new();
        render_node(self.root(), "", true, &mut out);
        out
    }

    fn pretty_print(&self) {
        print!("{}", self.render_string());
    }

    fn to_tree_string(&self) -> TermTree<String> {
        build_term_tree(self.root())
    }
}

fn render_node<T: Ord + fmt::Display>(
    node: &Node<T>,
    prefix: &str,
    is_left: bool,
    out: &mut String,
) {
    if let Some(right) = node.right() {
        let above = format!("{prefix}{}", if is_left { "│   " } else { "    " });
        render_node(right, &above, false, out);
    }
    out.push_str(prefix);
    out.push_str(if is_left { "└── " } else { "┌── " });
    out.push_str(&format!("{}\n", node.data()));
    if let Some(left) = node.left() {
        let below = format!("{prefix}{}", if is_left { "    " } else { "│   " });
        render_node(left, &below, true, out);
    }
}

fn build_term_tree<T: Ord + fmt::Display>(node: &Node<T>) -> TermTree<String> {
    let leaves: Vec<_> = node.children().map(build_term_tree).collect();
    TermTree::new(node.data().to_string()).with_leaves(leaves)
}
