//! Balanced binary search tree with ordered-set semantics.
//!
//! A [`Tree`] is built once from a non-empty collection of totally ordered
//! elements and keeps a root for its whole lifetime. It supports insertion,
//! deletion, lookup, the classic traversals, height/depth queries, a
//! root-level balance check and canonical rebalancing. Rendering helpers live
//! in [`display`].
//!
//! ```
//! use balanced_bst::{Tree, TreeResult};
//!
//! fn main() -> TreeResult<()> {
//!     let mut tree = Tree::build('A'..='K')?;
//!     assert_eq!(tree.inorder(), ('A'..='K').collect::<Vec<_>>());
//!     assert!(tree.is_balanced());
//!
//!     tree.insert('Z');
//!     tree.delete(&'B')?;
//!     assert!(tree.find(&'Z').is_some());
//!     Ok(())
//! }
//! ```

pub mod display;
pub mod errors;
pub mod node;
pub mod tree;
pub mod util;

pub use errors::{TreeError, TreeResult};
pub use node::Node;
pub use tree::{LevelOrderIter, Tree};
