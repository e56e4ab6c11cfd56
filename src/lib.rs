//! A Binary Search Tree that rebalances on demand.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` will typically store
//! some sort of value (the value that was inserted, for example) and will
//! sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for values in the tree takes `O(height)` (where `height` is the longest
//! path from the root `Node` to a leaf `Node`). A [`Tree`] built with [`Tree::build`]
//! starts out with a height of `O(lg N)`, but inserts and deletes don't rotate anything
//! to keep it that way. Call [`Tree::rebalance`] whenever [`Tree::is_balanced`] stops
//! holding and the height matters.
//!
//! # Examples
//!
//! ```
//! use balanced_bst::{Error, Tree};
//!
//! let mut tree = Tree::build(vec![5, 3, 8, 1, 4]);
//!
//! tree.insert(6);
//! assert!(tree.contains(&6));
//!
//! tree.delete(&4);
//! assert_eq!(tree.inorder(), vec![&1, &3, &5, &6, &8]);
//!
//! assert_eq!(tree.depth(&42), Err(Error::NotFound));
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod error;
pub mod node;
pub mod tree;

pub use error::{Error, Result};
pub use node::Node;
pub use tree::Tree;
