//! A binary search tree that only balances itself when asked to.
//!
//! Inserts and deletes keep the search ordering intact but never rotate anything, so a tree fed
//! ascending values degrades into a linked list. Call [`Tree::rebalance`] to rebuild it with the
//! smallest possible height.
//!
//! # Examples
//!
//! ```
//! use balanced_bst::Tree;
//!
//! let mut tree = Tree::build(vec![5, 3, 8, 1, 4]);
//! assert_eq!(tree.inorder(), vec![&1, &3, &4, &5, &8]);
//! assert!(tree.is_balanced());
//!
//! // Inserting in order makes the tree lopsided.
//! for x in 9..15 {
//!     tree.insert(x);
//! }
//! assert!(!tree.is_balanced());
//!
//! // Rebuilding it fixes that without losing anything.
//! tree.rebalance();
//! assert!(tree.is_balanced());
//! assert_eq!(tree.len(), 11);
//! ```

use std::collections::VecDeque;
use std::fmt;
use std::io;

use crate::error::Result;
use crate::node::{self, Link, Node};

/// A binary search tree of unique values.
///
/// Every public operation leaves the search ordering intact: all values to the left of a node are
/// smaller than it and all values to its right are larger. Balance is only guaranteed right after
/// [`build`][Tree::build] or [`rebalance`][Tree::rebalance].
#[derive(Clone, Debug)]
pub struct Tree<T> {
    root: Link<T>,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// The order nodes are handed to a visitor.
#[derive(Clone, Copy, Debug)]
enum Order {
    Level,
    In,
    Pre,
    Post,
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Builds a height-balanced tree out of `values`. They are sorted and deduplicated first, so
    /// any order and any number of repeats is fine.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::Tree;
    ///
    /// let tree = Tree::build(vec![5, 3, 8, 1, 4, 3]);
    ///
    /// assert_eq!(tree.root().map(|n| *n.value()), Some(4));
    /// assert_eq!(tree.height(), 2);
    /// ```
    pub fn build<I>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Ord,
    {
        let mut values = values.into_iter().collect::<Vec<_>>();
        let given = values.len();
        values.sort_unstable();
        values.dedup();
        log::trace!("building tree from {} values ({} unique)", given, values.len());

        Self {
            root: balanced(values),
        }
    }

    /// The root node, if the tree holds anything.
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// Whether the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Counts the values in the tree. This walks every node.
    pub fn len(&self) -> usize {
        let mut len = 0;
        self.walk(Order::In, &mut |_| len += 1);
        len
    }

    /// Inserts `value` into the tree. Inserting a value that is already present does nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(2);
    /// tree.insert(1);
    /// tree.insert(2);
    ///
    /// assert_eq!(tree.inorder(), vec![&1, &2]);
    /// ```
    pub fn insert(&mut self, value: T)
    where
        T: Ord,
    {
        self.insert_node(Node::new(value));
    }

    /// Inserts a node built by the caller. Only the node's own value is placed, any subtree it
    /// carries (say, from cloning a node out of another tree) is dropped so the ordering can't be
    /// broken by foreign children.
    pub fn insert_node(&mut self, node: Node<T>)
    where
        T: Ord,
    {
        let node = Node::new(node.into_value());
        self.root = node::insert(self.root.take(), Box::new(node));
    }

    /// Removes `value` from the tree and returns it. If the tree doesn't contain it, nothing
    /// happens and `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::Tree;
    ///
    /// let mut tree = Tree::build(vec![1, 3, 4, 5, 8]);
    ///
    /// assert_eq!(tree.delete(&4), Some(4));
    /// assert_eq!(tree.delete(&4), None);
    /// assert_eq!(tree.inorder(), vec![&1, &3, &5, &8]);
    /// ```
    pub fn delete(&mut self, value: &T) -> Option<T>
    where
        T: Ord,
    {
        let (root, deleted) = node::delete(self.root.take(), value);
        self.root = root;
        deleted
    }

    /// Removes the value held by `node` from the tree. See [`delete`][Tree::delete].
    pub fn delete_node(&mut self, node: &Node<T>) -> Option<T>
    where
        T: Ord,
    {
        self.delete(node.value())
    }

    /// Finds the node holding `value`, if there is one.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::Tree;
    ///
    /// let tree = Tree::build(vec![1, 2, 3]);
    ///
    /// assert_eq!(tree.find(&3).map(|n| n.is_leaf()), Some(true));
    /// assert!(tree.find(&42).is_none());
    /// ```
    pub fn find(&self, value: &T) -> Option<&Node<T>>
    where
        T: Ord,
    {
        self.root()?.find(value)
    }

    /// Finds the node in this tree that compares equal to `node`.
    pub fn find_node(&self, node: &Node<T>) -> Option<&Node<T>>
    where
        T: Ord,
    {
        self.find(node.value())
    }

    /// Whether `value` is in the tree.
    pub fn contains(&self, value: &T) -> bool
    where
        T: Ord,
    {
        self.find(value).is_some()
    }

    /// Values in breadth-first order, starting at the root and reading each level left to right.
    pub fn level_order(&self) -> Vec<&T> {
        self.collect(Order::Level)
    }

    /// Calls `visit` on every node in breadth-first order.
    pub fn level_order_with<F>(&self, mut visit: F)
    where
        F: FnMut(&Node<T>),
    {
        self.walk(Order::Level, &mut visit);
    }

    /// Values in ascending order.
    pub fn inorder(&self) -> Vec<&T> {
        self.collect(Order::In)
    }

    /// Calls `visit` on every node in ascending order of their values.
    pub fn inorder_with<F>(&self, mut visit: F)
    where
        F: FnMut(&Node<T>),
    {
        self.walk(Order::In, &mut visit);
    }

    /// The root's value followed by its left subtree and then its right subtree.
    ///
    /// **Note** only the root is placed before its children. Each subtree is listed in ascending
    /// order rather than recursively root-first, so this is the root followed by the remaining
    /// values split around it.
    ///
    /// ```
    /// use balanced_bst::Tree;
    ///
    /// let tree = Tree::build(1..=7);
    /// assert_eq!(tree.preorder(), vec![&4, &1, &2, &3, &5, &6, &7]);
    /// ```
    pub fn preorder(&self) -> Vec<&T> {
        self.collect(Order::Pre)
    }

    /// Calls `visit` on every node in the order of [`preorder`][Tree::preorder].
    pub fn preorder_with<F>(&self, mut visit: F)
    where
        F: FnMut(&Node<T>),
    {
        self.walk(Order::Pre, &mut visit);
    }

    /// The left subtree, then the right subtree, then the root's value.
    ///
    /// **Note** just like [`preorder`][Tree::preorder], each subtree is listed in ascending order
    /// and only the root is moved to the end.
    pub fn posorder(&self) -> Vec<&T> {
        self.collect(Order::Post)
    }

    /// Calls `visit` on every node in the order of [`posorder`][Tree::posorder].
    pub fn posorder_with<F>(&self, mut visit: F)
    where
        F: FnMut(&Node<T>),
    {
        self.walk(Order::Post, &mut visit);
    }

    /// Number of edges on the longest path from the root to a leaf. An empty tree has a height of
    /// `-1` and a tree with just a root has a height of `0`.
    pub fn height(&self) -> isize {
        node::height(self.root())
    }

    /// Number of edges between the root and the node holding `value`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`][crate::Error::NotFound] if `value` isn't in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::{Error, Tree};
    ///
    /// let tree = Tree::build(vec![5, 3, 8, 1, 4]);
    ///
    /// assert_eq!(tree.depth(&4), Ok(0));
    /// assert_eq!(tree.depth(&3), Ok(2));
    /// assert_eq!(tree.depth(&99), Err(Error::NotFound));
    /// ```
    pub fn depth(&self, value: &T) -> Result<usize>
    where
        T: Ord,
    {
        let depth = node::depth(self.root(), value);
        if depth.is_err() {
            log::trace!("depth lookup missed in a tree of height {}", self.height());
        }
        depth
    }

    /// Whether the subtrees of every node differ in height by at most one.
    pub fn is_balanced(&self) -> bool {
        node::is_balanced(self.root())
    }

    /// Throws away every node and rebuilds the tree from its values with minimal height.
    pub fn rebalance(&mut self) {
        let before = self.height();
        let mut values = Vec::new();
        node::drain_inorder(self.root.take(), &mut values);
        let len = values.len();

        self.root = balanced(values);
        log::debug!(
            "rebalanced {} values, height {} -> {}",
            len,
            before,
            self.height()
        );
    }

    /// Writes the tree to `out` lying on its side: the right subtree on top, the left one below,
    /// and branches drawn between them. An empty tree writes nothing.
    pub fn pretty_print<W>(&self, out: &mut W) -> io::Result<()>
    where
        W: io::Write,
        T: fmt::Display,
    {
        write!(out, "{}", self)
    }

    fn collect(&self, order: Order) -> Vec<&T> {
        let mut values = Vec::new();
        self.walk(order, &mut |node| values.push(node.value()));
        values
    }

    fn walk<'a>(&'a self, order: Order, visit: &mut dyn FnMut(&'a Node<T>)) {
        let root = match self.root() {
            Some(root) => root,
            None => return,
        };

        match order {
            Order::Level => {
                let mut queue = VecDeque::new();
                queue.push_back(root);
                while let Some(node) = queue.pop_front() {
                    visit(node);
                    queue.extend(node.left());
                    queue.extend(node.right());
                }
            }
            Order::In => inorder(Some(root), visit),
            Order::Pre => {
                visit(root);
                inorder(root.left(), visit);
                inorder(root.right(), visit);
            }
            Order::Post => {
                inorder(root.left(), visit);
                inorder(root.right(), visit);
                visit(root);
            }
        }
    }
}

fn balanced<T>(values: Vec<T>) -> Link<T> {
    let mut slots = values.into_iter().map(Some).collect::<Vec<_>>();
    node::construct_balanced(&mut slots)
}

fn inorder<'a, T>(node: Option<&'a Node<T>>, visit: &mut dyn FnMut(&'a Node<T>)) {
    if let Some(node) = node {
        inorder(node.left(), visit);
        visit(node);
        inorder(node.right(), visit);
    }
}

impl<T: Ord> FromIterator<T> for Tree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::build(iter)
    }
}

impl<T: Ord> Extend<T> for Tree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T: fmt::Display> fmt::Display for Tree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.root() {
            Some(root) => draw(root, "", true, f),
            None => Ok(()),
        }
    }
}

/// Draws the subtree rooted at `node`. `prefix` carries the vertical bars of every ancestor
/// branch that is still open.
fn draw<T: fmt::Display>(
    node: &Node<T>,
    prefix: &str,
    is_left: bool,
    f: &mut fmt::Formatter<'_>,
) -> fmt::Result {
    if let Some(right) = node.right() {
        let prefix = format!("{}{}", prefix, if is_left { "│   " } else { "    " });
        draw(right, &prefix, false, f)?;
    }
    writeln!(
        f,
        "{}{}{}",
        prefix,
        if is_left { "└── " } else { "┌── " },
        node.value()
    )?;
    if let Some(left) = node.left() {
        let prefix = format!("{}{}", prefix, if is_left { "    " } else { "│   " });
        draw(left, &prefix, true, f)?;
    }
    Ok(())
}
