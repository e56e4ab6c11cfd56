//! The building block of a [`Tree`][crate::Tree] along with the recursive algorithms that walk
//! and rewire chains of nodes.
//!
//! Every mutating algorithm here takes ownership of a subtree and hands back the (possibly new)
//! root of that subtree. Callers reattach whatever comes back to the link they took it from, so
//! no node ever needs a pointer back to its parent.

use std::cmp::Ordering;

use crate::error::{Error, Result};

/// An owned, possibly empty, subtree.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// A single value in a [`Tree`][crate::Tree] and its two optional subtrees.
///
/// Nodes compare by value alone, so two nodes are equal exactly when their values are equal no
/// matter what hangs below them.
#[derive(Clone, Debug)]
pub struct Node<T> {
    value: T,
    left: Link<T>,
    right: Link<T>,
}

impl<T> Node<T> {
    /// Creates a leaf holding `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::Node;
    ///
    /// let node = Node::new(7);
    /// assert_eq!(node.value(), &7);
    /// assert!(node.is_leaf());
    /// ```
    pub fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    /// The value stored in this node.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Consumes the node and hands back its value. Any children are dropped along with it.
    pub fn into_value(self) -> T {
        self.value
    }

    /// The root of the subtree holding every value smaller than this one.
    pub fn left(&self) -> Option<&Node<T>> {
        self.left.as_deref()
    }

    /// The root of the subtree holding every value larger than this one.
    pub fn right(&self) -> Option<&Node<T>> {
        self.right.as_deref()
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Number of edges on the longest path from this node down to a leaf. A leaf has a height of
    /// zero.
    pub fn height(&self) -> isize {
        1 + height(self.left()).max(height(self.right()))
    }

    /// Whether the heights of the two subtrees differ by at most one here and at every node
    /// below.
    pub fn is_balanced(&self) -> bool {
        (height(self.left()) - height(self.right())).abs() <= 1
            && is_balanced(self.right())
            && is_balanced(self.left())
    }

    /// Finds the node holding `value` in the subtree rooted here.
    pub(crate) fn find(&self, value: &T) -> Option<&Node<T>>
    where
        T: Ord,
    {
        match value.cmp(&self.value) {
            Ordering::Less => self.left()?.find(value),
            Ordering::Equal => Some(self),
            Ordering::Greater => self.right()?.find(value),
        }
    }
}

impl<T: Ord> PartialEq for Node<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
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
        self.value.cmp(&other.value)
    }
}

/// Height of a possibly empty subtree. An empty subtree has a height of `-1` so that a lone leaf
/// comes out as `0`.
pub fn height<T>(node: Option<&Node<T>>) -> isize {
    node.map_or(-1, Node::height)
}

/// Whether a possibly empty subtree is balanced. Empty subtrees always are.
pub fn is_balanced<T>(node: Option<&Node<T>>) -> bool {
    node.map_or(true, Node::is_balanced)
}

/// Number of edges between `node` and the node holding `value`.
pub(crate) fn depth<T: Ord>(node: Option<&Node<T>>, value: &T) -> Result<usize> {
    let node = node.ok_or(Error::NotFound)?;
    match value.cmp(&node.value) {
        Ordering::Less => depth(node.left(), value).map(|d| d + 1),
        Ordering::Equal => Ok(0),
        Ordering::Greater => depth(node.right(), value).map(|d| d + 1),
    }
}

/// Hangs `new` off the subtree in the position its value dictates and returns the subtree root.
/// A value already present leaves the subtree untouched.
pub(crate) fn insert<T: Ord>(link: Link<T>, new: Box<Node<T>>) -> Link<T> {
    let mut root = match link {
        None => return Some(new),
        Some(root) => root,
    };

    match new.value.cmp(&root.value) {
        Ordering::Less => root.left = insert(root.left.take(), new),
        Ordering::Greater => root.right = insert(root.right.take(), new),
        Ordering::Equal => {}
    }

    Some(root)
}

/// Removes `value` from the subtree. Returns the new subtree root and the value that left the
/// tree, if any.
///
/// A node with two children keeps its place: its value is swapped for that of its in-order
/// successor, and the successor's node is unlinked instead.
pub(crate) fn delete<T: Ord>(link: Link<T>, value: &T) -> (Link<T>, Option<T>) {
    let mut root = match link {
        None => return (None, None),
        Some(root) => root,
    };

    match value.cmp(&root.value) {
        Ordering::Less => {
            let (left, deleted) = delete(root.left.take(), value);
            root.left = left;
            (Some(root), deleted)
        }
        Ordering::Greater => {
            let (right, deleted) = delete(root.right.take(), value);
            root.right = right;
            (Some(root), deleted)
        }
        Ordering::Equal => match (root.left.take(), root.right.take()) {
            (None, right) => (right, Some(root.value)),
            (left, None) => (left, Some(root.value)),
            (Some(left), Some(right)) => {
                let (right, successor) = detach_leftmost(right);
                root.left = Some(left);
                root.right = right;
                let deleted = std::mem::replace(&mut root.value, successor);
                (Some(root), Some(deleted))
            }
        },
    }
}

/// Unlinks the smallest node of the subtree, splicing its right child into the link it leaves
/// behind. Returns the remaining subtree and the smallest value.
fn detach_leftmost<T>(mut node: Box<Node<T>>) -> (Link<T>, T) {
    match node.left.take() {
        None => {
            let Node { value, right, .. } = *node;
            (right, value)
        }
        Some(left) => {
            let (left, smallest) = detach_leftmost(left);
            node.left = left;
            (Some(node), smallest)
        }
    }
}

/// Builds a height-balanced subtree out of sorted, duplicate-free values by repeatedly rooting
/// each range at its midpoint (rounding down).
pub(crate) fn construct_balanced<T>(values: &mut [Option<T>]) -> Link<T> {
    if values.is_empty() {
        return None;
    }

    let mid = (values.len() - 1) / 2;
    let (left, rest) = values.split_at_mut(mid);
    let (middle, right) = rest.split_first_mut()?;

    let mut node = Box::new(Node::new(middle.take()?));
    node.left = construct_balanced(left);
    node.right = construct_balanced(right);
    Some(node)
}

/// Consumes the subtree, pushing its values onto `out` in ascending order.
pub(crate) fn drain_inorder<T>(link: Link<T>, out: &mut Vec<T>) {
    if let Some(node) = link {
        let Node { value, left, right } = *node;
        drain_inorder(left, out);
        out.push(value);
        drain_inorder(right, out);
    }
}
