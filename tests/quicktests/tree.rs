use balanced_bst::{node, Error, Node, Tree};

use std::collections::{BTreeSet, HashSet};

use quickcheck_macros::quickcheck;

use crate::Op;

/// Applies a set of operations to a tree and a set.
/// This way we can ensure that after a random smattering of inserts
/// and deletes we have the same values in both.
fn do_ops<T>(ops: &[Op<T>], tree: &mut Tree<T>, set: &mut BTreeSet<T>)
where
    T: Ord + Clone,
{
    for op in ops {
        match op {
            Op::Insert(x) => {
                tree.insert(x.clone());
                set.insert(x.clone());
            }
            Op::Delete(x) => {
                assert_eq!(tree.delete(x).is_some(), set.remove(x));
            }
            Op::Rebalance => {
                tree.rebalance();
                assert!(tree.is_balanced());
            }
        }
    }
}

/// Checks that every value under `node` lies strictly between `low` and `high`.
fn is_search_tree<T: Ord>(node: Option<&Node<T>>, low: Option<&T>, high: Option<&T>) -> bool {
    match node {
        None => true,
        Some(n) => {
            low.map_or(true, |low| low < n.value())
                && high.map_or(true, |high| n.value() < high)
                && is_search_tree(n.left(), low, Some(n.value()))
                && is_search_tree(n.right(), Some(n.value()), high)
        }
    }
}

/// Checks the height difference at every node directly instead of going through
/// `is_balanced`.
fn heights_within_one<T>(node: Option<&Node<T>>) -> bool {
    match node {
        None => true,
        Some(n) => {
            (node::height(n.left()) - node::height(n.right())).abs() <= 1
                && heights_within_one(n.left())
                && heights_within_one(n.right())
        }
    }
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    let mut set = BTreeSet::new();

    do_ops(&ops, &mut tree, &mut set);
    tree.inorder() == set.iter().collect::<Vec<_>>()
        && tree.len() == set.len()
        && is_search_tree(tree.root(), None, None)
}

#[quickcheck]
fn inorder_is_strictly_ascending(xs: Vec<i16>, deletes: Vec<i16>) -> bool {
    let mut tree = Tree::new();
    tree.extend(xs);
    for x in &deletes {
        tree.delete(x);
    }

    tree.inorder().windows(2).all(|w| w[0] < w[1])
}

#[quickcheck]
fn build_is_balanced(xs: Vec<i32>) -> bool {
    let tree = Tree::build(xs);
    tree.is_balanced()
        && heights_within_one(tree.root())
        && is_search_tree(tree.root(), None, None)
}

#[quickcheck]
fn rebalance_is_balanced(xs: Vec<i32>) -> bool {
    let mut tree = Tree::new();
    tree.extend(xs);
    let before = tree.inorder().into_iter().copied().collect::<Vec<_>>();

    tree.rebalance();
    tree.is_balanced()
        && heights_within_one(tree.root())
        && tree.inorder() == before.iter().collect::<Vec<_>>()
}

#[quickcheck]
fn round_trip_through_inorder(xs: Vec<i32>) -> bool {
    let mut tree = Tree::new();
    tree.extend(xs);

    let rebuilt = Tree::build(tree.inorder().into_iter().copied());
    rebuilt.inorder() == tree.inorder()
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x);
    }

    xs.iter().all(|x| tree.find(x).map(Node::value) == Some(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree = Tree::build(xs.iter().copied());
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| tree.find(x).is_none() && tree.depth(x) == Err(Error::NotFound))
}

#[quickcheck]
fn delete_removes_exactly_one(xs: Vec<i8>, x: i8) -> bool {
    let mut tree = Tree::build(xs);
    let before = tree.inorder().into_iter().copied().collect::<Vec<_>>();

    let deleted = tree.delete(&x);
    let after = tree.inorder().into_iter().copied().collect::<Vec<_>>();

    if before.contains(&x) {
        let mut expected = before;
        expected.retain(|y| *y != x);
        deleted == Some(x) && after == expected
    } else {
        deleted.is_none() && after == before
    }
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x);
    }
    for delete in &deletes {
        tree.delete(delete);
    }

    let mut still_present = xs;
    still_present.retain(|x| !deletes.contains(x));

    deletes.iter().all(|x| tree.find(x).is_none())
        && still_present.iter().all(|x| tree.find(x).is_some())
}

#[quickcheck]
fn depth_matches_path_length(xs: Vec<i8>) -> bool {
    let tree = Tree::build(xs.iter().copied());

    xs.iter().all(|x| {
        let mut depth = 0;
        let mut node = tree.root();
        while let Some(n) = node {
            if n.value() == x {
                break;
            }
            node = if x < n.value() { n.left() } else { n.right() };
            depth += 1;
        }
        tree.depth(x) == Ok(depth)
    })
}
