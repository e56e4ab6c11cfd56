use quickcheck::{Arbitrary, Gen};

mod tree;

/// An enum for the various kinds of "things" to do to
/// a binary search tree in a quicktest.
#[derive(Copy, Clone, Debug)]
pub(crate) enum Op<T> {
    /// Insert the value into the tree
    Insert(T),
    /// Remove the value from the tree
    Delete(T),
    /// Rebuild the whole tree
    Rebalance,
}

impl<T> Arbitrary for Op<T>
where
    T: Arbitrary,
{
    /// Tells quickcheck how to randomly choose an operation. Rebalancing
    /// is rarer so trees get a chance to go lopsided in between.
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 0, 0, 1, 1, 2]).unwrap() {
            0 => Op::Insert(T::arbitrary(g)),
            1 => Op::Delete(T::arbitrary(g)),
            2 => Op::Rebalance,
            _ => unreachable!(),
        }
    }
}
