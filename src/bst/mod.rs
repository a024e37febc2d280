//! Binary search tree without any rebalancing. Its shape depends entirely on the order of
//! insertions, so sorted input degrades it to a linked list.

mod node;
mod set;
mod tree;

pub use self::set::{BstSet, BstSetIntoIter, BstSetIter, BstSetPreOrderIter};
