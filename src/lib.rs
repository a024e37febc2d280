//! Binary search trees that share a single contract, and the singly-linked list they return their
//! traversals in.
//!
//! - `bst::BstSet` is a plain binary search tree whose shape depends on insertion order.
//! - `avl_tree::AvlSet` rebalances itself with rotations so its height stays logarithmic.
//! - `linked_list::LinkedList` is the sequence type produced by `in_order` and `path_to`.
//!
//! Both trees implement `BinaryTree`, so code can be written once for either of them.

mod search;
pub mod avl_tree;
pub mod binary_tree;
pub mod bst;
pub mod error;
pub mod linked_list;

pub use crate::binary_tree::BinaryTree;
pub use crate::error::{Error, Result};
