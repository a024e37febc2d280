//! Singly-linked list that keeps a pointer to its last node so that appending is constant time.

mod list;
mod node;

pub use self::list::{LinkedList, LinkedListIntoIter, LinkedListIter, LinkedListIterMut};
