use crate::bst::tree::Tree;
use crate::search::SearchNode;

/// A struct representing an internal node of an unbalanced binary search tree.
#[derive(Clone)]
pub struct Node<T> {
    pub value: T,
    pub left: Tree<T>,
    pub right: Tree<T>,
}

impl<T> Node<T> {
    pub fn new(value: T) -> Self {
        Node {
            value,
            left: None,
            right: None,
        }
    }
}

impl<T> SearchNode for Node<T> {
    type Value = T;

    fn value(&self) -> &T {
        &self.value
    }

    fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    fn into_parts(self) -> (T, Tree<T>, Tree<T>) {
        (self.value, self.left, self.right)
    }
}
