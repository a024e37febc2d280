pub type Link<T> = Option<Box<Node<T>>>;

/// A struct representing a node of a linked list.
pub struct Node<T> {
    pub value: T,
    pub next: Link<T>,
}

impl<T> Node<T> {
    pub fn new(value: T) -> Self {
        Node { value, next: None }
    }
}
