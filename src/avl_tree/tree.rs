use crate::avl_tree::node::Node;
use log::{debug, trace};
use std::cmp::Ordering;
use std::mem;

pub type Tree<T> = Option<Box<Node<T>>>;

pub fn height<T>(tree: &Tree<T>) -> usize {
    match tree {
        None => 0,
        Some(ref node) => node.height,
    }
}

fn rotate_left<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    let mut child = match node.right.take() {
        Some(child) => child,
        None => unreachable!(),
    };
    trace!("rotating left at subtree of height {}", node.height);
    node.right = child.left.take();
    node.update();
    child.left = Some(node);
    child.update();
    child
}

fn rotate_right<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    let mut child = match node.left.take() {
        Some(child) => child,
        None => unreachable!(),
    };
    trace!("rotating right at subtree of height {}", node.height);
    node.left = child.right.take();
    node.update();
    child.right = Some(node);
    child.update();
    child
}

// Recomputes the height of the root of `tree` from its children and restores the balance
// invariant with at most two rotations. Both subtrees must already be balanced.
fn balance<T>(tree: &mut Tree<T>) {
    let mut node = match tree.take() {
        Some(node) => node,
        None => return,
    };

    node.update();

    if node.balance() > 1 {
        if let Some(child) = node.left.take() {
            if child.balance() < 0 {
                debug!("left-right imbalance at subtree of height {}", node.height);
                node.left = Some(rotate_left(child));
            } else {
                node.left = Some(child);
            }
        }
        node = rotate_right(node);
    } else if node.balance() < -1 {
        if let Some(child) = node.right.take() {
            if child.balance() > 0 {
                debug!("right-left imbalance at subtree of height {}", node.height);
                node.right = Some(rotate_right(child));
            } else {
                node.right = Some(child);
            }
        }
        node = rotate_left(node);
    }

    *tree = Some(node);
}

// Detaches the leftmost node of `tree`, rebalancing every ancestor on the way back up.
fn remove_min<T>(tree: &mut Tree<T>) -> Option<Box<Node<T>>> {
    let has_left = match tree {
        Some(ref node) => node.left.is_some(),
        None => return None,
    };

    if has_left {
        let ret = match tree {
            Some(ref mut node) => remove_min(&mut node.left),
            None => unreachable!(),
        };
        balance(tree);
        ret
    } else {
        tree.take().map(|mut node| {
            *tree = node.right.take();
            node
        })
    }
}

/// Inserts `value` into `tree`. Returns `false` without modifying the tree if an equal value is
/// already stored.
pub fn insert<T>(tree: &mut Tree<T>, value: T) -> bool
where
    T: Ord,
{
    let inserted = match tree {
        Some(ref mut node) => match value.cmp(&node.value) {
            Ordering::Less => insert(&mut node.left, value),
            Ordering::Greater => insert(&mut node.right, value),
            Ordering::Equal => return false,
        },
        None => {
            *tree = Some(Box::new(Node::new(value)));
            return true;
        },
    };

    if inserted {
        balance(tree);
    }
    inserted
}

/// Removes the value equal to `value` from `tree` and returns it.
pub fn remove<T>(tree: &mut Tree<T>, value: &T) -> Option<T>
where
    T: Ord,
{
    let ret = match tree.take() {
        Some(mut node) => match value.cmp(&node.value) {
            Ordering::Less => {
                let ret = remove(&mut node.left, value);
                *tree = Some(node);
                ret
            },
            Ordering::Greater => {
                let ret = remove(&mut node.right, value);
                *tree = Some(node);
                ret
            },
            Ordering::Equal => match (node.left.take(), node.right.take()) {
                (None, right) => {
                    *tree = right;
                    Some(node.value)
                },
                (left, None) => {
                    *tree = left;
                    Some(node.value)
                },
                (left, mut right) => {
                    let successor = match remove_min(&mut right) {
                        Some(successor) => successor,
                        None => unreachable!(),
                    };
                    node.left = left;
                    node.right = right;
                    let ret = mem::replace(&mut node.value, successor.value);
                    *tree = Some(node);
                    Some(ret)
                },
            },
        },
        None => return None,
    };

    if ret.is_some() {
        balance(tree);
    }
    ret
}
