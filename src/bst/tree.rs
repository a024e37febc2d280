use crate::bst::node::Node;
use std::cmp::Ordering;
use std::mem;

pub type Tree<T> = Option<Box<Node<T>>>;

fn remove_min<T>(tree: &mut Tree<T>) -> Option<Box<Node<T>>> {
    let has_left = match tree {
        Some(ref node) => node.left.is_some(),
        None => return None,
    };

    if has_left {
        match tree {
            Some(ref mut node) => remove_min(&mut node.left),
            None => unreachable!(),
        }
    } else {
        tree.take().map(|mut node| {
            *tree = node.right.take();
            node
        })
    }
}

pub fn insert<T>(tree: &mut Tree<T>, value: T) -> bool
where
    T: Ord,
{
    match tree {
        Some(ref mut node) => match value.cmp(&node.value) {
            Ordering::Less => insert(&mut node.left, value),
            Ordering::Greater => insert(&mut node.right, value),
            Ordering::Equal => false,
        },
        None => {
            *tree = Some(Box::new(Node::new(value)));
            true
        },
    }
}

pub fn remove<T>(tree: &mut Tree<T>, value: &T) -> Option<T>
where
    T: Ord,
{
    match tree.take() {
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
        None => None,
    }
}
