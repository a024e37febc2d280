//! Read-only descent and traversal routines shared by every binary search tree in the crate.
//!
//! The trees only differ in how they restructure themselves on insertion and removal, so lookups,
//! paths, traversals, and the structural checks are written once against `SearchNode`.

use crate::error::{Error, Result};
use crate::linked_list::LinkedList;
use std::cmp::{self, Ordering};

/// A node of a binary search tree that owns its children.
pub trait SearchNode: Sized {
    type Value;

    fn value(&self) -> &Self::Value;

    fn left(&self) -> Option<&Self>;

    fn right(&self) -> Option<&Self>;

    fn into_parts(self) -> (Self::Value, Option<Box<Self>>, Option<Box<Self>>);
}

pub fn get<'a, N>(mut curr: Option<&'a N>, value: &N::Value) -> Option<&'a N::Value>
where
    N: SearchNode,
    N::Value: Ord,
{
    while let Some(node) = curr {
        match value.cmp(node.value()) {
            Ordering::Less => curr = node.left(),
            Ordering::Greater => curr = node.right(),
            Ordering::Equal => return Some(node.value()),
        }
    }
    None
}

/// Returns copies of the values visited while descending from the root to `value`, both included.
pub fn path_to<N>(mut curr: Option<&N>, value: &N::Value) -> Result<LinkedList<N::Value>>
where
    N: SearchNode,
    N::Value: Ord + Clone,
{
    let mut path = LinkedList::new();
    while let Some(node) = curr {
        path.push_back(node.value().clone());
        match value.cmp(node.value()) {
            Ordering::Less => curr = node.left(),
            Ordering::Greater => curr = node.right(),
            Ordering::Equal => return Ok(path),
        }
    }
    Err(Error::NotFound)
}

pub fn min<N>(tree: Option<&N>) -> Option<&N::Value>
where
    N: SearchNode,
{
    let mut curr = tree?;
    while let Some(left) = curr.left() {
        curr = left;
    }
    Some(curr.value())
}

pub fn max<N>(tree: Option<&N>) -> Option<&N::Value>
where
    N: SearchNode,
{
    let mut curr = tree?;
    while let Some(right) = curr.right() {
        curr = right;
    }
    Some(curr.value())
}

/// Height of the tree computed from its shape, ignoring anything cached in the nodes.
pub fn measured_height<N>(tree: Option<&N>) -> usize
where
    N: SearchNode,
{
    tree.map_or(0, |node| {
        cmp::max(measured_height(node.left()), measured_height(node.right())) + 1
    })
}

// `None` as soon as some subtree's children differ in height by more than one.
fn balanced_height<N>(tree: Option<&N>) -> Option<usize>
where
    N: SearchNode,
{
    match tree {
        None => Some(0),
        Some(node) => {
            let left = balanced_height(node.left())?;
            let right = balanced_height(node.right())?;
            let (lo, hi) = (cmp::min(left, right), cmp::max(left, right));
            if hi - lo > 1 {
                None
            } else {
                Some(hi + 1)
            }
        },
    }
}

pub fn is_balanced<N>(tree: Option<&N>) -> bool
where
    N: SearchNode,
{
    balanced_height(tree).is_some()
}

/// Checks that an in-order walk of the tree never decreases.
pub fn is_sorted<N>(tree: Option<&N>, len: usize) -> bool
where
    N: SearchNode,
    N::Value: Ord,
{
    let mut iter = Iter::new(tree, len);
    let mut prev = match iter.next() {
        Some(value) => value,
        None => return true,
    };
    for curr in iter {
        if curr < prev {
            return false;
        }
        prev = curr;
    }
    true
}

/// In-order iterator over borrowed values.
pub struct Iter<'a, N> {
    current: Option<&'a N>,
    stack: Vec<&'a N>,
    remaining: usize,
}

impl<'a, N> Iter<'a, N>
where
    N: SearchNode,
{
    pub fn new(tree: Option<&'a N>, len: usize) -> Self {
        Iter {
            current: tree,
            stack: Vec::new(),
            remaining: len,
        }
    }
}

impl<'a, N> Iterator for Iter<'a, N>
where
    N: 'a + SearchNode,
{
    type Item = &'a N::Value;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.current {
            self.current = node.left();
            self.stack.push(node);
        }
        self.stack.pop().map(|node| {
            self.current = node.right();
            self.remaining = self.remaining.saturating_sub(1);
            node.value()
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

/// Pre-order (root, left, right) iterator over borrowed values.
pub struct PreOrderIter<'a, N> {
    stack: Vec<&'a N>,
    remaining: usize,
}

impl<'a, N> PreOrderIter<'a, N>
where
    N: SearchNode,
{
    pub fn new(tree: Option<&'a N>, len: usize) -> Self {
        PreOrderIter {
            stack: tree.into_iter().collect(),
            remaining: len,
        }
    }
}

impl<'a, N> Iterator for PreOrderIter<'a, N>
where
    N: 'a + SearchNode,
{
    type Item = &'a N::Value;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        if let Some(right) = node.right() {
            self.stack.push(right);
        }
        if let Some(left) = node.left() {
            self.stack.push(left);
        }
        self.remaining = self.remaining.saturating_sub(1);
        Some(node.value())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

/// In-order iterator that consumes the tree and yields owned values.
pub struct IntoIter<N>
where
    N: SearchNode,
{
    current: Option<Box<N>>,
    stack: Vec<(N::Value, Option<Box<N>>)>,
    remaining: usize,
}

impl<N> IntoIter<N>
where
    N: SearchNode,
{
    pub fn new(tree: Option<Box<N>>, len: usize) -> Self {
        IntoIter {
            current: tree,
            stack: Vec::new(),
            remaining: len,
        }
    }
}

impl<N> Iterator for IntoIter<N>
where
    N: SearchNode,
{
    type Item = N::Value;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.current.take() {
            let (value, left, right) = (*node).into_parts();
            self.current = left;
            self.stack.push((value, right));
        }
        self.stack.pop().map(|(value, right)| {
            self.current = right;
            self.remaining = self.remaining.saturating_sub(1);
            value
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}
