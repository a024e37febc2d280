use crate::avl_tree::node::Node;
use crate::avl_tree::tree;
use crate::binary_tree::BinaryTree;
use crate::error::Result;
use crate::linked_list::LinkedList;
use crate::search;
use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};
use std::fmt;
use std::iter::FromIterator;
use std::result;

/// An ordered set implemented using an avl tree.
///
/// An avl tree is a self-balancing binary search tree that maintains the invariant that the
/// heights of two child subtrees of any node differ by at most one. Every node caches its height
/// and every insertion and removal restores the invariant on the way back up with at most two
/// rotations per node, so the height of the tree stays below `1.44 * log2(N + 2)`.
///
/// The shared operations come from the `BinaryTree` trait, which has to be in scope.
///
/// # Examples
///
/// ```
/// use ordered_trees::avl_tree::AvlSet;
/// use ordered_trees::{BinaryTree, Error};
///
/// let mut set = AvlSet::new();
/// for value in 1..=7 {
///     set.insert(value);
/// }
///
/// assert_eq!(set.len(), 7);
/// assert_eq!(set.height(), 3);
/// assert!(set.is_balanced());
///
/// assert_eq!(set.path_to(&7).unwrap().to_string(), "[4, 6, 7]");
/// assert_eq!(set.path_to(&8), Err(Error::NotFound));
///
/// assert_eq!(set.remove(&4), Some(4));
/// assert_eq!(set.remove(&4), None);
/// assert_eq!(set.in_order().to_string(), "[1, 2, 3, 5, 6, 7]");
/// ```
#[derive(Clone)]
pub struct AvlSet<T> {
    tree: tree::Tree<T>,
    len: usize,
}

impl<T> AvlSet<T>
where
    T: Ord,
{
    /// Constructs a new, empty `AvlSet<T>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::avl_tree::AvlSet;
    ///
    /// let set: AvlSet<u32> = AvlSet::new();
    /// ```
    pub fn new() -> Self {
        AvlSet {
            tree: None,
            len: 0,
        }
    }

    /// Clears the set, removing all values.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::avl_tree::AvlSet;
    /// use ordered_trees::BinaryTree;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// set.insert(2);
    /// set.clear();
    /// assert!(set.is_empty());
    /// ```
    pub fn clear(&mut self) {
        self.tree = None;
        self.len = 0;
    }

    /// Returns the minimum value of the set. Returns `None` if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::avl_tree::AvlSet;
    /// use ordered_trees::BinaryTree;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// set.insert(3);
    /// assert_eq!(set.min(), Some(&1));
    /// ```
    pub fn min(&self) -> Option<&T> {
        search::min(self.tree.as_deref())
    }

    /// Returns the maximum value of the set. Returns `None` if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::avl_tree::AvlSet;
    /// use ordered_trees::BinaryTree;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// set.insert(3);
    /// assert_eq!(set.max(), Some(&3));
    /// ```
    pub fn max(&self) -> Option<&T> {
        search::max(self.tree.as_deref())
    }

    /// Returns an iterator over the set. The iterator will yield values using in-order traversal.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::avl_tree::AvlSet;
    /// use ordered_trees::BinaryTree;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(3);
    /// set.insert(1);
    ///
    /// let mut iterator = set.iter();
    /// assert_eq!(iterator.next(), Some(&1));
    /// assert_eq!(iterator.next(), Some(&3));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> AvlSetIter<'_, T> {
        AvlSetIter {
            inner: search::Iter::new(self.tree.as_deref(), self.len),
        }
    }

    /// Returns an iterator over the set that yields each value before the values of its subtrees,
    /// starting at the root.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::avl_tree::AvlSet;
    /// use ordered_trees::BinaryTree;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// set.insert(2);
    /// set.insert(3);
    ///
    /// assert_eq!(set.iter_pre_order().collect::<Vec<&u32>>(), vec![&2, &1, &3]);
    /// ```
    pub fn iter_pre_order(&self) -> AvlSetPreOrderIter<'_, T> {
        AvlSetPreOrderIter {
            inner: search::PreOrderIter::new(self.tree.as_deref(), self.len),
        }
    }
}

impl<T> BinaryTree<T> for AvlSet<T>
where
    T: Ord,
{
    fn len(&self) -> usize {
        self.len
    }

    fn is_empty(&self) -> bool {
        self.tree.is_none()
    }

    fn height(&self) -> usize {
        tree::height(&self.tree)
    }

    fn contains(&self, value: &T) -> bool {
        search::get(self.tree.as_deref(), value).is_some()
    }

    fn in_order(&self) -> LinkedList<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    fn path_to(&self, value: &T) -> Result<LinkedList<T>>
    where
        T: Clone,
    {
        search::path_to(self.tree.as_deref(), value)
    }

    fn is_sorted(&self) -> bool {
        search::is_sorted(self.tree.as_deref(), self.len)
    }

    fn is_balanced(&self) -> bool {
        search::is_balanced(self.tree.as_deref())
    }

    fn insert(&mut self, value: T) -> bool {
        let inserted = tree::insert(&mut self.tree, value);
        if inserted {
            self.len += 1;
        }
        inserted
    }

    fn remove(&mut self, value: &T) -> Option<T> {
        let ret = tree::remove(&mut self.tree, value);
        if ret.is_some() {
            self.len -= 1;
        }
        ret
    }
}

impl<T> IntoIterator for AvlSet<T>
where
    T: Ord,
{
    type IntoIter = AvlSetIntoIter<T>;
    type Item = T;

    fn into_iter(self) -> Self::IntoIter {
        Self::IntoIter {
            inner: search::IntoIter::new(self.tree, self.len),
        }
    }
}

impl<'a, T> IntoIterator for &'a AvlSet<T>
where
    T: 'a + Ord,
{
    type IntoIter = AvlSetIter<'a, T>;
    type Item = &'a T;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An owning iterator for `AvlSet<T>`.
///
/// This iterator traverses the elements of the set in-order and yields owned values.
pub struct AvlSetIntoIter<T> {
    inner: search::IntoIter<Node<T>>,
}

impl<T> Iterator for AvlSetIntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for AvlSetIntoIter<T> {}

/// An iterator for `AvlSet<T>`.
///
/// This iterator traverses the elements of the set in-order and yields immutable references.
pub struct AvlSetIter<'a, T> {
    inner: search::Iter<'a, Node<T>>,
}

impl<'a, T> Iterator for AvlSetIter<'a, T>
where
    T: 'a,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, T> ExactSizeIterator for AvlSetIter<'a, T> where T: 'a {}

/// A pre-order iterator for `AvlSet<T>`.
///
/// This iterator yields immutable references, visiting every node before its subtrees.
pub struct AvlSetPreOrderIter<'a, T> {
    inner: search::PreOrderIter<'a, Node<T>>,
}

impl<'a, T> Iterator for AvlSetPreOrderIter<'a, T>
where
    T: 'a,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, T> ExactSizeIterator for AvlSetPreOrderIter<'a, T> where T: 'a {}

impl<T> Default for AvlSet<T>
where
    T: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for AvlSet<T>
where
    T: Ord,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut set = AvlSet::new();
        set.extend(iter);
        set
    }
}

impl<T> Extend<T> for AvlSet<T>
where
    T: Ord,
{
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T> PartialEq for AvlSet<T>
where
    T: Ord,
{
    fn eq(&self, other: &AvlSet<T>) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T> Eq for AvlSet<T> where T: Ord {}

impl<T> fmt::Debug for AvlSet<T>
where
    T: Ord + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T> Serialize for AvlSet<T>
where
    T: Ord + Serialize,
{
    fn serialize<S>(&self, serializer: S) -> result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.iter_pre_order())
    }
}

impl<'de, T> Deserialize<'de> for AvlSet<T>
where
    T: Ord + Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Vec::<T>::deserialize(deserializer).map(|values| values.into_iter().collect())
    }
}
