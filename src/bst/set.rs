use crate::binary_tree::BinaryTree;
use crate::bst::node::Node;
use crate::bst::tree;
use crate::error::Result;
use crate::linked_list::LinkedList;
use crate::search;
use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};
use std::fmt;
use std::iter::FromIterator;
use std::result;

/// An ordered set implemented using an unbalanced binary search tree.
///
/// Values are placed by descending from the root and are never moved afterwards, except that
/// removing a value with two children replaces it with its in-order successor. Operations take
/// time proportional to the height of the tree, which is logarithmic for random insertion orders
/// but linear for sorted ones. Operations recurse once per level.
///
/// # Examples
///
/// ```
/// use ordered_trees::bst::BstSet;
/// use ordered_trees::BinaryTree;
///
/// let mut set = BstSet::new();
/// for value in 1..=7 {
///     set.insert(value);
/// }
///
/// assert_eq!(set.height(), 7);
/// assert!(!set.is_balanced());
/// assert!(set.is_sorted());
/// ```
#[derive(Clone)]
pub struct BstSet<T> {
    tree: tree::Tree<T>,
    len: usize,
}

impl<T> BstSet<T>
where
    T: Ord,
{
    /// Constructs a new, empty `BstSet<T>`.
    pub fn new() -> Self {
        BstSet {
            tree: None,
            len: 0,
        }
    }

    /// Clears the set, removing all values.
    pub fn clear(&mut self) {
        self.tree = None;
        self.len = 0;
    }

    /// Returns the minimum value of the set. Returns `None` if the set is empty.
    pub fn min(&self) -> Option<&T> {
        search::min(self.tree.as_deref())
    }

    /// Returns the maximum value of the set. Returns `None` if the set is empty.
    pub fn max(&self) -> Option<&T> {
        search::max(self.tree.as_deref())
    }

    /// Returns an iterator over the set. The iterator will yield values using in-order traversal.
    pub fn iter(&self) -> BstSetIter<'_, T> {
        BstSetIter {
            inner: search::Iter::new(self.tree.as_deref(), self.len),
        }
    }

    /// Returns an iterator over the set that yields each value before the values of its subtrees,
    /// starting at the root. Inserting the yielded values into an empty `BstSet<T>` rebuilds a
    /// tree of the same shape.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::bst::BstSet;
    /// use ordered_trees::BinaryTree;
    ///
    /// let mut set = BstSet::new();
    /// set.insert(2);
    /// set.insert(3);
    /// set.insert(1);
    ///
    /// assert_eq!(set.iter_pre_order().collect::<Vec<&u32>>(), vec![&2, &1, &3]);
    /// ```
    pub fn iter_pre_order(&self) -> BstSetPreOrderIter<'_, T> {
        BstSetPreOrderIter {
            inner: search::PreOrderIter::new(self.tree.as_deref(), self.len),
        }
    }
}

impl<T> BinaryTree<T> for BstSet<T>
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
        search::measured_height(self.tree.as_deref())
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

impl<T> IntoIterator for BstSet<T>
where
    T: Ord,
{
    type IntoIter = BstSetIntoIter<T>;
    type Item = T;

    fn into_iter(self) -> Self::IntoIter {
        Self::IntoIter {
            inner: search::IntoIter::new(self.tree, self.len),
        }
    }
}

impl<'a, T> IntoIterator for &'a BstSet<T>
where
    T: 'a + Ord,
{
    type IntoIter = BstSetIter<'a, T>;
    type Item = &'a T;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An owning iterator for `BstSet<T>`.
///
/// This iterator traverses the elements of the set in-order and yields owned values.
pub struct BstSetIntoIter<T> {
    inner: search::IntoIter<Node<T>>,
}

impl<T> Iterator for BstSetIntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for BstSetIntoIter<T> {}

/// An iterator for `BstSet<T>`.
///
/// This iterator traverses the elements of the set in-order and yields immutable references.
pub struct BstSetIter<'a, T> {
    inner: search::Iter<'a, Node<T>>,
}

impl<'a, T> Iterator for BstSetIter<'a, T>
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

impl<'a, T> ExactSizeIterator for BstSetIter<'a, T> where T: 'a {}

/// A pre-order iterator for `BstSet<T>`.
pub struct BstSetPreOrderIter<'a, T> {
    inner: search::PreOrderIter<'a, Node<T>>,
}

impl<'a, T> Iterator for BstSetPreOrderIter<'a, T>
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

impl<'a, T> ExactSizeIterator for BstSetPreOrderIter<'a, T> where T: 'a {}

impl<T> Default for BstSet<T>
where
    T: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for BstSet<T>
where
    T: Ord,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut set = BstSet::new();
        set.extend(iter);
        set
    }
}

impl<T> Extend<T> for BstSet<T>
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

impl<T> PartialEq for BstSet<T>
where
    T: Ord,
{
    fn eq(&self, other: &BstSet<T>) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T> Eq for BstSet<T> where T: Ord {}

impl<T> fmt::Debug for BstSet<T>
where
    T: Ord + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T> Serialize for BstSet<T>
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

impl<'de, T> Deserialize<'de> for BstSet<T>
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
