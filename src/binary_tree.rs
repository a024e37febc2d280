//! The operations shared by every binary search tree in the crate.

use crate::error::Result;
use crate::linked_list::LinkedList;

/// A binary search tree storing distinct values ordered by `Ord`.
///
/// `BstSet` and `AvlSet` implement this trait with identical semantics; only the shape of the
/// tree, and therefore `height` and `is_balanced`, differ between them.
///
/// # Examples
///
/// ```
/// use ordered_trees::avl_tree::AvlSet;
/// use ordered_trees::bst::BstSet;
/// use ordered_trees::BinaryTree;
///
/// fn fill<B: BinaryTree<u32>>(tree: &mut B) {
///     for value in 1..=7 {
///         tree.insert(value);
///     }
/// }
///
/// let mut bst = BstSet::new();
/// let mut avl = AvlSet::new();
/// fill(&mut bst);
/// fill(&mut avl);
///
/// assert_eq!(bst.in_order(), avl.in_order());
/// assert_eq!(bst.height(), 7);
/// assert_eq!(avl.height(), 3);
/// ```
pub trait BinaryTree<T>
where
    T: Ord,
{
    /// Returns the number of values in the tree.
    fn len(&self) -> usize;

    /// Returns `true` if the tree has no values.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the height of the tree. An empty tree has height 0 and any other tree has height
    /// one more than the taller of its two subtrees.
    fn height(&self) -> usize;

    /// Checks if a value exists in the tree.
    fn contains(&self, value: &T) -> bool;

    /// Returns copies of the values of the tree in ascending order.
    fn in_order(&self) -> LinkedList<T>
    where
        T: Clone;

    /// Returns copies of the values on the path from the root to `value`, both included. Returns
    /// `Error::NotFound` if `value` is not in the tree.
    fn path_to(&self, value: &T) -> Result<LinkedList<T>>
    where
        T: Clone;

    /// Checks that an in-order traversal of the tree never decreases.
    fn is_sorted(&self) -> bool;

    /// Checks that the heights of the two subtrees of every node differ by at most one. Heights
    /// are measured from the shape of the tree.
    fn is_balanced(&self) -> bool;

    /// Inserts a value into the tree. Returns `false` and leaves the tree unchanged if an equal
    /// value is already present.
    fn insert(&mut self, value: T) -> bool;

    /// Removes a value from the tree and returns the stored value. Returns `None` and leaves the
    /// tree unchanged if the value is not present.
    fn remove(&mut self, value: &T) -> Option<T>;
}

/// Builds a tree by inserting copies of `values` one at a time, in order.
///
/// # Examples
///
/// ```
/// use ordered_trees::avl_tree::AvlSet;
/// use ordered_trees::binary_tree;
/// use ordered_trees::BinaryTree;
///
/// let tree: AvlSet<u32> = binary_tree::build(&[5, 3, 8, 1, 4, 7, 9]);
/// assert_eq!(tree.len(), 7);
/// assert_eq!(tree.height(), 3);
/// ```
pub fn build<B, T>(values: &[T]) -> B
where
    B: BinaryTree<T> + Default,
    T: Ord + Clone,
{
    let mut tree = B::default();
    for value in values {
        tree.insert(value.clone());
    }
    tree
}
