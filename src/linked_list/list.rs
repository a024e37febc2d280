use crate::error::{Error, Result};
use crate::linked_list::node::{Link, Node};
use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FromIterator;
use std::mem;
use std::ops::{Add, Index, IndexMut};
use std::ptr::NonNull;
use std::result;

/// A sequence implemented using a singly-linked list.
///
/// Every node owns the node after it. The list also keeps a pointer to its last node and its
/// length, so appending to the back, querying the last element, and querying the length are all
/// `O(1)`. Positional access, insertion, and removal walk the list from the front and are `O(N)`.
///
/// The trees in this crate return their traversals as a `LinkedList<T>`.
///
/// # Examples
///
/// ```
/// use ordered_trees::linked_list::LinkedList;
///
/// let mut list = LinkedList::new();
/// list.push_back(1);
/// list.push_back(2);
/// list.push_front(0);
///
/// assert_eq!(list.get(0), Some(&0));
/// assert_eq!(list.back(), Some(&2));
/// assert_eq!(list.len(), 3);
///
/// list.reverse();
/// assert_eq!(list.to_string(), "[2, 1, 0]");
/// ```
pub struct LinkedList<T> {
    head: Link<T>,
    tail: Option<NonNull<Node<T>>>,
    len: usize,
}

// The tail pointer only ever aliases a node owned through `head`.
unsafe impl<T: Send> Send for LinkedList<T> {}
unsafe impl<T: Sync> Sync for LinkedList<T> {}

impl<T> LinkedList<T> {
    /// Constructs a new, empty `LinkedList<T>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::linked_list::LinkedList;
    ///
    /// let list: LinkedList<u32> = LinkedList::new();
    /// ```
    pub fn new() -> Self {
        LinkedList {
            head: None,
            tail: None,
            len: 0,
        }
    }

    fn node(&self, index: usize) -> Option<&Node<T>> {
        let mut curr = self.head.as_deref();
        for _ in 0..index {
            curr = curr?.next.as_deref();
        }
        curr
    }

    fn node_mut(&mut self, index: usize) -> Option<&mut Node<T>> {
        let mut curr = self.head.as_deref_mut();
        for _ in 0..index {
            curr = curr?.next.as_deref_mut();
        }
        curr
    }

    fn push_node_back(&mut self, mut node: Box<Node<T>>) {
        node.next = None;
        let new_tail = NonNull::from(&mut *node);
        match self.tail {
            // SAFETY: `tail` points to the last node of the chain owned by `head`.
            Some(mut tail) => unsafe { tail.as_mut().next = Some(node) },
            None => self.head = Some(node),
        }
        self.tail = Some(new_tail);
        self.len += 1;
    }

    /// Appends a value to the back of the list in `O(1)` time.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::linked_list::LinkedList;
    ///
    /// let mut list = LinkedList::new();
    /// list.push_back(1);
    /// list.push_back(2);
    /// assert_eq!(list.get(1), Some(&2));
    /// ```
    pub fn push_back(&mut self, value: T) {
        self.push_node_back(Box::new(Node::new(value)));
    }

    /// Inserts a value at the front of the list.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::linked_list::LinkedList;
    ///
    /// let mut list = LinkedList::new();
    /// list.push_front(1);
    /// list.push_front(2);
    /// assert_eq!(list.get(0), Some(&2));
    /// ```
    pub fn push_front(&mut self, value: T) {
        let mut node = Box::new(Node {
            value,
            next: self.head.take(),
        });
        if self.tail.is_none() {
            self.tail = Some(NonNull::from(&mut *node));
        }
        self.head = Some(node);
        self.len += 1;
    }

    /// Removes the value at the front of the list. Returns `None` if the list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::linked_list::LinkedList;
    ///
    /// let mut list = LinkedList::new();
    /// list.push_back(1);
    /// assert_eq!(list.pop_front(), Some(1));
    /// assert_eq!(list.pop_front(), None);
    /// ```
    pub fn pop_front(&mut self) -> Option<T> {
        self.head.take().map(|node| {
            let Node { value, next } = *node;
            self.head = next;
            if self.head.is_none() {
                self.tail = None;
            }
            self.len -= 1;
            value
        })
    }

    /// Inserts a value at a particular index, shifting later elements one position to the right.
    /// Returns an error if `index` is greater than the length of the list.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::linked_list::LinkedList;
    ///
    /// let mut list = LinkedList::new();
    /// list.insert(0, 1).unwrap();
    /// list.insert(0, 2).unwrap();
    /// list.insert(1, 3).unwrap();
    /// assert_eq!(list.to_string(), "[2, 3, 1]");
    /// assert!(list.insert(5, 4).is_err());
    /// ```
    pub fn insert(&mut self, index: usize, value: T) -> Result<()> {
        if index > self.len {
            return Err(Error::IndexOutOfBounds {
                index,
                len: self.len,
            });
        }

        if index == self.len {
            self.push_back(value);
        } else if index == 0 {
            self.push_front(value);
        } else {
            let prev = match self.node_mut(index - 1) {
                Some(prev) => prev,
                None => unreachable!(),
            };
            let node = Box::new(Node {
                value,
                next: prev.next.take(),
            });
            prev.next = Some(node);
            self.len += 1;
        }
        Ok(())
    }

    /// Removes the value at a particular index and returns it. Returns an error if `index` is not
    /// less than the length of the list.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::linked_list::LinkedList;
    ///
    /// let mut list: LinkedList<u32> = vec![1, 2, 3].into_iter().collect();
    /// assert_eq!(list.remove(2), Ok(3));
    /// assert_eq!(list.back(), Some(&2));
    /// assert!(list.remove(2).is_err());
    /// ```
    pub fn remove(&mut self, index: usize) -> Result<T> {
        if index >= self.len {
            return Err(Error::IndexOutOfBounds {
                index,
                len: self.len,
            });
        }

        if index == 0 {
            return match self.pop_front() {
                Some(value) => Ok(value),
                None => unreachable!(),
            };
        }

        let prev = match self.node_mut(index - 1) {
            Some(prev) => prev,
            None => unreachable!(),
        };
        let removed = match prev.next.take() {
            Some(node) => node,
            None => unreachable!(),
        };
        let Node { value, next } = *removed;
        prev.next = next;
        if prev.next.is_none() {
            self.tail = Some(NonNull::from(prev));
        }
        self.len -= 1;
        Ok(value)
    }

    /// Returns an immutable reference to the value at a particular index. Returns `None` if the
    /// index is out of bounds. The last element is reached in `O(1)` time.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::linked_list::LinkedList;
    ///
    /// let mut list = LinkedList::new();
    /// list.push_back(1);
    /// assert_eq!(list.get(0), Some(&1));
    /// assert_eq!(list.get(1), None);
    /// ```
    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.len {
            None
        } else if index + 1 == self.len {
            self.back()
        } else {
            self.node(index).map(|node| &node.value)
        }
    }

    /// Returns a mutable reference to the value at a particular index. Returns `None` if the
    /// index is out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::linked_list::LinkedList;
    ///
    /// let mut list = LinkedList::new();
    /// list.push_back(1);
    /// *list.get_mut(0).unwrap() = 2;
    /// assert_eq!(list.get(0), Some(&2));
    /// ```
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index >= self.len {
            None
        } else if index + 1 == self.len {
            self.back_mut()
        } else {
            self.node_mut(index).map(|node| &mut node.value)
        }
    }

    /// Returns the first value of the list, or `None` if it is empty.
    pub fn front(&self) -> Option<&T> {
        self.head.as_ref().map(|node| &node.value)
    }

    /// Returns the last value of the list, or `None` if it is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::linked_list::LinkedList;
    ///
    /// let mut list = LinkedList::new();
    /// assert_eq!(list.back(), None);
    /// list.push_back(1);
    /// list.push_back(2);
    /// assert_eq!(list.back(), Some(&2));
    /// ```
    pub fn back(&self) -> Option<&T> {
        // SAFETY: `tail` points to a node owned by this list and the borrow is tied to `&self`.
        self.tail.map(|tail| unsafe { &(*tail.as_ptr()).value })
    }

    fn back_mut(&mut self) -> Option<&mut T> {
        // SAFETY: as in `back`, with the exclusive borrow tied to `&mut self`.
        self.tail.map(|tail| unsafe { &mut (*tail.as_ptr()).value })
    }

    /// Returns the index of the first value equal to `value`, or `None` if there is no such value.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::linked_list::LinkedList;
    ///
    /// let list: LinkedList<u32> = vec![4, 2, 4].into_iter().collect();
    /// assert_eq!(list.position(&4), Some(0));
    /// assert_eq!(list.position(&2), Some(1));
    /// assert_eq!(list.position(&3), None);
    /// ```
    pub fn position(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().position(|curr| curr == value)
    }

    /// Reverses the list in place by relinking its nodes.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::linked_list::LinkedList;
    ///
    /// let mut list: LinkedList<u32> = vec![1, 2, 3].into_iter().collect();
    /// list.reverse();
    /// assert_eq!(list.iter().collect::<Vec<&u32>>(), vec![&3, &2, &1]);
    /// assert_eq!(list.back(), Some(&1));
    /// ```
    pub fn reverse(&mut self) {
        let mut curr = self.head.take();
        self.tail = curr.as_deref_mut().map(NonNull::from);
        let mut reversed = None;
        while let Some(mut node) = curr {
            curr = node.next.take();
            node.next = reversed;
            reversed = Some(node);
        }
        self.head = reversed;
    }

    /// Returns a new list with copies of the values between `start` (inclusive) and `end`
    /// (exclusive). The range is clamped to the bounds of the list; an empty list is returned if
    /// `start >= end`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::linked_list::LinkedList;
    ///
    /// let list: LinkedList<u32> = vec![1, 2, 3, 4].into_iter().collect();
    /// assert_eq!(list.sublist(1, 3).to_string(), "[2, 3]");
    /// assert_eq!(list.sublist(2, 10).to_string(), "[3, 4]");
    /// assert!(list.sublist(3, 1).is_empty());
    /// ```
    pub fn sublist(&self, start: usize, end: usize) -> LinkedList<T>
    where
        T: Clone,
    {
        self.iter()
            .skip(start)
            .take(end.saturating_sub(start))
            .cloned()
            .collect()
    }

    /// Moves all the values of `other` to the back of the list in `O(1)` time, leaving `other`
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::linked_list::LinkedList;
    ///
    /// let mut list: LinkedList<u32> = vec![1, 2].into_iter().collect();
    /// let mut other: LinkedList<u32> = vec![3, 4].into_iter().collect();
    /// list.append(&mut other);
    /// assert_eq!(list.to_string(), "[1, 2, 3, 4]");
    /// assert!(other.is_empty());
    /// ```
    pub fn append(&mut self, other: &mut LinkedList<T>) {
        let other_head = match other.head.take() {
            Some(node) => node,
            None => return,
        };
        match self.tail {
            // SAFETY: `tail` points to the last node of the chain owned by `head`.
            Some(mut tail) => unsafe { tail.as_mut().next = Some(other_head) },
            None => self.head = Some(other_head),
        }
        self.tail = other.tail.take();
        self.len += mem::replace(&mut other.len, 0);
    }

    /// Splits the list in two at a particular index. The list keeps the values before `at` and
    /// the values from `at` onwards are returned. Returns an error if `at` is greater than the
    /// length of the list.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::linked_list::LinkedList;
    ///
    /// let mut list: LinkedList<u32> = vec![1, 2, 3].into_iter().collect();
    /// let rest = list.split_off(1).unwrap();
    /// assert_eq!(list.to_string(), "[1]");
    /// assert_eq!(rest.to_string(), "[2, 3]");
    /// ```
    pub fn split_off(&mut self, at: usize) -> Result<LinkedList<T>> {
        if at > self.len {
            return Err(Error::IndexOutOfBounds {
                index: at,
                len: self.len,
            });
        }

        if at == 0 {
            return Ok(mem::replace(self, LinkedList::new()));
        }

        let len = self.len;
        let prev = match self.node_mut(at - 1) {
            Some(prev) => prev,
            None => unreachable!(),
        };
        let rest_head = prev.next.take();
        let new_tail = NonNull::from(prev);
        let rest_tail = if rest_head.is_some() { self.tail } else { None };
        self.tail = Some(new_tail);
        self.len = at;

        Ok(LinkedList {
            head: rest_head,
            tail: rest_tail,
            len: len - at,
        })
    }

    /// Inserts all the values of `other` at a particular index, preserving their order. Returns an
    /// error if `index` is greater than the length of the list.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::linked_list::LinkedList;
    ///
    /// let mut list: LinkedList<u32> = vec![1, 4].into_iter().collect();
    /// let other: LinkedList<u32> = vec![2, 3].into_iter().collect();
    /// list.insert_all(1, other).unwrap();
    /// assert_eq!(list.to_string(), "[1, 2, 3, 4]");
    /// ```
    pub fn insert_all(&mut self, index: usize, mut other: LinkedList<T>) -> Result<()> {
        let mut rest = self.split_off(index)?;
        self.append(&mut other);
        self.append(&mut rest);
        Ok(())
    }

    /// Retains only the values for which `predicate` returns `true`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::linked_list::LinkedList;
    ///
    /// let mut list: LinkedList<u32> = (1..=6).collect();
    /// list.retain(|value| value % 2 == 0);
    /// assert_eq!(list.to_string(), "[2, 4, 6]");
    /// assert_eq!(list.back(), Some(&6));
    /// ```
    pub fn retain<F>(&mut self, mut predicate: F)
    where
        F: FnMut(&T) -> bool,
    {
        let mut curr = self.head.take();
        self.tail = None;
        self.len = 0;
        while let Some(mut node) = curr {
            curr = node.next.take();
            if predicate(&node.value) {
                self.push_node_back(node);
            }
        }
    }

    /// Returns the number of elements in the list.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::linked_list::LinkedList;
    ///
    /// let mut list = LinkedList::new();
    /// list.push_back(1);
    /// assert_eq!(list.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::linked_list::LinkedList;
    ///
    /// let list: LinkedList<u32> = LinkedList::new();
    /// assert!(list.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Clears the list, removing all values.
    pub fn clear(&mut self) {
        *self = LinkedList::new();
    }

    /// Returns an iterator over the list.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::linked_list::LinkedList;
    ///
    /// let mut list = LinkedList::new();
    /// list.push_back(1);
    /// list.push_back(2);
    ///
    /// let mut iterator = list.iter();
    /// assert_eq!(iterator.next(), Some(&1));
    /// assert_eq!(iterator.next(), Some(&2));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> LinkedListIter<'_, T> {
        LinkedListIter {
            current: self.head.as_deref(),
            remaining: self.len,
        }
    }

    /// Returns a mutable iterator over the list.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::linked_list::LinkedList;
    ///
    /// let mut list = LinkedList::new();
    /// list.push_back(1);
    /// list.push_back(2);
    ///
    /// for value in &mut list {
    ///     *value += 1;
    /// }
    /// assert_eq!(list.to_string(), "[2, 3]");
    /// ```
    pub fn iter_mut(&mut self) -> LinkedListIterMut<'_, T> {
        LinkedListIterMut {
            current: self.head.as_deref_mut(),
            remaining: self.len,
        }
    }
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        let mut curr = self.head.take();
        while let Some(mut node) = curr {
            curr = node.next.take();
        }
    }
}

impl<T> IntoIterator for LinkedList<T> {
    type IntoIter = LinkedListIntoIter<T>;
    type Item = T;

    fn into_iter(self) -> Self::IntoIter {
        Self::IntoIter { list: self }
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T>
where
    T: 'a,
{
    type IntoIter = LinkedListIter<'a, T>;
    type Item = &'a T;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut LinkedList<T>
where
    T: 'a,
{
    type IntoIter = LinkedListIterMut<'a, T>;
    type Item = &'a mut T;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/// An owning iterator for `LinkedList<T>`.
///
/// This iterator yields owned values from front to back.
pub struct LinkedListIntoIter<T> {
    list: LinkedList<T>,
}

impl<T> Iterator for LinkedListIntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len, Some(self.list.len))
    }
}

impl<T> ExactSizeIterator for LinkedListIntoIter<T> {}

/// An iterator for `LinkedList<T>`.
///
/// This iterator yields immutable references from front to back.
pub struct LinkedListIter<'a, T> {
    current: Option<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iterator for LinkedListIter<'a, T>
where
    T: 'a,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.current.map(|node| {
            self.current = node.next.as_deref();
            self.remaining -= 1;
            &node.value
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> ExactSizeIterator for LinkedListIter<'a, T> where T: 'a {}

/// A mutable iterator for `LinkedList<T>`.
///
/// This iterator yields mutable references from front to back.
pub struct LinkedListIterMut<'a, T> {
    current: Option<&'a mut Node<T>>,
    remaining: usize,
}

impl<'a, T> Iterator for LinkedListIterMut<'a, T>
where
    T: 'a,
{
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        self.current.take().map(|node| {
            self.current = node.next.as_deref_mut();
            self.remaining -= 1;
            &mut node.value
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> ExactSizeIterator for LinkedListIterMut<'a, T> where T: 'a {}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for LinkedList<T>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut list = LinkedList::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<T> Add for LinkedList<T> {
    type Output = LinkedList<T>;

    fn add(mut self, mut other: LinkedList<T>) -> LinkedList<T> {
        self.append(&mut other);
        self
    }
}

impl<T> Index<usize> for LinkedList<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        self.get(index).expect("Error: index out of bounds.")
    }
}

impl<T> IndexMut<usize> for LinkedList<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        self.get_mut(index).expect("Error: index out of bounds.")
    }
}

impl<T> PartialEq for LinkedList<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &LinkedList<T>) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T> Eq for LinkedList<T> where T: Eq {}

impl<T> Hash for LinkedList<T>
where
    T: Hash,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len.hash(state);
        for value in self {
            value.hash(state);
        }
    }
}

impl<T> fmt::Debug for LinkedList<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> fmt::Display for LinkedList<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[")?;
        for (index, value) in self.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", value)?;
        }
        write!(f, "]")
    }
}

impl<T> Serialize for LinkedList<T>
where
    T: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.iter())
    }
}

impl<'de, T> Deserialize<'de> for LinkedList<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Vec::<T>::deserialize(deserializer).map(|values| values.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::LinkedList;
    use crate::error::Error;
    use serde_test::{assert_tokens, Token};
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    fn from_vec(values: Vec<u32>) -> LinkedList<u32> {
        values.into_iter().collect()
    }

    fn hash_of(list: &LinkedList<u32>) -> u64 {
        let mut hasher = DefaultHasher::new();
        list.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_len_empty() {
        let list: LinkedList<u32> = LinkedList::new();
        assert_eq!(list.len(), 0);
    }

    #[test]
    fn test_is_empty() {
        let list: LinkedList<u32> = LinkedList::new();
        assert!(list.is_empty());
        assert_eq!(list.front(), None);
        assert_eq!(list.back(), None);
    }

    #[test]
    fn test_push_back() {
        let mut list = LinkedList::new();
        list.push_back(1);
        list.push_back(2);
        assert_eq!(list.front(), Some(&1));
        assert_eq!(list.back(), Some(&2));
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_push_front_empty_sets_back() {
        let mut list = LinkedList::new();
        list.push_front(1);
        list.push_back(2);
        assert_eq!(list.iter().collect::<Vec<&u32>>(), vec![&1, &2]);
        assert_eq!(list.back(), Some(&2));
    }

    #[test]
    fn test_pop_front_last_clears_back() {
        let mut list = from_vec(vec![1]);
        assert_eq!(list.pop_front(), Some(1));
        assert_eq!(list.back(), None);
        list.push_back(2);
        assert_eq!(list.front(), Some(&2));
        assert_eq!(list.back(), Some(&2));
    }

    #[test]
    fn test_insert() {
        let mut list = LinkedList::new();
        assert_eq!(list.insert(0, 1), Ok(()));
        assert_eq!(list.insert(1, 3), Ok(()));
        assert_eq!(list.insert(1, 2), Ok(()));
        assert_eq!(list.insert(0, 0), Ok(()));
        assert_eq!(list.iter().collect::<Vec<&u32>>(), vec![&0, &1, &2, &3]);
        assert_eq!(list.back(), Some(&3));
    }

    #[test]
    fn test_insert_out_of_bounds() {
        let mut list = from_vec(vec![1]);
        assert_eq!(
            list.insert(2, 5),
            Err(Error::IndexOutOfBounds { index: 2, len: 1 }),
        );
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_remove() {
        let mut list = from_vec(vec![1, 2, 3]);
        assert_eq!(list.remove(1), Ok(2));
        assert_eq!(list.remove(0), Ok(1));
        assert_eq!(list.remove(0), Ok(3));
        assert!(list.is_empty());
        assert_eq!(list.back(), None);
    }

    #[test]
    fn test_remove_last_updates_back() {
        let mut list = from_vec(vec![1, 2, 3]);
        assert_eq!(list.remove(2), Ok(3));
        assert_eq!(list.back(), Some(&2));
        list.push_back(4);
        assert_eq!(list.iter().collect::<Vec<&u32>>(), vec![&1, &2, &4]);
    }

    #[test]
    fn test_remove_out_of_bounds() {
        let mut list: LinkedList<u32> = LinkedList::new();
        assert_eq!(
            list.remove(0),
            Err(Error::IndexOutOfBounds { index: 0, len: 0 }),
        );
    }

    #[test]
    fn test_get_mut() {
        let mut list = from_vec(vec![1, 2, 3]);
        *list.get_mut(0).unwrap() = 4;
        *list.get_mut(2).unwrap() = 5;
        assert_eq!(list.get_mut(3), None);
        assert_eq!(list.iter().collect::<Vec<&u32>>(), vec![&4, &2, &5]);
    }

    #[test]
    fn test_index() {
        let mut list = from_vec(vec![1, 2, 3]);
        list[1] = 5;
        assert_eq!(list[1], 5);
        assert_eq!(list[2], 3);
    }

    #[test]
    #[should_panic(expected = "Error: index out of bounds.")]
    fn test_index_out_of_bounds() {
        let list = from_vec(vec![1]);
        let _value: u32 = list[1];
    }

    #[test]
    fn test_position() {
        let list = from_vec(vec![3, 1, 3]);
        assert_eq!(list.position(&3), Some(0));
        assert_eq!(list.position(&1), Some(1));
        assert_eq!(list.position(&2), None);
    }

    #[test]
    fn test_reverse() {
        let mut list = from_vec(vec![1, 2, 3]);
        list.reverse();
        assert_eq!(list.iter().collect::<Vec<&u32>>(), vec![&3, &2, &1]);
        list.push_back(0);
        assert_eq!(list.iter().collect::<Vec<&u32>>(), vec![&3, &2, &1, &0]);
    }

    #[test]
    fn test_reverse_empty() {
        let mut list: LinkedList<u32> = LinkedList::new();
        list.reverse();
        assert!(list.is_empty());
        assert_eq!(list.back(), None);
    }

    #[test]
    fn test_sublist() {
        let list = from_vec(vec![1, 2, 3, 4, 5]);
        assert_eq!(list.sublist(1, 4), from_vec(vec![2, 3, 4]));
        assert_eq!(list.sublist(0, 100), list);
        assert!(list.sublist(4, 2).is_empty());
        assert!(list.sublist(7, 9).is_empty());
    }

    #[test]
    fn test_append() {
        let mut list = from_vec(vec![1, 2]);
        let mut other = from_vec(vec![3]);
        list.append(&mut other);
        assert_eq!(list, from_vec(vec![1, 2, 3]));
        assert_eq!(list.back(), Some(&3));
        assert!(other.is_empty());
        assert_eq!(other.back(), None);
    }

    #[test]
    fn test_append_to_empty() {
        let mut list = LinkedList::new();
        let mut other = from_vec(vec![1, 2]);
        list.append(&mut other);
        list.push_back(3);
        assert_eq!(list, from_vec(vec![1, 2, 3]));
    }

    #[test]
    fn test_add() {
        let res = from_vec(vec![2, 3, 1]) + from_vec(vec![5, 6, 4]);
        assert_eq!(
            res.iter().collect::<Vec<&u32>>(),
            vec![&2, &3, &1, &5, &6, &4],
        );
        assert_eq!(res.len(), 6);
    }

    #[test]
    fn test_split_off() {
        let mut list = from_vec(vec![1, 2, 3, 4]);
        let mut rest = list.split_off(2).unwrap();
        assert_eq!(list, from_vec(vec![1, 2]));
        assert_eq!(rest, from_vec(vec![3, 4]));
        list.push_back(5);
        rest.push_back(6);
        assert_eq!(list, from_vec(vec![1, 2, 5]));
        assert_eq!(rest, from_vec(vec![3, 4, 6]));
    }

    #[test]
    fn test_split_off_at_ends() {
        let mut list = from_vec(vec![1, 2]);
        let rest = list.split_off(2).unwrap();
        assert!(rest.is_empty());
        assert_eq!(list.back(), Some(&2));

        let rest = list.split_off(0).unwrap();
        assert!(list.is_empty());
        assert_eq!(rest, from_vec(vec![1, 2]));
        assert!(list.split_off(1).is_err());
    }

    #[test]
    fn test_insert_all() {
        let mut list = from_vec(vec![1, 5]);
        list.insert_all(1, from_vec(vec![2, 3, 4])).unwrap();
        assert_eq!(list, from_vec(vec![1, 2, 3, 4, 5]));
        list.insert_all(5, from_vec(vec![6])).unwrap();
        assert_eq!(list.back(), Some(&6));
        assert!(list.insert_all(9, from_vec(vec![0])).is_err());
    }

    #[test]
    fn test_retain() {
        let mut list = from_vec(vec![1, 2, 3, 4, 5]);
        list.retain(|value| *value != 5 && *value != 1);
        assert_eq!(list, from_vec(vec![2, 3, 4]));
        assert_eq!(list.back(), Some(&4));
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn test_clear() {
        let mut list = from_vec(vec![1, 2]);
        list.clear();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
    }

    #[test]
    fn test_into_iter() {
        let list = from_vec(vec![2, 3, 1]);
        let iter = list.into_iter();
        assert_eq!(iter.len(), 3);
        assert_eq!(iter.collect::<Vec<u32>>(), vec![2, 3, 1]);
    }

    #[test]
    fn test_iter_is_restartable() {
        let list = from_vec(vec![2, 3, 1]);
        assert_eq!(list.iter().len(), 3);
        assert_eq!(list.iter().collect::<Vec<&u32>>(), vec![&2, &3, &1]);
        assert_eq!(list.iter().collect::<Vec<&u32>>(), vec![&2, &3, &1]);
    }

    #[test]
    fn test_iter_mut() {
        let mut list = from_vec(vec![2, 3, 1]);
        for value in &mut list {
            *value += 1;
        }
        assert_eq!(list.iter().collect::<Vec<&u32>>(), vec![&3, &4, &2]);
    }

    #[test]
    fn test_eq_and_hash() {
        let list = from_vec(vec![1, 2, 3]);
        assert_eq!(list, list.clone());
        assert_eq!(hash_of(&list), hash_of(&list.clone()));
        assert_ne!(list, from_vec(vec![1, 2]));
        assert_ne!(list, from_vec(vec![1, 2, 4]));
    }

    #[test]
    fn test_display_and_debug() {
        let list = from_vec(vec![1, 2, 3]);
        assert_eq!(list.to_string(), "[1, 2, 3]");
        assert_eq!(format!("{:?}", list), "[1, 2, 3]");
        assert_eq!(LinkedList::<u32>::new().to_string(), "[]");
    }

    #[test]
    fn test_drop_long_list() {
        let list: LinkedList<u32> = (0..1_000_000).collect();
        assert_eq!(list.len(), 1_000_000);
        drop(list);
    }

    #[test]
    fn test_serde_tokens() {
        let list = from_vec(vec![1, 2]);
        assert_tokens(
            &list,
            &[
                Token::Seq { len: Some(2) },
                Token::U32(1),
                Token::U32(2),
                Token::SeqEnd,
            ],
        );
    }
}
