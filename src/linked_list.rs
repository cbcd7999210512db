use std::fmt;

/// A singly linked list that always holds at least one value.
///
/// The list is identified by its head node: every node owns the rest of the chain through its
/// `next` link, so a `LinkedList<T>` is both "the first node" and "the whole list".
pub struct LinkedList<T> {
    value: T,
    next: Link<T>,
}

/// Owning pointer to the next node. Tears the chain down iteratively on drop.
struct Link<T>(Option<Box<LinkedList<T>>>);

impl<T> LinkedList<T> {
    /// Creates a single-node list holding `value`.
    pub fn new(value: T) -> LinkedList<T> {
        LinkedList { value, next: Link(None) }
    }

    /// Builds a list from `values` in order, or `None` if there is nothing to put in it.
    pub fn from_vec(values: Vec<T>) -> Option<LinkedList<T>> {
        let mut values = values.into_iter();
        let mut list = LinkedList::new(values.next()?);
        list.extend(values);
        Some(list)
    }

    /// Attaches `value` after the last node reachable from `self`.
    pub fn append(&mut self, value: T) {
        let mut current = &mut self.next.0;
        while let Some(node) = current {
            current = &mut node.next.0;
        }
        *current = Some(Box::new(LinkedList::new(value)));
    }

    /// Returns a new head holding `value` whose next node is `head`.
    ///
    /// Nothing reachable from `head` is modified; callers rebind their list to the returned value.
    pub fn prepend(head: LinkedList<T>, value: T) -> LinkedList<T> {
        LinkedList { value, next: Link(Some(Box::new(head))) }
    }

    /// Number of nodes reachable from `self`, counting `self`.
    pub fn len(&self) -> usize {
        let mut count = 1;
        let mut current = &self.next.0;
        while let Some(node) = current {
            count += 1;
            current = &node.next.0;
        }
        count
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn value_mut(&mut self) -> &mut T {
        &mut self.value
    }

    /// The rest of the chain after this node.
    pub fn next_node(&self) -> Option<&LinkedList<T>> {
        self.next.0.as_deref()
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter { current: Some(self) }
    }

    /// Copies the values into a new vector, head to tail.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let mut current = &mut self.next.0;
        while let Some(node) = current {
            current = &mut node.next.0;
        }
        for value in iter {
            let node = current.insert(Box::new(LinkedList::new(value)));
            current = &mut node.next.0;
        }
    }
}

impl<T: fmt::Display> fmt::Display for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}", self.value)?;
        let mut current = &self.next.0;
        while let Some(node) = current {
            write!(f, " -> {}", node.value)?;
            current = &node.next.0;
        }
        write!(f, "]")
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Drop for Link<T> {
    fn drop(&mut self) {
        let mut current = self.0.take();
        while let Some(mut node) = current {
            current = node.next.0.take();
        }
    }
}

impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        let mut new_list = LinkedList::new(self.value.clone());
        new_list.extend(self.iter().skip(1).cloned());
        new_list
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        let mut current1 = Some(self);
        let mut current2 = Some(other);
        while let (Some(node1), Some(node2)) = (current1, current2) {
            if node1.value != node2.value {
                return false;
            }
            current1 = node1.next_node();
            current2 = node2.next_node();
        }
        current1.is_none() && current2.is_none()
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

/// Borrowing iterator over the values, head to tail.
pub struct Iter<'a, T> {
    current: Option<&'a LinkedList<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.current?;
        self.current = node.next_node();
        Some(&node.value)
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Consuming iterator over the values, head to tail.
pub struct IntoIter<T> {
    current: Option<LinkedList<T>>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let LinkedList { value, mut next } = self.current.take()?;
        self.current = next.0.take().map(|node| *node);
        Some(value)
    }
}

impl<T> IntoIterator for LinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { current: Some(self) }
    }
}
