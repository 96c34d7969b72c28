//! ## Multisets
//! This module provides a basic multiset implementation backed by a plain vector of occurrences.
//! The key exported data structure is [MultiSet].

use std::fmt;
use std::slice;

/// Multisets containing values of type `T`.
///
/// Every occurrence is stored as its own entry, in the order it was added. Counting is a linear
/// scan, which is fine for the tally sizes this crate deals with.
#[derive(Debug, Clone)]
pub struct MultiSet<T> {
    vec: Vec<T>,
}

impl<T> MultiSet<T> {
    /// Create a new empty multiset.
    pub fn new() -> Self {
        Self { vec: Vec::new() }
    }

    /// Create a new multiset containing all elements from `vec`.
    pub fn of_vec(vec: Vec<T>) -> Self {
        Self { vec }
    }

    /// Compute how many elements are in the multiset overall, including duplications, this is
    /// `O(1)`.
    pub fn len(&self) -> usize {
        self.vec.len()
    }

    /// Check if the set is empty, this is `O(1)`.
    pub fn is_empty(&self) -> bool {
        self.vec.is_empty()
    }

    /// Obtain an iterator over all elements in the set, one item per occurrence in insertion
    /// order.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.vec.iter()
    }

    /// Index into the multiset, the i-th element is the one that was inserted as the i-th one.
    pub fn get(&self, idx: usize) -> Option<&T> {
        self.vec.get(idx)
    }

    /// Add a single occurrence of `item`. This never fails, the return value is always `true`.
    pub fn add(&mut self, item: T) -> bool {
        self.vec.push(item);
        true
    }
}

impl<T: PartialEq> MultiSet<T> {
    /// Add `occurrences` copies of `item` and return the count of `item` from before the call.
    pub fn add_many(&mut self, item: T, occurrences: usize) -> usize
    where
        T: Clone,
    {
        let before = self.count(&item);
        self.vec.extend(std::iter::repeat_n(item, occurrences));
        before
    }

    /// Check whether `item` occurs at least once.
    pub fn contains(&self, item: &T) -> bool {
        self.vec.contains(item)
    }

    /// Count the occurrences of `item`, this is `O(n)`.
    pub fn count(&self, item: &T) -> usize {
        self.vec.iter().filter(|elem| *elem == item).count()
    }

    /// Remove one occurrence of `item`, returns whether there was one to remove. The remaining
    /// elements keep their relative insertion order.
    pub fn remove(&mut self, item: &T) -> bool {
        match self.vec.iter().position(|elem| elem == item) {
            Some(idx) => {
                self.vec.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Iterate over every distinct element once, in order of its first insertion, together with
    /// its number of occurrences.
    pub fn distinct(&self) -> impl Iterator<Item = (&T, usize)> + '_ {
        self.vec
            .iter()
            .enumerate()
            .filter(|&(idx, elem)| !self.vec[..idx].contains(elem))
            .map(|(_, elem)| (elem, self.count(elem)))
    }
}

impl<T> Default for MultiSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

// With equal lengths it suffices to compare the counts of our own elements: if they all match,
// they already account for every occurrence in `other`.
impl<T: PartialEq> PartialEq for MultiSet<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .vec
                .iter()
                .all(|elem| self.count(elem) == other.count(elem))
    }
}

impl<T: Eq> Eq for MultiSet<T> {}

impl<T: PartialEq + fmt::Display> fmt::Display for MultiSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (idx, (elem, count)) in self.distinct().enumerate() {
            if idx > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{elem} x {count}")?;
        }
        write!(f, "]")
    }
}

impl<T> FromIterator<T> for MultiSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            vec: FromIterator::from_iter(iter),
        }
    }
}

impl<T> Extend<T> for MultiSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.vec.extend(iter);
    }
}

impl<T> IntoIterator for MultiSet<T> {
    type Item = T;

    type IntoIter = <Vec<T> as IntoIterator>::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.vec.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a MultiSet<T> {
    type Item = &'a T;

    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
