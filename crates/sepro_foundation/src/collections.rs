//! Persistent label sets with structural sharing.
//!
//! A thin wrapper around `im::OrdSet`, used for the tag and slot names of
//! concepts. Iteration order is the sorted order of the names, so two sets
//! built from the same names always compare, hash, and print identically.

use std::fmt;
use std::iter::FromIterator;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Persistent ordered set of case-sensitive names.
///
/// Cloning is O(1). Modifications return a new set sharing structure
/// with the original.
#[derive(Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LabelSet(im::OrdSet<String>);

impl LabelSet {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self(im::OrdSet::new())
    }

    /// Returns the number of labels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns true if the set contains the label (exact, case-sensitive).
    #[must_use]
    pub fn contains(&self, label: &str) -> bool {
        self.0.contains(label)
    }

    /// Returns a new set with the label inserted.
    #[must_use]
    pub fn insert(&self, label: impl Into<String>) -> Self {
        let mut new = self.0.clone();
        new.insert(label.into());
        Self(new)
    }

    /// Returns a new set with the label removed.
    #[must_use]
    pub fn remove(&self, label: &str) -> Self {
        let mut new = self.0.clone();
        new.remove(label);
        Self(new)
    }

    /// Returns an iterator over the labels in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.0.iter()
    }

    /// Returns a new set that is the union of this set and another.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        Self(self.0.clone().union(other.0.clone()))
    }
}

impl fmt::Debug for LabelSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<S: Into<String>> FromIterator<S> for LabelSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl<'a> IntoIterator for &'a LabelSet {
    type Item = &'a String;
    type IntoIter = im::ordset::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
