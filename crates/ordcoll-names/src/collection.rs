//! Name collection
//!
//! Provides [`NameCollection`], an owned ordered list of strings with
//! duplicate-tolerant lookup helpers.

use std::ops::Index;

use ordcoll_core::{CollectionError, Result};
use serde::{Deserialize, Serialize};

/// Ordered list of schema names
///
/// Duplicates are permitted. Positions are zero-based and contiguous;
/// every mutation keeps them so. Not internally synchronized: share behind
/// a lock if several owners must mutate it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NameCollection {
    names: Vec<String>,
}

/// Borrowing iterator over a [`NameCollection`]
#[derive(Debug, Clone)]
pub struct Names<'a> {
    inner: std::slice::Iter<'a, String>,
}

impl<'a> Iterator for Names<'a> {
    type Item = &'a str;

    #[inline]
    fn next(&mut self) -> Option<&'a str> {
        self.inner.next().map(String::as_str)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Names<'_> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(String::as_str)
    }
}

impl ExactSizeIterator for Names<'_> {}

impl NameCollection {
    /// Create empty collection
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self { names: Vec::new() }
    }

    /// Create empty collection with room for `capacity` names
    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            names: Vec::with_capacity(capacity),
        }
    }

    /// Append a name, returning its position
    pub fn add(&mut self, name: impl Into<String>) -> usize {
        let name = name.into();
        let index = self.names.len();
        tracing::trace!(index, name = %name, "name added");
        self.names.push(name);
        index
    }

    /// Append every name in input order
    pub fn add_range<I>(&mut self, names: I)
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        for name in names {
            self.add(name);
        }
    }

    /// Append every name of another collection
    pub fn add_collection(&mut self, other: &NameCollection) {
        self.add_range(other.iter());
    }

    /// Insert a name at `index`
    ///
    /// `index == len()` appends.
    ///
    /// # Errors
    /// Returns [`CollectionError::IndexOutOfRange`] if `index > len()`
    pub fn insert(&mut self, index: usize, name: impl Into<String>) -> Result<()> {
        if index > self.names.len() {
            return Err(CollectionError::index_out_of_range(index, self.names.len()));
        }
        let name = name.into();
        tracing::trace!(index, name = %name, "name inserted");
        self.names.insert(index, name);
        Ok(())
    }

    /// Name at `index`
    ///
    /// # Errors
    /// Returns [`CollectionError::IndexOutOfRange`] if `index >= len()`
    pub fn get(&self, index: usize) -> Result<&str> {
        self.names
            .get(index)
            .map(String::as_str)
            .ok_or_else(|| CollectionError::index_out_of_range(index, self.names.len()))
    }

    /// Replace the name at `index`, returning the previous one
    ///
    /// # Errors
    /// Returns [`CollectionError::IndexOutOfRange`] if `index >= len()`
    pub fn set(&mut self, index: usize, name: impl Into<String>) -> Result<String> {
        let len = self.names.len();
        let slot = self
            .names
            .get_mut(index)
            .ok_or_else(|| CollectionError::index_out_of_range(index, len))?;
        let name = name.into();
        tracing::trace!(index, name = %name, "name replaced");
        Ok(std::mem::replace(slot, name))
    }

    /// Position of the first occurrence of `name`
    #[must_use]
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }

    /// Check if `name` occurs anywhere
    #[inline]
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.index_of(name).is_some()
    }

    /// Remove the first occurrence of `name`, returning its former position
    ///
    /// # Errors
    /// Returns [`CollectionError::NotFound`] if `name` is absent
    pub fn remove(&mut self, name: &str) -> Result<usize> {
        let index = self
            .index_of(name)
            .ok_or_else(|| CollectionError::not_found(name))?;
        self.names.remove(index);
        tracing::trace!(index, name, "name removed");
        Ok(index)
    }

    /// Remove the name at `index`
    ///
    /// # Errors
    /// Returns [`CollectionError::IndexOutOfRange`] if `index >= len()`
    pub fn remove_at(&mut self, index: usize) -> Result<String> {
        if index >= self.names.len() {
            return Err(CollectionError::index_out_of_range(index, self.names.len()));
        }
        let name = self.names.remove(index);
        tracing::trace!(index, name = %name, "name removed");
        Ok(name)
    }

    /// Copy every name into `target`, starting at `start`
    ///
    /// `target` is left untouched on error.
    ///
    /// # Errors
    /// - [`CollectionError::IndexOutOfRange`] if `start > target.len()`
    /// - [`CollectionError::InsufficientCapacity`] if fewer than `len()`
    ///   slots follow `start`
    pub fn copy_to(&self, target: &mut [String], start: usize) -> Result<()> {
        if start > target.len() {
            return Err(CollectionError::index_out_of_range(start, target.len()));
        }
        let available = target.len() - start;
        if available < self.names.len() {
            return Err(CollectionError::InsufficientCapacity {
                required: self.names.len(),
                available,
            });
        }
        target[start..start + self.names.len()].clone_from_slice(&self.names);
        Ok(())
    }

    /// Remove every name
    #[inline]
    pub fn clear(&mut self) {
        tracing::debug!(dropped = self.names.len(), "names cleared");
        self.names.clear();
    }

    /// Number of names
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Check if collection is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Names in order
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.names
    }

    /// Iterate names in order
    #[inline]
    pub fn iter(&self) -> Names<'_> {
        Names {
            inner: self.names.iter(),
        }
    }
}

impl Index<usize> for NameCollection {
    type Output = str;

    /// # Panics
    /// Panics if `index >= len()`, like slice indexing. Use
    /// [`NameCollection::get`] for a checked lookup.
    fn index(&self, index: usize) -> &str {
        &self.names[index]
    }
}

impl<S: Into<String>> FromIterator<S> for NameCollection {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut names = Self::new();
        names.add_range(iter);
        names
    }
}

impl<S: Into<String>> Extend<S> for NameCollection {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.add_range(iter);
    }
}

impl IntoIterator for NameCollection {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.names.into_iter()
    }
}

impl<'a> IntoIterator for &'a NameCollection {
    type Item = &'a str;
    type IntoIter = Names<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
