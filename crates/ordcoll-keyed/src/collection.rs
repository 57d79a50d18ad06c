//! Keyed element collection
//!
//! Provides [`KeyedCollection`]: an ordered sequence whose elements are also
//! reachable by their derived [`ElementKey`].

use std::collections::HashSet;
use std::fmt;

use indexmap::map::{Entry, Values};
use indexmap::IndexMap;
use ordcoll_core::{CollectionError, Result};

use crate::element::KeyedElement;
use crate::key::ElementKey;

/// Ordered collection of uniquely keyed elements
///
/// Position and key are two independent ways into the same sequence. The
/// key-to-position map lives in the same [`IndexMap`] as the elements, so
/// every structural change updates both at once.
///
/// The collection also remembers which keys were explicitly removed and
/// whether it was cleared. Configuration layering relies on that to tell a
/// removed inherited entry apart from one that was never mentioned.
///
/// Not internally synchronized.
#[derive(Clone)]
pub struct KeyedCollection<E> {
    /// Elements in position order, keyed by derived key
    elements: IndexMap<ElementKey, E>,

    /// Keys removed through `remove_by_key`, `remove_at` or a remove directive
    removed: HashSet<ElementKey>,

    /// Set once `clear` has run
    cleared: bool,
}

impl<E: KeyedElement> KeyedCollection<E> {
    /// Create empty collection
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            elements: IndexMap::new(),
            removed: HashSet::new(),
            cleared: false,
        }
    }

    /// Build a collection from elements in order
    ///
    /// # Errors
    /// Returns [`CollectionError::DuplicateKey`] on the first repeated key
    pub fn from_elements<I>(elements: I) -> Result<Self>
    where
        I: IntoIterator<Item = E>,
    {
        let mut collection = Self::new();
        for element in elements {
            collection.add(element)?;
        }
        Ok(collection)
    }

    /// Append an element, returning its position
    ///
    /// # Errors
    /// Returns [`CollectionError::DuplicateKey`] if an element with the same
    /// key is already present
    pub fn add(&mut self, element: E) -> Result<usize> {
        match self.elements.entry(element.key()) {
            Entry::Occupied(entry) => Err(CollectionError::duplicate_key(entry.key().to_string())),
            Entry::Vacant(entry) => {
                let index = entry.index();
                tracing::trace!(index, key = %entry.key(), "element added");
                entry.insert(element);
                Ok(index)
            }
        }
    }

    /// Insert an element at `index`, shifting later elements
    ///
    /// # Errors
    /// - [`CollectionError::IndexOutOfRange`] if `index > len()`
    /// - [`CollectionError::DuplicateKey`] if the key is already present
    pub fn insert(&mut self, index: usize, element: E) -> Result<()> {
        if index > self.elements.len() {
            return Err(CollectionError::index_out_of_range(index, self.elements.len()));
        }
        let key = element.key();
        if self.elements.contains_key(&key) {
            return Err(CollectionError::duplicate_key(key.to_string()));
        }
        tracing::trace!(index, key = %key, "element inserted");
        self.elements.shift_insert(index, key, element);
        Ok(())
    }

    /// Element at `index`
    ///
    /// # Errors
    /// Returns [`CollectionError::IndexOutOfRange`] if `index >= len()`
    pub fn get(&self, index: usize) -> Result<&E> {
        self.elements
            .get_index(index)
            .map(|(_, element)| element)
            .ok_or_else(|| CollectionError::index_out_of_range(index, self.elements.len()))
    }

    /// Replace the element at `index`, keeping its position
    ///
    /// The replacement may carry the same key as the element it replaces.
    /// Returns the previous element.
    ///
    /// # Errors
    /// - [`CollectionError::IndexOutOfRange`] if `index >= len()`
    /// - [`CollectionError::DuplicateKey`] if another element already has the
    ///   replacement's key
    pub fn set(&mut self, index: usize, element: E) -> Result<E> {
        let len = self.elements.len();
        if index >= len {
            return Err(CollectionError::index_out_of_range(index, len));
        }
        let key = element.key();

        match self.elements.get_index_of(&key) {
            Some(existing) if existing != index => {
                Err(CollectionError::duplicate_key(key.to_string()))
            }
            Some(_) => {
                let (_, slot) = self
                    .elements
                    .get_index_mut(index)
                    .ok_or_else(|| CollectionError::index_out_of_range(index, len))?;
                tracing::trace!(index, key = %key, "element replaced in place");
                Ok(std::mem::replace(slot, element))
            }
            None => {
                let (old_key, old) = self
                    .elements
                    .shift_remove_index(index)
                    .ok_or_else(|| CollectionError::index_out_of_range(index, len))?;
                tracing::trace!(index, old = %old_key, new = %key, "element replaced");
                self.elements.shift_insert(index, key, element);
                Ok(old)
            }
        }
    }

    /// Element with the given key
    #[inline]
    #[must_use]
    pub fn get_by_key(&self, key: &ElementKey) -> Option<&E> {
        self.elements.get(key)
    }

    /// Position of the element with the given key
    #[inline]
    #[must_use]
    pub fn index_of_key(&self, key: &ElementKey) -> Option<usize> {
        self.elements.get_index_of(key)
    }

    /// Check if an element with the given key is present
    #[inline]
    #[must_use]
    pub fn contains_key(&self, key: &ElementKey) -> bool {
        self.elements.contains_key(key)
    }

    /// Remove the element with the given key
    ///
    /// # Errors
    /// Returns [`CollectionError::NotFound`] if no element has this key
    pub fn remove_by_key(&mut self, key: &ElementKey) -> Result<E> {
        let element = self
            .elements
            .shift_remove(key)
            .ok_or_else(|| CollectionError::not_found(key.to_string()))?;
        tracing::trace!(key = %key, "element removed");
        self.removed.insert(key.clone());
        Ok(element)
    }

    /// Remove the element at `index`
    ///
    /// # Errors
    /// Returns [`CollectionError::IndexOutOfRange`] if `index >= len()`
    pub fn remove_at(&mut self, index: usize) -> Result<E> {
        let len = self.elements.len();
        let (key, element) = self
            .elements
            .shift_remove_index(index)
            .ok_or_else(|| CollectionError::index_out_of_range(index, len))?;
        tracing::trace!(index, key = %key, "element removed");
        self.removed.insert(key);
        Ok(element)
    }

    /// Remove every element
    pub fn clear(&mut self) {
        tracing::debug!(dropped = self.elements.len(), "collection cleared");
        self.elements.clear();
        self.cleared = true;
    }

    /// Check if `key` was explicitly removed and is not present now
    ///
    /// Distinguishes "removed" from "never existed".
    #[inline]
    #[must_use]
    pub(crate) fn is_key_removed(&self, key: &ElementKey) -> bool {
        self.removed.contains(key) && !self.elements.contains_key(key)
    }

    /// Check if a removal of `key` was ever recorded, even if re-added since
    #[inline]
    #[must_use]
    pub(crate) fn removal_recorded(&self, key: &ElementKey) -> bool {
        self.removed.contains(key)
    }

    /// Record a removal for a key this collection does not hold
    ///
    /// Used when a layer removes an entry it inherits from a parent layer.
    pub(crate) fn mark_removed(&mut self, key: ElementKey) {
        tracing::trace!(key = %key, "removal recorded for absent key");
        self.removed.insert(key);
    }

    /// Check if `clear` has run on this collection
    #[inline]
    #[must_use]
    pub(crate) fn was_cleared(&self) -> bool {
        self.cleared
    }

    /// Number of elements
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Check if collection is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Iterate elements in position order
    #[inline]
    pub fn iter(&self) -> Values<'_, ElementKey, E> {
        self.elements.values()
    }

    /// Iterate keys in position order
    #[inline]
    pub fn keys(&self) -> impl Iterator<Item = &ElementKey> {
        self.elements.keys()
    }
}

impl<E: KeyedElement> Default for KeyedCollection<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: fmt::Debug> fmt::Debug for KeyedCollection<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.elements.values()).finish()
    }
}

impl<'a, E> IntoIterator for &'a KeyedCollection<E> {
    type Item = &'a E;
    type IntoIter = Values<'a, ElementKey, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.values()
    }
}

impl<E> IntoIterator for KeyedCollection<E> {
    type Item = E;
    type IntoIter = indexmap::map::IntoValues<ElementKey, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_values()
    }
}
