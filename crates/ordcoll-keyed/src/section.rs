//! Configuration sections
//!
//! A [`CollectionSection`] is one configuration layer's list of `add`,
//! `remove` and `clear` directives. Building a section yields a
//! [`KeyedCollection`]; [`merge_layers`] and [`resolve`] combine layers from
//! the root outwards.
//!
//! # Format
//!
//! YAML sections write each directive as a single-key map (or a bare
//! `clear`); JSON uses the same shape.
//!
//! ```yaml
//! options:
//!   strictRemove: false
//! directives:
//!   - add: { assemblyName: System.Web, version: "2.0.0.0" }
//!   - remove: { key: "Legacy.Tools/1.0" }
//!   - clear
//! ```

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_yaml::with::singleton_map_recursive;

use ordcoll_core::{CollectionError, Result};

use crate::collection::KeyedCollection;
use crate::element::KeyedElement;
use crate::error::SectionError;
use crate::key::ElementKey;
use crate::options::SectionOptions;

/// Single configuration directive
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Directive<E> {
    /// Add an element
    Add(E),

    /// Remove the element with this key, here or in a parent layer
    Remove {
        /// Key of the element to remove
        key: ElementKey,
    },

    /// Drop everything added so far, including inherited elements
    Clear,
}

/// Ordered directives of one configuration layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionSection<E> {
    /// How directives are applied
    #[serde(default)]
    pub options: SectionOptions,

    /// Directives in document order
    #[serde(default = "Vec::new")]
    pub directives: Vec<Directive<E>>,
}

impl<E> CollectionSection<E> {
    /// Create empty section with default options
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            options: SectionOptions::default(),
            directives: Vec::new(),
        }
    }

    /// With options
    #[inline]
    #[must_use]
    pub fn with_options(mut self, options: SectionOptions) -> Self {
        self.options = options;
        self
    }

    /// Append an `add` directive
    #[inline]
    #[must_use]
    pub fn add(mut self, element: E) -> Self {
        self.directives.push(Directive::Add(element));
        self
    }

    /// Append a `remove` directive
    #[inline]
    #[must_use]
    pub fn remove(mut self, key: ElementKey) -> Self {
        self.directives.push(Directive::Remove { key });
        self
    }

    /// Append a `remove` directive from the key's text form
    ///
    /// # Errors
    /// Returns [`SectionError::KeyParse`] if `key` is not a valid key text
    pub fn remove_text(self, key: &str) -> std::result::Result<Self, SectionError> {
        Ok(self.remove(key.parse()?))
    }

    /// Append a `clear` directive
    #[inline]
    #[must_use]
    pub fn clear(mut self) -> Self {
        self.directives.push(Directive::Clear);
        self
    }
}

impl<E> Default for CollectionSection<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: DeserializeOwned> CollectionSection<E> {
    /// Parse from JSON string
    ///
    /// # Errors
    /// Returns error if JSON is invalid or does not describe a section
    pub fn from_json(json: &str) -> std::result::Result<Self, SectionError> {
        serde_json::from_str(json).map_err(SectionError::InvalidJson)
    }

    /// Parse from YAML string
    ///
    /// # Errors
    /// Returns error if YAML is invalid or does not describe a section
    pub fn from_yaml(yaml: &str) -> std::result::Result<Self, SectionError> {
        let deserializer = serde_yaml::Deserializer::from_str(yaml);
        singleton_map_recursive::deserialize(deserializer).map_err(SectionError::InvalidYaml)
    }
}

impl<E: Serialize> CollectionSection<E> {
    /// Serialize to JSON string
    ///
    /// # Errors
    /// Returns error if an element fails to serialize
    pub fn to_json(&self) -> std::result::Result<String, SectionError> {
        serde_json::to_string_pretty(self).map_err(SectionError::InvalidJson)
    }

    /// Serialize to YAML string
    ///
    /// # Errors
    /// Returns error if an element fails to serialize
    pub fn to_yaml(&self) -> std::result::Result<String, SectionError> {
        let mut buf = Vec::new();
        {
            let mut serializer = serde_yaml::Serializer::new(&mut buf);
            singleton_map_recursive::serialize(self, &mut serializer)
                .map_err(SectionError::InvalidYaml)?;
        }
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

impl<E: KeyedElement + Clone> CollectionSection<E> {
    /// Apply directives in order to an empty collection
    ///
    /// A `remove` whose key this section never added records an overlay
    /// removal for [`merge_layers`], unless
    /// [`SectionOptions::strict_remove`] is set.
    ///
    /// # Errors
    /// - [`SectionError::Collection`] on a duplicate `add` or a strict
    ///   `remove` of a missing key
    /// - [`SectionError::ClearNotAllowed`] if `clear` is forbidden
    pub fn build(&self) -> std::result::Result<KeyedCollection<E>, SectionError> {
        let mut collection = KeyedCollection::new();

        for directive in &self.directives {
            match directive {
                Directive::Add(element) => {
                    if let Err(err) = collection.add(element.clone()) {
                        tracing::warn!(%err, "add directive rejected");
                        return Err(err.into());
                    }
                }
                Directive::Remove { key } if collection.contains_key(key) => {
                    collection.remove_by_key(key)?;
                }
                Directive::Remove { key } if self.options.strict_remove => {
                    return Err(CollectionError::not_found(key.to_string()).into());
                }
                Directive::Remove { key } => {
                    if collection.is_key_removed(key) {
                        tracing::debug!(key = %key, "repeated remove directive");
                    } else {
                        collection.mark_removed(key.clone());
                    }
                }
                Directive::Clear => {
                    if !self.options.allow_clear {
                        return Err(SectionError::ClearNotAllowed);
                    }
                    collection.clear();
                }
            }
        }

        tracing::debug!(
            directives = self.directives.len(),
            elements = collection.len(),
            "section built"
        );
        Ok(collection)
    }
}

/// Effective collection of `child` layered over `parent`
///
/// Parent elements come first in parent order, minus everything the child
/// removed (or all of them if the child was cleared). Child elements follow
/// in child order.
///
/// # Errors
/// Returns [`CollectionError::DuplicateKey`] if the child adds a key that
/// survives from the parent
pub fn merge_layers<E>(
    parent: &KeyedCollection<E>,
    child: &KeyedCollection<E>,
) -> Result<KeyedCollection<E>>
where
    E: KeyedElement + Clone,
{
    let mut merged = KeyedCollection::new();

    if !child.was_cleared() {
        for element in parent {
            if child.removal_recorded(&element.key()) {
                continue;
            }
            merged.add(element.clone())?;
        }
    }
    let inherited = merged.len();

    for element in child {
        merged.add(element.clone())?;
    }

    tracing::debug!(
        inherited,
        dropped = parent.len() - inherited,
        added = child.len(),
        "layers merged"
    );
    Ok(merged)
}

/// Effective collection of a root-to-leaf stack of sections
///
/// # Errors
/// Returns the first build or merge failure
pub fn resolve<E>(
    sections: &[CollectionSection<E>],
) -> std::result::Result<KeyedCollection<E>, SectionError>
where
    E: KeyedElement + Clone,
{
    let mut effective = KeyedCollection::new();
    for section in sections {
        let layer = section.build()?;
        effective = merge_layers(&effective, &layer)?;
    }
    Ok(effective)
}
