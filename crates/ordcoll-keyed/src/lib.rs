//! ordcoll Keyed
//!
//! Ordered configuration element collections addressed both by position and
//! by a derived composite key.
//!
//! # Overview
//!
//! - [`ElementKey`]: unambiguous composite key built from element attributes
//! - [`KeyedElement`]: trait for elements that derive their own key
//! - [`KeyedCollection`]: ordered sequence with key uniqueness and removal tracking
//! - [`CollectionSection`]: `add` / `remove` / `clear` directives loaded from
//!   YAML or JSON, merged across configuration layers
//!
//! # Example
//!
//! ```rust
//! use ordcoll_keyed::{KeyedCollection, TrustedAssembly};
//!
//! let mut assemblies = KeyedCollection::new();
//! assemblies.add(TrustedAssembly::new("System.Web", "2.0.0.0")).unwrap();
//!
//! // Same name and version collide
//! let dup = assemblies.add(TrustedAssembly::new("System.Web", "2.0.0.0"));
//! assert!(dup.unwrap_err().is_duplicate());
//! assert_eq!(assemblies.len(), 1);
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod collection;
mod element;
mod error;
mod key;
mod options;
mod section;

// Re-exports
pub use collection::KeyedCollection;
pub use element::{KeyedElement, TrustedAssembly};
pub use error::{KeyParseError, SectionError};
pub use key::ElementKey;
pub use options::SectionOptions;
pub use ordcoll_core::{CollectionError, Result};
pub use section::{merge_layers, resolve, CollectionSection, Directive};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for keyed collections
    pub use crate::{
        CollectionSection, Directive, ElementKey, KeyedCollection, KeyedElement, SectionOptions,
        TrustedAssembly,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
