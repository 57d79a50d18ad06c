//! ordcoll Names
//!
//! Ordered, index-addressable list of schema names.
//!
//! # Example
//!
//! ```rust
//! use ordcoll_names::NameCollection;
//!
//! let mut names = NameCollection::new();
//! names.add_range(["user", "group", "computer"]);
//!
//! assert_eq!(names.index_of("group"), Some(1));
//! names.remove("group").unwrap();
//! assert_eq!(names.index_of("group"), None);
//! assert_eq!(names.len(), 2);
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod collection;

pub use collection::{NameCollection, Names};
pub use ordcoll_core::{CollectionError, Result};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
