//! ordcoll Core
//!
//! Error types shared by the ordcoll collection crates.
//!
//! # Example
//!
//! ```rust
//! use ordcoll_core::CollectionError;
//!
//! let err = CollectionError::index_out_of_range(4, 2);
//! assert!(err.is_index_error());
//! assert_eq!(err.to_string(), "index 4 out of range for length 2");
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod error;

pub use error::{CollectionError, Result};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
