//! Error types for keys and configuration sections

use ordcoll_core::CollectionError;

/// Error parsing the text form of an [`ElementKey`](crate::ElementKey)
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KeyParseError {
    /// Input ended inside an escape sequence
    #[error("dangling escape at end of key: {0}")]
    DanglingEscape(String),

    /// Backslash followed by a character that needs no escaping
    #[error("invalid escape '\\{escaped}' in key: {key}")]
    InvalidEscape {
        /// Character after the backslash
        escaped: char,
        /// Full input
        key: String,
    },
}

/// Configuration section errors
#[derive(Debug, thiserror::Error)]
pub enum SectionError {
    /// Directive violated a collection invariant
    #[error("collection error: {0}")]
    Collection(#[from] CollectionError),

    /// JSON input or output failed
    #[error("invalid JSON section: {0}")]
    InvalidJson(#[source] serde_json::Error),

    /// YAML input or output failed
    #[error("invalid YAML section: {0}")]
    InvalidYaml(#[source] serde_yaml::Error),

    /// Key text in a directive did not parse
    #[error("invalid key: {0}")]
    KeyParse(#[from] KeyParseError),

    /// Section contains `clear` but its options forbid it
    #[error("clear directive not allowed in this section")]
    ClearNotAllowed,
}

impl SectionError {
    /// Underlying collection error, if any
    #[inline]
    #[must_use]
    pub fn as_collection_error(&self) -> Option<&CollectionError> {
        match self {
            Self::Collection(err) => Some(err),
            _ => None,
        }
    }
}
