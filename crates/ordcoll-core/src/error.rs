//! Error types for collection operations
//!
//! Every collection operation either succeeds completely or returns one of
//! these errors without touching the collection.

/// Result alias for collection operations
pub type Result<T, E = CollectionError> = std::result::Result<T, E>;

/// Collection operation error
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CollectionError {
    /// Position outside the valid bounds of the sequence
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange {
        /// Requested position
        index: usize,
        /// Sequence length at the time of the call
        len: usize,
    },

    /// Add or replace would produce two elements with the same key
    #[error("duplicate key: {key}")]
    DuplicateKey {
        /// Text form of the colliding key
        key: String,
    },

    /// Value or key not present
    #[error("not found: {key}")]
    NotFound {
        /// Text form of the missing key or value
        key: String,
    },

    /// Destination buffer cannot hold the sequence
    #[error("insufficient capacity: need {required} slots, {available} available")]
    InsufficientCapacity {
        /// Slots needed
        required: usize,
        /// Slots available after the start offset
        available: usize,
    },
}

impl CollectionError {
    /// Create an out-of-range error
    #[inline]
    #[must_use]
    pub fn index_out_of_range(index: usize, len: usize) -> Self {
        Self::IndexOutOfRange { index, len }
    }

    /// Create a duplicate key error
    #[inline]
    #[must_use]
    pub fn duplicate_key(key: impl Into<String>) -> Self {
        Self::DuplicateKey { key: key.into() }
    }

    /// Create a not-found error
    #[inline]
    #[must_use]
    pub fn not_found(key: impl Into<String>) -> Self {
        Self::NotFound { key: key.into() }
    }

    /// Check if error is a bounds violation
    #[inline]
    #[must_use]
    pub fn is_index_error(&self) -> bool {
        matches!(
            self,
            Self::IndexOutOfRange { .. } | Self::InsufficientCapacity { .. }
        )
    }

    /// Check if error is a key collision
    #[inline]
    #[must_use]
    pub fn is_duplicate(&self) -> bool {
        matches!(self, Self::DuplicateKey { .. })
    }

    /// Check if error is a missing key or value
    #[inline]
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = CollectionError::duplicate_key("System.Web/2.0");
        assert_eq!(err.to_string(), "duplicate key: System.Web/2.0");

        let err = CollectionError::InsufficientCapacity {
            required: 3,
            available: 1,
        };
        assert!(err.to_string().contains("need 3 slots"));
    }

    #[test]
    fn error_classification() {
        assert!(CollectionError::index_out_of_range(1, 0).is_index_error());
        assert!(CollectionError::InsufficientCapacity {
            required: 1,
            available: 0
        }
        .is_index_error());
        assert!(CollectionError::duplicate_key("a").is_duplicate());
        assert!(CollectionError::not_found("a").is_not_found());
        assert!(!CollectionError::not_found("a").is_duplicate());
    }
}
