//! Section options

use serde::{Deserialize, Serialize};

/// Options controlling how a [`CollectionSection`](crate::CollectionSection)
/// applies its directives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SectionOptions {
    /// Fail `remove` directives whose key is not present in the section
    /// itself, instead of recording an overlay removal
    pub strict_remove: bool,

    /// Accept `clear` directives
    pub allow_clear: bool,
}

impl SectionOptions {
    /// Create default options
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With strict remove
    #[inline]
    #[must_use]
    pub fn with_strict_remove(mut self, strict: bool) -> Self {
        self.strict_remove = strict;
        self
    }

    /// With clear permission
    #[inline]
    #[must_use]
    pub fn with_allow_clear(mut self, allow: bool) -> Self {
        self.allow_clear = allow;
        self
    }
}

impl Default for SectionOptions {
    fn default() -> Self {
        Self {
            strict_remove: false,
            allow_clear: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_use_defaults() {
        let options: SectionOptions = serde_json::from_str(r#"{"strictRemove":true}"#).unwrap();
        assert!(options.strict_remove);
        assert!(options.allow_clear);
    }

    #[test]
    fn builder() {
        let options = SectionOptions::new()
            .with_strict_remove(true)
            .with_allow_clear(false);
        assert_eq!(
            options,
            SectionOptions {
                strict_remove: true,
                allow_clear: false
            }
        );
    }
}
