//! Keyed elements
//!
//! [`KeyedElement`] is the seam between a collection and the element types
//! it stores. [`TrustedAssembly`] is the stock element: an assembly granted
//! full trust, identified by name and version.

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::key::ElementKey;

/// Element that derives its own identity key
///
/// Two elements with equal keys cannot coexist in one
/// [`KeyedCollection`](crate::KeyedCollection). The key must be a pure
/// function of the element's attributes.
pub trait KeyedElement {
    /// Derived key for this element
    fn key(&self) -> ElementKey;
}

/// Assembly entry in a full-trust assembly list
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrustedAssembly {
    /// Simple assembly name
    pub assembly_name: String,

    /// Assembly version string
    pub version: String,
}

impl TrustedAssembly {
    /// Create new assembly entry
    #[inline]
    #[must_use]
    pub fn new(assembly_name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            assembly_name: assembly_name.into(),
            version: version.into(),
        }
    }
}

impl KeyedElement for TrustedAssembly {
    #[inline]
    fn key(&self) -> ElementKey {
        ElementKey::pair(self.assembly_name.as_str(), self.version.as_str())
    }
}

impl Display for TrustedAssembly {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}, Version={}", self.assembly_name, self.version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_is_name_then_version() {
        let asm = TrustedAssembly::new("System.Web", "2.0.0.0");
        assert_eq!(asm.key().parts(), &["System.Web", "2.0.0.0"]);
    }

    #[test]
    fn serde_field_names() {
        let asm: TrustedAssembly =
            serde_json::from_str(r#"{"assemblyName":"Contoso.Data","version":"1.2"}"#).unwrap();
        assert_eq!(asm, TrustedAssembly::new("Contoso.Data", "1.2"));
        assert_eq!(asm.to_string(), "Contoso.Data, Version=1.2");
    }
}
