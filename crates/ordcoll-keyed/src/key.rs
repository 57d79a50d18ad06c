//! Composite element keys
//!
//! Provides [`ElementKey`], the identity of an element inside a
//! [`KeyedCollection`](crate::KeyedCollection).

use std::fmt::{self, Display, Formatter, Write};
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use smallvec::SmallVec;

use crate::error::KeyParseError;

const SEPARATOR: char = '/';
const ESCAPE: char = '\\';

/// Composite key derived from element attributes
///
/// Equality and hashing compare the individual parts, so `("ab", "c")` and
/// `("a", "bc")` are different keys even though their plain concatenations
/// match.
///
/// # Text form
/// Parts joined by `/`; a `/` or `\` inside a part is escaped with `\`.
/// The text form parses back to the same key.
///
/// ```
/// use ordcoll_keyed::ElementKey;
///
/// let key = ElementKey::pair("a/b", "1.0");
/// assert_eq!(key.to_string(), r"a\/b/1.0");
/// assert_eq!(key.to_string().parse::<ElementKey>().unwrap(), key);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ElementKey(SmallVec<[String; 2]>);

impl ElementKey {
    /// Key with a single part
    #[inline]
    #[must_use]
    pub fn single(part: impl Into<String>) -> Self {
        let mut parts = SmallVec::new();
        parts.push(part.into());
        Self(parts)
    }

    /// Key with two parts, e.g. a name and a version
    #[inline]
    #[must_use]
    pub fn pair(first: impl Into<String>, second: impl Into<String>) -> Self {
        let mut parts = SmallVec::new();
        parts.push(first.into());
        parts.push(second.into());
        Self(parts)
    }

    /// Key from arbitrary parts
    ///
    /// Returns `None` for an empty part list.
    #[must_use]
    pub fn from_parts<I>(parts: I) -> Option<Self>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let parts: SmallVec<[String; 2]> = parts.into_iter().map(Into::into).collect();
        if parts.is_empty() {
            None
        } else {
            Some(Self(parts))
        }
    }

    /// Key parts in order
    #[inline]
    #[must_use]
    pub fn parts(&self) -> &[String] {
        &self.0
    }

    /// Number of parts
    #[inline]
    #[must_use]
    pub fn arity(&self) -> usize {
        self.0.len()
    }
}

impl Display for ElementKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (i, part) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_char(SEPARATOR)?;
            }
            for c in part.chars() {
                if c == SEPARATOR || c == ESCAPE {
                    f.write_char(ESCAPE)?;
                }
                f.write_char(c)?;
            }
        }
        Ok(())
    }
}

impl FromStr for ElementKey {
    type Err = KeyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = SmallVec::new();
        let mut current = String::new();
        let mut chars = s.chars();

        while let Some(c) = chars.next() {
            match c {
                ESCAPE => match chars.next() {
                    Some(escaped @ (SEPARATOR | ESCAPE)) => current.push(escaped),
                    Some(escaped) => {
                        return Err(KeyParseError::InvalidEscape {
                            escaped,
                            key: s.to_string(),
                        })
                    }
                    None => return Err(KeyParseError::DanglingEscape(s.to_string())),
                },
                SEPARATOR => parts.push(std::mem::take(&mut current)),
                _ => current.push(c),
            }
        }
        parts.push(current);

        Ok(Self(parts))
    }
}

impl Serialize for ElementKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ElementKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn concatenation_collisions_are_distinct() {
        let a = ElementKey::pair("ab", "c");
        let b = ElementKey::pair("a", "bc");
        assert_ne!(a, b);
        assert_ne!(a.to_string(), b.to_string());

        let set: HashSet<_> = [a, b].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn separator_inside_part_is_escaped() {
        let a = ElementKey::pair("a/b", "c");
        let b = ElementKey::from_parts(["a", "b", "c"]).unwrap();
        assert_ne!(a.to_string(), b.to_string());
        assert_eq!(a.to_string(), r"a\/b/c");
    }

    #[test]
    fn parse_round_trip_with_escapes() {
        let key = ElementKey::pair(r"C:\libs/x", "");
        let parsed: ElementKey = key.to_string().parse().unwrap();
        assert_eq!(parsed, key);
        assert_eq!(parsed.arity(), 2);
    }

    #[test]
    fn parse_rejects_bad_escapes() {
        assert!(matches!(
            r"abc\".parse::<ElementKey>(),
            Err(KeyParseError::DanglingEscape(_))
        ));
        assert!(matches!(
            r"a\bc".parse::<ElementKey>(),
            Err(KeyParseError::InvalidEscape { escaped: 'b', .. })
        ));
    }

    #[test]
    fn from_parts_rejects_empty() {
        assert!(ElementKey::from_parts(Vec::<String>::new()).is_none());
    }

    #[test]
    fn serde_uses_text_form() {
        let key = ElementKey::pair("System.Web", "2.0");
        let json = serde_json::to_string(&key).unwrap();
        assert_eq!(json, "\"System.Web/2.0\"");
        let back: ElementKey = serde_json::from_str(&json).unwrap();
        assert_eq!(back, key);
    }
}
