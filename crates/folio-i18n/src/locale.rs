//! Locale identifiers

use crate::error::{I18nError, I18nResult};
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;
use unic_langid::LanguageIdentifier;

/// A locale tag such as `en`, `fr` or `pt-BR`.
///
/// Any string is accepted; whether a locale is usable is decided by the
/// dictionary it is looked up in, not by the identifier itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocaleId(String);

impl LocaleId {
    /// Create a locale identifier from a tag
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    /// The raw tag
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parse into a BCP 47 language identifier
    pub fn to_language_identifier(&self) -> I18nResult<LanguageIdentifier> {
        self.0
            .parse()
            .map_err(|_| I18nError::InvalidLanguageId(self.0.clone()))
    }

    /// Whether the tag is a well-formed BCP 47 language identifier
    pub fn is_well_formed(&self) -> bool {
        self.to_language_identifier().is_ok()
    }
}

impl fmt::Display for LocaleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for LocaleId {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl From<&str> for LocaleId {
    fn from(tag: &str) -> Self {
        Self::new(tag)
    }
}

impl From<String> for LocaleId {
    fn from(tag: String) -> Self {
        Self(tag)
    }
}

impl From<&LocaleId> for LocaleId {
    fn from(id: &LocaleId) -> Self {
        id.clone()
    }
}

impl AsRef<str> for LocaleId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for LocaleId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_language_identifier() {
        let id = LocaleId::new("pt-BR");
        let langid = id.to_language_identifier().unwrap();
        assert_eq!(langid.language.as_str(), "pt");
        assert!(id.is_well_formed());
    }

    #[test]
    fn test_malformed_tag_is_still_a_locale() {
        let id = LocaleId::new("not a locale!");
        assert_eq!(id.as_str(), "not a locale!");
        assert!(!id.is_well_formed());
        assert!(matches!(
            id.to_language_identifier(),
            Err(I18nError::InvalidLanguageId(_))
        ));
    }

    #[test]
    fn test_lookup_by_str() {
        let mut map = HashMap::new();
        map.insert(LocaleId::new("fr"), 1);
        assert_eq!(map.get("fr"), Some(&1));
        assert_eq!(map.get("en"), None);
    }

    #[test]
    fn test_serde_transparent() {
        let id: LocaleId = serde_json::from_str("\"en\"").unwrap();
        assert_eq!(id, LocaleId::from("en"));
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"en\"");
        assert_eq!(id.to_string(), "en");
    }
}
