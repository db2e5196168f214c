//! The immutable locale -> tree dictionary and its coverage report

use crate::error::{I18nError, I18nResult};
use crate::locale::LocaleId;
use crate::tree::LocaleTree;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

/// Every supported locale mapped to its tree.
///
/// Built once at startup and never mutated; share it behind an `Arc`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dictionary {
    locales: HashMap<LocaleId, LocaleTree>,
}

impl Dictionary {
    /// Create a dictionary from a ready-made map
    pub fn new(locales: HashMap<LocaleId, LocaleTree>) -> Self {
        Self { locales }
    }

    /// Start building a dictionary locale by locale
    pub fn builder() -> DictionaryBuilder {
        DictionaryBuilder::default()
    }

    /// Build from a JSON object of `locale -> tree`
    pub fn from_json(value: serde_json::Value) -> I18nResult<Self> {
        serde_json::from_value(value).map_err(|e| I18nError::InvalidDictionary(e.to_string()))
    }

    /// The tree for a locale
    pub fn tree(&self, locale: &str) -> Option<&LocaleTree> {
        self.locales.get(locale)
    }

    /// Whether the locale has a tree
    pub fn contains(&self, locale: &str) -> bool {
        self.locales.contains_key(locale)
    }

    /// All locales, sorted
    pub fn locales(&self) -> Vec<&LocaleId> {
        let mut locales: Vec<_> = self.locales.keys().collect();
        locales.sort();
        locales
    }

    /// Comma separated locale list, for messages
    pub(crate) fn locale_list(&self) -> String {
        self.locales()
            .iter()
            .map(|locale| locale.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Number of locales
    pub fn len(&self) -> usize {
        self.locales.len()
    }

    /// Whether no locale is defined
    pub fn is_empty(&self) -> bool {
        self.locales.is_empty()
    }

    /// Compare every locale's leaf keys with those of `reference`.
    ///
    /// Divergent shapes are reported, never rejected.
    pub fn coverage(&self, reference: &str) -> I18nResult<CoverageReport> {
        let reference_tree = self.tree(reference).ok_or_else(|| I18nError::UnknownLocale {
            locale: reference.to_string(),
            available: self.locale_list(),
        })?;
        let expected: BTreeSet<String> = reference_tree.leaf_keys().into_iter().collect();

        let locales = self
            .locales()
            .into_iter()
            .filter(|locale| locale.as_str() != reference)
            .map(|locale| {
                let present: BTreeSet<String> = self.locales[locale].leaf_keys().into_iter().collect();
                LocaleCoverage {
                    locale: locale.clone(),
                    missing: expected.difference(&present).cloned().collect(),
                    extra: present.difference(&expected).cloned().collect(),
                }
            })
            .collect();

        Ok(CoverageReport {
            reference: LocaleId::new(reference),
            reference_keys: expected.len(),
            locales,
        })
    }
}

impl FromIterator<(LocaleId, LocaleTree)> for Dictionary {
    fn from_iter<I: IntoIterator<Item = (LocaleId, LocaleTree)>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Incremental dictionary construction
#[derive(Debug, Default)]
pub struct DictionaryBuilder {
    locales: HashMap<LocaleId, LocaleTree>,
}

impl DictionaryBuilder {
    /// Add (or replace) a locale's tree
    pub fn locale(mut self, locale: impl Into<LocaleId>, tree: LocaleTree) -> Self {
        self.locales.insert(locale.into(), tree);
        self
    }

    /// Finish building
    pub fn build(self) -> Dictionary {
        Dictionary::new(self.locales)
    }
}

/// How one locale compares to the reference locale
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocaleCoverage {
    /// The compared locale
    pub locale: LocaleId,
    /// Keys the reference has and this locale lacks
    pub missing: Vec<String>,
    /// Keys this locale has and the reference lacks
    pub extra: Vec<String>,
}

impl LocaleCoverage {
    /// No key of the reference is missing
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Result of [`Dictionary::coverage`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CoverageReport {
    /// Locale every other locale was compared to
    pub reference: LocaleId,
    /// Number of leaf keys in the reference
    pub reference_keys: usize,
    /// One entry per non-reference locale, sorted by locale
    pub locales: Vec<LocaleCoverage>,
}

impl CoverageReport {
    /// Every locale defines every reference key
    pub fn is_complete(&self) -> bool {
        self.locales.iter().all(LocaleCoverage::is_complete)
    }
}
