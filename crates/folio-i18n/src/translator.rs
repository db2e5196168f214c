//! The translation resolver
//!
//! A [`Translator`] owns a shared [`Dictionary`] and the active locale.
//! Lookups never fail: a key that does not resolve to a string yields the
//! caller's fallback, or the key itself so missing translations stay
//! visible in rendered output.

use crate::dictionary::Dictionary;
use crate::error::{I18nError, I18nResult};
use crate::locale::LocaleId;
use arc_swap::ArcSwap;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::Arc;
use tracing::{debug, info, trace, warn};

/// What `set_locale` does with a locale the dictionary does not define
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnknownLocalePolicy {
    /// Switch anyway; every lookup then returns its fallback
    #[default]
    Degrade,
    /// Refuse the switch with [`I18nError::UnknownLocale`]
    Reject,
}

impl UnknownLocalePolicy {
    /// Lowercase name, as used in configuration files
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Degrade => "degrade",
            Self::Reject => "reject",
        }
    }
}

impl FromStr for UnknownLocalePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "degrade" => Ok(Self::Degrade),
            "reject" => Ok(Self::Reject),
            other => Err(format!(
                "unknown locale policy '{other}', expected 'degrade' or 'reject'"
            )),
        }
    }
}

/// Resolves dotted keys against the active locale's tree
#[derive(Debug)]
pub struct Translator {
    dictionary: Arc<Dictionary>,
    active: ArcSwap<LocaleId>,
    policy: UnknownLocalePolicy,
}

impl Translator {
    /// Create a translator that degrades on unknown locales.
    ///
    /// Never fails: an unknown default locale simply makes every lookup
    /// fall back until a known locale is set.
    pub fn new(dictionary: impl Into<Arc<Dictionary>>, default_locale: impl Into<LocaleId>) -> Self {
        let dictionary = dictionary.into();
        let default_locale = default_locale.into();
        if !dictionary.contains(default_locale.as_str()) {
            warn!(
                "Default locale '{}' is not in the dictionary (available: {}); lookups will fall back",
                default_locale,
                dictionary.locale_list()
            );
        }
        info!("Translator initialized with default locale: {}", default_locale);

        Self {
            dictionary,
            active: ArcSwap::from_pointee(default_locale),
            policy: UnknownLocalePolicy::Degrade,
        }
    }

    /// Create a translator with an explicit unknown-locale policy.
    ///
    /// Under [`UnknownLocalePolicy::Reject`] the default locale must be in
    /// the dictionary too.
    pub fn with_policy(
        dictionary: impl Into<Arc<Dictionary>>,
        default_locale: impl Into<LocaleId>,
        policy: UnknownLocalePolicy,
    ) -> I18nResult<Self> {
        let dictionary = dictionary.into();
        let default_locale = default_locale.into();
        if policy == UnknownLocalePolicy::Reject {
            Self::ensure_known(&dictionary, &default_locale)?;
        }

        let mut translator = Self::new(dictionary, default_locale);
        translator.policy = policy;
        Ok(translator)
    }

    fn ensure_known(dictionary: &Dictionary, locale: &LocaleId) -> I18nResult<()> {
        if dictionary.contains(locale.as_str()) {
            Ok(())
        } else {
            Err(I18nError::UnknownLocale {
                locale: locale.to_string(),
                available: dictionary.locale_list(),
            })
        }
    }

    /// Resolve `key` in the active locale.
    ///
    /// Returns the leaf string when every segment of `key` is consumed and
    /// ends on a string; otherwise `fallback`, or `key` when no fallback is
    /// given. The active locale is read once, so a concurrent
    /// [`set_locale`](Self::set_locale) cannot split a lookup across two
    /// locales.
    pub fn resolve<'a>(&'a self, key: &'a str, fallback: Option<&'a str>) -> &'a str {
        let locale = self.active.load();
        self.resolve_in(locale.as_str(), key, fallback)
    }

    /// Resolve `key` in the active locale, falling back to the key itself
    pub fn t<'a>(&'a self, key: &'a str) -> &'a str {
        self.resolve(key, None)
    }

    /// Resolve `key` in the active locale without any fallback
    pub fn try_resolve(&self, key: &str) -> Option<&str> {
        let locale = self.active.load();
        self.lookup(locale.as_str(), key)
    }

    /// Resolve `key` in `locale`, leaving the active locale alone
    pub fn resolve_in<'a>(&'a self, locale: &str, key: &'a str, fallback: Option<&'a str>) -> &'a str {
        self.lookup(locale, key).unwrap_or_else(|| {
            trace!(key, locale, "Translation missing, using fallback");
            fallback.unwrap_or(key)
        })
    }

    fn lookup(&self, locale: &str, key: &str) -> Option<&str> {
        self.dictionary.tree(locale)?.lookup_str(key)
    }

    /// Change the active locale for every later lookup.
    ///
    /// Unknown locales are stored or refused according to the policy.
    pub fn set_locale(&self, locale: impl Into<LocaleId>) -> I18nResult<()> {
        let locale = locale.into();
        if !self.dictionary.contains(locale.as_str()) {
            match self.policy {
                UnknownLocalePolicy::Reject => {
                    warn!("Rejected switch to unknown locale '{}'", locale);
                    return Err(I18nError::UnknownLocale {
                        locale: locale.to_string(),
                        available: self.dictionary.locale_list(),
                    });
                }
                UnknownLocalePolicy::Degrade => {
                    warn!(
                        "Switching to unknown locale '{}'; every lookup will fall back",
                        locale
                    );
                }
            }
        }

        debug!("Active locale set to {}", locale);
        self.active.store(Arc::new(locale));
        Ok(())
    }

    /// The active locale
    pub fn get_locale(&self) -> LocaleId {
        LocaleId::clone(&self.active.load())
    }

    /// Locales the dictionary defines, sorted
    pub fn available_locales(&self) -> Vec<&LocaleId> {
        self.dictionary.locales()
    }

    /// The shared dictionary
    pub fn dictionary(&self) -> &Arc<Dictionary> {
        &self.dictionary
    }

    /// The unknown-locale policy in force
    pub fn policy(&self) -> UnknownLocalePolicy {
        self.policy
    }
}

/// Resolve a key through a translator, with an optional fallback
///
/// ```
/// use folio_i18n::{t, Dictionary, Translator};
///
/// let dictionary = Dictionary::from_json(serde_json::json!({
///     "en": { "nav": { "home": "Home" } }
/// }))
/// .unwrap();
/// let translator = Translator::new(dictionary, "en");
///
/// assert_eq!(t!(translator, "nav.home"), "Home");
/// assert_eq!(t!(translator, "nav.blog", "Blog"), "Blog");
/// ```
#[macro_export]
macro_rules! t {
    ($translator:expr, $key:expr) => {
        $translator.resolve($key, None)
    };
    ($translator:expr, $key:expr, $fallback:expr) => {
        $translator.resolve($key, Some($fallback))
    };
}
