//! The site application: configuration plus a shared translator.

use crate::cli::Command;
use crate::content;
use crate::error::{SiteError, SiteResult};
use folio_config::Config;
use folio_i18n::{Dictionary, DictionaryLoader, LocaleId, Translator};
use std::io::Write;
use std::sync::Arc;
use tracing::{info, warn};

/// Main site structure.
pub struct Site {
    config: Arc<Config>,
    translator: Arc<Translator>,
}

impl Site {
    /// Loads the locale files named by the configuration and builds the translator.
    pub fn from_config(config: Config) -> SiteResult<Self> {
        let dictionary = DictionaryLoader::new(&config.i18n.locales_dir).load()?;
        Self::with_dictionary(config, dictionary)
    }

    /// Builds the site around an already loaded dictionary.
    pub fn with_dictionary(config: Config, dictionary: Dictionary) -> SiteResult<Self> {
        let translator = Translator::with_policy(
            dictionary,
            config.i18n.default_locale.clone(),
            config.i18n.unknown_locale,
        )?;
        info!(
            "Site ready with {} locale(s), default {}",
            translator.available_locales().len(),
            config.i18n.default_locale
        );

        Ok(Self {
            config: Arc::new(config),
            translator: Arc::new(translator),
        })
    }

    /// The loaded configuration.
    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    /// The shared translator.
    pub fn translator(&self) -> &Arc<Translator> {
        &self.translator
    }

    /// Runs one command, writing its output to `out`.
    pub fn run(&self, command: &Command, out: &mut dyn Write) -> SiteResult<()> {
        match command {
            Command::Resolve {
                key,
                locale,
                fallback,
            } => {
                self.switch_locale(locale.as_deref())?;
                writeln!(out, "{}", self.translator.resolve(key, fallback.as_deref()))?;
            }
            Command::Nav { locale } => {
                self.switch_locale(locale.as_deref())?;
                let (brand, links) = content::render_navigation(&self.translator);
                writeln!(out, "{brand}")?;
                for link in links {
                    writeln!(out, "  {}\t{}", link.label, link.href)?;
                }
            }
            Command::Sections { locale } => {
                self.switch_locale(locale.as_deref())?;
                for section in content::sections() {
                    writeln!(out, "[{}]", section.id)?;
                    for label in content::render_section(&self.translator, section) {
                        writeln!(out, "  {label}")?;
                    }
                }
            }
            Command::Locales => {
                let active = self.translator.get_locale();
                let dictionary = self.translator.dictionary();
                for locale in dictionary.locales() {
                    let marker = if *locale == active { "*" } else { " " };
                    let leaves = dictionary.tree(locale.as_str()).map_or(0, |tree| tree.leaf_count());
                    writeln!(out, "{marker} {locale}\t{leaves} keys")?;
                }
            }
            Command::Check { reference } => self.check(reference.as_deref(), out)?,
        }
        Ok(())
    }

    fn switch_locale(&self, locale: Option<&str>) -> SiteResult<()> {
        if let Some(locale) = locale {
            self.translator.set_locale(locale)?;
        }
        Ok(())
    }

    /// Compares every locale with the reference and checks the site's own keys.
    fn check(&self, reference: Option<&str>, out: &mut dyn Write) -> SiteResult<()> {
        let reference = reference
            .map(LocaleId::from)
            .unwrap_or_else(|| self.config.i18n.default_locale.clone());
        let dictionary = self.translator.dictionary();
        let report = dictionary.coverage(reference.as_str())?;

        writeln!(
            out,
            "reference {} ({} keys)",
            report.reference, report.reference_keys
        )?;

        let mut incomplete = 0;
        for locale in dictionary.locales() {
            let tree = dictionary.tree(locale.as_str());
            let unresolved: Vec<&str> = content::required_keys()
                .filter(|key| tree.and_then(|tree| tree.lookup_str(key)).is_none())
                .collect();
            let coverage = report.locales.iter().find(|c| &c.locale == locale);
            let missing = coverage.map_or(&[][..], |c| c.missing.as_slice());
            let extra = coverage.map_or(&[][..], |c| c.extra.as_slice());

            if missing.is_empty() && unresolved.is_empty() {
                writeln!(out, "ok      {locale}")?;
            } else {
                incomplete += 1;
                writeln!(out, "missing {locale}")?;
            }
            for key in missing {
                writeln!(out, "  - {key}")?;
            }
            for key in unresolved
                .iter()
                .copied()
                .filter(|key| !missing.iter().any(|m| m.as_str() == *key))
            {
                writeln!(out, "  - {key} (used by the site)")?;
            }
            for key in extra {
                writeln!(out, "  + {key}")?;
            }
        }

        if incomplete > 0 {
            warn!("{} locale(s) are missing translations", incomplete);
            return Err(SiteError::IncompleteTranslations {
                locales: incomplete,
            });
        }
        info!("All locales cover the {} reference keys", report.reference_keys);
        Ok(())
    }
}
