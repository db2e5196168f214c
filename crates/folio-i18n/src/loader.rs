//! Loading dictionaries from a directory of locale files

use crate::dictionary::Dictionary;
use crate::error::{I18nError, I18nResult};
use crate::locale::LocaleId;
use crate::tree::LocaleTree;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Formats a locale file may be written in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceFormat {
    /// `.json`
    Json,
    /// `.toml`
    Toml,
    /// `.yaml` / `.yml`
    Yaml,
}

impl ResourceFormat {
    /// Detect the format from a file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "json" => Some(Self::Json),
            "toml" => Some(Self::Toml),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }

    /// Parse a locale tree in this format
    pub fn parse(self, content: &str) -> Result<LocaleTree, String> {
        match self {
            Self::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
            Self::Toml => toml::from_str(content).map_err(|e| e.to_string()),
            Self::Yaml => serde_yaml::from_str(content).map_err(|e| e.to_string()),
        }
    }
}

/// Loads one `<locale>.<ext>` file per locale from a directory
#[derive(Debug, Clone)]
pub struct DictionaryLoader {
    base_dir: PathBuf,
}

impl DictionaryLoader {
    /// Create a loader for the given directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
        }
    }

    /// The directory locale files are read from
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Read every recognised locale file into a dictionary.
    ///
    /// Files with other extensions are skipped. Two files for the same
    /// locale (e.g. `en.json` and `en.toml`) are an error.
    pub fn load(&self) -> I18nResult<Dictionary> {
        debug!("Loading locale files from {:?}", self.base_dir);

        let entries = fs::read_dir(&self.base_dir).map_err(|source| I18nError::ResourceLoad {
            path: self.base_dir.to_string_lossy().to_string(),
            source,
        })?;

        let mut paths = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| I18nError::ResourceLoad {
                path: self.base_dir.to_string_lossy().to_string(),
                source,
            })?;
            let path = entry.path();
            if path.is_file() {
                paths.push(path);
            }
        }
        paths.sort();

        let mut locales = HashMap::new();
        for path in paths {
            if ResourceFormat::from_path(&path).is_none() {
                debug!("Skipping non-locale file {:?}", path);
                continue;
            }

            let (locale, tree) = Self::load_file(&path)?;
            if locales.contains_key(&locale) {
                return Err(I18nError::DuplicateLocale {
                    locale: locale.to_string(),
                    dir: self.base_dir.to_string_lossy().to_string(),
                });
            }
            locales.insert(locale, tree);
        }

        let dictionary = Dictionary::new(locales);
        info!(
            "Loaded {} locale(s) from {:?}: {}",
            dictionary.len(),
            self.base_dir,
            dictionary.locale_list()
        );
        Ok(dictionary)
    }

    /// Read a single locale file; the file stem names the locale
    pub fn load_file(path: &Path) -> I18nResult<(LocaleId, LocaleTree)> {
        let display = path.to_string_lossy().to_string();

        let format = ResourceFormat::from_path(path).ok_or_else(|| I18nError::ResourceParse {
            path: display.clone(),
            message: "unsupported file extension".to_string(),
        })?;
        let locale = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .filter(|stem| !stem.is_empty())
            .map(LocaleId::new)
            .ok_or_else(|| I18nError::ResourceParse {
                path: display.clone(),
                message: "file name does not name a locale".to_string(),
            })?;

        let content = fs::read_to_string(path).map_err(|source| I18nError::ResourceLoad {
            path: display.clone(),
            source,
        })?;
        let tree = format
            .parse(&content)
            .map_err(|message| I18nError::ResourceParse { path: display, message })?;

        debug!(
            locale = %locale,
            leaves = tree.leaf_count(),
            "Loaded locale file {:?}",
            path
        );
        Ok((locale, tree))
    }
}

impl Default for DictionaryLoader {
    fn default() -> Self {
        Self::new("locales")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, content: &str) {
        fs::write(dir.path().join(name), content).unwrap();
    }

    #[test]
    fn test_format_detection() {
        assert_eq!(ResourceFormat::from_path(Path::new("en.json")), Some(ResourceFormat::Json));
        assert_eq!(ResourceFormat::from_path(Path::new("fr.TOML")), Some(ResourceFormat::Toml));
        assert_eq!(ResourceFormat::from_path(Path::new("de.yml")), Some(ResourceFormat::Yaml));
        assert_eq!(ResourceFormat::from_path(Path::new("README.md")), None);
        assert_eq!(ResourceFormat::from_path(Path::new("en")), None);
    }

    #[test]
    fn test_load_mixed_formats() {
        let dir = TempDir::new().unwrap();
        write(&dir, "en.json", r#"{ "nav": { "home": "Home" } }"#);
        write(&dir, "fr.toml", "[nav]\nhome = \"Accueil\"\n");
        write(&dir, "es.yaml", "nav:\n  home: Inicio\n");
        write(&dir, "notes.txt", "not a locale");

        let dictionary = DictionaryLoader::new(dir.path()).load().unwrap();
        assert_eq!(dictionary.len(), 3);
        assert_eq!(dictionary.tree("en").unwrap().lookup_str("nav.home"), Some("Home"));
        assert_eq!(dictionary.tree("fr").unwrap().lookup_str("nav.home"), Some("Accueil"));
        assert_eq!(dictionary.tree("es").unwrap().lookup_str("nav.home"), Some("Inicio"));
    }

    #[test]
    fn test_duplicate_locale() {
        let dir = TempDir::new().unwrap();
        write(&dir, "en.json", r#"{ "a": "b" }"#);
        write(&dir, "en.yaml", "a: b\n");

        let err = DictionaryLoader::new(dir.path()).load().unwrap_err();
        assert!(matches!(err, I18nError::DuplicateLocale { ref locale, .. } if locale == "en"));
    }

    #[test]
    fn test_parse_error_names_file() {
        let dir = TempDir::new().unwrap();
        write(&dir, "en.json", "{ not json");

        match DictionaryLoader::new(dir.path()).load() {
            Err(I18nError::ResourceParse { path, .. }) => assert!(path.ends_with("en.json")),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_missing_directory() {
        let dir = TempDir::new().unwrap();
        let err = DictionaryLoader::new(dir.path().join("absent")).load().unwrap_err();
        assert!(matches!(err, I18nError::ResourceLoad { .. }));
    }

    #[test]
    fn test_empty_directory() {
        let dir = TempDir::new().unwrap();
        let dictionary = DictionaryLoader::new(dir.path()).load().unwrap();
        assert!(dictionary.is_empty());
    }
}
