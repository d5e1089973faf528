use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::category::{CategoriesFile, CategoryTree, DEFAULT_MAX_DEPTH};
use crate::error::{Result, StorefrontError};
use crate::i18n::DEFAULT_LOCALE;

const CONFIG_FILE: &str = "storefront.toml";

/// Default config template with rich comments
const DEFAULT_CONFIG_TEMPLATE: &str = r#"# storefront configuration file
# Location: ~/.storefront/storefront.toml

[locale]
# Locale used when a request does not name one
# Default: "en"
default = "en"

# Last locale tried before giving up on a translation
# Default: "en"
fallback = "en"

[catalog]
# Maximum number of category levels (roots are level 0)
# Default: 3
max_depth = 3

# Catalog file with [[category]] entries, relative to this directory.
# The builtin hierarchy is used when unset.
# Example: path = "categories.toml"
"#;

/// Global configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub locale: LocaleConfig,

    #[serde(default)]
    pub catalog: CatalogConfig,
}

/// Locale-related configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LocaleConfig {
    #[serde(default = "default_locale")]
    pub default: String,

    #[serde(default = "default_locale")]
    pub fallback: String,
}

fn default_locale() -> String {
    DEFAULT_LOCALE.to_string()
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            default: default_locale(),
            fallback: default_locale(),
        }
    }
}

/// Catalog-related configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogConfig {
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,

    /// Catalog file, relative to the base directory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

fn default_max_depth() -> usize {
    DEFAULT_MAX_DEPTH
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            max_depth: default_max_depth(),
            path: None,
        }
    }
}

impl Config {
    /// Load config from base directory
    pub fn load(base_dir: &Path) -> Result<Self> {
        let path = base_dir.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        let config: Config = toml::from_str(&content).map_err(|e| StorefrontError::ConfigParse {
            path: path.clone(),
            message: e.to_string(),
        })?;

        Ok(config)
    }

    /// Save config to base directory
    pub fn save(&self, base_dir: &Path) -> Result<()> {
        let path = base_dir.join(CONFIG_FILE);
        fs::create_dir_all(base_dir)?;

        let content = toml::to_string_pretty(self)?;

        fs::write(&path, content)?;
        Ok(())
    }

    /// Get config file path
    pub fn path(base_dir: &Path) -> PathBuf {
        base_dir.join(CONFIG_FILE)
    }

    /// Initialize config with default template (rich comments)
    pub fn init(base_dir: &Path) -> Result<PathBuf> {
        let path = base_dir.join(CONFIG_FILE);
        fs::create_dir_all(base_dir)?;

        if !path.exists() {
            fs::write(&path, DEFAULT_CONFIG_TEMPLATE)?;
        }

        Ok(path)
    }

    /// Get a config value by dot-notation key
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "locale.default" => Some(self.locale.default.clone()),
            "locale.fallback" => Some(self.locale.fallback.clone()),
            "catalog.max_depth" => Some(self.catalog.max_depth.to_string()),
            "catalog.path" => Some(
                self.catalog
                    .path
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_default(),
            ),
            _ => None,
        }
    }

    /// Set a config value by dot-notation key
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "locale.default" => {
                self.locale.default = parse_locale(key, value)?;
                Ok(())
            }
            "locale.fallback" => {
                self.locale.fallback = parse_locale(key, value)?;
                Ok(())
            }
            "catalog.max_depth" => {
                self.catalog.max_depth = parse_max_depth(key, value)?;
                Ok(())
            }
            "catalog.path" => {
                let trimmed = value.trim();
                self.catalog.path = if trimmed.is_empty() {
                    None
                } else {
                    Some(PathBuf::from(trimmed))
                };
                Ok(())
            }
            _ => Err(StorefrontError::ConfigKeyNotFound {
                key: key.to_string(),
            }),
        }
    }

    /// List all config keys with their current values
    pub fn list(&self) -> Vec<(String, String)> {
        ["locale.default", "locale.fallback", "catalog.max_depth", "catalog.path"]
            .iter()
            .filter_map(|key| self.get(key).map(|value| (key.to_string(), value)))
            .collect()
    }

    /// Catalog file location, resolved against the base directory
    pub fn catalog_path(&self, base_dir: &Path) -> Option<PathBuf> {
        self.catalog.path.as_ref().map(|p| base_dir.join(p))
    }

    /// Load and validate the configured hierarchy
    pub fn load_catalog(&self, base_dir: &Path) -> Result<CategoryTree> {
        let file = match self.catalog_path(base_dir) {
            Some(path) => {
                tracing::debug!(path = %path.display(), "loading catalog file");
                CategoriesFile::load(&path)?
            }
            None => CategoriesFile::builtin(),
        };
        file.into_tree(self.catalog.max_depth)
    }
}

fn parse_locale(key: &str, value: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() || trimmed.contains(char::is_whitespace) {
        return Err(StorefrontError::InvalidConfigValue {
            key: key.to_string(),
            message: format!("'{}' is not a locale code", value),
        });
    }
    Ok(trimmed.to_string())
}

fn parse_max_depth(key: &str, value: &str) -> Result<usize> {
    match value.trim().parse::<usize>() {
        Ok(depth) if depth > 0 => Ok(depth),
        _ => Err(StorefrontError::InvalidConfigValue {
            key: key.to_string(),
            message: format!("expected a positive integer, got '{}'", value),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_missing_is_default() {
        let temp = TempDir::new().unwrap();
        let config = Config::load(temp.path()).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.locale.fallback, "en");
        assert_eq!(config.catalog.max_depth, 3);
    }

    #[test]
    fn test_init_template_parses() {
        let temp = TempDir::new().unwrap();
        let path = Config::init(temp.path()).unwrap();
        assert!(path.exists());
        assert_eq!(Config::load(temp.path()).unwrap(), Config::default());
    }

    #[test]
    fn test_init_does_not_overwrite() {
        let temp = TempDir::new().unwrap();
        let mut config = Config::default();
        config.set("locale.default", "he").unwrap();
        config.save(temp.path()).unwrap();

        Config::init(temp.path()).unwrap();
        assert_eq!(Config::load(temp.path()).unwrap().locale.default, "he");
    }

    #[test]
    fn test_config_get_set() {
        let mut config = Config::default();

        config.set("locale.default", " he ").unwrap();
        assert_eq!(config.get("locale.default").unwrap(), "he");

        config.set("catalog.max_depth", "4").unwrap();
        assert_eq!(config.catalog.max_depth, 4);

        config.set("catalog.path", "categories.toml").unwrap();
        assert_eq!(config.get("catalog.path").unwrap(), "categories.toml");

        config.set("catalog.path", "").unwrap();
        assert_eq!(config.catalog.path, None);
    }

    #[test]
    fn test_config_set_rejects_bad_values() {
        let mut config = Config::default();
        assert!(matches!(
            config.set("catalog.max_depth", "0"),
            Err(StorefrontError::InvalidConfigValue { .. })
        ));
        assert!(matches!(
            config.set("catalog.max_depth", "deep"),
            Err(StorefrontError::InvalidConfigValue { .. })
        ));
        assert!(matches!(
            config.set("locale.fallback", "  "),
            Err(StorefrontError::InvalidConfigValue { .. })
        ));
        assert!(matches!(
            config.set("locale.nope", "en"),
            Err(StorefrontError::ConfigKeyNotFound { .. })
        ));
    }

    #[test]
    fn test_list_covers_every_key() {
        let keys: Vec<_> = Config::default().list().into_iter().map(|(k, _)| k).collect();
        assert_eq!(
            keys,
            vec![
                "locale.default",
                "locale.fallback",
                "catalog.max_depth",
                "catalog.path"
            ]
        );
    }

    #[test]
    fn test_save_then_load() {
        let temp = TempDir::new().unwrap();
        let mut config = Config::default();
        config.set("locale.default", "he").unwrap();
        config.set("catalog.path", "categories.toml").unwrap();
        config.save(temp.path()).unwrap();
        assert_eq!(Config::load(temp.path()).unwrap(), config);
    }

    #[test]
    fn test_serialize_error_is_not_a_parse_error() {
        let err: StorefrontError = toml::to_string(&1u8).unwrap_err().into();
        assert!(matches!(err, StorefrontError::TomlSer(_)));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_parse_error_reports_path() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILE), "[catalog]\nmax_depth = \"x\"").unwrap();
        assert!(matches!(
            Config::load(temp.path()),
            Err(StorefrontError::ConfigParse { .. })
        ));
    }

    #[test]
    fn test_load_catalog_builtin_by_default() {
        let temp = TempDir::new().unwrap();
        let tree = Config::default().load_catalog(temp.path()).unwrap();
        assert!(tree.find_by_slug("tactical-gear").is_some());
    }

    #[test]
    fn test_load_catalog_from_file_honors_max_depth() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("categories.toml"),
            r#"
[[category]]
id = "1"
slug = "root"
name = "Root"

[[category]]
id = "1-1"
slug = "child"
parent_id = "1"
name = "Child"
"#,
        )
        .unwrap();

        let mut config = Config::default();
        config.set("catalog.path", "categories.toml").unwrap();
        assert_eq!(config.load_catalog(temp.path()).unwrap().len(), 2);

        config.set("catalog.max_depth", "1").unwrap();
        let err = config.load_catalog(temp.path()).unwrap_err();
        assert!(err.is_structural());
    }
}
