//! Category Store
//!
//! Catalog files: the TOML form of a category hierarchy, one
//! `[[category]]` table per node.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::builtin::{builtin_defs, CategoryDef};
use super::tree::CategoryTree;
use crate::error::{Result, StorefrontError};

/// Contents of a catalog file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoriesFile {
    #[serde(rename = "category", default)]
    pub categories: Vec<CategoryDef>,
}

impl CategoriesFile {
    pub fn builtin() -> Self {
        Self {
            categories: builtin_defs(),
        }
    }

    pub fn parse(content: &str, path: &Path) -> Result<Self> {
        toml::from_str(content).map_err(|e| StorefrontError::CatalogParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content, path)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Definitions for every node of `tree`, in pre-order, with levels.
    pub fn from_tree(tree: &CategoryTree) -> Self {
        let categories = tree
            .flatten()
            .into_iter()
            .map(|c| CategoryDef {
                id: c.id.clone(),
                slug: c.slug.clone(),
                parent_id: c.parent_id.clone(),
                sort_order: c.sort_order,
                is_active: c.is_active,
                level: Some(c.level),
                name: c.name.clone(),
                description: c.description.clone(),
            })
            .collect();
        Self { categories }
    }

    /// Validate and build the hierarchy.
    pub fn into_tree(self, max_depth: usize) -> Result<CategoryTree> {
        CategoryTree::new(self.categories, max_depth)
    }
}
