//! Localized catalog views.
//!
//! A [`Catalog`] pairs the category hierarchy with the locale settings. Each
//! render pass takes one [`CatalogView`], which fixes the locale, fallback
//! and direction for every lookup made through it.

use std::path::Path;

use serde::Serialize;

use crate::category::{Category, CategoryTree};
use crate::config::Config;
use crate::error::Result;
use crate::i18n::{resolve_locale, Direction};
use crate::style::DirectionalStyle;

/// Category projected into a single locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocalizedCategory {
    pub id: String,
    pub slug: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub level: u32,
    pub is_active: bool,
}

#[derive(Debug, Clone)]
pub struct Catalog {
    tree: CategoryTree,
    default_locale: String,
    fallback_locale: String,
}

impl Catalog {
    pub fn new(
        tree: CategoryTree,
        default_locale: impl Into<String>,
        fallback_locale: impl Into<String>,
    ) -> Self {
        Self {
            tree,
            default_locale: default_locale.into(),
            fallback_locale: fallback_locale.into(),
        }
    }

    /// Catalog described by the configuration under `base_dir`.
    pub fn from_config(config: &Config, base_dir: &Path) -> Result<Self> {
        let tree = config.load_catalog(base_dir)?;
        Ok(Self::new(
            tree,
            config.locale.default.clone(),
            config.locale.fallback.clone(),
        ))
    }

    pub fn tree(&self) -> &CategoryTree {
        &self.tree
    }

    /// Snapshot the locale for one render pass.
    ///
    /// `None` or an unsupported locale falls back to the configured default.
    pub fn view(&self, locale: Option<&str>) -> CatalogView<'_> {
        let locale = resolve_locale(locale, &self.default_locale);
        CatalogView {
            tree: &self.tree,
            locale,
            fallback_locale: &self.fallback_locale,
            direction: Direction::for_locale(locale),
        }
    }
}

/// Read-only catalog access bound to one locale.
#[derive(Debug, Clone, Copy)]
pub struct CatalogView<'a> {
    tree: &'a CategoryTree,
    locale: &'static str,
    fallback_locale: &'a str,
    direction: Direction,
}

impl<'a> CatalogView<'a> {
    pub fn locale(&self) -> &'static str {
        self.locale
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn style(&self) -> DirectionalStyle {
        DirectionalStyle::new(self.direction)
    }

    pub fn label(&self, category: &'a Category) -> &'a str {
        category.name.resolve(self.locale, self.fallback_locale)
    }

    pub fn description(&self, category: &'a Category) -> Option<&'a str> {
        category
            .description
            .as_ref()
            .map(|d| d.resolve(self.locale, self.fallback_locale))
    }

    pub fn localize(&self, category: &'a Category) -> LocalizedCategory {
        LocalizedCategory {
            id: category.id.clone(),
            slug: category.slug.clone(),
            name: self.label(category).to_string(),
            description: self.description(category).map(str::to_string),
            level: category.level,
            is_active: category.is_active,
        }
    }

    pub fn find_by_slug(&self, slug: &str) -> Option<LocalizedCategory> {
        self.tree.find_by_slug(slug).map(|c| self.localize(c))
    }

    pub fn children(&self, parent_id: &str) -> Vec<LocalizedCategory> {
        self.tree
            .children_of(parent_id)
            .into_iter()
            .map(|c| self.localize(c))
            .collect()
    }

    /// Localized breadcrumbs, root first. `Ok(None)` for unknown ids.
    pub fn breadcrumb_trail(&self, id: &str) -> Result<Option<Vec<LocalizedCategory>>> {
        Ok(self
            .tree
            .breadcrumbs(id)?
            .map(|crumbs| crumbs.into_iter().map(|c| self.localize(c)).collect()))
    }

    /// Breadcrumb labels in visual order: reversed for right-to-left layouts.
    pub fn breadcrumb_labels(&self, id: &str) -> Result<Option<Vec<&'a str>>> {
        let Some(crumbs) = self.tree.breadcrumbs(id)? else {
            return Ok(None);
        };
        let mut labels: Vec<&'a str> = crumbs.into_iter().map(|c| self.label(c)).collect();
        if self.direction.is_rtl() {
            labels.reverse();
        }
        Ok(Some(labels))
    }
}
