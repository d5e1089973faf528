//! Storefront core: the category hierarchy, localized content resolution
//! and right-to-left style mapping behind the multilingual storefront.
//!
//! All resolvers are pure and synchronous. Locale and direction are passed
//! explicitly to every call; nothing reads ambient state.

pub mod catalog;
pub mod category;
pub mod config;
pub mod error;
pub mod i18n;
pub mod style;

pub use catalog::{Catalog, CatalogView, LocalizedCategory};
pub use config::Config;
pub use error::{Result, StorefrontError};
pub use i18n::{
    resolve, resolve_default, resolve_locale, Direction, LocalizedString, LocalizedText,
};
pub use style::{DirectionalStyle, LogicalSide, PhysicalSide};

// Category system
pub use category::{
    CategoriesFile, Category, CategoryDef, CategoryNode, CategoryTree, BUILTIN_CATEGORIES,
    DEFAULT_MAX_DEPTH,
};
