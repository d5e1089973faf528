//! # Category Module
//!
//! The storefront's static category hierarchy and the structural queries
//! pages need: flattening, slug lookup, child listing and breadcrumbs.
//!
//! ## Layout
//!
//! - `builtin`: reference hierarchy compiled into the crate
//! - `tree`: validated arena of categories and its queries
//! - `store`: catalog files (TOML) holding a hierarchy
//!
//! ## Example
//!
//! ```rust
//! use storefront_core::category::CategoryTree;
//!
//! let tree = CategoryTree::builtin().unwrap();
//!
//! let bags = tree.find_by_slug("bags-packs").unwrap();
//! assert_eq!(bags.level, 2);
//!
//! let crumbs = tree.breadcrumbs(&bags.id).unwrap().unwrap();
//! let ids: Vec<_> = crumbs.iter().map(|c| c.id.as_str()).collect();
//! assert_eq!(ids, vec!["1", "1-1", "1-1-1"]);
//! ```

mod builtin;
mod store;
mod tree;

// Re-exports
pub use builtin::{
    builtin_defs, BuiltinCategory, CategoryDef, BUILTIN_CATEGORIES, DEFAULT_MAX_DEPTH,
};
pub use store::CategoriesFile;
pub use tree::{flatten_nodes, Category, CategoryNode, CategoryTree};
