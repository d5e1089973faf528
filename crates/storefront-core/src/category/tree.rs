//! Category Tree
//!
//! Arena of categories indexed by id. Parent/child links are indices into
//! the arena; the nested shape is only materialized on request.

use std::collections::HashMap;

use serde::Serialize;

use super::builtin::{builtin_defs, CategoryDef, DEFAULT_MAX_DEPTH};
use crate::error::{Result, StorefrontError};
use crate::i18n::LocalizedText;

/// A validated node of the hierarchy.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Category {
    pub id: String,
    pub slug: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    pub name: LocalizedText,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<LocalizedText>,
    /// 0 for roots, parent level + 1 otherwise
    pub level: u32,
    pub sort_order: i32,
    pub is_active: bool,
}

impl Category {
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }
}

/// Tree-shaped view over a [`CategoryTree`].
#[derive(Debug, Clone, Serialize)]
pub struct CategoryNode<'a> {
    #[serde(flatten)]
    pub category: &'a Category,
    pub children: Vec<CategoryNode<'a>>,
}

/// Flatten a nested view in pre-order.
pub fn flatten_nodes<'a>(nodes: &[CategoryNode<'a>]) -> Vec<&'a Category> {
    let mut out = Vec::new();
    let mut stack: Vec<&CategoryNode<'a>> = nodes.iter().rev().collect();
    while let Some(node) = stack.pop() {
        out.push(node.category);
        stack.extend(node.children.iter().rev());
    }
    out
}

/// Static category hierarchy with structural queries.
#[derive(Debug, Clone)]
pub struct CategoryTree {
    /// Definition order
    nodes: Vec<Category>,
    parents: Vec<Option<usize>>,
    /// Sorted by sort_order, ties in definition order
    children: Vec<Vec<usize>>,
    roots: Vec<usize>,
    preorder: Vec<usize>,
    by_id: HashMap<String, usize>,
    by_slug: HashMap<String, usize>,
    max_depth: usize,
}

impl CategoryTree {
    /// Validate definitions and build the tree.
    ///
    /// Duplicate ids or slugs, unknown parents, cycles, hierarchies deeper
    /// than `max_depth` levels and declared levels that disagree with the
    /// parent chain are all rejected.
    pub fn new(defs: impl IntoIterator<Item = CategoryDef>, max_depth: usize) -> Result<Self> {
        Self::build(defs.into_iter().collect(), max_depth).map_err(|e| {
            tracing::warn!(error = %e, "rejected category hierarchy");
            e
        })
    }

    /// Reference hierarchy with the default depth limit.
    pub fn builtin() -> Result<Self> {
        Self::new(builtin_defs(), DEFAULT_MAX_DEPTH)
    }

    fn build(defs: Vec<CategoryDef>, max_depth: usize) -> Result<Self> {
        let mut nodes: Vec<Category> = Vec::with_capacity(defs.len());
        let mut declared_levels = Vec::with_capacity(defs.len());
        let mut by_id: HashMap<String, usize> = HashMap::with_capacity(defs.len());
        let mut by_slug: HashMap<String, usize> = HashMap::with_capacity(defs.len());

        for def in defs {
            let idx = nodes.len();
            if by_id.contains_key(&def.id) {
                return Err(StorefrontError::DuplicateId { id: def.id });
            }
            if let Some(&first) = by_slug.get(&def.slug) {
                return Err(StorefrontError::DuplicateSlug {
                    slug: def.slug,
                    first: nodes[first].id.clone(),
                    second: def.id,
                });
            }
            by_id.insert(def.id.clone(), idx);
            by_slug.insert(def.slug.clone(), idx);
            declared_levels.push(def.level);
            nodes.push(Category {
                id: def.id,
                slug: def.slug,
                parent_id: def.parent_id,
                name: def.name,
                description: def.description,
                level: 0,
                sort_order: def.sort_order,
                is_active: def.is_active,
            });
        }

        let parents = nodes
            .iter()
            .map(|node| match &node.parent_id {
                None => Ok(None),
                Some(parent_id) => by_id.get(parent_id).map(|&p| Some(p)).ok_or_else(|| {
                    StorefrontError::UnknownParent {
                        id: node.id.clone(),
                        parent_id: parent_id.clone(),
                    }
                }),
            })
            .collect::<Result<Vec<_>>>()?;

        let mut tree = Self {
            children: vec![Vec::new(); nodes.len()],
            nodes,
            parents,
            roots: Vec::new(),
            preorder: Vec::new(),
            by_id,
            by_slug,
            max_depth,
        };

        for idx in 0..tree.nodes.len() {
            let path = tree.walk_to_root(idx)?;
            let level = (path.len() - 1) as u32;
            if path.len() > max_depth {
                return Err(StorefrontError::DepthExceeded {
                    id: tree.nodes[idx].id.clone(),
                    level,
                    max_depth,
                });
            }
            if let Some(declared) = declared_levels[idx] {
                if declared != level {
                    return Err(StorefrontError::LevelMismatch {
                        id: tree.nodes[idx].id.clone(),
                        declared,
                        actual: level,
                    });
                }
            }
            tree.nodes[idx].level = level;
        }

        for idx in 0..tree.nodes.len() {
            match tree.parents[idx] {
                Some(parent) => tree.children[parent].push(idx),
                None => tree.roots.push(idx),
            }
        }
        let nodes = &tree.nodes;
        tree.roots.sort_by_key(|&i| nodes[i].sort_order);
        for siblings in &mut tree.children {
            siblings.sort_by_key(|&i| nodes[i].sort_order);
        }

        tree.preorder = tree.preorder_from(&tree.roots, |_| true);

        tracing::debug!(
            nodes = tree.nodes.len(),
            roots = tree.roots.len(),
            max_depth,
            "built category tree"
        );
        Ok(tree)
    }

    /// Indices from `start` up to its root, bounded to `max_depth + 1` hops.
    fn walk_to_root(&self, start: usize) -> Result<Vec<usize>> {
        let mut path = vec![start];
        let mut current = start;
        for _ in 0..=self.max_depth {
            match self.parents[current] {
                None => return Ok(path),
                Some(parent) => {
                    if path.contains(&parent) {
                        return Err(StorefrontError::CycleDetected {
                            id: self.nodes[start].id.clone(),
                            hops: path.len(),
                        });
                    }
                    path.push(parent);
                    current = parent;
                }
            }
        }
        Err(StorefrontError::DepthExceeded {
            id: self.nodes[start].id.clone(),
            level: (path.len() - 1) as u32,
            max_depth: self.max_depth,
        })
    }

    /// Pre-order walk from `starts`, pruning subtrees whose root fails `keep`.
    fn preorder_from(&self, starts: &[usize], keep: impl Fn(&Category) -> bool) -> Vec<usize> {
        let mut out = Vec::with_capacity(self.nodes.len());
        let mut stack: Vec<usize> = starts.iter().rev().copied().collect();
        while let Some(idx) = stack.pop() {
            if !keep(&self.nodes[idx]) {
                continue;
            }
            out.push(idx);
            stack.extend(self.children[idx].iter().rev());
        }
        out
    }

    fn resolve(&self, indices: &[usize]) -> Vec<&Category> {
        indices.iter().map(|&i| &self.nodes[i]).collect()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Direct lookup by id. Inactive categories are included.
    pub fn get(&self, id: &str) -> Option<&Category> {
        self.by_id.get(id).map(|&i| &self.nodes[i])
    }

    pub fn find_by_slug(&self, slug: &str) -> Option<&Category> {
        self.by_slug.get(slug).map(|&i| &self.nodes[i])
    }

    pub fn roots(&self) -> Vec<&Category> {
        self.resolve(&self.roots)
    }

    /// Every category in pre-order, siblings by sort order.
    pub fn flatten(&self) -> Vec<&Category> {
        self.resolve(&self.preorder)
    }

    /// Pre-order over active categories whose ancestors are all active.
    pub fn flatten_active(&self) -> Vec<&Category> {
        let indices = self.preorder_from(&self.roots, |c| c.is_active);
        self.resolve(&indices)
    }

    /// Children of `parent_id` by sort order; empty for leaves and unknown ids.
    pub fn children_of(&self, parent_id: &str) -> Vec<&Category> {
        match self.by_id.get(parent_id) {
            Some(&idx) => self.resolve(&self.children[idx]),
            None => Vec::new(),
        }
    }

    pub fn children_of_active(&self, parent_id: &str) -> Vec<&Category> {
        self.children_of(parent_id)
            .into_iter()
            .filter(|c| c.is_active)
            .collect()
    }

    /// Everything below `id` in pre-order, excluding `id` itself.
    pub fn descendants(&self, id: &str) -> Vec<&Category> {
        match self.by_id.get(id) {
            Some(&idx) => {
                let indices = self.preorder_from(&self.children[idx], |_| true);
                self.resolve(&indices)
            }
            None => Vec::new(),
        }
    }

    /// Path from the root down to `id`, both inclusive.
    ///
    /// `Ok(None)` when `id` is unknown. A parent chain that does not reach a
    /// root within `max_depth + 1` hops is a structural error.
    pub fn breadcrumbs(&self, id: &str) -> Result<Option<Vec<&Category>>> {
        let Some(&idx) = self.by_id.get(id) else {
            return Ok(None);
        };
        let mut path = self.walk_to_root(idx)?;
        path.reverse();
        Ok(Some(self.resolve(&path)))
    }

    /// Nested view of the whole hierarchy.
    pub fn nested(&self) -> Vec<CategoryNode<'_>> {
        self.roots.iter().map(|&i| self.node(i)).collect()
    }

    /// Nested view of the subtree rooted at `id`.
    pub fn subtree(&self, id: &str) -> Option<CategoryNode<'_>> {
        self.by_id.get(id).map(|&i| self.node(i))
    }

    fn node(&self, idx: usize) -> CategoryNode<'_> {
        CategoryNode {
            category: &self.nodes[idx],
            children: self.children[idx].iter().map(|&c| self.node(c)).collect(),
        }
    }
}
