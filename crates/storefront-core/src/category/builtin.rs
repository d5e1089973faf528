//! Builtin Category Definitions
//!
//! The reference storefront hierarchy, defined in code. Used whenever the
//! configuration does not point at a catalog file.

use serde::{Deserialize, Serialize};

use crate::i18n::{LocalizedString, LocalizedText};

/// Maximum number of levels in the reference hierarchy (roots are level 0).
pub const DEFAULT_MAX_DEPTH: usize = 3;

/// Builtin hierarchy. Siblings are not required to appear in sort order.
pub const BUILTIN_CATEGORIES: &[BuiltinCategory] = &[
    BuiltinCategory {
        id: "1",
        slug: "tactical-outdoor",
        parent_id: None,
        name: &[("en", "Tactical & Outdoor"), ("he", "טקטי ושטח")],
        description: &[
            ("en", "Field-tested gear for duty, training and the outdoors."),
            ("he", "ציוד שנבדק בשטח לשירות, לאימונים ולטבע."),
        ],
        sort_order: 1,
        is_active: true,
    },
    BuiltinCategory {
        id: "1-1",
        slug: "tactical-gear",
        parent_id: Some("1"),
        name: &[("en", "Tactical Gear"), ("he", "ציוד טקטי")],
        description: &[],
        sort_order: 1,
        is_active: true,
    },
    BuiltinCategory {
        id: "1-1-1",
        slug: "bags-packs",
        parent_id: Some("1-1"),
        name: &[("en", "Bags & Packs")],
        description: &[("en", "Backpacks, assault packs and duffels.")],
        sort_order: 1,
        is_active: true,
    },
    BuiltinCategory {
        id: "1-1-2",
        slug: "vests-carriers",
        parent_id: Some("1-1"),
        name: &[("en", "Vests & Plate Carriers"), ("he", "אפודים ונשאי לוחות")],
        description: &[],
        sort_order: 2,
        is_active: true,
    },
    BuiltinCategory {
        id: "1-1-3",
        slug: "belts-pouches",
        parent_id: Some("1-1"),
        name: &[("en", "Belts & Pouches"), ("he", "חגורות ופאוצ'ים")],
        description: &[],
        sort_order: 3,
        is_active: true,
    },
    BuiltinCategory {
        id: "1-3",
        slug: "optics",
        parent_id: Some("1"),
        name: &[("en", "Optics & Lighting"), ("he", "אופטיקה ותאורה")],
        description: &[],
        sort_order: 3,
        is_active: true,
    },
    BuiltinCategory {
        id: "1-3-1",
        slug: "flashlights",
        parent_id: Some("1-3"),
        name: &[("en", "Flashlights"), ("he", "פנסים")],
        description: &[],
        sort_order: 1,
        is_active: true,
    },
    BuiltinCategory {
        id: "1-3-2",
        slug: "binoculars",
        parent_id: Some("1-3"),
        name: &[("en", "Binoculars"), ("he", "משקפות")],
        description: &[],
        sort_order: 2,
        is_active: false,
    },
    BuiltinCategory {
        id: "1-2",
        slug: "camping",
        parent_id: Some("1"),
        name: &[("en", "Camping"), ("he", "קמפינג")],
        description: &[],
        sort_order: 2,
        is_active: true,
    },
    BuiltinCategory {
        id: "1-2-1",
        slug: "tents-shelters",
        parent_id: Some("1-2"),
        name: &[("en", "Tents & Shelters"), ("he", "אוהלים ומחסות")],
        description: &[],
        sort_order: 1,
        is_active: true,
    },
    BuiltinCategory {
        id: "1-2-2",
        slug: "sleeping-gear",
        parent_id: Some("1-2"),
        name: &[("en", "Sleeping Gear"), ("he", "ציוד שינה")],
        description: &[],
        sort_order: 2,
        is_active: true,
    },
    BuiltinCategory {
        id: "2",
        slug: "apparel",
        parent_id: None,
        name: &[("en", "Apparel"), ("he", "ביגוד")],
        description: &[],
        sort_order: 2,
        is_active: true,
    },
    BuiltinCategory {
        id: "2-1",
        slug: "footwear",
        parent_id: Some("2"),
        name: &[("en", "Footwear"), ("he", "הנעלה")],
        description: &[],
        sort_order: 1,
        is_active: true,
    },
    BuiltinCategory {
        id: "2-1-1",
        slug: "boots",
        parent_id: Some("2-1"),
        name: &[("en", "Boots"), ("he", "מגפיים")],
        description: &[],
        sort_order: 1,
        is_active: true,
    },
    BuiltinCategory {
        id: "2-2",
        slug: "jackets",
        parent_id: Some("2"),
        name: &[("en", "Jackets"), ("he", "מעילים")],
        description: &[],
        sort_order: 2,
        is_active: true,
    },
    BuiltinCategory {
        id: "3",
        slug: "accessories",
        parent_id: None,
        name: &[("en", "Accessories"), ("he", "אביזרים")],
        description: &[],
        sort_order: 3,
        is_active: true,
    },
    BuiltinCategory {
        id: "3-2",
        slug: "hydration",
        parent_id: Some("3"),
        name: &[("en", "Hydration"), ("he", "שתייה")],
        description: &[],
        sort_order: 2,
        is_active: true,
    },
    BuiltinCategory {
        id: "3-1",
        slug: "knives-tools",
        parent_id: Some("3"),
        name: &[("en", "Knives & Tools"), ("he", "סכינים וכלים")],
        description: &[],
        sort_order: 1,
        is_active: true,
    },
    BuiltinCategory {
        id: "3-3",
        slug: "gift-cards",
        parent_id: Some("3"),
        name: &[("en", "Gift Cards"), ("he", "כרטיסי מתנה")],
        description: &[],
        sort_order: 3,
        is_active: false,
    },
];

/// Static category definition compiled into the binary.
#[derive(Debug, Clone)]
pub struct BuiltinCategory {
    pub id: &'static str,
    pub slug: &'static str,
    pub parent_id: Option<&'static str>,
    /// (locale, text) pairs in resolution order
    pub name: &'static [(&'static str, &'static str)],
    /// Empty when the category has no description
    pub description: &'static [(&'static str, &'static str)],
    pub sort_order: i32,
    pub is_active: bool,
}

/// Runtime category definition, before the hierarchy is validated.
///
/// Built from a builtin entry or a `[[category]]` entry of a catalog file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryDef {
    pub id: String,
    pub slug: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    #[serde(default)]
    pub sort_order: i32,
    #[serde(default = "default_active")]
    pub is_active: bool,
    /// Checked against the parent chain when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<u32>,
    pub name: LocalizedText,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<LocalizedText>,
}

fn default_active() -> bool {
    true
}

impl CategoryDef {
    pub fn new(
        id: impl Into<String>,
        slug: impl Into<String>,
        name: impl Into<LocalizedText>,
    ) -> Self {
        Self {
            id: id.into(),
            slug: slug.into(),
            parent_id: None,
            sort_order: 0,
            is_active: true,
            level: None,
            name: name.into(),
            description: None,
        }
    }

    pub fn parent(mut self, parent_id: impl Into<String>) -> Self {
        self.parent_id = Some(parent_id.into());
        self
    }

    pub fn sort_order(mut self, sort_order: i32) -> Self {
        self.sort_order = sort_order;
        self
    }

    pub fn inactive(mut self) -> Self {
        self.is_active = false;
        self
    }
}

fn localized(pairs: &[(&str, &str)]) -> LocalizedString {
    pairs.iter().copied().collect()
}

impl From<&BuiltinCategory> for CategoryDef {
    fn from(builtin: &BuiltinCategory) -> Self {
        Self {
            id: builtin.id.to_string(),
            slug: builtin.slug.to_string(),
            parent_id: builtin.parent_id.map(str::to_string),
            sort_order: builtin.sort_order,
            is_active: builtin.is_active,
            level: None,
            name: LocalizedText::Localized(localized(builtin.name)),
            description: if builtin.description.is_empty() {
                None
            } else {
                Some(LocalizedText::Localized(localized(builtin.description)))
            },
        }
    }
}

/// Builtin hierarchy as runtime definitions.
pub fn builtin_defs() -> Vec<CategoryDef> {
    BUILTIN_CATEGORIES.iter().map(CategoryDef::from).collect()
}
