//! # Directional Style
//!
//! Maps physical (left/right) styling onto logical (start/end) styling and
//! provides the direction-aware primitives rendering code builds on.
//!
//! The resolver never validates CSS: unknown properties and values pass
//! through unchanged.
//!
//! ## Example
//!
//! ```
//! use storefront_core::i18n::Direction;
//! use storefront_core::style::DirectionalStyle;
//!
//! let style = DirectionalStyle::new(Direction::Rtl);
//! assert_eq!(style.map_property("marginLeft"), "marginInlineStart");
//! assert_eq!(style.map_value("textAlign", "left"), "start");
//! assert_eq!(style.flip("chevron-right", "chevron-left"), "chevron-left");
//! assert_eq!(style.mirror_number(8.0), -8.0);
//! ```

mod tables;

use serde::{Deserialize, Serialize};

use crate::i18n::Direction;

/// Inline-axis side in logical terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogicalSide {
    Start,
    End,
}

/// Inline-axis side in physical terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhysicalSide {
    Left,
    Right,
}

impl PhysicalSide {
    pub fn as_str(&self) -> &'static str {
        match self {
            PhysicalSide::Left => "left",
            PhysicalSide::Right => "right",
        }
    }
}

/// Direction-aware style resolver for a single writing direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DirectionalStyle {
    direction: Direction,
}

impl DirectionalStyle {
    pub fn new(direction: Direction) -> Self {
        Self { direction }
    }

    pub fn for_locale(locale: &str) -> Self {
        Self::new(Direction::for_locale(locale))
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn is_rtl(&self) -> bool {
        self.direction.is_rtl()
    }

    /// Logical name for a physical property; unknown properties pass through.
    ///
    /// The logical name does not depend on direction.
    pub fn map_property<'a>(&self, property: &'a str) -> &'a str {
        tables::logical_property(property).unwrap_or(property)
    }

    /// Logical value for a side-valued property (`textAlign`, `float`, `clear`).
    pub fn map_value<'a>(&self, property: &str, value: &'a str) -> &'a str {
        tables::value_kind(property)
            .and_then(|kind| tables::logical_value(kind, value))
            .unwrap_or(value)
    }

    /// `rtl` when the direction is right-to-left, else `ltr`.
    pub fn flip<T>(&self, ltr: T, rtl: T) -> T {
        match self.direction {
            Direction::Ltr => ltr,
            Direction::Rtl => rtl,
        }
    }

    /// Negates offsets that must visually mirror under RTL.
    pub fn mirror_number(&self, value: f64) -> f64 {
        match self.direction {
            Direction::Ltr => value,
            Direction::Rtl => -value,
        }
    }

    /// Second element of the pair under RTL, first under LTR.
    pub fn swap<T>(&self, pair: (T, T)) -> T {
        let (a, b) = pair;
        self.flip(a, b)
    }

    /// The pair in visual order: reversed under RTL.
    pub fn ordered<T>(&self, pair: (T, T)) -> [T; 2] {
        let (a, b) = pair;
        match self.direction {
            Direction::Ltr => [a, b],
            Direction::Rtl => [b, a],
        }
    }

    /// Physical side a logical side lands on.
    pub fn physical_side(&self, side: LogicalSide) -> PhysicalSide {
        match side {
            LogicalSide::Start => self.flip(PhysicalSide::Left, PhysicalSide::Right),
            LogicalSide::End => self.flip(PhysicalSide::Right, PhysicalSide::Left),
        }
    }

    /// Rewrite a style declaration list, keeping declaration order.
    pub fn map_declarations<'a, I>(&self, declarations: I) -> Vec<(String, String)>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        declarations
            .into_iter()
            .map(|(property, value)| {
                (
                    self.map_property(property).to_string(),
                    self.map_value(property, value).to_string(),
                )
            })
            .collect()
    }
}

impl From<Direction> for DirectionalStyle {
    fn from(direction: Direction) -> Self {
        Self::new(direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ltr() -> DirectionalStyle {
        DirectionalStyle::new(Direction::Ltr)
    }

    fn rtl() -> DirectionalStyle {
        DirectionalStyle::new(Direction::Rtl)
    }

    #[test]
    fn test_map_property_ignores_direction() {
        assert_eq!(ltr().map_property("marginLeft"), "marginInlineStart");
        assert_eq!(rtl().map_property("marginLeft"), "marginInlineStart");
        assert_eq!(rtl().map_property("paddingRight"), "paddingInlineEnd");
    }

    #[test]
    fn test_map_property_kebab() {
        assert_eq!(ltr().map_property("left"), "inset-inline-start");
        assert_eq!(ltr().map_property("right"), "inset-inline-end");
        assert_eq!(ltr().map_property("margin-right"), "margin-inline-end");
        assert_eq!(
            rtl().map_property("border-top-left-radius"),
            "border-start-start-radius"
        );
    }

    #[test]
    fn test_unknown_property_passes_through() {
        assert_eq!(rtl().map_property("color"), "color");
        assert_eq!(rtl().map_property("marginTop"), "marginTop");
        assert_eq!(rtl().map_property(""), "");
    }

    #[test]
    fn test_map_value() {
        assert_eq!(rtl().map_value("textAlign", "left"), "start");
        assert_eq!(rtl().map_value("text-align", "right"), "end");
        assert_eq!(ltr().map_value("float", "left"), "inline-start");
        assert_eq!(ltr().map_value("clear", "right"), "inline-end");
    }

    #[test]
    fn test_map_value_passthrough() {
        assert_eq!(rtl().map_value("textAlign", "center"), "center");
        assert_eq!(rtl().map_value("float", "none"), "none");
        assert_eq!(rtl().map_value("color", "left"), "left");
    }

    #[test]
    fn test_flip() {
        assert_eq!(ltr().flip("a", "b"), "a");
        assert_eq!(rtl().flip("a", "b"), "b");
    }

    #[test]
    fn test_mirror_number() {
        assert_eq!(ltr().mirror_number(5.0), 5.0);
        assert_eq!(rtl().mirror_number(5.0), -5.0);
        assert_eq!(rtl().mirror_number(-2.5), 2.5);
    }

    #[test]
    fn test_mirror_number_extremes() {
        assert_eq!(rtl().mirror_number(f64::MIN), f64::MAX);
        assert_eq!(rtl().mirror_number(f64::MAX), f64::MIN);
        assert_eq!(rtl().mirror_number(f64::INFINITY), f64::NEG_INFINITY);
        assert_eq!(ltr().mirror_number(f64::MIN), f64::MIN);
        assert!(rtl().mirror_number(f64::NAN).is_nan());
    }

    #[test]
    fn test_swap_and_ordered() {
        assert_eq!(ltr().swap(("icon", "label")), "icon");
        assert_eq!(rtl().swap(("icon", "label")), "label");
        assert_eq!(rtl().ordered(("icon", "label")), ["label", "icon"]);
        assert_eq!(ltr().ordered(("icon", "label")), ["icon", "label"]);
    }

    #[test]
    fn test_physical_side() {
        assert_eq!(ltr().physical_side(LogicalSide::Start), PhysicalSide::Left);
        assert_eq!(rtl().physical_side(LogicalSide::Start), PhysicalSide::Right);
        assert_eq!(rtl().physical_side(LogicalSide::End).as_str(), "left");
    }

    #[test]
    fn test_map_declarations_keeps_order() {
        let mapped = rtl().map_declarations([
            ("marginLeft", "8px"),
            ("textAlign", "right"),
            ("color", "red"),
        ]);
        assert_eq!(
            mapped,
            vec![
                ("marginInlineStart".to_string(), "8px".to_string()),
                ("textAlign".to_string(), "end".to_string()),
                ("color".to_string(), "red".to_string()),
            ]
        );
    }

    #[test]
    fn test_for_locale() {
        assert!(DirectionalStyle::for_locale("he-IL").is_rtl());
        assert!(!DirectionalStyle::for_locale("en").is_rtl());
    }
}
