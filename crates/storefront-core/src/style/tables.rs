//! Physical → logical CSS lookup tables.

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Physical property → logical property, camelCase (style objects).
const CAMEL_PROPERTIES: &[(&str, &str)] = &[
    ("marginLeft", "marginInlineStart"),
    ("marginRight", "marginInlineEnd"),
    ("paddingLeft", "paddingInlineStart"),
    ("paddingRight", "paddingInlineEnd"),
    ("borderLeft", "borderInlineStart"),
    ("borderRight", "borderInlineEnd"),
    ("borderLeftWidth", "borderInlineStartWidth"),
    ("borderRightWidth", "borderInlineEndWidth"),
    ("borderLeftStyle", "borderInlineStartStyle"),
    ("borderRightStyle", "borderInlineEndStyle"),
    ("borderLeftColor", "borderInlineStartColor"),
    ("borderRightColor", "borderInlineEndColor"),
    ("borderTopLeftRadius", "borderStartStartRadius"),
    ("borderTopRightRadius", "borderStartEndRadius"),
    ("borderBottomLeftRadius", "borderEndStartRadius"),
    ("borderBottomRightRadius", "borderEndEndRadius"),
];

/// Physical property → logical property, kebab-case (stylesheets).
///
/// Bare `left`/`right` have no casing to go by and map to the kebab form.
const KEBAB_PROPERTIES: &[(&str, &str)] = &[
    ("left", "inset-inline-start"),
    ("right", "inset-inline-end"),
    ("margin-left", "margin-inline-start"),
    ("margin-right", "margin-inline-end"),
    ("padding-left", "padding-inline-start"),
    ("padding-right", "padding-inline-end"),
    ("border-left", "border-inline-start"),
    ("border-right", "border-inline-end"),
    ("border-left-width", "border-inline-start-width"),
    ("border-right-width", "border-inline-end-width"),
    ("border-left-style", "border-inline-start-style"),
    ("border-right-style", "border-inline-end-style"),
    ("border-left-color", "border-inline-start-color"),
    ("border-right-color", "border-inline-end-color"),
    ("border-top-left-radius", "border-start-start-radius"),
    ("border-top-right-radius", "border-start-end-radius"),
    ("border-bottom-left-radius", "border-end-start-radius"),
    ("border-bottom-right-radius", "border-end-end-radius"),
];

/// Properties whose values carry a side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ValueKind {
    /// `left`/`right` → `start`/`end`
    TextAlign,
    /// `left`/`right` → `inline-start`/`inline-end`
    InlineSide,
}

const DIRECTIONAL_VALUES: &[(&str, ValueKind)] = &[
    ("textAlign", ValueKind::TextAlign),
    ("text-align", ValueKind::TextAlign),
    ("textAlignLast", ValueKind::TextAlign),
    ("text-align-last", ValueKind::TextAlign),
    ("float", ValueKind::InlineSide),
    ("clear", ValueKind::InlineSide),
];

static PROPERTIES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    CAMEL_PROPERTIES
        .iter()
        .chain(KEBAB_PROPERTIES.iter())
        .copied()
        .collect()
});

static VALUES: Lazy<HashMap<&'static str, ValueKind>> =
    Lazy::new(|| DIRECTIONAL_VALUES.iter().copied().collect());

pub(crate) fn logical_property(physical: &str) -> Option<&'static str> {
    PROPERTIES.get(physical).copied()
}

pub(crate) fn value_kind(property: &str) -> Option<ValueKind> {
    VALUES.get(property).copied()
}

pub(crate) fn logical_value(kind: ValueKind, physical: &str) -> Option<&'static str> {
    match (kind, physical) {
        (ValueKind::TextAlign, "left") => Some("start"),
        (ValueKind::TextAlign, "right") => Some("end"),
        (ValueKind::InlineSide, "left") => Some("inline-start"),
        (ValueKind::InlineSide, "right") => Some("inline-end"),
        _ => None,
    }
}
