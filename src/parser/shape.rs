//! Shape classification from parsed styles.
//!
//! Rules are checked in order and the first match wins; anything left over
//! is a plain rectangle.

use crate::types::{ShapeKind, StyleMap};

/// Minimum `arcSize` for a rounded box to count as a terminal pill.
const TERMINAL_MIN_ARC: i64 = 40;

struct ShapeRule {
    kind: ShapeKind,
    matches: fn(&StyleMap) -> bool,
}

const SHAPE_RULES: &[ShapeRule] = &[
    ShapeRule {
        kind: ShapeKind::Parallelogram,
        matches: is_parallelogram,
    },
    ShapeRule {
        kind: ShapeKind::Diamond,
        matches: is_diamond,
    },
    ShapeRule {
        kind: ShapeKind::Ellipse,
        matches: is_ellipse,
    },
    ShapeRule {
        kind: ShapeKind::Terminal,
        matches: is_terminal,
    },
    ShapeRule {
        kind: ShapeKind::RoundedRect,
        matches: is_rounded,
    },
];

/// Map a style to its canonical shape kind.
pub fn classify_shape(style: &StyleMap) -> ShapeKind {
    SHAPE_RULES
        .iter()
        .find(|rule| (rule.matches)(style))
        .map(|rule| rule.kind)
        .unwrap_or(ShapeKind::Rectangle)
}

fn is_parallelogram(style: &StyleMap) -> bool {
    style.get("shape") == Some("parallelogram")
        || style.get_or("perimeter", "").contains("parallelogramPerimeter")
}

fn is_diamond(style: &StyleMap) -> bool {
    style.contains("rhombus") || style.get("shape") == Some("rhombus")
}

fn is_ellipse(style: &StyleMap) -> bool {
    style.contains("ellipse") || style.get("shape") == Some("ellipse")
}

fn is_rounded(style: &StyleMap) -> bool {
    style.get_or("rounded", "0") == "1"
}

fn is_terminal(style: &StyleMap) -> bool {
    is_rounded(style) && arc_size(style) >= TERMINAL_MIN_ARC
}

/// Integer `arcSize`; missing, non-numeric or fractional (`50.5`) is 0.
fn arc_size(style: &StyleMap) -> i64 {
    style
        .get("arcSize")
        .and_then(|raw| raw.trim().parse::<i64>().ok())
        .unwrap_or(0)
}
