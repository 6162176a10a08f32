//! Type definitions for mxGraph diagram structures

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Parsed `key=value;...` style attributes of one cell.
///
/// Bare tokens (`rhombus`, `ellipse`) are stored with the value `"1"`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleMap(HashMap<String, String>);

impl StyleMap {
    pub fn new() -> Self {
        Self(HashMap::new())
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(|s| s.as_str())
    }

    /// Value for `key`, or `default` when absent.
    pub fn get_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.get(key).unwrap_or(default)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Real-valued attribute. Absent, unparseable or non-finite values yield `default`.
    pub fn number(&self, key: &str, default: f64) -> f64 {
        match self.get(key) {
            None => default,
            Some(raw) => match raw.trim().parse::<f64>() {
                Ok(v) if v.is_finite() => v,
                _ => {
                    tracing::debug!(key, raw, default, "unparseable style number, using default");
                    default
                }
            },
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for StyleMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// Canonical rendering category of a node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    Rectangle,
    RoundedRect,
    Terminal, // pill, start/end
    Diamond,
    Parallelogram,
    Ellipse,
}

impl ShapeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::Rectangle => "rectangle",
            ShapeKind::RoundedRect => "rounded_rect",
            ShapeKind::Terminal => "terminal",
            ShapeKind::Diamond => "diamond",
            ShapeKind::Parallelogram => "parallelogram",
            ShapeKind::Ellipse => "ellipse",
        }
    }
}

impl std::fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A 2D point in document coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned bounding box of a node
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    /// Absolute point at fractions `(fx, fy)` of the box (0..1 on each axis).
    pub fn point_at(&self, fx: f64, fy: f64) -> Point {
        Point::new(self.x + self.w * fx, self.y + self.h * fy)
    }

    pub fn corners(&self) -> [Point; 2] {
        [
            Point::new(self.x, self.y),
            Point::new(self.x + self.w, self.y + self.h),
        ]
    }
}

/// A vertex cell with geometry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
    pub bounds: Rect,
    /// Raw `value` attribute, may hold markup and entities
    pub label: String,
    pub shape: ShapeKind,
    pub style: StyleMap,
}

/// An edge cell. Endpoints reference nodes by identifier only.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Edge {
    pub source: Option<String>,
    pub target: Option<String>,
    pub style: StyleMap,
    pub label: String,
    /// Interior points, document order
    pub waypoints: Vec<Point>,
    #[serde(default, rename = "sourcePoint")]
    pub source_point: Option<Point>,
    #[serde(default, rename = "targetPoint")]
    pub target_point: Option<Point>,
}

/// The extracted graph: nodes keyed by identifier, edges in document order
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Diagram {
    pub nodes: IndexMap<String, Node>,
    pub edges: Vec<Edge>,
}

impl Diagram {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.get(id)
    }
}

/// Running min/max over document points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds {
    pub fn from_point(p: Point) -> Self {
        Self {
            min_x: p.x,
            min_y: p.y,
            max_x: p.x,
            max_y: p.y,
        }
    }

    pub fn include(&mut self, p: Point) {
        self.min_x = self.min_x.min(p.x);
        self.min_y = self.min_y.min(p.y);
        self.max_x = self.max_x.max(p.x);
        self.max_y = self.max_y.max(p.y);
    }

    /// Grow by `padding` on every side.
    pub fn pad(self, padding: f64) -> Self {
        Self {
            min_x: self.min_x - padding,
            min_y: self.min_y - padding,
            max_x: self.max_x + padding,
            max_y: self.max_y + padding,
        }
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_at_fractions() {
        let r = Rect::new(10.0, 20.0, 100.0, 40.0);
        assert_eq!(r.point_at(0.5, 1.0), Point::new(60.0, 60.0));
        assert_eq!(r.point_at(0.0, 0.0), Point::new(10.0, 20.0));
        assert_eq!(r.center(), Point::new(60.0, 40.0));
    }

    #[test]
    fn test_bounds_pad() {
        let mut b = Bounds::from_point(Point::new(0.0, 0.0));
        b.include(Point::new(110.0, 110.0));
        b.include(Point::new(50.0, -5.0));
        let b = b.pad(20.0);
        assert_eq!(b.min_x, -20.0);
        assert_eq!(b.min_y, -25.0);
        assert_eq!(b.width(), 150.0);
        assert_eq!(b.height(), 155.0);
    }

    #[test]
    fn test_shape_kind_serializes_to_canonical_name() {
        let json = serde_json::to_string(&ShapeKind::RoundedRect).unwrap();
        assert_eq!(json, "\"rounded_rect\"");
        assert_eq!(ShapeKind::Terminal.to_string(), "terminal");
    }

    #[test]
    fn test_style_number_defaults() {
        let style: StyleMap = [("strokeWidth", "abc"), ("exitX", " 0.25 ")].into_iter().collect();
        assert_eq!(style.number("strokeWidth", 2.0), 2.0);
        assert_eq!(style.number("exitX", 0.5), 0.25);
        assert_eq!(style.number("missing", 1.0), 1.0);
    }

    #[test]
    fn test_style_number_rejects_non_finite() {
        let style: StyleMap = [("strokeWidth", "NaN"), ("exitX", "inf"), ("exitY", "-infinity")]
            .into_iter()
            .collect();
        assert_eq!(style.number("strokeWidth", 2.0), 2.0);
        assert_eq!(style.number("exitX", 0.5), 0.5);
        assert_eq!(style.number("exitY", 0.5), 0.5);
    }
}
