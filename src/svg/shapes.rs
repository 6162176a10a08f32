//! Node shape primitives.
//!
//! Each canonical shape kind has one fixed rendering rule inside the node's
//! bounding box. Coordinates are absolute document coordinates.

use super::renderer::{escape_xml, fmt_num};
use super::styles::{Defaults, Skew, ROUNDED_CORNER_RADIUS};
use crate::types::{Point, Rect, ShapeKind, StyleMap};

/// Fill, stroke and stroke width resolved from a cell style
#[derive(Debug, Clone, PartialEq)]
pub struct Paint<'a> {
    pub fill: &'a str,
    pub stroke: &'a str,
    pub stroke_width: f64,
}

impl<'a> Paint<'a> {
    pub fn from_style(style: &'a StyleMap) -> Self {
        Self {
            fill: style.get_or("fillColor", Defaults::FILL),
            stroke: style.get_or("strokeColor", Defaults::STROKE),
            stroke_width: style.number("strokeWidth", Defaults::STROKE_WIDTH),
        }
    }

    fn attrs(&self) -> String {
        format!(
            r#"fill="{}" stroke="{}" stroke-width="{}""#,
            escape_xml(self.fill),
            escape_xml(self.stroke),
            fmt_num(self.stroke_width)
        )
    }
}

impl Default for Paint<'_> {
    fn default() -> Self {
        Self {
            fill: Defaults::FILL,
            stroke: Defaults::STROKE,
            stroke_width: Defaults::STROKE_WIDTH,
        }
    }
}

/// Render the filled outline of a node.
pub fn render_shape(kind: ShapeKind, bounds: &Rect, paint: &Paint) -> String {
    match kind {
        ShapeKind::Rectangle => render_rect(bounds, 0.0, paint),
        ShapeKind::RoundedRect => render_rect(bounds, ROUNDED_CORNER_RADIUS, paint),
        ShapeKind::Terminal => render_rect(bounds, bounds.h / 2.0, paint),
        ShapeKind::Diamond => render_polygon(&diamond_points(bounds), paint),
        ShapeKind::Parallelogram => render_polygon(&parallelogram_points(bounds), paint),
        ShapeKind::Ellipse => render_ellipse(bounds, paint),
    }
}

fn render_rect(b: &Rect, radius: f64, paint: &Paint) -> String {
    format!(
        r#"<rect x="{}" y="{}" width="{}" height="{}" rx="{}" ry="{}" {} />"#,
        fmt_num(b.x),
        fmt_num(b.y),
        fmt_num(b.w),
        fmt_num(b.h),
        fmt_num(radius),
        fmt_num(radius),
        paint.attrs()
    )
}

fn render_ellipse(b: &Rect, paint: &Paint) -> String {
    let c = b.center();
    format!(
        r#"<ellipse cx="{}" cy="{}" rx="{}" ry="{}" {} />"#,
        fmt_num(c.x),
        fmt_num(c.y),
        fmt_num(b.w / 2.0),
        fmt_num(b.h / 2.0),
        paint.attrs()
    )
}

fn render_polygon(points: &[Point], paint: &Paint) -> String {
    format!(
        r#"<polygon points="{}" {} />"#,
        points_attr(points),
        paint.attrs()
    )
}

/// Top, right, bottom, left edge midpoints.
pub fn diamond_points(b: &Rect) -> [Point; 4] {
    let c = b.center();
    let hw = b.w / 2.0;
    let hh = b.h / 2.0;
    [
        Point::new(c.x, c.y - hh),
        Point::new(c.x + hw, c.y),
        Point::new(c.x, c.y + hh),
        Point::new(c.x - hw, c.y),
    ]
}

/// Slanted quadrilateral leaning right, inscribed in the box.
pub fn parallelogram_points(b: &Rect) -> [Point; 4] {
    let skew = (b.h * Skew::HEIGHT).min(b.w * Skew::WIDTH);
    [
        Point::new(b.x + skew, b.y),
        Point::new(b.x + b.w, b.y),
        Point::new(b.x + b.w - skew, b.y + b.h),
        Point::new(b.x, b.y + b.h),
    ]
}

/// `x1,y1 x2,y2 ...` for `points=` attributes
pub fn points_attr(points: &[Point]) -> String {
    points
        .iter()
        .map(|p| format!("{},{}", fmt_num(p.x), fmt_num(p.y)))
        .collect::<Vec<_>>()
        .join(" ")
}
