//! Edge routing and rendering.
//!
//! An edge is a straight polyline: source connection point (or explicit
//! source point), the waypoints, then the target connection point (or
//! explicit target point).

use super::renderer::{escape_xml, fmt_num};
use super::shapes::{points_attr, Paint};
use super::styles::{edge_label_box_width, Defaults, EdgeLabel, FontSizes};
use super::text::{render_text, FontWeight};
use crate::types::{Diagram, Edge, Point};

/// Default `exitX`/`exitY`: bottom center of the source
const DEFAULT_EXIT: (f64, f64) = (0.5, 1.0);
/// Default `entryX`/`entryY`: top center of the target
const DEFAULT_ENTRY: (f64, f64) = (0.5, 0.0);

/// Absolute point sequence of an edge. May hold fewer than two points.
pub fn resolve_points(edge: &Edge, diagram: &Diagram) -> Vec<Point> {
    let mut points = Vec::with_capacity(edge.waypoints.len() + 2);

    let source = edge.source.as_deref().and_then(|id| diagram.node(id));
    match source {
        Some(node) => {
            let fx = edge.style.number("exitX", DEFAULT_EXIT.0);
            let fy = edge.style.number("exitY", DEFAULT_EXIT.1);
            points.push(node.bounds.point_at(fx, fy));
        }
        None => points.extend(edge.source_point),
    }

    points.extend(edge.waypoints.iter().copied());

    let target = edge.target.as_deref().and_then(|id| diagram.node(id));
    match target {
        Some(node) => {
            let fx = edge.style.number("entryX", DEFAULT_ENTRY.0);
            let fy = edge.style.number("entryY", DEFAULT_ENTRY.1);
            points.push(node.bounds.point_at(fx, fy));
        }
        None => points.extend(edge.target_point),
    }

    points
}

/// Label anchor: midpoint of the segment ending at index `n / 2`, pushed
/// `EdgeLabel::OFFSET` to the right of the direction of travel.
pub fn label_anchor(points: &[Point]) -> Option<Point> {
    if points.len() < 2 {
        return None;
    }
    let mid = points.len() / 2;
    let (a, b) = (points[mid - 1], points[mid]);
    let mx = (a.x + b.x) / 2.0;
    let my = (a.y + b.y) / 2.0;

    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let mut length = dx.hypot(dy);
    if length == 0.0 {
        length = 1.0;
    }
    let ox = -dy / length * EdgeLabel::OFFSET;
    let oy = dx / length * EdgeLabel::OFFSET;
    Some(Point::new(mx + ox, my + oy))
}

/// Render one edge: polyline with arrowhead, then its label group if any.
///
/// Edges that resolve to fewer than two points render as an empty string.
pub fn render_edge(edge: &Edge, diagram: &Diagram) -> String {
    let points = resolve_points(edge, diagram);
    if points.len() < 2 {
        tracing::debug!(
            source = edge.source.as_deref().unwrap_or(""),
            target = edge.target.as_deref().unwrap_or(""),
            points = points.len(),
            "dangling edge not rendered"
        );
        return String::new();
    }

    let paint = Paint::from_style(&edge.style);
    let mut parts = vec![format!(
        r#"<polyline points="{}" fill="none" stroke="{}" stroke-width="{}" marker-end="url(#arrowhead)" />"#,
        points_attr(&points),
        escape_xml(paint.stroke),
        fmt_num(paint.stroke_width)
    )];

    if !edge.label.is_empty() {
        if let Some(anchor) = label_anchor(&points) {
            parts.push(render_label_background(anchor, &edge.label));
            let text = render_text(
                anchor.x,
                anchor.y,
                &edge.label,
                FontSizes::EDGE_LABEL,
                FontWeight::Bold,
            );
            if !text.is_empty() {
                parts.push(text);
            }
        }
    }

    parts.join("\n")
}

fn render_label_background(anchor: Point, label: &str) -> String {
    let width = edge_label_box_width(label);
    format!(
        r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}" rx="{}" ry="{}" stroke="none" />"#,
        fmt_num(anchor.x - width / 2.0),
        fmt_num(anchor.y - EdgeLabel::BOX_HEIGHT / 2.0),
        fmt_num(width),
        fmt_num(EdgeLabel::BOX_HEIGHT),
        Defaults::BACKGROUND,
        fmt_num(EdgeLabel::BOX_RADIUS),
        fmt_num(EdgeLabel::BOX_RADIUS)
    )
}
