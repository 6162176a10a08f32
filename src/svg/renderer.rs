//! Document assembler - turns an extracted diagram into an SVG string.
//!
//! Pure string building, no DOM manipulation.
//! Renders back-to-front: edges (with their labels) → nodes (with labels).

use super::edges::render_edge;
use super::shapes::{render_shape, Paint};
use super::styles::{node_font_size, ArrowHead, Defaults, EMPTY_DOCUMENT_SIZE};
use super::text::{render_text, FontWeight};
use crate::types::{Bounds, Diagram, Node, Point};
use crate::ConvertOptions;

const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Render an extracted diagram as a standalone SVG document.
pub fn render_svg(diagram: &Diagram, options: &ConvertOptions) -> String {
    let bounds = match diagram_bounds(diagram) {
        Some(b) => b.pad(options.padding),
        None => return empty_document(),
    };

    tracing::debug!(
        nodes = diagram.nodes.len(),
        edges = diagram.edges.len(),
        min_x = bounds.min_x,
        min_y = bounds.min_y,
        width = bounds.width(),
        height = bounds.height(),
        "rendering svg"
    );

    let mut parts: Vec<String> = Vec::new();
    parts.push(svg_open_tag(&bounds));
    parts.push("<defs>".to_string());
    parts.push(arrow_marker_def());
    parts.push("</defs>".to_string());

    // 1. Edges, behind everything
    for edge in &diagram.edges {
        let rendered = render_edge(edge, diagram);
        if !rendered.is_empty() {
            parts.push(rendered);
        }
    }

    // 2. Nodes in collection order
    for node in diagram.nodes.values() {
        parts.push(render_node(node));
    }

    parts.push("</svg>".to_string());
    parts.join("\n")
}

/// Bounding box over node corners, waypoints and explicit edge endpoints.
///
/// Connection points lie on node boxes and add nothing. `None` when there
/// is no point at all.
pub fn diagram_bounds(diagram: &Diagram) -> Option<Bounds> {
    let node_points = diagram.nodes.values().flat_map(|n| n.bounds.corners());
    let edge_points = diagram.edges.iter().flat_map(|e| {
        e.waypoints
            .iter()
            .copied()
            .chain(e.source_point)
            .chain(e.target_point)
    });

    let mut all = node_points.chain(edge_points);
    let first: Point = all.next()?;
    let mut bounds = Bounds::from_point(first);
    for p in all {
        bounds.include(p);
    }
    Some(bounds)
}

fn empty_document() -> String {
    format!(
        r#"<svg xmlns="{}" width="{}" height="{}"/>"#,
        SVG_NS, EMPTY_DOCUMENT_SIZE, EMPTY_DOCUMENT_SIZE
    )
}

fn svg_open_tag(bounds: &Bounds) -> String {
    let w = fmt_num(bounds.width());
    let h = fmt_num(bounds.height());
    format!(
        r#"<svg xmlns="{}" viewBox="{} {} {} {}" width="{}" height="{}" style="background:{}">"#,
        SVG_NS,
        fmt_num(bounds.min_x),
        fmt_num(bounds.min_y),
        w,
        h,
        w,
        h,
        Defaults::BACKGROUND
    )
}

fn arrow_marker_def() -> String {
    let w = ArrowHead::WIDTH;
    let h = ArrowHead::HEIGHT;
    format!(
        r#"<marker id="arrowhead" markerWidth="{w}" markerHeight="{h}" refX="{w}" refY="{half_h}" orient="auto" markerUnits="strokeWidth"><polygon points="0 0, {w} {half_h}, 0 {h}" fill="{fill}" /></marker>"#,
        w = fmt_num(w),
        h = fmt_num(h),
        half_h = fmt_num(h / 2.0),
        fill = Defaults::TEXT_FILL
    )
}

/// Shape plus centered label.
fn render_node(node: &Node) -> String {
    let paint = Paint::from_style(&node.style);
    let mut parts = vec![render_shape(node.shape, &node.bounds, &paint)];

    if !node.label.is_empty() {
        let center = node.bounds.center();
        let font_size = node_font_size(node.bounds.w, node.bounds.h);
        let text = render_text(center.x, center.y, &node.label, font_size, FontWeight::Normal);
        if !text.is_empty() {
            parts.push(text);
        }
    }

    parts.join("\n")
}

// ============================================================================
// Utilities
// ============================================================================

/// Escape special XML characters in text content
pub fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Shortest round-trip decimal; `-0` prints as `0`.
pub fn fmt_num(n: f64) -> String {
    if n == 0.0 {
        "0".to_string()
    } else {
        format!("{}", n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Edge, Rect, ShapeKind, StyleMap};

    fn node(id: &str, bounds: Rect) -> Node {
        Node {
            id: id.to_string(),
            bounds,
            label: String::new(),
            shape: ShapeKind::Rectangle,
            style: StyleMap::new(),
        }
    }

    fn diagram(nodes: Vec<Node>, edges: Vec<Edge>) -> Diagram {
        let mut d = Diagram::new();
        for n in nodes {
            d.nodes.insert(n.id.clone(), n);
        }
        d.edges = edges;
        d
    }

    #[test]
    fn test_fmt_num() {
        assert_eq!(fmt_num(20.0), "20");
        assert_eq!(fmt_num(-0.0), "0");
        assert_eq!(fmt_num(3.5), "3.5");
        assert_eq!(fmt_num(-20.0), "-20");
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml(r#"<a & "b">"#), "&lt;a &amp; &quot;b&quot;&gt;");
    }

    #[test]
    fn test_viewbox_from_two_nodes() {
        let d = diagram(
            vec![
                node("a", Rect::new(0.0, 0.0, 10.0, 10.0)),
                node("b", Rect::new(100.0, 100.0, 10.0, 10.0)),
            ],
            vec![],
        );
        let svg = render_svg(&d, &ConvertOptions::default());
        assert!(svg.starts_with(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="-20 -20 150 150" width="150" height="150""#
        ));
    }

    #[test]
    fn test_bounds_include_edge_points() {
        let edge = Edge {
            waypoints: vec![Point::new(-30.0, 5.0)],
            target_point: Some(Point::new(5.0, 200.0)),
            ..Default::default()
        };
        let d = diagram(vec![node("a", Rect::new(0.0, 0.0, 10.0, 10.0))], vec![edge]);
        let b = diagram_bounds(&d).unwrap();
        assert_eq!((b.min_x, b.min_y, b.max_x, b.max_y), (-30.0, 0.0, 10.0, 200.0));
    }

    #[test]
    fn test_empty_diagram() {
        let svg = render_svg(&Diagram::new(), &ConvertOptions::default());
        assert_eq!(svg, r#"<svg xmlns="http://www.w3.org/2000/svg" width="100" height="100"/>"#);
    }

    #[test]
    fn test_edges_before_nodes() {
        let edge = Edge {
            source: Some("a".to_string()),
            target: Some("b".to_string()),
            ..Default::default()
        };
        let d = diagram(
            vec![
                node("a", Rect::new(0.0, 0.0, 10.0, 10.0)),
                node("b", Rect::new(0.0, 50.0, 10.0, 10.0)),
            ],
            vec![edge],
        );
        let svg = render_svg(&d, &ConvertOptions::default());
        let polyline = svg.find("<polyline").unwrap();
        let first_rect = svg.find("<rect").unwrap();
        assert!(polyline < first_rect);
        assert!(svg.find("</defs>").unwrap() < polyline);
        assert!(svg.ends_with("</svg>"));
    }

    #[test]
    fn test_arrow_marker() {
        assert_eq!(
            arrow_marker_def(),
            r##"<marker id="arrowhead" markerWidth="10" markerHeight="7" refX="10" refY="3.5" orient="auto" markerUnits="strokeWidth"><polygon points="0 0, 10 3.5, 0 7" fill="#000" /></marker>"##
        );
    }
}
