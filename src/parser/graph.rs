//! Graph extraction from mxGraphModel XML.
//!
//! Walks every `mxCell` below the document root and sorts it into a node,
//! an edge, or nothing.

use super::shape::classify_shape;
use super::style::parse_style;
use crate::error::Result;
use crate::types::{Diagram, Edge, Node, Point, Rect};
use roxmltree::Document;

type XmlNode<'a, 'input> = roxmltree::Node<'a, 'input>;

/// Parse diagram text into nodes and edges.
///
/// Malformed XML is the only failure; every missing attribute has a default.
pub fn parse_diagram(xml: &str) -> Result<Diagram> {
    let doc = Document::parse(xml.trim())?;
    let root = doc.root_element();
    let mut diagram = Diagram::new();

    for cell in root
        .descendants()
        .filter(|n| *n != root && n.has_tag_name("mxCell"))
    {
        let is_vertex = cell.attribute("vertex") == Some("1");
        let is_edge = cell.attribute("edge") == Some("1");
        let geometry = child_element(cell, "mxGeometry");

        match geometry {
            Some(geom) if is_vertex => {
                let node = parse_node(cell, geom);
                diagram.nodes.insert(node.id.clone(), node);
            }
            _ if is_edge => diagram.edges.push(parse_edge(cell, geometry)),
            _ => {
                if is_vertex {
                    tracing::debug!(
                        id = cell.attribute("id").unwrap_or(""),
                        "vertex without geometry skipped"
                    );
                }
            }
        }
    }

    tracing::trace!(
        nodes = diagram.nodes.len(),
        edges = diagram.edges.len(),
        "diagram extracted"
    );
    Ok(diagram)
}

fn parse_node(cell: XmlNode, geom: XmlNode) -> Node {
    let style = parse_style(cell.attribute("style").unwrap_or(""));
    let bounds = Rect::new(
        number_attr(geom, "x"),
        number_attr(geom, "y"),
        number_attr(geom, "width").max(0.0),
        number_attr(geom, "height").max(0.0),
    );
    Node {
        id: cell.attribute("id").unwrap_or("").to_string(),
        bounds,
        label: cell.attribute("value").unwrap_or("").to_string(),
        shape: classify_shape(&style),
        style,
    }
}

fn parse_edge(cell: XmlNode, geometry: Option<XmlNode>) -> Edge {
    let mut edge = Edge {
        source: id_attr(cell, "source"),
        target: id_attr(cell, "target"),
        style: parse_style(cell.attribute("style").unwrap_or("")),
        label: cell.attribute("value").unwrap_or("").to_string(),
        ..Default::default()
    };

    let Some(geom) = geometry else {
        return edge;
    };

    if let Some(array) = child_element(geom, "Array") {
        edge.waypoints = array
            .children()
            .filter(|n| n.has_tag_name("mxPoint"))
            .map(point_of)
            .collect();
    }

    for pt in geom.children().filter(|n| n.has_tag_name("mxPoint")) {
        match pt.attribute("as") {
            Some("sourcePoint") => edge.source_point = Some(point_of(pt)),
            Some("targetPoint") => edge.target_point = Some(point_of(pt)),
            _ => {}
        }
    }

    edge
}

fn child_element<'a, 'input>(
    node: XmlNode<'a, 'input>,
    name: &str,
) -> Option<XmlNode<'a, 'input>> {
    node.children().find(|n| n.has_tag_name(name))
}

/// Non-empty identifier attribute.
fn id_attr(cell: XmlNode, name: &str) -> Option<String> {
    cell.attribute(name)
        .filter(|id| !id.is_empty())
        .map(|id| id.to_string())
}

fn point_of(pt: XmlNode) -> Point {
    Point::new(number_attr(pt, "x"), number_attr(pt, "y"))
}

/// Numeric attribute; absent, unparseable or non-finite values are 0.
fn number_attr(node: XmlNode, name: &str) -> f64 {
    match node.attribute(name) {
        None => 0.0,
        Some(raw) => match raw.trim().parse::<f64>() {
            Ok(v) if v.is_finite() => v,
            _ => {
                tracing::debug!(attribute = name, raw, "unparseable coordinate, using 0");
                0.0
            }
        },
    }
}
