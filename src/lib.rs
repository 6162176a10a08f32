//! mx2svg - Convert draw.io / mxGraph flowchart XML to standalone SVG
//!
//! The conversion is a pure function from document text to SVG text: no
//! file or network access, no global state, byte-identical output for the
//! same input.
//!
//! # Example
//!
//! ```rust
//! let xml = r#"<mxGraphModel><root>
//!   <mxCell id="a" value="Start" style="rounded=1;arcSize=50" vertex="1">
//!     <mxGeometry x="0" y="0" width="120" height="40" as="geometry"/>
//!   </mxCell>
//! </root></mxGraphModel>"#;
//!
//! let svg = mx2svg::mxgraph_to_svg(xml, 20.0).unwrap();
//! assert!(svg.contains("Start"));
//! ```
//!
//! # Supported Shapes
//!
//! - rectangle, rounded_rect, terminal (pill)
//! - diamond (rhombus), parallelogram, ellipse
//!
//! Edges are straight polylines through their waypoints with an arrowhead
//! at the end and an optional label.

pub mod error;
pub mod parser;
pub mod svg;
pub mod types;

pub use error::{Error, Result};
pub use parser::{classify_shape, parse_diagram, parse_style};
pub use types::*;

/// Convert mxGraph XML to an SVG document using `options`.
///
/// # Example
/// ```rust
/// let svg = mx2svg::convert("<mxGraphModel/>", &Default::default()).unwrap();
/// assert_eq!(svg, r#"<svg xmlns="http://www.w3.org/2000/svg" width="100" height="100"/>"#);
/// ```
pub fn convert(xml: &str, options: &ConvertOptions) -> Result<String> {
    let diagram = parse_diagram(xml)?;
    Ok(render_diagram(&diagram, options))
}

/// Convert mxGraph XML to an SVG document with `padding` around the drawing.
pub fn mxgraph_to_svg(xml: &str, padding: f64) -> Result<String> {
    convert(xml, &ConvertOptions { padding })
}

/// Render an already extracted diagram.
pub fn render_diagram(diagram: &Diagram, options: &ConvertOptions) -> String {
    svg::render_svg(diagram, options)
}

/// Configuration options for SVG conversion
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ConvertOptions {
    /// Space added around the bounding box on every side. Default: 20
    pub padding: f64,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self { padding: 20.0 }
    }
}
