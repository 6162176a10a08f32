//! SVG renderer - converts an extracted diagram into SVG strings.
//!
//! - shapes: node outlines per canonical shape kind
//! - text: label cleanup and `<text>` emission
//! - edges: connection points, polylines and edge labels
//! - renderer: bounding box, header, back-to-front assembly
//!
//! Pure string building, no DOM manipulation.

mod edges;
mod renderer;
mod shapes;
mod styles;
mod text;

pub use edges::{label_anchor, render_edge, resolve_points};
pub use renderer::{diagram_bounds, escape_xml, render_svg};
pub use shapes::{diamond_points, parallelogram_points, render_shape, Paint};
pub use text::{clean_label, render_text, FontWeight};
