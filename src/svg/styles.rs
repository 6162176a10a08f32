//! Rendering constants: default paint, font sizing and label geometry.

/// Paint used when a cell's style leaves it out
pub struct Defaults;

impl Defaults {
    pub const FILL: &'static str = "#ffffff";
    pub const STROKE: &'static str = "#000000";
    pub const STROKE_WIDTH: f64 = 2.0;
    pub const TEXT_FILL: &'static str = "#000";
    pub const BACKGROUND: &'static str = "#ffffff";
}

/// Fixed corner radius of `rounded_rect` nodes
pub const ROUNDED_CORNER_RADIUS: f64 = 6.0;

/// Parallelogram skew is `min(h * HEIGHT, w * WIDTH)`
pub struct Skew;

impl Skew {
    pub const HEIGHT: f64 = 0.4;
    pub const WIDTH: f64 = 0.15;
}

pub const FONT_FAMILY: &str = "Arial, Helvetica, sans-serif";

/// Font sizes in document units
pub struct FontSizes;

impl FontSizes {
    pub const NODE_LABEL_MAX: f64 = 12.0;
    pub const NODE_LABEL_MIN: f64 = 9.0;
    pub const EDGE_LABEL: f64 = 11.0;
}

/// Node label size shrinks with the box: `min(12, h*0.35, w*0.12)`, floored at 9.
pub fn node_font_size(w: f64, h: f64) -> f64 {
    FontSizes::NODE_LABEL_MAX
        .min(h * 0.35)
        .min(w * 0.12)
        .max(FontSizes::NODE_LABEL_MIN)
}

/// Multi-line text stacking factors (fractions of the font size)
pub struct LineSpacing;

impl LineSpacing {
    /// First baseline sits `(lines - 1) * size * CENTER_SHIFT` above center
    pub const CENTER_SHIFT: f64 = 0.6;
    pub const ADVANCE: f64 = 1.2;
}

/// Edge label placement and background box
pub struct EdgeLabel;

impl EdgeLabel {
    /// Perpendicular distance from the middle segment
    pub const OFFSET: f64 = 10.0;
    pub const BOX_HEIGHT: f64 = 16.0;
    pub const CHAR_WIDTH: f64 = 7.0;
    pub const BOX_PADDING: f64 = 6.0;
    pub const BOX_RADIUS: f64 = 2.0;
}

/// Estimated background width for an edge label
pub fn edge_label_box_width(label: &str) -> f64 {
    label.chars().count() as f64 * EdgeLabel::CHAR_WIDTH + EdgeLabel::BOX_PADDING
}

/// Arrow head dimensions
pub struct ArrowHead;

impl ArrowHead {
    pub const WIDTH: f64 = 10.0;
    pub const HEIGHT: f64 = 7.0;
}

/// Size of the placeholder document for a diagram with nothing to draw
pub const EMPTY_DOCUMENT_SIZE: u32 = 100;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_font_size_clamped() {
        assert_eq!(node_font_size(200.0, 60.0), 12.0);
        assert_eq!(node_font_size(10.0, 10.0), 9.0);
        // 100 * 0.12 = 12, 30 * 0.35 = 10.5
        assert_eq!(node_font_size(100.0, 30.0), 10.5);
    }

    #[test]
    fn test_edge_label_box_width() {
        assert_eq!(edge_label_box_width("True"), 34.0);
        assert_eq!(edge_label_box_width(""), 6.0);
    }
}
