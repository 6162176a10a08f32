//! Parser module for mxGraph diagrams

pub mod graph;
pub mod shape;
pub mod style;

pub use graph::parse_diagram;
pub use shape::classify_shape;
pub use style::parse_style;
