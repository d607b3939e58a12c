//! Protein-protein interaction networks: graph construction from table rows,
//! force-directed layout and SVG rendering.

pub mod graph;
pub mod layout;
pub mod render;

pub use graph::{InteractionEdge, InteractionGraph, ProteinNode};
pub use layout::{Layout, LayoutConfig, spring_layout};
pub use render::{RenderConfig, render_svg, save_svg};
