use super::graph::InteractionGraph;
use super::layout::Layout;
use nalgebra::Vector2;
use serde::{Deserialize, Serialize};
use std::io;
use std::path::Path;
use svg::Document;
use svg::node::element::{Circle, Group, Line, Rectangle, Text};

const NODE_FILL: &str = "#add8e6";
const EDGE_STROKE: &str = "#000000";
const LABEL_FILL: &str = "#000000";
const BACKGROUND: &str = "#ffffff";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderConfig {
    pub width: f64,
    pub height: f64,
    pub node_radius: f64,
    pub font_size: f64,
    pub edge_width: f64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 640.0,
            height: 480.0,
            node_radius: 12.6,
            font_size: 8.0,
            edge_width: 1.0,
        }
    }
}

impl RenderConfig {
    fn margin(&self) -> f64 {
        self.node_radius + self.font_size
    }

    /// Maps a layout coordinate onto the canvas, flipping y so that up stays up.
    fn project(&self, p: Vector2<f64>, extent: f64) -> (f64, f64) {
        let margin = self.margin();
        let (nx, ny) = if extent > 0.0 {
            (p.x / extent, p.y / extent)
        } else {
            (0.0, 0.0)
        };
        let x = margin + (nx + 1.0) / 2.0 * (self.width - 2.0 * margin);
        let y = margin + (1.0 - ny) / 2.0 * (self.height - 2.0 * margin);
        (x, y)
    }
}

/// Draws edges as straight lines and nodes as labelled light-blue discs.
///
/// Nodes missing from `layout` are skipped along with their edges.
pub fn render_svg(graph: &InteractionGraph, layout: &Layout, config: &RenderConfig) -> Document {
    let extent = layout.extent();
    let point = |id| layout.position(id).map(|p| config.project(p, extent));

    let mut edges = Group::new()
        .set("class", "edges")
        .set("stroke", EDGE_STROKE)
        .set("stroke-width", config.edge_width);
    for edge in graph.edges() {
        let (Some((x1, y1)), Some((x2, y2))) = (point(edge.source), point(edge.target)) else {
            continue;
        };
        if edge.is_self_loop() {
            edges = edges.add(
                Circle::new()
                    .set("class", "loop")
                    .set("cx", x1)
                    .set("cy", y1 - config.node_radius)
                    .set("r", config.node_radius / 2.0)
                    .set("fill", "none"),
            );
        } else {
            edges = edges.add(
                Line::new()
                    .set("x1", x1)
                    .set("y1", y1)
                    .set("x2", x2)
                    .set("y2", y2),
            );
        }
    }

    let mut nodes = Group::new().set("class", "nodes");
    let mut labels = Group::new()
        .set("class", "labels")
        .set("font-family", "sans-serif")
        .set("font-size", config.font_size)
        .set("text-anchor", "middle")
        .set("dominant-baseline", "central")
        .set("fill", LABEL_FILL);
    for (id, node) in graph.nodes() {
        let Some((cx, cy)) = point(id) else {
            continue;
        };
        nodes = nodes.add(
            Circle::new()
                .set("class", "node")
                .set("cx", cx)
                .set("cy", cy)
                .set("r", config.node_radius)
                .set("fill", NODE_FILL),
        );
        labels = labels.add(Text::new(node.name.as_str()).set("x", cx).set("y", cy));
    }

    Document::new()
        .set("width", config.width)
        .set("height", config.height)
        .set("viewBox", (0.0, 0.0, config.width, config.height))
        .add(
            Rectangle::new()
                .set("width", config.width)
                .set("height", config.height)
                .set("fill", BACKGROUND),
        )
        .add(edges)
        .add(nodes)
        .add(labels)
}

pub fn save_svg<P: AsRef<Path>>(document: &Document, path: P) -> io::Result<()> {
    svg::save(path, document)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::interaction::InteractionRecord;
    use crate::core::network::layout::{LayoutConfig, spring_layout};

    fn rendered(pairs: &[(&str, &str)]) -> String {
        let records: Vec<_> = pairs
            .iter()
            .map(|(a, b)| InteractionRecord::new(a, b))
            .collect();
        let graph = InteractionGraph::from_records(&records);
        let layout = spring_layout(&graph, &LayoutConfig::default());
        render_svg(&graph, &layout, &RenderConfig::default()).to_string()
    }

    #[test]
    fn draws_one_disc_per_node_and_one_line_per_edge() {
        let svg = rendered(&[("TP53", "MDM2"), ("TP53", "EP300"), ("MDM2", "EP300")]);
        assert_eq!(svg.matches("class=\"node\"").count(), 3);
        assert_eq!(svg.matches("<line").count(), 3);
        for name in ["TP53", "MDM2", "EP300"] {
            assert!(svg.contains(name), "missing label {name}");
        }
        assert!(svg.contains(NODE_FILL));
    }

    #[test]
    fn parallel_edges_are_each_drawn() {
        let svg = rendered(&[("A", "B"), ("A", "B")]);
        assert_eq!(svg.matches("<line").count(), 2);
    }

    #[test]
    fn self_loop_is_drawn_as_a_ring() {
        let svg = rendered(&[("A", "A")]);
        assert_eq!(svg.matches("class=\"loop\"").count(), 1);
        assert_eq!(svg.matches("<line").count(), 0);
    }

    #[test]
    fn empty_graph_renders_blank_canvas() {
        let svg = rendered(&[]);
        assert!(svg.contains("width=\"640\""));
        assert!(svg.contains("height=\"480\""));
        assert_eq!(svg.matches("class=\"node\"").count(), 0);
    }

    #[test]
    fn projection_keeps_nodes_inside_the_canvas() {
        let config = RenderConfig::default();
        for p in [
            Vector2::new(-1.0, -1.0),
            Vector2::new(1.0, 1.0),
            Vector2::new(0.3, -0.7),
        ] {
            let (x, y) = config.project(p, 1.0);
            assert!(x >= config.node_radius && x <= config.width - config.node_radius);
            assert!(y >= config.node_radius && y <= config.height - config.node_radius);
        }
        assert_eq!(config.project(Vector2::new(1.0, 1.0), 0.0), (320.0, 240.0));
    }

    #[test]
    fn save_svg_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("network.svg");
        let svg = render_svg(
            &InteractionGraph::new(),
            &Layout::default(),
            &RenderConfig::default(),
        );
        save_svg(&svg, &path).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("<svg"));
    }
}
