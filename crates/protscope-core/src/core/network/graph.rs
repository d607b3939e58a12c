use crate::core::models::ids::NodeId;
use crate::core::models::interaction::InteractionRecord;
use slotmap::{SecondaryMap, SlotMap};
use std::collections::HashMap;

/// A protein in an interaction graph, identified by its preferred name.
#[derive(Debug, Clone, PartialEq)]
pub struct ProteinNode {
    pub name: String,
}

/// One reported interaction between two proteins.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InteractionEdge {
    pub source: NodeId,
    pub target: NodeId,
    /// Combined evidence score of the originating row, if it had one.
    pub score: Option<f64>,
}

impl InteractionEdge {
    /// Returns `true` if both endpoints are the same node.
    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }

    /// Returns the endpoint opposite to `node`, or `None` if `node` is not an endpoint.
    pub fn other(&self, node: NodeId) -> Option<NodeId> {
        if self.source == node {
            Some(self.target)
        } else if self.target == node {
            Some(self.source)
        } else {
            None
        }
    }
}

/// An undirected multigraph of interacting proteins.
///
/// Nodes live in a slot map and are additionally indexed by name so that rows
/// naming the same protein resolve to the same node. Edges are stored as a
/// plain list: duplicate interactions and self-loops are kept as reported.
#[derive(Debug, Clone, Default)]
pub struct InteractionGraph {
    /// Primary node storage.
    nodes: SlotMap<NodeId, ProteinNode>,
    /// Node IDs in first-seen order.
    order: Vec<NodeId>,
    /// Lookup map from preferred name to node ID.
    name_index: HashMap<String, NodeId>,
    /// Every edge, one per source row.
    edges: Vec<InteractionEdge>,
}

impl InteractionGraph {
    /// Creates a new, empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a graph from interaction table rows.
    ///
    /// # Arguments
    ///
    /// * `records` - The rows to convert; each row contributes exactly one edge.
    ///
    /// # Return
    ///
    /// A graph whose nodes are the distinct partner names in first-seen order.
    pub fn from_records(records: &[InteractionRecord]) -> Self {
        let mut graph = Self::new();
        for record in records {
            let source = graph.add_node(&record.partner_a);
            let target = graph.add_node(&record.partner_b);
            graph.add_edge(source, target, record.score);
        }
        graph
    }

    /// Adds a node for `name`, or returns the existing one.
    ///
    /// # Arguments
    ///
    /// * `name` - The protein's preferred name.
    ///
    /// # Return
    ///
    /// The ID of the node carrying `name`.
    pub fn add_node(&mut self, name: &str) -> NodeId {
        if let Some(&id) = self.name_index.get(name) {
            return id;
        }
        let id = self.nodes.insert(ProteinNode {
            name: name.to_string(),
        });
        self.order.push(id);
        self.name_index.insert(name.to_string(), id);
        id
    }

    /// Appends an edge between two existing nodes.
    ///
    /// # Arguments
    ///
    /// * `source` - One endpoint.
    /// * `target` - The other endpoint.
    /// * `score` - Optional combined evidence score.
    ///
    /// # Return
    ///
    /// Returns `Some(index)` of the new edge, or `None` if either node does not exist.
    pub fn add_edge(&mut self, source: NodeId, target: NodeId, score: Option<f64>) -> Option<usize> {
        if !self.nodes.contains_key(source) || !self.nodes.contains_key(target) {
            return None;
        }
        self.edges.push(InteractionEdge {
            source,
            target,
            score,
        });
        Some(self.edges.len() - 1)
    }

    pub fn node_id(&self, name: &str) -> Option<NodeId> {
        self.name_index.get(name).copied()
    }

    /// Returns an iterator over all nodes in first-seen order.
    ///
    /// # Return
    ///
    /// An iterator yielding `(NodeId, &ProteinNode)` pairs.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &ProteinNode)> {
        self.order
            .iter()
            .filter_map(|&id| self.nodes.get(id).map(|node| (id, node)))
    }

    pub fn node_ids(&self) -> &[NodeId] {
        &self.order
    }

    pub fn edges(&self) -> &[InteractionEdge] {
        &self.edges
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Collects the neighbours of a node, one entry per incident edge.
    ///
    /// # Arguments
    ///
    /// * `id` - The node to inspect.
    ///
    /// # Return
    ///
    /// Neighbour IDs in edge order; parallel edges repeat a neighbour and a
    /// self-loop lists the node itself once.
    pub fn neighbors(&self, id: NodeId) -> Vec<NodeId> {
        self.edges.iter().filter_map(|edge| edge.other(id)).collect()
    }

    /// Number of edge endpoints at `id`; a self-loop counts twice.
    pub fn degree(&self, id: NodeId) -> usize {
        self.edges
            .iter()
            .map(|edge| (edge.source == id) as usize + (edge.target == id) as usize)
            .sum()
    }

    /// Counts how many edges join each unordered node pair.
    pub(crate) fn edge_multiplicity(&self) -> HashMap<(NodeId, NodeId), usize> {
        let mut counts = HashMap::new();
        for edge in &self.edges {
            let key = if edge.source <= edge.target {
                (edge.source, edge.target)
            } else {
                (edge.target, edge.source)
            };
            *counts.entry(key).or_insert(0) += 1;
        }
        counts
    }

    /// Maps every node to its position in first-seen order.
    pub(crate) fn dense_indices(&self) -> SecondaryMap<NodeId, usize> {
        self.order
            .iter()
            .enumerate()
            .map(|(index, &id)| (id, index))
            .collect()
    }
}
