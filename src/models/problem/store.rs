#[cfg(test)]
#[path = "../../../tests/unit/models/problem/store_test.rs"]
mod store_test;

use crate::models::problem::{Edge, Node, TransportMode};
use hashbrown::HashMap;
use serde::Serialize;
use std::sync::Arc;

/// An in-memory directed multi-graph of nodes and edges with an adjacency index.
///
/// Parallel edges between the same pair of nodes are admitted; traversal order of
/// outgoing edges equals their insertion order. Mutation requires exclusive access,
/// which is enforced by the `&mut self` receivers.
#[derive(Default)]
pub struct Network {
    nodes: HashMap<String, Arc<Node>>,
    edges: HashMap<String, Arc<Edge>>,
    adjacency: HashMap<String, Vec<String>>,
}

/// Summarizes network contents.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkStats {
    /// Total amount of nodes.
    pub node_count: usize,
    /// Total amount of edges.
    pub edge_count: usize,
    /// Average amount of outgoing edges per node.
    pub avg_out_degree: f64,
    /// Amount of edges per transportation mode.
    pub mode_histogram: HashMap<TransportMode, usize>,
}

impl Network {
    /// Creates an empty network.
    pub fn new() -> Self {
        Self::default()
    }

    /// Upserts a node by its id, creating an empty adjacency slot if absent.
    pub fn add_node(&mut self, node: Node) {
        self.adjacency.entry(node.id.clone()).or_default();
        self.nodes.insert(node.id.clone(), Arc::new(node));
    }

    /// Adds an edge, appending it to the adjacency list of its source node.
    ///
    /// Endpoints are not required to exist yet; lookups tolerate their absence.
    /// Re-adding an edge with a known id replaces the previous record.
    pub fn add_edge(&mut self, edge: Edge) {
        if self.edges.contains_key(&edge.id) {
            self.remove_edge(&edge.id);
        }

        self.adjacency.entry(edge.source.clone()).or_default().push(edge.id.clone());
        self.edges.insert(edge.id.clone(), Arc::new(edge));
    }

    /// Removes a node with every edge incident to it, keeping adjacency of other nodes consistent.
    pub fn remove_node(&mut self, id: &str) -> Option<Arc<Node>> {
        let incident = self
            .edges
            .values()
            .filter(|edge| edge.source == id || edge.target == id)
            .map(|edge| edge.id.clone())
            .collect::<Vec<_>>();

        incident.iter().for_each(|edge_id| {
            self.remove_edge(edge_id);
        });

        self.adjacency.remove(id);
        self.nodes.remove(id)
    }

    /// Removes an edge from the edge index and from its source's adjacency list.
    pub fn remove_edge(&mut self, id: &str) -> Option<Arc<Edge>> {
        let edge = self.edges.remove(id)?;

        if let Some(outgoing) = self.adjacency.get_mut(&edge.source) {
            outgoing.retain(|edge_id| edge_id != id);
        }

        Some(edge)
    }

    /// Gets a node by its id.
    pub fn node(&self, id: &str) -> Option<&Arc<Node>> {
        self.nodes.get(id)
    }

    /// Gets an edge by its id.
    pub fn edge(&self, id: &str) -> Option<&Arc<Edge>> {
        self.edges.get(id)
    }

    /// Iterates over all nodes in unspecified order.
    pub fn nodes(&self) -> impl Iterator<Item = &Arc<Node>> {
        self.nodes.values()
    }

    /// Iterates over all edges in unspecified order.
    pub fn edges(&self) -> impl Iterator<Item = &Arc<Edge>> {
        self.edges.values()
    }

    /// Yields (target node, edge) pairs for a node in adjacency order,
    /// skipping edges whose target is absent.
    pub fn neighbors<'a>(&'a self, id: &str) -> impl Iterator<Item = (&'a Arc<Node>, &'a Arc<Edge>)> + 'a {
        self.adjacency
            .get(id)
            .into_iter()
            .flat_map(|edge_ids| edge_ids.iter())
            .filter_map(move |edge_id| self.edges.get(edge_id))
            .filter_map(move |edge| self.nodes.get(&edge.target).map(|node| (node, edge)))
    }

    /// Returns node and edge counts, average out-degree and a histogram by mode.
    pub fn stats(&self) -> NetworkStats {
        let node_count = self.nodes.len();
        let edge_count = self.edges.len();

        let mut mode_histogram = HashMap::default();
        self.edges.values().for_each(|edge| {
            *mode_histogram.entry(edge.mode).or_insert(0) += 1;
        });

        let avg_out_degree = if node_count == 0 { 0. } else { edge_count as f64 / node_count as f64 };

        NetworkStats { node_count, edge_count, avg_out_degree, mode_histogram }
    }
}
