//! Response shapes of the routing boundary.

use crate::models::problem::{Edge, Network, NetworkStats, Node};
use crate::models::solution::Route;
use crate::utils::GenericError;
use serde::Serialize;
use std::io::{BufWriter, Write};

/// A serializable snapshot of network contents with summary statistics.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkSnapshot {
    /// Every node, ordered by id.
    pub nodes: Vec<Node>,
    /// Every edge, ordered by id.
    pub edges: Vec<Edge>,
    /// Summary statistics.
    pub stats: NetworkStats,
}

/// Creates a snapshot of the network with deterministic ordering.
pub fn create_network_snapshot(network: &Network) -> NetworkSnapshot {
    let mut nodes = network.nodes().map(|node| node.as_ref().clone()).collect::<Vec<_>>();
    nodes.sort_by(|a, b| a.id.cmp(&b.id));

    let mut edges = network.edges().map(|edge| edge.as_ref().clone()).collect::<Vec<_>>();
    edges.sort_by(|a, b| a.id.cmp(&b.id));

    NetworkSnapshot { nodes, edges, stats: network.stats() }
}

/// Serializes a route into a json writer.
pub fn serialize_route<W: Write>(route: &Route, writer: BufWriter<W>) -> Result<(), GenericError> {
    serde_json::to_writer_pretty(writer, route).map_err(|err| format!("cannot serialize route: '{err}'").into())
}
