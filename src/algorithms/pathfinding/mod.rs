//! Path search procedures over the network store.
//!
//! Every solver takes a start and a goal node id and returns a node id sequence
//! beginning with the start and ending with the goal, or `None` when no path
//! exists. Edge relaxation follows adjacency-list order and priority ties are
//! broken by insertion sequence, which makes results reproducible for a fixed
//! store and fixed inputs.

mod astar;
pub use self::astar::find_path_astar;

mod bidirectional;
pub use self::bidirectional::find_path_bidirectional;

mod dijkstra;
pub use self::dijkstra::find_path_dijkstra;

use crate::models::problem::{Edge, Network, Node};
use crate::utils::compare_floats;
use hashbrown::HashMap;
use std::cmp::Ordering;
use std::sync::Arc;

/// An indexed snapshot of the network taken for the duration of a single search.
///
/// String node ids are interned into dense indices, so inner search loops avoid
/// repeated hashing of id strings.
pub(crate) struct SearchGraph {
    nodes: Vec<Arc<Node>>,
    index: HashMap<String, usize>,
    outgoing: Vec<Vec<(usize, Arc<Edge>)>>,
    incoming: Vec<Vec<usize>>,
}

impl SearchGraph {
    pub fn new(network: &Network) -> Self {
        let nodes = network.nodes().cloned().collect::<Vec<_>>();
        let index =
            nodes.iter().enumerate().map(|(idx, node)| (node.id.clone(), idx)).collect::<HashMap<_, _>>();

        let mut outgoing = vec![Vec::new(); nodes.len()];
        let mut incoming = vec![Vec::new(); nodes.len()];

        nodes.iter().enumerate().for_each(|(node_idx, node)| {
            network.neighbors(&node.id).for_each(|(target, edge)| {
                if let Some(&target_idx) = index.get(&target.id) {
                    outgoing[node_idx].push((target_idx, edge.clone()));
                    incoming[target_idx].push(node_idx);
                }
            })
        });

        Self { nodes, index, outgoing, incoming }
    }

    pub fn index_of(&self, node_id: &str) -> Option<usize> {
        self.index.get(node_id).copied()
    }

    pub fn node(&self, idx: usize) -> &Arc<Node> {
        &self.nodes[idx]
    }

    pub fn outgoing(&self, idx: usize) -> &[(usize, Arc<Edge>)] {
        &self.outgoing[idx]
    }

    pub fn incoming(&self, idx: usize) -> &[usize] {
        &self.incoming[idx]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }
}

/// A frontier entry ordered by its cost estimate, with ties broken by insertion sequence.
pub(crate) struct Candidate {
    pub estimate: f64,
    pub sequence: usize,
    pub node: usize,
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Candidate {}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        // reversed: std binary heap is a max-heap
        compare_floats(other.estimate, self.estimate).then_with(|| other.sequence.cmp(&self.sequence))
    }
}

/// Walks predecessors from the terminal node back to the start and reverses the result.
pub(crate) fn reconstruct_path(graph: &SearchGraph, predecessors: &[Option<usize>], terminal: usize) -> Vec<String> {
    let mut path = vec![graph.node(terminal).id.clone()];
    let mut current = terminal;

    while let Some(previous) = predecessors[current] {
        path.push(graph.node(previous).id.clone());
        current = previous;
    }

    path.reverse();
    path
}
