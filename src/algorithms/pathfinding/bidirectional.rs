#[cfg(test)]
#[path = "../../../tests/unit/algorithms/pathfinding/bidirectional_test.rs"]
mod bidirectional_test;

use super::SearchGraph;
use crate::models::problem::Network;
use std::collections::VecDeque;

/// Finds a path by expanding two FIFO frontiers, forward from the start over
/// outgoing edges and backward from the goal over incoming edges, alternating
/// one expansion per side each iteration.
///
/// The graph is treated as unweighted, so the result is a reachability witness
/// rather than a minimum scalarized cost path.
pub fn find_path_bidirectional(network: &Network, start: &str, goal: &str) -> Option<Vec<String>> {
    let graph = SearchGraph::new(network);
    let start_idx = graph.index_of(start)?;
    let goal_idx = graph.index_of(goal)?;

    if start_idx == goal_idx {
        return Some(vec![start.to_string()]);
    }

    let mut forward = Frontier::new(graph.len(), start_idx);
    let mut backward = Frontier::new(graph.len(), goal_idx);

    while !forward.queue.is_empty() || !backward.queue.is_empty() {
        if let Some(node) = forward.queue.pop_front() {
            for &(target, _) in graph.outgoing(node) {
                if forward.discover(target, node) && backward.visited[target] {
                    return Some(stitch(&graph, &forward, &backward, target));
                }
            }
        }

        if let Some(node) = backward.queue.pop_front() {
            for &source in graph.incoming(node) {
                if backward.discover(source, node) && forward.visited[source] {
                    return Some(stitch(&graph, &forward, &backward, source));
                }
            }
        }
    }

    None
}

struct Frontier {
    queue: VecDeque<usize>,
    visited: Vec<bool>,
    predecessors: Vec<Option<usize>>,
}

impl Frontier {
    fn new(size: usize, origin: usize) -> Self {
        let mut frontier =
            Self { queue: VecDeque::new(), visited: vec![false; size], predecessors: vec![None; size] };
        frontier.visited[origin] = true;
        frontier.queue.push_back(origin);

        frontier
    }

    /// Marks a node as visited and enqueues it. Returns false if it was already seen.
    fn discover(&mut self, node: usize, from: usize) -> bool {
        if self.visited[node] {
            return false;
        }

        self.visited[node] = true;
        self.predecessors[node] = Some(from);
        self.queue.push_back(node);

        true
    }
}

/// Concatenates the forward path to the meeting point with the backward chain
/// from the meeting point to the goal.
fn stitch(graph: &SearchGraph, forward: &Frontier, backward: &Frontier, meeting: usize) -> Vec<String> {
    let mut path = Vec::new();

    let mut current = Some(meeting);
    while let Some(node) = current {
        path.push(graph.node(node).id.clone());
        current = forward.predecessors[node];
    }
    path.reverse();

    // backward predecessors point towards the goal
    let mut current = backward.predecessors[meeting];
    while let Some(node) = current {
        path.push(graph.node(node).id.clone());
        current = backward.predecessors[node];
    }

    path
}
