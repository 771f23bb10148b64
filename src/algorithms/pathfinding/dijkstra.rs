#[cfg(test)]
#[path = "../../../tests/unit/algorithms/pathfinding/dijkstra_test.rs"]
mod dijkstra_test;

use super::{reconstruct_path, Candidate, SearchGraph};
use crate::models::problem::{scalarized_cost, Network, ObjectiveWeights};
use std::collections::BinaryHeap;

/// Finds a minimum scalarized cost path using single-source search over
/// non-negative edge costs. Finalized nodes are never revisited; the search
/// terminates on reaching the goal or when the remaining frontier is exhausted.
pub fn find_path_dijkstra(
    network: &Network,
    start: &str,
    goal: &str,
    weights: &ObjectiveWeights,
) -> Option<Vec<String>> {
    let graph = SearchGraph::new(network);
    let start_idx = graph.index_of(start)?;
    let goal_idx = graph.index_of(goal)?;

    if start_idx == goal_idx {
        return Some(vec![start.to_string()]);
    }

    let mut distances = vec![f64::INFINITY; graph.len()];
    let mut predecessors = vec![None; graph.len()];
    let mut finalized = vec![false; graph.len()];
    let mut frontier = BinaryHeap::new();
    let mut sequence = 0;

    distances[start_idx] = 0.;
    frontier.push(Candidate { estimate: 0., sequence, node: start_idx });

    while let Some(Candidate { node, .. }) = frontier.pop() {
        if node == goal_idx {
            return Some(reconstruct_path(&graph, &predecessors, goal_idx));
        }

        if finalized[node] {
            continue;
        }
        finalized[node] = true;

        for &(target, ref edge) in graph.outgoing(node) {
            if finalized[target] {
                continue;
            }

            let distance = distances[node] + scalarized_cost(edge, weights);
            if distance < distances[target] {
                distances[target] = distance;
                predecessors[target] = Some(node);
                sequence += 1;
                frontier.push(Candidate { estimate: distance, sequence, node: target });
            }
        }
    }

    None
}
