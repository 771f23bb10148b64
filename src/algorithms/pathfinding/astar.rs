#[cfg(test)]
#[path = "../../../tests/unit/algorithms/pathfinding/astar_test.rs"]
mod astar_test;

use super::{reconstruct_path, Candidate, SearchGraph};
use crate::algorithms::geometry::great_circle_distance;
use crate::models::problem::{scalarized_cost, Network, ObjectiveWeights};
use std::collections::BinaryHeap;

/// Finds a path using best-first search with a great-circle heuristic.
///
/// The heuristic is the haversine distance to the goal in kilometers. It is a
/// lower bound for distance-correlated weights; exactness is not guaranteed when
/// carbon or risk terms dominate. When all edge level weights are zero the
/// heuristic degrades to zero and the search becomes uniform.
pub fn find_path_astar(network: &Network, start: &str, goal: &str, weights: &ObjectiveWeights) -> Option<Vec<String>> {
    let graph = SearchGraph::new(network);
    let start_idx = graph.index_of(start)?;
    let goal_idx = graph.index_of(goal)?;

    if start_idx == goal_idx {
        return Some(vec![start.to_string()]);
    }

    let goal_coordinates = graph.node(goal_idx).coordinates;
    let heuristic = |idx: usize| {
        if weights.is_edge_neutral() {
            0.
        } else {
            great_circle_distance(&graph.node(idx).coordinates, &goal_coordinates)
        }
    };

    let mut scores = vec![f64::INFINITY; graph.len()];
    let mut predecessors = vec![None; graph.len()];
    let mut closed = vec![false; graph.len()];
    let mut frontier = BinaryHeap::new();
    let mut sequence = 0;

    scores[start_idx] = 0.;
    frontier.push(Candidate { estimate: heuristic(start_idx), sequence, node: start_idx });

    while let Some(Candidate { node, .. }) = frontier.pop() {
        if node == goal_idx {
            return Some(reconstruct_path(&graph, &predecessors, goal_idx));
        }

        if closed[node] {
            continue;
        }
        closed[node] = true;

        for &(target, ref edge) in graph.outgoing(node) {
            if closed[target] {
                continue;
            }

            let score = scores[node] + scalarized_cost(edge, weights);
            if score < scores[target] {
                scores[target] = score;
                predecessors[target] = Some(node);
                sequence += 1;
                frontier.push(Candidate { estimate: score + heuristic(target), sequence, node: target });
            }
        }
    }

    None
}
