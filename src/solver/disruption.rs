#[cfg(test)]
#[path = "../../tests/unit/solver/disruption_test.rs"]
mod disruption_test;

use super::OptimizationEngine;
use crate::models::problem::{AlgorithmKind, Network, ObjectiveWeights, OptimizationConfig};
use crate::models::solution::Route;

/// A time-leaning weight vector used when routing around disruptions.
const REROUTE_WEIGHTS: ObjectiveWeights =
    ObjectiveWeights { cost: 0.4, time: 0.6, carbon: 0., risk: 0., service_level: 0. };

impl OptimizationEngine {
    /// Routes around temporarily unavailable edges from a mid-route position.
    ///
    /// Disrupted edges are snapshotted, removed from the network, a new route is
    /// solved from the current position to the destination of the route in
    /// progress, and the snapshotted edges are reinserted regardless of the
    /// solve outcome. Adjacency insertion order after restore may differ from
    /// the pre-disruption order.
    pub fn reoptimize(
        &self,
        network: &mut Network,
        current_route: &Route,
        current_position: &str,
        disrupted_edges: &[String],
    ) -> Option<Route> {
        let destination = current_route.destination()?.id.clone();

        let snapshots = disrupted_edges
            .iter()
            .filter_map(|edge_id| network.edge(edge_id).cloned())
            .collect::<Vec<_>>();

        disrupted_edges.iter().for_each(|edge_id| {
            network.remove_edge(edge_id);
        });

        let config = OptimizationConfig {
            weights: REROUTE_WEIGHTS,
            algorithm: AlgorithmKind::Hybrid,
            stochastic: false,
            ..OptimizationConfig::default()
        };

        let result = self.optimize(network, current_position, &destination, &current_route.constraints, &config);

        // the restore step must run regardless of the solve outcome
        snapshots.into_iter().for_each(|edge| {
            network.add_edge(edge.as_ref().clone());
        });

        result
    }
}
