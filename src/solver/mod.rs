//! The optimization engine which orchestrates path solvers, route
//! materialization, constraint validation and the fallback policy.

#[cfg(test)]
#[path = "../../tests/unit/solver/engine_test.rs"]
mod engine_test;

mod disruption;

mod pareto;
pub use self::pareto::{ParetoCandidate, ParetoFrontier};

mod scenarios;
pub use self::scenarios::ScenarioKind;

mod validation;

use crate::construction::{confidence_band, materialize_route};
use crate::algorithms::pathfinding::{find_path_astar, find_path_bidirectional, find_path_dijkstra};
use crate::models::problem::{AlgorithmKind, Network, ObjectiveWeights, OptimizationConfig, RouteConstraints};
use crate::models::solution::{Route, RouteMetadata};
use crate::utils::{Environment, GenericError, Timer};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Computes transportation routes over a network under caller supplied weights
/// and constraints.
///
/// The engine performs no store writes except during disruption re-routing,
/// which requires exclusive network access through its `&mut` receiver.
pub struct OptimizationEngine {
    environment: Arc<Environment>,
    route_sequence: AtomicUsize,
}

impl Default for OptimizationEngine {
    fn default() -> Self {
        Self::new(Arc::new(Environment::default()))
    }
}

impl OptimizationEngine {
    /// Creates a new instance of `OptimizationEngine`.
    pub fn new(environment: Arc<Environment>) -> Self {
        Self { environment, route_sequence: AtomicUsize::new(1) }
    }

    /// Returns the environment used by the engine.
    pub fn environment(&self) -> &Arc<Environment> {
        &self.environment
    }

    /// Finds a single best route between two nodes under given constraints and config.
    ///
    /// When the route found violates hard constraints, one fallback attempt is
    /// made with a relaxed weight vector rerun through dijkstra; the fallback
    /// result is returned without re-validation as a best effort answer.
    pub fn optimize(
        &self,
        network: &Network,
        origin: &str,
        destination: &str,
        constraints: &RouteConstraints,
        config: &OptimizationConfig,
    ) -> Option<Route> {
        let timer = Timer::start();

        let (path, algorithm_used) = self.plan_path(network, origin, destination, config.algorithm, &config.weights)?;

        let route_id = self.next_route_id();
        let mut route = materialize_route(network, &path, &route_id, constraints.clone(), &self.environment);

        match validation::validate(&route, constraints) {
            Ok(()) => {
                self.attach_diagnostics(&mut route, algorithm_used, &timer, 1, config);
                Some(route)
            }
            Err(violations) => {
                (self.environment.logger)(&format!(
                    "route '{route_id}' violates constraints: {}; retrying with relaxed weights",
                    GenericError::join_many(&violations, ", ")
                ));

                self.fallback(network, origin, destination, constraints, config, &timer)
            }
        }
    }

    fn fallback(
        &self,
        network: &Network,
        origin: &str,
        destination: &str,
        constraints: &RouteConstraints,
        config: &OptimizationConfig,
        timer: &Timer,
    ) -> Option<Route> {
        let relaxed = config.weights.relaxed();
        let path = find_path_dijkstra(network, origin, destination, &relaxed)?;

        let route_id = self.next_route_id();
        let mut route = materialize_route(network, &path, &route_id, constraints.clone(), &self.environment);
        self.attach_diagnostics(&mut route, AlgorithmKind::Dijkstra.name(), timer, 2, config);

        Some(route)
    }

    /// Finds a route using one of the named scenario presets.
    pub fn optimize_scenario(
        &self,
        network: &Network,
        origin: &str,
        destination: &str,
        scenario: ScenarioKind,
    ) -> Option<Route> {
        self.optimize(network, origin, destination, &RouteConstraints::default(), &scenario.config())
    }

    /// Dispatches a path search on the configured algorithm, returning the node
    /// sequence and the name of the algorithm which actually produced it.
    fn plan_path(
        &self,
        network: &Network,
        origin: &str,
        destination: &str,
        algorithm: AlgorithmKind,
        weights: &ObjectiveWeights,
    ) -> Option<(Vec<String>, &'static str)> {
        match algorithm {
            AlgorithmKind::AStar => {
                find_path_astar(network, origin, destination, weights).map(|path| (path, AlgorithmKind::AStar.name()))
            }
            AlgorithmKind::Dijkstra => find_path_dijkstra(network, origin, destination, weights)
                .map(|path| (path, AlgorithmKind::Dijkstra.name())),
            AlgorithmKind::Bidirectional => find_path_bidirectional(network, origin, destination)
                .map(|path| (path, AlgorithmKind::Bidirectional.name())),
            AlgorithmKind::Hybrid => find_path_astar(network, origin, destination, weights)
                .map(|path| (path, AlgorithmKind::AStar.name()))
                .or_else(|| {
                    find_path_dijkstra(network, origin, destination, weights)
                        .map(|path| (path, AlgorithmKind::Dijkstra.name()))
                }),
        }
    }

    fn attach_diagnostics(
        &self,
        route: &mut Route,
        algorithm: &str,
        timer: &Timer,
        alternatives_considered: usize,
        config: &OptimizationConfig,
    ) {
        route.metadata = Some(RouteMetadata {
            algorithm: algorithm.to_string(),
            compute_time_ms: timer.elapsed_millis() as u64,
            alternatives_considered,
        });

        if config.stochastic {
            route.confidence = Some(confidence_band(
                route.total_time,
                route.total_cost.total,
                route.reliability,
                config.confidence_level,
            ));
        }
    }

    fn next_route_id(&self) -> String {
        format!("route-{}", self.route_sequence.fetch_add(1, Ordering::SeqCst))
    }
}
