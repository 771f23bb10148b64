#[cfg(test)]
#[path = "../../tests/unit/solver/pareto_test.rs"]
mod pareto_test;

use super::OptimizationEngine;
use crate::algorithms::dominance::mark_non_dominated;
use crate::models::problem::{AlgorithmKind, Network, ObjectiveWeights, OptimizationConfig, RouteConstraints};
use crate::models::solution::Route;
use crate::utils::{parallel_into_collect, ParallelismDegree, Timer};
use serde::Serialize;

/// Amount of subdivisions of the weight simplex per objective.
const GRID_STEPS: usize = 5;

/// A route candidate projected onto the objective space.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParetoCandidate {
    /// A materialized route.
    pub route: Route,
    /// Route totals projected as (cost, time, carbon, risk).
    pub objectives: Vec<f64>,
    /// Whether no other candidate dominates this one.
    pub is_optimal: bool,
}

/// A result of the Pareto frontier enumeration.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParetoFrontier {
    /// Every evaluated candidate with its dominance flag.
    pub candidates: Vec<ParetoCandidate>,
    /// Amount of weight grid points evaluated.
    pub points_evaluated: usize,
    /// A wall clock enumeration time in milliseconds.
    pub computation_time_ms: u64,
}

impl OptimizationEngine {
    /// Enumerates a weight grid over cost, time and carbon, solves each point in
    /// parallel with the hybrid algorithm and marks candidates which no other
    /// candidate dominates on (cost, time, carbon, risk).
    pub fn pareto_frontier(
        &self,
        network: &Network,
        origin: &str,
        destination: &str,
        constraints: &RouteConstraints,
    ) -> ParetoFrontier {
        let timer = Timer::start();

        let grid = weight_grid(GRID_STEPS);
        let points_evaluated = grid.len();
        let degree = ParallelismDegree::Limited { max: self.environment().parallelism.available_cpus() };

        let routes = parallel_into_collect(grid, degree, |weights| {
            let config = OptimizationConfig {
                weights,
                algorithm: AlgorithmKind::Hybrid,
                stochastic: false,
                ..OptimizationConfig::default()
            };

            self.optimize(network, origin, destination, constraints, &config)
        });

        let (routes, objectives): (Vec<_>, Vec<_>) = routes
            .into_iter()
            .flatten()
            .map(|route| {
                let objectives =
                    vec![route.total_cost.total, route.total_time, route.total_carbon, route.risk_score];
                (route, objectives)
            })
            .unzip();

        let flags = mark_non_dominated(&objectives);

        let candidates = routes
            .into_iter()
            .zip(objectives)
            .zip(flags)
            .map(|((route, objectives), is_optimal)| ParetoCandidate { route, objectives, is_optimal })
            .collect();

        ParetoFrontier { candidates, points_evaluated, computation_time_ms: timer.elapsed_millis() as u64 }
    }
}

/// Enumerates weight vectors over a 3-level simplex in (cost, time, carbon),
/// splitting the remaining mass evenly between risk and service level.
fn weight_grid(steps: usize) -> Vec<ObjectiveWeights> {
    let mut grid = Vec::new();

    for i in 0..=steps {
        for j in 0..=(steps - i) {
            for k in 0..=(steps - i - j) {
                let cost = i as f64 / steps as f64;
                let time = j as f64 / steps as f64;
                let carbon = k as f64 / steps as f64;
                let remaining = 1. - cost - time - carbon;

                grid.push(ObjectiveWeights::new(cost, time, carbon, remaining * 0.5, remaining * 0.5));
            }
        }
    }

    grid
}
