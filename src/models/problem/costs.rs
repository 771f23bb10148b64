#[cfg(test)]
#[path = "../../../tests/unit/models/problem/costs_test.rs"]
mod costs_test;

use crate::models::common::Cost;
use crate::models::problem::{Edge, ObjectiveWeights};

/// A penalty applied per unit of edge unreliability within the scalarized cost.
const UNRELIABILITY_PENALTY: f64 = 100.;

/// Returns a scalarized cost of traversing an edge under given objective weights.
///
/// Service level has no edge level term: it is aggregated on the route level only.
/// The result is clipped at zero to keep search heuristics admissible.
pub fn scalarized_cost(edge: &Edge, weights: &ObjectiveWeights) -> Cost {
    let cost = weights.cost * edge.base_cost
        + weights.time * edge.base_time
        + weights.carbon * edge.carbon_emissions * edge.distance
        + weights.risk * (1. - edge.reliability) * UNRELIABILITY_PENALTY;

    cost.max(0.)
}

/// Returns a product of per-edge reliabilities. An empty sequence yields 1.
pub fn reliability_product(reliabilities: &[f64]) -> f64 {
    reliabilities.iter().product()
}

/// Returns a service level in [0, 100] as the mean per-edge reliability scaled to percents.
pub fn service_level(reliabilities: &[f64]) -> f64 {
    if reliabilities.is_empty() {
        100.
    } else {
        reliabilities.iter().sum::<f64>() / reliabilities.len() as f64 * 100.
    }
}

/// Returns a risk score in [0, 100] derived from aggregated route reliability.
pub fn risk_score(reliability: f64) -> f64 {
    ((1. - reliability) * 100.).min(100.)
}
