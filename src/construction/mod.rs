//! Materialization of a node sequence into a complete route with cost
//! breakdowns and reliability aggregates.

#[cfg(test)]
#[path = "../../tests/unit/construction/materialization_test.rs"]
mod materialization_test;

use crate::models::common::{Cost, Duration};
use crate::models::problem::{
    reliability_product, risk_score, service_level, Edge, Network, Node, RouteConstraints,
};
use crate::models::solution::{ConfidenceBand, CostBreakdown, Route, Segment};
use crate::utils::Environment;

/// A flat fee applied when a segment departs from a node requiring customs clearance.
const CUSTOMS_CLEARANCE_FEE: Cost = 150.;

/// An insurance premium rate applied to the base cost of each segment.
const INSURANCE_RATE: f64 = 0.02;

/// Materializes a node id sequence into a route.
///
/// Adjacent pairs are resolved to the first edge in the source's adjacency list
/// whose target matches. A pair without such an edge is skipped and reported
/// through the environment logger, so the result can have fewer segments than
/// pairs. An empty or single-node sequence yields a route with no segments and
/// reliability 1 by convention of an empty product.
pub fn materialize_route(
    network: &Network,
    path: &[String],
    route_id: &str,
    constraints: RouteConstraints,
    environment: &Environment,
) -> Route {
    let mut segments = Vec::with_capacity(path.len().saturating_sub(1));

    for pair in path.windows(2) {
        let (from_id, to_id) = (&pair[0], &pair[1]);

        let found = network.node(from_id).zip(network.node(to_id)).zip(find_first_edge(network, from_id, to_id));

        match found {
            Some(((from, to), edge)) => {
                let index = segments.len();
                segments.push(create_segment(route_id, index, from.as_ref(), to.as_ref(), edge.as_ref()));
            }
            None => {
                (environment.logger)(&format!("no edge from '{from_id}' to '{to_id}', segment skipped"));
            }
        }
    }

    create_route(route_id, segments, constraints)
}

/// Computes a symmetric confidence band around route totals using a normal
/// approximation with variance proportional to route unreliability.
pub fn confidence_band(total_time: Duration, total_cost: Cost, reliability: f64, level: f64) -> ConfidenceBand {
    let z = z_score(level);

    let var_time = total_time * (1. - reliability) * 0.3;
    let var_cost = total_cost * (1. - reliability) * 0.2;

    let time_delta = z * var_time.sqrt();
    let cost_delta = z * var_cost.sqrt();

    ConfidenceBand {
        level,
        time_min: (total_time - time_delta).max(0.),
        time_max: total_time + time_delta,
        cost_min: (total_cost - cost_delta).max(0.),
        cost_max: total_cost + cost_delta,
    }
}

fn z_score(level: f64) -> f64 {
    use crate::utils::compare_floats;
    use std::cmp::Ordering;

    [(0.90, 1.645), (0.95, 1.96), (0.99, 2.576)]
        .iter()
        .find(|(known, _)| compare_floats(level, *known) == Ordering::Equal)
        .map_or(1.96, |(_, z)| *z)
}

/// Selects the first edge in the source's adjacency list whose target matches.
fn find_first_edge<'a>(
    network: &'a Network,
    from_id: &str,
    to_id: &str,
) -> Option<&'a std::sync::Arc<Edge>> {
    network.neighbors(from_id).find(|(node, _)| node.id == *to_id).map(|(_, edge)| edge)
}

fn create_segment(route_id: &str, index: usize, from: &Node, to: &Node, edge: &Edge) -> Segment {
    Segment {
        id: format!("{route_id}-seg-{index}"),
        from: from.clone(),
        to: to.clone(),
        edge: edge.clone(),
        mode: edge.mode,
        distance: edge.distance,
        estimated_time: edge.base_time,
        cost: segment_breakdown(from, edge),
        carbon_emissions: edge.carbon_emissions * edge.distance,
    }
}

/// Builds an itemized cost of a single segment.
///
/// The customs fee is keyed on the node the segment departs from, not the one
/// it arrives at.
fn segment_breakdown(from: &Node, edge: &Edge) -> CostBreakdown {
    let linehaul = edge.base_cost;
    let fuel_surcharge = edge.fuel_cost;
    let tolls = edge.toll_cost.unwrap_or(0.);
    let customs = if from.customs_required { CUSTOMS_CLEARANCE_FEE } else { 0. };
    let insurance = edge.base_cost * INSURANCE_RATE;

    let mut breakdown = CostBreakdown {
        linehaul,
        fuel_surcharge,
        tolls,
        customs,
        insurance,
        ..CostBreakdown::default()
    };
    breakdown.total = breakdown.component_sum();

    breakdown
}

fn create_route(route_id: &str, segments: Vec<Segment>, constraints: RouteConstraints) -> Route {
    let mut total_cost = CostBreakdown::default();
    segments.iter().for_each(|segment| total_cost.add(&segment.cost));

    let reliabilities = segments.iter().map(|segment| segment.edge.reliability).collect::<Vec<_>>();
    let reliability = reliability_product(&reliabilities);

    Route {
        id: route_id.to_string(),
        total_distance: segments.iter().map(|segment| segment.distance).sum(),
        total_time: segments.iter().map(|segment| segment.estimated_time).sum(),
        total_carbon: segments.iter().map(|segment| segment.carbon_emissions).sum(),
        service_level: service_level(&reliabilities),
        reliability,
        risk_score: risk_score(reliability),
        total_cost,
        segments,
        constraints,
        confidence: None,
        metadata: None,
    }
}
