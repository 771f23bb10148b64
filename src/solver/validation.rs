#[cfg(test)]
#[path = "../../tests/unit/solver/validation_test.rs"]
mod validation_test;

use crate::models::solution::Route;
use crate::models::problem::RouteConstraints;
use crate::utils::GenericError;
use hashbrown::HashSet;

/// Milliseconds per minute, used to compare route time against window spans.
const MINUTE_MS: f64 = 60_000.;

/// Validates a route against hard constraints, collecting every violation.
pub(crate) fn validate(route: &Route, constraints: &RouteConstraints) -> Result<(), Vec<GenericError>> {
    let errors = check_time_windows(route, constraints)
        .err()
        .into_iter()
        .chain(check_capacity(route, constraints).err())
        .chain(check_emissions(route, constraints).err())
        .chain(check_avoid_nodes(route, constraints).err())
        .chain(check_required_nodes(route, constraints).err())
        .collect::<Vec<_>>();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_time_windows(route: &Route, constraints: &RouteConstraints) -> Result<(), GenericError> {
    let route_time_ms = route.total_time * MINUTE_MS;

    constraints
        .time_windows
        .iter()
        .filter(|window| window.hard_constraint)
        .find(|window| route_time_ms > window.duration())
        .map_or(Ok(()), |window| {
            Err(format!(
                "route time {:.0}min exceeds hard time window of {:.0}min",
                route.total_time,
                window.duration() / MINUTE_MS
            )
            .into())
        })
}

fn check_capacity(route: &Route, constraints: &RouteConstraints) -> Result<(), GenericError> {
    let Some(capacity) = constraints.capacity else { return Ok(()) };

    route
        .segments
        .iter()
        .find(|segment| segment.edge.capacity < capacity.max_weight)
        .map_or(Ok(()), |segment| {
            Err(format!(
                "edge '{}' capacity {} is below required {}",
                segment.edge.id, segment.edge.capacity, capacity.max_weight
            )
            .into())
        })
}

fn check_emissions(route: &Route, constraints: &RouteConstraints) -> Result<(), GenericError> {
    let Some(emissions) = constraints.emissions else { return Ok(()) };

    // an exceeded ceiling is accepted as soft when low emission routing is preferred
    if route.total_carbon > emissions.max_co2 && !emissions.prefer_low_emission {
        Err(format!("route carbon {:.2}kg exceeds ceiling {:.2}kg", route.total_carbon, emissions.max_co2).into())
    } else {
        Ok(())
    }
}

fn check_avoid_nodes(route: &Route, constraints: &RouteConstraints) -> Result<(), GenericError> {
    constraints.avoid_nodes.iter().find(|node_id| route.visits(node_id.as_str())).map_or(Ok(()), |node_id| {
        Err(format!("route visits avoided node '{node_id}'").into())
    })
}

fn check_required_nodes(route: &Route, constraints: &RouteConstraints) -> Result<(), GenericError> {
    let visited = route
        .segments
        .iter()
        .flat_map(|segment| [segment.from.id.as_str(), segment.to.id.as_str()])
        .collect::<HashSet<_>>();

    let missing = constraints
        .required_nodes
        .iter()
        .filter(|node_id| !visited.contains(node_id.as_str()))
        .cloned()
        .collect::<Vec<_>>();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(format!("route misses required nodes: {}", missing.join(", ")).into())
    }
}
