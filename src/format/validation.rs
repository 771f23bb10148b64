//! This module provides functionality to validate boundary payloads for
//! logical correctness before they reach the store or the engine.

#[cfg(test)]
#[path = "../../tests/unit/format/validation_test.rs"]
mod validation_test;

use crate::format::FormatError;
use crate::models::problem::{Edge, Node, ObjectiveWeights};

/// Validates a node payload on a set of rules.
pub fn validate_node(node: &Node) -> Result<(), Vec<FormatError>> {
    let errors = check_non_empty("id", &node.id)
        .err()
        .into_iter()
        .chain(check_non_empty("name", &node.name).err())
        .chain(check_coordinates(node).err())
        .collect::<Vec<_>>();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates an edge payload on a set of rules.
pub fn validate_edge(edge: &Edge) -> Result<(), Vec<FormatError>> {
    let errors = check_non_empty("id", &edge.id)
        .err()
        .into_iter()
        .chain(check_non_empty("source", &edge.source).err())
        .chain(check_non_empty("target", &edge.target).err())
        .chain(check_non_negative("distance", edge.distance).err())
        .chain(check_non_negative("baseTime", edge.base_time).err())
        .chain(check_non_negative("baseCost", edge.base_cost).err())
        .chain(check_non_negative("capacity", edge.capacity).err())
        .chain(check_non_negative("carbonEmissions", edge.carbon_emissions).err())
        .chain(check_reliability(edge.reliability).err())
        .collect::<Vec<_>>();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates that every objective weight is finite and non-negative.
pub fn validate_weights(weights: &ObjectiveWeights) -> Result<(), FormatError> {
    if weights.is_valid() {
        Ok(())
    } else {
        Err(FormatError::invalid_input("weights must be finite and non-negative".to_string()))
    }
}

fn check_non_empty(field: &str, value: &str) -> Result<(), FormatError> {
    if value.is_empty() {
        Err(FormatError::invalid_input(format!("missing or empty required field: '{field}'")))
    } else {
        Ok(())
    }
}

fn check_non_negative(field: &str, value: f64) -> Result<(), FormatError> {
    if value.is_finite() && value >= 0. {
        Ok(())
    } else {
        Err(FormatError::invalid_input(format!("field '{field}' must be finite and non-negative")))
    }
}

fn check_reliability(value: f64) -> Result<(), FormatError> {
    if (0. ..=1.).contains(&value) {
        Ok(())
    } else {
        Err(FormatError::invalid_input("field 'reliability' must be within [0, 1]".to_string()))
    }
}

fn check_coordinates(node: &Node) -> Result<(), FormatError> {
    if node.coordinates.is_valid() {
        Ok(())
    } else {
        Err(FormatError::invalid_input(format!(
            "coordinates of node '{}' are out of range: lat must be within [-90, 90], lng within (-180, 180]",
            node.id
        )))
    }
}
