//! Request shapes of the routing boundary.

#[cfg(test)]
#[path = "../../tests/unit/format/problem_test.rs"]
mod problem_test;

use crate::format::{FormatError, INVALID_SCENARIO};
use crate::models::problem::{OptimizationConfig, RouteConstraints};
use crate::models::solution::Route;
use crate::solver::ScenarioKind;
use serde::Deserialize;
use std::io::{BufReader, Read};

/// A request for a single best route.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizeRouteRequest {
    /// An origin node id.
    pub origin: String,
    /// A destination node id.
    pub destination: String,
    /// Hard and soft constraints.
    #[serde(default)]
    pub constraints: RouteConstraints,
    /// Engine settings.
    #[serde(default)]
    pub config: OptimizationConfig,
    /// Objective labels. Informational.
    #[serde(default = "default_optimize_objectives")]
    pub objectives: Vec<String>,
}

fn default_optimize_objectives() -> Vec<String> {
    vec!["minimize_cost".to_string(), "minimize_time".to_string()]
}

/// A request for a Pareto frontier over several objectives.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParetoRequest {
    /// An origin node id.
    pub origin: String,
    /// A destination node id.
    pub destination: String,
    /// Shared constraints for every enumerated solve.
    #[serde(default)]
    pub constraints: RouteConstraints,
    /// Objective labels. Informational.
    #[serde(default = "default_pareto_objectives")]
    pub objectives: Vec<String>,
}

fn default_pareto_objectives() -> Vec<String> {
    vec!["minimize_cost".to_string(), "minimize_time".to_string(), "minimize_carbon".to_string()]
}

/// A request for a route under a named scenario preset.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioRequest {
    /// An origin node id.
    pub origin: String,
    /// A destination node id.
    pub destination: String,
    /// A scenario name.
    pub scenario: String,
}

impl ScenarioRequest {
    /// Resolves the scenario preset, rejecting unknown names.
    pub fn scenario_kind(&self) -> Result<ScenarioKind, FormatError> {
        ScenarioKind::from_name(&self.scenario).ok_or_else(|| {
            FormatError::new(
                INVALID_SCENARIO.to_string(),
                format!("unknown scenario: '{}'", self.scenario),
                "use one of: lowest_cost, fastest, greenest, most_reliable".to_string(),
            )
        })
    }
}

/// A request to route around disrupted edges from a mid-route position.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReoptimizeRequest {
    /// A route in progress.
    pub route: Route,
    /// A node id of the current position.
    pub current_position: String,
    /// Ids of temporarily unavailable edges.
    pub disrupted_edges: Vec<String>,
}

/// Deserializes an optimize request from a json reader.
pub fn deserialize_optimize_request<R: Read>(reader: BufReader<R>) -> Result<OptimizeRouteRequest, FormatError> {
    serde_json::from_reader(reader).map_err(from_serde_error)
}

/// Deserializes a Pareto request from a json reader.
pub fn deserialize_pareto_request<R: Read>(reader: BufReader<R>) -> Result<ParetoRequest, FormatError> {
    serde_json::from_reader(reader).map_err(from_serde_error)
}

/// Deserializes a scenario request from a json reader.
pub fn deserialize_scenario_request<R: Read>(reader: BufReader<R>) -> Result<ScenarioRequest, FormatError> {
    serde_json::from_reader(reader).map_err(from_serde_error)
}

/// Deserializes a reoptimize request from a json reader.
pub fn deserialize_reoptimize_request<R: Read>(reader: BufReader<R>) -> Result<ReoptimizeRequest, FormatError> {
    serde_json::from_reader(reader).map_err(from_serde_error)
}

fn from_serde_error(error: serde_json::Error) -> FormatError {
    FormatError::invalid_input(format!("cannot deserialize request: '{error}'"))
}
