#[cfg(test)]
#[path = "../../../tests/unit/models/problem/definition_test.rs"]
mod definition_test;

use crate::models::common::Timestamp;
use serde::{Deserialize, Deserializer, Serialize};

/// Specifies relative importance of each optimization objective.
///
/// Values are conventionally within [0, 1], but any non-negative finite value is
/// accepted: scaling is linear, so absolute magnitudes only affect comparisons
/// within a single query.
#[derive(Clone, Copy, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ObjectiveWeights {
    /// A monetary cost weight.
    pub cost: f64,
    /// A transit time weight.
    pub time: f64,
    /// A carbon emissions weight.
    pub carbon: f64,
    /// An operational risk weight.
    pub risk: f64,
    /// A service level weight. Does not enter edge costs.
    pub service_level: f64,
}

impl Default for ObjectiveWeights {
    fn default() -> Self {
        Self { cost: 0.5, time: 0.5, carbon: 0., risk: 0., service_level: 0. }
    }
}

impl ObjectiveWeights {
    /// Creates a new instance of `ObjectiveWeights`.
    pub fn new(cost: f64, time: f64, carbon: f64, risk: f64, service_level: f64) -> Self {
        Self { cost, time, carbon, risk, service_level }
    }

    /// Checks that all weights are finite and non-negative.
    pub fn is_valid(&self) -> bool {
        [self.cost, self.time, self.carbon, self.risk, self.service_level]
            .iter()
            .all(|weight| weight.is_finite() && *weight >= 0.)
    }

    /// Checks whether all edge level weights are zero, which disables the search heuristic.
    pub fn is_edge_neutral(&self) -> bool {
        self.cost == 0. && self.time == 0. && self.carbon == 0. && self.risk == 0.
    }

    /// Returns a relaxed weight vector used by the constraint fallback policy.
    pub fn relaxed(&self) -> Self {
        Self {
            cost: self.cost * 0.8,
            time: self.time * 1.2,
            carbon: self.carbon * 0.9,
            risk: self.risk * 1.1,
            service_level: self.service_level,
        }
    }
}

/// Specifies a path search algorithm.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub enum AlgorithmKind {
    /// Best-first search with a great-circle heuristic.
    #[serde(rename = "astar")]
    AStar,
    /// Non-negative single-source shortest path.
    #[serde(rename = "dijkstra")]
    Dijkstra,
    /// Bidirectional FIFO meet used as a reachability probe.
    #[serde(rename = "bidirectional")]
    Bidirectional,
    /// A-star with a fallback to dijkstra when no path is found.
    #[serde(rename = "hybrid")]
    Hybrid,
}

impl AlgorithmKind {
    /// Resolves an algorithm from its wire name. Unknown names map to astar.
    pub fn from_name(name: &str) -> Self {
        match name {
            "dijkstra" => AlgorithmKind::Dijkstra,
            "bidirectional" => AlgorithmKind::Bidirectional,
            "hybrid" => AlgorithmKind::Hybrid,
            _ => AlgorithmKind::AStar,
        }
    }

    /// Returns a wire name of the algorithm.
    pub fn name(&self) -> &'static str {
        match self {
            AlgorithmKind::AStar => "astar",
            AlgorithmKind::Dijkstra => "dijkstra",
            AlgorithmKind::Bidirectional => "bidirectional",
            AlgorithmKind::Hybrid => "hybrid",
        }
    }
}

impl<'de> Deserialize<'de> for AlgorithmKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        Ok(AlgorithmKind::from_name(&name))
    }
}

/// Specifies per query settings of the optimization engine.
#[derive(Clone, Copy, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OptimizationConfig {
    /// Objective weights used to scalarize edge costs.
    pub weights: ObjectiveWeights,
    /// A path search algorithm.
    pub algorithm: AlgorithmKind,
    /// Whether traffic conditions should be taken into account. Informational.
    pub consider_traffic: bool,
    /// Whether weather conditions should be taken into account. Informational.
    pub consider_weather: bool,
    /// Whether a stochastic confidence band should be computed.
    pub stochastic: bool,
    /// A confidence level for the stochastic band.
    pub confidence_level: f64,
}

impl Default for OptimizationConfig {
    fn default() -> Self {
        Self {
            weights: ObjectiveWeights::default(),
            algorithm: AlgorithmKind::Hybrid,
            consider_traffic: true,
            consider_weather: true,
            stochastic: false,
            confidence_level: 0.95,
        }
    }
}

/// Specifies a delivery time window constraint.
#[derive(Clone, Copy, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeWindowConstraint {
    /// Window start as a timestamp in milliseconds.
    pub start: Timestamp,
    /// Window end as a timestamp in milliseconds.
    pub end: Timestamp,
    /// Whether violation rejects the route.
    #[serde(default)]
    pub hard_constraint: bool,
}

impl TimeWindowConstraint {
    /// Returns window duration in milliseconds.
    pub fn duration(&self) -> Timestamp {
        self.end - self.start
    }
}

/// Specifies a shipment capacity constraint.
#[derive(Clone, Copy, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CapacityConstraint {
    /// A maximum shipment weight used as a proxy capacity unit.
    pub max_weight: f64,
    /// A maximum shipment volume. Informational.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_volume: Option<f64>,
}

/// Specifies an emission ceiling constraint.
#[derive(Clone, Copy, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmissionConstraint {
    /// A carbon ceiling in kg CO2.
    #[serde(rename = "maxCO2")]
    pub max_co2: f64,
    /// When set, exceeding the ceiling is accepted as a soft violation.
    #[serde(default)]
    pub prefer_low_emission: bool,
}

/// Specifies hard and soft constraints applied to a route query.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RouteConstraints {
    /// Delivery time windows.
    pub time_windows: Vec<TimeWindowConstraint>,
    /// A capacity constraint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity: Option<CapacityConstraint>,
    /// An emission ceiling.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emissions: Option<EmissionConstraint>,
    /// Node ids which must not appear on the route.
    pub avoid_nodes: Vec<String>,
    /// Node ids which must appear on the route.
    pub required_nodes: Vec<String>,
    /// A priority tier label. Informational.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
}
