#[cfg(test)]
#[path = "../../tests/unit/solver/scenarios_test.rs"]
mod scenarios_test;

use crate::models::problem::{AlgorithmKind, ObjectiveWeights, OptimizationConfig};

/// A named optimization preset with fixed weights and algorithm choice.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ScenarioKind {
    /// Minimizes monetary cost.
    LowestCost,
    /// Minimizes transit time.
    Fastest,
    /// Minimizes carbon emissions.
    Greenest,
    /// Maximizes reliability, reporting a confidence band.
    MostReliable,
}

impl ScenarioKind {
    /// Resolves a scenario from its wire name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "lowest_cost" => Some(ScenarioKind::LowestCost),
            "fastest" => Some(ScenarioKind::Fastest),
            "greenest" => Some(ScenarioKind::Greenest),
            "most_reliable" => Some(ScenarioKind::MostReliable),
            _ => None,
        }
    }

    /// Returns a wire name of the scenario.
    pub fn name(&self) -> &'static str {
        match self {
            ScenarioKind::LowestCost => "lowest_cost",
            ScenarioKind::Fastest => "fastest",
            ScenarioKind::Greenest => "greenest",
            ScenarioKind::MostReliable => "most_reliable",
        }
    }

    /// Returns the optimization config of the preset.
    pub fn config(&self) -> OptimizationConfig {
        let defaults = OptimizationConfig::default();

        match self {
            ScenarioKind::LowestCost => OptimizationConfig {
                weights: ObjectiveWeights::new(1., 0., 0., 0., 0.),
                algorithm: AlgorithmKind::Dijkstra,
                stochastic: false,
                ..defaults
            },
            ScenarioKind::Fastest => OptimizationConfig {
                weights: ObjectiveWeights::new(0., 1., 0., 0., 0.),
                algorithm: AlgorithmKind::AStar,
                stochastic: false,
                ..defaults
            },
            ScenarioKind::Greenest => OptimizationConfig {
                weights: ObjectiveWeights::new(0., 0., 1., 0., 0.),
                algorithm: AlgorithmKind::Dijkstra,
                stochastic: false,
                ..defaults
            },
            ScenarioKind::MostReliable => OptimizationConfig {
                weights: ObjectiveWeights::new(0.1, 0.1, 0., 0.5, 0.3),
                algorithm: AlgorithmKind::Hybrid,
                stochastic: true,
                confidence_level: 0.95,
                ..defaults
            },
        }
    }
}
