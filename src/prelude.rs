//! This module reimports commonly used types.

pub use crate::models::common::{Coordinates, Cost, Distance, Duration, Timestamp};

pub use crate::models::problem::{
    AlgorithmKind, CapacityConstraint, Edge, EmissionConstraint, Network, NetworkStats, Node, NodeType,
    ObjectiveWeights, OptimizationConfig, RouteConstraints, TimeWindowConstraint, TransportMode,
};

pub use crate::models::solution::{ConfidenceBand, CostBreakdown, Route, RouteMetadata, Segment};

pub use crate::solver::{OptimizationEngine, ParetoCandidate, ParetoFrontier, ScenarioKind};

pub use crate::format::FormatError;

pub use crate::utils::{compare_floats, Environment, GenericError, GenericResult, InfoLogger, Timer};
