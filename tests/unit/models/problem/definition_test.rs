use super::*;

#[test]
fn can_resolve_algorithm_from_name() {
    assert_eq!(AlgorithmKind::from_name("dijkstra"), AlgorithmKind::Dijkstra);
    assert_eq!(AlgorithmKind::from_name("bidirectional"), AlgorithmKind::Bidirectional);
    assert_eq!(AlgorithmKind::from_name("hybrid"), AlgorithmKind::Hybrid);
    assert_eq!(AlgorithmKind::from_name("astar"), AlgorithmKind::AStar);
    // unknown algorithms default to astar
    assert_eq!(AlgorithmKind::from_name("annealing"), AlgorithmKind::AStar);
}

#[test]
fn can_deserialize_config_with_unknown_algorithm() {
    let config: OptimizationConfig = serde_json::from_str(r#"{"algorithm": "quantum"}"#).unwrap();

    assert_eq!(config.algorithm, AlgorithmKind::AStar);
}

#[test]
fn can_use_documented_config_defaults() {
    let config = OptimizationConfig::default();

    assert_eq!(config.algorithm, AlgorithmKind::Hybrid);
    assert!(config.consider_traffic);
    assert!(config.consider_weather);
    assert!(!config.stochastic);
    assert_eq!(config.confidence_level, 0.95);
    assert_eq!(config.weights.cost, 0.5);
    assert_eq!(config.weights.time, 0.5);
}

#[test]
fn can_relax_weights_for_fallback() {
    let relaxed = ObjectiveWeights::new(1., 1., 1., 1., 1.).relaxed();

    assert!((relaxed.cost - 0.8).abs() < 1e-9);
    assert!((relaxed.time - 1.2).abs() < 1e-9);
    assert!((relaxed.carbon - 0.9).abs() < 1e-9);
    assert!((relaxed.risk - 1.1).abs() < 1e-9);
    assert_eq!(relaxed.service_level, 1.);
}

#[test]
fn can_reject_invalid_weights() {
    assert!(ObjectiveWeights::default().is_valid());
    assert!(ObjectiveWeights::new(7., 0., 0., 0., 0.).is_valid());

    assert!(!ObjectiveWeights::new(-0.1, 0., 0., 0., 0.).is_valid());
    assert!(!ObjectiveWeights::new(f64::NAN, 0., 0., 0., 0.).is_valid());
    assert!(!ObjectiveWeights::new(f64::INFINITY, 0., 0., 0., 0.).is_valid());
}

#[test]
fn can_detect_edge_neutral_weights() {
    assert!(ObjectiveWeights::new(0., 0., 0., 0., 1.).is_edge_neutral());
    assert!(!ObjectiveWeights::new(0., 0.1, 0., 0., 0.).is_edge_neutral());
}

#[test]
fn can_deserialize_constraints_with_defaults() {
    let constraints: RouteConstraints = serde_json::from_str("{}").unwrap();

    assert!(constraints.time_windows.is_empty());
    assert!(constraints.capacity.is_none());
    assert!(constraints.emissions.is_none());
    assert!(constraints.avoid_nodes.is_empty());
    assert!(constraints.required_nodes.is_empty());
}

#[test]
fn can_deserialize_emission_constraint_wire_name() {
    let constraints: RouteConstraints =
        serde_json::from_str(r#"{"emissions": {"maxCO2": 50.0, "preferLowEmission": true}}"#).unwrap();

    let emissions = constraints.emissions.unwrap();
    assert_eq!(emissions.max_co2, 50.);
    assert!(emissions.prefer_low_emission);
}
