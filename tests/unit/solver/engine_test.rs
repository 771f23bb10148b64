use super::*;
use crate::helpers::{create_line_network, create_seed_network, create_test_node};
use crate::models::problem::EmissionConstraint;

#[test]
fn can_find_route_with_metadata() {
    let network = create_seed_network();
    let engine = OptimizationEngine::default();

    let route = engine
        .optimize(&network, "la-hub", "ny-hub", &RouteConstraints::default(), &OptimizationConfig::default())
        .unwrap();

    assert!(!route.segments.is_empty());
    assert_eq!(route.segments.first().unwrap().from.id, "la-hub");
    assert_eq!(route.segments.last().unwrap().to.id, "ny-hub");

    let metadata = route.metadata.unwrap();
    assert_eq!(metadata.alternatives_considered, 1);
    assert!(["astar", "dijkstra"].contains(&metadata.algorithm.as_str()));
}

#[test]
fn can_keep_segment_chain_consistent() {
    let network = create_seed_network();
    let engine = OptimizationEngine::default();

    let route = engine
        .optimize(&network, "la-hub", "chicago-hub", &RouteConstraints::default(), &OptimizationConfig::default())
        .unwrap();

    route.segments.windows(2).for_each(|pair| {
        assert_eq!(pair[0].to.id, pair[1].from.id);
    });
}

#[test]
fn can_return_none_when_no_path_exists() {
    let network = create_seed_network();
    let engine = OptimizationEngine::default();

    let route =
        engine.optimize(&network, "la-hub", "seattle-hub", &RouteConstraints::default(), &OptimizationConfig::default());

    assert!(route.is_none());
}

#[test]
fn can_fallback_to_relaxed_weights_on_violated_constraints() {
    let network = create_seed_network();
    let engine = OptimizationEngine::default();
    let constraints = RouteConstraints {
        emissions: Some(EmissionConstraint { max_co2: 10., prefer_low_emission: false }),
        ..RouteConstraints::default()
    };

    let route = engine
        .optimize(&network, "la-hub", "chicago-hub", &constraints, &OptimizationConfig::default())
        .unwrap();

    // the fallback reruns dijkstra and returns its route without re-validation
    let metadata = route.metadata.unwrap();
    assert_eq!(metadata.algorithm, "dijkstra");
    assert_eq!(metadata.alternatives_considered, 2);
    assert!(route.total_carbon > 10.);
}

#[test]
fn can_accept_soft_emission_violation_without_fallback() {
    let network = create_seed_network();
    let engine = OptimizationEngine::default();
    let constraints = RouteConstraints {
        emissions: Some(EmissionConstraint { max_co2: 10., prefer_low_emission: true }),
        ..RouteConstraints::default()
    };

    let route = engine
        .optimize(&network, "la-hub", "chicago-hub", &constraints, &OptimizationConfig::default())
        .unwrap();

    assert_eq!(route.metadata.unwrap().alternatives_considered, 1);
}

#[test]
fn can_attach_confidence_band_when_stochastic() {
    let network = create_seed_network();
    let engine = OptimizationEngine::default();
    let config = OptimizationConfig { stochastic: true, confidence_level: 0.9, ..OptimizationConfig::default() };

    let route = engine.optimize(&network, "la-hub", "ny-hub", &RouteConstraints::default(), &config).unwrap();

    let band = route.confidence.unwrap();
    assert_eq!(band.level, 0.9);
    assert!(band.time_min <= route.total_time && route.total_time <= band.time_max);
    assert!(band.cost_min <= route.total_cost.total && route.total_cost.total <= band.cost_max);
}

#[test]
fn can_dispatch_bidirectional_algorithm() {
    let network = create_line_network(&["a", "b", "c"]);
    let engine = OptimizationEngine::default();
    let config = OptimizationConfig { algorithm: AlgorithmKind::Bidirectional, ..OptimizationConfig::default() };

    let route = engine.optimize(&network, "a", "c", &RouteConstraints::default(), &config).unwrap();

    assert_eq!(route.metadata.unwrap().algorithm, "bidirectional");
    assert_eq!(route.segments.len(), 2);
}

#[test]
fn can_snapshot_route_data_against_later_mutation() {
    let mut network = create_line_network(&["a", "b"]);
    let engine = OptimizationEngine::default();

    let route =
        engine.optimize(&network, "a", "b", &RouteConstraints::default(), &OptimizationConfig::default()).unwrap();

    network.remove_node("b");

    assert_eq!(route.segments[0].to.id, "b");
    assert_eq!(route.segments[0].edge.id, "edge-a-b");
}

#[test]
fn can_generate_unique_route_ids() {
    let network = create_line_network(&["a", "b"]);
    let engine = OptimizationEngine::default();

    let first =
        engine.optimize(&network, "a", "b", &RouteConstraints::default(), &OptimizationConfig::default()).unwrap();
    let second =
        engine.optimize(&network, "a", "b", &RouteConstraints::default(), &OptimizationConfig::default()).unwrap();

    assert_ne!(first.id, second.id);
}

#[test]
fn can_treat_same_origin_and_destination_as_empty_route() {
    let mut network = create_line_network(&["a", "b"]);
    network.add_node(create_test_node("c", 0., 2.));

    let engine = OptimizationEngine::default();
    let route =
        engine.optimize(&network, "a", "a", &RouteConstraints::default(), &OptimizationConfig::default()).unwrap();

    assert!(route.segments.is_empty());
    assert_eq!(route.reliability, 1.);
}
