use crate::helpers::create_seed_network;
use crate::models::problem::TransportMode;
use crate::solver::{OptimizationEngine, ScenarioKind};

#[test]
fn can_select_direct_air_edge_for_fastest_scenario() {
    let network = create_seed_network();
    let engine = OptimizationEngine::default();

    let route = engine.optimize_scenario(&network, "lax-airport", "jfk-airport", ScenarioKind::Fastest).unwrap();

    assert_eq!(route.segments.len(), 1);
    assert_eq!(route.segments[0].edge.id, "edge-lax-jfk-air");
    assert_eq!(route.total_time, 330.);
}

#[test]
fn can_select_rail_corridor_for_lowest_cost_scenario() {
    let network = create_seed_network();
    let engine = OptimizationEngine::default();

    let route = engine.optimize_scenario(&network, "la-hub", "chicago-hub", ScenarioKind::LowestCost).unwrap();

    // golden answer: the rail spur undercuts the all-road corridor via new york
    let stops = route
        .segments
        .iter()
        .map(|segment| segment.from.id.clone())
        .chain(route.segments.last().map(|segment| segment.to.id.clone()))
        .collect::<Vec<_>>();

    assert_eq!(stops, vec!["la-hub", "dallas-hub", "atlanta-hub", "chicago-rail", "chicago-hub"]);
    assert!(route.segments.iter().any(|segment| segment.mode == TransportMode::Rail));

    let linehaul_total: f64 = route.segments.iter().map(|segment| segment.cost.linehaul).sum();
    assert_eq!(linehaul_total, 1795.);
}

#[test]
fn can_select_sea_edge_for_greenest_scenario() {
    let network = create_seed_network();
    let engine = OptimizationEngine::default();

    let route = engine.optimize_scenario(&network, "la-port", "ny-port", ScenarioKind::Greenest).unwrap();

    assert_eq!(route.segments.len(), 1);
    assert_eq!(route.segments[0].edge.id, "edge-laport-nyport-sea");
    assert!((route.total_carbon - 95.).abs() < 1e-9);
}

#[test]
fn can_attach_confidence_band_for_most_reliable_scenario() {
    let network = create_seed_network();
    let engine = OptimizationEngine::default();

    let route = engine.optimize_scenario(&network, "ny-hub", "la-hub", ScenarioKind::MostReliable).unwrap();

    let band = route.confidence.unwrap();
    assert_eq!(band.level, 0.95);
    assert!(band.time_max >= route.total_time);
}

#[test]
fn can_apply_customs_fee_when_leaving_port() {
    let network = create_seed_network();
    let engine = OptimizationEngine::default();

    let route = engine.optimize_scenario(&network, "la-port", "ny-port", ScenarioKind::Greenest).unwrap();

    // the port of los angeles requires customs clearance on departure
    assert_eq!(route.segments[0].cost.customs, 150.);
    assert_eq!(route.total_cost.customs, 150.);
}
