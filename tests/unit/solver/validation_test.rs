use super::*;
use crate::construction::materialize_route;
use crate::helpers::create_line_network;
use crate::models::problem::{CapacityConstraint, EmissionConstraint, TimeWindowConstraint};
use crate::utils::Environment;

/// Builds a two segment route over a unit line network: 120 min, 40 capacity,
/// 0.1 kg/km emissions over 100 km per segment.
fn create_line_route(constraints: &RouteConstraints) -> Route {
    let network = create_line_network(&["a", "b", "c"]);
    let path = ["a", "b", "c"].iter().map(|id| id.to_string()).collect::<Vec<_>>();

    materialize_route(&network, &path, "route-1", constraints.clone(), &Environment::default())
}

fn validate_with(constraints: RouteConstraints) -> Result<(), Vec<GenericError>> {
    validate(&create_line_route(&constraints), &constraints)
}

#[test]
fn can_accept_route_without_constraints() {
    assert!(validate_with(RouteConstraints::default()).is_ok());
}

#[test]
fn can_check_hard_time_window() {
    // the route takes 120 min = 7_200_000 ms
    let tight = TimeWindowConstraint { start: 0., end: 3_600_000., hard_constraint: true };
    let wide = TimeWindowConstraint { start: 0., end: 14_400_000., hard_constraint: true };

    assert!(validate_with(RouteConstraints { time_windows: vec![tight], ..RouteConstraints::default() }).is_err());
    assert!(validate_with(RouteConstraints { time_windows: vec![wide], ..RouteConstraints::default() }).is_ok());
}

#[test]
fn can_ignore_soft_time_window() {
    let tight = TimeWindowConstraint { start: 0., end: 3_600_000., hard_constraint: false };

    assert!(validate_with(RouteConstraints { time_windows: vec![tight], ..RouteConstraints::default() }).is_ok());
}

#[test]
fn can_check_capacity_on_every_segment() {
    let over = CapacityConstraint { max_weight: 50., max_volume: None };
    let under = CapacityConstraint { max_weight: 30., max_volume: None };

    assert!(validate_with(RouteConstraints { capacity: Some(over), ..RouteConstraints::default() }).is_err());
    assert!(validate_with(RouteConstraints { capacity: Some(under), ..RouteConstraints::default() }).is_ok());
}

#[test]
fn can_check_emission_ceiling() {
    // the route emits 0.1 * 100 * 2 = 20 kg
    let hard = EmissionConstraint { max_co2: 10., prefer_low_emission: false };
    let soft = EmissionConstraint { max_co2: 10., prefer_low_emission: true };
    let wide = EmissionConstraint { max_co2: 100., prefer_low_emission: false };

    assert!(validate_with(RouteConstraints { emissions: Some(hard), ..RouteConstraints::default() }).is_err());
    assert!(validate_with(RouteConstraints { emissions: Some(soft), ..RouteConstraints::default() }).is_ok());
    assert!(validate_with(RouteConstraints { emissions: Some(wide), ..RouteConstraints::default() }).is_ok());
}

#[test]
fn can_check_avoided_nodes() {
    let avoid_mid = RouteConstraints { avoid_nodes: vec!["b".to_string()], ..RouteConstraints::default() };
    let avoid_other = RouteConstraints { avoid_nodes: vec!["x".to_string()], ..RouteConstraints::default() };

    assert!(validate_with(avoid_mid).is_err());
    assert!(validate_with(avoid_other).is_ok());
}

#[test]
fn can_check_required_nodes() {
    let require_mid = RouteConstraints { required_nodes: vec!["b".to_string()], ..RouteConstraints::default() };
    let require_missing = RouteConstraints { required_nodes: vec!["x".to_string()], ..RouteConstraints::default() };

    assert!(validate_with(require_mid).is_ok());
    assert!(validate_with(require_missing).is_err());
}

#[test]
fn can_collect_all_violations() {
    let constraints = RouteConstraints {
        capacity: Some(CapacityConstraint { max_weight: 50., max_volume: None }),
        emissions: Some(EmissionConstraint { max_co2: 10., prefer_low_emission: false }),
        avoid_nodes: vec!["b".to_string()],
        ..RouteConstraints::default()
    };

    let errors = validate_with(constraints).unwrap_err();

    assert_eq!(errors.len(), 3);
}
