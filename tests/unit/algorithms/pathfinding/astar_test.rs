use super::*;
use crate::helpers::{create_line_network, create_test_edge, create_test_network, create_test_node};
use crate::models::problem::Edge;

fn create_diamond(upper_cost: f64, lower_cost: f64) -> Network {
    create_test_network(
        vec![
            create_test_node("start", 0., 0.),
            create_test_node("upper", 0., 0.5),
            create_test_node("lower", 0., 0.5),
            create_test_node("goal", 0., 1.),
        ],
        vec![
            Edge { base_cost: upper_cost, ..create_test_edge("edge-start-upper", "start", "upper") },
            Edge { base_cost: upper_cost, ..create_test_edge("edge-upper-goal", "upper", "goal") },
            Edge { base_cost: lower_cost, ..create_test_edge("edge-start-lower", "start", "lower") },
            Edge { base_cost: lower_cost, ..create_test_edge("edge-lower-goal", "lower", "goal") },
        ],
    )
}

#[test]
fn can_find_path_in_line_network() {
    let network = create_line_network(&["a", "b", "c"]);

    let path = find_path_astar(&network, "a", "c", &ObjectiveWeights::default());

    assert_eq!(path, Some(vec!["a".to_string(), "b".to_string(), "c".to_string()]));
}

#[test]
fn can_return_single_node_for_same_start_and_goal() {
    let network = create_line_network(&["a", "b"]);

    assert_eq!(find_path_astar(&network, "a", "a", &ObjectiveWeights::default()), Some(vec!["a".to_string()]));
}

#[test]
fn can_return_none_when_components_are_disconnected() {
    let mut network = create_line_network(&["a", "b"]);
    network.add_node(create_test_node("island", 10., 10.));

    assert_eq!(find_path_astar(&network, "a", "island", &ObjectiveWeights::default()), None);
}

#[test]
fn can_return_none_for_unknown_node() {
    let network = create_line_network(&["a", "b"]);

    assert_eq!(find_path_astar(&network, "a", "ghost", &ObjectiveWeights::default()), None);
}

#[test]
fn can_prefer_cheaper_branch_under_cost_weights() {
    let network = create_diamond(100., 10.);

    let path = find_path_astar(&network, "start", "goal", &ObjectiveWeights::new(1., 0., 0., 0., 0.));

    assert_eq!(
        path,
        Some(vec!["start".to_string(), "lower".to_string(), "goal".to_string()])
    );
}

#[test]
fn can_break_ties_by_insertion_order() {
    // both branches cost the same, so the first relaxed branch must win
    let network = create_diamond(50., 50.);

    let path = find_path_astar(&network, "start", "goal", &ObjectiveWeights::new(1., 0., 0., 0., 0.));

    assert_eq!(
        path,
        Some(vec!["start".to_string(), "upper".to_string(), "goal".to_string()])
    );
}

#[test]
fn can_search_uniformly_with_edge_neutral_weights() {
    let network = create_line_network(&["a", "b", "c"]);

    let path = find_path_astar(&network, "a", "c", &ObjectiveWeights::new(0., 0., 0., 0., 1.));

    assert_eq!(path, Some(vec!["a".to_string(), "b".to_string(), "c".to_string()]));
}
