use crate::generator::*;
use crate::models::problem::{reliability_product, risk_score, scalarized_cost, service_level};

use proptest::prelude::*;

proptest! {
    #[test]
    fn can_keep_scalarized_cost_non_negative(edge in generate_edge(), weights in generate_weights()) {
        let cost = scalarized_cost(&edge, &weights);

        prop_assert!(cost.is_finite());
        prop_assert!(cost >= 0.);
    }

    #[test]
    fn can_keep_relaxed_weights_valid(weights in generate_weights()) {
        prop_assert!(weights.relaxed().is_valid());
    }

    #[test]
    fn can_keep_reliability_aggregates_in_range(reliabilities in generate_reliabilities()) {
        let reliability = reliability_product(&reliabilities);
        let service = service_level(&reliabilities);
        let risk = risk_score(reliability);

        prop_assert!((0. ..=1.).contains(&reliability));
        prop_assert!((0. ..=100.).contains(&service));
        prop_assert!((0. ..=100.).contains(&risk));
    }
}
