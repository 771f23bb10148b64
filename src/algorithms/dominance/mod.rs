//! Pairwise dominance ordering used by the Pareto frontier filter.

#[cfg(test)]
#[path = "../../../tests/unit/algorithms/dominance/dominance_test.rs"]
mod dominance_test;

use crate::utils::compare_floats;
use std::cmp::Ordering;

/// Calculates dominance order of two objective vectors of the same length,
/// where lower objective values are better.
///
/// `Ordering::Less` means `a` dominates `b`: it is no worse on every objective
/// and strictly better on at least one.
pub fn dominance_order(a: &[f64], b: &[f64]) -> Ordering {
    debug_assert!(a.len() == b.len());

    let mut less_cnt = 0;
    let mut greater_cnt = 0;

    for (left, right) in a.iter().zip(b.iter()) {
        match compare_floats(*left, *right) {
            Ordering::Less => less_cnt += 1,
            Ordering::Greater => greater_cnt += 1,
            Ordering::Equal => {}
        }
    }

    if less_cnt > 0 && greater_cnt == 0 {
        Ordering::Less
    } else if greater_cnt > 0 && less_cnt == 0 {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

/// Marks each objective vector as non-dominated (true) or dominated (false)
/// within the given pool.
pub fn mark_non_dominated(points: &[Vec<f64>]) -> Vec<bool> {
    points
        .iter()
        .map(|candidate| {
            !points.iter().any(|other| dominance_order(other, candidate) == Ordering::Less)
        })
        .collect()
}
