//! Generic algorithms used by the routing kernel.

pub mod dominance;
pub mod geometry;
pub mod pathfinding;
