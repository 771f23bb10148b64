//! A core crate which computes transportation routes over a multi-modal logistics
//! network, balancing monetary cost, transit time, carbon emissions, operational
//! risk and service level under hard and soft constraints.
//!
//! # Key points
//!
//! The crate answers four operational queries: a single best route under caller
//! supplied weights and constraints, a named scenario query (cheapest, fastest,
//! greenest, most reliable), a Pareto frontier over several objectives, and a
//! re-optimization query which routes around temporarily unavailable edges from
//! a mid-route position.
//!
//! The HTTP surface, data seeding, export and persistence layers are external
//! collaborators: they talk to the kernel through the [`format`] boundary shapes
//! and the [`solver`] engine API only.
//!
//! # Modeling a routing problem
//!
//! Model definitions can be split into three groups:
//!
//! - [`common`] group contains common models: primitive units and coordinates
//! - [`problem`] group contains the routing definition models: network entities,
//!   the mutable network store, scalarized costs, weights and constraints
//! - [`solution`] group contains models which represent a computed route:
//!   segments, cost breakdowns, reliability aggregates
//!
//! [`common`]: ./models/common/index.html
//! [`problem`]: ./models/problem/index.html
//! [`solution`]: ./models/solution/index.html
//!
//! # Examples
//!
//! The simplest way to compute a route is to populate a [`Network`] and ask the
//! [`OptimizationEngine`] for an optimal path between two nodes:
//!
//! ```
//! use intermodal_core::prelude::*;
//!
//! let mut network = Network::new();
//! // populate the network with nodes and edges
//! # fn node(id: &str, lat: f64, lng: f64) -> Node {
//! #     Node {
//! #         id: id.to_string(), name: id.to_string(), node_type: NodeType::Hub,
//! #         coordinates: Coordinates::new(lat, lng), capacity: None, fixed_costs: 0.,
//! #         dwell_time: 0., operating_hours: None, facilities: vec![], customs_required: false,
//! #     }
//! # }
//! # network.add_node(node("a", 34.05, -118.24));
//! # network.add_node(node("b", 40.71, -74.01));
//! # network.add_edge(Edge {
//! #     id: "a-b".to_string(), source: "a".to_string(), target: "b".to_string(),
//! #     mode: TransportMode::Road, distance: 4500., base_time: 2600., base_cost: 1800.,
//! #     capacity: 40., reliability: 0.97, carbon_emissions: 0.09, fuel_cost: 700.,
//! #     toll_cost: None, speed_limit: None, road_quality: None,
//! # });
//!
//! let engine = OptimizationEngine::default();
//! let route = engine
//!     .optimize(&network, "a", "b", &RouteConstraints::default(), &OptimizationConfig::default())
//!     .expect("no route found");
//!
//! assert_eq!(route.segments.len(), 1);
//! ```
//!
//! [`Network`]: ./models/problem/struct.Network.html
//! [`OptimizationEngine`]: ./solver/struct.OptimizationEngine.html

#![warn(missing_docs)]
#![forbid(unsafe_code)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
pub mod helpers;

#[cfg(test)]
#[path = "../tests/generator/mod.rs"]
mod generator;

#[cfg(test)]
#[path = "../tests/features/mod.rs"]
mod features;

#[cfg(test)]
#[path = "../tests/discovery/mod.rs"]
mod discovery;

pub mod prelude;

pub mod algorithms;
pub mod construction;
pub mod format;
pub mod models;
pub mod solver;
pub mod utils;
