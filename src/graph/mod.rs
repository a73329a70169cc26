//! Per-player connectivity graph.
//!
//! `RouteGraph` records which stations a player has linked with claimed
//! routes and answers shortest-path queries for the spanning bonuses.

pub mod route_graph;

pub use route_graph::RouteGraph;
