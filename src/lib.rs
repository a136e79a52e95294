//! Generators for directed test graphs plus an adjacency-list writer.
//!
//! Two topologies are supported: a grid of k-cliques joined by bridge
//! edges ([`clique::clique_grid`]) and a randomized planted-community
//! graph ([`community::communities`]). Both produce a [`graph::Graph`]
//! that [`writer::save_graph`] serializes one vertex per line.

pub mod clique;
pub mod community;
pub mod config;
pub mod graph;
pub mod logger;
pub mod writer;
