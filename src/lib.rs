//! RouteGraph - A lightweight in-memory shortest-path routing engine implemented in Rust
//!
//! This crate provides a weighted undirected graph representation and a
//! best-first path-search engine for computing the shortest route between
//! two identified locations. Graph data is handed over by an external
//! loader as an in-memory heuristic map plus weighted edge triples; the
//! engine itself performs no I/O.

pub mod config;
pub mod core;
pub mod graph;
pub mod services;
pub mod utils;
