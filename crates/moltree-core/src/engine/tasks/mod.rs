//! Traversal algorithms over a [`MolecularGraph`](crate::core::models::graph::MolecularGraph).
//!
//! Each task exposes a single `run` entry point that validates the start vertex, resets
//! the transient state of every vertex and then walks the graph.

pub mod breadth_first;
pub mod depth_first;
pub mod edge_list;
