//! # Core Models Module
//!
//! Data structures describing a molecular connectivity graph as seen by the traversal
//! engine.
//!
//! ## Key Components
//!
//! - [`ids`] - Dense vertex identifiers
//! - [`payload`] - The contract an atom-like payload fulfils (rotation eligibility)
//! - [`node`] - Vertex record with adjacency and transient traversal state
//! - [`graph`] - The append-only graph arena and its construction operations
//!
//! ## Usage
//!
//! ```ignore
//! use moltree::core::models::graph::MolecularGraph;
//!
//! let mut graph = MolecularGraph::new();
//! let a = graph.add_vertex_with_payload(atom_a);
//! let b = graph.add_vertex_with_payload(atom_b);
//! graph.add_edge(a, b)?;
//! graph.sort_all_adjacency();
//! ```

pub mod graph;
pub mod ids;
pub mod node;
pub mod payload;
