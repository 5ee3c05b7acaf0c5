//! # Moltree Core Library
//!
//! A traversal engine for molecular connectivity graphs. Vertices stand for atoms and edges
//! for bonds; the engine orders and annotates the graph so that a structure-building layer
//! can walk it in internal coordinates.
//!
//! ## Architectural Philosophy
//!
//! The library follows a strict two-layer architecture:
//!
//! - **[`core`]: The Foundation.** Stateless building blocks: dense vertex identifiers, the
//!   payload contract (`RotationSite`), the vertex record (`GraphNode`), the graph arena
//!   (`MolecularGraph`) and the packed `(depth, id)` encoding.
//!
//! - **[`engine`]: The Logic Core.** The traversal algorithms (compact breadth-first,
//!   edge-list breadth-first and depth-first with rotatable-chain tracking), their result
//!   types, configuration and error taxonomy.
//!
//! ## Usage
//!
//! ```
//! use moltree::core::models::graph::MolecularGraph;
//! use moltree::core::models::ids::VertexId;
//! use moltree::core::models::payload::RotationFlags;
//!
//! let mut graph: MolecularGraph<RotationFlags> = MolecularGraph::new();
//! let ids: Vec<VertexId> = (0..4).map(|_| graph.add_vertex()).collect();
//! graph.add_edge(ids[0], ids[1]).unwrap();
//! graph.add_edge(ids[1], ids[2]).unwrap();
//! graph.add_edge(ids[2], ids[3]).unwrap();
//! graph.add_edge(ids[3], ids[0]).unwrap();
//!
//! let path = graph.broad_path(ids[0]).unwrap();
//! assert_eq!(path.entries().len(), 4);
//! assert_eq!(path.ring_closure_count(), 1);
//! ```

pub mod core;
pub mod engine;
