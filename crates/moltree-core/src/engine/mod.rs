//! # Engine Module
//!
//! The stateful traversal layer. Every traversal takes the graph mutably, resets the
//! transient state of all vertices, walks from the requested root and leaves its
//! annotations (depth, predecessor, path position, chain head) on the vertices.
//!
//! ## Key Components
//!
//! - [`tasks`] - The three traversal algorithms
//! - [`path`] - Result types returned by the traversals
//! - [`config`] - Tunable traversal limits
//! - [`error`] - Error taxonomy

pub mod config;
pub mod error;
pub mod path;
pub mod tasks;
