//! # Core Module
//!
//! Stateless foundation of the traversal engine.
//!
//! ## Key Components
//!
//! - **Graph Representation** ([`models`]) - Vertex identifiers, vertex records, the payload
//!   contract and the graph arena
//! - **Path Encoding** ([`encoding`]) - The packed `(depth << 8) | id` entry used by
//!   traversal outputs

pub mod encoding;
pub mod models;
