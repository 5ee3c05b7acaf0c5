use crate::core::models::ids::VertexId;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum GraphError {
    #[error("Vertex {id} is out of range for a graph with {vertex_count} vertices")]
    InvalidVertexId { id: VertexId, vertex_count: usize },

    #[error("Edge path buffer exhausted: {required} slots required, capacity is {capacity}")]
    OutOfCapacity { capacity: usize, required: usize },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("TOML parsing error: {source}")]
    Toml {
        #[from]
        source: toml::de::Error,
    },

    #[error("Invalid value for '{parameter}': {reason}")]
    InvalidValue {
        parameter: &'static str,
        reason: String,
    },
}
