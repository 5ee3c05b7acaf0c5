use super::error::ConfigError;
use serde::Deserialize;
use std::path::Path;

pub const DEFAULT_EDGE_CAPACITY_FACTOR: usize = 40;

/// Limits applied by the traversal tasks.
///
/// Loadable from a TOML table such as:
///
/// ```toml
/// edge_capacity_factor = 40
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TraversalConfig {
    /// Slots reserved per vertex by the edge-list traversal. Each recorded edge takes two
    /// slots and the root seed takes the first two. Never zero once constructed.
    edge_capacity_factor: usize,
}

impl Default for TraversalConfig {
    fn default() -> Self {
        Self {
            edge_capacity_factor: DEFAULT_EDGE_CAPACITY_FACTOR,
        }
    }
}

impl TraversalConfig {
    pub fn builder() -> TraversalConfigBuilder {
        TraversalConfigBuilder::new()
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        Self::from_toml_str(&content)
    }

    /// Slots reserved per vertex by the edge-list traversal; at least 1.
    pub fn edge_capacity_factor(&self) -> usize {
        self.edge_capacity_factor
    }

    /// Number of slots in the edge-list buffer for a graph of `vertex_count` vertices.
    pub fn edge_slot_capacity(&self, vertex_count: usize) -> usize {
        self.edge_capacity_factor.saturating_mul(vertex_count)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.edge_capacity_factor == 0 {
            return Err(ConfigError::InvalidValue {
                parameter: "edge_capacity_factor",
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct TraversalConfigBuilder {
    edge_capacity_factor: Option<usize>,
}

impl TraversalConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn edge_capacity_factor(mut self, factor: usize) -> Self {
        self.edge_capacity_factor = Some(factor);
        self
    }

    pub fn build(self) -> Result<TraversalConfig, ConfigError> {
        let config = TraversalConfig {
            edge_capacity_factor: self
                .edge_capacity_factor
                .unwrap_or(DEFAULT_EDGE_CAPACITY_FACTOR),
        };
        config.validate()?;
        Ok(config)
    }
}
