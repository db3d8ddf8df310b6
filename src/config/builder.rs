use std::path::PathBuf;

use super::{
    ConvertConfig, DEFAULT_BUILDING_KEY, DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_PATH, MIN_RING_NODES,
    SkipPolicy,
};

/// Builder for creating conversion configurations with a fluent API
#[derive(Debug, Clone, Default)]
pub struct ConvertConfigBuilder {
    input_path: Option<PathBuf>,
    output_path: Option<PathBuf>,
    building_key: Option<String>,
    min_ring_nodes: Option<usize>,
    skip_policy: Option<SkipPolicy>,
}

impl ConvertConfigBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the Overpass export to read
    pub fn input(mut self, path: impl Into<PathBuf>) -> Self {
        self.input_path = Some(path.into());
        self
    }

    /// Set the GeoJSON file to write
    pub fn output(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = Some(path.into());
        self
    }

    /// Set the tag key that marks buildings
    pub fn building_key(mut self, key: impl Into<String>) -> Self {
        self.building_key = Some(key.into());
        self
    }

    /// Set the minimum number of resolved nodes per building
    pub fn min_ring_nodes(mut self, nodes: usize) -> Self {
        self.min_ring_nodes = Some(nodes);
        self
    }

    /// Set the skip reporting policy
    pub fn skip_policy(mut self, policy: SkipPolicy) -> Self {
        self.skip_policy = Some(policy);
        self
    }

    /// Shorthand for [`SkipPolicy::Warn`]
    pub fn warn_on_skip(self) -> Self {
        self.skip_policy(SkipPolicy::Warn)
    }

    /// Build the final configuration
    pub fn build(self) -> ConvertConfig {
        ConvertConfig {
            input_path: self
                .input_path
                .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT_PATH)),
            output_path: self
                .output_path
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_PATH)),
            building_key: self
                .building_key
                .unwrap_or_else(|| DEFAULT_BUILDING_KEY.to_string()),
            min_ring_nodes: self.min_ring_nodes.unwrap_or(MIN_RING_NODES),
            skip_policy: self.skip_policy.unwrap_or_default(),
        }
    }
}
