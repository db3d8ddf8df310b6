mod builder;

pub use builder::*;

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::{ConvertError, Result};

/// Default location of the Overpass export
pub const DEFAULT_INPUT_PATH: &str = "Downloads/export.json";
/// Default location of the generated GeoJSON
pub const DEFAULT_OUTPUT_PATH: &str = "Downloads/buildings.geojson";
/// Tag key that marks a way as a building
pub const DEFAULT_BUILDING_KEY: &str = "building";
/// Fewest resolved nodes a way needs before it becomes a polygon
pub const MIN_RING_NODES: usize = 3;

/// How ways that cannot become a building are reported
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SkipPolicy {
    /// Drop unresolved references and degenerate ways without a trace above debug level
    #[default]
    Silent,
    /// Log a warning for every skipped reference and dropped way
    Warn,
}

/// Configuration for a single conversion run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConvertConfig {
    /// Overpass JSON export to read
    pub input_path: PathBuf,
    /// GeoJSON file to write (overwritten if present)
    pub output_path: PathBuf,
    /// Tag key whose presence marks a way as a building
    pub building_key: String,
    /// Minimum number of resolved nodes before closing the ring
    pub min_ring_nodes: usize,
    /// Reporting of skipped references and ways
    pub skip_policy: SkipPolicy,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            building_key: DEFAULT_BUILDING_KEY.to_string(),
            min_ring_nodes: MIN_RING_NODES,
            skip_policy: SkipPolicy::default(),
        }
    }
}

impl ConvertConfig {
    /// Create a configuration for the given input and output files
    pub fn new(input_path: impl Into<PathBuf>, output_path: impl Into<PathBuf>) -> Self {
        Self {
            input_path: input_path.into(),
            output_path: output_path.into(),
            ..Default::default()
        }
    }

    /// Set the input path
    pub fn with_input(mut self, path: impl Into<PathBuf>) -> Self {
        self.input_path = path.into();
        self
    }

    /// Set the output path
    pub fn with_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }

    /// Set the tag key used to recognise buildings
    pub fn with_building_key(mut self, key: impl Into<String>) -> Self {
        self.building_key = key.into();
        self
    }

    /// Set the minimum number of resolved nodes per building
    pub fn with_min_ring_nodes(mut self, nodes: usize) -> Self {
        self.min_ring_nodes = nodes;
        self
    }

    /// Set how skipped references and ways are reported
    pub fn with_skip_policy(mut self, policy: SkipPolicy) -> Self {
        self.skip_policy = policy;
        self
    }

    /// Create a builder for more complex configuration
    pub fn builder() -> ConvertConfigBuilder {
        ConvertConfigBuilder::new()
    }

    /// Check that the configuration can drive a conversion
    pub fn validate(&self) -> Result<()> {
        if self.input_path.as_os_str().is_empty() {
            return Err(ConvertError::Config("input path is empty".to_string()));
        }
        if self.output_path.as_os_str().is_empty() {
            return Err(ConvertError::Config("output path is empty".to_string()));
        }
        if self.building_key.is_empty() {
            return Err(ConvertError::Config("building tag key is empty".to_string()));
        }
        if self.min_ring_nodes < MIN_RING_NODES {
            return Err(ConvertError::Config(format!(
                "a polygon ring needs at least {} nodes, got {}",
                MIN_RING_NODES, self.min_ring_nodes
            )));
        }
        Ok(())
    }
}
