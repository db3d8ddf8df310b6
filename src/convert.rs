use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::{
    BuildingExtractor, ConvertConfig, FeatureCollection, FileProvider, NodeIndex, OsmParser,
    Result, SourceDocument, SourceProvider, save, to_feature_collection,
};

/// Counts gathered over one conversion
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionReport {
    /// Raw elements in the export
    pub elements: usize,
    /// Distinct node ids indexed
    pub nodes_indexed: usize,
    /// Ways carrying the building key
    pub building_ways: usize,
    /// Buildings written
    pub buildings: usize,
    /// Building ways dropped for resolving too few nodes
    pub degenerate_ways: usize,
    /// Node references that did not resolve
    pub unresolved_refs: usize,
    /// Wall time in milliseconds
    pub processing_time_ms: u64,
}

/// Runs the load → index → extract → write pipeline
pub struct Converter {
    config: ConvertConfig,
    parser: OsmParser,
}

impl Converter {
    pub fn new(config: ConvertConfig) -> Self {
        Self {
            config,
            parser: OsmParser,
        }
    }

    pub fn config(&self) -> &ConvertConfig {
        &self.config
    }

    /// Convert an already loaded export
    pub fn convert(&self, document: &SourceDocument) -> (FeatureCollection, ConversionReport) {
        let start = Instant::now();

        let elements = self.parser.parse_elements(&document.elements);
        let index = NodeIndex::build(&elements);
        let (buildings, stats) =
            BuildingExtractor::from_config(&self.config).extract(&elements, &index);
        let collection = to_feature_collection(&buildings);

        let report = ConversionReport {
            elements: document.len(),
            nodes_indexed: index.len(),
            building_ways: stats.building_ways,
            buildings: stats.buildings,
            degenerate_ways: stats.degenerate_ways,
            unresolved_refs: stats.unresolved_refs,
            processing_time_ms: start.elapsed().as_millis() as u64,
        };

        tracing::debug!("Conversion report: {:?}", report);
        (collection, report)
    }

    /// Read the configured input file, convert it and write the configured output
    pub fn run(&self) -> Result<ConversionReport> {
        self.run_with(&FileProvider::new(&self.config.input_path))
    }

    /// Like [`Converter::run`] but reading from any provider
    ///
    /// Nothing is written when the source is missing or holds no elements.
    pub fn run_with(&self, provider: &dyn SourceProvider) -> Result<ConversionReport> {
        self.config.validate()?;

        tracing::info!(
            "Loading {} export from {}",
            provider.provider_type(),
            provider.origin().display()
        );
        let document = provider.fetch()?;
        tracing::info!("Loaded {} elements", document.len());

        let (collection, report) = self.convert(&document);

        save(&collection, &self.config.output_path)?;
        tracing::info!(
            "Saved {} buildings to {}",
            collection.len(),
            self.config.output_path.display()
        );

        Ok(report)
    }
}

/// Convert `config.input_path` into `config.output_path`
pub fn convert_file(config: ConvertConfig) -> Result<ConversionReport> {
    Converter::new(config).run()
}
