use serde::{Deserialize, Serialize};
use std::path::Path;

use super::{Building, OsmId};
use crate::Result;

/// `"type": "FeatureCollection"` marker
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FeatureCollectionType {
    #[default]
    FeatureCollection,
}

/// `"type": "Feature"` marker
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FeatureType {
    #[default]
    Feature,
}

/// Polygon geometry with a single exterior ring
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Geometry {
    Polygon { coordinates: Vec<Vec<[f64; 2]>> },
}

/// Properties carried by each building feature
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureProperties {
    pub id: OsmId,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    #[serde(rename = "type")]
    pub kind: FeatureType,
    pub properties: FeatureProperties,
    pub geometry: Geometry,
}

impl From<&Building> for Feature {
    fn from(building: &Building) -> Self {
        Self {
            kind: FeatureType::Feature,
            properties: FeatureProperties { id: building.id },
            geometry: Geometry::Polygon {
                coordinates: vec![building.coordinates()],
            },
        }
    }
}

/// The output document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeatureCollection {
    #[serde(rename = "type")]
    pub kind: FeatureCollectionType,
    pub features: Vec<Feature>,
}

impl FeatureCollection {
    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Serialize with two-space indentation
    pub fn to_pretty_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse a document previously written by [`save`]
    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }
}

/// One feature per building, in the order given
pub fn to_feature_collection(buildings: &[Building]) -> FeatureCollection {
    FeatureCollection {
        kind: FeatureCollectionType::FeatureCollection,
        features: buildings.iter().map(Feature::from).collect(),
    }
}

/// Write `document` to `path`, replacing any existing file
pub fn save(document: &FeatureCollection, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let json = document.to_pretty_string()?;
    std::fs::write(path, json)?;
    tracing::debug!(
        "Wrote {} features to {}",
        document.len(),
        path.display()
    );
    Ok(())
}
