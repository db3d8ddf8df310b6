use geo::Coord;
use serde_json::Value;
use std::collections::HashMap;

/// OSM element identifier. Only used to correlate ways with nodes.
pub type OsmId = i64;

/// A node with its position (`x` = longitude, `y` = latitude)
#[derive(Debug, Clone, PartialEq)]
pub struct OsmNode {
    pub id: OsmId,
    pub coord: Coord<f64>,
}

/// A way with its ordered node references
#[derive(Debug, Clone, PartialEq)]
pub struct OsmWay {
    pub id: OsmId,
    pub nodes: Vec<OsmId>,
    pub tags: HashMap<String, String>,
}

impl OsmWay {
    /// Whether the way carries `key`, whatever its value
    pub fn has_tag(&self, key: &str) -> bool {
        self.tags.contains_key(key)
    }
}

/// Represents a parsed OSM element
#[derive(Debug, Clone, PartialEq)]
pub enum OsmElement {
    Node(OsmNode),
    Way(OsmWay),
}

impl OsmElement {
    pub fn id(&self) -> OsmId {
        match self {
            OsmElement::Node(node) => node.id,
            OsmElement::Way(way) => way.id,
        }
    }
}

/// Parser for the `elements` array of an Overpass export
///
/// Malformed elements are skipped rather than failing the whole export: a node
/// without coordinates simply never enters the index, and a way without
/// `nodes` resolves to nothing.
pub struct OsmParser;

impl OsmParser {
    /// Parse every recognised element, keeping source order
    pub fn parse_elements(&self, elements: &[Value]) -> Vec<OsmElement> {
        elements
            .iter()
            .filter_map(|element| self.parse_element(element))
            .collect()
    }

    /// Parse a single element, or `None` when it is of no use to the converter
    pub fn parse_element(&self, element: &Value) -> Option<OsmElement> {
        let element_type = element.get("type").and_then(Value::as_str)?;

        let parsed = match element_type {
            "node" => self.parse_node(element).map(OsmElement::Node),
            "way" => self.parse_way(element).map(OsmElement::Way),
            _ => return None, // Skip relations and unknown types
        };

        if parsed.is_none() {
            tracing::debug!("Skipping malformed {} element: {}", element_type, element);
        }
        parsed
    }

    fn parse_node(&self, element: &Value) -> Option<OsmNode> {
        let id = element.get("id").and_then(Value::as_i64)?;
        let lon = element.get("lon").and_then(Value::as_f64)?;
        let lat = element.get("lat").and_then(Value::as_f64)?;
        Some(OsmNode {
            id,
            coord: Coord { x: lon, y: lat },
        })
    }

    fn parse_way(&self, element: &Value) -> Option<OsmWay> {
        let id = element.get("id").and_then(Value::as_i64)?;

        let nodes: Vec<OsmId> = element
            .get("nodes")
            .and_then(Value::as_array)
            .map(|refs| refs.iter().filter_map(Value::as_i64).collect())
            .unwrap_or_default();

        // Keep every key: only presence matters for classification
        let mut tags = HashMap::new();
        if let Some(tags_obj) = element.get("tags").and_then(Value::as_object) {
            for (key, value) in tags_obj {
                let value = match value {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                };
                tags.insert(key.clone(), value);
            }
        }

        Some(OsmWay { id, nodes, tags })
    }
}
