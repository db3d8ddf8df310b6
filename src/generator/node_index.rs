use geo::Coord;
use std::collections::HashMap;

use super::{OsmElement, OsmId};

/// Lookup from node id to its coordinate, built once per export
#[derive(Debug, Clone, Default)]
pub struct NodeIndex {
    coords: HashMap<OsmId, Coord<f64>>,
}

impl NodeIndex {
    /// Index every node in `elements`. A repeated id keeps the last coordinate seen.
    pub fn build(elements: &[OsmElement]) -> Self {
        let mut coords = HashMap::new();
        for element in elements {
            if let OsmElement::Node(node) = element {
                coords.insert(node.id, node.coord);
            }
        }
        tracing::debug!("Indexed {} nodes", coords.len());
        Self { coords }
    }

    pub fn get(&self, id: OsmId) -> Option<Coord<f64>> {
        self.coords.get(&id).copied()
    }

    pub fn contains(&self, id: OsmId) -> bool {
        self.coords.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.coords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// Resolve `refs` in order, dropping ids that are not indexed
    pub fn resolve<'a>(&'a self, refs: &'a [OsmId]) -> impl Iterator<Item = Coord<f64>> + 'a {
        refs.iter().filter_map(|id| self.get(*id))
    }
}

/// Build the node lookup for `elements`
pub fn build_index(elements: &[OsmElement]) -> NodeIndex {
    NodeIndex::build(elements)
}
