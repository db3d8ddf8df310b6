use geo::{Coord, LineString, Polygon};

use super::{NodeIndex, OsmElement, OsmId, OsmWay};
use crate::{ConvertConfig, DEFAULT_BUILDING_KEY, MIN_RING_NODES, SkipPolicy};

/// A building outline resolved from a way
#[derive(Debug, Clone, PartialEq)]
pub struct Building {
    /// Id of the source way
    pub id: OsmId,
    /// Closed exterior ring, `x` = longitude, `y` = latitude
    pub ring: LineString<f64>,
}

impl Building {
    /// Ring as `[lon, lat]` pairs
    pub fn coordinates(&self) -> Vec<[f64; 2]> {
        self.ring.coords().map(|c| [c.x, c.y]).collect()
    }

    pub fn is_closed(&self) -> bool {
        self.ring.is_closed()
    }

    /// The outline as a hole-free polygon
    pub fn to_polygon(&self) -> Polygon<f64> {
        Polygon::new(self.ring.clone(), Vec::new())
    }
}

/// Counters collected while extracting buildings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractionStats {
    /// Ways carrying the building key
    pub building_ways: usize,
    /// Buildings produced
    pub buildings: usize,
    /// Building ways dropped for resolving too few nodes
    pub degenerate_ways: usize,
    /// Node references on building ways that did not resolve
    pub unresolved_refs: usize,
}

/// Turns tagged ways into closed building rings
#[derive(Debug, Clone)]
pub struct BuildingExtractor {
    building_key: String,
    min_ring_nodes: usize,
    skip_policy: SkipPolicy,
}

impl Default for BuildingExtractor {
    fn default() -> Self {
        Self {
            building_key: DEFAULT_BUILDING_KEY.to_string(),
            min_ring_nodes: MIN_RING_NODES,
            skip_policy: SkipPolicy::Silent,
        }
    }
}

impl BuildingExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the building key, ring minimum and skip policy from `config`
    pub fn from_config(config: &ConvertConfig) -> Self {
        Self {
            building_key: config.building_key.clone(),
            min_ring_nodes: config.min_ring_nodes.max(MIN_RING_NODES),
            skip_policy: config.skip_policy,
        }
    }

    /// Extract buildings in source order
    pub fn extract(
        &self,
        elements: &[OsmElement],
        index: &NodeIndex,
    ) -> (Vec<Building>, ExtractionStats) {
        let mut stats = ExtractionStats::default();
        let mut buildings = Vec::new();

        for element in elements {
            let OsmElement::Way(way) = element else {
                continue;
            };
            if !way.has_tag(&self.building_key) {
                continue;
            }
            stats.building_ways += 1;

            if let Some(building) = self.resolve_way(way, index, &mut stats) {
                buildings.push(building);
            }
        }

        stats.buildings = buildings.len();
        if buildings.is_empty() {
            tracing::warn!("No buildings found! Check if your Overpass query is correct.");
        } else {
            tracing::info!("Total buildings found: {}", buildings.len());
        }

        (buildings, stats)
    }

    fn resolve_way(
        &self,
        way: &OsmWay,
        index: &NodeIndex,
        stats: &mut ExtractionStats,
    ) -> Option<Building> {
        let mut coords: Vec<Coord<f64>> = index.resolve(&way.nodes).collect();

        let unresolved = way.nodes.len() - coords.len();
        if unresolved > 0 {
            stats.unresolved_refs += unresolved;
            self.report(format_args!(
                "Way {} references {} node(s) missing from the export",
                way.id, unresolved
            ));
        }

        if coords.len() < self.min_ring_nodes {
            stats.degenerate_ways += 1;
            self.report(format_args!(
                "Dropping way {}: {} resolved node(s), need {}",
                way.id,
                coords.len(),
                self.min_ring_nodes
            ));
            return None;
        }

        // Always append, even when the way already repeats its first node
        let first = coords[0];
        coords.push(first);

        Some(Building {
            id: way.id,
            ring: LineString::new(coords),
        })
    }

    fn report(&self, message: std::fmt::Arguments<'_>) {
        match self.skip_policy {
            SkipPolicy::Silent => tracing::debug!("{}", message),
            SkipPolicy::Warn => tracing::warn!("{}", message),
        }
    }
}

/// Extract buildings with the default `building` key and three-node minimum
pub fn extract_buildings(elements: &[OsmElement], index: &NodeIndex) -> Vec<Building> {
    BuildingExtractor::default().extract(elements, index).0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{OsmNode, build_index};
    use std::collections::HashMap;

    fn node(id: OsmId, lon: f64, lat: f64) -> OsmElement {
        OsmElement::Node(OsmNode {
            id,
            coord: Coord { x: lon, y: lat },
        })
    }

    fn way(id: OsmId, nodes: &[OsmId], tags: &[(&str, &str)]) -> OsmElement {
        OsmElement::Way(OsmWay {
            id,
            nodes: nodes.to_vec(),
            tags: tags
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect::<HashMap<_, _>>(),
        })
    }

    fn square() -> Vec<OsmElement> {
        vec![
            node(1, 13.400, 52.500),
            node(2, 13.400, 52.501),
            node(3, 13.401, 52.501),
            node(4, 13.401, 52.500),
        ]
    }

    #[test]
    fn test_four_node_building() {
        let mut elements = square();
        elements.push(way(10, &[1, 2, 3, 4], &[("building", "yes")]));
        let index = build_index(&elements);

        let buildings = extract_buildings(&elements, &index);
        assert_eq!(buildings.len(), 1);

        let building = &buildings[0];
        assert_eq!(building.id, 10);
        assert_eq!(building.ring.0.len(), 5);
        assert!(building.is_closed());
        assert_eq!(building.coordinates()[0], [13.400, 52.500]);
        assert_eq!(building.coordinates()[4], [13.400, 52.500]);
    }

    #[test]
    fn test_two_node_building_is_dropped() {
        let mut elements = square();
        elements.push(way(10, &[1, 2], &[("building", "yes")]));
        let index = build_index(&elements);

        let (buildings, stats) = BuildingExtractor::new().extract(&elements, &index);
        assert!(buildings.is_empty());
        assert_eq!(stats.building_ways, 1);
        assert_eq!(stats.degenerate_ways, 1);
    }

    #[test]
    fn test_valid_and_degenerate_ways() {
        let mut elements = square();
        elements.push(way(10, &[1, 2, 3], &[("building", "house")]));
        elements.push(way(11, &[4], &[("building", "garage")]));
        let index = build_index(&elements);

        let buildings = extract_buildings(&elements, &index);
        assert_eq!(buildings.len(), 1);
        assert_eq!(buildings[0].id, 10);
        assert_eq!(buildings[0].ring.0.len(), 4);
    }

    #[test]
    fn test_unresolved_references_are_skipped() {
        let mut elements = square();
        elements.push(way(10, &[1, 404, 2, 3], &[("building", "yes")]));
        let index = build_index(&elements);

        let (buildings, stats) = BuildingExtractor::new().extract(&elements, &index);
        assert_eq!(buildings.len(), 1);
        assert_eq!(stats.unresolved_refs, 1);
        assert_eq!(
            buildings[0].coordinates(),
            vec![
                [13.400, 52.500],
                [13.400, 52.501],
                [13.401, 52.501],
                [13.400, 52.500],
            ]
        );
    }

    #[test]
    fn test_unresolved_references_below_minimum() {
        let mut elements = square();
        elements.push(way(10, &[1, 404, 2, 405], &[("building", "yes")]));
        let index = build_index(&elements);

        let (buildings, stats) = BuildingExtractor::new().extract(&elements, &index);
        assert!(buildings.is_empty());
        assert_eq!(stats.unresolved_refs, 2);
        assert_eq!(stats.degenerate_ways, 1);
    }

    #[test]
    fn test_only_building_ways_are_kept() {
        let mut elements = square();
        elements.push(way(10, &[1, 2, 3], &[("highway", "residential")]));
        elements.push(way(11, &[1, 2, 3], &[]));
        elements.push(way(12, &[2, 3, 4], &[("building", "")]));
        let index = build_index(&elements);

        let (buildings, stats) = BuildingExtractor::new().extract(&elements, &index);
        assert_eq!(stats.building_ways, 1);
        assert_eq!(buildings.len(), 1);
        assert_eq!(buildings[0].id, 12);
    }

    #[test]
    fn test_source_order_is_preserved() {
        let mut elements = vec![way(30, &[1, 2, 3], &[("building", "yes")])];
        elements.extend(square());
        elements.push(way(10, &[2, 3, 4], &[("building", "yes")]));
        elements.push(way(20, &[3, 4, 1], &[("building", "yes")]));
        let index = build_index(&elements);

        let ids: Vec<_> = extract_buildings(&elements, &index)
            .iter()
            .map(|b| b.id)
            .collect();
        assert_eq!(ids, vec![30, 10, 20]);
    }

    #[test]
    fn test_already_closed_way_gets_extra_point() {
        let mut elements = square();
        elements.push(way(10, &[1, 2, 3, 4, 1], &[("building", "yes")]));
        let index = build_index(&elements);

        let buildings = extract_buildings(&elements, &index);
        assert_eq!(buildings[0].ring.0.len(), 6);
        assert!(buildings[0].is_closed());
    }

    #[test]
    fn test_custom_key_and_minimum() {
        let mut elements = square();
        elements.push(way(10, &[1, 2, 3], &[("building:part", "yes")]));
        elements.push(way(11, &[1, 2, 3, 4], &[("building:part", "roof")]));
        elements.push(way(12, &[1, 2, 3, 4], &[("building", "yes")]));
        let index = build_index(&elements);

        let config = ConvertConfig::default()
            .with_building_key("building:part")
            .with_min_ring_nodes(4)
            .with_skip_policy(SkipPolicy::Warn);
        let (buildings, stats) = BuildingExtractor::from_config(&config).extract(&elements, &index);

        assert_eq!(stats.building_ways, 2);
        assert_eq!(stats.degenerate_ways, 1);
        assert_eq!(buildings.len(), 1);
        assert_eq!(buildings[0].id, 11);
    }

    #[test]
    fn test_to_polygon_has_no_interiors() {
        let mut elements = square();
        elements.push(way(10, &[1, 2, 3, 4], &[("building", "yes")]));
        let index = build_index(&elements);

        let polygon = extract_buildings(&elements, &index)[0].to_polygon();
        assert!(polygon.interiors().is_empty());
        assert_eq!(polygon.exterior().0.len(), 5);
    }
}
