mod buildings;
mod geojson;
mod node_index;
mod osm_parser;

pub use buildings::*;
pub use geojson::*;
pub use node_index::*;
pub use osm_parser::*;
