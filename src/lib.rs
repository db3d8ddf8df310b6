//! Convert Overpass JSON exports of OpenStreetMap buildings into GeoJSON.
//!
//! Buildings arrive as ways referencing nodes. The converter indexes the nodes,
//! keeps the ways tagged as buildings, resolves each way into a closed polygon
//! ring and writes the result as a `FeatureCollection`.

pub mod config;
pub mod convert;
pub mod error;
pub mod generator;
pub mod provider;

pub use config::*;
pub use convert::*;
pub use error::*;
pub use generator::*;
pub use provider::*;
