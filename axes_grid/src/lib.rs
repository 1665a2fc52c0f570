#![doc = include_str!("../README.md")]
#![deny(clippy::unwrap_used, rustdoc::broken_intra_doc_links)]

mod config;
pub mod distance;
pub mod grid;
mod layer;
mod map;
mod memory;
pub mod mercator;
pub mod painter;
mod position;
mod projector;
mod render;
pub mod svg;
mod tiles;

pub use config::AxesGridConfig;
pub use distance::{DistanceFormat, DistanceUnit, format_distance};
pub use layer::{AxesGridLayer, TileLayer, axes_grid};
pub use map::Map;
pub use memory::{InvalidZoom, MAX_ZOOM, MIN_ZOOM, MapMemory};
pub use mercator::ProjectionError;
pub use position::{Position, distance, lat_lon, lon_lat};
pub use projector::Projector;
pub use render::{Primitive, TileDrawing, TileRenderer};
pub use tiles::{TileId, visible_tiles};
