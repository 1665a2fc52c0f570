//! Project the lat/lon coordinates into a 2D x/y using the Web Mercator.
//! <https://en.wikipedia.org/wiki/Web_Mercator_projection>
//! <https://wiki.openstreetmap.org/wiki/Slippy_map_tilenames>

use crate::position::{Pixels, Position, lon_lat};
use std::f64::consts::PI;

/// Size of a single tile of the "world bitmap" at zoom 0. Pixel coordinates are always
/// expressed in this scale, regardless of the size of tiles a layer renders.
pub const WORLD_TILE_SIZE: u32 = 256;

/// Pixels which do not describe any place in the world: non-finite ones, ones above or below the
/// world bitmap, or any at zoom levels so large that the bitmap overflows.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq)]
#[error("cannot project ({x}, {y}) at zoom {zoom}")]
pub struct ProjectionError {
    pub x: f64,
    pub y: f64,
    pub zoom: f64,
}

/// Zoom specifies how many pixels are in the whole map. For example, zoom 0 means that the whole
/// map is just one 256x256 tile, zoom 1 means that it is 2x2 tiles, and so on.
pub fn total_pixels(zoom: f64) -> f64 {
    2f64.powf(zoom) * (WORLD_TILE_SIZE as f64)
}

/// Project the position into the Mercator projection and normalize it to 0-1 range.
fn mercator_normalized(position: Position) -> (f64, f64) {
    // Project into Mercator (cylindrical map projection).
    let x = position.x().to_radians();
    let y = position.y().to_radians().tan().asinh();

    // Scale both x and y to 0-1 range.
    let x = (1. + (x / PI)) / 2.;
    let y = (1. - (y / PI)) / 2.;

    (x, y)
}

/// Project geographical position into a 2D plane using Mercator.
pub fn project(position: Position, zoom: f64) -> Pixels {
    let total_pixels = total_pixels(zoom);
    let (x, y) = mercator_normalized(position);
    Pixels::new(x * total_pixels, y * total_pixels)
}

/// Transforms pixels of the world bitmap back into a geographical position.
pub fn unproject(pixels: Pixels, zoom: f64) -> Position {
    let number_of_pixels = total_pixels(zoom);

    let lon = pixels.x();
    let lon = lon / number_of_pixels;
    let lon = (lon * 2. - 1.) * PI;
    let lon = lon.to_degrees();

    let lat = pixels.y();
    let lat = lat / number_of_pixels;
    let lat = (-lat * 2. + 1.) * PI;
    let lat = lat.sinh().atan().to_degrees();

    lon_lat(lon, lat)
}

/// Same as [`unproject`], but refuses pixels which have no geographical counterpart. Longitude
/// is allowed to wrap around, latitude is not.
pub fn try_unproject(pixels: Pixels, zoom: f64) -> Result<Position, ProjectionError> {
    let error = ProjectionError {
        x: pixels.x(),
        y: pixels.y(),
        zoom,
    };

    let total_pixels = total_pixels(zoom);
    if !total_pixels.is_normal() || !(0. ..=total_pixels).contains(&pixels.y()) {
        return Err(error);
    }

    let position = unproject(pixels, zoom);
    if position.x().is_finite() && position.y().is_finite() {
        Ok(position)
    } else {
        Err(error)
    }
}
