//! Few common places, used in the example app.

use axes_grid::{Position, lon_lat};

/// Main train station of the city of Wrocław.
/// https://en.wikipedia.org/wiki/Wroc%C5%82aw_G%C5%82%C3%B3wny_railway_station
pub fn wroclaw_glowny() -> Position {
    lon_lat(17.03664, 51.09916)
}

/// Where the equator crosses the prime meridian. The distortion of the Web Mercator
/// projection is the smallest here.
pub fn null_island() -> Position {
    lon_lat(0., 0.)
}
