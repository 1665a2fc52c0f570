//! Types and functions for working with positions.

use egui::Vec2;
use geo::{Distance as _, HaversineMeasure};

/// Mean Earth radius in meters, the same one slippy map libraries measure distances with.
pub const EARTH_RADIUS: f64 = 6_371_000.;

/// Geographical position with latitude and longitude.
pub type Position = geo_types::Point;

/// Construct `Position` from latitude and longitude.
pub fn lat_lon(lat: f64, lon: f64) -> Position {
    Position::new(lon, lat)
}

/// Construct `Position` from longitude and latitude. Note that it is common standard to write
/// coordinates starting with the latitude instead (e.g. `51.104465719934176, 17.075169894118684` is
/// the [Wrocław's zoo](https://zoo.wroclaw.pl/en/)).
pub fn lon_lat(lon: f64, lat: f64) -> Position {
    Position::new(lon, lat)
}

/// Great-circle distance between two positions in meters, using the haversine formula.
pub fn distance(a: Position, b: Position) -> f64 {
    HaversineMeasure::new(EARTH_RADIUS).distance(a, b)
}

/// Location projected on the screen or an abstract bitmap.
pub type Pixels = geo_types::Point;

pub trait PixelsExt {
    fn to_vec2(&self) -> Vec2;
    fn from_vec2(_: Vec2) -> Self;
}

impl PixelsExt for Pixels {
    fn to_vec2(&self) -> Vec2 {
        Vec2::new(self.x() as f32, self.y() as f32)
    }

    fn from_vec2(vec2: Vec2) -> Self {
        Pixels::new(vec2.x as f64, vec2.y as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn lat_lon_and_lon_lat_agree() {
        assert_eq!(lat_lon(51.1, 17.0), lon_lat(17.0, 51.1));
        assert_relative_eq!(lat_lon(51.1, 17.0).y(), 51.1);
    }

    #[test]
    fn distance_to_itself_is_zero() {
        let zoo = lat_lon(51.104465719934176, 17.075169894118684);
        assert_relative_eq!(distance(zoo, zoo), 0.);
    }

    #[test]
    fn one_degree_along_the_equator() {
        // 2 * PI * R / 360
        assert_relative_eq!(
            distance(lon_lat(0., 0.), lon_lat(1., 0.)),
            111_194.93,
            max_relative = 1e-6
        );
    }

    #[test]
    fn distance_between_cities() {
        let wroclaw = lat_lon(51.1079, 17.0385);
        let warsaw = lat_lon(52.2297, 21.0122);

        // Roughly 300 km in straight line.
        let measured = distance(wroclaw, warsaw);
        assert!((295_000. ..305_000.).contains(&measured), "{measured}");
        assert_relative_eq!(measured, distance(warsaw, wroclaw));
    }

    #[test]
    fn pixels_to_vec2_and_back() {
        let pixels = Pixels::new(10., 20.5);
        assert_eq!(Pixels::from_vec2(pixels.to_vec2()), pixels);
    }
}
