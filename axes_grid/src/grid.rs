//! Tile-local geometry: grid partitioning and location of the origin's axes.

use crate::mercator::project;
use crate::position::{Pixels, Position};
use crate::tiles::TileId;

/// Offsets of the lines partitioning a tile into `cells` × `cells` equal cells, including both
/// tile edges. The same offsets serve for the vertical and horizontal lines.
pub fn grid_lines(tile_size: f64, cells: u32) -> Vec<f64> {
    let cells = cells.max(1);
    let cell_size = tile_size / cells as f64;
    (0..=cells).map(|i| i as f64 * cell_size).collect()
}

/// Pixel offset of the `origin` relative to the top-left corner of the tile.
pub fn origin_offset(origin: Position, tile_id: TileId, tile_size: u32) -> Pixels {
    project(origin, tile_id.zoom as f64) - tile_id.project(tile_size as f64)
}

/// Move `offset` to the nearest grid line.
pub fn snap(offset: f64, cell_size: f64) -> f64 {
    (offset / cell_size).round() * cell_size
}

/// Tile-local positions of the primary axes, if they cross the tile.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Axes {
    /// Vertical offset of the horizontal axis (the x-axis).
    pub horizontal: Option<f64>,

    /// Horizontal offset of the vertical axis (the y-axis).
    pub vertical: Option<f64>,
}

impl Axes {
    /// Locate the axes given the origin's offset relative to the tile. When `snap_to` is given,
    /// the axes are snapped to the grid of that cell size before checking whether they land
    /// within `[0, tile_size]`.
    pub fn locate(origin_offset: Pixels, tile_size: f64, snap_to: Option<f64>) -> Self {
        let place = |offset: f64| {
            let offset = snap_to.map_or(offset, |cell_size| snap(offset, cell_size));
            (0. ..=tile_size).contains(&offset).then_some(offset)
        };

        Self {
            horizontal: place(origin_offset.y()),
            vertical: place(origin_offset.x()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.horizontal.is_none() && self.vertical.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lon_lat;
    use approx::assert_relative_eq;

    #[test]
    fn grid_has_equal_cells() {
        for cells in 1..=10 {
            let lines = grid_lines(256., cells);
            assert_eq!(lines.len(), cells as usize + 1);
            assert_relative_eq!(lines[0], 0.);
            assert_relative_eq!(lines[cells as usize], 256., max_relative = 1e-12);

            let expected = 256. / cells as f64;
            for pair in lines.windows(2) {
                assert_relative_eq!(pair[1] - pair[0], expected, max_relative = 1e-12);
            }
        }
    }

    #[test]
    fn grid_with_no_cells_is_a_single_cell() {
        assert_eq!(grid_lines(256., 0), vec![0., 256.]);
    }

    #[test]
    fn origin_offset_of_null_island() {
        // At zoom 1, null island lies at the corner shared by all four tiles.
        let tile_id = TileId {
            x: 0,
            y: 0,
            zoom: 1,
        };
        let offset = origin_offset(lon_lat(0., 0.), tile_id, 256);
        assert_relative_eq!(offset.x(), 256.);
        assert_relative_eq!(offset.y(), 256.);

        let tile_id = TileId {
            x: 1,
            y: 1,
            zoom: 1,
        };
        let offset = origin_offset(lon_lat(0., 0.), tile_id, 256);
        assert_relative_eq!(offset.x(), 0.);
        assert_relative_eq!(offset.y(), 0.);
    }

    #[test]
    fn no_axes_when_origin_is_far() {
        let axes = Axes::locate(Pixels::new(-10., 300.), 256., None);
        assert!(axes.is_empty());

        let axes = Axes::locate(Pixels::new(256.5, -0.5), 256., None);
        assert!(axes.is_empty());
    }

    #[test]
    fn axes_at_exact_offset() {
        let axes = Axes::locate(Pixels::new(100.3, 17.9), 256., None);
        assert_eq!(axes.vertical, Some(100.3));
        assert_eq!(axes.horizontal, Some(17.9));
    }

    #[test]
    fn only_one_axis_crossing_the_tile() {
        let axes = Axes::locate(Pixels::new(-1000., 42.), 256., None);
        assert_eq!(axes.vertical, None);
        assert_eq!(axes.horizontal, Some(42.));
    }

    #[test]
    fn range_is_inclusive() {
        let axes = Axes::locate(Pixels::new(0., 256.), 256., None);
        assert_eq!(axes.vertical, Some(0.));
        assert_eq!(axes.horizontal, Some(256.));
    }

    #[test]
    fn snapped_axes() {
        let axes = Axes::locate(Pixels::new(100.3, 17.9), 256., Some(64.));
        assert_eq!(axes.vertical, Some(128.));
        assert_eq!(axes.horizontal, Some(0.));
    }

    #[test]
    fn snapping_can_bring_axis_into_the_tile() {
        // Slightly outside, but the nearest grid line is the tile's edge.
        let axes = Axes::locate(Pixels::new(-20., 270.), 256., Some(64.));
        assert_eq!(axes.vertical, Some(0.));
        assert_eq!(axes.horizontal, Some(256.));
    }
}
