use std::collections::HashMap;
use std::collections::hash_map::Entry;

use egui::{Rect, Vec2};

use crate::mercator::{project, total_pixels};
use crate::position::{Pixels, PixelsExt as _, Position};

/// Identifies the tile in the tile grid.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
pub struct TileId {
    /// X number of the tile.
    pub x: u32,

    /// Y number of the tile.
    pub y: u32,

    /// Zoom level, where 0 means no zoom.
    /// See: <https://wiki.openstreetmap.org/wiki/Zoom_levels>
    pub zoom: u8,
}

/// Number of tiles along one side of the world, for tiles of `tile_size` pixels.
pub fn total_tiles(zoom: u8, tile_size: u32) -> u32 {
    let tiles = (total_pixels(zoom as f64) / tile_size.max(1) as f64).ceil();
    (tiles as u32).max(1)
}

impl TileId {
    /// Tile position (in pixels) on the "World bitmap".
    pub fn project(&self, tile_size: f64) -> Pixels {
        Pixels::new(self.x as f64 * tile_size, self.y as f64 * tile_size)
    }

    pub fn east(&self, tile_size: u32) -> Option<TileId> {
        (self.x < total_tiles(self.zoom, tile_size) - 1).then_some(TileId {
            x: self.x + 1,
            y: self.y,
            zoom: self.zoom,
        })
    }

    pub fn west(&self) -> Option<TileId> {
        Some(TileId {
            x: self.x.checked_sub(1)?,
            y: self.y,
            zoom: self.zoom,
        })
    }

    pub fn north(&self) -> Option<TileId> {
        Some(TileId {
            x: self.x,
            y: self.y.checked_sub(1)?,
            zoom: self.zoom,
        })
    }

    pub fn south(&self, tile_size: u32) -> Option<TileId> {
        (self.y < total_tiles(self.zoom, tile_size) - 1).then_some(TileId {
            x: self.x,
            y: self.y + 1,
            zoom: self.zoom,
        })
    }
}

/// Calculate the tile containing the given position.
pub fn tile_id(position: Position, zoom: u8, tile_size: u32) -> TileId {
    let projected = project(position, zoom as f64);
    let last = total_tiles(zoom, tile_size) - 1;
    let index = |pixels: f64| ((pixels / tile_size.max(1) as f64).floor().max(0.) as u32).min(last);

    TileId {
        x: index(projected.x()),
        y: index(projected.y()),
        zoom,
    }
}

pub(crate) fn rect(screen_position: Vec2, tile_size: f64) -> Rect {
    Rect::from_min_size(screen_position.to_pos2(), Vec2::splat(tile_size as f32))
}

/// Tiles intersecting the `viewport`, together with their rectangles on the screen. Tile size
/// of zero is treated as one.
pub fn visible_tiles(
    viewport: Rect,
    map_center: Position,
    zoom: u8,
    tile_size: u32,
) -> Vec<(TileId, Rect)> {
    let tile_size = tile_size.max(1);
    let mut tiles = HashMap::new();
    flood_fill_tiles(
        viewport,
        tile_id(map_center, zoom, tile_size),
        project(map_center, zoom as f64),
        tile_size,
        &mut tiles,
    );

    let mut tiles: Vec<_> = tiles
        .into_iter()
        .filter_map(|(tile_id, rect)| Some((tile_id, rect?)))
        .collect();
    tiles.sort_by_key(|(tile_id, _)| (tile_id.y, tile_id.x));
    tiles
}

/// Use simple [flood fill algorithm](https://en.wikipedia.org/wiki/Flood_fill) to find tiles
/// covering the viewport. Pending tiles are kept on a heap-allocated stack, as small tiles make
/// for a lot of them.
fn flood_fill_tiles(
    viewport: Rect,
    start: TileId,
    map_center_projected_position: Pixels,
    tile_size: u32,
    tiles: &mut HashMap<TileId, Option<Rect>>,
) {
    let mut pending = vec![start];

    while let Some(tile_id) = pending.pop() {
        let Entry::Vacant(entry) = tiles.entry(tile_id) else {
            continue;
        };

        let tile_projected = tile_id.project(tile_size as f64);
        let tile_screen_position = viewport.center().to_vec2()
            + (tile_projected - map_center_projected_position).to_vec2();
        let tile_rect = rect(tile_screen_position, tile_size as f64);

        if !viewport.intersects(tile_rect) {
            // Still mark the spot, so that the filling algorithm does not come back here.
            entry.insert(None);
            continue;
        }

        entry.insert(Some(tile_rect));

        pending.extend(
            [
                tile_id.north(),
                tile_id.east(tile_size),
                tile_id.south(tile_size),
                tile_id.west(),
            ]
            .into_iter()
            .flatten(),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lon_lat;
    use egui::{Pos2, pos2};

    #[test]
    fn tile_containing_position() {
        let citadel = lon_lat(21.00027, 52.26470);

        assert_eq!(
            TileId {
                x: 585455,
                y: 345104,
                zoom: 20
            },
            tile_id(citadel, 20, 256)
        );

        // Larger tiles cover more of the world, so there are fewer of them.
        assert_eq!(
            TileId {
                x: 292727,
                y: 172552,
                zoom: 20
            },
            tile_id(citadel, 20, 512)
        );
    }

    #[test]
    fn projected_tile_is_its_number_multiplied_by_size() {
        let tile_id = TileId {
            x: 3,
            y: 5,
            zoom: 4,
        };
        assert_eq!(Pixels::new(768., 1280.), tile_id.project(256.));
    }

    #[test]
    fn tile_id_cannot_go_beyond_limits() {
        // There is only one tile at zoom 0.
        let tile_id = TileId {
            x: 0,
            y: 0,
            zoom: 0,
        };

        assert_eq!(tile_id.west(), None);
        assert_eq!(tile_id.north(), None);
        assert_eq!(tile_id.south(256), None);
        assert_eq!(tile_id.east(256), None);

        // There are 2 tiles at zoom 1.
        let tile_id = TileId {
            x: 0,
            y: 0,
            zoom: 1,
        };

        assert_eq!(tile_id.west(), None);
        assert_eq!(tile_id.north(), None);
        assert_eq!(
            tile_id.south(256),
            Some(TileId {
                x: 0,
                y: 1,
                zoom: 1
            })
        );
        assert_eq!(
            tile_id.east(256),
            Some(TileId {
                x: 1,
                y: 0,
                zoom: 1
            })
        );

        // ...but only one, if tiles are twice as big.
        assert_eq!(tile_id.east(512), None);
    }

    #[test]
    fn whole_world_at_zoom_zero() {
        let viewport = Rect::from_min_size(Pos2::ZERO, Vec2::splat(1000.));
        let tiles = visible_tiles(viewport, lon_lat(0., 0.), 0, 256);

        assert_eq!(tiles.len(), 1);
        assert_eq!(
            tiles[0].1,
            Rect::from_min_size(pos2(372., 372.), Vec2::splat(256.))
        );
    }

    #[test]
    fn viewport_aligned_with_tiles() {
        // Center of the map exactly at the corner of four tiles at zoom 2. Viewport is a bit
        // smaller than two tiles, so that the neighbours are not touched.
        let viewport = Rect::from_min_size(Pos2::ZERO, Vec2::splat(500.));
        let tiles = visible_tiles(viewport, lon_lat(0., 0.), 2, 256);

        let ids: Vec<_> = tiles.iter().map(|(id, _)| (id.x, id.y)).collect();
        assert_eq!(ids, vec![(1, 1), (2, 1), (1, 2), (2, 2)]);
    }

    #[test]
    fn small_tiles_covering_full_hd_screen() {
        let viewport = Rect::from_min_size(Pos2::ZERO, Vec2::new(1920., 1080.));
        let tiles = visible_tiles(viewport, lon_lat(17., 51.), 16, 16);

        // 120 by 67.5 tiles fit the screen, plus partially visible or touching ones at the edges.
        assert!((120 * 68..=122 * 70).contains(&tiles.len()), "{}", tiles.len());
        assert!(tiles.iter().all(|(_, rect)| viewport.intersects(*rect)));
        assert!(tiles.iter().any(|(id, _)| *id == tile_id(lon_lat(17., 51.), 16, 16)));
    }

    #[test]
    fn zero_tile_size_is_treated_as_one() {
        let viewport = Rect::from_min_size(Pos2::ZERO, Vec2::splat(100.));
        let tiles = visible_tiles(viewport, lon_lat(0., 0.), 0, 0);

        assert!((100 * 100..=102 * 102).contains(&tiles.len()), "{}", tiles.len());
        assert!(tiles.iter().all(|(_, rect)| rect.size() == Vec2::splat(1.)));
    }
}
