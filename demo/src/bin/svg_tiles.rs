//! Renders the axes grid around Wrocław's main train station into SVG files, one per tile.
//!
//! Output directory is taken from the first argument or `AXES_GRID_OUT`, zoom level from
//! `AXES_GRID_ZOOM`.

use std::path::PathBuf;

use axes_grid::{AxesGridConfig, MapMemory, TileLayer, axes_grid, visible_tiles};
use demo::places;
use egui::{Rect, pos2, vec2};

const DEFAULT_ZOOM: f64 = 14.;

fn main() -> std::io::Result<()> {
    env_logger::init();

    let output = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("AXES_GRID_OUT").ok())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("tiles"));

    let zoom = match std::env::var("AXES_GRID_ZOOM") {
        Ok(zoom) => zoom.parse::<f64>().unwrap_or_else(|err| {
            log::warn!("Ignoring AXES_GRID_ZOOM={zoom}: {err}");
            DEFAULT_ZOOM
        }),
        Err(_) => DEFAULT_ZOOM,
    };

    let mut memory = MapMemory::new(places::wroclaw_glowny());
    if let Err(err) = memory.set_zoom(zoom) {
        log::warn!("Zoom {zoom} cannot be used ({err}), staying at {}.", memory.zoom());
    }

    let mut layer = axes_grid(
        AxesGridConfig::svg_variant()
            .with_labels(true)
            .with_snap_to_grid(true),
    );
    layer.on_add(&memory);

    std::fs::create_dir_all(&output)?;

    // Viewport of 3 by 3 tiles, centered at the train station.
    let tile_size = layer.tile_size() as f32;
    let viewport = Rect::from_min_size(pos2(0., 0.), vec2(3. * tile_size, 3. * tile_size));

    for (tile_id, _) in visible_tiles(
        viewport,
        memory.center(),
        memory.tile_zoom(),
        layer.tile_size(),
    ) {
        let Some(drawing) = layer.tile(tile_id) else {
            continue;
        };

        let path = output.join(format!("{}_{}_{}.svg", tile_id.zoom, tile_id.x, tile_id.y));
        svg::save(&path, &axes_grid::svg::document(drawing))?;
        log::info!("Saved {}.", path.display());
    }

    Ok(())
}
