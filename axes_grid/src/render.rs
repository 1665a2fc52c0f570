//! Medium-independent drawing of a single tile.

use egui::{Color32, Pos2, Stroke, pos2};

use crate::config::AxesGridConfig;
use crate::distance::{axis_labels, meters_per_pixel};
use crate::grid::{Axes, grid_lines, origin_offset};
use crate::position::Position;
use crate::tiles::TileId;

/// A single thing to draw, in tile-local pixel coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Line {
        from: Pos2,
        to: Pos2,
        stroke: Stroke,
    },
    Text {
        /// Center of the text.
        position: Pos2,
        text: String,
        font_size: f32,
        color: Color32,
    },
}

/// Everything drawn on a tile, in painting order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TileDrawing {
    pub size: f32,
    pub primitives: Vec<Primitive>,
}

impl TileDrawing {
    pub fn lines(&self) -> impl Iterator<Item = (Pos2, Pos2, Stroke)> + '_ {
        self.primitives.iter().filter_map(|primitive| match primitive {
            Primitive::Line { from, to, stroke } => Some((*from, *to, *stroke)),
            Primitive::Text { .. } => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = (Pos2, &str)> + '_ {
        self.primitives.iter().filter_map(|primitive| match primitive {
            Primitive::Text { position, text, .. } => Some((*position, text.as_str())),
            Primitive::Line { .. } => None,
        })
    }

    fn line(&mut self, from: Pos2, to: Pos2, stroke: Stroke) {
        self.primitives.push(Primitive::Line { from, to, stroke });
    }

    fn text(&mut self, position: Pos2, text: String, config: &AxesGridConfig) {
        self.primitives.push(Primitive::Text {
            position,
            text,
            font_size: config.font_size,
            color: config.text_color,
        });
    }
}

/// Draws grid, axes and distance labels of tiles according to its configuration.
#[derive(Debug, Clone, Default)]
pub struct TileRenderer {
    config: AxesGridConfig,
}

impl TileRenderer {
    pub fn new(config: AxesGridConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AxesGridConfig {
        &self.config
    }

    /// Draw the tile with axes crossing at `origin`.
    pub fn draw(&self, tile_id: TileId, origin: Position) -> TileDrawing {
        let config = &self.config;
        let size = config.tile_size as f64;
        let mut drawing = TileDrawing {
            size: size as f32,
            primitives: Vec::new(),
        };

        if let Some(width) = config.frame_width {
            let stroke = Stroke::new(width, config.grid_color);
            let end = size as f32;
            drawing.line(pos2(0., 0.), pos2(end, 0.), stroke);
            drawing.line(pos2(end, 0.), pos2(end, end), stroke);
            drawing.line(pos2(end, end), pos2(0., end), stroke);
            drawing.line(pos2(0., end), pos2(0., 0.), stroke);
        }

        let lines = grid_lines(size, config.cell_count());
        let grid_stroke = Stroke::new(config.grid_width, config.grid_color);
        for &offset in &lines {
            let offset = offset as f32;
            drawing.line(pos2(offset, 0.), pos2(offset, size as f32), grid_stroke);
            drawing.line(pos2(0., offset), pos2(size as f32, offset), grid_stroke);
        }

        let offset = origin_offset(origin, tile_id, config.tile_size);
        let snap_to = config.snap_to_grid.then(|| config.cell_size());
        let axes = Axes::locate(offset, size, snap_to);

        let axes_stroke = Stroke::new(config.axes_width, config.axes_color);
        if let Some(y) = axes.horizontal {
            drawing.line(pos2(0., y as f32), pos2(size as f32, y as f32), axes_stroke);
        }
        if let Some(x) = axes.vertical {
            drawing.line(pos2(x as f32, 0.), pos2(x as f32, size as f32), axes_stroke);
        }

        if config.show_labels && !axes.is_empty() {
            match meters_per_pixel(tile_id, config.tile_size) {
                Ok(scale) => {
                    let format = |meters: f64| {
                        config
                            .distance_format
                            .format(meters, tile_id.zoom, config.km_threshold)
                    };
                    for label in axis_labels(axes, offset, &lines, scale, format) {
                        drawing.text(label.position, label.text, config);
                    }
                }
                Err(err) => {
                    log::warn!("Skipping distance labels of {tile_id:?}: {err}");
                }
            }

            if config.origin_marker
                && let (Some(x), Some(y)) = (axes.vertical, axes.horizontal)
            {
                drawing.text(pos2(x as f32, y as f32), "0,0".to_owned(), config);
            }
        }

        log::trace!(
            "Rendered {tile_id:?} with {} primitives.",
            drawing.primitives.len()
        );
        drawing
    }
}
