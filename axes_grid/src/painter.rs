//! Backend drawing tiles with [`egui::Painter`].

use egui::{Align2, FontId, Painter, Pos2, Rect, Stroke};

use crate::render::{Primitive, TileDrawing};

/// Maps tile-local pixels onto the tile's rectangle on the screen.
#[derive(Debug, Clone, Copy)]
pub struct TileTransform {
    origin: Pos2,
    scale: f32,
}

impl TileTransform {
    pub fn new(tile_rect: Rect, tile_size: f32) -> Self {
        Self {
            origin: tile_rect.min,
            scale: tile_rect.width() / tile_size,
        }
    }

    pub fn apply(&self, local: Pos2) -> Pos2 {
        self.origin + local.to_vec2() * self.scale
    }
}

/// Paint `drawing` into `tile_rect`. Anything sticking out of the tile is clipped, as each tile
/// is an independent canvas.
pub fn paint(drawing: &TileDrawing, painter: &Painter, tile_rect: Rect) {
    let painter = painter.with_clip_rect(tile_rect);
    let transform = TileTransform::new(tile_rect, drawing.size);

    for primitive in &drawing.primitives {
        match primitive {
            Primitive::Line { from, to, stroke } => {
                painter.line_segment(
                    [transform.apply(*from), transform.apply(*to)],
                    Stroke::new(stroke.width * transform.scale, stroke.color),
                );
            }
            Primitive::Text {
                position,
                text,
                font_size,
                color,
            } => {
                painter.text(
                    transform.apply(*position),
                    Align2::CENTER_CENTER,
                    text,
                    FontId::proportional(*font_size),
                    *color,
                );
            }
        }
    }
}
