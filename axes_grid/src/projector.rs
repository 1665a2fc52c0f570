use egui::{Rect, Vec2};

use crate::{
    MapMemory, Position,
    mercator::{project, unproject},
    position::{Pixels, PixelsExt as _},
};

/// Projects geographical position into pixels on the viewport, suitable for [`egui::Painter`].
#[derive(Clone)]
pub struct Projector {
    clip_rect: Rect,
    memory: MapMemory,
}

impl Projector {
    pub fn new(clip_rect: Rect, map_memory: &MapMemory) -> Self {
        Self {
            clip_rect,
            memory: map_memory.to_owned(),
        }
    }

    fn zoom(&self) -> f64 {
        self.memory.tile_zoom() as f64
    }

    /// Project `position` into pixels on the viewport.
    pub fn project(&self, position: Position) -> Vec2 {
        // Turn that into a flat, mercator projection.
        let projected_position = project(position, self.zoom());

        // We also need to know where the map center is.
        let map_center_projected_position = project(self.memory.center(), self.zoom());

        // From the two points above we can calculate the actual point on the screen.
        self.clip_rect.center().to_vec2()
            + (projected_position - map_center_projected_position).to_vec2()
    }

    /// Get coordinates from viewport's pixels position
    pub fn unproject(&self, position: Vec2) -> Position {
        // Despite being in pixel space `map_center_projected_position` is sufficiently large
        // that we must do the arithmetic in f64 to avoid imprecision.
        let map_center_projected_position = project(self.memory.center(), self.zoom());
        let clip_center = self.clip_rect.center();
        let x = map_center_projected_position.x() + (position.x as f64) - (clip_center.x as f64);
        let y = map_center_projected_position.y() + (position.y as f64) - (clip_center.y as f64);

        unproject(Pixels::new(x, y), self.zoom())
    }
}
