use egui::{Response, Sense, Ui, Widget};

use crate::layer::TileLayer;
use crate::memory::MapMemory;
use crate::painter::paint;
use crate::tiles::visible_tiles;

/// The map widget. Instances are to be created on each frame, as all necessary state is stored
/// in [`MapMemory`] and the layers themselves.
///
/// # Examples
///
/// ```
/// # use axes_grid::{Map, MapMemory, TileLayer};
///
/// fn update(ui: &mut egui::Ui, layer: &mut dyn TileLayer, map_memory: &mut MapMemory) {
///     ui.add(Map::new(map_memory).with_layer(layer));
/// }
/// ```
pub struct Map<'a, 'l> {
    memory: &'a mut MapMemory,
    layers: Vec<&'l mut dyn TileLayer>,
}

impl<'a, 'l> Map<'a, 'l> {
    pub fn new(memory: &'a mut MapMemory) -> Self {
        Self {
            memory,
            layers: Vec::default(),
        }
    }

    /// Add a layer to the drawing pipeline. Layers are painted in the order they were added,
    /// but only while they are attached.
    pub fn with_layer(mut self, layer: &'l mut dyn TileLayer) -> Self {
        self.layers.push(layer);
        self
    }

    /// Handle zoom and drag inputs, and recalculate everything accordingly.
    fn zoom_and_drag(&mut self, ui: &mut Ui, response: &Response) {
        let zoom_delta = ui.input(|input| input.zoom_delta());

        // Zooming and dragging need to be exclusive, otherwise the map will get dragged when
        // pinch gesture is used.
        if !(0.99..=1.01).contains(&zoom_delta) && ui.ui_contains_pointer() {
            // Keep the location under the mouse pointer fixed on the screen.
            let offset = response.hover_pos().map(|p| p - response.rect.center());

            if let Some(offset) = offset {
                self.memory.pan_by(-offset);
            }

            // Shift by 1 because of the values given by zoom_delta(). Multiple by 2, because
            // then it felt right with both mouse wheel, and an Android phone.
            self.memory.zoom_by((zoom_delta as f64 - 1.) * 2.);

            if let Some(offset) = offset {
                self.memory.pan_by(offset);
            }
        } else if response.dragged_by(egui::PointerButton::Primary) {
            self.memory.pan_by(response.drag_delta());
        }
    }
}

/// Let attached layers know that the map moved, if it actually did.
fn notify_moved(layers: &mut [&mut dyn TileLayer], before: &MapMemory, after: &MapMemory) {
    if before == after {
        return;
    }

    for layer in layers.iter_mut().filter(|layer| layer.is_attached()) {
        layer.on_move(after);
    }
}

fn paint_layer(layer: &mut dyn TileLayer, painter: &egui::Painter, memory: &MapMemory) {
    let tiles = visible_tiles(
        painter.clip_rect(),
        memory.center(),
        memory.tile_zoom(),
        layer.tile_size(),
    );

    for (tile_id, tile_rect) in tiles {
        if let Some(drawing) = layer.tile(tile_id) {
            paint(drawing, painter, tile_rect);
        }
    }
}

impl Widget for Map<'_, '_> {
    fn ui(mut self, ui: &mut Ui) -> Response {
        let (rect, response) = ui.allocate_exact_size(ui.available_size(), Sense::drag());

        let before = self.memory.clone();
        self.zoom_and_drag(ui, &response);
        notify_moved(&mut self.layers, &before, self.memory);

        let painter = ui.painter().with_clip_rect(rect);
        for layer in self.layers.iter_mut().filter(|layer| layer.is_attached()) {
            paint_layer(&mut **layer, &painter, self.memory);
        }

        response
    }
}
