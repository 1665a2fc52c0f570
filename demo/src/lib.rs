pub mod places;
mod windows;

use axes_grid::{
    AxesGridConfig, AxesGridLayer, Map, MapMemory, Projector, TileLayer, axes_grid,
};
use egui::{Context, Stroke};

pub struct MyApp {
    map_memory: MapMemory,
    grid: AxesGridLayer,
    config: AxesGridConfig,
}

impl MyApp {
    pub fn new(_egui_ctx: Context) -> Self {
        let map_memory = MapMemory::new(places::wroclaw_glowny());
        let config = AxesGridConfig::default();

        let mut grid = axes_grid(config.clone());
        grid.on_add(&map_memory);

        Self {
            map_memory,
            grid,
            config,
        }
    }

    /// Attach or detach the grid, so that it matches the checkbox.
    fn show_grid(&mut self, show: bool) {
        match (show, self.grid.is_attached()) {
            (true, false) => self.grid.on_add(&self.map_memory),
            (false, true) => self.grid.on_remove(),
            _ => {}
        }
    }

    /// Apply changes made in the controls window.
    fn update_config(&mut self) {
        if &self.config != self.grid.config() {
            log::info!("Grid configuration changed to {:?}.", self.config);
            self.grid.set_config(self.config.clone());
        }
    }
}

impl eframe::App for MyApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let rimless = egui::Frame {
            fill: ctx.style().visuals.panel_fill,
            ..Default::default()
        };

        egui::CentralPanel::default()
            .frame(rimless)
            .show(ctx, |ui| {
                // In egui, widgets are constructed and consumed in each frame.
                let response = ui.add(Map::new(&mut self.map_memory).with_layer(&mut self.grid));
                let projector = Projector::new(response.rect, &self.map_memory);

                // Mark the origin, as the axes might be snapped away from it.
                if let Some(origin) = self.grid.origin() {
                    ui.painter().with_clip_rect(response.rect).circle_stroke(
                        projector.project(origin).to_pos2(),
                        6.,
                        Stroke::new(2., self.config.axes_color),
                    );
                }

                let pointer = response
                    .hover_pos()
                    .map(|pos| projector.unproject(pos.to_vec2()));

                // Draw utility windows.
                {
                    use windows::*;

                    zoom(ui, &mut self.map_memory);
                    scale(ui, &self.grid, &self.map_memory, pointer);

                    let mut show = self.grid.is_attached();
                    controls(ui, &mut show, &mut self.config, &self.map_memory);
                    self.show_grid(show);
                    self.update_config();
                }
            });
    }
}
