use axes_grid::{
    AxesGridConfig, AxesGridLayer, DistanceFormat, MAX_ZOOM, MIN_ZOOM, MapMemory, Position,
    distance,
};
use egui::{Align2, Button, RichText, Slider, Ui, Window};

use crate::places;

/// Grid settings, which are applied to the layer once changed.
pub fn controls(ui: &Ui, show: &mut bool, config: &mut AxesGridConfig, map_memory: &MapMemory) {
    Window::new("Controls")
        .collapsible(false)
        .resizable(false)
        .title_bar(false)
        .anchor(Align2::RIGHT_TOP, [-10., 10.])
        .fixed_size([180., 150.])
        .show(ui.ctx(), |ui| {
            ui.checkbox(show, "Show axes grid");

            ui.collapsing("Grid", |ui| {
                ui.add(Slider::new(&mut config.cells, 1..=16).text("cells"));
                ui.add(Slider::new(&mut config.km_threshold, 0..=19).text("km up to zoom"));
                ui.checkbox(&mut config.show_labels, "Distance labels");
                ui.checkbox(&mut config.snap_to_grid, "Snap axes to grid");
                ui.checkbox(&mut config.origin_marker, "Mark the origin");

                let mut framed = config.frame_width.is_some();
                if ui.checkbox(&mut framed, "Frame tiles").changed() {
                    config.frame_width = framed.then_some(2.);
                }

                ui.horizontal(|ui| {
                    ui.radio_value(&mut config.distance_format, DistanceFormat::ByZoom, "by zoom");
                    ui.radio_value(
                        &mut config.distance_format,
                        DistanceFormat::ByMagnitude,
                        "by magnitude",
                    );
                });

                if ui.button("SVG look").clicked() {
                    *config = AxesGridConfig {
                        show_labels: true,
                        origin: config.origin,
                        ..AxesGridConfig::svg_variant()
                    };
                }
            });

            ui.collapsing("Colors", |ui| {
                ui.horizontal(|ui| {
                    ui.color_edit_button_srgba(&mut config.axes_color);
                    ui.label("axes");
                });
                ui.horizontal(|ui| {
                    ui.color_edit_button_srgba(&mut config.grid_color);
                    ui.label("grid");
                });
                ui.horizontal(|ui| {
                    ui.color_edit_button_srgba(&mut config.text_color);
                    ui.label("labels");
                });
            });

            ui.collapsing("Origin", |ui| match config.origin {
                Some(origin) => {
                    ui.label(format!("pinned at {:.04} {:.04}", origin.x(), origin.y()));
                    if ui.button("follow the map").clicked() {
                        config.origin = None;
                    }
                }
                None => {
                    ui.label("following the map");
                    if ui.button("pin here").clicked() {
                        config.origin = Some(map_memory.center());
                    }
                    if ui.button("pin at the train station").clicked() {
                        config.origin = Some(places::wroclaw_glowny());
                    }
                    if ui.button("pin at null island").clicked() {
                        config.origin = Some(places::null_island());
                    }
                }
            });
        });
}

/// Simple GUI to zoom in and out.
pub fn zoom(ui: &Ui, map_memory: &mut MapMemory) {
    Window::new("Map")
        .collapsible(false)
        .resizable(false)
        .title_bar(false)
        .anchor(Align2::LEFT_BOTTOM, [10., -10.])
        .show(ui.ctx(), |ui| {
            ui.horizontal(|ui| {
                let zoom = map_memory.zoom();

                let zoom_in = Button::new(RichText::new("➕").heading());
                if ui.add_enabled(zoom < MAX_ZOOM, zoom_in).clicked() {
                    map_memory.zoom_in();
                }

                let zoom_out = Button::new(RichText::new("➖").heading());
                if ui.add_enabled(zoom > MIN_ZOOM, zoom_out).clicked() {
                    map_memory.zoom_out();
                }
            });
        });
}

/// Scale at the grid's origin, where it is, and how far the mouse pointer is from it.
pub fn scale(
    ui: &Ui,
    grid: &AxesGridLayer,
    map_memory: &MapMemory,
    pointer: Option<Position>,
) {
    let Some(origin) = grid.origin() else {
        return;
    };

    Window::new("Scale")
        .collapsible(false)
        .resizable(false)
        .title_bar(false)
        .anchor(Align2::LEFT_TOP, [10., 10.])
        .show(ui.ctx(), |ui| {
            ui.label(format!("origin at {:.04} {:.04}", origin.x(), origin.y()));

            let zoom = map_memory.tile_zoom();
            let config = grid.config();
            let describe =
                |meters: f64| config.distance_format.format(meters, zoom, config.km_threshold);

            match grid.scale(zoom as f64) {
                Some(meters_per_pixel) => {
                    let cell =
                        meters_per_pixel * config.tile_size as f64 / config.cells.max(1) as f64;
                    ui.label(format!("one cell is {}", describe(cell)));
                }
                None => {
                    ui.label("scale cannot be measured here");
                }
            }

            if let Some(pointer) = pointer {
                ui.label(format!(
                    "pointer at {:.04} {:.04}, {} from the origin",
                    pointer.x(),
                    pointer.y(),
                    describe(distance(origin, pointer))
                ));
            }
        });
}
