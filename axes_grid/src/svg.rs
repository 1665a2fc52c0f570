//! Backend turning tiles into standalone SVG documents.

use egui::Color32;
use ::svg::Document;
use ::svg::node::element::{Line, Text};

use crate::render::{Primitive, TileDrawing};

/// `rgb()` notation of the color and its opacity, as SVG 1.1 viewers do not understand
/// the 8-digit hex notation.
fn paint(color: Color32) -> (String, f32) {
    let [r, g, b, a] = color.to_srgba_unmultiplied();
    (format!("rgb({r},{g},{b})"), a as f32 / 255.)
}

fn line(from: egui::Pos2, to: egui::Pos2, stroke: egui::Stroke) -> Line {
    let (color, opacity) = paint(stroke.color);
    Line::new()
        .set("x1", from.x)
        .set("y1", from.y)
        .set("x2", to.x)
        .set("y2", to.y)
        .set("stroke", color)
        .set("stroke-opacity", opacity)
        .set("stroke-width", stroke.width)
}

fn text(position: egui::Pos2, content: &str, font_size: f32, color: Color32) -> Text {
    let (color, opacity) = paint(color);
    Text::new(content)
        .set("x", position.x)
        .set("y", position.y)
        .set("fill", color)
        .set("fill-opacity", opacity)
        .set("font-size", font_size)
        .set("font-family", "sans-serif")
        .set("text-anchor", "middle")
        .set("dominant-baseline", "middle")
}

/// SVG document of the tile's size, containing everything drawn on it.
pub fn document(drawing: &TileDrawing) -> Document {
    let size = drawing.size;
    let document = Document::new()
        .set("width", size)
        .set("height", size)
        .set("viewBox", (0., 0., size, size));

    drawing
        .primitives
        .iter()
        .fold(document, |document, primitive| match primitive {
            Primitive::Line { from, to, stroke } => document.add(line(*from, *to, *stroke)),
            Primitive::Text {
                position,
                text: content,
                font_size,
                color,
            } => document.add(text(*position, content, *font_size, *color)),
        })
}
