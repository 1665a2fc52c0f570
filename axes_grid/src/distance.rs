//! Real-world distances along the axes.

use egui::{Pos2, pos2};

use crate::grid::Axes;
use crate::mercator::{ProjectionError, project, try_unproject};
use crate::position::{Pixels, Position, distance};
use crate::tiles::TileId;

/// How far labels are pushed away from the axis they annotate, in pixels.
pub const LABEL_OFFSET: f32 = 20.;

/// Unit in which distances are presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DistanceUnit {
    /// Kilometers with two decimal places.
    Kilometers,
    /// Whole meters.
    Meters,
}

impl DistanceUnit {
    /// Kilometers are used when zoomed out, i.e. at `km_threshold` and below.
    pub fn for_zoom(zoom: u8, km_threshold: u8) -> Self {
        if zoom <= km_threshold {
            Self::Kilometers
        } else {
            Self::Meters
        }
    }

    pub fn format(self, meters: f64) -> String {
        match self {
            Self::Kilometers => format!("{:.2}km", meters / 1000.),
            Self::Meters => format!("{}m", meters.round()),
        }
    }
}

/// Format a distance given in meters the way it is shown at the given `zoom`.
pub fn format_distance(meters: f64, zoom: u8, km_threshold: u8) -> String {
    DistanceUnit::for_zoom(zoom, km_threshold).format(meters)
}

/// How the unit of a distance label gets chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
pub enum DistanceFormat {
    /// Unit depends on the zoom level, see [`DistanceUnit::for_zoom`].
    #[default]
    ByZoom,

    /// Kilometers from 1000 meters up, meters below. Values are rounded to two decimal places
    /// and printed without trailing zeros, e.g. `1.5km` or `950m`.
    ByMagnitude,
}

impl DistanceFormat {
    pub fn format(self, meters: f64, zoom: u8, km_threshold: u8) -> String {
        match self {
            Self::ByZoom => format_distance(meters, zoom, km_threshold),
            Self::ByMagnitude => {
                let (value, unit) = if meters.abs() >= 1000. {
                    (meters / 1000., "km")
                } else {
                    (meters, "m")
                };
                format!("{}{unit}", (value * 100.).round() / 100.)
            }
        }
    }
}

/// Local scale of the tile, measured between its center and the middle of its eastern half.
pub fn meters_per_pixel(tile_id: TileId, tile_size: u32) -> Result<f64, ProjectionError> {
    let zoom = tile_id.zoom as f64;
    let half = tile_size as f64 / 2.;
    let center = tile_id.project(tile_size as f64) + Pixels::new(half, half);

    let center_position = try_unproject(center, zoom)?;
    let edge_position = try_unproject(center + Pixels::new(half, 0.), zoom)?;

    finite_scale(
        distance(center_position, edge_position) * 2. / tile_size as f64,
        center,
        zoom,
    )
}

/// Local scale around an arbitrary `position`, sampled over `sample` pixels eastwards.
pub fn scale_at(position: Position, zoom: f64, sample: f64) -> Result<f64, ProjectionError> {
    let projected = project(position, zoom);
    let start = try_unproject(projected, zoom)?;
    let end = try_unproject(projected + Pixels::new(sample, 0.), zoom)?;

    finite_scale(distance(start, end) / sample, projected, zoom)
}

fn finite_scale(scale: f64, at: Pixels, zoom: f64) -> Result<f64, ProjectionError> {
    if scale.is_finite() {
        Ok(scale)
    } else {
        Err(ProjectionError {
            x: at.x(),
            y: at.y(),
            zoom,
        })
    }
}

/// A piece of text anchored (centered) at a tile-local position.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub text: String,
    pub position: Pos2,
}

/// Labels for the axes crossing a tile. Every grid line crossing an axis gets a label with
/// its distance from the origin. Distances are measured from the exact origin, even when the
/// axes themselves are snapped to the grid.
pub fn axis_labels(
    axes: Axes,
    origin_offset: Pixels,
    grid_lines: &[f64],
    meters_per_pixel: f64,
    format: impl Fn(f64) -> String,
) -> Vec<Label> {
    let format = &format;
    let label = |pixels: f64, position: Pos2| Label {
        text: format(pixels.abs() * meters_per_pixel),
        position,
    };

    let along_x_axis = axes.horizontal.into_iter().flat_map(|y| {
        grid_lines
            .iter()
            .map(move |&x| label(x - origin_offset.x(), pos2(x as f32, y as f32 + LABEL_OFFSET)))
    });

    let along_y_axis = axes.vertical.into_iter().flat_map(|x| {
        grid_lines
            .iter()
            .map(move |&y| label(y - origin_offset.y(), pos2(x as f32 + LABEL_OFFSET, y as f32)))
    });

    along_x_axis.chain(along_y_axis).collect()
}
