use egui::Vec2;

use crate::mercator::{project, unproject};
use crate::position::{Pixels, PixelsExt as _};
use crate::{Position, lon_lat};

/// Latitude beyond which Web Mercator does not go.
const MAX_LATITUDE: f64 = 85.051_128_78;

/// Zoom levels the map can be at. Mapnik supports zooms up to 19.
/// <https://wiki.openstreetmap.org/wiki/Slippy_map_tilenames#Zoom_levels>
pub const MIN_ZOOM: f64 = 0.;
pub const MAX_ZOOM: f64 = 19.;

const DEFAULT_ZOOM: f64 = 16.;

/// Zoom which is not a number at all. Numbers outside of [`MIN_ZOOM`]..=[`MAX_ZOOM`] are not
/// errors, they get clamped.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
#[error("zoom level must be a finite number")]
pub struct InvalidZoom;

/// State of the map widget which must persist between frames.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
pub struct MapMemory {
    center: Position,
    zoom: f64,
}

impl Default for MapMemory {
    fn default() -> Self {
        Self::new(lon_lat(0., 0.))
    }
}

impl MapMemory {
    pub fn new(center: Position) -> Self {
        Self {
            center: clamp_latitude(center),
            zoom: DEFAULT_ZOOM,
        }
    }

    /// Position at the map's center.
    pub fn center(&self) -> Position {
        self.center
    }

    /// Center exactly at the given position.
    pub fn center_at(&mut self, position: Position) {
        self.center = clamp_latitude(position);
    }

    /// Zoom in by one level. Returns `false` if the map was already at [`MAX_ZOOM`].
    pub fn zoom_in(&mut self) -> bool {
        self.zoom_by(1.)
    }

    /// Zoom out by one level. Returns `false` if the map was already at [`MIN_ZOOM`].
    pub fn zoom_out(&mut self) -> bool {
        self.zoom_by(-1.)
    }

    /// Set exact zoom level, clamped to the supported range.
    pub fn set_zoom(&mut self, zoom: f64) -> Result<(), InvalidZoom> {
        if !zoom.is_finite() {
            return Err(InvalidZoom);
        }
        self.zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
        Ok(())
    }

    /// Zoom using a relative value, stopping at the limits. Returns whether the zoom changed.
    pub(crate) fn zoom_by(&mut self, delta: f64) -> bool {
        if !delta.is_finite() {
            return false;
        }

        let zoom = (self.zoom + delta).clamp(MIN_ZOOM, MAX_ZOOM);
        let changed = zoom != self.zoom;
        self.zoom = zoom;
        changed
    }

    /// Returns the current zoom level
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Integer zoom level at which tiles are rendered.
    pub fn tile_zoom(&self) -> u8 {
        self.zoom.round() as u8
    }

    /// Drag the map's content by `offset` pixels, which moves the center the opposite way.
    pub fn pan_by(&mut self, offset: Vec2) {
        let zoom = self.tile_zoom() as f64;
        let center = project(self.center, zoom) - Pixels::from_vec2(offset);
        self.center = clamp_latitude(unproject(center, zoom));
    }
}

fn clamp_latitude(position: Position) -> Position {
    lon_lat(
        position.x(),
        position.y().clamp(-MAX_LATITUDE, MAX_LATITUDE),
    )
}
