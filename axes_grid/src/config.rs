use egui::Color32;

use crate::Position;
use crate::distance::DistanceFormat;

/// Visual and behavioural knobs of the axes grid. Any subset can be given by using the struct
/// update syntax, the rest falls back to [`Default`].
///
/// ```
/// # use axes_grid::AxesGridConfig;
/// let config = AxesGridConfig {
///     cells: 5,
///     snap_to_grid: true,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(::serde::Serialize, ::serde::Deserialize),
    serde(default)
)]
pub struct AxesGridConfig {
    /// Color of the thin lines partitioning each tile.
    pub grid_color: Color32,

    /// Width of the grid lines in pixels.
    pub grid_width: f32,

    /// Color of the two primary axes crossing at the origin.
    pub axes_color: Color32,

    /// Width of the primary axes in pixels.
    pub axes_width: f32,

    /// Color of the distance labels.
    pub text_color: Color32,

    /// Font size of the distance labels.
    pub font_size: f32,

    /// Number of grid cells along each side of a tile. Zero is treated as one.
    pub cells: u32,

    /// Distances are shown in kilometers at this zoom level and below, in meters above it.
    pub km_threshold: u8,

    /// Whether the axes get annotated with distances.
    pub show_labels: bool,

    /// Move the axes to the nearest grid line instead of the exact origin.
    pub snap_to_grid: bool,

    /// Size of a rendered tile in pixels.
    pub tile_size: u32,

    /// Fixed origin. If not given, the origin follows the center of the map.
    pub origin: Option<Position>,

    /// Width of a border drawn around each tile in the grid color. No border if not given.
    pub frame_width: Option<f32>,

    /// Put a `0,0` label where the axes cross. Shown only together with the distance labels.
    pub origin_marker: bool,

    /// How distance labels pick their unit.
    pub distance_format: DistanceFormat,
}

impl Default for AxesGridConfig {
    fn default() -> Self {
        Self {
            grid_color: Color32::from_rgb(0x99, 0x99, 0x99),
            grid_width: 1.,
            axes_color: Color32::from_rgb(0xff, 0x00, 0x00),
            axes_width: 2.,
            text_color: Color32::BLACK,
            font_size: 12.,
            cells: 4,
            km_threshold: 13,
            show_labels: true,
            snap_to_grid: false,
            tile_size: 256,
            origin: None,
            frame_width: None,
            origin_marker: false,
            distance_format: DistanceFormat::ByZoom,
        }
    }
}

impl AxesGridConfig {
    /// Look of the SVG flavour of the grid: five faint cells in a framed tile, thin orange
    /// axes, and no labels unless turned on. Labels switch units by magnitude and the axes
    /// crossing gets a `0,0` marker.
    pub fn svg_variant() -> Self {
        Self {
            grid_color: Color32::from_rgba_unmultiplied(0x40, 0x40, 0x40, 0x44),
            grid_width: 0.5,
            axes_color: Color32::from_rgb(0xff, 0x67, 0x54),
            axes_width: 0.8,
            text_color: Color32::from_rgb(0x40, 0x40, 0x40),
            font_size: 13.,
            cells: 5,
            show_labels: false,
            frame_width: Some(2.),
            origin_marker: true,
            distance_format: DistanceFormat::ByMagnitude,
            ..Default::default()
        }
    }

    pub fn with_grid_color(mut self, color: Color32) -> Self {
        self.grid_color = color;
        self
    }

    pub fn with_axes_color(mut self, color: Color32) -> Self {
        self.axes_color = color;
        self
    }

    pub fn with_text_color(mut self, color: Color32) -> Self {
        self.text_color = color;
        self
    }

    pub fn with_cells(mut self, cells: u32) -> Self {
        self.cells = cells;
        self
    }

    pub fn with_km_threshold(mut self, zoom: u8) -> Self {
        self.km_threshold = zoom;
        self
    }

    pub fn with_labels(mut self, show: bool) -> Self {
        self.show_labels = show;
        self
    }

    pub fn with_snap_to_grid(mut self, snap: bool) -> Self {
        self.snap_to_grid = snap;
        self
    }

    pub fn with_frame(mut self, width: f32) -> Self {
        self.frame_width = Some(width);
        self
    }

    pub fn with_origin_marker(mut self, show: bool) -> Self {
        self.origin_marker = show;
        self
    }

    pub fn with_distance_format(mut self, format: DistanceFormat) -> Self {
        self.distance_format = format;
        self
    }

    /// Pin the origin to the given position instead of following the map's center.
    pub fn with_origin(mut self, origin: Position) -> Self {
        self.origin = Some(origin);
        self
    }

    /// Number of cells, never zero.
    pub(crate) fn cell_count(&self) -> u32 {
        self.cells.max(1)
    }

    /// Edge length of a single grid cell in pixels.
    pub(crate) fn cell_size(&self) -> f64 {
        self.tile_size as f64 / self.cell_count() as f64
    }
}
