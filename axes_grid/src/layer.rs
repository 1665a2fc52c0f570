use std::num::NonZeroUsize;

use lru::LruCache;

use crate::config::AxesGridConfig;
use crate::distance::scale_at;
use crate::memory::MapMemory;
use crate::render::{TileDrawing, TileRenderer};
use crate::tiles::TileId;
use crate::Position;

/// A layer made of independently rendered tiles. The map attaches and detaches layers, keeps
/// them informed about its movement and asks for tiles which are currently visible.
pub trait TileLayer {
    /// Called when the layer is added to the map.
    fn on_add(&mut self, memory: &MapMemory);

    /// Called when the layer is removed from the map.
    fn on_remove(&mut self);

    /// Called whenever the map's center or zoom changed.
    fn on_move(&mut self, memory: &MapMemory);

    fn is_attached(&self) -> bool;

    /// Size of the tiles this layer renders, in pixels.
    fn tile_size(&self) -> u32;

    /// Drawing of the given tile, or `None` if there is nothing to draw.
    fn tile(&mut self, tile_id: TileId) -> Option<&TileDrawing>;
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum State {
    Detached,
    Attached { origin: Position },
}

/// [`TileLayer`] drawing a grid, the primary axes crossing at the origin, and distances along
/// them.
pub struct AxesGridLayer {
    renderer: TileRenderer,
    state: State,
    tiles: LruCache<TileId, TileDrawing>,
    redraws: usize,
}

/// Create the axes grid layer. Use [`TileLayer::on_add`] (or pass it to the [`crate::Map`]) to
/// get it drawn.
pub fn axes_grid(config: AxesGridConfig) -> AxesGridLayer {
    AxesGridLayer::new(config)
}

impl AxesGridLayer {
    pub fn new(config: AxesGridConfig) -> Self {
        // Just arbitrary value which seemed right.
        #[allow(clippy::unwrap_used)]
        let cache_size = NonZeroUsize::new(256).unwrap();

        Self {
            renderer: TileRenderer::new(config),
            state: State::Detached,
            tiles: LruCache::new(cache_size),
            redraws: 0,
        }
    }

    pub fn config(&self) -> &AxesGridConfig {
        self.renderer.config()
    }

    /// Replace the configuration. Takes effect immediately, including the origin.
    pub fn set_config(&mut self, config: AxesGridConfig) {
        if let (State::Attached { origin }, Some(fixed)) = (&mut self.state, config.origin) {
            *origin = fixed;
        }
        self.renderer = TileRenderer::new(config);
        self.redraw();
    }

    /// Current origin, if attached to a map.
    pub fn origin(&self) -> Option<Position> {
        match self.state {
            State::Detached => None,
            State::Attached { origin } => Some(origin),
        }
    }

    /// Pin the origin to the given position. It will not follow the map anymore.
    pub fn set_origin(&mut self, position: Position) {
        let mut config = self.config().clone();
        config.origin = Some(position);
        self.set_config(config);
    }

    /// Let the origin follow the center of the map, starting with the next move.
    pub fn follow_map_center(&mut self) {
        let mut config = self.config().clone();
        config.origin = None;
        self.set_config(config);
    }

    /// Drop all rendered tiles, so that they get drawn anew.
    pub fn redraw(&mut self) {
        log::debug!("Redrawing the axes grid.");
        self.tiles.clear();
        self.redraws += 1;
    }

    /// How many times the layer was redrawn.
    pub fn redraws(&self) -> usize {
        self.redraws
    }

    #[cfg(test)]
    pub(crate) fn is_cached(&self, tile_id: TileId) -> bool {
        self.tiles.contains(&tile_id)
    }

    /// Meters per pixel at the origin at the given zoom, if attached and measurable.
    pub fn scale(&self, zoom: f64) -> Option<f64> {
        let origin = self.origin()?;
        let sample = self.config().tile_size as f64 / 2.;

        scale_at(origin, zoom, sample)
            .inspect_err(|err| log::warn!("Cannot measure the scale: {err}"))
            .ok()
    }
}

impl TileLayer for AxesGridLayer {
    fn on_add(&mut self, memory: &MapMemory) {
        let origin = self.config().origin.unwrap_or(memory.center());
        log::debug!("Axes grid attached with origin at {origin:?}.");
        self.state = State::Attached { origin };
        self.redraw();
    }

    fn on_remove(&mut self) {
        log::debug!("Axes grid detached.");
        self.state = State::Detached;
        self.tiles.clear();
    }

    fn on_move(&mut self, memory: &MapMemory) {
        let follows_map = self.config().origin.is_none();
        if let State::Attached { origin } = &mut self.state
            && follows_map
        {
            *origin = memory.center();
            self.redraw();
        }
    }

    fn is_attached(&self) -> bool {
        matches!(self.state, State::Attached { .. })
    }

    fn tile_size(&self) -> u32 {
        self.config().tile_size
    }

    fn tile(&mut self, tile_id: TileId) -> Option<&TileDrawing> {
        let State::Attached { origin } = self.state else {
            return None;
        };

        Some(
            self.tiles
                .get_or_insert(tile_id, || self.renderer.draw(tile_id, origin)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lon_lat;

    fn tile_id() -> TileId {
        TileId {
            x: 1,
            y: 1,
            zoom: 1,
        }
    }

    #[test]
    fn detached_layer_draws_nothing() {
        let mut layer = axes_grid(AxesGridConfig::default());
        assert!(!layer.is_attached());
        assert!(layer.tile(tile_id()).is_none());
        assert_eq!(layer.origin(), None);
    }

    #[test]
    fn origin_starts_at_map_center() {
        let mut layer = axes_grid(AxesGridConfig::default());
        layer.on_add(&MapMemory::new(lon_lat(17., 51.)));

        assert!(layer.is_attached());
        assert_eq!(layer.origin(), Some(lon_lat(17., 51.)));
        assert!(layer.tile(tile_id()).is_some());
    }

    #[test]
    fn configured_origin_wins_over_map_center() {
        let mut layer = axes_grid(AxesGridConfig::default().with_origin(lon_lat(1., 2.)));
        let mut memory = MapMemory::new(lon_lat(17., 51.));
        layer.on_add(&memory);
        assert_eq!(layer.origin(), Some(lon_lat(1., 2.)));

        // Fixed origin does not follow the map.
        let redraws = layer.redraws();
        memory.center_at(lon_lat(18., 52.));
        layer.on_move(&memory);
        assert_eq!(layer.origin(), Some(lon_lat(1., 2.)));
        assert_eq!(layer.redraws(), redraws);
    }

    #[test]
    fn origin_follows_the_map() {
        let mut layer = axes_grid(AxesGridConfig::default());
        let mut memory = MapMemory::new(lon_lat(17., 51.));
        layer.on_add(&memory);

        let redraws = layer.redraws();
        memory.center_at(lon_lat(18., 52.));
        layer.on_move(&memory);

        assert_eq!(layer.origin(), Some(lon_lat(18., 52.)));
        assert_eq!(layer.redraws(), redraws + 1);
    }

    #[test]
    fn no_redraws_after_detaching() {
        let mut layer = axes_grid(AxesGridConfig::default());
        let mut memory = MapMemory::new(lon_lat(17., 51.));
        layer.on_add(&memory);
        layer.on_remove();

        let redraws = layer.redraws();
        memory.center_at(lon_lat(18., 52.));
        layer.on_move(&memory);

        assert_eq!(layer.redraws(), redraws);
        assert_eq!(layer.origin(), None);
        assert!(layer.tile(tile_id()).is_none());
    }

    #[test]
    fn tiles_are_cached_until_redraw() {
        let mut layer = axes_grid(AxesGridConfig::default());
        layer.on_add(&MapMemory::new(lon_lat(0., 0.)));

        let first = layer.tile(tile_id()).cloned();
        assert!(layer.is_cached(tile_id()));
        assert_eq!(layer.tile(tile_id()).cloned(), first);
        assert_eq!(layer.tiles.len(), 1);

        layer.redraw();
        assert!(!layer.is_cached(tile_id()));
    }

    #[test]
    fn setting_origin_pins_it_and_redraws() {
        let mut layer = axes_grid(AxesGridConfig::default());
        let mut memory = MapMemory::new(lon_lat(17., 51.));
        layer.on_add(&memory);

        let redraws = layer.redraws();
        layer.set_origin(lon_lat(0., 0.));
        assert_eq!(layer.origin(), Some(lon_lat(0., 0.)));
        assert_eq!(layer.redraws(), redraws + 1);

        memory.center_at(lon_lat(18., 52.));
        layer.on_move(&memory);
        assert_eq!(layer.origin(), Some(lon_lat(0., 0.)));

        // ...until asked to follow the map again.
        layer.follow_map_center();
        layer.on_move(&memory);
        assert_eq!(layer.origin(), Some(lon_lat(18., 52.)));
    }

    #[test]
    fn scale_needs_an_origin() {
        let mut layer = axes_grid(AxesGridConfig::default());
        assert_eq!(layer.scale(0.), None);

        layer.on_add(&MapMemory::new(lon_lat(0., 0.)));
        let scale = layer.scale(0.).unwrap();
        approx::assert_relative_eq!(scale, 156_368., max_relative = 1e-4);
    }
}
