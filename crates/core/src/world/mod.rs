mod edge;
pub mod hex;
mod terrain;
mod tile;

pub use self::{
    edge::{Edge, EdgeLookup, River, RiverId, RiverSet},
    terrain::{
        Biome, BiomeKind, Building, City, Feature, FeatureKind, People, Relief,
        ReliefKind, Resource, Yields,
    },
    tile::{HexTile, Neighbors, TileRef},
};
use crate::{
    timed, unwrap,
    world::{
        edge::{EdgeKey, EdgeKeyMap},
        hex::{AxialPoint, EdgeScope, TilePointIndexMap, TilePointIndexSet},
    },
    MapConfig,
};
use anyhow::{anyhow, bail, Context};
use log::{debug, info};
use rand::Rng;
use std::collections::hash_map::Entry;
use validator::Validate;

/// A hex grid that wraps horizontally. The map owns every tile, the table of
/// edges between adjacent tiles, and the rivers that run along those edges.
///
/// Tiles are stored row-major, for `q` in `[0, columns)` and `r` in
/// `[0, rows)`. Every lookup wraps `q` into that range first, so any point
/// that's on the map modulo the column count can be used to address a tile.
///
/// ```
/// use hexmap::{AxialPoint, HexMap, MapConfig};
///
/// let map = HexMap::new(MapConfig {
///     columns: 10,
///     rows: 5,
///     ..Default::default()
/// })
/// .unwrap();
/// let tile = map.tile(AxialPoint::new(0, 2)).unwrap();
/// assert_eq!(tile.neighbors().count(), 6);
/// ```
#[derive(Debug)]
pub struct HexMap {
    /// The config used to create this map. It can't change after creation.
    config: MapConfig,
    tiles: TilePointIndexMap<HexTile>,
    edges: EdgeKeyMap<Edge>,
    /// Indexed by [RiverId]
    rivers: Vec<River>,
}

impl HexMap {
    /// Create a new map from the given config. Every tile and every edge is
    /// created up front, then the configured rivers are laid down. Returns an
    /// error if the config is invalid, or if it defines a river along
    /// boundaries that don't exist.
    pub fn new(config: MapConfig) -> anyhow::Result<Self> {
        info!("Creating map with config {:#?}", config);
        config.validate().context("invalid config")?;

        let mut rng = config.seed.rng();
        let columns = config.columns as i16;
        let rows = config.rows as i16;
        let tiles: TilePointIndexMap<HexTile> = timed!("Tile creation", {
            (0..rows)
                .flat_map(|r| (0..columns).map(move |q| AxialPoint::new(q, r)))
                .map(|pos| (pos, HexTile::new(pos, rng.gen_range(0..360))))
                .collect()
        });

        let mut map = Self {
            config,
            tiles,
            edges: EdgeKeyMap::default(),
            rivers: Vec::new(),
        };
        map.edges = timed!("Edge creation", map.create_edges());

        for river in map.config.rivers.clone() {
            map.add_river(&river.name, &river.edges).with_context(|| {
                format!("invalid config for river {:?}", river.name)
            })?;
        }

        info!(
            "Created map with {} tiles, {} edges and {} rivers",
            map.tiles.len(),
            map.edges.len(),
            map.rivers.len()
        );
        Ok(map)
    }

    /// Create one edge per pair of adjacent tiles. Walking the owned
    /// directions of every tile hits each boundary once, except on maps
    /// narrow enough that a tile's eastern and western neighbor are the same
    /// tile.
    fn create_edges(&self) -> EdgeKeyMap<Edge> {
        let mut edges = EdgeKeyMap::default();
        for &position in self.tiles.keys() {
            for direction in EdgeScope::Owned.directions() {
                let other = match self.wrap(position.adjacent(*direction)) {
                    Some(other) if other != position => other,
                    _ => continue,
                };
                edges
                    .entry(EdgeKey::new(position, other))
                    .or_insert_with(|| Edge::new(position, other));
            }
        }
        edges
    }

    /// Get the config that defines this map
    pub fn config(&self) -> &MapConfig {
        &self.config
    }

    /// Number of columns, which is also the period of the horizontal wrap
    pub fn column_count(&self) -> u16 {
        self.config.columns
    }

    pub fn row_count(&self) -> u16 {
        self.config.rows
    }

    /// Total number of tiles, always `columns * rows`
    pub fn tile_count(&self) -> usize {
        self.tiles.len()
    }

    /// Map a point onto the tile that it addresses, by wrapping its column
    /// into `[0, columns)`. Returns `None` if the point's row is off the map,
    /// since rows don't wrap.
    pub fn wrap(&self, point: AxialPoint) -> Option<AxialPoint> {
        self.wrap_wide(i32::from(point.q()), i32::from(point.r()))
    }

    /// [Self::wrap] on unbounded components, for offsets that may not fit
    /// in an [AxialPoint] until they're wrapped
    fn wrap_wide(&self, q: i32, r: i32) -> Option<AxialPoint> {
        if r < 0 || r >= i32::from(self.config.rows) {
            return None;
        }
        let q = q.rem_euclid(i32::from(self.config.columns));
        // Both are in range of the map dimensions now, which are u16s
        // validated to fit in i16
        Some(AxialPoint::new(q as i16, r as i16))
    }

    /// Get the tile addressed by a point. The point's column is wrapped
    /// first, see [Self::wrap].
    pub fn tile(&self, point: AxialPoint) -> Option<TileRef<'_>> {
        let position = self.wrap(point)?;
        self.tiles
            .get(&position)
            .map(|tile| TileRef::new(self, tile))
    }

    /// Get mutable access to a tile's payload. The tile's position and its
    /// place in the map's topology can't be changed through this.
    pub fn tile_mut(&mut self, point: AxialPoint) -> Option<&mut HexTile> {
        let position = self.wrap(point)?;
        self.tiles.get_mut(&position)
    }

    /// Get a tile that must exist. Panics if it doesn't, which means the
    /// caller has a bug.
    pub(crate) fn expect_tile(&self, point: AxialPoint) -> TileRef<'_> {
        unwrap!(self.tile(point), "no tile at {}", point)
    }

    /// Every tile in the map, row by row
    pub fn tiles(&self) -> impl Iterator<Item = TileRef<'_>> {
        self.tiles.values().map(move |tile| TileRef::new(self, tile))
    }

    /// Every tile within `radius` steps of `center`, including the center
    /// itself. Steps across the map seam count, steps off the top or bottom
    /// of the map don't. Each tile appears once, even if the range is wide
    /// enough to wrap all the way around. The order is deterministic.
    pub fn tiles_within_range(
        &self,
        center: AxialPoint,
        radius: u16,
    ) -> Vec<TileRef<'_>> {
        let center_q = i32::from(center.q());
        let center_r = i32::from(center.r());
        let rows = i32::from(self.config.rows);
        // Past this, a bigger radius can't reach any more tiles
        let reach = i32::from(self.config.columns) + rows + center_r.abs();
        let radius = i32::from(radius).min(reach);

        let mut positions = TilePointIndexSet::default();
        for dq in -radius..=radius {
            // Only rows on the map
            let dr_min = (-radius).max(-dq - radius).max(-center_r);
            let dr_max = radius.min(-dq + radius).min(rows - 1 - center_r);
            for dr in dr_min..=dr_max {
                if let Some(position) =
                    self.wrap_wide(center_q + dq, center_r + dr)
                {
                    positions.insert(position);
                }
            }
        }
        positions
            .into_iter()
            .map(|position| self.expect_tile(position))
            .collect()
    }

    /// Lay a river down along a series of tile boundaries. Each boundary is
    /// given as the two tiles on either side of it, in either order. Returns
    /// an error, without changing anything, if any pair isn't adjacent or
    /// already has a river on it.
    pub fn add_river(
        &mut self,
        name: &str,
        edges: &[[AxialPoint; 2]],
    ) -> anyhow::Result<RiverId> {
        let mut keys = Vec::with_capacity(edges.len());
        for &[a, b] in edges {
            let key = self.edge_key(a, b).ok_or_else(|| {
                anyhow!("no boundary between {} and {}", a, b)
            })?;
            let edge = &self.edges[&key];
            if let Some(river) = edge.river() {
                bail!("boundary between {} and {} already has {}", a, b, river);
            }
            if keys.contains(&key) {
                bail!("boundary between {} and {} is listed twice", a, b);
            }
            keys.push(key);
        }

        let id = RiverId(self.rivers.len());
        for key in &keys {
            // Every key was checked above
            if let Entry::Occupied(mut entry) = self.edges.entry(*key) {
                entry.get_mut().set_river(id);
            }
        }
        debug!("Added {} ({:?}) along {} boundaries", id, name, keys.len());
        self.rivers.push(River {
            id,
            name: name.into(),
            edges: keys,
        });
        Ok(id)
    }

    /// Get a river by its id. Returns `None` for ids from a different map.
    pub fn river(&self, id: RiverId) -> Option<&River> {
        self.rivers.get(id.0)
    }

    /// Every river on the map, in the order they were added
    pub fn rivers(&self) -> &[River] {
        &self.rivers
    }

    /// Every edge on the map, in no particular order
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.values()
    }

    /// Key for the edge between two points, if there is one. Both points are
    /// wrapped into the map first.
    fn edge_key(&self, a: AxialPoint, b: AxialPoint) -> Option<EdgeKey> {
        let a = self.wrap(a)?;
        let b = self.wrap(b)?;
        if a == b {
            return None;
        }
        let key = EdgeKey::new(a, b);
        if self.edges.contains_key(&key) {
            Some(key)
        } else {
            None
        }
    }
}

impl EdgeLookup for HexMap {
    fn edge_between(&self, a: AxialPoint, b: AxialPoint) -> Option<&Edge> {
        self.edge_key(a, b).map(|key| &self.edges[&key])
    }
}
