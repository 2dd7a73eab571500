//! A hexagonal world grid for turn-based strategy games. The grid wraps
//! horizontally (the first column borders the last one) but not vertically.
//! This crate provides the coordinate system, the distance and adjacency math
//! that respects the wrap, the tiles and the boundaries between them, and the
//! traits that a path search needs in order to run over the grid. It doesn't
//! search for paths or render anything itself.
//!
//! ```
//! use hexmap::{AxialPoint, HexMap, MapConfig};
//!
//! let map = HexMap::new(MapConfig {
//!     columns: 10,
//!     rows: 5,
//!     ..Default::default()
//! })
//! .unwrap();
//! let west = map.tile(AxialPoint::new(0, 2)).unwrap();
//! let east = map.tile(AxialPoint::new(9, 2)).unwrap();
//! assert_eq!(west.distance_to(east), 1);
//! ```
//!
//! See [MapConfig] for details on how a map can be customized, and [path] for
//! the path search contract.

mod config;
pub mod path;
mod unit;
mod util;
mod world;

pub use crate::{
    config::{MapConfig, RiverConfig, Seed},
    path::{PathTile, PathUnit},
    unit::{Unit, UnitId, UnitKind},
    world::{
        hex::{
            self,
            distance::{cost_estimate, grid_distance, world_distance},
            geometry, AxialPoint, EdgeScope, HasHexPosition, HexDirection,
            TilePointIndexMap, TilePointIndexSet, TilePointSet,
        },
        Biome, BiomeKind, Building, City, Edge, EdgeLookup, Feature,
        FeatureKind, HexMap, HexTile, Neighbors, People, Relief, ReliefKind,
        Resource, River, RiverId, RiverSet, TileRef, Yields,
    },
};
