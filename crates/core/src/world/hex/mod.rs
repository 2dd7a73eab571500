//! This module holds basic types related to the hexagon grid.
//!
//! ## Coordinate System
//!
//! Tiles are addressed with [axial coordinates](https://www.redblobgames.com/grids/hexagons/#coordinates-axial).
//! Each point has a column `q` and a row `r`, plus a derived third
//! component `s` such that `q + r + s = 0`. Keeping the third component
//! around makes distance math symmetric across all three axes.
//!
//! **In the vernacular of the page above, we use "pointy topped" tiles.**
//!
//! A map of `W` columns and `H` rows holds the tiles with `q` in `[0, W)` and
//! `r` in `[0, H)`. The map wraps horizontally: column `0` borders column
//! `W - 1`, so all column math (`q`, and `s` which is derived from it) is done
//! modulo `W`. Rows never wrap.
//!
//! ## World Space
//!
//! World space is a 3D cartesian space with `y` pointing up. Tiles lie on the
//! plane `y = 0`; `x` runs east and `z` runs north. See [geometry] for the
//! projections. Because of the horizontal wrap, every tile has two
//! placements in world space: its primary position, and a mirrored position
//! one map width to the west. Shortest displacements across the map seam are
//! found by comparing both.

mod coord;
pub mod distance;
pub mod geometry;

pub use self::coord::AxialPoint;
use fnv::FnvBuildHasher;
use indexmap::{IndexMap, IndexSet};
use std::collections::HashSet;
use strum::EnumIter;

/// A set of points
pub type TilePointSet = HashSet<AxialPoint, FnvBuildHasher>;
/// An ORDERED map of points to some `T`. This has some extra memory overhead,
/// so we should only use it when we actually need the ordering.
pub type TilePointIndexMap<T> = IndexMap<AxialPoint, T, FnvBuildHasher>;
/// An ORDERED set of points
pub type TilePointIndexSet = IndexSet<AxialPoint, FnvBuildHasher>;

/// A trait that denotes any type that has a singular assigned position in the
/// hex grid.
pub trait HasHexPosition {
    fn position(&self) -> AxialPoint;
}

/// The 6 directions in which tiles can line up side-to-side. Each entry
/// represents a line drawn from the center of a tile to the center of one of
/// its sides, i.e. the direction of one of its neighbors.
///
/// Three of the directions are **owned** (east, northeast, southeast): the
/// boundary in that direction is enumerated as belonging to this tile. The
/// other three are **shared**: they belong to the neighbor on the other side.
/// Walking only owned directions over the whole map visits every boundary
/// exactly once.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, EnumIter)]
pub enum HexDirection {
    East,
    NorthEast,
    SouthEast,
    West,
    SouthWest,
    NorthWest,
}

impl HexDirection {
    /// The directions whose boundary belongs to the tile itself
    pub const OWNED: [Self; 3] = [Self::East, Self::NorthEast, Self::SouthEast];
    /// Every direction, owned first
    pub const ALL: [Self; 6] = [
        Self::East,
        Self::NorthEast,
        Self::SouthEast,
        Self::West,
        Self::SouthWest,
        Self::NorthWest,
    ];

    /// Get the `(q, r)` offset that moves a point one tile in this direction
    pub fn offset(self) -> (i16, i16) {
        match self {
            Self::East => (1, 0),
            Self::NorthEast => (0, 1),
            Self::SouthEast => (1, -1),
            Self::West => (-1, 0),
            Self::SouthWest => (0, -1),
            Self::NorthWest => (-1, 1),
        }
    }

    /// The direction pointing the opposite way
    pub fn opposite(self) -> Self {
        match self {
            Self::East => Self::West,
            Self::NorthEast => Self::SouthWest,
            Self::SouthEast => Self::NorthWest,
            Self::West => Self::East,
            Self::SouthWest => Self::NorthEast,
            Self::NorthWest => Self::SouthEast,
        }
    }

    /// Does the boundary in this direction belong to the tile itself?
    pub fn is_owned(self) -> bool {
        Self::OWNED.contains(&self)
    }
}

/// Which of a tile's boundaries to visit. Querying a single tile usually wants
/// [EdgeScope::All]; scanning a whole map should use [EdgeScope::Owned] so
/// each boundary is only seen once.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EdgeScope {
    /// The three boundaries in [HexDirection::OWNED]
    Owned,
    /// All six boundaries
    All,
}

impl EdgeScope {
    /// The directions covered by this scope
    pub fn directions(self) -> &'static [HexDirection] {
        match self {
            Self::Owned => &HexDirection::OWNED,
            Self::All => &HexDirection::ALL,
        }
    }
}
