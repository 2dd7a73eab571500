//! Boundaries between tiles, and the linear features (rivers) that run along
//! them.

use crate::world::hex::AxialPoint;
use derive_more::Display;
use fnv::FnvBuildHasher;
use std::collections::{HashMap, HashSet};

/// Identifies a river within the river table of the map that owns it. Only
/// meaningful for that map.
#[derive(Copy, Clone, Debug, Display, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[display(fmt = "river #{}", _0)]
pub struct RiverId(pub(crate) usize);

/// A set of river ids
pub type RiverSet = HashSet<RiverId, FnvBuildHasher>;

/// A river is a linear feature: it runs along tile boundaries rather than
/// occupying tiles.
#[derive(Clone, Debug, PartialEq)]
pub struct River {
    pub(crate) id: RiverId,
    pub(crate) name: String,
    pub(crate) edges: Vec<EdgeKey>,
}

impl River {
    pub fn id(&self) -> RiverId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of tile boundaries this river runs along
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

/// Unordered pair of tile positions, used to key the edge table. Both points
/// must already be wrapped into the map so that the same boundary always
/// produces the same key.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub(crate) struct EdgeKey(AxialPoint, AxialPoint);

impl EdgeKey {
    pub fn new(a: AxialPoint, b: AxialPoint) -> Self {
        if a <= b {
            Self(a, b)
        } else {
            Self(b, a)
        }
    }
}

/// A map of edge keys to some `T`
pub(crate) type EdgeKeyMap<T> = HashMap<EdgeKey, T, FnvBuildHasher>;

/// The boundary shared by two adjacent tiles
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Edge {
    tiles: (AxialPoint, AxialPoint),
    river: Option<RiverId>,
}

impl Edge {
    pub(crate) fn new(a: AxialPoint, b: AxialPoint) -> Self {
        Self {
            tiles: (a, b),
            river: None,
        }
    }

    /// The two tiles on either side of this edge
    pub fn tiles(&self) -> (AxialPoint, AxialPoint) {
        self.tiles
    }

    /// The river running along this edge, if any
    pub fn river(&self) -> Option<RiverId> {
        self.river
    }

    pub(crate) fn set_river(&mut self, river: RiverId) {
        self.river = Some(river);
    }
}

/// Anything that can resolve the boundary between two tiles. Implemented by
/// [HexMap](crate::HexMap), which owns the edge table.
pub trait EdgeLookup {
    /// Get the edge between two tiles. The order of the points doesn't
    /// matter. Returns `None` if the tiles aren't adjacent or either one isn't
    /// in the map.
    fn edge_between(&self, a: AxialPoint, b: AxialPoint) -> Option<&Edge>;
}
