//! Game rule data that tiles carry around. The grid doesn't interpret most of
//! this, it just combines the values into costs, yields and descriptions.

use crate::world::hex::{AxialPoint, TilePointSet};
use derive_more::{Add, AddAssign, Sub, SubAssign};
use strum::Display;

/// The shape of the land on a tile
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    Display,
    PartialEq,
    Eq,
    Hash,
)]
pub enum ReliefKind {
    Water,
    #[default]
    Flat,
    Hill,
    Mountain,
}

/// Land shape plus the movement penalty it carries
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Relief {
    pub kind: ReliefKind,
    /// Extra cost to move onto a tile with this relief, on top of the base
    /// cost of 1. Never negative.
    pub movement_cost: f64,
}

impl Relief {
    pub fn new(kind: ReliefKind, movement_cost: f64) -> Self {
        Self {
            kind,
            movement_cost,
        }
    }

    pub fn is_water(&self) -> bool {
        self.kind == ReliefKind::Water
    }
}

/// Climate classification of a tile
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    Display,
    PartialEq,
    Eq,
    Hash,
)]
pub enum BiomeKind {
    Coast,
    Ocean,
    Tropical,
    Savanna,
    Desert,
    Steppe,
    #[default]
    Temperate,
    Taiga,
    Tundra,
}

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Biome {
    pub kind: BiomeKind,
    /// What a tile in this biome produces before relief, features and
    /// resources are considered
    pub yields: Yields,
}

impl Biome {
    pub fn new(kind: BiomeKind, yields: Yields) -> Self {
        Self { kind, yields }
    }
}

/// Something growing or formed on top of a tile
#[derive(
    Copy,
    Clone,
    Debug,
    Display,
    PartialEq,
    Eq,
    Hash,
)]
pub enum FeatureKind {
    Forest,
    Jungle,
    Marsh,
    Oasis,
    Reef,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Feature {
    pub kind: FeatureKind,
    /// Extra cost to move onto a tile with this feature. Never negative.
    pub movement_cost: f64,
}

impl Feature {
    pub fn new(kind: FeatureKind, movement_cost: f64) -> Self {
        Self {
            kind,
            movement_cost,
        }
    }
}

/// A natural resource that can be found on a tile
#[derive(Clone, Debug, PartialEq)]
pub struct Resource {
    pub name: String,
    /// Extra cost to move onto a tile with this resource. Never negative.
    pub movement_cost: f64,
    pub yields: Yields,
}

/// The output of a tile, per turn
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    PartialEq,
    Eq,
    Add,
    AddAssign,
    Sub,
    SubAssign,
)]
pub struct Yields {
    pub food: i32,
    pub wealth: i32,
    pub military: i32,
    pub culture: i32,
    pub science: i32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct City {
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Building {
    pub name: String,
}

/// A civilization. Tiles only care about who owns them and which tiles a
/// people has already searched for resources.
#[derive(Clone, Debug, Default)]
pub struct People {
    pub name: String,
    searched: TilePointSet,
}

impl People {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            searched: TilePointSet::default(),
        }
    }

    pub fn has_searched(&self, position: AxialPoint) -> bool {
        self.searched.contains(&position)
    }

    /// Record a tile as searched. Returns `false` if it already was.
    pub fn mark_searched(&mut self, position: AxialPoint) -> bool {
        self.searched.insert(position)
    }
}
