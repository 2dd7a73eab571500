mod seed;

pub use self::seed::Seed;
use crate::world::hex::AxialPoint;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Configuration that defines a map. Two maps created from the same config
/// are always identical.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct MapConfig {
    /// RNG seed for everything random about the map. See [Seed] for the
    /// accepted formats.
    pub seed: Seed,

    /// Number of columns. The map wraps horizontally, so this is also the
    /// period of the wrap.
    #[validate(range(min = 1, max = 10000))]
    pub columns: u16,

    /// Number of rows. Rows don't wrap.
    #[validate(range(min = 1, max = 10000))]
    pub rows: u16,

    /// Rivers to lay down along tile boundaries when the map is created
    pub rivers: Vec<RiverConfig>,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            seed: Seed::random(),
            columns: 40,
            rows: 20,
            rivers: Vec::new(),
        }
    }
}

/// A river, defined as the tile boundaries it runs along. Each boundary is
/// given as the pair of adjacent tiles on either side of it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RiverConfig {
    pub name: String,
    pub edges: Vec<[AxialPoint; 2]>,
}
