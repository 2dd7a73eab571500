//! The contract between the grid and path search. The grid doesn't search for
//! paths itself; it only exposes what a search needs to know about each tile.
//! A search (A* or similar) is written against these traits and can run over
//! any tile type that implements them.

/// A node in a path search. Implemented for
/// [TileRef](crate::TileRef), which is the only way to get a tile that knows
/// its neighbors.
pub trait PathTile: Sized {
    type Neighbors: Iterator<Item = Self>;

    /// Every node that can be reached from this one in a single step
    fn neighbors(&self) -> Self::Neighbors;

    /// Cost to move onto this node, before any unit rules are applied
    fn entry_cost(&self) -> f64;

    /// Heuristic cost of getting from this node to `other`
    fn cost_estimate(&self, other: &Self) -> f64;

    /// Total path cost after stepping from `source` onto this node, given the
    /// cost of the path so far. The unit decides the actual rules; see
    /// [PathUnit::aggregate_turns_to_enter_tile].
    fn aggregate_cost_to_enter<U: PathUnit<Self> + ?Sized>(
        &self,
        cost_so_far: f64,
        source: &Self,
        unit: &U,
    ) -> f64 {
        unit.aggregate_turns_to_enter_tile(source, self, cost_so_far)
    }
}

/// Anything that moves across [PathTile]s, and so decides what a step costs.
pub trait PathUnit<T> {
    /// Total cost of the path after moving from `source` onto `dest`, where
    /// `cost_so_far` is the cost of the path up to `source`. An impassable
    /// step returns [f64::INFINITY]. The result is never less than
    /// `cost_so_far`.
    fn aggregate_turns_to_enter_tile(
        &self,
        source: &T,
        dest: &T,
        cost_so_far: f64,
    ) -> f64;
}
