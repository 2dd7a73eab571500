//! Distance math on a map that wraps horizontally. Every function here takes
//! the map's column count, because that's the period of the wrap.

use crate::world::hex::{
    geometry::{mirrored_position, position},
    AxialPoint,
};
use nalgebra::Vector3;

/// Number of steps between two tiles in a map of `columns` columns. This is
/// the standard cube distance, except that the `q` and `s` deltas wrap around
/// the map seam when going the other way is shorter. The `r` delta never
/// wraps.
///
/// Each delta on its own always ends up as the shorter of its two directions,
/// for odd widths too. The `q` and `s` deltas are wrapped independently,
/// though, so on very narrow maps they can describe a move that no real path
/// matches and the distance comes out shorter than any route. In 3 columns,
/// `(0, 0)` and `(1, 1)` are 1 step apart even though they aren't adjacent.
pub fn grid_distance(a: AxialPoint, b: AxialPoint, columns: u16) -> usize {
    let columns = i32::from(columns);
    let wrap = |delta: i32| {
        if delta > columns / 2 {
            columns - delta
        } else {
            delta
        }
    };

    let dq = wrap((i32::from(a.q()) - i32::from(b.q())).abs());
    let dr = (i32::from(a.r()) - i32::from(b.r())).abs();
    let ds = wrap((i32::from(a.s()) - i32::from(b.s())).abs());

    // dr is never negative, so neither is the max
    dq.max(dr).max(ds) as usize
}

/// World-space displacement from `a` to `b`, taking the shortest way across
/// the map seam. Three candidates are compared: primary to primary, `a`'s
/// primary to `b`'s mirror, and `a`'s mirror to `b`'s primary. The shortest
/// one wins; on ties the earlier candidate in that order is kept.
///
/// The result is never longer than the plain primary-to-primary
/// displacement.
pub fn world_distance(
    a: AxialPoint,
    b: AxialPoint,
    columns: u16,
) -> Vector3<f64> {
    let a_position = position(a);
    let b_position = position(b);
    let direct = b_position - a_position;

    [
        mirrored_position(b, columns) - a_position,
        b_position - mirrored_position(a, columns),
    ]
    .into_iter()
    .fold(direct, |best, candidate| {
        if candidate.norm() < best.norm() {
            candidate
        } else {
            best
        }
    })
}

/// Heuristic cost of traveling from `a` to `b`, used to guide path search.
/// This is half the grid distance. Under-estimating makes the search explore
/// more candidates, in exchange for finding routes with a lower total cost
/// rather than just fewer hops.
pub fn cost_estimate(a: AxialPoint, b: AxialPoint, columns: u16) -> f64 {
    0.5 * grid_distance(a, b, columns) as f64
}
