//! The point type that identifies every tile in a map. See the parent module
//! documentation for a description of the coordinate system.

use crate::world::hex::HexDirection;
use anyhow::{anyhow, Context};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::IntoEnumIterator;

/// A point in the hex grid that refers to a whole tile (via its center).
///
/// ## Implementation
///
/// Every point satisfies `q + r + s = 0`, so this struct only stores `q` and
/// `r` and derives `s` as needed. Equality, ordering and hashing all consider
/// `(q, r)` only, which is all the identity a point has.
///
/// The components are stored as `i16`s. Maps are capped well below 32k
/// columns/rows, so this saves a lot on memory for large maps.
#[derive(
    Copy,
    Clone,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    Serialize,
    Deserialize,
)]
#[display(fmt = "({}, {}, {})", "self.q()", "self.r()", "self.s()")]
pub struct AxialPoint {
    q: i16,
    r: i16,
}

impl AxialPoint {
    pub const ORIGIN: Self = Self::new(0, 0);

    /// Construct a new point from its column (`q`) and row (`r`). The third
    /// component is derived, since `q + r + s = 0` for all points.
    pub const fn new(q: i16, r: i16) -> Self {
        Self { q, r }
    }

    /// Construct a new point from `q` and `s`, deriving `r`.
    pub const fn new_qs(q: i16, s: i16) -> Self {
        Self::new(q, -q - s)
    }

    /// The column component
    pub const fn q(self) -> i16 {
        self.q
    }

    /// The row component
    pub const fn r(self) -> i16 {
        self.r
    }

    /// The derived third component, `-(q + r)`
    pub const fn s(self) -> i16 {
        -(self.q + self.r)
    }

    /// Get the location of the tile adjacent to this one in a direction. This
    /// knows nothing about map bounds or wrapping, so the result may not
    /// exist in any particular map.
    pub fn adjacent(self, direction: HexDirection) -> Self {
        let (dq, dr) = direction.offset();
        Self::new(self.q + dq, self.r + dr)
    }

    /// Get an iterator of all the points directly adjacent to this one. The
    /// iterator will always contain exactly 6 values.
    pub fn adjacents(self) -> impl Iterator<Item = AxialPoint> {
        HexDirection::iter().map(move |dir| self.adjacent(dir))
    }

    /// Number of steps between two points on an unbounded, non-wrapping
    /// plane. For distance within a map (which wraps horizontally) use
    /// [grid_distance](crate::grid_distance) instead.
    pub fn distance_to(self, other: AxialPoint) -> usize {
        // https://www.redblobgames.com/grids/hexagons/#distances
        let dq = (i32::from(self.q) - i32::from(other.q)).abs();
        let dr = (i32::from(self.r) - i32::from(other.r)).abs();
        let ds = (i32::from(self.s()) - i32::from(other.s())).abs();
        dq.max(dr).max(ds) as usize
    }
}

// Parse "q,r", which is how points are written on the command line
impl FromStr for AxialPoint {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (q, r) = s
            .split_once(',')
            .ok_or_else(|| anyhow!("expected a point as `q,r`, got {:?}", s))?;
        let q = q
            .trim()
            .parse()
            .with_context(|| format!("invalid q component in {:?}", s))?;
        let r = r
            .trim()
            .parse()
            .with_context(|| format!("invalid r component in {:?}", s))?;
        Ok(Self::new(q, r))
    }
}

impl TryFrom<(i32, i32)> for AxialPoint {
    type Error = anyhow::Error;

    fn try_from((q, r): (i32, i32)) -> Result<Self, Self::Error> {
        let q = i16::try_from(q)
            .with_context(|| format!("q component {} out of range", q))?;
        let r = i16::try_from(r)
            .with_context(|| format!("r component {} out of range", r))?;
        Ok(Self::new(q, r))
    }
}
